//! Property-based tests: the half-width decomposition and the scalar
//! definitions must agree on every input.

use proptest::prelude::*;
use simdwide::prelude::{
    Composite, SimdConvert, SimdOps, SimdReduce, SimdShuffle, SimdVector, Vector512,
};
use simdwide::simd::capability::{with_dispatch_path, DispatchPath};

fn bits(v: Vector512<f32>) -> Vec<u32> {
    v.as_slice().iter().map(|x| x.to_bits()).collect()
}

fn vector_f32(lanes: &[f32]) -> Vector512<f32> {
    Vector512::from_slice(lanes).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn float_ops_match_their_halves(
        a in prop::collection::vec(any::<f32>(), 16),
        b in prop::collection::vec(any::<f32>(), 16),
    ) {
        let (a, b) = (vector_f32(&a), vector_f32(&b));

        let halves = Vector512::from_halves(a.lower() / b.lower(), a.upper() / b.upper());
        for path in [DispatchPath::Accelerated, DispatchPath::Decomposed] {
            let whole = with_dispatch_path(path, || a.divide(b));
            prop_assert_eq!(bits(whole), bits(halves));
        }

        let halves = Vector512::from_halves(a.lower().max(b.lower()), a.upper().max(b.upper()));
        for path in [DispatchPath::Accelerated, DispatchPath::Decomposed] {
            let whole = with_dispatch_path(path, || a.max(b));
            prop_assert_eq!(bits(whole), bits(halves));
        }

        let indices = a.as_i32();
        let shuffled: Vec<_> = [DispatchPath::Accelerated, DispatchPath::Decomposed]
            .into_iter()
            .map(|path| bits(with_dispatch_path(path, || b.shuffle(indices))))
            .collect();
        prop_assert_eq!(&shuffled[0], &shuffled[1]);
    }

    #[test]
    fn float_sum_is_path_independent(a in prop::collection::vec(-1e30f32..1e30, 16)) {
        let v = vector_f32(&a);
        let fast = with_dispatch_path(DispatchPath::Accelerated, || v.sum());
        let slow = with_dispatch_path(DispatchPath::Decomposed, || v.sum());
        prop_assert_eq!(fast.to_bits(), slow.to_bits());
        prop_assert_eq!(fast.to_bits(), (v.lower().sum() + v.upper().sum()).to_bits());
    }

    #[test]
    fn integer_add_wraps_like_scalar(
        a in prop::collection::vec(any::<i32>(), 16),
        b in prop::collection::vec(any::<i32>(), 16),
    ) {
        let va = Vector512::<i32>::from_slice(&a).unwrap();
        let vb = Vector512::<i32>::from_slice(&b).unwrap();
        let sum = (va + vb).to_vec();
        let saturated = va.add_saturate(vb).to_vec();
        for k in 0..16 {
            prop_assert_eq!(sum[k], a[k].wrapping_add(b[k]));
            prop_assert_eq!(saturated[k], a[k].saturating_add(b[k]));
        }
    }

    #[test]
    fn shuffle_zero_fills_out_of_range(indices in prop::collection::vec(any::<u16>(), 32)) {
        let source = Vector512::<u16>::create_sequence(1, 1);
        let idx = Vector512::<u16>::from_slice(&indices).unwrap();
        let out = source.shuffle(idx).to_vec();
        for (k, &i) in indices.iter().enumerate() {
            let expected = if (i as usize) < 32 { i + 1 } else { 0 };
            prop_assert_eq!(out[k], expected);
        }
    }

    #[test]
    fn widen_then_narrow_round_trips(a in prop::collection::vec(any::<i16>(), 32)) {
        let v = Vector512::<i16>::from_slice(&a).unwrap();
        let (lower, upper) = v.widen();
        prop_assert_eq!(Vector512::narrow(lower, upper), v);
        prop_assert_eq!(Vector512::narrow_with_saturation(lower, upper), v);
    }

    #[test]
    fn conversion_saturates_like_as_cast(a in prop::collection::vec(any::<f64>(), 8)) {
        let v = Vector512::<f64>::from_slice(&a).unwrap();
        let converted = v.convert_to_i64().to_vec();
        for (k, &x) in a.iter().enumerate() {
            prop_assert_eq!(converted[k], x as i64);
        }
    }
}
