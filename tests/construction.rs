//! Construction, memory and element access tests for `Vector512`.

use simdwide::prelude::*;
use simdwide::simd::ElementKind;

/// A buffer whose start is aligned to a 64-byte boundary.
#[repr(C, align(64))]
struct Aligned<const N: usize>([u8; N]);

#[test]
fn test_splat_and_count_for_every_width() {
    assert_eq!(Vector512::<u8>::COUNT, 64);
    assert_eq!(Vector512::<i16>::COUNT, 32);
    assert_eq!(Vector512::<f32>::COUNT, 16);
    assert_eq!(Vector512::<f64>::COUNT, 8);
    assert_eq!(Vector512::<usize>::COUNT, 64 / std::mem::size_of::<usize>());

    let v = Vector512::<i64>::splat(-3);
    assert!(v.as_slice().iter().all(|&x| x == -3));
    assert_eq!(std::mem::size_of::<Vector512<i64>>(), 64);
    assert_eq!(std::mem::align_of::<Vector512<i64>>(), 64);
}

#[test]
fn test_create_scalar_zero_fills() {
    let v = Vector512::<f64>::create_scalar(7.5);
    assert_eq!(v.to_vec(), vec![7.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

    let unspecified = Vector512::<f64>::create_scalar_unsafe(7.5);
    assert_eq!(unspecified.to_scalar(), 7.5);
}

#[test]
fn test_halves_layout() {
    let v = Vector512::<u32>::create_sequence(0, 1);
    assert_eq!(v.lower().to_vec(), (0..8).collect::<Vec<u32>>());
    assert_eq!(v.upper().to_vec(), (8..16).collect::<Vec<u32>>());
    assert_eq!(v.lower().lower().to_vec(), vec![0, 1, 2, 3]);

    let rebuilt = Vector512::from_halves(v.lower(), v.upper());
    assert_eq!(rebuilt, v);

    let bytes: &[u8] = bytemuck::bytes_of(&v);
    assert_eq!(&bytes[..4], &0u32.to_ne_bytes());
    assert_eq!(&bytes[60..], &15u32.to_ne_bytes());

    let doubled = Vector512::from_vector256(Vector256::<u32>::splat(9));
    assert_eq!(doubled, Vector512::splat(9));
    assert_eq!(
        v.with_upper(Vector256::zero()).upper(),
        Vector256::<u32>::zero()
    );
}

#[test]
fn test_from_slice_errors() {
    let short = vec![1.0f32; 15];
    assert_eq!(
        Vector512::<f32>::from_slice(&short),
        Err(SimdError::InsufficientLength {
            required: 16,
            actual: 15
        })
    );

    let long: Vec<i8> = (0..100).collect();
    let v = Vector512::<i8>::from_slice_at(&long, 36).unwrap();
    assert_eq!(v.to_scalar(), 36);
    assert_eq!(v.get_element(63).unwrap(), 99);
    assert!(matches!(
        Vector512::<i8>::from_slice_at(&long, 37),
        Err(SimdError::InsufficientLength { .. })
    ));
    assert!(matches!(
        Vector512::<i8>::from_slice_at(&long, 100),
        Err(SimdError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_copy_to() {
    let v = Vector512::<u16>::splat(4);
    let mut dest = vec![0u16; 40];
    v.copy_to(&mut dest).unwrap();
    assert!(dest[..32].iter().all(|&x| x == 4));
    assert_eq!(dest[32], 0);

    let mut small = vec![0u16; 31];
    assert!(!v.try_copy_to(&mut small));
    assert!(v.copy_to(&mut small).is_err());
    assert!(small.iter().all(|&x| x == 0));

    assert!(matches!(
        v.copy_to_at(&mut dest, 9),
        Err(SimdError::InsufficientLength { .. })
    ));
    v.copy_to_at(&mut dest, 8).unwrap();
}

#[test]
fn test_element_access() {
    let v = Vector512::<isize>::zero().with_element(3, -1).unwrap();
    assert_eq!(v.get_element(3).unwrap(), -1);
    assert_eq!(
        v.get_element(Vector512::<isize>::COUNT),
        Err(SimdError::IndexOutOfRange {
            index: Vector512::<isize>::COUNT,
            count: Vector512::<isize>::COUNT
        })
    );
    assert!(v.with_element(99, 0).is_err());

    // SAFETY: 3 is in range for every element type.
    let lane = unsafe { v.get_element_unchecked(3) };
    assert_eq!(lane, -1);
}

#[test]
fn test_aligned_load_rejects_one_byte_offset() {
    let storage = Aligned::<128>([0; 128]);
    let base = storage.0.as_ptr();

    // SAFETY: both pointers have 64 readable bytes behind them.
    let aligned = unsafe { Vector512::<u8>::load_aligned(base) };
    assert_eq!(aligned.unwrap(), Vector512::zero());

    let shifted = unsafe { Vector512::<u8>::load_aligned(base.add(1)) };
    assert!(matches!(
        shifted,
        Err(SimdError::Misalignment { alignment: 64, .. })
    ));

    let non_temporal = unsafe { Vector512::<u8>::load_aligned_non_temporal(base.add(1)) };
    assert!(non_temporal.is_err());
}

#[test]
fn test_aligned_store_round_trip() {
    let mut storage = Aligned::<64>([0; 64]);
    let v = Vector512::<u8>::create_sequence(10, 2);
    v.store_aligned_to(&mut storage.0).unwrap();
    assert_eq!(Vector512::<u8>::load_aligned_from(&storage.0).unwrap(), v);
    assert_eq!(storage.0[1], 12);
}

#[test]
fn test_unaligned_load_and_store() {
    let values: Vec<i32> = (0..40).collect();
    // SAFETY: 16 lanes starting at offset 5 lie inside the 40-element buffer.
    let v = unsafe { Vector512::<i32>::load_unsafe(values.as_ptr(), 5) };
    assert_eq!(v.to_scalar(), 5);
    assert_eq!(v.get_element(15).unwrap(), 20);

    let mut out = vec![0i32; 20];
    // SAFETY: `out` has room for 16 lanes at offset 4.
    unsafe { v.store_unsafe(out.as_mut_ptr(), 4) };
    assert_eq!(out[4], 5);
    assert_eq!(out[19], 20);
}

#[test]
fn test_element_kind_gate() {
    assert_eq!(ElementKind::of::<u64>().unwrap(), ElementKind::U64);
    assert!(matches!(
        ElementKind::of::<i128>(),
        Err(SimdError::UnsupportedElementType { .. })
    ));
    assert!("bf16".parse::<ElementKind>().is_err());
}

#[test]
fn test_array_conversions() {
    let v: Vector512<f64> = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0].into();
    let lanes: [f64; 8] = v.into();
    assert_eq!(lanes[7], 8.0);
    assert_eq!(v.to_string(), "<1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0>");
}
