//! Vector512 Walkthrough
//!
//! Builds 512-bit vectors, runs elementwise math, reductions, shuffles and
//! conversions on them, and shows that the decomposed path agrees with the
//! full-width one.

use simdwide::prelude::*;
use simdwide::simd::capability::{self, with_dispatch_path, DispatchPath};

fn main() -> Result<()> {
    println!("simdwide Vector512 walkthrough\n");

    println!("Example 1: Platform capabilities");
    let caps = capability::capabilities();
    for width in [VectorWidth::W128, VectorWidth::W256, VectorWidth::W512] {
        println!("   {width}: accelerated = {}", caps.supports(width));
    }
    println!("   fused multiply-add: {}", caps.fma);
    println!("   forced software: {}", caps.forced_software);
    println!();

    println!("Example 2: Construction");
    let ramp = Vector512::<f32>::create_sequence(0.0, 0.5);
    let twos = Vector512::<f32>::splat(2.0);
    let data: Vec<f32> = (0..20).map(|i| i as f32).collect();
    let loaded = Vector512::<f32>::from_slice_at(&data, 4)?;
    println!("   ramp   = {ramp}");
    println!("   loaded = {loaded}");
    println!("   lanes  = {}", Vector512::<f32>::COUNT);
    println!();

    println!("Example 3: Elementwise arithmetic");
    let scaled = ramp * twos;
    let fused = ramp.fused_multiply_add(twos, loaded);
    println!("   ramp * 2         = {scaled}");
    println!("   ramp * 2 + data  = {fused}");
    println!("   sqrt(loaded)     = {}", loaded.sqrt());
    println!();

    println!("Example 4: Reductions");
    println!("   sum(ramp)        = {}", ramp.sum());
    println!("   dot(ramp, twos)  = {}", ramp.dot(twos));
    println!("   index_of(3.5)    = {:?}", ramp.index_of(3.5));
    println!("   any lane > 7.0   = {}", ramp.greater_than_any(Vector512::splat(7.0)));
    println!();

    println!("Example 5: Shuffle with out-of-range lanes");
    let indices = Vector512::<i32>::from([15, 14, 13, 12, 16, -1, 0, 1, 2, 3, 99, 4, 5, 6, 7, 8]);
    println!("   indices  = {indices}");
    println!("   shuffled = {}", ramp.shuffle(indices));
    println!();

    println!("Example 6: Conversions");
    let mixed = Vector512::<f32>::from([
        -1.5,
        2.7,
        f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        1e10,
        0.5,
        -0.5,
        3.0,
        4.0,
        5.0,
        6.0,
        7.0,
        8.0,
        9.0,
        10.0,
    ]);
    println!("   saturating to i32 = {}", mixed.convert_to_i32());
    println!("   bits as u32       = {:?}", &mixed.as_u32().to_vec()[..4]);
    println!();

    println!("Example 7: Both dispatch paths agree");
    let fast = with_dispatch_path(DispatchPath::Accelerated, || (ramp.sin(), ramp.sum()));
    let slow = with_dispatch_path(DispatchPath::Decomposed, || (ramp.sin(), ramp.sum()));
    println!("   sin agrees: {}", fast.0.as_u32() == slow.0.as_u32());
    println!("   sum agrees: {}", fast.1.to_bits() == slow.1.to_bits());
    println!();

    println!("Example 8: Slices of any length");
    let long: Vec<f64> = (0..1_000).map(|i| i as f64 * 0.25).collect();
    println!("   simd_sum     = {}", long.simd_sum());
    println!("   par_simd_sum = {}", long.par_simd_sum());
    println!("   simd_dot     = {}", long.simd_dot(&long)?);

    Ok(())
}
