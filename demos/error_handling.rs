//! Error Handling Demonstration
//!
//! Every fallible simdwide operation returns a `SimdError` instead of
//! panicking. This walks through each variant and how to react to it.

use simdwide::prelude::*;
use simdwide::simd::capability;
use simdwide::simd::ElementKind;

fn main() {
    println!("simdwide error handling demonstration\n");

    println!("Example 1: Loading from a short slice");
    let short = [1.0f32, 2.0, 3.0];
    match Vector512::<f32>::from_slice(&short) {
        Ok(v) => println!("   Unexpected success: {v}"),
        Err(SimdError::InsufficientLength { required, actual }) => {
            println!("   Need {required} elements, slice has {actual}");
        }
        Err(e) => println!("   Other error: {e}"),
    }
    println!();

    println!("Example 2: Reading a lane past the end");
    let v = Vector512::<u64>::create_sequence(10, 10);
    match v.get_element(8) {
        Ok(lane) => println!("   Unexpected lane: {lane}"),
        Err(e @ SimdError::IndexOutOfRange { .. }) => println!("   Error caught: {e}"),
        Err(e) => println!("   Other error: {e}"),
    }
    println!("   Fallback with unwrap_or: {}", v.get_element(8).unwrap_or(0));
    println!();

    println!("Example 3: Aligned load from a misaligned slice");
    let backing = [Vector512::<f32>::splat(1.0); 2];
    let lanes: &[f32] = bytemuck::cast_slice(&backing);
    match Vector512::<f32>::load_aligned_from(&lanes[1..]) {
        Ok(v) => println!("   Unexpected success: {v}"),
        Err(SimdError::Misalignment { address, alignment }) => {
            println!("   Address {address:#x} is not {alignment}-byte aligned");
        }
        Err(e) => println!("   Other error: {e}"),
    }
    match Vector512::<f32>::load_aligned_from(lanes) {
        Ok(v) => println!("   Aligned start loads fine: sum = {}", v.sum()),
        Err(e) => println!("   Error: {e}"),
    }
    println!();

    println!("Example 4: Slice kernels with mismatched lengths");
    let a = vec![1.0f64; 100];
    let b = vec![2.0f64; 99];
    match a.simd_dot(&b) {
        Ok(dot) => println!("   Unexpected dot: {dot}"),
        Err(SimdError::LengthMismatch { left, right }) => {
            println!("   Left has {left} elements, right has {right}");
        }
        Err(e) => println!("   Other error: {e}"),
    }
    println!();

    println!("Example 5: Parsing element type names");
    for name in ["f32", "i16", "u128", "float"] {
        match name.parse::<ElementKind>() {
            Ok(kind) => println!("   {name:>5} -> {kind:?}"),
            Err(SimdError::UnsupportedElementType { type_name }) => {
                println!("   {name:>5} -> unsupported ({type_name})");
            }
            Err(e) => println!("   {name:>5} -> {e}"),
        }
    }
    println!();

    println!("Example 6: Requiring hardware acceleration");
    for width in [VectorWidth::W128, VectorWidth::W256, VectorWidth::W512] {
        match capability::require(width) {
            Ok(()) => println!("   {width}: available"),
            Err(SimdError::PlatformNotSupported { width }) => {
                println!("   {width}: decomposed into halves on this machine");
            }
            Err(e) => println!("   {width}: {e}"),
        }
    }
}
