//! Double-precision lane kernels for the transcendental functions.
//!
//! Each kernel is a pure function of its lane, so a whole-width vector and its
//! two half-width halves produce bit-identical results. Single precision calls
//! these kernels with the argument widened and rounds the result once.
//!
//! # Techniques
//!
//! - **sin / cos**: Cody-Waite reduction by π/2 with a three-part constant,
//!   then minimax polynomials on `[-π/4, π/4]`. Arguments beyond
//!   [`TRIG_REDUCTION_LIMIT`] fall back to the scalar library routine.
//! - **exp**: reduction by `ln 2` with a two-part constant, a rational
//!   approximation on `[-ln2/2, ln2/2]` and exact scaling by `2^k`.
//! - **log / log2**: mantissa reduction to `[√2/2, √2]` and a polynomial in
//!   `s = f / (2 + f)`.
//! - **hypot**: scaled by the larger magnitude to avoid overflow.
//!
//! Accuracy is within 2 ULP of the correctly rounded result over the reduced
//! domains.

/// Largest |x| reduced with the three-part π/2 constant.
pub const TRIG_REDUCTION_LIMIT: f64 = 1.0e5;

const FRAC_2_PI: f64 = std::f64::consts::FRAC_2_PI;

// π/2 split into 33-bit pieces; `n * PIO2_k` is exact for |n| < 2^20.
const PIO2_1: f64 = 1.570_796_326_734_125_614_17e+00;
const PIO2_2: f64 = 6.077_100_506_303_965_976_60e-11;
const PIO2_3: f64 = 2.022_266_248_711_166_455_80e-21;

const S1: f64 = -1.666_666_666_666_663_243_48e-01;
const S2: f64 = 8.333_333_333_322_489_461_24e-03;
const S3: f64 = -1.984_126_982_985_794_931_34e-04;
const S4: f64 = 2.755_731_370_707_006_767_89e-06;
const S5: f64 = -2.505_076_025_340_686_341_95e-08;
const S6: f64 = 1.589_690_995_211_550_102_21e-10;

const C1: f64 = 4.166_666_666_666_660_190_37e-02;
const C2: f64 = -1.388_888_888_887_410_957_49e-03;
const C3: f64 = 2.480_158_728_947_672_941_78e-05;
const C4: f64 = -2.755_731_435_139_066_330_35e-07;
const C5: f64 = 2.087_572_321_298_174_827_90e-09;
const C6: f64 = -1.135_964_755_778_819_482_65e-11;

const LN2_HI: f64 = 6.931_471_803_691_238_164_90e-01;
const LN2_LO: f64 = 1.908_214_929_270_587_700_02e-10;
const LOG2_E: f64 = std::f64::consts::LOG2_E;

const EXP_OVERFLOW: f64 = 709.782_712_893_384;
const EXP_UNDERFLOW: f64 = -745.133_219_101_941_2;

const P1: f64 = 1.666_666_666_666_660_190_37e-01;
const P2: f64 = -2.777_777_777_701_559_338_42e-03;
const P3: f64 = 6.613_756_321_437_934_361_17e-05;
const P4: f64 = -1.653_390_220_546_525_153_90e-06;
const P5: f64 = 4.138_136_797_057_238_460_39e-08;

const LG1: f64 = 6.666_666_666_666_735_130e-01;
const LG2: f64 = 3.999_999_999_940_941_908e-01;
const LG3: f64 = 2.857_142_874_366_239_149e-01;
const LG4: f64 = 2.222_219_843_214_978_396e-01;
const LG5: f64 = 1.818_357_216_161_805_012e-01;
const LG6: f64 = 1.531_383_769_920_937_332e-01;
const LG7: f64 = 1.479_819_860_511_658_591e-01;

const IVLN2_HI: f64 = 1.442_695_040_721_446_275_71e+00;
const IVLN2_LO: f64 = 1.675_171_316_488_651_183_53e-10;

const TWO_54: f64 = 18_014_398_509_481_984.0;

// Below 2^-27, sin(x) rounds to x and cos(x) rounds to 1.
const TRIG_TINY: f64 = 7.450_580_596_923_828e-9;

/// sin(r) for |r| <= π/4.
#[inline(always)]
fn kernel_sin(r: f64) -> f64 {
    let z = r * r;
    let v = z * r;
    let p = S2 + z * (S3 + z * (S4 + z * (S5 + z * S6)));
    r + v * (S1 + z * p)
}

/// cos(r) for |r| <= π/4.
#[inline(always)]
fn kernel_cos(r: f64) -> f64 {
    let z = r * r;
    let p = z * (C1 + z * (C2 + z * (C3 + z * (C4 + z * (C5 + z * C6)))));
    let hz = 0.5 * z;
    let w = 1.0 - hz;
    w + (((1.0 - w) - hz) + z * p)
}

/// Returns the quadrant (mod 4) and the reduced argument.
#[inline(always)]
fn reduce_pio2(x: f64) -> (i64, f64) {
    let n = (x * FRAC_2_PI).round_ties_even();
    let r = ((x - n * PIO2_1) - n * PIO2_2) - n * PIO2_3;
    ((n as i64) & 3, r)
}

/// Sine.
#[inline]
pub fn sin(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if x.abs() > TRIG_REDUCTION_LIMIT {
        return x.sin();
    }
    if x.abs() < TRIG_TINY {
        return x;
    }
    let (quadrant, r) = reduce_pio2(x);
    match quadrant {
        0 => kernel_sin(r),
        1 => kernel_cos(r),
        2 => -kernel_sin(r),
        _ => -kernel_cos(r),
    }
}

/// Cosine.
#[inline]
pub fn cos(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if x.abs() > TRIG_REDUCTION_LIMIT {
        return x.cos();
    }
    if x.abs() < TRIG_TINY {
        return 1.0;
    }
    let (quadrant, r) = reduce_pio2(x);
    match quadrant {
        0 => kernel_cos(r),
        1 => -kernel_sin(r),
        2 => -kernel_cos(r),
        _ => kernel_sin(r),
    }
}

/// `2^k` for `k` in the normal exponent range.
#[inline(always)]
fn pow2(k: i32) -> f64 {
    f64::from_bits(((k + 1023) as u64) << 52)
}

/// `y * 2^k` without intermediate overflow or premature underflow.
#[inline(always)]
fn scale(y: f64, k: i32) -> f64 {
    if k > 1023 {
        y * pow2(1023) * pow2(k - 1023)
    } else if k < -1022 {
        y * pow2(k + 1000) * pow2(-1000)
    } else {
        y * pow2(k)
    }
}

/// Natural exponential.
#[inline]
pub fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > EXP_OVERFLOW {
        return f64::INFINITY;
    }
    if x < EXP_UNDERFLOW {
        return 0.0;
    }

    let k = (x * LOG2_E).round_ties_even();
    let hi = x - k * LN2_HI;
    let lo = k * LN2_LO;
    let r = hi - lo;

    let t = r * r;
    let c = r - t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))));
    let y = 1.0 - ((lo - (r * c) / (2.0 - c)) - hi);

    scale(y, k as i32)
}

/// Shared reduction for `log` and `log2`.
///
/// Writes `x = 2^k * (1 + f)` with `1 + f` in `[√2/2, √2]` and returns
/// `(k, f, hfsq, s * (hfsq + R(s²)))`.
#[inline(always)]
fn log_reduce(x: f64) -> (f64, f64, f64, f64) {
    let mut bits = x.to_bits();
    let mut k: i32 = 0;

    if bits < (1u64 << 52) {
        k -= 54;
        bits = (x * TWO_54).to_bits();
    }

    let mut hx = (bits >> 32) as u32;
    hx += 0x3ff0_0000 - 0x3fe6_a09e;
    k += (hx >> 20) as i32 - 0x3ff;
    hx = (hx & 0x000f_ffff) + 0x3fe6_a09e;
    bits = ((hx as u64) << 32) | (bits & 0xffff_ffff);

    let f = f64::from_bits(bits) - 1.0;
    let hfsq = 0.5 * f * f;
    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * (LG2 + w * (LG4 + w * LG6));
    let t2 = z * (LG1 + w * (LG3 + w * (LG5 + w * LG7)));

    (k as f64, f, hfsq, s * (hfsq + t1 + t2))
}

/// Handles the arguments where the logarithm is not computed by reduction.
#[inline(always)]
fn log_special(x: f64) -> Option<f64> {
    if x.is_nan() || x == f64::INFINITY {
        Some(x)
    } else if x == 0.0 {
        Some(f64::NEG_INFINITY)
    } else if x < 0.0 {
        Some(f64::NAN)
    } else {
        None
    }
}

/// Natural logarithm.
#[inline]
pub fn log(x: f64) -> f64 {
    if let Some(special) = log_special(x) {
        return special;
    }
    let (dk, f, hfsq, tail) = log_reduce(x);
    tail + dk * LN2_LO - hfsq + f + dk * LN2_HI
}

/// Base-2 logarithm. Exact for powers of two.
#[inline]
pub fn log2(x: f64) -> f64 {
    if let Some(special) = log_special(x) {
        return special;
    }
    let (dk, f, hfsq, tail) = log_reduce(x);

    // Split f - hfsq so the high part multiplies exactly.
    let hi = f64::from_bits((f - hfsq).to_bits() & (u64::MAX << 32));
    let lo = f - hi - hfsq + tail;

    let mut val_hi = hi * IVLN2_HI;
    let mut val_lo = (lo + hi) * IVLN2_LO + lo * IVLN2_HI;

    let w = dk + val_hi;
    val_lo += (dk - w) + val_hi;
    val_hi = w;

    val_lo + val_hi
}

/// `sqrt(x² + y²)` without undue overflow or underflow.
#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    let (ax, ay) = (x.abs(), y.abs());
    if ax == f64::INFINITY || ay == f64::INFINITY {
        return f64::INFINITY;
    }
    if ax.is_nan() || ay.is_nan() {
        return f64::NAN;
    }

    let (big, small) = if ax >= ay { (ax, ay) } else { (ay, ax) };
    if big == 0.0 {
        return 0.0;
    }
    let ratio = small / big;
    big * ratio.mul_add(ratio, 1.0).sqrt()
}
