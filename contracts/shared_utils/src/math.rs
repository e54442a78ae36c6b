//! Checked arithmetic helpers for amount accounting
//!
//! All token amounts are `i128`. Every multiply goes through a checked path;
//! callers map a `None` to their own overflow error instead of wrapping or
//! trapping in the host.

/// Computes `a * b / d` with floor rounding.
///
/// Returns `None` when the intermediate product overflows `i128` or when
/// `d == 0`. Inputs are expected to be non-negative; a negative result is
/// never produced for non-negative inputs.
pub fn mul_div_floor(a: i128, b: i128, d: i128) -> Option<i128> {
    if d == 0 {
        return None;
    }
    a.checked_mul(b)?.checked_div(d)
}

/// Scales `amount` by the fraction `ppm / 1_000_000` (parts per million),
/// floor rounded. Allocation shares are tracked in ppm.
pub fn ppm_share(amount: i128, ppm: i128) -> Option<i128> {
    mul_div_floor(amount, ppm, 1_000_000)
}
