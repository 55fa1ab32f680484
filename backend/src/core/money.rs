//! Monetary rounding
//!
//! All report fields and bonuses go through the same half-up, two-decimal
//! rounding. Totals are accumulated unrounded; this is the single place
//! precision is dropped.

/// Cents per major currency unit
const CENT_SCALE: f64 = 100.0;

/// Relative bias applied before rounding.
///
/// A product like `1.005 * 100.0` lands just below `100.5` in binary
/// floating point and would round down. The bias is far above representation
/// error (~1e-16 relative) and far below half a cent at any realistic
/// monetary magnitude, so it only moves values sitting on the boundary.
const ROUND_BIAS: f64 = 1.0 + 1e-12;

/// Round a monetary amount to 2 decimals, half-up
///
/// Half-cent boundaries round away from zero. Idempotent:
/// `round_money(round_money(x)) == round_money(x)`.
///
/// # Example
/// ```
/// use sales_analytics_core::round_money;
///
/// assert_eq!(round_money(1.005), 1.01);
/// assert_eq!(round_money(40.0), 40.0);
/// assert_eq!(round_money(10.004), 10.0);
/// ```
pub fn round_money(amount: f64) -> f64 {
    (amount * CENT_SCALE * ROUND_BIAS).round() / CENT_SCALE
}
