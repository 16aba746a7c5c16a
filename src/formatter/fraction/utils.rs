/// Greatest common divisor by the Euclidean algorithm
///
/// Follows the sign of the remainder operator, so the result may be negative
/// for negative inputs. `gcd(a, 0) == a`.
pub(super) fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        // wrapping_rem only differs for i64::MIN % -1, which is 0 anyway
        let r = a.wrapping_rem(b);
        a = b;
        b = r;
    }
    a
}

/// Round to the nearest integer, halves toward positive infinity
pub(crate) fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    // f64::round sends negative halves away from zero
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}
