/// Smallest difference two scores may have and still be told apart.
pub const EPSILON: f64 = 1e-8;

/// Approximate equality with the crate-wide [`EPSILON`].
#[inline]
pub fn float_equals(a: f64, b: f64) -> bool {
    float_equals_eps(a, b, EPSILON)
}

/// Approximate equality with an explicit threshold.
/// Both signed differences must stay below `eps`.
#[inline]
pub fn float_equals_eps(a: f64, b: f64, eps: f64) -> bool {
    (a - b) < eps && (b - a) < eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_value_is_equal() {
        let third = 1.0 / 3.0;
        assert!(float_equals(third, third));
        assert!(float_equals(1.0 / 3.0, 1.0 / 3.0));
    }

    #[test]
    fn different_values_are_not_equal() {
        assert!(!float_equals(1.0 / 3.0, 1.0 / 5.0));
        assert!(!float_equals(1.0 / 5.0, 1.0 / 3.0));
    }

    #[test]
    fn sub_epsilon_difference_is_equal() {
        #[allow(clippy::excessive_precision)]
        let a = 0.3333333333333333333333333_f64;
        let b = 0.33333333333333_f64;
        assert!(float_equals(a, b));
        assert!(float_equals(0.5, 0.5 + EPSILON / 2.0));
        assert!(!float_equals(0.5, 0.5 + EPSILON * 2.0));
    }

    #[test]
    fn custom_threshold() {
        assert!(float_equals_eps(1.0, 1.05, 0.1));
        assert!(!float_equals_eps(1.0, 1.2, 0.1));
    }
}
