//! Floating-point error bounds.
//!
//! Conservative bounds for accumulated rounding error in the style of
//! Pharr, Jakob and Humphreys, used by the watertight triangle test.

/// Half an ulp at 1.0: the largest relative rounding error of one operation.
pub const MACHINE_EPSILON: f32 = f32::EPSILON * 0.5;

/// Bound on the relative error of `n` chained floating-point operations.
///
/// `gamma(n) = n * eps / (1 - n * eps)`.
#[inline]
pub fn gamma(n: u32) -> f32 {
    let n = n as f32;
    (n * MACHINE_EPSILON) / (1.0 - n * MACHINE_EPSILON)
}

/// Index of the largest component of `v` (0=X, 1=Y, 2=Z). Pass `v.abs()` to
/// compare magnitudes.
#[inline]
pub fn max_dimension(v: crate::Vec3) -> usize {
    if v.x > v.y {
        if v.x > v.z {
            0
        } else {
            2
        }
    } else if v.y > v.z {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    #[test]
    fn test_gamma_grows_with_n() {
        assert!(gamma(1) > MACHINE_EPSILON);
        assert!(gamma(3) > gamma(2));
        assert!(gamma(7) < 1e-6);
    }

    #[test]
    fn test_max_dimension() {
        assert_eq!(max_dimension(Vec3::new(3.0, 1.0, 2.0)), 0);
        assert_eq!(max_dimension(Vec3::new(1.0, 3.0, 2.0)), 1);
        assert_eq!(max_dimension(Vec3::new(1.0, 2.0, 3.0)), 2);
        assert_eq!(max_dimension(Vec3::new(1.0, 1.0, 1.0)), 2);
    }
}
