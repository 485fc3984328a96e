use crate::StressTensor;
use serde::{Deserialize, Serialize};
use std::f64::consts::SQRT_2;

/// Holds the Walker-style mean/alternating equivalent stresses of a load cycle
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct WalkerStress {
    /// Holds the signed equivalent stress of the mean (steady) components
    pub mean: f64,

    /// Holds the signed equivalent stress of the alternating components
    pub alternating: f64,
}

/// Calculates the unsigned Mises-type equivalent of six stress components
///
/// ```text
/// m = sqrt((x-y)² + (y-z)² + (z-x)² + 6·(xy² + yz² + zx²))
/// ```
///
/// Note that m = √2 times the Huber stress of the same components.
fn calc_mises(x: f64, y: f64, z: f64, xy: f64, yz: f64, zx: f64) -> f64 {
    let normal = (x - y) * (x - y) + (y - z) * (y - z) + (z - x) * (z - x);
    let shear = xy * xy + yz * yz + zx * zx;
    f64::sqrt(normal + 6.0 * shear)
}

/// Calculates the signed Mises-type equivalent of six stress components
///
/// The magnitude is `(√2/2)·calc_mises`, i.e., the Huber stress of the
/// components. The sign follows the hydrostatic trace `x + y + z`: negative
/// trace yields a compressive (negative) equivalent, while a zero or positive
/// trace yields a positive one, so pure-shear states keep their magnitude.
fn signed_equivalent(x: f64, y: f64, z: f64, xy: f64, yz: f64, zx: f64) -> f64 {
    let sign = if x + y + z < 0.0 { -1.0 } else { 1.0 };
    sign * 0.5 * SQRT_2 * calc_mises(x, y, z, xy, yz, zx)
}

impl StressTensor {
    /// Calculates the Walker-style mean/alternating decomposition of a cycle
    ///
    /// `self` and `other` are the two extremes of a cyclic load (e.g., the
    /// max and min states of a load cycle). Each of the six components is
    /// split into a mean part `(a + b)/2` and an alternating part `(a - b)/2`
    /// and both sets are reduced to a signed equivalent stress.
    ///
    /// Calling this with two identical tensors yields a zero alternating
    /// equivalent.
    pub fn calculate_walker(&self, other: &StressTensor) -> WalkerStress {
        let a = self.vector();
        let b = other.vector();
        let sm = (a + b) / 2.0;
        let sa = (a - b) / 2.0;
        WalkerStress {
            mean: signed_equivalent(sm[0], sm[1], sm[2], sm[3], sm[4], sm[5]),
            alternating: signed_equivalent(sa[0], sa[1], sa[2], sa[3], sa[4], sa[5]),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::StressTensor;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identical_extremes_yield_zero_alternating() {
        let sigma = StressTensor::new(120.0, -45.0, 80.0, 15.0, -7.5, 33.0);
        let walker = sigma.calculate_walker(&sigma);
        assert_abs_diff_eq!(walker.alternating, 0.0, epsilon = 1e-15);
        // the mean equivalent of a steady state is its Huber stress
        assert_abs_diff_eq!(walker.mean, sigma.huber_stress(), epsilon = 1e-12);
    }

    #[test]
    fn pulsating_uniaxial_cycle_works() {
        // 0 to 100 pulsating tension: mean = alternating = 50
        let max = StressTensor::new(100.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let min = StressTensor::zero();
        let walker = max.calculate_walker(&min);
        assert_abs_diff_eq!(walker.mean, 50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(walker.alternating, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn fully_reversed_uniaxial_cycle_works() {
        // -100 to 100: zero mean, alternating = 100
        let max = StressTensor::new(100.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let min = StressTensor::new(-100.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let walker = max.calculate_walker(&min);
        assert_abs_diff_eq!(walker.mean, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(walker.alternating, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn compressive_cycle_yields_negative_sign() {
        // 0 to -100 pulsating compression: negative trace flips both signs
        let max = StressTensor::zero();
        let min = StressTensor::new(-100.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let walker = min.calculate_walker(&max);
        assert_abs_diff_eq!(walker.mean, -50.0, epsilon = 1e-12);
        assert_abs_diff_eq!(walker.alternating, -50.0, epsilon = 1e-12);
    }

    #[test]
    fn steady_pure_shear_keeps_positive_magnitude() {
        // traceless mean state must not be zeroed by the sign convention
        let tau = 50.0;
        let sigma = StressTensor::new(0.0, 0.0, 0.0, tau, 0.0, 0.0);
        let walker = sigma.calculate_walker(&sigma);
        assert_abs_diff_eq!(walker.mean, tau * f64::sqrt(3.0), epsilon = 1e-12);
        assert_abs_diff_eq!(walker.alternating, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn combined_bending_and_torsion_cycle_works() {
        // cyclic bending (−100 to 200) with steady torsion (50)
        let max = StressTensor::new(200.0, 0.0, 0.0, 50.0, 0.0, 0.0);
        let min = StressTensor::new(-100.0, 0.0, 0.0, 50.0, 0.0, 0.0);
        let walker = max.calculate_walker(&min);
        // mean components (50, 0, 0, 50, 0, 0): sqrt(50² + 3·50²) = 100
        assert_abs_diff_eq!(walker.mean, 100.0, epsilon = 1e-12);
        // alternating components (150, 0, 0, 0, 0, 0)
        assert_abs_diff_eq!(walker.alternating, 150.0, epsilon = 1e-12);
    }
}
