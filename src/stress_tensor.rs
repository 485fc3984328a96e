use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Matrix3, Vector6};
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Holds the six independent components of a symmetric 3D stress tensor
///
/// The tensor is symmetric by construction; only the six independent
/// components are stored and the full matrix is assembled on demand:
///
/// ```text
/// ┌                ┐
/// │ sx   sxy  szx  │
/// │ sxy  sy   syz  │
/// │ szx  syz  sz   │
/// └                ┘
/// ```
///
/// This is a pure data carrier: construction performs no validation and any
/// real values are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct StressTensor {
    /// Holds the normal stress component σxx
    pub sx: f64,

    /// Holds the normal stress component σyy
    pub sy: f64,

    /// Holds the normal stress component σzz
    pub sz: f64,

    /// Holds the shear stress component σxy
    pub sxy: f64,

    /// Holds the shear stress component σyz
    pub syz: f64,

    /// Holds the shear stress component σzx
    pub szx: f64,
}

impl StressTensor {
    /// Allocates a new instance from the six independent components
    pub fn new(sx: f64, sy: f64, sz: f64, sxy: f64, syz: f64, szx: f64) -> Self {
        StressTensor {
            sx,
            sy,
            sz,
            sxy,
            syz,
            szx,
        }
    }

    /// Allocates a new instance with all components zero
    pub fn zero() -> Self {
        StressTensor::default()
    }

    /// Returns the six components as a vector
    ///
    /// The order is fixed: `[sx, sy, sz, sxy, syz, szx]`
    pub fn vector(&self) -> Vector6<f64> {
        Vector6::new(self.sx, self.sy, self.sz, self.sxy, self.syz, self.szx)
    }

    /// Returns the symmetric 3×3 stress matrix
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.sx, self.sxy, self.szx, //
            self.sxy, self.sy, self.syz, //
            self.szx, self.syz, self.sz,
        )
    }

    /// Calculates the Huber (von Mises) equivalent stress
    ///
    /// ```text
    /// σeq = sqrt(((sx-sy)² + (sy-sz)² + (sz-sx)²)/2 + 3·(sxy² + syz² + szx²))
    /// ```
    ///
    /// The result is always non-negative and vanishes only for a hydrostatic
    /// state, i.e., `sx == sy == sz` with all shear components zero.
    pub fn huber_stress(&self) -> f64 {
        let dx = (self.sx - self.sy) * (self.sx - self.sy);
        let dy = (self.sy - self.sz) * (self.sy - self.sz);
        let dz = (self.sz - self.sx) * (self.sz - self.sx);
        let shear = self.sxy * self.sxy + self.syz * self.syz + self.szx * self.szx;
        f64::sqrt(0.5 * (dx + dy + dz) + 3.0 * shear)
    }

    /// Calculates the hydrostatic mean stress
    ///
    /// ```text
    /// σm = (sx + sy + sz) / 3
    /// ```
    pub fn mean_stress(&self) -> f64 {
        (self.sx + self.sy + self.sz) / 3.0
    }

    /// Applies stress concentration factors component-wise, in place
    ///
    /// Each component is multiplied by its own factor; pass 1.0 to leave a
    /// component unchanged. Factors are not validated.
    ///
    /// # Input
    ///
    /// * `ktx` -- scaling factor for sx
    /// * `kty` -- scaling factor for sy
    /// * `ktz` -- scaling factor for sz
    /// * `ktxy` -- scaling factor for sxy
    /// * `ktyz` -- scaling factor for syz
    /// * `ktzx` -- scaling factor for szx
    pub fn apply_component_kt(&mut self, ktx: f64, kty: f64, ktz: f64, ktxy: f64, ktyz: f64, ktzx: f64) {
        self.sx *= ktx;
        self.sy *= kty;
        self.sz *= ktz;
        self.sxy *= ktxy;
        self.syz *= ktyz;
        self.szx *= ktzx;
    }
}

impl Add for StressTensor {
    type Output = StressTensor;

    /// Calculates the component-wise sum of two stress tensors
    fn add(self, other: StressTensor) -> StressTensor {
        StressTensor {
            sx: self.sx + other.sx,
            sy: self.sy + other.sy,
            sz: self.sz + other.sz,
            sxy: self.sxy + other.sxy,
            syz: self.syz + other.syz,
            szx: self.szx + other.szx,
        }
    }
}

// Tolerance-based comparisons; the derived PartialEq remains the exact one.

impl AbsDiffEq for StressTensor {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.sx, &other.sx, epsilon)
            && f64::abs_diff_eq(&self.sy, &other.sy, epsilon)
            && f64::abs_diff_eq(&self.sz, &other.sz, epsilon)
            && f64::abs_diff_eq(&self.sxy, &other.sxy, epsilon)
            && f64::abs_diff_eq(&self.syz, &other.syz, epsilon)
            && f64::abs_diff_eq(&self.szx, &other.szx, epsilon)
    }
}

impl RelativeEq for StressTensor {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.sx, &other.sx, epsilon, max_relative)
            && f64::relative_eq(&self.sy, &other.sy, epsilon, max_relative)
            && f64::relative_eq(&self.sz, &other.sz, epsilon, max_relative)
            && f64::relative_eq(&self.sxy, &other.sxy, epsilon, max_relative)
            && f64::relative_eq(&self.syz, &other.syz, epsilon, max_relative)
            && f64::relative_eq(&self.szx, &other.szx, epsilon, max_relative)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
