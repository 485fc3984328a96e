use crate::{StrError, StressTensor};
use nalgebra::{Matrix3, Vector3};

/// Tolerance for the iterative symmetric eigen solver
const EIGEN_TOL: f64 = 1e-12;

/// Maximum number of iterations for the symmetric eigen solver
const EIGEN_NITER: usize = 100;

/// Holds the principal stresses and their directions
///
/// The eigenvalues and eigenvectors come from a single decomposition and are
/// sorted together as matched pairs, so `directions.column(i)` is always the
/// unit-length direction associated with `values[i]`.
#[derive(Clone, Debug)]
pub struct PrincipalStresses {
    /// Holds the principal stresses sorted in descending order
    pub values: Vector3<f64>,

    /// Holds the principal directions as unit-length columns
    ///
    /// Column i corresponds to `values[i]`.
    pub directions: Matrix3<f64>,
}

impl StressTensor {
    /// Calculates the principal stresses and directions
    ///
    /// Performs a single eigen-decomposition of the symmetric stress matrix
    /// and sorts the (eigenvalue, eigenvector) pairs by descending stress.
    /// A real symmetric matrix always has three real eigenvalues; the solver
    /// can only fail to converge within its iteration budget.
    pub fn principal_stresses(&self) -> Result<PrincipalStresses, StrError> {
        let eig = self
            .matrix()
            .try_symmetric_eigen(EIGEN_TOL, EIGEN_NITER)
            .ok_or("eigen decomposition of the stress tensor did not converge")?;
        let mut order = [0, 1, 2];
        order.sort_by(|&i, &j| eig.eigenvalues[j].total_cmp(&eig.eigenvalues[i]));
        let values = Vector3::new(
            eig.eigenvalues[order[0]],
            eig.eigenvalues[order[1]],
            eig.eigenvalues[order[2]],
        );
        let directions = Matrix3::from_columns(&[
            eig.eigenvectors.column(order[0]).into_owned(),
            eig.eigenvectors.column(order[1]).into_owned(),
            eig.eigenvectors.column(order[2]).into_owned(),
        ]);
        Ok(PrincipalStresses { values, directions })
    }

    /// Returns the maximum (first) principal stress
    pub fn max_principal(&self) -> Result<f64, StrError> {
        Ok(self.principal_stresses()?.values[0])
    }

    /// Returns the middle (second) principal stress
    pub fn mid_principal(&self) -> Result<f64, StrError> {
        Ok(self.principal_stresses()?.values[1])
    }

    /// Returns the minimum (third) principal stress
    pub fn min_principal(&self) -> Result<f64, StrError> {
        Ok(self.principal_stresses()?.values[2])
    }

    /// Calculates the maximum shear stress
    ///
    /// ```text
    /// τmax = (σ1 - σ3) / 2
    /// ```
    pub fn max_shear_stress(&self) -> Result<f64, StrError> {
        let principals = self.principal_stresses()?;
        Ok((principals.values[0] - principals.values[2]) / 2.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
