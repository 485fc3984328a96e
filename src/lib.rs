//! Models a symmetric 3D mechanical stress state and derives standard
//! engineering fatigue/strength metrics from it: principal stresses, the
//! Huber (von Mises) equivalent stress, and a Walker-style mean/alternating
//! stress decomposition for combined cyclic loading.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

mod principal_stresses;
mod stress_tensor;
mod walker;
pub use crate::principal_stresses::*;
pub use crate::stress_tensor::*;
pub use crate::walker::*;
