//! Abstract interfaces shared by cursor implementations

pub mod scalar;

pub use scalar::Scalar;
