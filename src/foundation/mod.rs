//! Shared primitives: geometry/color types, errors and interpolation helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
