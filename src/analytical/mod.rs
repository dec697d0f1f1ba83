//! This module contains closed-form reference solutions for testing and verification

mod equibiaxial_stretch;
mod uniaxial_stretch;

pub use equibiaxial_stretch::*;
pub use uniaxial_stretch::*;
