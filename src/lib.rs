//! Mmsim - myocardium mechanics simulator
//!
//! This crate evaluates the stress response of a unit cube of cardiac
//! tissue subjected to a prescribed homogeneous deformation (uniaxial or
//! biaxial stretch, optionally with a rotated fiber direction). The
//! passive behavior follows the Guccione transversely isotropic
//! strain-energy law; an active contraction term representing muscle
//! activation is superposed onto the fiber-direction stress.
//!
//! The evaluation is closed-form: the deformation gradient is built from
//! the stretch ratios under the incompressibility constraint, the
//! hydrostatic pressure is resolved analytically from zero-traction
//! boundary conditions, and the total stress is pushed forward to the
//! Cauchy stress to obtain the boundary nodal forces. There is no mesh,
//! no time stepping, and no iterative solver.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod material;
pub mod mechanics;
pub mod prelude;
pub mod sim;
