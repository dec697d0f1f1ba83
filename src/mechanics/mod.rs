//! Implements the kinematics and stress algebra of the homogeneous deformation

mod auxiliary;
mod fiber_frame;
mod incompressibility;
mod kinematics;
mod stress_transport;
pub(crate) use crate::mechanics::auxiliary::*;
pub use crate::mechanics::fiber_frame::*;
pub use crate::mechanics::incompressibility::*;
pub use crate::mechanics::kinematics::*;
pub use crate::mechanics::stress_transport::*;
