//! Makes available common structures needed to run a simulation
//!
//! You may write `use mmsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, ParamActive, ParamGuccione, ParamStretch};
pub use crate::sim::{Response, Simulation};
pub use crate::StrError;
