use super::{DEFAULT_ACTIVE_TENSION, DEFAULT_GUCCIONE_C1, DEFAULT_GUCCIONE_C2};
use super::{DEFAULT_GUCCIONE_C3, DEFAULT_GUCCIONE_C4, DEFAULT_HUNTER_BETA};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Parameters for the prescribed homogeneous stretch of the unit cube
///
/// The missing stretch ratio(s) are always derived from the
/// incompressibility constraint λx·λy·λz = 1; the three ratios are never
/// supplied independently.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum ParamStretch {
    /// Uniaxial stretch along x; both transverse directions are free
    ///
    /// The transverse ratios follow as λy = λz = 1/√λ.
    Uniaxial {
        lambda: f64, // axial stretch ratio
    },
    /// Biaxial in-plane stretch; the out-of-plane direction is free
    ///
    /// The out-of-plane ratio follows as λz = 1/(λx·λy).
    Biaxial {
        lambda_x: f64, // in-plane stretch ratio along x
        lambda_y: f64, // in-plane stretch ratio along y
    },
}

/// Parameters for the Guccione transversely isotropic strain-energy law
///
/// Axis 0 is the fiber direction; axes 1 and 2 are the cross-fiber sheet
/// directions. All four constants must be positive.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamGuccione {
    pub c1: f64, // isotropic scaling of the exponential
    pub c2: f64, // fiber-direction exponent weight
    pub c3: f64, // cross-fiber exponent weight
    pub c4: f64, // fiber-shear exponent weight
}

/// Parameters for the active contraction superposed onto the passive stress
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum ParamActive {
    /// Simple additive activation: T = Tp + TCa
    Simple {
        tca: f64, // active tension magnitude
    },
    /// Hunter length-dependent activation: T = Tp + TCa·(1 + β·(λf − 1))
    ///
    /// λf is the stretch along the fiber direction.
    LengthDependent {
        tca: f64,  // active tension magnitude
        beta: f64, // length sensitivity coefficient
    },
}

impl ParamStretch {
    /// Checks that all prescribed stretch ratios are positive
    pub fn validate(&self) -> Result<(), StrError> {
        let ok = match self {
            ParamStretch::Uniaxial { lambda } => *lambda > 0.0,
            ParamStretch::Biaxial { lambda_x, lambda_y } => *lambda_x > 0.0 && *lambda_y > 0.0,
        };
        if !ok {
            return Err("stretch ratio must be > 0.0");
        }
        Ok(())
    }
}

impl ParamGuccione {
    /// Returns sample parameters for passive myocardium
    pub fn sample_myocardium() -> Self {
        ParamGuccione {
            c1: DEFAULT_GUCCIONE_C1,
            c2: DEFAULT_GUCCIONE_C2,
            c3: DEFAULT_GUCCIONE_C3,
            c4: DEFAULT_GUCCIONE_C4,
        }
    }

    /// Checks that all material constants are positive
    pub fn validate(&self) -> Result<(), StrError> {
        if self.c1 <= 0.0 {
            return Err("Guccione parameter c1 must be > 0.0");
        }
        if self.c2 <= 0.0 {
            return Err("Guccione parameter c2 must be > 0.0");
        }
        if self.c3 <= 0.0 {
            return Err("Guccione parameter c3 must be > 0.0");
        }
        if self.c4 <= 0.0 {
            return Err("Guccione parameter c4 must be > 0.0");
        }
        Ok(())
    }
}

impl ParamActive {
    /// Returns sample parameters for the simple additive law
    pub fn sample_simple() -> Self {
        ParamActive::Simple {
            tca: DEFAULT_ACTIVE_TENSION,
        }
    }

    /// Returns sample parameters for the Hunter length-dependent law
    pub fn sample_length_dependent() -> Self {
        ParamActive::LengthDependent {
            tca: DEFAULT_ACTIVE_TENSION,
            beta: DEFAULT_HUNTER_BETA,
        }
    }

    /// Checks that the active tension is non-negative
    pub fn validate(&self) -> Result<(), StrError> {
        let tca = match self {
            ParamActive::Simple { tca } => *tca,
            ParamActive::LengthDependent { tca, .. } => *tca,
        };
        if tca < 0.0 {
            return Err("active tension must be ≥ 0.0");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
