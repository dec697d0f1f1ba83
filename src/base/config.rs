use super::{ParamActive, ParamGuccione, ParamStretch};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds configuration data for a homogeneous-deformation analysis
///
/// # Default values
///
/// * Fiber angle = 0 (fibers aligned with the x-axis)
/// * Material constants = [ParamGuccione::sample_myocardium]
/// * No active contraction
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Prescribed stretch of the unit cube
    pub stretch: ParamStretch,

    /// Fiber angle θ (radians) about the out-of-plane (z) axis
    pub fiber_angle: f64,

    /// Guccione material constants
    pub guccione: ParamGuccione,

    /// Optional active contraction law and magnitude
    pub active: Option<ParamActive>,
}

impl Config {
    /// Allocates a new instance with default myocardium parameters
    pub fn new(stretch: ParamStretch) -> Self {
        Config {
            stretch,
            fiber_angle: 0.0,
            guccione: ParamGuccione::sample_myocardium(),
            active: None,
        }
    }

    /// Sets the fiber angle (radians) about the out-of-plane axis
    pub fn set_fiber_angle(&mut self, theta: f64) -> Result<&mut Self, StrError> {
        if !theta.is_finite() {
            return Err("fiber angle must be finite");
        }
        self.fiber_angle = theta;
        Ok(self)
    }

    /// Sets the Guccione material constants
    pub fn set_guccione(&mut self, params: ParamGuccione) -> Result<&mut Self, StrError> {
        params.validate()?;
        self.guccione = params;
        Ok(self)
    }

    /// Sets the active contraction law and magnitude
    pub fn set_active(&mut self, params: ParamActive) -> Result<&mut Self, StrError> {
        params.validate()?;
        self.active = Some(params);
        Ok(self)
    }

    /// Returns the traction-free directions associated with the loading mode
    ///
    /// These are the directions in which the total stress must vanish;
    /// the hydrostatic pressure is solved from the first one.
    pub fn free_directions(&self) -> &'static [usize] {
        match self.stretch {
            ParamStretch::Uniaxial { .. } => &[1, 2],
            ParamStretch::Biaxial { .. } => &[2],
        }
    }

    /// Validates all configuration data
    ///
    /// The fields are public, hence this check runs again when the
    /// simulation is allocated.
    pub fn validate(&self) -> Result<(), StrError> {
        self.stretch.validate()?;
        if !self.fiber_angle.is_finite() {
            return Err("fiber angle must be finite");
        }
        self.guccione.validate()?;
        if let Some(active) = self.active.as_ref() {
            active.validate()?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "stretch = {:?}\n", self.stretch).unwrap();
        write!(f, "fiber_angle = {:?}\n", self.fiber_angle).unwrap();
        write!(f, "guccione = {:?}\n", self.guccione).unwrap();
        write!(f, "active = {:?}\n", self.active).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::base::{ParamActive, ParamGuccione, ParamStretch};

    #[test]
    fn new_works() {
        let config = Config::new(ParamStretch::Uniaxial { lambda: 1.5 });
        assert_eq!(config.fiber_angle, 0.0);
        assert_eq!(config.active, None);
        assert_eq!(config.free_directions(), &[1, 2]);
        config.validate().unwrap();
        let config = Config::new(ParamStretch::Biaxial {
            lambda_x: 1.25,
            lambda_y: 1.25,
        });
        assert_eq!(config.free_directions(), &[2]);
    }

    #[test]
    fn set_methods_capture_errors() {
        let mut config = Config::new(ParamStretch::Uniaxial { lambda: 1.5 });
        assert_eq!(
            config.set_fiber_angle(f64::NAN).err(),
            Some("fiber angle must be finite")
        );
        let mut bad = ParamGuccione::sample_myocardium();
        bad.c1 = -1.0;
        assert_eq!(
            config.set_guccione(bad).err(),
            Some("Guccione parameter c1 must be > 0.0")
        );
        assert_eq!(
            config.set_active(ParamActive::Simple { tca: -2.0 }).err(),
            Some("active tension must be ≥ 0.0")
        );
    }

    #[test]
    fn set_methods_work() {
        let mut config = Config::new(ParamStretch::Biaxial {
            lambda_x: 1.25,
            lambda_y: 1.25,
        });
        config
            .set_fiber_angle(0.5)
            .unwrap()
            .set_active(ParamActive::sample_simple())
            .unwrap();
        assert_eq!(config.fiber_angle, 0.5);
        assert_eq!(config.active, Some(ParamActive::Simple { tca: 3.0 }));
        config.validate().unwrap();
    }

    #[test]
    fn validate_captures_errors() {
        let mut config = Config::new(ParamStretch::Uniaxial { lambda: -1.0 });
        assert_eq!(config.validate().err(), Some("stretch ratio must be > 0.0"));
        config.stretch = ParamStretch::Uniaxial { lambda: 1.5 };
        config.fiber_angle = f64::INFINITY;
        assert_eq!(config.validate().err(), Some("fiber angle must be finite"));
    }

    #[test]
    fn display_works() {
        let config = Config::new(ParamStretch::Uniaxial { lambda: 1.5 });
        let text = format!("{}", config);
        assert!(text.contains("Configuration data"));
        assert!(text.contains("Uniaxial { lambda: 1.5 }"));
    }
}
