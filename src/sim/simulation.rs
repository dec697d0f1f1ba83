use super::Response;
use crate::base::{Config, ParamStretch};
use crate::material::{ActiveContraction, Guccione};
use crate::mechanics::{cauchy_stress, diagonal_nodal_force, nodal_force, solve_pressure, total_stress};
use crate::mechanics::{Deformation, FiberFrame, StretchState};
use crate::StrError;
use russell_lab::math::SQRT_2;

/// Runs the homogeneous-deformation pipeline for a unit cube of tissue
///
/// The evaluation proceeds strictly forward:
///
/// 1. Build the stretch state and the deformation quantities (F, C, C⁻¹, E)
/// 2. Rotate the strain into the fiber frame (identity for θ = 0)
/// 3. Evaluate the Guccione law in the fiber frame
/// 4. Rotate the distortional stress back and resolve the hydrostatic
///    pressure from the zero-traction condition of the loading mode
/// 5. Superpose the active tension on the fiber-direction total stress
/// 6. Push the total stress forward to the Cauchy stress and compute the
///    boundary nodal forces
///
/// Every stage is a pure function of its inputs; the pipeline either
/// fully succeeds or fails at the first invalid step.
pub struct Simulation<'a> {
    /// Access to configuration
    config: &'a Config,
}

impl<'a> Simulation<'a> {
    /// Allocates a new instance after validating the configuration
    pub fn new(config: &'a Config) -> Result<Self, StrError> {
        config.validate()?;
        Ok(Simulation { config })
    }

    /// Evaluates the pipeline and returns the response bundle
    pub fn run(&self) -> Result<Response, StrError> {
        // kinematics
        let stretch = StretchState::new(&self.config.stretch)?;
        let def = Deformation::new(&stretch)?;

        // fiber frame
        let frame = FiberFrame::new(self.config.fiber_angle);
        let ee_fib = frame.to_fiber(&def.ee)?;
        let cc_fib = frame.to_fiber(&def.cc)?;
        let cc_inv_fib = frame.to_fiber(&def.cc_inv)?;

        // passive law (evaluated in the fiber frame)
        let model = Guccione::new(&self.config.guccione)?;
        let energy = model.energy(&ee_fib);
        let ss_fib = model.stress(&ee_fib);
        let ss = frame.to_reference(&ss_fib)?;

        // hydrostatic pressure from the zero-traction condition
        let pressure = solve_pressure(&ss, &def.cc_inv, self.config.free_directions())?;
        let mut st_fib = total_stress(&ss_fib, &cc_inv_fib, pressure);

        // active contraction along the fiber direction
        if let Some(params) = self.config.active.as_ref() {
            let active = ActiveContraction::new(params)?;
            let lambda_f = f64::sqrt(cc_fib.get(0, 0));
            st_fib = active.apply(&st_fib, lambda_f);
        }
        let st = frame.to_reference(&st_fib)?;

        // Cauchy stress and nodal forces
        let sigma = cauchy_stress(&def.ff, &st)?;
        let sigma_fib = frame.to_fiber(&sigma)?;
        let nodal_forces = match self.config.stretch {
            ParamStretch::Uniaxial { .. } => {
                let area = stretch.lambda_y * stretch.lambda_z;
                vec![nodal_force(&sigma, 0, area)?]
            }
            ParamStretch::Biaxial { .. } => {
                let area = stretch.lambda_z * stretch.lambda_x * SQRT_2;
                vec![
                    diagonal_nodal_force(&sigma_fib, 0, area)?,
                    diagonal_nodal_force(&sigma_fib, 1, area)?,
                ]
            }
        };

        // results (fiber-frame companions only for a rotated fiber field)
        let rotated = self.config.fiber_angle != 0.0;
        Ok(Response {
            stretch,
            ff: def.ff,
            cc: def.cc,
            cc_inv: def.cc_inv,
            ee: def.ee,
            ee_fib: if rotated { Some(ee_fib) } else { None },
            ss,
            ss_fib: if rotated { Some(ss_fib) } else { None },
            st,
            st_fib: if rotated { Some(st_fib) } else { None },
            sigma,
            sigma_fib: if rotated { Some(sigma_fib) } else { None },
            energy,
            pressure,
            nodal_forces,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
