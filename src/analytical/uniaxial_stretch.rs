use crate::base::{ParamGuccione, NODES_PER_FACE};

/// Closed-form solution of the uniaxial stretch of an incompressible Guccione cube
///
/// The unit cube is stretched by λ along x with the fibers aligned with
/// the loading axis. Incompressibility gives λy = λz = 1/√λ, so every
/// tensor is diagonal and the pipeline reduces to scalar formulas:
///
/// ```text
/// Ea = (λ² − 1)/2         Et = (1/λ − 1)/2
/// Q  = c2·Ea² + 2·c3·Et²
/// W' = ½·c1·exp(Q)
/// Sa = W'·2·c2·Ea         St = W'·2·c3·Et
/// p  = St/λ               (zero traction in the transverse directions)
/// STa = Sa − p/λ²
/// Σa = λ²·STa             RF = Σa·(1/λ)/4
/// ```
pub struct AnalyticalUniaxialStretch {
    /// Material constants
    pub params: ParamGuccione,
}

impl AnalyticalUniaxialStretch {
    /// Allocates a new instance
    pub fn new(params: ParamGuccione) -> Self {
        AnalyticalUniaxialStretch { params }
    }

    /// Calculates the transverse stretch ratio λy = λz = 1/√λ
    pub fn transverse_stretch(&self, lambda: f64) -> f64 {
        1.0 / f64::sqrt(lambda)
    }

    /// Calculates the scaled derivative W' = ½·c1·exp(Q) of the strain energy
    fn energy_derivative(&self, lambda: f64) -> f64 {
        let ea = (lambda * lambda - 1.0) / 2.0;
        let et = (1.0 / lambda - 1.0) / 2.0;
        let q = self.params.c2 * ea * ea + 2.0 * self.params.c3 * et * et;
        0.5 * self.params.c1 * f64::exp(q)
    }

    /// Calculates the hydrostatic pressure
    pub fn pressure(&self, lambda: f64) -> f64 {
        let et = (1.0 / lambda - 1.0) / 2.0;
        let st = self.energy_derivative(lambda) * 2.0 * self.params.c3 * et;
        st / lambda
    }

    /// Calculates the axial component of the total second Piola-Kirchhoff stress
    pub fn total_axial_stress(&self, lambda: f64) -> f64 {
        let ea = (lambda * lambda - 1.0) / 2.0;
        let sa = self.energy_derivative(lambda) * 2.0 * self.params.c2 * ea;
        sa - self.pressure(lambda) / (lambda * lambda)
    }

    /// Calculates the axial component of the Cauchy stress
    pub fn axial_cauchy_stress(&self, lambda: f64) -> f64 {
        lambda * lambda * self.total_axial_stress(lambda)
    }

    /// Calculates the nodal reaction force on the loaded face
    ///
    /// The deformed area of the face is λy·λz = 1/λ.
    pub fn nodal_force(&self, lambda: f64) -> f64 {
        self.axial_cauchy_stress(lambda) * (1.0 / lambda) / NODES_PER_FACE
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
