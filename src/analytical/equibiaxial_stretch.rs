use crate::base::{ParamGuccione, NODES_PER_FACE};
use russell_lab::math::SQRT_2;

/// Closed-form solution of the equibiaxial stretch of an incompressible Guccione cube
///
/// The unit cube is stretched by λ along both x and y; incompressibility
/// gives λz = 1/λ². Because the in-plane strain is isotropic, the strain
/// tensor is unchanged by any in-plane fiber rotation and the pipeline
/// reduces to scalar formulas regardless of the fiber angle:
///
/// ```text
/// Ep = (λ² − 1)/2         Ez = (λz² − 1)/2
/// Q  = c2·Ep² + c3·(Ep² + Ez²)
/// W' = ½·c1·exp(Q)
/// Sf = W'·2·c2·Ep         Sz = W'·2·c3·Ez
/// p  = Sz·λz²             (zero traction out of plane)
/// STf = Sf + TCa − p/λ²
/// Σf = λ²·STf
/// ```
///
/// The nodal forces act on the diagonal face of the quarter-symmetric
/// scenario, whose deformed area is λz·λ·√2.
pub struct AnalyticalEquibiaxialStretch {
    /// Material constants
    pub params: ParamGuccione,

    /// Active tension magnitude added along the fiber direction
    pub tca: f64,
}

impl AnalyticalEquibiaxialStretch {
    /// Allocates a new instance
    pub fn new(params: ParamGuccione, tca: f64) -> Self {
        AnalyticalEquibiaxialStretch { params, tca }
    }

    /// Calculates the out-of-plane stretch ratio λz = 1/λ²
    pub fn out_of_plane_stretch(&self, lambda: f64) -> f64 {
        1.0 / (lambda * lambda)
    }

    /// Calculates the scaled derivative W' = ½·c1·exp(Q) of the strain energy
    fn energy_derivative(&self, lambda: f64) -> f64 {
        let ep = (lambda * lambda - 1.0) / 2.0;
        let lz = self.out_of_plane_stretch(lambda);
        let ez = (lz * lz - 1.0) / 2.0;
        let q = self.params.c2 * ep * ep + self.params.c3 * (ep * ep + ez * ez);
        0.5 * self.params.c1 * f64::exp(q)
    }

    /// Calculates the hydrostatic pressure
    pub fn pressure(&self, lambda: f64) -> f64 {
        let lz = self.out_of_plane_stretch(lambda);
        let ez = (lz * lz - 1.0) / 2.0;
        let sz = self.energy_derivative(lambda) * 2.0 * self.params.c3 * ez;
        sz * lz * lz
    }

    /// Calculates the fiber-direction component of the total stress
    pub fn total_fiber_stress(&self, lambda: f64) -> f64 {
        let ep = (lambda * lambda - 1.0) / 2.0;
        let sf = self.energy_derivative(lambda) * 2.0 * self.params.c2 * ep;
        sf + self.tca - self.pressure(lambda) / (lambda * lambda)
    }

    /// Calculates the cross-fiber component of the total stress
    pub fn total_cross_fiber_stress(&self, lambda: f64) -> f64 {
        let ep = (lambda * lambda - 1.0) / 2.0;
        let sc = self.energy_derivative(lambda) * 2.0 * self.params.c3 * ep;
        sc - self.pressure(lambda) / (lambda * lambda)
    }

    /// Calculates the nodal force on the diagonal face along the fiber direction
    pub fn upper_nodal_force(&self, lambda: f64) -> f64 {
        let lz = self.out_of_plane_stretch(lambda);
        let area = lz * lambda * SQRT_2;
        let sigma_f = lambda * lambda * self.total_fiber_stress(lambda);
        sigma_f * area / (NODES_PER_FACE * SQRT_2)
    }

    /// Calculates the nodal force on the diagonal face across the fiber direction
    pub fn lower_nodal_force(&self, lambda: f64) -> f64 {
        let lz = self.out_of_plane_stretch(lambda);
        let area = lz * lambda * SQRT_2;
        let sigma_c = lambda * lambda * self.total_cross_fiber_stress(lambda);
        sigma_c * area / (NODES_PER_FACE * SQRT_2)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::AnalyticalEquibiaxialStretch;
    use crate::base::ParamGuccione;
    use russell_lab::approx_eq;

    #[test]
    fn formulas_match_reference_values() {
        let ana = AnalyticalEquibiaxialStretch::new(ParamGuccione::sample_myocardium(), 3.0);
        assert_eq!(ana.out_of_plane_stretch(1.25), 0.64);
        approx_eq(ana.pressure(1.25), -0.001269876529156027, 1e-16);
        approx_eq(ana.total_fiber_stress(1.25), 3.012627829572447, 1e-14);
        approx_eq(ana.upper_nodal_force(1.25), 0.9414461967413900, 1e-14);
        approx_eq(ana.lower_nodal_force(1.25), 0.001177030664720654, 1e-15);
    }

    #[test]
    fn passive_undeformed_state_is_stress_free() {
        let ana = AnalyticalEquibiaxialStretch::new(ParamGuccione::sample_myocardium(), 0.0);
        assert_eq!(ana.pressure(1.0), 0.0);
        assert_eq!(ana.total_fiber_stress(1.0), 0.0);
        assert_eq!(ana.upper_nodal_force(1.0), 0.0);
    }
}
