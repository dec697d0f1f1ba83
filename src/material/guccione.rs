use crate::base::ParamGuccione;
use crate::StrError;
use russell_tensor::{Mandel, Tensor2};

/// Implements the Guccione transversely isotropic strain-energy law
///
/// The strain energy is the exponential function
///
/// ```text
/// W = ½·c1·(exp(Q) − 1)
///
/// Q = c2·E₀₀² + c3·(E₁₁² + E₂₂² + 2·E₁₂²) + 2·c4·(E₀₁² + E₀₂²)
/// ```
///
/// where E is the Green-Lagrange strain expressed in the material frame:
/// axis 0 is the fiber direction and axes 1 and 2 are the cross-fiber
/// sheet directions. The distortional second Piola-Kirchhoff stress is
/// the derivative S = ∂W/∂E.
///
/// Both the exponent and the stress components are evaluated from the
/// strain tensor given to the methods; for a rotated fiber field, pass
/// the strain already rotated into the fiber frame.
///
/// **Note:** The exponential is not guarded: an unbounded strain input
/// overflows to infinity rather than failing.
///
/// # Reference
///
/// Guccione JM, McCulloch AD, and Waldman LK (1991) Passive material
/// properties of intact ventricular myocardium determined from a
/// cylindrical model, Journal of Biomechanical Engineering, 113(1):42-55
pub struct Guccione {
    params: ParamGuccione,
}

impl Guccione {
    /// Allocates a new instance
    pub fn new(params: &ParamGuccione) -> Result<Self, StrError> {
        params.validate()?;
        Ok(Guccione { params: *params })
    }

    /// Calculates the exponent Q of the strain-energy function
    pub fn exponent(&self, ee: &Tensor2) -> f64 {
        let ParamGuccione { c2, c3, c4, .. } = self.params;
        let (e00, e11, e22) = (ee.get(0, 0), ee.get(1, 1), ee.get(2, 2));
        let (e01, e02, e12) = (ee.get(0, 1), ee.get(0, 2), ee.get(1, 2));
        c2 * e00 * e00
            + c3 * (e11 * e11 + e22 * e22 + 2.0 * e12 * e12)
            + 2.0 * c4 * (e01 * e01 + e02 * e02)
    }

    /// Calculates the strain energy W = ½·c1·(exp(Q) − 1)
    pub fn energy(&self, ee: &Tensor2) -> f64 {
        0.5 * self.params.c1 * (f64::exp(self.exponent(ee)) - 1.0)
    }

    /// Calculates the distortional second Piola-Kirchhoff stress S = ∂W/∂E
    ///
    /// The components are scaled by W' = ½·c1·exp(Q):
    ///
    /// ```text
    /// S₀₀ = W'·2·c2·E₀₀         S₀₁ = W'·4·c4·E₀₁
    /// S₁₁ = W'·2·c3·E₁₁         S₀₂ = W'·4·c4·E₀₂
    /// S₂₂ = W'·2·c3·E₂₂         S₁₂ = W'·4·c3·E₁₂
    /// ```
    pub fn stress(&self, ee: &Tensor2) -> Tensor2 {
        let ParamGuccione { c1, c2, c3, c4 } = self.params;
        let wp = 0.5 * c1 * f64::exp(self.exponent(ee));
        let mut ss = Tensor2::new(Mandel::Symmetric);
        ss.sym_set(0, 0, wp * 2.0 * c2 * ee.get(0, 0));
        ss.sym_set(1, 1, wp * 2.0 * c3 * ee.get(1, 1));
        ss.sym_set(2, 2, wp * 2.0 * c3 * ee.get(2, 2));
        ss.sym_set(0, 1, wp * 4.0 * c4 * ee.get(0, 1));
        ss.sym_set(0, 2, wp * 4.0 * c4 * ee.get(0, 2));
        ss.sym_set(1, 2, wp * 4.0 * c3 * ee.get(1, 2));
        ss
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
