use crate::base::ParamActive;
use crate::StrError;
use russell_tensor::Tensor2;

/// Implements the active contraction superposed onto the passive stress
///
/// The active tension TCa represents muscle activation and acts on the
/// fiber-direction normal component of the total second Piola-Kirchhoff
/// stress only; all other components are left unchanged. Two laws are
/// available, selected by [ParamActive]:
///
/// ```text
/// Simple:          T = Tp + TCa
/// LengthDependent: T = Tp + TCa·(1 + β·(λf − 1))    (Hunter)
/// ```
pub struct ActiveContraction {
    params: ParamActive,
}

impl ActiveContraction {
    /// Allocates a new instance
    pub fn new(params: &ParamActive) -> Result<Self, StrError> {
        params.validate()?;
        Ok(ActiveContraction { params: *params })
    }

    /// Returns the active tension added to the fiber-direction normal stress
    ///
    /// # Input
    ///
    /// * `lambda_f` -- stretch along the fiber direction (only used by
    ///   the length-dependent law)
    pub fn tension(&self, lambda_f: f64) -> f64 {
        match self.params {
            ParamActive::Simple { tca } => tca,
            ParamActive::LengthDependent { tca, beta } => tca * (1.0 + beta * (lambda_f - 1.0)),
        }
    }

    /// Returns a new total stress with the active tension superposed
    ///
    /// The input must be expressed in the fiber frame (axis 0 = fiber
    /// direction); it is not modified.
    pub fn apply(&self, st_fib: &Tensor2, lambda_f: f64) -> Tensor2 {
        let mut updated = st_fib.clone();
        updated.sym_set(0, 0, st_fib.get(0, 0) + self.tension(lambda_f));
        updated
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
