use crate::mechanics::StretchState;
use crate::StrError;
use russell_lab::Matrix;
use russell_tensor::Tensor2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the full set of results produced by the evaluation pipeline
///
/// All tensors are given in the reference frame; the `*_fib` companions
/// hold the fiber-frame representation and are present when a nonzero
/// fiber angle is configured (with θ = 0 the frames coincide).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Response {
    /// Principal stretch ratios (λx·λy·λz = 1)
    pub stretch: StretchState,

    /// Deformation gradient
    pub ff: Matrix,

    /// Right Cauchy-Green tensor
    pub cc: Tensor2,

    /// Inverse right Cauchy-Green tensor
    pub cc_inv: Tensor2,

    /// Green-Lagrange strain
    pub ee: Tensor2,

    /// Green-Lagrange strain in the fiber frame
    pub ee_fib: Option<Tensor2>,

    /// Distortional second Piola-Kirchhoff stress
    pub ss: Tensor2,

    /// Distortional second Piola-Kirchhoff stress in the fiber frame
    pub ss_fib: Option<Tensor2>,

    /// Total second Piola-Kirchhoff stress (active tension included)
    pub st: Tensor2,

    /// Total second Piola-Kirchhoff stress in the fiber frame
    pub st_fib: Option<Tensor2>,

    /// Cauchy stress
    pub sigma: Tensor2,

    /// Cauchy stress in the fiber frame
    pub sigma_fib: Option<Tensor2>,

    /// Strain energy of the passive law
    pub energy: f64,

    /// Hydrostatic pressure resolved from the zero-traction condition
    pub pressure: f64,

    /// Nodal reaction forces
    ///
    /// Uniaxial: one entry, the loaded-face force. Biaxial: two entries,
    /// the diagonal-face forces along and across the fiber direction.
    pub nodal_forces: Vec<f64>,
}

impl Response {
    /// Returns a JSON representation of the response
    pub fn to_json(&self) -> Result<String, StrError> {
        serde_json::to_string_pretty(self).map_err(|_| "cannot serialize response to JSON")
    }
}

fn write_tensor(f: &mut fmt::Formatter<'_>, label: &str, tt: &Tensor2) -> fmt::Result {
    let mat = tt.as_matrix();
    write!(f, "\n{} =\n", label).unwrap();
    match f.precision() {
        Some(v) => write!(f, "{:.1$}", mat, v).unwrap(),
        None => write!(f, "{}", mat).unwrap(),
    }
    write!(f, "\n")
}

impl fmt::Display for Response {
    /// Returns a nicely formatted report with all tensors and scalars
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F =\n").unwrap();
        match f.precision() {
            Some(v) => write!(f, "{:.1$}", self.ff, v).unwrap(),
            None => write!(f, "{}", self.ff).unwrap(),
        }
        write!(f, "\n").unwrap();
        write_tensor(f, "C", &self.cc).unwrap();
        write_tensor(f, "E", &self.ee).unwrap();
        if let Some(ee_fib) = self.ee_fib.as_ref() {
            write_tensor(f, "E_fib", ee_fib).unwrap();
        }
        write_tensor(f, "S", &self.ss).unwrap();
        if let Some(ss_fib) = self.ss_fib.as_ref() {
            write_tensor(f, "S_fib", ss_fib).unwrap();
        }
        write_tensor(f, "ST", &self.st).unwrap();
        if let Some(st_fib) = self.st_fib.as_ref() {
            write_tensor(f, "ST_fib", st_fib).unwrap();
        }
        write_tensor(f, "Σ", &self.sigma).unwrap();
        if let Some(sigma_fib) = self.sigma_fib.as_ref() {
            write_tensor(f, "Σ_fib", sigma_fib).unwrap();
        }
        write!(f, "\nstrain energy = {:?}\n", self.energy).unwrap();
        write!(f, "hydrostatic pressure = {:?}\n", self.pressure).unwrap();
        write!(f, "nodal forces = {:?}\n", self.nodal_forces).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
