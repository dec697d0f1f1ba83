use super::sym_tensor_from_matrix;
use crate::base::ParamStretch;
use crate::StrError;
use russell_lab::{mat_inverse, mat_mat_mul, Matrix};
use russell_tensor::{Mandel, Tensor2};
use serde::{Deserialize, Serialize};

/// Holds the three principal stretch ratios of the unit cube
///
/// The ratios always satisfy the incompressibility constraint
/// λx·λy·λz = 1 because the free ratio(s) are derived from the
/// prescribed one(s), never supplied independently.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct StretchState {
    /// Stretch ratio along x
    pub lambda_x: f64,

    /// Stretch ratio along y
    pub lambda_y: f64,

    /// Stretch ratio along z (out-of-plane)
    pub lambda_z: f64,
}

/// Holds the kinematic quantities of a homogeneous incompressible deformation
///
/// All quantities are derived from the stretch state on allocation and
/// are not modified afterwards.
pub struct Deformation {
    /// Deformation gradient F (diagonal for the homogeneous stretch cases)
    pub ff: Matrix,

    /// Right Cauchy-Green tensor C = Fᵀ·F
    pub cc: Tensor2,

    /// Inverse of the right Cauchy-Green tensor
    pub cc_inv: Tensor2,

    /// Green-Lagrange strain E = ½·(C − I)
    pub ee: Tensor2,

    /// Determinant of the deformation gradient (J = det(F))
    pub jj: f64,
}

impl StretchState {
    /// Derives the full stretch state from the prescribed loading
    pub fn new(stretch: &ParamStretch) -> Result<Self, StrError> {
        stretch.validate()?;
        match stretch {
            &ParamStretch::Uniaxial { lambda } => {
                let transverse = 1.0 / f64::sqrt(lambda);
                Ok(StretchState {
                    lambda_x: lambda,
                    lambda_y: transverse,
                    lambda_z: transverse,
                })
            }
            &ParamStretch::Biaxial { lambda_x, lambda_y } => Ok(StretchState {
                lambda_x,
                lambda_y,
                lambda_z: 1.0 / (lambda_x * lambda_y),
            }),
        }
    }
}

impl Deformation {
    /// Allocates a new instance from the stretch state
    ///
    /// Fails if the deformation gradient cannot be inverted (which does
    /// not occur for valid positive stretch ratios).
    pub fn new(stretch: &StretchState) -> Result<Self, StrError> {
        // deformation gradient
        let ff = Matrix::from(&[
            [stretch.lambda_x, 0.0, 0.0],
            [0.0, stretch.lambda_y, 0.0],
            [0.0, 0.0, stretch.lambda_z],
        ]);

        // right Cauchy-Green tensor: C = Fᵀ·F
        let ff_t = super::transposed(&ff);
        let mut cc_mat = Matrix::new(3, 3);
        mat_mat_mul(&mut cc_mat, 1.0, &ff_t, &ff, 0.0)?;

        // inverse of C (the returned determinant detects singularity)
        let mut cc_inv_mat = Matrix::new(3, 3);
        let det_cc = mat_inverse(&mut cc_inv_mat, &cc_mat).map_err(|_| "deformation gradient is singular")?;
        if det_cc <= 0.0 {
            return Err("deformation gradient is singular");
        }

        // Green-Lagrange strain: E = ½·(C − I)
        let cc = sym_tensor_from_matrix(&cc_mat);
        let mut ee = Tensor2::new(Mandel::Symmetric);
        for i in 0..3 {
            ee.sym_set(i, i, 0.5 * (cc.get(i, i) - 1.0));
        }
        ee.sym_set(0, 1, 0.5 * cc.get(0, 1));
        ee.sym_set(0, 2, 0.5 * cc.get(0, 2));
        ee.sym_set(1, 2, 0.5 * cc.get(1, 2));

        Ok(Deformation {
            ff,
            cc,
            cc_inv: sym_tensor_from_matrix(&cc_inv_mat),
            ee,
            jj: f64::sqrt(det_cc),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
