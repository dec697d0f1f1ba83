use super::{sym_tensor_from_matrix, transposed};
use crate::StrError;
use russell_lab::{mat_mat_mul, Matrix};
use russell_tensor::Tensor2;

/// Implements the rotation between the reference frame and the fiber frame
///
/// The fiber frame is obtained by rotating the reference frame by an
/// angle θ about the out-of-plane (z) axis with the right-handed
/// rotation matrix
///
/// ```text
///     ┌ cos(θ)  -sin(θ)  0 ┐
/// Q = │ sin(θ)   cos(θ)  0 │
///     └   0        0     1 ┘
/// ```
///
/// A tensor T in the reference frame maps to T_fib = Qᵀ·T·Q in the fiber
/// frame; the inverse map is T = Q·T_fib·Qᵀ.
pub struct FiberFrame {
    /// Rotation angle (radians)
    theta: f64,

    /// Rotation matrix Q
    qq: Matrix,

    /// Transposed rotation matrix Qᵀ
    qq_t: Matrix,
}

impl FiberFrame {
    /// Allocates a new instance for the angle theta (radians)
    pub fn new(theta: f64) -> Self {
        let (sin, cos) = (f64::sin(theta), f64::cos(theta));
        let qq = Matrix::from(&[
            [cos, -sin, 0.0], //
            [sin, cos, 0.0],  //
            [0.0, 0.0, 1.0],  //
        ]);
        let qq_t = transposed(&qq);
        FiberFrame { theta, qq, qq_t }
    }

    /// Returns the rotation angle (radians)
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Rotates a symmetric tensor from the reference frame to the fiber frame
    ///
    /// Computes T_fib = Qᵀ·T·Q. With θ = 0 the input is returned
    /// unchanged (exact identity).
    pub fn to_fiber(&self, tt: &Tensor2) -> Result<Tensor2, StrError> {
        if self.theta == 0.0 {
            return Ok(tt.clone());
        }
        self.sandwich(&self.qq_t, tt, &self.qq)
    }

    /// Rotates a symmetric tensor from the fiber frame back to the reference frame
    ///
    /// Computes T = Q·T_fib·Qᵀ. With θ = 0 the input is returned
    /// unchanged (exact identity).
    pub fn to_reference(&self, tt: &Tensor2) -> Result<Tensor2, StrError> {
        if self.theta == 0.0 {
            return Ok(tt.clone());
        }
        self.sandwich(&self.qq, tt, &self.qq_t)
    }

    /// Computes the product A·T·B and returns it as a symmetric tensor
    fn sandwich(&self, a: &Matrix, tt: &Tensor2, b: &Matrix) -> Result<Tensor2, StrError> {
        let tt_mat = tt.as_matrix();
        let mut aux = Matrix::new(3, 3);
        let mut res = Matrix::new(3, 3);
        mat_mat_mul(&mut aux, 1.0, a, &tt_mat, 0.0)?;
        mat_mat_mul(&mut res, 1.0, &aux, b, 0.0)?;
        Ok(sym_tensor_from_matrix(&res))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
