use super::{sym_tensor_from_matrix, transposed};
use crate::base::NODES_PER_FACE;
use crate::StrError;
use russell_lab::{mat_mat_mul, math::SQRT_2, Matrix};
use russell_tensor::Tensor2;

/// Pushes a second Piola-Kirchhoff stress forward to the Cauchy stress
///
/// Computes Σ = F·T·Fᵀ. The 1/det(F) factor is omitted because the
/// deformation is incompressible (J = 1).
pub fn cauchy_stress(ff: &Matrix, tt: &Tensor2) -> Result<Tensor2, StrError> {
    let tt_mat = tt.as_matrix();
    let mut aux = Matrix::new(3, 3);
    let mut res = Matrix::new(3, 3);
    mat_mat_mul(&mut aux, 1.0, ff, &tt_mat, 0.0)?;
    mat_mat_mul(&mut res, 1.0, &aux, &transposed(ff), 0.0)?;
    Ok(sym_tensor_from_matrix(&res))
}

/// Calculates the nodal reaction force on a face normal to the given axis
///
/// The resultant Σ[i,i]·area is apportioned equally among the four
/// corner nodes of the quarter-symmetric unit-square face.
///
/// # Input
///
/// * `sigma` -- Cauchy stress in the frame whose axis i is the face normal
/// * `direction` -- index i of the face normal
/// * `area` -- deformed area of the face (product of the transverse stretches)
pub fn nodal_force(sigma: &Tensor2, direction: usize, area: f64) -> Result<f64, StrError> {
    if direction > 2 {
        return Err("face normal index must be 0, 1, or 2");
    }
    Ok(sigma.get(direction, direction) * area / NODES_PER_FACE)
}

/// Calculates the nodal reaction force on the diagonal face of the biaxial scenario
///
/// The diagonal face is cut at 45° through the unit cube by the fiber
/// direction; its deformed area carries a factor √2 and so does the
/// nodal apportionment, a fixed geometric convention of the
/// quarter-symmetry scenario.
///
/// # Input
///
/// * `sigma_fib` -- Cauchy stress in the fiber frame
/// * `direction` -- 0 for the fiber direction, 1 for the cross-fiber direction
/// * `area` -- deformed area of the diagonal face (λz·λx·√2)
pub fn diagonal_nodal_force(sigma_fib: &Tensor2, direction: usize, area: f64) -> Result<f64, StrError> {
    if direction > 2 {
        return Err("face normal index must be 0, 1, or 2");
    }
    Ok(sigma_fib.get(direction, direction) * area / (NODES_PER_FACE * SQRT_2))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{cauchy_stress, diagonal_nodal_force, nodal_force};
    use russell_lab::{approx_eq, math::SQRT_2, Matrix};
    use russell_tensor::{Mandel, Tensor2};

    #[test]
    fn cauchy_stress_works() {
        // uniaxial λx = 1.5 with the sample myocardium parameters
        let ff = Matrix::from(&[
            [1.5, 0.0, 0.0],
            [0.0, 0.8164965809277261, 0.0],
            [0.0, 0.0, 0.8164965809277261],
        ]);
        let st = Tensor2::from_matrix(
            &[
                [0.2593702895268332, 0.0, 0.0], //
                [0.0, 0.0, 0.0],                //
                [0.0, 0.0, 0.0],                //
            ],
            Mandel::Symmetric,
        )
        .unwrap();
        let sigma = cauchy_stress(&ff, &st).unwrap();
        approx_eq(sigma.get(0, 0), 0.5835831514353746, 1e-14);
        for i in 0..3 {
            for j in 0..3 {
                if i != 0 || j != 0 {
                    approx_eq(sigma.get(i, j), 0.0, 1e-15);
                }
            }
        }
    }

    #[test]
    fn cauchy_stress_handles_shear() {
        let ff = Matrix::from(&[
            [2.0, 0.0, 0.0], //
            [0.0, 1.0, 0.0], //
            [0.0, 0.0, 0.5], //
        ]);
        let tt = Tensor2::from_matrix(
            &[
                [1.0, 3.0, 0.0], //
                [3.0, 2.0, 0.0], //
                [0.0, 0.0, 4.0], //
            ],
            Mandel::Symmetric,
        )
        .unwrap();
        let sigma = cauchy_stress(&ff, &tt).unwrap();
        // Σij = Fii·Tij·Fjj for diagonal F
        approx_eq(sigma.get(0, 0), 4.0, 1e-15);
        approx_eq(sigma.get(0, 1), 6.0, 1e-15);
        approx_eq(sigma.get(1, 1), 2.0, 1e-15);
        approx_eq(sigma.get(2, 2), 1.0, 1e-15);
    }

    #[test]
    fn nodal_force_works() {
        let sigma = Tensor2::from_matrix(
            &[
                [0.5835831514353746, 0.0, 0.0], //
                [0.0, 0.0, 0.0],                //
                [0.0, 0.0, 0.0],                //
            ],
            Mandel::Symmetric,
        )
        .unwrap();
        let area = 1.0 / 1.5; // λy·λz
        let rf = nodal_force(&sigma, 0, area).unwrap();
        approx_eq(rf, 0.09726385857256246, 1e-15);
        assert_eq!(nodal_force(&sigma, 5, area).err(), Some("face normal index must be 0, 1, or 2"));
    }

    #[test]
    fn diagonal_nodal_force_works() {
        let sigma_fib = Tensor2::from_matrix(
            &[
                [4.707230983706950, 0.0, 0.0],    //
                [0.0, 0.005885153323603268, 0.0], //
                [0.0, 0.0, 0.0],                  //
            ],
            Mandel::Symmetric,
        )
        .unwrap();
        let area = 0.64 * 1.25 * SQRT_2;
        let upper = diagonal_nodal_force(&sigma_fib, 0, area).unwrap();
        let lower = diagonal_nodal_force(&sigma_fib, 1, area).unwrap();
        approx_eq(upper, 0.9414461967413900, 1e-14);
        approx_eq(lower, 0.001177030664720654, 1e-15);
    }
}
