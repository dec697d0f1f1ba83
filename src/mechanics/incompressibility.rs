use crate::StrError;
use russell_tensor::{Mandel, Tensor2};

/// Solves the hydrostatic pressure from the zero-traction condition
///
/// The total second Piola-Kirchhoff stress is ST = S − p·C⁻¹; requiring
/// ST[i,i] = 0 in the traction-free direction i gives
///
/// ```text
/// p = S[i,i] / C⁻¹[i,i]
/// ```
///
/// The pressure is solved from the FIRST listed direction. When two
/// independent free directions exist (uniaxial stretch), either yields
/// the same pressure by the transverse symmetry of the state; picking a
/// loaded direction instead yields a different (incorrect) pressure, so
/// the caller must list the traction-free directions of its boundary
/// value problem.
///
/// # Input
///
/// * `ss` -- distortional stress S in the reference frame
/// * `cc_inv` -- inverse right Cauchy-Green tensor in the reference frame
/// * `free_directions` -- index (or indices) of the traction-free direction(s)
pub fn solve_pressure(ss: &Tensor2, cc_inv: &Tensor2, free_directions: &[usize]) -> Result<f64, StrError> {
    let i = match free_directions.first() {
        Some(i) => *i,
        None => return Err("at least one traction-free direction is required"),
    };
    if i > 2 {
        return Err("traction-free direction index must be 0, 1, or 2");
    }
    let denominator = cc_inv.get(i, i);
    if denominator == 0.0 {
        return Err("incompressibility constraint is degenerate");
    }
    Ok(ss.get(i, i) / denominator)
}

/// Forms the total (constrained) stress ST = S − p·C⁻¹
///
/// Both input tensors must be expressed in the same frame; the result is
/// in that frame.
pub fn total_stress(ss: &Tensor2, cc_inv: &Tensor2, pressure: f64) -> Tensor2 {
    let mut st = Tensor2::new(Mandel::Symmetric);
    for i in 0..3 {
        for j in i..3 {
            st.sym_set(i, j, ss.get(i, j) - pressure * cc_inv.get(i, j));
        }
    }
    st
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
