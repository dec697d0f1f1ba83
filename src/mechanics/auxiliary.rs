use russell_lab::Matrix;
use russell_tensor::{Mandel, Tensor2};

/// Converts a 3×3 matrix into a symmetric second-order tensor
///
/// Off-diagonal pairs are averaged to remove the floating-point asymmetry
/// left over by chained matrix products. The input must be symmetric up
/// to roundoff; this is not checked.
pub(crate) fn sym_tensor_from_matrix(m: &Matrix) -> Tensor2 {
    let mut tt = Tensor2::new(Mandel::Symmetric);
    for i in 0..3 {
        tt.sym_set(i, i, m.get(i, i));
    }
    tt.sym_set(0, 1, 0.5 * (m.get(0, 1) + m.get(1, 0)));
    tt.sym_set(0, 2, 0.5 * (m.get(0, 2) + m.get(2, 0)));
    tt.sym_set(1, 2, 0.5 * (m.get(1, 2) + m.get(2, 1)));
    tt
}

/// Returns the transpose of a 3×3 matrix
pub(crate) fn transposed(m: &Matrix) -> Matrix {
    let mut t = Matrix::new(3, 3);
    for i in 0..3 {
        for j in 0..3 {
            t.set(j, i, m.get(i, j));
        }
    }
    t
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{sym_tensor_from_matrix, transposed};
    use russell_lab::Matrix;

    #[test]
    fn sym_tensor_from_matrix_works() {
        let m = Matrix::from(&[[1.0, 4.0, 6.0], [4.0, 2.0, 5.0], [6.0, 5.0, 3.0]]);
        let tt = sym_tensor_from_matrix(&m);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(tt.get(i, j), m.get(i, j));
            }
        }
    }

    #[test]
    fn sym_tensor_from_matrix_averages_pairs() {
        let m = Matrix::from(&[[1.0, 4.0, 0.0], [2.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let tt = sym_tensor_from_matrix(&m);
        assert_eq!(tt.get(0, 1), 3.0);
        assert_eq!(tt.get(1, 0), 3.0);
    }

    #[test]
    fn transposed_works() {
        let m = Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let t = transposed(&m);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(t.get(i, j), m.get(j, i));
            }
        }
    }
}
