use ndarray::Array2;

use crate::error::MatrixError;
use crate::math::Matrix;

impl From<&Matrix> for Array2<f64> {
    fn from(matrix: &Matrix) -> Self {
        Array2::from_shape_fn(matrix.order(), |(i, j)| matrix[(i, j)])
    }
}

impl TryFrom<Array2<f64>> for Matrix {
    type Error = MatrixError;

    /// Reads the array in logical row-major order, whatever its memory layout.
    fn try_from(array: Array2<f64>) -> Result<Self, Self::Error> {
        let shape = array.dim();
        let data = array.iter().copied().collect();
        Matrix::from_shape_vec(shape, data)
    }
}
