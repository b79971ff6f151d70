use nalgebra::{Const, OMatrix};

pub use crate::config::{DIM, NUM_POSE};
pub use crate::types::{ColorChannel, Skeleton};

/// Statically sized matrix with `N` rows and `M` columns.
pub type Matrix<T, const N: usize, const M: usize> = OMatrix<T, Const<N>, Const<M>>;
pub type Vector<T, const N: usize> = Matrix<T, N, 1>;
