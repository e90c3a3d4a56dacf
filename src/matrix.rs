/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

/// Pivots smaller than this are treated as zero during elimination.
const SINGULARITY_TOLERANCE: f64 = 1e-12;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Vector3d {
    pub v: [f64; 3],
}

impl Vector3d {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { v: [x, y, z] }
    }
}

/// Row-major 3x3 matrix of `f64`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Matrix3d {
    pub v: [[f64; 3]; 3],
}

impl Matrix3d {
    pub const IDENTITY: Matrix3d = Matrix3d {
        v: [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]],
    };

    /// Builds a matrix whose columns are the three given vectors.
    #[inline]
    pub const fn from_columns(c0: Vector3d, c1: Vector3d, c2: Vector3d) -> Self {
        Matrix3d {
            v: [
                [c0.v[0], c1.v[0], c2.v[0]],
                [c0.v[1], c1.v[1], c2.v[1]],
                [c0.v[2], c1.v[2], c2.v[2]],
            ],
        }
    }

    #[inline]
    pub const fn transpose(&self) -> Matrix3d {
        Matrix3d {
            v: [
                [self.v[0][0], self.v[1][0], self.v[2][0]],
                [self.v[0][1], self.v[1][1], self.v[2][1]],
                [self.v[0][2], self.v[1][2], self.v[2][2]],
            ],
        }
    }

    #[inline]
    pub const fn determinant(&self) -> f64 {
        self.v[0][0] * (self.v[1][1] * self.v[2][2] - self.v[1][2] * self.v[2][1])
            - self.v[0][1] * (self.v[1][0] * self.v[2][2] - self.v[1][2] * self.v[2][0])
            + self.v[0][2] * (self.v[1][0] * self.v[2][1] - self.v[1][1] * self.v[2][0])
    }

    /// LU factorization with partial pivoting.
    ///
    /// Returns the packed LU matrix (unit lower triangle implicit) and the row
    /// permutation, or `None` when a pivot degenerates.
    fn lu_decompose(&self) -> Option<([[f64; 3]; 3], [usize; 3])> {
        let mut lu = self.v;
        let mut perm = [0usize, 1, 2];
        for k in 0..3 {
            let mut pivot = k;
            for i in k + 1..3 {
                if lu[i][k].abs() > lu[pivot][k].abs() {
                    pivot = i;
                }
            }
            if lu[pivot][k].abs() < SINGULARITY_TOLERANCE {
                return None;
            }
            if pivot != k {
                lu.swap(pivot, k);
                perm.swap(pivot, k);
            }
            for i in k + 1..3 {
                lu[i][k] /= lu[k][k];
                for j in k + 1..3 {
                    lu[i][j] -= lu[i][k] * lu[k][j];
                }
            }
        }
        Some((lu, perm))
    }

    /// Solves `self * x = b` by pivoted LU, `None` when the matrix is singular.
    pub fn solve(&self, b: Vector3d) -> Option<Vector3d> {
        let (lu, perm) = self.lu_decompose()?;
        Some(lu_substitute(&lu, &perm, b))
    }

    /// Matrix inverse by pivoted LU, `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Matrix3d> {
        let (lu, perm) = self.lu_decompose()?;
        let c0 = lu_substitute(&lu, &perm, Vector3d::new(1., 0., 0.));
        let c1 = lu_substitute(&lu, &perm, Vector3d::new(0., 1., 0.));
        let c2 = lu_substitute(&lu, &perm, Vector3d::new(0., 0., 1.));
        Some(Matrix3d::from_columns(c0, c1, c2))
    }

    #[inline]
    pub const fn mul_vector(&self, rhs: Vector3d) -> Vector3d {
        Vector3d {
            v: [
                self.v[0][0] * rhs.v[0] + self.v[0][1] * rhs.v[1] + self.v[0][2] * rhs.v[2],
                self.v[1][0] * rhs.v[0] + self.v[1][1] * rhs.v[1] + self.v[1][2] * rhs.v[2],
                self.v[2][0] * rhs.v[0] + self.v[2][1] * rhs.v[1] + self.v[2][2] * rhs.v[2],
            ],
        }
    }

    /// Scales column `j` by `rhs.v[j]` for each column.
    #[inline]
    pub const fn mul_column_vector(&self, rhs: Vector3d) -> Matrix3d {
        Matrix3d {
            v: [
                [
                    self.v[0][0] * rhs.v[0],
                    self.v[0][1] * rhs.v[1],
                    self.v[0][2] * rhs.v[2],
                ],
                [
                    self.v[1][0] * rhs.v[0],
                    self.v[1][1] * rhs.v[1],
                    self.v[1][2] * rhs.v[2],
                ],
                [
                    self.v[2][0] * rhs.v[0],
                    self.v[2][1] * rhs.v[1],
                    self.v[2][2] * rhs.v[2],
                ],
            ],
        }
    }

    pub fn mat_mul(&self, other: Matrix3d) -> Matrix3d {
        let mut out = [[0f64; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = self.v[i][0] * other.v[0][j]
                    + self.v[i][1] * other.v[1][j]
                    + self.v[i][2] * other.v[2][j];
            }
        }
        Matrix3d { v: out }
    }

    /// Entry-wise comparison within `tolerance`.
    pub fn test_equality(&self, other: Matrix3d, tolerance: f64) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if (self.v[i][j] - other.v[i][j]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

/// Forward then back substitution against a packed pivoted LU factorization.
#[inline]
fn lu_substitute(lu: &[[f64; 3]; 3], perm: &[usize; 3], b: Vector3d) -> Vector3d {
    let mut y = [b.v[perm[0]], b.v[perm[1]], b.v[perm[2]]];
    y[1] -= lu[1][0] * y[0];
    y[2] -= lu[2][0] * y[0] + lu[2][1] * y[1];
    let mut x = [0f64; 3];
    x[2] = y[2] / lu[2][2];
    x[1] = (y[1] - lu[1][2] * x[2]) / lu[1][1];
    x[0] = (y[0] - lu[0][1] * x[1] - lu[0][2] * x[2]) / lu[0][0];
    Vector3d { v: x }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_round_trips_to_identity() {
        let m = Matrix3d {
            v: [[0.49, 0.31, 0.2], [0.17697, 0.8124, 0.01063], [0., 0.01, 0.99]],
        };
        let inverse = m.inverse().unwrap();
        assert!(m.mat_mul(inverse).test_equality(Matrix3d::IDENTITY, 1e-12));
        assert!(inverse.mat_mul(m).test_equality(Matrix3d::IDENTITY, 1e-12));
    }

    #[test]
    fn solve_recovers_known_vector() {
        let m = Matrix3d {
            v: [[2., 1., 1.], [1., 3., 2.], [1., 0., 0.]],
        };
        let x = Vector3d::new(0.3, -1.2, 2.5);
        let b = m.mul_vector(x);
        let solved = m.solve(b).unwrap();
        for i in 0..3 {
            assert!((solved.v[i] - x.v[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn solve_pivots_on_zero_leading_entry() {
        let m = Matrix3d {
            v: [[0., 1., 0.], [1., 0., 0.], [0., 0., 1.]],
        };
        let solved = m.solve(Vector3d::new(5., 7., 9.)).unwrap();
        assert_eq!(solved.v, [7., 5., 9.]);
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let m = Matrix3d {
            v: [[1., 2., 3.], [2., 4., 6.], [0.5, 1., 1.5]],
        };
        assert!(m.inverse().is_none());
        assert!(m.solve(Vector3d::new(1., 1., 1.)).is_none());
    }

    #[test]
    fn column_scaling_scales_each_column() {
        let scaled = Matrix3d::IDENTITY.mul_column_vector(Vector3d::new(2., 3., 4.));
        assert_eq!(scaled.v[0][0], 2.);
        assert_eq!(scaled.v[1][1], 3.);
        assert_eq!(scaled.v[2][2], 4.);
    }
}
