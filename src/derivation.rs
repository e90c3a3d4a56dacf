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
use crate::chromaticity::Chromaticity;
use crate::err::GamutError;
use crate::matrix::Matrix3d;

/// Derives the normalized RGB to XYZ matrix from primaries and a white point.
///
/// The columns of the unnormalized primary matrix are the XYZ vectors of the
/// R, G and B primaries. Each column is then scaled so that the all-ones RGB
/// vector maps exactly onto the white point tristimulus values.
pub fn normalized_primary_matrix(
    primaries: [Chromaticity; 3],
    white_point: Chromaticity,
) -> Result<Matrix3d, GamutError> {
    let [red, green, blue] = primaries;
    let red = red
        .to_xyz()
        .ok_or(GamutError::DegenerateChromaticity)?
        .to_vector();
    let green = green
        .to_xyz()
        .ok_or(GamutError::DegenerateChromaticity)?
        .to_vector();
    let blue = blue
        .to_xyz()
        .ok_or(GamutError::DegenerateChromaticity)?
        .to_vector();
    let unnormalized = Matrix3d::from_columns(red, green, blue);
    let white = white_point
        .to_xyz()
        .ok_or(GamutError::DegenerateWhitePoint)?
        .to_vector();
    let scale = unnormalized
        .solve(white)
        .ok_or(GamutError::SingularPrimaryMatrix)?;
    Ok(unnormalized.mul_column_vector(scale))
}

/// Same as [`normalized_primary_matrix`] but also returns the XYZ to RGB inverse.
pub fn normalized_primary_matrices(
    primaries: [Chromaticity; 3],
    white_point: Chromaticity,
) -> Result<(Matrix3d, Matrix3d), GamutError> {
    let forward = normalized_primary_matrix(primaries, white_point)?;
    let inverse = forward
        .inverse()
        .ok_or(GamutError::SingularPrimaryMatrix)?;
    Ok((forward, inverse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Vector3d;

    const SRGB_PRIMARIES: [Chromaticity; 3] = [
        Chromaticity::new(0.64, 0.33),
        Chromaticity::new(0.30, 0.60),
        Chromaticity::new(0.15, 0.06),
    ];

    #[test]
    fn white_point_is_reproduced_by_unit_rgb() {
        let m = normalized_primary_matrix(SRGB_PRIMARIES, Chromaticity::D65).unwrap();
        let white = m.mul_vector(Vector3d::new(1., 1., 1.));
        let expected = Chromaticity::D65.to_xyz().unwrap().to_vector();
        for i in 0..3 {
            assert!((white.v[i] - expected.v[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn forward_and_inverse_round_trip() {
        let (m, minv) = normalized_primary_matrices(SRGB_PRIMARIES, Chromaticity::D65).unwrap();
        assert!(m.mat_mul(minv).test_equality(Matrix3d::IDENTITY, 1e-9));
        assert!(minv.mat_mul(m).test_equality(Matrix3d::IDENTITY, 1e-9));
    }

    #[test]
    fn srgb_matrix_matches_published_values() {
        let m = normalized_primary_matrix(SRGB_PRIMARIES, Chromaticity::D65).unwrap();
        let published = Matrix3d {
            v: [
                [0.4124, 0.3576, 0.1805],
                [0.2126, 0.7152, 0.0722],
                [0.0193, 0.1192, 0.9505],
            ],
        };
        assert!(m.test_equality(published, 1e-3));
    }

    #[test]
    fn zero_y_primary_is_rejected() {
        let primaries = [
            Chromaticity::new(0.64, 0.),
            Chromaticity::new(0.30, 0.60),
            Chromaticity::new(0.15, 0.06),
        ];
        assert_eq!(
            normalized_primary_matrix(primaries, Chromaticity::D65),
            Err(GamutError::DegenerateChromaticity)
        );
    }

    #[test]
    fn zero_y_white_point_is_rejected() {
        assert_eq!(
            normalized_primary_matrix(SRGB_PRIMARIES, Chromaticity::new(0.3127, 0.)),
            Err(GamutError::DegenerateWhitePoint)
        );
    }

    #[test]
    fn duplicated_primaries_are_rejected() {
        let primaries = [
            Chromaticity::new(0.64, 0.33),
            Chromaticity::new(0.64, 0.33),
            Chromaticity::new(0.15, 0.06),
        ];
        assert_eq!(
            normalized_primary_matrix(primaries, Chromaticity::D65),
            Err(GamutError::SingularPrimaryMatrix)
        );
    }

    #[test]
    fn collinear_primaries_are_rejected() {
        // Three distinct points on the line x = y.
        let primaries = [
            Chromaticity::new(0.2, 0.2),
            Chromaticity::new(0.3, 0.3),
            Chromaticity::new(0.4, 0.4),
        ];
        assert_eq!(
            normalized_primary_matrix(primaries, Chromaticity::D65),
            Err(GamutError::SingularPrimaryMatrix)
        );
    }
}
