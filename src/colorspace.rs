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
use crate::chromaticity::{Chromaticity, Xyz};
use crate::derivation::normalized_primary_matrices;
use crate::err::GamutError;
use crate::gamma::TransferFunction;
use crate::matrix::{Matrix3d, Vector3d};

/// An RGB colorspace built from chromaticity primaries and a white point.
///
/// The derivation runs once at construction, all conversions on a built value
/// are pure and infallible. A `Colorspace` is immutable and can be shared
/// across threads freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Colorspace {
    name: String,
    primaries: [Chromaticity; 3],
    white_point: Chromaticity,
    rgb_to_xyz: Matrix3d,
    xyz_to_rgb: Matrix3d,
    transfer: TransferFunction,
}

impl Colorspace {
    pub fn new(
        name: impl Into<String>,
        primaries: [Chromaticity; 3],
        white_point: Chromaticity,
        transfer: TransferFunction,
    ) -> Result<Self, GamutError> {
        let (rgb_to_xyz, xyz_to_rgb) = normalized_primary_matrices(primaries, white_point)?;
        Ok(Colorspace {
            name: name.into(),
            primaries,
            white_point,
            rgb_to_xyz,
            xyz_to_rgb,
            transfer,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// R, G, B primary chromaticities in order.
    pub const fn primaries(&self) -> [Chromaticity; 3] {
        self.primaries
    }

    pub const fn white_point(&self) -> Chromaticity {
        self.white_point
    }

    pub const fn rgb_to_xyz_matrix(&self) -> Matrix3d {
        self.rgb_to_xyz
    }

    pub const fn xyz_to_rgb_matrix(&self) -> Matrix3d {
        self.xyz_to_rgb
    }

    pub const fn transfer_function(&self) -> TransferFunction {
        self.transfer
    }

    /// Maps a linear RGB triple to XYZ tristimulus values.
    #[inline]
    pub fn to_xyz(&self, rgb: [f64; 3]) -> Xyz {
        Xyz::from_vector(
            self.rgb_to_xyz
                .mul_vector(Vector3d::new(rgb[0], rgb[1], rgb[2])),
        )
    }

    /// Maps XYZ tristimulus values to a linear RGB triple.
    #[inline]
    pub fn from_xyz(&self, xyz: Xyz) -> [f64; 3] {
        self.xyz_to_rgb.mul_vector(xyz.to_vector()).v
    }

    /// Encodes a linear RGB triple with this colorspace's transfer function.
    #[inline]
    pub fn gamma(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.transfer.gamma_rgb(rgb)
    }

    /// Decodes a companded RGB triple back to linear RGB.
    #[inline]
    pub fn linearize(&self, rgb: [f64; 3]) -> [f64; 3] {
        self.transfer.linearize_rgb(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide_space() -> Colorspace {
        Colorspace::new(
            "Wide",
            [
                Chromaticity::new(0.7347, 0.2653),
                Chromaticity::new(0.1596, 0.8404),
                Chromaticity::new(0.0366, 0.0001),
            ],
            Chromaticity::D50,
            TransferFunction::Linear,
        )
        .unwrap()
    }

    #[test]
    fn construction_fails_for_degenerate_primaries() {
        let result = Colorspace::new(
            "Broken",
            [
                Chromaticity::new(0.2, 0.2),
                Chromaticity::new(0.3, 0.3),
                Chromaticity::new(0.4, 0.4),
            ],
            Chromaticity::D50,
            TransferFunction::Linear,
        );
        assert_eq!(result.unwrap_err(), GamutError::SingularPrimaryMatrix);
    }

    #[test]
    fn xyz_round_trip() {
        let space = wide_space();
        let rgb = [0.25, 0.5, 0.75];
        let back = space.from_xyz(space.to_xyz(rgb));
        for i in 0..3 {
            assert!((back[i] - rgb[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn unit_rgb_maps_to_white_point() {
        let space = wide_space();
        let white = space.to_xyz([1., 1., 1.]).to_vector();
        let expected = Chromaticity::D50.to_xyz().unwrap().to_vector();
        for i in 0..3 {
            assert!((white.v[i] - expected.v[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn matrices_are_mutual_inverses() {
        let space = wide_space();
        assert!(space
            .rgb_to_xyz_matrix()
            .mat_mul(space.xyz_to_rgb_matrix())
            .test_equality(Matrix3d::IDENTITY, 1e-9));
    }
}
