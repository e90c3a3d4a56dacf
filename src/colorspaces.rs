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
#![allow(clippy::excessive_precision)]

use crate::chromaticity::Chromaticity;
use crate::colorspace::Colorspace;
use crate::err::GamutError;
use crate::gamma::TransferFunction;
use crate::illuminants::{Illuminant, Observer};

// http://www.hutchcolor.com/profiles/BestRGB.zip
const BEST_RGB_PRIMARIES: [Chromaticity; 3] = [
    Chromaticity::new(0.73519163763066209, 0.26480836236933797),
    Chromaticity::new(0.2153361344537815, 0.77415966386554624),
    Chromaticity::new(0.13012295081967212, 0.034836065573770496),
];

const SRGB_PRIMARIES: [Chromaticity; 3] = [
    Chromaticity::new(0.64, 0.33),
    Chromaticity::new(0.30, 0.60),
    Chromaticity::new(0.15, 0.06),
];

const ADOBE_RGB_1998_PRIMARIES: [Chromaticity; 3] = [
    Chromaticity::new(0.64, 0.33),
    Chromaticity::new(0.21, 0.71),
    Chromaticity::new(0.15, 0.06),
];

/// The *Best RGB* colorspace, wide gamut, D50, pure gamma 2.2.
pub fn best_rgb() -> Result<Colorspace, GamutError> {
    Colorspace::new(
        "Best RGB",
        BEST_RGB_PRIMARIES,
        Illuminant::D50.chromaticity(Observer::Cie1931TwoDegree),
        TransferFunction::PureGamma(2.2),
    )
}

/// The sRGB colorspace, IEC 61966-2-1, D65, piecewise companding.
pub fn srgb() -> Result<Colorspace, GamutError> {
    Colorspace::new(
        "sRGB",
        SRGB_PRIMARIES,
        Illuminant::D65.chromaticity(Observer::Cie1931TwoDegree),
        TransferFunction::Srgb,
    )
}

/// The Adobe RGB (1998) colorspace, D65, pure gamma 563/256.
pub fn adobe_rgb_1998() -> Result<Colorspace, GamutError> {
    Colorspace::new(
        "Adobe RGB 1998",
        ADOBE_RGB_1998_PRIMARIES,
        Illuminant::D65.chromaticity(Observer::Cie1931TwoDegree),
        TransferFunction::PureGamma(563. / 256.),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Matrix3d, Vector3d};

    #[test]
    fn best_rgb_reproduces_d50_white() {
        let space = best_rgb().unwrap();
        let white = space
            .rgb_to_xyz_matrix()
            .mul_vector(Vector3d::new(1., 1., 1.));
        let exact = space.white_point().to_xyz().unwrap().to_vector();
        for i in 0..3 {
            assert!((white.v[i] - exact.v[i]).abs() < 1e-9);
        }
        // Published D50 tristimulus values.
        assert!((white.v[0] - 0.96422).abs() < 1e-4);
        assert!((white.v[1] - 1.).abs() < 1e-9);
        assert!((white.v[2] - 0.82521).abs() < 1e-4);
    }

    #[test]
    fn best_rgb_matrices_invert() {
        let space = best_rgb().unwrap();
        assert!(space
            .rgb_to_xyz_matrix()
            .mat_mul(space.xyz_to_rgb_matrix())
            .test_equality(Matrix3d::IDENTITY, 1e-9));
        assert!(space
            .xyz_to_rgb_matrix()
            .mat_mul(space.rgb_to_xyz_matrix())
            .test_equality(Matrix3d::IDENTITY, 1e-9));
    }

    #[test]
    fn best_rgb_mid_gray_companding() {
        let space = best_rgb().unwrap();
        let encoded = space.gamma([0.5, 0.5, 0.5]);
        let expected = 0.5f64.powf(1. / 2.2);
        for channel in encoded {
            assert!((channel - expected).abs() < 1e-9);
        }
        let decoded = space.linearize(encoded);
        for channel in decoded {
            assert!((channel - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn srgb_matrix_matches_iec_values() {
        let space = srgb().unwrap();
        let published = Matrix3d {
            v: [
                [0.4124, 0.3576, 0.1805],
                [0.2126, 0.7152, 0.0722],
                [0.0193, 0.1192, 0.9505],
            ],
        };
        assert!(space.rgb_to_xyz_matrix().test_equality(published, 1e-3));
    }

    #[test]
    fn adobe_rgb_green_is_wider_than_srgb() {
        let adobe = adobe_rgb_1998().unwrap();
        let standard = srgb().unwrap();
        assert!(adobe.primaries()[1].y > standard.primaries()[1].y);
        assert_eq!(adobe.white_point(), standard.white_point());
    }
}
