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
use crate::matrix::Vector3d;

/// A point (x, y) on the CIE 1931 chromaticity diagram.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Chromaticity { x, y }
    }

    /// XYZ tristimulus values normalized to unit luminance.
    ///
    /// Returns `None` for a degenerate chromaticity, that is a zero
    /// y-coordinate or a non-finite coordinate.
    #[inline]
    pub fn to_xyz(&self) -> Option<Xyz> {
        if !self.x.is_finite() || !self.y.is_finite() || self.y == 0. {
            return None;
        }
        Some(Xyz {
            x: self.x / self.y,
            y: 1.,
            z: (1. - self.x - self.y) / self.y,
        })
    }

    pub const D65: Chromaticity = Chromaticity {
        x: 0.31271,
        y: 0.32902,
    };

    pub const D50: Chromaticity = Chromaticity {
        x: 0.34567,
        y: 0.35850,
    };
}

/// A CIE XYZ tristimulus triple.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Xyz { x, y, z }
    }

    #[inline]
    pub const fn to_vector(self) -> Vector3d {
        Vector3d {
            v: [self.x, self.y, self.z],
        }
    }

    #[inline]
    pub const fn from_vector(v: Vector3d) -> Self {
        Xyz {
            x: v.v[0],
            y: v.v[1],
            z: v.v[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d50_tristimulus_matches_published_values() {
        let wp = Chromaticity::D50.to_xyz().unwrap();
        assert!((wp.x - 0.96422).abs() < 1e-4);
        assert!((wp.y - 1.).abs() < 1e-12);
        assert!((wp.z - 0.82521).abs() < 1e-4);
    }

    #[test]
    fn zero_y_is_degenerate() {
        assert!(Chromaticity::new(0.3, 0.).to_xyz().is_none());
    }

    #[test]
    fn non_finite_coordinates_are_degenerate() {
        assert!(Chromaticity::new(f64::NAN, 0.3).to_xyz().is_none());
        assert!(Chromaticity::new(0.3, f64::INFINITY).to_xyz().is_none());
    }
}
