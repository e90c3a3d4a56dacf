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

/// CIE standard colorimetric observer.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub enum Observer {
    Cie1931TwoDegree,
    Cie1964TenDegree,
}

impl Observer {
    pub fn from_name(name: &str) -> Result<Self, GamutError> {
        match name {
            "Standard CIE 1931 2 Degree Observer" | "CIE 1931 2 Degree Standard Observer" => {
                Ok(Observer::Cie1931TwoDegree)
            }
            "Standard CIE 1964 10 Degree Observer" | "CIE 1964 10 Degree Standard Observer" => {
                Ok(Observer::Cie1964TenDegree)
            }
            _ => Err(GamutError::UnknownIlluminant),
        }
    }
}

/// CIE standard illuminants with published chromaticity coordinates.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub enum Illuminant {
    A,
    B,
    C,
    D50,
    D55,
    D65,
    D75,
    E,
    F2,
    F7,
    F11,
}

impl Illuminant {
    pub fn from_name(name: &str) -> Result<Self, GamutError> {
        match name {
            "A" => Ok(Illuminant::A),
            "B" => Ok(Illuminant::B),
            "C" => Ok(Illuminant::C),
            "D50" => Ok(Illuminant::D50),
            "D55" => Ok(Illuminant::D55),
            "D65" => Ok(Illuminant::D65),
            "D75" => Ok(Illuminant::D75),
            "E" => Ok(Illuminant::E),
            "F2" => Ok(Illuminant::F2),
            "F7" => Ok(Illuminant::F7),
            "F11" => Ok(Illuminant::F11),
            _ => Err(GamutError::UnknownIlluminant),
        }
    }

    /// White point chromaticity for this illuminant under the given observer.
    pub const fn chromaticity(&self, observer: Observer) -> Chromaticity {
        match observer {
            Observer::Cie1931TwoDegree => match self {
                Illuminant::A => Chromaticity::new(0.44757, 0.40745),
                Illuminant::B => Chromaticity::new(0.34842, 0.35161),
                Illuminant::C => Chromaticity::new(0.31006, 0.31616),
                Illuminant::D50 => Chromaticity::new(0.34567, 0.35850),
                Illuminant::D55 => Chromaticity::new(0.33242, 0.34743),
                Illuminant::D65 => Chromaticity::new(0.31271, 0.32902),
                Illuminant::D75 => Chromaticity::new(0.29902, 0.31485),
                Illuminant::E => Chromaticity::new(1. / 3., 1. / 3.),
                Illuminant::F2 => Chromaticity::new(0.37208, 0.37529),
                Illuminant::F7 => Chromaticity::new(0.31292, 0.32933),
                Illuminant::F11 => Chromaticity::new(0.38052, 0.37713),
            },
            Observer::Cie1964TenDegree => match self {
                Illuminant::A => Chromaticity::new(0.45117, 0.40594),
                Illuminant::B => Chromaticity::new(0.34980, 0.35270),
                Illuminant::C => Chromaticity::new(0.31039, 0.31905),
                Illuminant::D50 => Chromaticity::new(0.34773, 0.35952),
                Illuminant::D55 => Chromaticity::new(0.33412, 0.34877),
                Illuminant::D65 => Chromaticity::new(0.31382, 0.33100),
                Illuminant::D75 => Chromaticity::new(0.29968, 0.31740),
                Illuminant::E => Chromaticity::new(1. / 3., 1. / 3.),
                Illuminant::F2 => Chromaticity::new(0.37925, 0.36733),
                Illuminant::F7 => Chromaticity::new(0.31569, 0.32960),
                Illuminant::F11 => Chromaticity::new(0.38541, 0.37123),
            },
        }
    }
}

/// Looks up a white point by (observer, illuminant) name pair.
pub fn white_point(observer: &str, illuminant: &str) -> Result<Chromaticity, GamutError> {
    let observer = Observer::from_name(observer)?;
    let illuminant = Illuminant::from_name(illuminant)?;
    Ok(illuminant.chromaticity(observer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d50_lookup_by_name() {
        let wp = white_point("Standard CIE 1931 2 Degree Observer", "D50").unwrap();
        assert_eq!(wp, Chromaticity::D50);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            white_point("Standard CIE 1931 2 Degree Observer", "D93"),
            Err(GamutError::UnknownIlluminant)
        );
        assert_eq!(
            white_point("Some Other Observer", "D50"),
            Err(GamutError::UnknownIlluminant)
        );
    }

    #[test]
    fn observers_disagree_on_d65() {
        let two = Illuminant::D65.chromaticity(Observer::Cie1931TwoDegree);
        let ten = Illuminant::D65.chromaticity(Observer::Cie1964TenDegree);
        assert!(two != ten);
        assert_eq!(two, Chromaticity::D65);
    }
}
