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
use std::error::Error;
use std::fmt::Display;

/// Errors raised while building a colorspace.
///
/// All of these are detected at construction time. Transforms on an already
/// built [`Colorspace`](crate::Colorspace) cannot fail.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub enum GamutError {
    /// A primary chromaticity has a zero y-coordinate, its XYZ column is undefined.
    DegenerateChromaticity,
    /// The white point chromaticity has a zero y-coordinate.
    DegenerateWhitePoint,
    /// The three primaries are collinear or duplicated, no invertible normalization exists.
    SingularPrimaryMatrix,
    /// An illuminant or observer name was not found in the illuminant table.
    UnknownIlluminant,
}

impl Display for GamutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamutError::DegenerateChromaticity => {
                f.write_str("Primary chromaticity has zero y-coordinate")
            }
            GamutError::DegenerateWhitePoint => {
                f.write_str("White point chromaticity has zero y-coordinate")
            }
            GamutError::SingularPrimaryMatrix => {
                f.write_str("Primary matrix is singular, primaries are collinear or duplicated")
            }
            GamutError::UnknownIlluminant => f.write_str("Unknown illuminant or observer name"),
        }
    }
}

impl Error for GamutError {}
