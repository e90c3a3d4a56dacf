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

use num_traits::Float;

/// Pure power-law companding.
///
/// Negative inputs clamp to zero before exponentiation, zero passes through.
/// Values above 1 are extrapolated by the same power law, scene-referred
/// pipelines rely on that headroom.
#[inline(always)]
pub fn pure_gamma_function<F: Float>(x: F, power: F) -> F {
    if x <= F::zero() {
        F::zero()
    } else {
        x.powf(power)
    }
}

/// Gamma transfer function for sRGB
#[inline(always)]
pub fn srgb_from_linear(linear: f64) -> f64 {
    if linear < 0. {
        0.
    } else if linear < 0.0030412825601275209 {
        linear * 12.92
    } else {
        1.0550107189475866 * linear.powf(1. / 2.4) - 0.0550107189475866
    }
}

/// Linear transfer function for sRGB
#[inline(always)]
pub fn srgb_to_linear(gamma: f64) -> f64 {
    if gamma < 0. {
        0.
    } else if gamma < 12.92 * 0.0030412825601275209 {
        gamma * (1. / 12.92)
    } else {
        ((gamma + 0.0550107189475866) / 1.0550107189475866).powf(2.4)
    }
}

/// A companding rule paired with its inverse.
///
/// [`TransferFunction::gamma`] encodes linear light for display,
/// [`TransferFunction::linearize`] decodes back to linear light. The pair is
/// total over the reals, per-channel application on a built colorspace never
/// fails.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub enum TransferFunction {
    /// Identity companding.
    Linear,
    /// Pure power-law companding with the given decoding exponent.
    PureGamma(f64),
    /// Piecewise sRGB companding, linear toe segment plus 2.4 power segment.
    Srgb,
}

impl TransferFunction {
    /// Encodes one linear channel value.
    #[inline(always)]
    pub fn gamma(&self, v: f64) -> f64 {
        match self {
            TransferFunction::Linear => v,
            TransferFunction::PureGamma(g) => pure_gamma_function(v, 1. / g),
            TransferFunction::Srgb => srgb_from_linear(v),
        }
    }

    /// Decodes one companded channel value back to linear.
    #[inline(always)]
    pub fn linearize(&self, v: f64) -> f64 {
        match self {
            TransferFunction::Linear => v,
            TransferFunction::PureGamma(g) => pure_gamma_function(v, *g),
            TransferFunction::Srgb => srgb_to_linear(v),
        }
    }

    /// Encodes an RGB triple element-wise.
    #[inline]
    pub fn gamma_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        [self.gamma(rgb[0]), self.gamma(rgb[1]), self.gamma(rgb[2])]
    }

    /// Decodes an RGB triple element-wise.
    #[inline]
    pub fn linearize_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        [
            self.linearize(rgb[0]),
            self.linearize(rgb[1]),
            self.linearize(rgb[2]),
        ]
    }

    pub fn generate_gamma_table_u8(&self) -> Box<[u8; 256]> {
        let mut table = Box::new([0; 256]);
        for (i, value) in table.iter_mut().enumerate() {
            *value = (self.gamma(i as f64 / 255.) * 255.).round().clamp(0., 255.) as u8;
        }
        table
    }

    pub fn generate_linear_table_u8(&self) -> Box<[f64; 256]> {
        let mut table = Box::new([0.; 256]);
        for (i, value) in table.iter_mut().enumerate() {
            *value = self.linearize(i as f64 / 255.);
        }
        table
    }

    pub fn generate_gamma_table_u16(&self, bit_depth: usize) -> Box<[u16; 65536]> {
        let mut table = Box::new([0; 65536]);
        let max_bp = ((1u32 << bit_depth as u32) - 1) as f64;
        for (i, value) in table.iter_mut().enumerate() {
            *value = (self.gamma(i as f64 / 65535.) * max_bp).round().clamp(0., max_bp) as u16;
        }
        table
    }

    pub fn generate_linear_table_u16(&self, bit_depth: usize) -> Box<[f64; 65536]> {
        let mut table = Box::new([0.; 65536]);
        let max_bp = (1usize << bit_depth as u32) - 1;
        let max_scale = 1. / max_bp as f64;
        for (i, value) in table.iter_mut().take(max_bp + 1).enumerate() {
            *value = self.linearize(i as f64 * max_scale);
        }
        table
    }
}
