/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
#![forbid(unsafe_code)]

// Luma weights for 0.299, 0.587, 0.114 in Q8.
// Weights sum to 256, so R = G = B = k gives exactly k.
pub(crate) const LUMA_SHIFT: i32 = 8;
pub(crate) const R_TO_Y: u16 = 77;
pub(crate) const G_TO_Y: u16 = 150;
pub(crate) const B_TO_Y: u16 = 29;

// YCbCr to RGB in Q6:
// R = Y + 1.370705 * (V - 128)
// G = Y - 0.698001 * (V - 128) - 0.337633 * (U - 128)
// B = Y + 1.732446 * (U - 128)
// 87.725 -> 90, 44.672 -> 46, 21.609 -> 22, 110.877 -> 113
pub(crate) const YUV_SHIFT: i32 = 6;
pub(crate) const V_TO_R: i16 = 90;
pub(crate) const V_TO_G: i16 = 46;
pub(crate) const U_TO_G: i16 = 22;
pub(crate) const U_TO_B: i16 = 113;
pub(crate) const UV_BIAS: i16 = 128;

#[inline(always)]
/// Fixed point luma of one pixel
pub(crate) fn rgb_to_luma(r: u8, g: u8, b: u8) -> u8 {
    let y = r as u16 * R_TO_Y + g as u16 * G_TO_Y + b as u16 * B_TO_Y;
    (y >> LUMA_SHIFT) as u8
}

/// Clamps into `[0, 255]` and truncates
pub(crate) trait SaturateCast {
    fn saturate_u8(self) -> u8;
}

impl SaturateCast for i32 {
    #[inline(always)]
    fn saturate_u8(self) -> u8 {
        self.clamp(0, 255) as u8
    }
}

impl SaturateCast for f32 {
    #[inline(always)]
    fn saturate_u8(self) -> u8 {
        // `max` drops NaN, the truncating cast is exact inside the range
        self.max(0f32).min(255f32) as u8
    }
}

#[inline(always)]
/// One YUV sample with precomputed chroma term, the shift is arithmetic
pub(crate) fn yuv_to_channel(y: u8, chroma_term: i32) -> u8 {
    ((((y as i32) << YUV_SHIFT) + chroma_term) >> YUV_SHIFT).saturate_u8()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights_sum() {
        assert_eq!(R_TO_Y + G_TO_Y + B_TO_Y, 1 << LUMA_SHIFT);
        for k in 0..=255u8 {
            assert_eq!(rgb_to_luma(k, k, k), k);
        }
        // (770 + 3000 + 870) >> 8
        assert_eq!(rgb_to_luma(10, 20, 30), 18);
        assert_eq!(rgb_to_luma(100, 110, 120), 108);
    }

    #[test]
    fn test_saturate_float() {
        assert_eq!((-1f32).saturate_u8(), 0);
        assert_eq!((-0.7f32).saturate_u8(), 0);
        assert_eq!(0.99f32.saturate_u8(), 0);
        assert_eq!(127.5f32.saturate_u8(), 127);
        assert_eq!(255.9f32.saturate_u8(), 255);
        assert_eq!(1e20f32.saturate_u8(), 255);
        assert_eq!(f32::INFINITY.saturate_u8(), 255);
        assert_eq!(f32::NEG_INFINITY.saturate_u8(), 0);
        assert_eq!(f32::NAN.saturate_u8(), 0);
    }

    #[test]
    fn test_saturate_int() {
        assert_eq!((-5i32).saturate_u8(), 0);
        assert_eq!(300i32.saturate_u8(), 255);
        assert_eq!(17i32.saturate_u8(), 17);
    }

    #[test]
    fn test_yuv_channel_floor_shift() {
        assert_eq!(yuv_to_channel(128, 0), 128);
        // (0 - 1) >> 6 is -1, saturated to zero
        assert_eq!(yuv_to_channel(0, -1), 0);
        // 1 * 64 - 1 floors to 0
        assert_eq!(yuv_to_channel(1, -1), 0);
        assert_eq!(yuv_to_channel(255, 90 * 127), 255);
    }
}
