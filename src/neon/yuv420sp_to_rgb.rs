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
use crate::numerics::{UV_BIAS, U_TO_B, U_TO_G, V_TO_G, V_TO_R, YUV_SHIFT};
use crate::yuv420sp_to_rgb::ChromaOrder;
use std::arch::aarch64::*;

#[inline(always)]
unsafe fn neon_yuv_half(
    y: int16x8_t,
    ruv: int16x8_t,
    guv: int16x8_t,
    buv: int16x8_t,
) -> (uint8x8_t, uint8x8_t, uint8x8_t) {
    (
        vqshrun_n_s16::<YUV_SHIFT>(vaddq_s16(y, ruv)),
        vqshrun_n_s16::<YUV_SHIFT>(vaddq_s16(y, guv)),
        vqshrun_n_s16::<YUV_SHIFT>(vaddq_s16(y, buv)),
    )
}

/// Converts two luma rows sharing one chroma row, 16 columns per step
pub(crate) fn neon_yuv420sp_to_rgb_rows<const ORDER: u8>(
    y_plane0: &[u8],
    y_plane1: &[u8],
    chroma: &[u8],
    rgb0: &mut [u8],
    rgb1: &mut [u8],
    start_cx: usize,
    width: usize,
) -> usize {
    unsafe {
        let order: ChromaOrder = ORDER.into();

        let y_ptr0 = y_plane0.as_ptr();
        let y_ptr1 = y_plane1.as_ptr();
        let uv_ptr = chroma.as_ptr();
        let rgb_ptr0 = rgb0.as_mut_ptr();
        let rgb_ptr1 = rgb1.as_mut_ptr();

        let uv_bias = vdupq_n_s16(UV_BIAS);
        let v_r_coef = vdupq_n_s16(V_TO_R);
        let v_g_coef = vdupq_n_s16(-V_TO_G);
        let u_g_coef = vdupq_n_s16(-U_TO_G);
        let u_b_coef = vdupq_n_s16(U_TO_B);

        let mut cx = start_cx;

        while cx + 16 <= width {
            let y_values0 = vld1q_u8(y_ptr0.add(cx));
            let y_values1 = vld1q_u8(y_ptr1.add(cx));

            let uv_values = vld2_u8(uv_ptr.add(cx));
            let first = vsubq_s16(vreinterpretq_s16_u16(vmovl_u8(uv_values.0)), uv_bias);
            let second = vsubq_s16(vreinterpretq_s16_u16(vmovl_u8(uv_values.1)), uv_bias);
            let (u, v) = match order {
                ChromaOrder::Uv => (first, second),
                ChromaOrder::Vu => (second, first),
            };

            // one chroma sample covers two columns
            let u_low = vzip1q_s16(u, u);
            let u_high = vzip2q_s16(u, u);
            let v_low = vzip1q_s16(v, v);
            let v_high = vzip2q_s16(v, v);

            let ruv_low = vmulq_s16(v_low, v_r_coef);
            let guv_low = vmlaq_s16(vmulq_s16(v_low, v_g_coef), u_low, u_g_coef);
            let buv_low = vmulq_s16(u_low, u_b_coef);

            let ruv_high = vmulq_s16(v_high, v_r_coef);
            let guv_high = vmlaq_s16(vmulq_s16(v_high, v_g_coef), u_high, u_g_coef);
            let buv_high = vmulq_s16(u_high, u_b_coef);

            let y00 = vreinterpretq_s16_u16(vshll_n_u8::<YUV_SHIFT>(vget_low_u8(y_values0)));
            let y01 = vreinterpretq_s16_u16(vshll_high_n_u8::<YUV_SHIFT>(y_values0));
            let y10 = vreinterpretq_s16_u16(vshll_n_u8::<YUV_SHIFT>(vget_low_u8(y_values1)));
            let y11 = vreinterpretq_s16_u16(vshll_high_n_u8::<YUV_SHIFT>(y_values1));

            let (r00, g00, b00) = neon_yuv_half(y00, ruv_low, guv_low, buv_low);
            let (r01, g01, b01) = neon_yuv_half(y01, ruv_high, guv_high, buv_high);
            let (r10, g10, b10) = neon_yuv_half(y10, ruv_low, guv_low, buv_low);
            let (r11, g11, b11) = neon_yuv_half(y11, ruv_high, guv_high, buv_high);

            vst3q_u8(
                rgb_ptr0.add(cx * 3),
                uint8x16x3_t(
                    vcombine_u8(r00, r01),
                    vcombine_u8(g00, g01),
                    vcombine_u8(b00, b01),
                ),
            );
            vst3q_u8(
                rgb_ptr1.add(cx * 3),
                uint8x16x3_t(
                    vcombine_u8(r10, r11),
                    vcombine_u8(g10, g11),
                    vcombine_u8(b10, b11),
                ),
            );

            cx += 16;
        }

        cx
    }
}
