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
use crate::sse::sse_interleave_rgb;
use crate::yuv420sp_to_rgb::ChromaOrder;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

pub(crate) fn sse_yuv420sp_to_rgb_rows<const ORDER: u8>(
    y_plane0: &[u8],
    y_plane1: &[u8],
    chroma: &[u8],
    rgb0: &mut [u8],
    rgb1: &mut [u8],
    start_cx: usize,
    width: usize,
) -> usize {
    unsafe {
        sse_yuv420sp_to_rgb_rows_impl::<ORDER>(
            y_plane0, y_plane1, chroma, rgb0, rgb1, start_cx, width,
        )
    }
}

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn sse_store_rgb_half(ptr: *mut u8, r: __m128i, g: __m128i, b: __m128i) {
    let (v0, v1, _) = sse_interleave_rgb(r, g, b);
    _mm_storeu_si128(ptr as *mut __m128i, v0);
    _mm_storel_epi64(ptr.add(16) as *mut __m128i, v1);
}

#[target_feature(enable = "sse4.1")]
unsafe fn sse_yuv420sp_to_rgb_rows_impl<const ORDER: u8>(
    y_plane0: &[u8],
    y_plane1: &[u8],
    chroma: &[u8],
    rgb0: &mut [u8],
    rgb1: &mut [u8],
    start_cx: usize,
    width: usize,
) -> usize {
    let order: ChromaOrder = ORDER.into();

    let y_ptr0 = y_plane0.as_ptr();
    let y_ptr1 = y_plane1.as_ptr();
    let uv_ptr = chroma.as_ptr();
    let rgb_ptr0 = rgb0.as_mut_ptr();
    let rgb_ptr1 = rgb1.as_mut_ptr();

    let uv_bias = _mm_set1_epi16(UV_BIAS);
    let v_r_coef = _mm_set1_epi16(V_TO_R);
    let v_g_coef = _mm_set1_epi16(-V_TO_G);
    let u_g_coef = _mm_set1_epi16(-U_TO_G);
    let u_b_coef = _mm_set1_epi16(U_TO_B);
    let zeros = _mm_setzero_si128();

    // duplicates even (first) or odd (second) 16-bit lanes
    #[rustfmt::skip]
    let first_shuffle = _mm_setr_epi8(0, 1, 0, 1, 4, 5, 4, 5,
                                      8, 9, 8, 9, 12, 13, 12, 13);
    #[rustfmt::skip]
    let second_shuffle = _mm_setr_epi8(2, 3, 2, 3, 6, 7, 6, 7,
                                       10, 11, 10, 11, 14, 15, 14, 15);

    let mut cx = start_cx;

    while cx + 8 <= width {
        let y0 = _mm_slli_epi16::<YUV_SHIFT>(_mm_cvtepu8_epi16(_mm_loadl_epi64(
            y_ptr0.add(cx) as *const __m128i,
        )));
        let y1 = _mm_slli_epi16::<YUV_SHIFT>(_mm_cvtepu8_epi16(_mm_loadl_epi64(
            y_ptr1.add(cx) as *const __m128i,
        )));

        let uv = _mm_sub_epi16(
            _mm_cvtepu8_epi16(_mm_loadl_epi64(uv_ptr.add(cx) as *const __m128i)),
            uv_bias,
        );
        let first = _mm_shuffle_epi8(uv, first_shuffle);
        let second = _mm_shuffle_epi8(uv, second_shuffle);
        let (u, v) = match order {
            ChromaOrder::Uv => (first, second),
            ChromaOrder::Vu => (second, first),
        };

        let ruv = _mm_mullo_epi16(v, v_r_coef);
        let guv = _mm_add_epi16(_mm_mullo_epi16(v, v_g_coef), _mm_mullo_epi16(u, u_g_coef));
        let buv = _mm_mullo_epi16(u, u_b_coef);

        let r0 = _mm_packus_epi16(_mm_srai_epi16::<YUV_SHIFT>(_mm_add_epi16(y0, ruv)), zeros);
        let g0 = _mm_packus_epi16(_mm_srai_epi16::<YUV_SHIFT>(_mm_add_epi16(y0, guv)), zeros);
        let b0 = _mm_packus_epi16(_mm_srai_epi16::<YUV_SHIFT>(_mm_add_epi16(y0, buv)), zeros);

        let r1 = _mm_packus_epi16(_mm_srai_epi16::<YUV_SHIFT>(_mm_add_epi16(y1, ruv)), zeros);
        let g1 = _mm_packus_epi16(_mm_srai_epi16::<YUV_SHIFT>(_mm_add_epi16(y1, guv)), zeros);
        let b1 = _mm_packus_epi16(_mm_srai_epi16::<YUV_SHIFT>(_mm_add_epi16(y1, buv)), zeros);

        sse_store_rgb_half(rgb_ptr0.add(cx * 3), r0, g0, b0);
        sse_store_rgb_half(rgb_ptr1.add(cx * 3), r1, g1, b1);

        cx += 8;
    }

    cx
}
