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
use crate::numerics::{B_TO_Y, G_TO_Y, LUMA_SHIFT, R_TO_Y};
use crate::pixel_type::PixelLayout;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn sse_interleave_rgba(
    r: __m128i,
    g: __m128i,
    b: __m128i,
    a: __m128i,
) -> (__m128i, __m128i, __m128i, __m128i) {
    let rg_lo = _mm_unpacklo_epi8(r, g);
    let rg_hi = _mm_unpackhi_epi8(r, g);
    let ba_lo = _mm_unpacklo_epi8(b, a);
    let ba_hi = _mm_unpackhi_epi8(b, a);

    let rgba_0_lo = _mm_unpacklo_epi16(rg_lo, ba_lo);
    let rgba_0_hi = _mm_unpackhi_epi16(rg_lo, ba_lo);
    let rgba_1_lo = _mm_unpacklo_epi16(rg_hi, ba_hi);
    let rgba_1_hi = _mm_unpackhi_epi16(rg_hi, ba_hi);
    (rgba_0_lo, rgba_0_hi, rgba_1_lo, rgba_1_hi)
}

#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn sse_deinterleave_rgba(
    rgba0: __m128i,
    rgba1: __m128i,
    rgba2: __m128i,
    rgba3: __m128i,
) -> (__m128i, __m128i, __m128i, __m128i) {
    let t0 = _mm_unpacklo_epi8(rgba0, rgba1);
    let t1 = _mm_unpackhi_epi8(rgba0, rgba1);
    let t2 = _mm_unpacklo_epi8(rgba2, rgba3);
    let t3 = _mm_unpackhi_epi8(rgba2, rgba3);

    let t4 = _mm_unpacklo_epi16(t0, t2);
    let t5 = _mm_unpackhi_epi16(t0, t2);
    let t6 = _mm_unpacklo_epi16(t1, t3);
    let t7 = _mm_unpackhi_epi16(t1, t3);

    let l1 = _mm_unpacklo_epi32(t4, t6);
    let l2 = _mm_unpackhi_epi32(t4, t6);
    let l3 = _mm_unpacklo_epi32(t5, t7);
    let l4 = _mm_unpackhi_epi32(t5, t7);

    #[rustfmt::skip]
    let shuffle = _mm_setr_epi8(0, 4, 8, 12,
                                1, 5, 9, 13,
                                2, 6, 10, 14,
                                3, 7, 11, 15,
    );

    let r1 = _mm_shuffle_epi8(_mm_unpacklo_epi32(l1, l3), shuffle);
    let r2 = _mm_shuffle_epi8(_mm_unpackhi_epi32(l1, l3), shuffle);
    let r3 = _mm_shuffle_epi8(_mm_unpacklo_epi32(l2, l4), shuffle);
    let r4 = _mm_shuffle_epi8(_mm_unpackhi_epi32(l2, l4), shuffle);

    (r1, r2, r3, r4)
}

#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn sse_deinterleave_rgb(
    rgb0: __m128i,
    rgb1: __m128i,
    rgb2: __m128i,
) -> (__m128i, __m128i, __m128i) {
    #[rustfmt::skip]
    let idx = _mm_setr_epi8(0, 3, 6, 9,
                            12, 15, 2, 5, 8,
                            11, 14, 1, 4, 7,
                            10, 13);

    let r6b5g5_0 = _mm_shuffle_epi8(rgb0, idx);
    let g6r5b5_1 = _mm_shuffle_epi8(rgb1, idx);
    let b6g5r5_2 = _mm_shuffle_epi8(rgb2, idx);

    #[rustfmt::skip]
    let mask010 = _mm_setr_epi8(0, 0, 0, 0,
                                0, 0, -1, -1, -1,
                                -1, -1, 0, 0, 0,
                                0, 0);

    #[rustfmt::skip]
    let mask001 = _mm_setr_epi8(0, 0, 0, 0, 0,
                                0, 0, 0, 0, 0, 0,
                                -1, -1, -1, -1, -1);

    let b2g2b1 = _mm_blendv_epi8(b6g5r5_2, g6r5b5_1, mask001);
    let b2b0b1 = _mm_blendv_epi8(b2g2b1, r6b5g5_0, mask010);

    let r0r1b1 = _mm_blendv_epi8(r6b5g5_0, g6r5b5_1, mask010);
    let r0r1r2 = _mm_blendv_epi8(r0r1b1, b6g5r5_2, mask001);

    let g1r1g0 = _mm_blendv_epi8(g6r5b5_1, r6b5g5_0, mask001);
    let g1g2g0 = _mm_blendv_epi8(g1r1g0, b6g5r5_2, mask010);

    let g0g1g2 = _mm_alignr_epi8::<11>(g1g2g0, g1g2g0);
    let b0b1b2 = _mm_alignr_epi8::<6>(b2b0b1, b2b0b1);

    (r0r1r2, g0g1g2, b0b1b2)
}

#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn sse_interleave_rgb(
    r: __m128i,
    g: __m128i,
    b: __m128i,
) -> (__m128i, __m128i, __m128i) {
    let sh_a = _mm_setr_epi8(0, 11, 6, 1, 12, 7, 2, 13, 8, 3, 14, 9, 4, 15, 10, 5);
    let sh_b = _mm_setr_epi8(5, 0, 11, 6, 1, 12, 7, 2, 13, 8, 3, 14, 9, 4, 15, 10);
    let sh_c = _mm_setr_epi8(10, 5, 0, 11, 6, 1, 12, 7, 2, 13, 8, 3, 14, 9, 4, 15);
    let a0 = _mm_shuffle_epi8(r, sh_a);
    let b0 = _mm_shuffle_epi8(g, sh_b);
    let c0 = _mm_shuffle_epi8(b, sh_c);

    let m0 = _mm_setr_epi8(0, 0, -1, 0, 0, -1, 0, 0, -1, 0, 0, -1, 0, 0, -1, 0);
    let m1 = _mm_setr_epi8(0, -1, 0, 0, -1, 0, 0, -1, 0, 0, -1, 0, 0, -1, 0, 0);
    let v0 = _mm_blendv_epi8(_mm_blendv_epi8(a0, b0, m1), c0, m0);
    let v1 = _mm_blendv_epi8(_mm_blendv_epi8(b0, c0, m1), a0, m0);
    let v2 = _mm_blendv_epi8(_mm_blendv_epi8(c0, a0, m1), b0, m0);
    (v0, v1, v2)
}

/// Loads 16 pixels and splits them into R, G, B, A.
///
/// Gray is broadcast into R, G, B; alpha is zero for layouts without it.
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn _mm_load_deinterleave_rgbx<const LAYOUT: u8>(
    ptr: *const u8,
) -> (__m128i, __m128i, __m128i, __m128i) {
    let layout: PixelLayout = LAYOUT.into();
    match layout {
        PixelLayout::Gray => {
            let v = _mm_loadu_si128(ptr as *const __m128i);
            (v, v, v, _mm_setzero_si128())
        }
        PixelLayout::Rgb | PixelLayout::Bgr => {
            let row0 = _mm_loadu_si128(ptr as *const __m128i);
            let row1 = _mm_loadu_si128(ptr.add(16) as *const __m128i);
            let row2 = _mm_loadu_si128(ptr.add(32) as *const __m128i);
            let (c0, c1, c2) = sse_deinterleave_rgb(row0, row1, row2);
            if layout == PixelLayout::Rgb {
                (c0, c1, c2, _mm_setzero_si128())
            } else {
                (c2, c1, c0, _mm_setzero_si128())
            }
        }
        PixelLayout::Rgba => {
            let row0 = _mm_loadu_si128(ptr as *const __m128i);
            let row1 = _mm_loadu_si128(ptr.add(16) as *const __m128i);
            let row2 = _mm_loadu_si128(ptr.add(32) as *const __m128i);
            let row3 = _mm_loadu_si128(ptr.add(48) as *const __m128i);
            sse_deinterleave_rgba(row0, row1, row2, row3)
        }
    }
}

/// Stores 16 pixels, gray takes the R vector
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn _mm_store_interleave_rgbx<const LAYOUT: u8>(
    ptr: *mut u8,
    r: __m128i,
    g: __m128i,
    b: __m128i,
    a: __m128i,
) {
    let layout: PixelLayout = LAYOUT.into();
    match layout {
        PixelLayout::Gray => {
            _mm_storeu_si128(ptr as *mut __m128i, r);
        }
        PixelLayout::Rgb | PixelLayout::Bgr => {
            let (v0, v1, v2) = if layout == PixelLayout::Rgb {
                sse_interleave_rgb(r, g, b)
            } else {
                sse_interleave_rgb(b, g, r)
            };
            _mm_storeu_si128(ptr as *mut __m128i, v0);
            _mm_storeu_si128(ptr.add(16) as *mut __m128i, v1);
            _mm_storeu_si128(ptr.add(32) as *mut __m128i, v2);
        }
        PixelLayout::Rgba => {
            let (v0, v1, v2, v3) = sse_interleave_rgba(r, g, b, a);
            _mm_storeu_si128(ptr as *mut __m128i, v0);
            _mm_storeu_si128(ptr.add(16) as *mut __m128i, v1);
            _mm_storeu_si128(ptr.add(32) as *mut __m128i, v2);
            _mm_storeu_si128(ptr.add(48) as *mut __m128i, v3);
        }
    }
}

/// Widens 16 unsigned bytes and stores them as 16 floats
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn _mm_store_epu8_as_ps(ptr: *mut f32, v: __m128i) {
    let v0 = _mm_cvtepi32_ps(_mm_cvtepu8_epi32(v));
    let v1 = _mm_cvtepi32_ps(_mm_cvtepu8_epi32(_mm_srli_si128::<4>(v)));
    let v2 = _mm_cvtepi32_ps(_mm_cvtepu8_epi32(_mm_srli_si128::<8>(v)));
    let v3 = _mm_cvtepi32_ps(_mm_cvtepu8_epi32(_mm_srli_si128::<12>(v)));
    _mm_storeu_ps(ptr, v0);
    _mm_storeu_ps(ptr.add(4), v1);
    _mm_storeu_ps(ptr.add(8), v2);
    _mm_storeu_ps(ptr.add(12), v3);
}

/// Widens 8 unsigned 16-bit lanes and stores them as 8 floats
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn _mm_store_epu16_as_ps(ptr: *mut f32, v: __m128i) {
    let v0 = _mm_cvtepi32_ps(_mm_cvtepu16_epi32(v));
    let v1 = _mm_cvtepi32_ps(_mm_cvtepu16_epi32(_mm_srli_si128::<8>(v)));
    _mm_storeu_ps(ptr, v0);
    _mm_storeu_ps(ptr.add(4), v1);
}

/// Saturating cast of 4 floats into `[0, 255]` with truncation.
///
/// `_mm_max_ps` returns the second operand for NaN, so NaN becomes zero.
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn _mm_saturate_ps_epi32(v: __m128) -> __m128i {
    let clamped = _mm_min_ps(_mm_max_ps(v, _mm_setzero_ps()), _mm_set1_ps(255f32));
    _mm_cvttps_epi32(clamped)
}

/// Loads 16 floats and saturates them into 16 unsigned bytes
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn _mm_load_ps_saturate_epu8(ptr: *const f32) -> __m128i {
    let v0 = _mm_saturate_ps_epi32(_mm_loadu_ps(ptr));
    let v1 = _mm_saturate_ps_epi32(_mm_loadu_ps(ptr.add(4)));
    let v2 = _mm_saturate_ps_epi32(_mm_loadu_ps(ptr.add(8)));
    let v3 = _mm_saturate_ps_epi32(_mm_loadu_ps(ptr.add(12)));
    _mm_packus_epi16(_mm_packs_epi32(v0, v1), _mm_packs_epi32(v2, v3))
}

/// Q8 luma of 8 pixels held in the low halves of `r`, `g`, `b` as u16 lanes.
///
/// The weighted sum never exceeds 65280 so 16-bit lanes don't wrap.
#[inline]
#[target_feature(enable = "sse4.1")]
pub(crate) unsafe fn _mm_luma_epu16(r: __m128i, g: __m128i, b: __m128i) -> __m128i {
    let v_r = _mm_set1_epi16(R_TO_Y as i16);
    let v_g = _mm_set1_epi16(G_TO_Y as i16);
    let v_b = _mm_set1_epi16(B_TO_Y as i16);
    let y = _mm_add_epi16(
        _mm_add_epi16(_mm_mullo_epi16(r, v_r), _mm_mullo_epi16(g, v_g)),
        _mm_mullo_epi16(b, v_b),
    );
    _mm_srli_epi16::<LUMA_SHIFT>(y)
}
