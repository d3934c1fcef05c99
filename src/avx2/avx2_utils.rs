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
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Widens 16 unsigned bytes and stores them as 16 floats
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn _mm256_store_epu8_as_ps(ptr: *mut f32, v: __m128i) {
    let lo = _mm256_cvtepi32_ps(_mm256_cvtepu8_epi32(v));
    let hi = _mm256_cvtepi32_ps(_mm256_cvtepu8_epi32(_mm_srli_si128::<8>(v)));
    _mm256_storeu_ps(ptr, lo);
    _mm256_storeu_ps(ptr.add(8), hi);
}

/// Widens 16 unsigned 16-bit lanes and stores them as 16 floats
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn _mm256_store_epu16_as_ps(ptr: *mut f32, v: __m256i) {
    let lo = _mm256_cvtepi32_ps(_mm256_cvtepu16_epi32(_mm256_castsi256_si128(v)));
    let hi = _mm256_cvtepi32_ps(_mm256_cvtepu16_epi32(_mm256_extracti128_si256::<1>(v)));
    _mm256_storeu_ps(ptr, lo);
    _mm256_storeu_ps(ptr.add(8), hi);
}

/// Q8 luma of 16 pixels, R, G, B given as unsigned bytes
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn _mm256_luma_epu8(r: __m128i, g: __m128i, b: __m128i) -> __m256i {
    let v_r = _mm256_set1_epi16(R_TO_Y as i16);
    let v_g = _mm256_set1_epi16(G_TO_Y as i16);
    let v_b = _mm256_set1_epi16(B_TO_Y as i16);
    let r16 = _mm256_cvtepu8_epi16(r);
    let g16 = _mm256_cvtepu8_epi16(g);
    let b16 = _mm256_cvtepu8_epi16(b);
    let y = _mm256_add_epi16(
        _mm256_add_epi16(_mm256_mullo_epi16(r16, v_r), _mm256_mullo_epi16(g16, v_g)),
        _mm256_mullo_epi16(b16, v_b),
    );
    _mm256_srli_epi16::<LUMA_SHIFT>(y)
}

/// Saturating cast of 8 floats into `[0, 255]` with truncation, NaN becomes zero
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn _mm256_saturate_ps_epi32(v: __m256) -> __m256i {
    let clamped = _mm256_min_ps(
        _mm256_max_ps(v, _mm256_setzero_ps()),
        _mm256_set1_ps(255f32),
    );
    _mm256_cvttps_epi32(clamped)
}

/// Loads 16 floats and saturates them into 16 unsigned bytes
#[inline]
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn _mm256_load_ps_saturate_epu8(ptr: *const f32) -> __m128i {
    let lo = _mm256_saturate_ps_epi32(_mm256_loadu_ps(ptr));
    let hi = _mm256_saturate_ps_epi32(_mm256_loadu_ps(ptr.add(8)));
    // packs works per 128-bit lane, restore linear order before narrowing
    let packed = _mm256_permute4x64_epi64::<0b11_01_10_00>(_mm256_packs_epi32(lo, hi));
    _mm_packus_epi16(
        _mm256_castsi256_si128(packed),
        _mm256_extracti128_si256::<1>(packed),
    )
}
