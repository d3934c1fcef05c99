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
use crate::pixel_type::PixelLayout;
use crate::sse::{
    _mm_load_deinterleave_rgbx, _mm_luma_epu16, _mm_store_epu16_as_ps, _mm_store_epu8_as_ps,
};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

pub(crate) fn sse_pixels_to_planes<const SRC: u8, const DST: u8>(
    src: &[u8],
    dst: &mut [f32],
    plane_size: usize,
    start_cx: usize,
) -> usize {
    unsafe { sse_pixels_to_planes_impl::<SRC, DST>(src, dst, plane_size, start_cx) }
}

#[target_feature(enable = "sse4.1")]
unsafe fn sse_pixels_to_planes_impl<const SRC: u8, const DST: u8>(
    src: &[u8],
    dst: &mut [f32],
    plane_size: usize,
    start_cx: usize,
) -> usize {
    let src_layout: PixelLayout = SRC.into();
    let dst_layout: PixelLayout = DST.into();
    let channels = src_layout.get_channels_count();

    let src_ptr = src.as_ptr();
    let dst_ptr = dst.as_mut_ptr();

    let r_plane = dst_ptr.add(dst_layout.get_r_channel_offset() * plane_size);
    let g_plane = dst_ptr.add(dst_layout.get_g_channel_offset() * plane_size);
    let b_plane = dst_ptr.add(dst_layout.get_b_channel_offset() * plane_size);
    let a_plane = dst_ptr.add(dst_layout.get_a_channel_offset() * plane_size);

    let reduce_to_luma = dst_layout.is_gray() && !src_layout.is_gray();

    let mut cx = start_cx;

    while cx + 16 <= plane_size {
        let (r, g, b, a) = _mm_load_deinterleave_rgbx::<SRC>(src_ptr.add(cx * channels));

        if reduce_to_luma {
            let zeros = _mm_setzero_si128();
            let y_lo = _mm_luma_epu16(
                _mm_cvtepu8_epi16(r),
                _mm_cvtepu8_epi16(g),
                _mm_cvtepu8_epi16(b),
            );
            let y_hi = _mm_luma_epu16(
                _mm_unpackhi_epi8(r, zeros),
                _mm_unpackhi_epi8(g, zeros),
                _mm_unpackhi_epi8(b, zeros),
            );
            _mm_store_epu16_as_ps(r_plane.add(cx), y_lo);
            _mm_store_epu16_as_ps(r_plane.add(cx + 8), y_hi);
        } else if dst_layout.is_gray() {
            _mm_store_epu8_as_ps(r_plane.add(cx), r);
        } else {
            _mm_store_epu8_as_ps(r_plane.add(cx), r);
            _mm_store_epu8_as_ps(g_plane.add(cx), g);
            _mm_store_epu8_as_ps(b_plane.add(cx), b);
            if dst_layout.has_alpha() {
                _mm_store_epu8_as_ps(a_plane.add(cx), a);
            }
        }

        cx += 16;
    }

    cx
}
