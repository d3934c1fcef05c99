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
use crate::neon::neon_support::{vld1q_f32_saturate_u8, vst_interleave_rgbx};
use crate::pixel_type::PixelLayout;
use std::arch::aarch64::*;

pub(crate) fn neon_planes_to_pixels<const SRC: u8, const DST: u8>(
    src: &[f32],
    dst: &mut [u8],
    plane_size: usize,
    start_cx: usize,
) -> usize {
    unsafe {
        let src_layout: PixelLayout = SRC.into();
        let dst_layout: PixelLayout = DST.into();
        let channels = dst_layout.get_channels_count();

        let src_ptr = src.as_ptr();
        let dst_ptr = dst.as_mut_ptr();

        let r_plane = src_ptr.add(src_layout.get_r_channel_offset() * plane_size);
        let g_plane = src_ptr.add(src_layout.get_g_channel_offset() * plane_size);
        let b_plane = src_ptr.add(src_layout.get_b_channel_offset() * plane_size);
        let a_plane = src_ptr.add(src_layout.get_a_channel_offset() * plane_size);

        let mut cx = start_cx;

        while cx + 16 <= plane_size {
            let r = vld1q_f32_saturate_u8(r_plane.add(cx));
            let (g, b, a) = if dst_layout.is_gray() {
                (r, r, r)
            } else {
                let g = vld1q_f32_saturate_u8(g_plane.add(cx));
                let b = vld1q_f32_saturate_u8(b_plane.add(cx));
                let a = if dst_layout.has_alpha() {
                    vld1q_f32_saturate_u8(a_plane.add(cx))
                } else {
                    vdupq_n_u8(0)
                };
                (g, b, a)
            };

            vst_interleave_rgbx::<DST>(dst_ptr.add(cx * channels), r, g, b, a);

            cx += 16;
        }

        cx
    }
}
