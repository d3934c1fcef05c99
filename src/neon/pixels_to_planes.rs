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
use crate::neon::neon_support::{vld_deinterleave_rgbx, vluma_u8, vst1q_u16_as_f32, vst1q_u8_as_f32};
use crate::pixel_type::PixelLayout;

pub(crate) fn neon_pixels_to_planes<const SRC: u8, const DST: u8>(
    src: &[u8],
    dst: &mut [f32],
    plane_size: usize,
    start_cx: usize,
) -> usize {
    unsafe {
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
            let (r, g, b, a) = vld_deinterleave_rgbx::<SRC>(src_ptr.add(cx * channels));

            if reduce_to_luma {
                let (y_low, y_high) = vluma_u8(r, g, b);
                vst1q_u16_as_f32(r_plane.add(cx), y_low);
                vst1q_u16_as_f32(r_plane.add(cx + 8), y_high);
            } else if dst_layout.is_gray() {
                vst1q_u8_as_f32(r_plane.add(cx), r);
            } else {
                vst1q_u8_as_f32(r_plane.add(cx), r);
                vst1q_u8_as_f32(g_plane.add(cx), g);
                vst1q_u8_as_f32(b_plane.add(cx), b);
                if dst_layout.has_alpha() {
                    vst1q_u8_as_f32(a_plane.add(cx), a);
                }
            }

            cx += 16;
        }

        cx
    }
}
