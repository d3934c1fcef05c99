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
use std::arch::aarch64::*;

/// Loads 16 pixels and splits them into R, G, B, A.
///
/// Gray is broadcast into R, G, B; alpha is zero for layouts without it.
#[inline(always)]
pub(crate) unsafe fn vld_deinterleave_rgbx<const LAYOUT: u8>(
    ptr: *const u8,
) -> (uint8x16_t, uint8x16_t, uint8x16_t, uint8x16_t) {
    let layout: PixelLayout = LAYOUT.into();
    match layout {
        PixelLayout::Gray => {
            let v = vld1q_u8(ptr);
            (v, v, v, vdupq_n_u8(0))
        }
        PixelLayout::Rgb => {
            let v = vld3q_u8(ptr);
            (v.0, v.1, v.2, vdupq_n_u8(0))
        }
        PixelLayout::Bgr => {
            let v = vld3q_u8(ptr);
            (v.2, v.1, v.0, vdupq_n_u8(0))
        }
        PixelLayout::Rgba => {
            let v = vld4q_u8(ptr);
            (v.0, v.1, v.2, v.3)
        }
    }
}

/// Stores 16 pixels, gray takes the R vector
#[inline(always)]
pub(crate) unsafe fn vst_interleave_rgbx<const LAYOUT: u8>(
    ptr: *mut u8,
    r: uint8x16_t,
    g: uint8x16_t,
    b: uint8x16_t,
    a: uint8x16_t,
) {
    let layout: PixelLayout = LAYOUT.into();
    match layout {
        PixelLayout::Gray => vst1q_u8(ptr, r),
        PixelLayout::Rgb => vst3q_u8(ptr, uint8x16x3_t(r, g, b)),
        PixelLayout::Bgr => vst3q_u8(ptr, uint8x16x3_t(b, g, r)),
        PixelLayout::Rgba => vst4q_u8(ptr, uint8x16x4_t(r, g, b, a)),
    }
}

#[inline(always)]
pub(crate) unsafe fn vst1q_u16_as_f32(ptr: *mut f32, v: uint16x8_t) {
    vst1q_f32(ptr, vcvtq_f32_u32(vmovl_u16(vget_low_u16(v))));
    vst1q_f32(ptr.add(4), vcvtq_f32_u32(vmovl_high_u16(v)));
}

/// Widens 16 unsigned bytes and stores them as 16 floats
#[inline(always)]
pub(crate) unsafe fn vst1q_u8_as_f32(ptr: *mut f32, v: uint8x16_t) {
    vst1q_u16_as_f32(ptr, vmovl_u8(vget_low_u8(v)));
    vst1q_u16_as_f32(ptr.add(8), vmovl_high_u8(v));
}

/// Q8 luma of 16 pixels as two halves of u16 lanes
#[inline(always)]
pub(crate) unsafe fn vluma_u8(
    r: uint8x16_t,
    g: uint8x16_t,
    b: uint8x16_t,
) -> (uint16x8_t, uint16x8_t) {
    let v_r = vdupq_n_u8(R_TO_Y as u8);
    let v_g = vdupq_n_u8(G_TO_Y as u8);
    let v_b = vdupq_n_u8(B_TO_Y as u8);

    let mut y_low = vmull_u8(vget_low_u8(r), vget_low_u8(v_r));
    y_low = vmlal_u8(y_low, vget_low_u8(g), vget_low_u8(v_g));
    y_low = vmlal_u8(y_low, vget_low_u8(b), vget_low_u8(v_b));

    let mut y_high = vmull_high_u8(r, v_r);
    y_high = vmlal_high_u8(y_high, g, v_g);
    y_high = vmlal_high_u8(y_high, b, v_b);

    (
        vshrq_n_u16::<LUMA_SHIFT>(y_low),
        vshrq_n_u16::<LUMA_SHIFT>(y_high),
    )
}

/// Clamps 4 floats into `[0, 255]` and truncates, NaN converts to zero
#[inline(always)]
pub(crate) unsafe fn vsaturate_f32_u16(v: float32x4_t) -> uint16x4_t {
    let clamped = vminq_f32(vmaxq_f32(v, vdupq_n_f32(0f32)), vdupq_n_f32(255f32));
    vmovn_u32(vcvtq_u32_f32(clamped))
}

/// Loads 16 floats and saturates them into 16 unsigned bytes
#[inline(always)]
pub(crate) unsafe fn vld1q_f32_saturate_u8(ptr: *const f32) -> uint8x16_t {
    let v0 = vsaturate_f32_u16(vld1q_f32(ptr));
    let v1 = vsaturate_f32_u16(vld1q_f32(ptr.add(4)));
    let v2 = vsaturate_f32_u16(vld1q_f32(ptr.add(8)));
    let v3 = vsaturate_f32_u16(vld1q_f32(ptr.add(12)));
    vcombine_u8(
        vmovn_u16(vcombine_u16(v0, v1)),
        vmovn_u16(vcombine_u16(v2, v3)),
    )
}
