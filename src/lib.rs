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
#![deny(deprecated)]
#![allow(clippy::too_many_arguments)]
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
mod avx2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon;
mod numerics;
mod pixel_error;
mod pixel_type;
mod pixels_resize;
mod pixels_to_tensor;
mod resize_bilinear;
mod simd_support;
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    any(feature = "sse", feature = "avx")
))]
mod sse;
mod tensor;
mod tensor_to_pixels;
mod yuv420sp_to_rgb;

pub use pixel_error::{MismatchedSize, PixelError};
pub use pixel_type::{
    PixelConversion, PixelLayout, PixelType, PIXEL_CONVERT_MASK, PIXEL_CONVERT_SHIFT,
    PIXEL_FORMAT_MASK,
};
pub use tensor::{DefaultTensorAllocator, Tensor, TensorAllocator};

pub use pixels_to_tensor::pixels_to_tensor;
pub use pixels_to_tensor::pixels_to_tensor_with_allocator;

pub use tensor_to_pixels::tensor_to_pixels;

pub use pixels_resize::pixels_to_tensor_resize;
pub use pixels_resize::pixels_to_tensor_resize_with_allocator;
pub use pixels_resize::tensor_to_pixels_resize;

pub use resize_bilinear::resize_bilinear;

pub use yuv420sp_to_rgb::yuv420sp_nv12_to_rgb;
pub use yuv420sp_to_rgb::yuv420sp_to_rgb;
