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
#![no_main]

use libfuzzer_sys::fuzz_target;
use pixel_tensor::{
    pixels_to_tensor_resize, resize_bilinear, tensor_to_pixels_resize, PixelType,
};

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8)| {
    fuzz_resize(data.0, data.1, data.2, data.3, data.4, data.5);
});

fn fuzz_resize(
    src_width: u8,
    src_height: u8,
    dst_width: u8,
    dst_height: u8,
    channels: u8,
    value: u8,
) {
    if src_width == 0 || src_height == 0 || dst_width == 0 || dst_height == 0 {
        return;
    }
    let (channels, pixel_type) = match channels % 3 {
        0 => (1usize, PixelType::GRAY),
        1 => (3usize, PixelType::RGB2BGR),
        _ => (4usize, PixelType::RGBA),
    };
    let src_data = vec![value; src_width as usize * src_height as usize * channels];
    let mut dst_data = vec![0u8; dst_width as usize * dst_height as usize * channels];

    resize_bilinear(
        &src_data,
        src_width as usize,
        src_height as usize,
        &mut dst_data,
        dst_width as usize,
        dst_height as usize,
        channels,
    )
    .unwrap();
    assert!(dst_data.iter().all(|&x| x == value));

    let tensor = pixels_to_tensor_resize(
        &src_data,
        pixel_type,
        src_width as usize,
        src_height as usize,
        dst_width as usize,
        dst_height as usize,
    )
    .unwrap();
    assert_eq!(tensor.width(), dst_width as usize);

    let mut round_trip = vec![0u8; src_data.len()];
    tensor_to_pixels_resize(
        &tensor,
        pixel_type,
        &mut round_trip,
        src_width as usize,
        src_height as usize,
    )
    .unwrap();
    assert_eq!(round_trip, src_data);
}
