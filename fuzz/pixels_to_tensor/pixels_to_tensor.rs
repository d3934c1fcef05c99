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
use pixel_tensor::{pixels_to_tensor, tensor_to_pixels, PixelConversion, PixelType};

fuzz_target!(|data: (u8, u8, u32, u8)| {
    fuzz_pixels_to_tensor(data.0, data.1, PixelType::from_bits(data.2), data.3);
    let conversion = PixelConversion::ALL[data.2 as usize % PixelConversion::ALL.len()];
    fuzz_pixels_to_tensor(data.0, data.1, conversion.pixel_type(), data.3);
});

fn fuzz_pixels_to_tensor(i_width: u8, i_height: u8, pixel_type: PixelType, value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let Some(conversion) = pixel_type.conversion() else {
        let tensor =
            pixels_to_tensor(&[], pixel_type, i_width as usize, i_height as usize).unwrap();
        assert!(tensor.is_empty());
        return;
    };
    let src_chans = conversion.source_layout().get_channels_count();
    let src_data = vec![value; src_chans * i_width as usize * i_height as usize];

    let tensor =
        pixels_to_tensor(&src_data, pixel_type, i_width as usize, i_height as usize).unwrap();
    assert_eq!(
        tensor.channels(),
        conversion.target_layout().get_channels_count()
    );
    assert!(tensor.as_slice().iter().all(|&x| x == value as f32));

    let mut dst_data = vec![0u8; src_data.len()];
    tensor_to_pixels(&tensor, pixel_type, &mut dst_data).unwrap();
    if conversion.source_layout().get_channels_count()
        == conversion.target_layout().get_channels_count()
    {
        assert_eq!(dst_data, src_data);
    }
}
