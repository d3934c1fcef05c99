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
use pixel_tensor::{yuv420sp_nv12_to_rgb, yuv420sp_to_rgb};

fuzz_target!(|data: (u8, u8, u8, u8, u8)| {
    fuzz_yuv420sp(data.0, data.1, data.2, data.3, data.4);
});

fn fuzz_yuv420sp(i_width: u8, i_height: u8, y_value: u8, u_value: u8, v_value: u8) {
    if i_height == 0 || i_width == 0 {
        return;
    }
    let width = i_width as usize;
    let height = i_height as usize;
    let chroma_pairs = width.div_ceil(2) * height.div_ceil(2);

    let mut nv21 = vec![y_value; width * height];
    let mut nv12 = nv21.clone();
    for _ in 0..chroma_pairs {
        nv21.extend_from_slice(&[v_value, u_value]);
        nv12.extend_from_slice(&[u_value, v_value]);
    }

    let mut rgb21 = vec![0u8; width * height * 3];
    let mut rgb12 = vec![0u8; width * height * 3];

    yuv420sp_to_rgb(&nv21, width, height, &mut rgb21).unwrap();
    yuv420sp_nv12_to_rgb(&nv12, width, height, &mut rgb12).unwrap();

    assert_eq!(rgb21, rgb12);
    // flat input gives one color everywhere
    for pixel in rgb21.chunks_exact(3) {
        assert_eq!(pixel, &rgb21[0..3]);
    }
}
