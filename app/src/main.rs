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
use image::{GrayImage, ImageReader, RgbImage};
use pixel_tensor::{
    pixels_to_tensor, pixels_to_tensor_resize, tensor_to_pixels, tensor_to_pixels_resize,
    PixelType,
};
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./assets/bench.jpg".to_string());
    let img = ImageReader::open(&path).unwrap().decode().unwrap();
    let img = img.to_rgb8();

    let width = img.width() as usize;
    let height = img.height() as usize;
    let src_bytes = img.as_raw();

    let start_time = Instant::now();
    let tensor = pixels_to_tensor(src_bytes, PixelType::RGB2BGR, width, height).unwrap();
    println!("RGB -> Tensor BGR time: {:?}", start_time.elapsed());

    let start_time = Instant::now();
    let mut rgb = vec![0u8; src_bytes.len()];
    tensor_to_pixels(&tensor, PixelType::RGB2BGR, &mut rgb).unwrap();
    println!("Tensor BGR -> RGB time: {:?}", start_time.elapsed());
    assert_eq!(&rgb, src_bytes);

    let start_time = Instant::now();
    let small =
        pixels_to_tensor_resize(src_bytes, PixelType::RGB2BGR, width, height, 224, 224).unwrap();
    println!("RGB -> Tensor BGR 224x224 time: {:?}", start_time.elapsed());

    let mut small_rgb = vec![0u8; 224 * 224 * 3];
    tensor_to_pixels(&small, PixelType::RGB2BGR, &mut small_rgb).unwrap();
    RgbImage::from_raw(224, 224, small_rgb)
        .unwrap()
        .save("converted_small.png")
        .unwrap();

    let mut restored = vec![0u8; src_bytes.len()];
    tensor_to_pixels_resize(&small, PixelType::RGB2BGR, &mut restored, width, height).unwrap();
    RgbImage::from_raw(width as u32, height as u32, restored)
        .unwrap()
        .save("converted_restored.png")
        .unwrap();

    let start_time = Instant::now();
    let gray = pixels_to_tensor(src_bytes, PixelType::RGB2GRAY, width, height).unwrap();
    println!("RGB -> Tensor Gray time: {:?}", start_time.elapsed());

    let mut gray_bytes = vec![0u8; width * height];
    tensor_to_pixels(&gray, PixelType::GRAY, &mut gray_bytes).unwrap();
    GrayImage::from_raw(width as u32, height as u32, gray_bytes)
        .unwrap()
        .save("converted_gray.png")
        .unwrap();
}
