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
use criterion::{criterion_group, criterion_main, Criterion};
use pixel_tensor::{
    pixels_to_tensor, pixels_to_tensor_resize, resize_bilinear, tensor_to_pixels, PixelType,
};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920usize;
    let height = 1080usize;

    let mut rng = rand::rng();
    let mut rgba_bytes = vec![0u8; width * height * 4];
    rng.fill(&mut rgba_bytes[..]);
    let mut rgb_bytes = vec![0u8; width * height * 3];
    rng.fill(&mut rgb_bytes[..]);

    c.bench_function("pixel-tensor RGB -> Tensor RGB", |b| {
        b.iter(|| {
            let tensor = pixels_to_tensor(&rgb_bytes, PixelType::RGB, width, height).unwrap();
            assert!(!tensor.is_empty());
        })
    });

    c.bench_function("pixel-tensor RGB -> Tensor BGR", |b| {
        b.iter(|| {
            let tensor = pixels_to_tensor(&rgb_bytes, PixelType::RGB2BGR, width, height).unwrap();
            assert!(!tensor.is_empty());
        })
    });

    c.bench_function("pixel-tensor RGBA -> Tensor Gray", |b| {
        b.iter(|| {
            let tensor =
                pixels_to_tensor(&rgba_bytes, PixelType::RGBA2GRAY, width, height).unwrap();
            assert!(!tensor.is_empty());
        })
    });

    let rgba_tensor = pixels_to_tensor(&rgba_bytes, PixelType::RGBA, width, height).unwrap();

    c.bench_function("pixel-tensor Tensor RGBA -> RGBA", |b| {
        let mut dst = vec![0u8; width * height * 4];
        b.iter(|| {
            tensor_to_pixels(&rgba_tensor, PixelType::RGBA, &mut dst).unwrap();
        })
    });

    c.bench_function("pixel-tensor RGB resize 224x224", |b| {
        let mut dst = vec![0u8; 224 * 224 * 3];
        b.iter(|| {
            resize_bilinear(&rgb_bytes, width, height, &mut dst, 224, 224, 3).unwrap();
        })
    });

    c.bench_function("pixel-tensor RGB -> Tensor BGR 224x224", |b| {
        b.iter(|| {
            let tensor = pixels_to_tensor_resize(
                &rgb_bytes,
                PixelType::RGB2BGR,
                width,
                height,
                224,
                224,
            )
            .unwrap();
            assert!(!tensor.is_empty());
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
