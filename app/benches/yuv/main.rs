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
use pixel_tensor::{yuv420sp_nv12_to_rgb, yuv420sp_to_rgb};
use rand::Rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920usize;
    let height = 1080usize;

    let mut rng = rand::rng();
    let mut yuv_bytes = vec![0u8; width * height + width.div_ceil(2) * 2 * height.div_ceil(2)];
    rng.fill(&mut yuv_bytes[..]);

    c.bench_function("pixel-tensor NV21 -> RGB", |b| {
        let mut rgb_bytes = vec![0u8; width * height * 3];
        b.iter(|| {
            yuv420sp_to_rgb(&yuv_bytes, width, height, &mut rgb_bytes).unwrap();
        })
    });

    c.bench_function("pixel-tensor NV12 -> RGB", |b| {
        let mut rgb_bytes = vec![0u8; width * height * 3];
        b.iter(|| {
            yuv420sp_nv12_to_rgb(&yuv_bytes, width, height, &mut rgb_bytes).unwrap();
        })
    });

    c.bench_function("pixel-tensor NV21 -> RGB odd size", |b| {
        let (odd_width, odd_height) = (width - 1, height - 1);
        let yuv_bytes = &yuv_bytes
            [..odd_width * odd_height + odd_width.div_ceil(2) * 2 * odd_height.div_ceil(2)];
        let mut rgb_bytes = vec![0u8; odd_width * odd_height * 3];
        b.iter(|| {
            yuv420sp_to_rgb(yuv_bytes, odd_width, odd_height, &mut rgb_bytes).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
