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
use crate::pixel_error::{check_pixels_destination, check_pixels_source};
use crate::PixelError;
use num_traits::AsPrimitive;

// Interpolation weights are Q11, a full weight is 2048.
const RESIZE_COEF_BITS: i32 = 11;
const RESIZE_COEF_SCALE: i32 = 1 << RESIZE_COEF_BITS;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct BilinearWeight {
    src0: usize,
    src1: usize,
    w0: i32,
    w1: i32,
}

/// Half-pixel centered sampling positions along one axis, clamped to the edges
fn compute_weights(src_size: usize, dst_size: usize) -> Vec<BilinearWeight> {
    let scale = src_size as f64 / dst_size as f64;
    let last = src_size - 1;
    (0..dst_size)
        .map(|dx| {
            let f: f32 = ((dx as f64 + 0.5) * scale - 0.5).as_();
            let mut sx: i64 = f.floor().as_();
            let mut fx = f - f.floor();
            if sx < 0 {
                sx = 0;
                fx = 0.;
            }
            let mut src0 = sx as usize;
            if src0 >= last {
                src0 = last;
                fx = 0.;
            }
            let w0: i32 = ((1f32 - fx) * RESIZE_COEF_SCALE as f32).round().as_();
            BilinearWeight {
                src0,
                src1: (src0 + 1).min(last),
                w0,
                w1: RESIZE_COEF_SCALE - w0,
            }
        })
        .collect()
}

/// Horizontal pass of one source row into Q11 intermediates
#[inline(always)]
fn resample_row<const CN: usize>(src_row: &[u8], row: &mut [i32], weights: &[BilinearWeight]) {
    for (dst, weight) in row.chunks_exact_mut(CN).zip(weights.iter()) {
        let p0 = &src_row[weight.src0 * CN..weight.src0 * CN + CN];
        let p1 = &src_row[weight.src1 * CN..weight.src1 * CN + CN];
        for ((dst, &a), &b) in dst.iter_mut().zip(p0.iter()).zip(p1.iter()) {
            let a: i32 = a.as_();
            let b: i32 = b.as_();
            *dst = a * weight.w0 + b * weight.w1;
        }
    }
}

fn resize_bilinear_impl<const CN: usize>(
    src: &[u8],
    src_width: usize,
    src_height: usize,
    dst: &mut [u8],
    dst_width: usize,
    dst_height: usize,
) {
    let x_weights = compute_weights(src_width, dst_width);
    let y_weights = compute_weights(src_height, dst_height);

    let src_stride = src_width * CN;
    let dst_stride = dst_width * CN;

    let mut rows0 = vec![0i32; dst_stride];
    let mut rows1 = vec![0i32; dst_stride];
    // source rows currently held by `rows0` and `rows1`
    let mut cached: Option<(usize, usize)> = None;

    const ROUNDING: i32 = 1 << (RESIZE_COEF_BITS * 2 - 1);

    for (dst_row, y_weight) in dst.chunks_exact_mut(dst_stride).zip(y_weights.iter()) {
        let sy0 = y_weight.src0;
        let sy1 = y_weight.src1;
        match cached {
            Some((c0, c1)) if c0 == sy0 && c1 == sy1 => {}
            Some((_, c1)) if c1 == sy0 => {
                std::mem::swap(&mut rows0, &mut rows1);
                resample_row::<CN>(
                    &src[sy1 * src_stride..(sy1 + 1) * src_stride],
                    &mut rows1,
                    &x_weights,
                );
            }
            _ => {
                resample_row::<CN>(
                    &src[sy0 * src_stride..(sy0 + 1) * src_stride],
                    &mut rows0,
                    &x_weights,
                );
                resample_row::<CN>(
                    &src[sy1 * src_stride..(sy1 + 1) * src_stride],
                    &mut rows1,
                    &x_weights,
                );
            }
        }
        cached = Some((sy0, sy1));

        for ((dst, &r0), &r1) in dst_row.iter_mut().zip(rows0.iter()).zip(rows1.iter()) {
            let v = (r0 * y_weight.w0 + r1 * y_weight.w1 + ROUNDING) >> (RESIZE_COEF_BITS * 2);
            *dst = v.clamp(0, 255) as u8;
        }
    }
}

/// Resizes interleaved 8-bit pixels with bilinear interpolation.
///
/// Sampling is centered on pixels (`sx = (dx + 0.5) * src_w / dst_w - 0.5`), samples
/// outside the image are clamped to the edge. Equal sizes produce an exact copy.
///
/// # Arguments
///
/// * `channels`: Samples per pixel, 1, 3 or 4.
pub fn resize_bilinear(
    src: &[u8],
    src_width: usize,
    src_height: usize,
    dst: &mut [u8],
    dst_width: usize,
    dst_height: usize,
    channels: usize,
) -> Result<(), PixelError> {
    if !matches!(channels, 1 | 3 | 4) {
        return Err(PixelError::UnsupportedChannels(channels));
    }
    check_pixels_source(src, src_width, src_height, channels)?;
    check_pixels_destination(dst, dst_width, dst_height, channels)?;

    match channels {
        1 => resize_bilinear_impl::<1>(src, src_width, src_height, dst, dst_width, dst_height),
        3 => resize_bilinear_impl::<3>(src, src_width, src_height, dst, dst_width, dst_height),
        _ => resize_bilinear_impl::<4>(src, src_width, src_height, dst, dst_width, dst_height),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_error::MismatchedSize;
    use rand::Rng;

    #[test]
    fn test_equal_sizes_copy() {
        let mut rng = rand::rng();
        for channels in [1usize, 3, 4] {
            let (width, height) = (rng.random_range(1..50), rng.random_range(1..50));
            let mut src = vec![0u8; width * height * channels];
            rng.fill(&mut src[..]);
            let mut dst = vec![0u8; src.len()];
            resize_bilinear(&src, width, height, &mut dst, width, height, channels).unwrap();
            assert_eq!(src, dst);
        }
    }

    #[test]
    fn test_upscale_row() {
        let src = [0u8, 100];
        let mut dst = [0u8; 4];
        resize_bilinear(&src, 2, 1, &mut dst, 4, 1, 1).unwrap();
        assert_eq!(dst, [0, 25, 75, 100]);
    }

    #[test]
    fn test_constant_image_stays_constant() {
        let mut rng = rand::rng();
        let value: u8 = rng.random();
        let src = vec![value; 7 * 5 * 3];
        for (dst_width, dst_height) in [(1usize, 1usize), (3, 11), (14, 2), (31, 17)] {
            let mut dst = vec![0u8; dst_width * dst_height * 3];
            resize_bilinear(&src, 7, 5, &mut dst, dst_width, dst_height, 3).unwrap();
            assert!(dst.iter().all(|&x| x == value));
        }
    }

    #[test]
    fn test_single_pixel_source() {
        let src = [1u8, 2, 3, 4];
        let mut dst = [0u8; 3 * 2 * 4];
        resize_bilinear(&src, 1, 1, &mut dst, 3, 2, 4).unwrap();
        for pixel in dst.chunks_exact(4) {
            assert_eq!(pixel, &src);
        }
    }

    #[test]
    fn test_weights_are_normalized() {
        for (src_size, dst_size) in [(1usize, 5usize), (5, 1), (7, 13), (13, 7), (640, 227)] {
            let weights = compute_weights(src_size, dst_size);
            assert_eq!(weights.len(), dst_size);
            for weight in weights {
                assert_eq!(weight.w0 + weight.w1, RESIZE_COEF_SCALE);
                assert!(weight.src0 < src_size && weight.src1 < src_size);
                assert!(weight.w0 >= 0 && weight.w1 >= 0);
            }
        }
    }

    #[test]
    fn test_contract_violations() {
        let src = [0u8; 4];
        let mut dst = [0u8; 8];
        assert_eq!(
            resize_bilinear(&src, 2, 1, &mut dst, 2, 2, 2),
            Err(PixelError::UnsupportedChannels(2))
        );
        assert_eq!(
            resize_bilinear(&src, 2, 2, &mut dst, 3, 2, 1),
            Err(PixelError::DestinationSizeMismatch(MismatchedSize {
                expected: 6,
                received: 8,
            }))
        );
        assert_eq!(
            resize_bilinear(&src, 2, 2, &mut dst, 0, 2, 1),
            Err(PixelError::ZeroBaseSize)
        );
    }
}
