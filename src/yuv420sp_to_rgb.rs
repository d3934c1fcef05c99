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
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
use crate::neon::neon_yuv420sp_to_rgb_rows;
use crate::numerics::{yuv_to_channel, UV_BIAS, U_TO_B, U_TO_G, V_TO_G, V_TO_R};
use crate::pixel_error::{check_dimensions, check_pixels_destination, MismatchedSize};
use crate::simd_support::SimdBackend;
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    any(feature = "sse", feature = "avx")
))]
use crate::sse::sse_yuv420sp_to_rgb_rows;
use crate::PixelError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Byte order of an interleaved chroma pair
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ChromaOrder {
    /// NV12
    Uv = 0,
    /// NV21
    Vu = 1,
}

impl From<u8> for ChromaOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => ChromaOrder::Uv,
            1 => ChromaOrder::Vu,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

/// Two luma rows sharing a chroma row, returns the first column it didn't process
type RowsHandler = fn(&[u8], &[u8], &[u8], &mut [u8], &mut [u8], usize, usize) -> usize;

#[inline(always)]
fn yuv420sp_to_rgb_row<const ORDER: u8>(
    y_plane: &[u8],
    chroma: &[u8],
    rgb: &mut [u8],
    start_cx: usize,
    width: usize,
) {
    let order: ChromaOrder = ORDER.into();

    for ((rgb, y_src), uv) in rgb[start_cx * 3..width * 3]
        .chunks_mut(6)
        .zip(y_plane[start_cx..width].chunks(2))
        .zip(chroma[start_cx..].chunks_exact(2))
    {
        let (u, v) = match order {
            ChromaOrder::Uv => (uv[0], uv[1]),
            ChromaOrder::Vu => (uv[1], uv[0]),
        };
        let u = u as i32 - UV_BIAS as i32;
        let v = v as i32 - UV_BIAS as i32;

        let ruv = V_TO_R as i32 * v;
        let guv = -(V_TO_G as i32) * v - U_TO_G as i32 * u;
        let buv = U_TO_B as i32 * u;

        for (dst, &y) in rgb.chunks_exact_mut(3).zip(y_src.iter()) {
            dst[0] = yuv_to_channel(y, ruv);
            dst[1] = yuv_to_channel(y, guv);
            dst[2] = yuv_to_channel(y, buv);
        }
    }
}

fn make_yuv420sp_rows<const ORDER: u8>(backend: SimdBackend) -> Option<RowsHandler> {
    match backend {
        SimdBackend::Scalar => None,
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        SimdBackend::Sse41 => Some(sse_yuv420sp_to_rgb_rows::<ORDER>),
        // No dedicated AVX2 kernel, rows are short enough for 128-bit blocks
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
        SimdBackend::Avx2 => Some(sse_yuv420sp_to_rgb_rows::<ORDER>),
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        SimdBackend::Neon => Some(neon_yuv420sp_to_rgb_rows::<ORDER>),
    }
}

pub(crate) fn yuv420sp_to_rgb_impl<const ORDER: u8>(
    yuv: &[u8],
    width: usize,
    height: usize,
    rgb: &mut [u8],
    backend: SimdBackend,
) -> Result<(), PixelError> {
    check_dimensions(width, height)?;
    let chroma_stride = width.div_ceil(2) * 2;
    let luma_size = width
        .checked_mul(height)
        .ok_or(PixelError::PointerOverflow)?;
    let expected = chroma_stride
        .checked_mul(height.div_ceil(2))
        .and_then(|chroma_size| chroma_size.checked_add(luma_size))
        .ok_or(PixelError::PointerOverflow)?;
    if yuv.len() != expected {
        return Err(PixelError::SourceSizeMismatch(MismatchedSize {
            expected,
            received: yuv.len(),
        }));
    }
    check_pixels_destination(rgb, width, height, 3)?;

    let (y_plane, uv_plane) = yuv.split_at(luma_size);
    let rgb_stride = width * 3;
    let handler = make_yuv420sp_rows::<ORDER>(backend);

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = y_plane
            .par_chunks_exact(width * 2)
            .zip(uv_plane.par_chunks_exact(chroma_stride))
            .zip(rgb.par_chunks_exact_mut(rgb_stride * 2));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = y_plane
            .chunks_exact(width * 2)
            .zip(uv_plane.chunks_exact(chroma_stride))
            .zip(rgb.chunks_exact_mut(rgb_stride * 2));
    }
    iter.for_each(|((y_src, uv_src), rgb)| {
        let (y_src0, y_src1) = y_src.split_at(width);
        let (rgb0, rgb1) = rgb.split_at_mut(rgb_stride);
        let mut cx = 0usize;
        if let Some(handler) = handler {
            cx = handler(y_src0, y_src1, uv_src, rgb0, rgb1, cx, width);
        }
        yuv420sp_to_rgb_row::<ORDER>(y_src0, uv_src, rgb0, cx, width);
        yuv420sp_to_rgb_row::<ORDER>(y_src1, uv_src, rgb1, cx, width);
    });

    if height & 1 != 0 {
        let y_src = y_plane.chunks_exact(width * 2).remainder();
        let rgb = rgb.chunks_exact_mut(rgb_stride * 2).into_remainder();
        if let Some(uv_src) = uv_plane.chunks_exact(chroma_stride).last() {
            yuv420sp_to_rgb_row::<ORDER>(y_src, uv_src, rgb, 0, width);
        }
    }

    Ok(())
}

/// Convert YUV 4:2:0 semi-planar NV21 to packed RGB.
///
/// `yuv` holds the luma plane, `width * height` bytes, directly followed by the
/// interleaved V, U plane of `((width + 1) / 2) * ((height + 1) / 2)` pairs.
/// Odd dimensions are supported: the last column and row reuse the chroma of their block.
///
/// # Arguments
///
/// * `yuv`: Luma and chroma planes without padding.
/// * `width`: Image width.
/// * `height`: Image height.
/// * `rgb`: Destination, `width * height * 3` bytes.
pub fn yuv420sp_to_rgb(
    yuv: &[u8],
    width: usize,
    height: usize,
    rgb: &mut [u8],
) -> Result<(), PixelError> {
    yuv420sp_to_rgb_impl::<{ ChromaOrder::Vu as u8 }>(
        yuv,
        width,
        height,
        rgb,
        SimdBackend::detect(),
    )
}

/// Convert YUV 4:2:0 semi-planar NV12 to packed RGB.
///
/// Same as [yuv420sp_to_rgb] with chroma pairs stored as U, V.
pub fn yuv420sp_nv12_to_rgb(
    yuv: &[u8],
    width: usize,
    height: usize,
    rgb: &mut [u8],
) -> Result<(), PixelError> {
    yuv420sp_to_rgb_impl::<{ ChromaOrder::Uv as u8 }>(
        yuv,
        width,
        height,
        rgb,
        SimdBackend::detect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn reference_nv21(yuv: &[u8], width: usize, height: usize) -> Vec<u8> {
        let chroma_stride = width.div_ceil(2) * 2;
        let (y_plane, uv_plane) = yuv.split_at(width * height);
        let mut rgb = vec![0u8; width * height * 3];
        for y in 0..height {
            for x in 0..width {
                let luma = y_plane[y * width + x] as f32;
                let uv = &uv_plane[(y / 2) * chroma_stride + (x / 2) * 2..];
                let v = uv[0] as i32 - 128;
                let u = uv[1] as i32 - 128;
                let sample = |term: i32| -> u8 {
                    let value = ((luma as i32 * 64 + term) as f32 / 64.).floor();
                    value.max(0.).min(255.) as u8
                };
                let dst = &mut rgb[(y * width + x) * 3..];
                dst[0] = sample(90 * v);
                dst[1] = sample(-46 * v - 22 * u);
                dst[2] = sample(113 * u);
            }
        }
        rgb
    }

    #[test]
    fn test_flat_gray() {
        let yuv = [128u8; 4 * 2 + 4];
        let mut rgb = [0u8; 4 * 2 * 3];
        yuv420sp_to_rgb(&yuv, 4, 2, &mut rgb).unwrap();
        assert!(rgb.iter().all(|&x| x == 128));
    }

    #[test]
    fn test_odd_dimensions_match_reference() {
        let mut rng = rand::rng();
        for (width, height) in [(1usize, 1usize), (3, 3), (5, 2), (2, 5), (17, 9), (33, 7)] {
            let len = width * height + width.div_ceil(2) * 2 * height.div_ceil(2);
            let mut yuv = vec![0u8; len];
            rng.fill(&mut yuv[..]);
            let mut rgb = vec![0u8; width * height * 3];
            yuv420sp_to_rgb(&yuv, width, height, &mut rgb).unwrap();
            assert_eq!(rgb, reference_nv21(&yuv, width, height), "{}x{}", width, height);
        }
    }

    #[test]
    fn test_nv12_swaps_chroma() {
        let mut rng = rand::rng();
        let (width, height) = (37usize, 6usize);
        let luma_size = width * height;
        let mut nv21 = vec![0u8; luma_size + width.div_ceil(2) * 2 * height.div_ceil(2)];
        rng.fill(&mut nv21[..]);
        let mut nv12 = nv21.clone();
        for pair in nv12[luma_size..].chunks_exact_mut(2) {
            pair.swap(0, 1);
        }
        let mut rgb21 = vec![0u8; luma_size * 3];
        let mut rgb12 = vec![0u8; luma_size * 3];
        yuv420sp_to_rgb(&nv21, width, height, &mut rgb21).unwrap();
        yuv420sp_nv12_to_rgb(&nv12, width, height, &mut rgb12).unwrap();
        assert_eq!(rgb21, rgb12);
    }

    #[test]
    fn test_backends_match_scalar() {
        let mut rng = rand::rng();
        let widths = [1usize, 2, 7, 8, 9, 15, 16, 17, 31, 32, 33, 48, 65];
        for &width in widths.iter() {
            for height in [1usize, 2, 3, 4] {
                let len = width * height + width.div_ceil(2) * 2 * height.div_ceil(2);
                let mut yuv = vec![0u8; len];
                rng.fill(&mut yuv[..]);
                let mut reference = vec![0u8; width * height * 3];
                yuv420sp_to_rgb_impl::<{ ChromaOrder::Vu as u8 }>(
                    &yuv,
                    width,
                    height,
                    &mut reference,
                    SimdBackend::Scalar,
                )
                .unwrap();
                for backend in SimdBackend::available() {
                    let mut rgb = vec![0u8; reference.len()];
                    yuv420sp_to_rgb_impl::<{ ChromaOrder::Vu as u8 }>(
                        &yuv, width, height, &mut rgb, backend,
                    )
                    .unwrap();
                    assert_eq!(rgb, reference, "{:?} diverged for {}x{}", backend, width, height);
                    yuv420sp_to_rgb_impl::<{ ChromaOrder::Uv as u8 }>(
                        &yuv, width, height, &mut rgb, backend,
                    )
                    .unwrap();
                    let mut nv12_reference = vec![0u8; reference.len()];
                    yuv420sp_to_rgb_impl::<{ ChromaOrder::Uv as u8 }>(
                        &yuv,
                        width,
                        height,
                        &mut nv12_reference,
                        SimdBackend::Scalar,
                    )
                    .unwrap();
                    assert_eq!(rgb, nv12_reference);
                }
            }
        }
    }

    #[test]
    fn test_contract_violations() {
        let yuv = [0u8; 8];
        let mut rgb = [0u8; 12];
        assert_eq!(
            yuv420sp_to_rgb(&yuv, 2, 2, &mut rgb),
            Err(PixelError::SourceSizeMismatch(MismatchedSize {
                expected: 6,
                received: 8,
            }))
        );
        assert_eq!(
            yuv420sp_to_rgb(&yuv[..6], 2, 2, &mut rgb[..11]),
            Err(PixelError::DestinationSizeMismatch(MismatchedSize {
                expected: 12,
                received: 11,
            }))
        );
        assert_eq!(
            yuv420sp_to_rgb(&yuv, 0, 2, &mut rgb),
            Err(PixelError::ZeroBaseSize)
        );
    }
}
