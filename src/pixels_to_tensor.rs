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
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
use crate::avx2::avx2_pixels_to_planes;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
use crate::neon::neon_pixels_to_planes;
use crate::numerics::rgb_to_luma;
use crate::pixel_error::{check_dimensions, check_overflow_v3, check_pixels_source, MismatchedSize};
use crate::pixel_type::{PixelConversion, PixelLayout, PixelType};
use crate::simd_support::SimdBackend;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
use crate::sse::sse_pixels_to_planes;
use crate::tensor::{DefaultTensorAllocator, Tensor, TensorAllocator};
use crate::PixelError;

/// Vector block kernel, returns the first pixel it didn't process
type PlanesHandler = fn(&[u8], &mut [f32], usize, usize) -> usize;

#[inline(always)]
fn pixels_to_planes_row<const SRC: u8, const DST: u8>(
    src: &[u8],
    dst: &mut [f32],
    plane_size: usize,
    start_cx: usize,
) {
    let src_layout: PixelLayout = SRC.into();
    let dst_layout: PixelLayout = DST.into();
    let channels = src_layout.get_channels_count();

    let r_plane = dst_layout.get_r_channel_offset() * plane_size;
    let g_plane = dst_layout.get_g_channel_offset() * plane_size;
    let b_plane = dst_layout.get_b_channel_offset() * plane_size;
    let a_plane = dst_layout.get_a_channel_offset() * plane_size;

    let reduce_to_luma = dst_layout.is_gray() && !src_layout.is_gray();

    for (x, pixel) in src[start_cx * channels..plane_size * channels]
        .chunks_exact(channels)
        .enumerate()
    {
        let cx = start_cx + x;
        let r = pixel[src_layout.get_r_channel_offset()];
        let g = pixel[src_layout.get_g_channel_offset()];
        let b = pixel[src_layout.get_b_channel_offset()];

        if reduce_to_luma {
            dst[r_plane + cx] = rgb_to_luma(r, g, b) as f32;
        } else if dst_layout.is_gray() {
            dst[r_plane + cx] = r as f32;
        } else {
            dst[r_plane + cx] = r as f32;
            dst[g_plane + cx] = g as f32;
            dst[b_plane + cx] = b as f32;
            if dst_layout.has_alpha() {
                let a = if src_layout.has_alpha() {
                    pixel[src_layout.get_a_channel_offset()]
                } else {
                    0
                };
                dst[a_plane + cx] = a as f32;
            }
        }
    }
}

fn make_pixels_to_planes<const SRC: u8, const DST: u8>(
    backend: SimdBackend,
) -> Option<PlanesHandler> {
    match backend {
        SimdBackend::Scalar => None,
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        SimdBackend::Sse41 => Some(sse_pixels_to_planes::<SRC, DST>),
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
        SimdBackend::Avx2 => Some(avx2_pixels_to_planes::<SRC, DST>),
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        SimdBackend::Neon => Some(neon_pixels_to_planes::<SRC, DST>),
    }
}

fn encode_planes<const SRC: u8, const DST: u8>(
    src: &[u8],
    dst: &mut [f32],
    plane_size: usize,
    backend: SimdBackend,
) {
    let mut cx = 0usize;
    if let Some(handler) = make_pixels_to_planes::<SRC, DST>(backend) {
        cx = handler(src, dst, plane_size, cx);
    }
    pixels_to_planes_row::<SRC, DST>(src, dst, plane_size, cx);
}

pub(crate) fn pixels_to_tensor_impl(
    pixels: &[u8],
    pixel_type: PixelType,
    width: usize,
    height: usize,
    allocator: &dyn TensorAllocator,
    backend: SimdBackend,
) -> Result<Tensor, PixelError> {
    check_dimensions(width, height)?;
    let Some(conversion) = pixel_type.conversion() else {
        return Ok(Tensor::empty());
    };
    let src_layout = conversion.source_layout();
    let dst_layout = conversion.target_layout();
    check_pixels_source(pixels, width, height, src_layout.get_channels_count())?;

    let mut tensor = allocator.allocate(width, height, dst_layout.get_channels_count());
    if tensor.is_empty() {
        return Ok(tensor);
    }
    if tensor.width() != width
        || tensor.height() != height
        || tensor.channels() != dst_layout.get_channels_count()
    {
        return Err(PixelError::DestinationSizeMismatch(MismatchedSize {
            expected: check_overflow_v3(width, height, dst_layout.get_channels_count())?,
            received: tensor.as_slice().len(),
        }));
    }

    let plane_size = width * height;
    let dst = tensor.as_mut_slice();

    match conversion {
        PixelConversion::Rgb => encode_planes::<
            { PixelLayout::Rgb as u8 },
            { PixelLayout::Rgb as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::Bgr => encode_planes::<
            { PixelLayout::Bgr as u8 },
            { PixelLayout::Bgr as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::Gray => encode_planes::<
            { PixelLayout::Gray as u8 },
            { PixelLayout::Gray as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::Rgba => encode_planes::<
            { PixelLayout::Rgba as u8 },
            { PixelLayout::Rgba as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::RgbToBgr => encode_planes::<
            { PixelLayout::Rgb as u8 },
            { PixelLayout::Bgr as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::RgbToGray => encode_planes::<
            { PixelLayout::Rgb as u8 },
            { PixelLayout::Gray as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::BgrToRgb => encode_planes::<
            { PixelLayout::Bgr as u8 },
            { PixelLayout::Rgb as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::BgrToGray => encode_planes::<
            { PixelLayout::Bgr as u8 },
            { PixelLayout::Gray as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::GrayToRgb => encode_planes::<
            { PixelLayout::Gray as u8 },
            { PixelLayout::Rgb as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::GrayToBgr => encode_planes::<
            { PixelLayout::Gray as u8 },
            { PixelLayout::Bgr as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::RgbaToRgb => encode_planes::<
            { PixelLayout::Rgba as u8 },
            { PixelLayout::Rgb as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::RgbaToBgr => encode_planes::<
            { PixelLayout::Rgba as u8 },
            { PixelLayout::Bgr as u8 },
        >(pixels, dst, plane_size, backend),
        PixelConversion::RgbaToGray => encode_planes::<
            { PixelLayout::Rgba as u8 },
            { PixelLayout::Gray as u8 },
        >(pixels, dst, plane_size, backend),
    }

    Ok(tensor)
}

/// Converts interleaved 8-bit pixels into a planar `f32` tensor.
///
/// The tensor has the channel layout of the conversion target, e.g. one channel for
/// [PixelType::RGB2GRAY] and three channels in B, G, R order for [PixelType::RGB2BGR].
///
/// # Arguments
///
/// * `pixels`: Packed pixels without row padding, `width * height * channels` bytes.
/// * `pixel_type`: Layout of `pixels` and the optional conversion, see [PixelType].
/// * `width`: Image width.
/// * `height`: Image height.
///
/// Returns [Tensor::empty] when the selector has no conversion or allocation fails.
pub fn pixels_to_tensor(
    pixels: &[u8],
    pixel_type: PixelType,
    width: usize,
    height: usize,
) -> Result<Tensor, PixelError> {
    pixels_to_tensor_with_allocator(
        pixels,
        pixel_type,
        width,
        height,
        &DefaultTensorAllocator::default(),
    )
}

/// Same as [pixels_to_tensor], tensor storage is requested from `allocator`.
pub fn pixels_to_tensor_with_allocator(
    pixels: &[u8],
    pixel_type: PixelType,
    width: usize,
    height: usize,
    allocator: &dyn TensorAllocator,
) -> Result<Tensor, PixelError> {
    pixels_to_tensor_impl(
        pixels,
        pixel_type,
        width,
        height,
        allocator,
        SimdBackend::detect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    struct FailingAllocator {}

    impl TensorAllocator for FailingAllocator {
        fn allocate(&self, _: usize, _: usize, _: usize) -> Tensor {
            Tensor::empty()
        }
    }

    struct ShortAllocator {}

    impl TensorAllocator for ShortAllocator {
        fn allocate(&self, width: usize, height: usize, _: usize) -> Tensor {
            DefaultTensorAllocator::default().allocate(width, height, 1)
        }
    }

    #[test]
    fn test_rgb_to_gray_luma() {
        let pixels = [10u8, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
        let tensor = pixels_to_tensor(&pixels, PixelType::RGB2GRAY, 2, 2).unwrap();
        assert_eq!(tensor.channels(), 1);
        // (R * 77 + G * 150 + B * 29) >> 8 truncates
        assert_eq!(tensor.as_slice(), &[18., 48., 78., 108.]);
    }

    #[test]
    fn test_luma_is_exact_for_gray_input() {
        for (pixel_type, channels) in [
            (PixelType::RGB2GRAY, 3usize),
            (PixelType::BGR2GRAY, 3usize),
            (PixelType::RGBA2GRAY, 4usize),
        ] {
            let pixels: Vec<u8> = (0..=255u8)
                .flat_map(|k| [k, k, k, 255].into_iter().take(channels))
                .collect();
            for backend in SimdBackend::available() {
                let tensor = pixels_to_tensor_impl(
                    &pixels,
                    pixel_type,
                    16,
                    16,
                    &DefaultTensorAllocator::default(),
                    backend,
                )
                .unwrap();
                assert_eq!(tensor.channels(), 1);
                for (k, &v) in tensor.as_slice().iter().enumerate() {
                    assert_eq!(
                        v, k as f32,
                        "Luma mismatch for {:?} on {:?}",
                        pixel_type, backend
                    );
                }
            }
        }
    }

    #[test]
    fn test_identity_copies_memory_order() {
        let pixels = [1u8, 2, 3, 4, 5, 6];
        let rgb = pixels_to_tensor(&pixels, PixelType::RGB, 2, 1).unwrap();
        assert_eq!(rgb.as_slice(), &[1., 4., 2., 5., 3., 6.]);
        let bgr = pixels_to_tensor(&pixels, PixelType::BGR, 2, 1).unwrap();
        assert_eq!(bgr.as_slice(), rgb.as_slice());
        let swapped = pixels_to_tensor(&pixels, PixelType::RGB2BGR, 2, 1).unwrap();
        assert_eq!(swapped.as_slice(), &[3., 6., 2., 5., 1., 4.]);
    }

    #[test]
    fn test_gray_expands_and_alpha_drops() {
        let gray = [7u8, 9];
        let tensor = pixels_to_tensor(&gray, PixelType::GRAY2BGR, 2, 1).unwrap();
        assert_eq!(tensor.channels(), 3);
        assert_eq!(tensor.as_slice(), &[7., 9., 7., 9., 7., 9.]);

        let rgba = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let tensor = pixels_to_tensor(&rgba, PixelType::RGBA2BGR, 2, 1).unwrap();
        assert_eq!(tensor.as_slice(), &[3., 7., 2., 6., 1., 5.]);
        let tensor = pixels_to_tensor(&rgba, PixelType::RGBA, 2, 1).unwrap();
        assert_eq!(tensor.channel(3), &[4., 8.]);
    }

    #[test]
    fn test_backends_match_scalar() {
        let mut rng = rand::rng();
        let lengths = [1usize, 7, 15, 16, 17, 31, 32, 33, 47, 48, 49, 63, 64, 65];
        for conversion in PixelConversion::ALL {
            let channels = conversion.source_layout().get_channels_count();
            for &width in lengths.iter() {
                for height in 1..3usize {
                    let mut pixels = vec![0u8; width * height * channels];
                    rng.fill(&mut pixels[..]);
                    let reference = pixels_to_tensor_impl(
                        &pixels,
                        conversion.pixel_type(),
                        width,
                        height,
                        &DefaultTensorAllocator::default(),
                        SimdBackend::Scalar,
                    )
                    .unwrap();
                    for backend in SimdBackend::available() {
                        let tensor = pixels_to_tensor_impl(
                            &pixels,
                            conversion.pixel_type(),
                            width,
                            height,
                            &DefaultTensorAllocator::default(),
                            backend,
                        )
                        .unwrap();
                        assert_eq!(
                            tensor, reference,
                            "{:?} on {:?} diverged for {}x{}",
                            conversion, backend, width, height
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_allocation_failure_returns_empty() {
        let pixels = [0u8; 12];
        let tensor =
            pixels_to_tensor_with_allocator(&pixels, PixelType::RGB, 2, 2, &FailingAllocator {})
                .unwrap();
        assert!(tensor.is_empty());
    }

    #[test]
    fn test_wrong_allocator_shape_is_rejected() {
        let pixels = [0u8; 12];
        let result =
            pixels_to_tensor_with_allocator(&pixels, PixelType::RGB, 2, 2, &ShortAllocator {});
        assert_eq!(
            result,
            Err(PixelError::DestinationSizeMismatch(MismatchedSize {
                expected: 12,
                received: 4,
            }))
        );
    }

    #[test]
    fn test_unknown_selector_returns_empty() {
        let pixels = [0u8; 12];
        let tensor = pixels_to_tensor(&pixels, PixelType::from_bits(0x3), 2, 2).unwrap();
        assert!(tensor.is_empty());
    }

    #[test]
    fn test_contract_violations() {
        let pixels = [0u8; 11];
        assert_eq!(
            pixels_to_tensor(&pixels, PixelType::RGB, 2, 2),
            Err(PixelError::SourceSizeMismatch(MismatchedSize {
                expected: 12,
                received: 11,
            }))
        );
        assert_eq!(
            pixels_to_tensor(&pixels, PixelType::RGB, 0, 2),
            Err(PixelError::ZeroBaseSize)
        );
        assert_eq!(
            pixels_to_tensor(&pixels, PixelType::RGB, usize::MAX, 2),
            Err(PixelError::PointerOverflow)
        );
    }
}
