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
use crate::avx2::avx2_planes_to_pixels;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
use crate::neon::neon_planes_to_pixels;
use crate::numerics::SaturateCast;
use crate::pixel_error::{check_pixels_destination, MismatchedSize};
use crate::pixel_type::{PixelConversion, PixelLayout, PixelType};
use crate::simd_support::SimdBackend;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
use crate::sse::sse_planes_to_pixels;
use crate::tensor::Tensor;
use crate::PixelError;

type PixelsHandler = fn(&[f32], &mut [u8], usize, usize) -> usize;

#[inline(always)]
fn planes_to_pixels_row<const SRC: u8, const DST: u8>(
    src: &[f32],
    dst: &mut [u8],
    plane_size: usize,
    start_cx: usize,
) {
    let src_layout: PixelLayout = SRC.into();
    let dst_layout: PixelLayout = DST.into();
    let channels = dst_layout.get_channels_count();

    let r_plane = src_layout.get_r_channel_offset() * plane_size;
    let g_plane = src_layout.get_g_channel_offset() * plane_size;
    let b_plane = src_layout.get_b_channel_offset() * plane_size;
    let a_plane = src_layout.get_a_channel_offset() * plane_size;

    for (x, pixel) in dst[start_cx * channels..plane_size * channels]
        .chunks_exact_mut(channels)
        .enumerate()
    {
        let cx = start_cx + x;
        pixel[dst_layout.get_r_channel_offset()] = src[r_plane + cx].saturate_u8();
        if !dst_layout.is_gray() {
            pixel[dst_layout.get_g_channel_offset()] = src[g_plane + cx].saturate_u8();
            pixel[dst_layout.get_b_channel_offset()] = src[b_plane + cx].saturate_u8();
        }
        if dst_layout.has_alpha() {
            pixel[dst_layout.get_a_channel_offset()] = src[a_plane + cx].saturate_u8();
        }
    }
}

fn make_planes_to_pixels<const SRC: u8, const DST: u8>(
    backend: SimdBackend,
) -> Option<PixelsHandler> {
    match backend {
        SimdBackend::Scalar => None,
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        SimdBackend::Sse41 => Some(sse_planes_to_pixels::<SRC, DST>),
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
        SimdBackend::Avx2 => Some(avx2_planes_to_pixels::<SRC, DST>),
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        SimdBackend::Neon => Some(neon_planes_to_pixels::<SRC, DST>),
    }
}

/// `SRC` is the tensor layout, `DST` the layout of the pixels
fn decode_planes<const SRC: u8, const DST: u8>(
    tensor: &Tensor,
    pixels: &mut [u8],
    backend: SimdBackend,
) -> Result<(), PixelError> {
    let src_layout: PixelLayout = SRC.into();
    let dst_layout: PixelLayout = DST.into();
    if tensor.channels() != src_layout.get_channels_count() {
        return Err(PixelError::ChannelsMismatch(MismatchedSize {
            expected: src_layout.get_channels_count(),
            received: tensor.channels(),
        }));
    }
    check_pixels_destination(
        pixels,
        tensor.width(),
        tensor.height(),
        dst_layout.get_channels_count(),
    )?;

    let plane_size = tensor.plane_size();
    let src = tensor.as_slice();

    let mut cx = 0usize;
    if let Some(handler) = make_planes_to_pixels::<SRC, DST>(backend) {
        cx = handler(src, pixels, plane_size, cx);
    }
    planes_to_pixels_row::<SRC, DST>(src, pixels, plane_size, cx);
    Ok(())
}

pub(crate) fn tensor_to_pixels_impl(
    tensor: &Tensor,
    pixel_type: PixelType,
    pixels: &mut [u8],
    backend: SimdBackend,
) -> Result<(), PixelError> {
    if tensor.is_empty() {
        return Err(PixelError::EmptyTensor);
    }
    let Some(conversion) = pixel_type.conversion() else {
        return Ok(());
    };

    match conversion {
        PixelConversion::Rgb => decode_planes::<
            { PixelLayout::Rgb as u8 },
            { PixelLayout::Rgb as u8 },
        >(tensor, pixels, backend),
        PixelConversion::Bgr => decode_planes::<
            { PixelLayout::Bgr as u8 },
            { PixelLayout::Bgr as u8 },
        >(tensor, pixels, backend),
        PixelConversion::Gray => decode_planes::<
            { PixelLayout::Gray as u8 },
            { PixelLayout::Gray as u8 },
        >(tensor, pixels, backend),
        PixelConversion::Rgba => decode_planes::<
            { PixelLayout::Rgba as u8 },
            { PixelLayout::Rgba as u8 },
        >(tensor, pixels, backend),
        // tensor holds the target layout, pixels are written in the source layout
        PixelConversion::RgbToBgr => decode_planes::<
            { PixelLayout::Bgr as u8 },
            { PixelLayout::Rgb as u8 },
        >(tensor, pixels, backend),
        PixelConversion::BgrToRgb => decode_planes::<
            { PixelLayout::Rgb as u8 },
            { PixelLayout::Bgr as u8 },
        >(tensor, pixels, backend),
        // Lossy conversions can't be inverted
        PixelConversion::RgbToGray
        | PixelConversion::BgrToGray
        | PixelConversion::GrayToRgb
        | PixelConversion::GrayToBgr
        | PixelConversion::RgbaToRgb
        | PixelConversion::RgbaToBgr
        | PixelConversion::RgbaToGray => Ok(()),
    }
}

/// Writes a planar `f32` tensor back into interleaved 8-bit pixels.
///
/// Each sample is clamped to `[0, 255]` and truncated, NaN becomes zero.
/// For [PixelType::RGB2BGR] and [PixelType::BGR2RGB] the tensor is expected in the
/// target order and pixels are written in the source order. Other conversions, and
/// selectors without a conversion, leave `pixels` untouched.
///
/// # Arguments
///
/// * `tensor`: Tensor with the channel count of the selector's target layout.
/// * `pixel_type`: See [PixelType].
/// * `pixels`: Destination, `tensor.width() * tensor.height() * channels` bytes.
pub fn tensor_to_pixels(
    tensor: &Tensor,
    pixel_type: PixelType,
    pixels: &mut [u8],
) -> Result<(), PixelError> {
    tensor_to_pixels_impl(tensor, pixel_type, pixels, SimdBackend::detect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels_to_tensor;
    use rand::Rng;

    #[test]
    fn test_saturation() {
        let data = vec![-1f32, -0.7, 0.99, 127.5, 255.9, 1e20, f32::NAN, f32::INFINITY];
        let tensor = Tensor::from_vec(data, 8, 1, 1).unwrap();
        let mut pixels = [1u8; 8];
        tensor_to_pixels(&tensor, PixelType::GRAY, &mut pixels).unwrap();
        assert_eq!(pixels, [0, 0, 0, 127, 255, 255, 0, 255]);
    }

    #[test]
    fn test_identity_round_trip_is_lossless() {
        let mut rng = rand::rng();
        for pixel_type in [
            PixelType::RGB,
            PixelType::BGR,
            PixelType::GRAY,
            PixelType::RGBA,
            PixelType::RGB2BGR,
            PixelType::BGR2RGB,
        ] {
            let channels = pixel_type
                .source_layout()
                .map(|x| x.get_channels_count())
                .unwrap_or(0);
            let (width, height) = (rng.random_range(1..40), rng.random_range(1..40));
            let mut pixels = vec![0u8; width * height * channels];
            rng.fill(&mut pixels[..]);
            let tensor = pixels_to_tensor(&pixels, pixel_type, width, height).unwrap();
            let mut decoded = vec![0u8; pixels.len()];
            tensor_to_pixels(&tensor, pixel_type, &mut decoded).unwrap();
            assert_eq!(decoded, pixels, "Round trip failed for {:?}", pixel_type);
        }
    }

    #[test]
    fn test_swapped_decode_reorders() {
        // planes are B, G, R
        let tensor = Tensor::from_vec(vec![3., 2., 1.], 1, 1, 3).unwrap();
        let mut pixels = [0u8; 3];
        tensor_to_pixels(&tensor, PixelType::RGB2BGR, &mut pixels).unwrap();
        assert_eq!(pixels, [1, 2, 3]);
        tensor_to_pixels(&tensor, PixelType::BGR, &mut pixels).unwrap();
        assert_eq!(pixels, [3, 2, 1]);
    }

    #[test]
    fn test_lossy_and_unknown_selectors_are_no_op() {
        let tensor = Tensor::from_vec(vec![5.; 4], 2, 2, 1).unwrap();
        let mut pixels = [42u8; 12];
        tensor_to_pixels(&tensor, PixelType::RGB2GRAY, &mut pixels).unwrap();
        tensor_to_pixels(&tensor, PixelType::GRAY2RGB, &mut pixels).unwrap();
        tensor_to_pixels(&tensor, PixelType::from_bits(0x3), &mut pixels).unwrap();
        assert!(pixels.iter().all(|&x| x == 42));
    }

    #[test]
    fn test_contract_violations() {
        let mut pixels = [0u8; 12];
        assert_eq!(
            tensor_to_pixels(&Tensor::empty(), PixelType::RGB, &mut pixels),
            Err(PixelError::EmptyTensor)
        );
        let gray = Tensor::from_vec(vec![0.; 4], 2, 2, 1).unwrap();
        assert_eq!(
            tensor_to_pixels(&gray, PixelType::RGB, &mut pixels),
            Err(PixelError::ChannelsMismatch(MismatchedSize {
                expected: 3,
                received: 1,
            }))
        );
        assert_eq!(
            tensor_to_pixels(&gray, PixelType::GRAY, &mut pixels),
            Err(PixelError::DestinationSizeMismatch(MismatchedSize {
                expected: 4,
                received: 12,
            }))
        );
    }

    #[test]
    fn test_backends_match_scalar() {
        let mut rng = rand::rng();
        let lengths = [1usize, 7, 15, 16, 17, 31, 32, 33, 47, 48, 49, 63, 64, 65];
        for conversion in PixelConversion::ALL {
            let src_layout = conversion.target_layout();
            let dst_layout = conversion.source_layout();
            for &width in lengths.iter() {
                let height = 2usize;
                let len = width * height * src_layout.get_channels_count();
                let data: Vec<f32> = (0..len)
                    .map(|_| {
                        if rng.random_range(0..32) == 0 {
                            f32::NAN
                        } else {
                            rng.random_range(-64f32..320f32)
                        }
                    })
                    .collect();
                let tensor =
                    Tensor::from_vec(data, width, height, src_layout.get_channels_count())
                        .unwrap();
                let mut reference = vec![0u8; width * height * dst_layout.get_channels_count()];
                tensor_to_pixels_impl(
                    &tensor,
                    conversion.pixel_type(),
                    &mut reference,
                    SimdBackend::Scalar,
                )
                .unwrap();
                for backend in SimdBackend::available() {
                    let mut pixels = vec![0u8; reference.len()];
                    tensor_to_pixels_impl(&tensor, conversion.pixel_type(), &mut pixels, backend)
                        .unwrap();
                    assert_eq!(
                        pixels, reference,
                        "{:?} on {:?} diverged for width {}",
                        conversion, backend, width
                    );
                }
            }
        }
    }
}
