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
use crate::pixel_error::{check_dimensions, check_overflow_v3, check_pixels_source};
use crate::pixel_type::PixelType;
use crate::pixels_to_tensor::pixels_to_tensor_impl;
use crate::resize_bilinear::resize_bilinear;
use crate::simd_support::SimdBackend;
use crate::tensor::{DefaultTensorAllocator, Tensor, TensorAllocator};
use crate::tensor_to_pixels::tensor_to_pixels_impl;
use crate::PixelError;

/// Resizes pixels to `target_width * target_height` and converts them into a tensor.
///
/// Resampling happens on the 8-bit source layout of `pixel_type` before any channel
/// conversion. When sizes are equal this is exactly [crate::pixels_to_tensor].
///
/// # Arguments
///
/// * `pixels`: Packed pixels, `width * height * channels` bytes.
/// * `pixel_type`: See [PixelType].
/// * `width`: Source width.
/// * `height`: Source height.
/// * `target_width`: Width of the resulting tensor.
/// * `target_height`: Height of the resulting tensor.
pub fn pixels_to_tensor_resize(
    pixels: &[u8],
    pixel_type: PixelType,
    width: usize,
    height: usize,
    target_width: usize,
    target_height: usize,
) -> Result<Tensor, PixelError> {
    pixels_to_tensor_resize_with_allocator(
        pixels,
        pixel_type,
        width,
        height,
        target_width,
        target_height,
        &DefaultTensorAllocator::default(),
    )
}

/// Same as [pixels_to_tensor_resize], tensor storage is requested from `allocator`.
pub fn pixels_to_tensor_resize_with_allocator(
    pixels: &[u8],
    pixel_type: PixelType,
    width: usize,
    height: usize,
    target_width: usize,
    target_height: usize,
    allocator: &dyn TensorAllocator,
) -> Result<Tensor, PixelError> {
    let backend = SimdBackend::detect();
    if width == target_width && height == target_height {
        return pixels_to_tensor_impl(pixels, pixel_type, width, height, allocator, backend);
    }
    check_dimensions(width, height)?;
    check_dimensions(target_width, target_height)?;
    let Some(conversion) = pixel_type.conversion() else {
        return Ok(Tensor::empty());
    };
    let channels = conversion.source_layout().get_channels_count();
    check_pixels_source(pixels, width, height, channels)?;

    let mut resized = vec![0u8; check_overflow_v3(target_width, target_height, channels)?];
    resize_bilinear(
        pixels,
        width,
        height,
        &mut resized,
        target_width,
        target_height,
        channels,
    )?;
    pixels_to_tensor_impl(
        &resized,
        pixel_type,
        target_width,
        target_height,
        allocator,
        backend,
    )
}

/// Converts a tensor into pixels and resizes them to `target_width * target_height`.
///
/// The tensor is decoded at its own size, then the 8-bit pixels are resampled into
/// `pixels`. Selectors [crate::tensor_to_pixels] can't decode leave `pixels` untouched.
///
/// # Arguments
///
/// * `tensor`: Source tensor.
/// * `pixel_type`: See [PixelType].
/// * `pixels`: Destination, `target_width * target_height * channels` bytes.
/// * `target_width`: Destination width.
/// * `target_height`: Destination height.
pub fn tensor_to_pixels_resize(
    tensor: &Tensor,
    pixel_type: PixelType,
    pixels: &mut [u8],
    target_width: usize,
    target_height: usize,
) -> Result<(), PixelError> {
    let backend = SimdBackend::detect();
    if tensor.width() == target_width && tensor.height() == target_height {
        return tensor_to_pixels_impl(tensor, pixel_type, pixels, backend);
    }
    if tensor.is_empty() {
        return Err(PixelError::EmptyTensor);
    }
    check_dimensions(target_width, target_height)?;
    let Some(conversion) = pixel_type.conversion() else {
        return Ok(());
    };
    let layout = conversion.source_layout();
    // Only selectors keeping the channel count have a decoder
    if layout.get_channels_count() != conversion.target_layout().get_channels_count() {
        return Ok(());
    }
    let channels = layout.get_channels_count();

    let mut decoded = vec![0u8; check_overflow_v3(tensor.width(), tensor.height(), channels)?];
    tensor_to_pixels_impl(tensor, pixel_type, &mut decoded, backend)?;
    resize_bilinear(
        &decoded,
        tensor.width(),
        tensor.height(),
        pixels,
        target_width,
        target_height,
        channels,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_error::MismatchedSize;
    use crate::{pixels_to_tensor, tensor_to_pixels};
    use rand::Rng;

    #[test]
    fn test_equal_sizes_delegate() {
        let mut rng = rand::rng();
        let mut pixels = vec![0u8; 9 * 7 * 4];
        rng.fill(&mut pixels[..]);
        for pixel_type in [PixelType::RGBA, PixelType::RGBA2GRAY, PixelType::RGBA2BGR] {
            let plain = pixels_to_tensor(&pixels, pixel_type, 9, 7).unwrap();
            let fused = pixels_to_tensor_resize(&pixels, pixel_type, 9, 7, 9, 7).unwrap();
            assert_eq!(plain, fused);
        }
    }

    #[test]
    fn test_resize_happens_before_conversion() {
        let mut rng = rand::rng();
        let mut pixels = vec![0u8; 12 * 5 * 3];
        rng.fill(&mut pixels[..]);
        let mut resized = vec![0u8; 7 * 9 * 3];
        resize_bilinear(&pixels, 12, 5, &mut resized, 7, 9, 3).unwrap();
        let expected = pixels_to_tensor(&resized, PixelType::BGR2GRAY, 7, 9).unwrap();
        let fused = pixels_to_tensor_resize(&pixels, PixelType::BGR2GRAY, 12, 5, 7, 9).unwrap();
        assert_eq!(fused.width(), 7);
        assert_eq!(fused.height(), 9);
        assert_eq!(fused, expected);
    }

    #[test]
    fn test_decode_then_resize() {
        let mut rng = rand::rng();
        let mut pixels = vec![0u8; 6 * 4 * 3];
        rng.fill(&mut pixels[..]);
        let tensor = pixels_to_tensor(&pixels, PixelType::RGB2BGR, 6, 4).unwrap();

        let mut same = vec![0u8; pixels.len()];
        tensor_to_pixels_resize(&tensor, PixelType::RGB2BGR, &mut same, 6, 4).unwrap();
        assert_eq!(same, pixels);

        let mut expected = vec![0u8; 11 * 3 * 3];
        resize_bilinear(&pixels, 6, 4, &mut expected, 11, 3, 3).unwrap();
        let mut fused = vec![0u8; expected.len()];
        tensor_to_pixels_resize(&tensor, PixelType::RGB2BGR, &mut fused, 11, 3).unwrap();
        assert_eq!(fused, expected);
    }

    #[test]
    fn test_decode_resize_lossy_is_no_op() {
        let tensor = Tensor::from_vec(vec![1.; 4], 2, 2, 1).unwrap();
        let mut pixels = [9u8; 3 * 3 * 3];
        tensor_to_pixels_resize(&tensor, PixelType::RGB2GRAY, &mut pixels, 3, 3).unwrap();
        assert!(pixels.iter().all(|&x| x == 9));
        let mut gray = [9u8; 9];
        tensor_to_pixels_resize(&tensor, PixelType::GRAY, &mut gray, 3, 3).unwrap();
        assert!(gray.iter().all(|&x| x == 1));
        let mut same = [0u8; 4];
        tensor_to_pixels(&tensor, PixelType::GRAY, &mut same).unwrap();
        assert_eq!(same, [1; 4]);
    }

    #[test]
    fn test_unknown_selector_skips_resize() {
        let pixels = [0u8; 5];
        let tensor =
            pixels_to_tensor_resize(&pixels, PixelType::from_bits(0x3), 5, 1, 2, 2).unwrap();
        assert!(tensor.is_empty());
    }

    #[test]
    fn test_contract_violations() {
        let pixels = [0u8; 11];
        assert_eq!(
            pixels_to_tensor_resize(&pixels, PixelType::RGB, 2, 2, 4, 4),
            Err(PixelError::SourceSizeMismatch(MismatchedSize {
                expected: 12,
                received: 11,
            }))
        );
        let tensor = Tensor::from_vec(vec![0.; 12], 2, 2, 3).unwrap();
        let mut small = [0u8; 10];
        assert_eq!(
            tensor_to_pixels_resize(&tensor, PixelType::RGB, &mut small, 3, 3),
            Err(PixelError::DestinationSizeMismatch(MismatchedSize {
                expected: 27,
                received: 10,
            }))
        );
        assert_eq!(
            tensor_to_pixels_resize(&Tensor::empty(), PixelType::RGB, &mut small, 3, 3),
            Err(PixelError::EmptyTensor)
        );
    }
}
