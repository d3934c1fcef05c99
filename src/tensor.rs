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
use crate::pixel_error::{check_overflow_v3, MismatchedSize};
use crate::PixelError;

/// Planar `f32` tensor, `channels` planes of `width * height` elements each.
///
/// An empty tensor (see [Tensor::empty]) is returned when allocation fails or
/// when a pixel type has no conversion, callers should check [Tensor::is_empty].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tensor {
    data: Vec<f32>,
    width: usize,
    height: usize,
    channels: usize,
}

impl Tensor {
    /// Failure sentinel
    pub const fn empty() -> Tensor {
        Tensor {
            data: Vec::new(),
            width: 0,
            height: 0,
            channels: 0,
        }
    }

    /// Wraps existing planar storage.
    pub fn from_vec(
        data: Vec<f32>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Tensor, PixelError> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(PixelError::ZeroBaseSize);
        }
        let expected = check_overflow_v3(width, height, channels)?;
        if data.len() != expected {
            return Err(PixelError::SourceSizeMismatch(MismatchedSize {
                expected,
                received: data.len(),
            }));
        }
        Ok(Tensor {
            data,
            width,
            height,
            channels,
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Elements in one channel plane
    #[inline]
    pub fn plane_size(&self) -> usize {
        self.width * self.height
    }

    /// # Panics
    ///
    /// Panics if `channel` is out of bounds.
    pub fn channel(&self, channel: usize) -> &[f32] {
        assert!(channel < self.channels, "Channel {} out of bounds", channel);
        let plane_size = self.plane_size();
        &self.data[channel * plane_size..(channel + 1) * plane_size]
    }

    /// # Panics
    ///
    /// Panics if `channel` is out of bounds.
    pub fn channel_mut(&mut self, channel: usize) -> &mut [f32] {
        assert!(channel < self.channels, "Channel {} out of bounds", channel);
        let plane_size = self.plane_size();
        &mut self.data[channel * plane_size..(channel + 1) * plane_size]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

/// Allocation service used by every pixel to tensor conversion.
///
/// Implementations must return [Tensor::empty] when storage can't be provided.
pub trait TensorAllocator {
    fn allocate(&self, width: usize, height: usize, channels: usize) -> Tensor;
}

/// Heap allocator that reports failure instead of aborting.
#[derive(Debug, Copy, Clone, Default)]
pub struct DefaultTensorAllocator {}

impl TensorAllocator for DefaultTensorAllocator {
    fn allocate(&self, width: usize, height: usize, channels: usize) -> Tensor {
        if width == 0 || height == 0 || channels == 0 {
            return Tensor::empty();
        }
        let Ok(len) = check_overflow_v3(width, height, channels) else {
            return Tensor::empty();
        };
        let mut data: Vec<f32> = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            return Tensor::empty();
        }
        data.resize(len, 0.);
        Tensor {
            data,
            width,
            height,
            channels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allocator_shapes_tensor() {
        let tensor = DefaultTensorAllocator::default().allocate(5, 3, 4);
        assert!(!tensor.is_empty());
        assert_eq!(tensor.width(), 5);
        assert_eq!(tensor.height(), 3);
        assert_eq!(tensor.channels(), 4);
        assert_eq!(tensor.plane_size(), 15);
        assert_eq!(tensor.as_slice().len(), 60);
        assert!(tensor.channel(3).iter().all(|&v| v == 0.));
    }

    #[test]
    fn test_default_allocator_failure_is_empty() {
        let allocator = DefaultTensorAllocator::default();
        assert!(allocator.allocate(usize::MAX, 2, 3).is_empty());
        assert!(allocator.allocate(usize::MAX / 8, 1, 1).is_empty());
        assert!(allocator.allocate(0, 2, 3).is_empty());
    }

    #[test]
    fn test_planes_are_contiguous() {
        let data: Vec<f32> = (0..12).map(|x| x as f32).collect();
        let mut tensor = Tensor::from_vec(data, 2, 2, 3).unwrap();
        assert_eq!(tensor.channel(1), &[4., 5., 6., 7.]);
        tensor.channel_mut(2)[0] = 42.;
        assert_eq!(tensor.as_slice()[8], 42.);
    }

    #[test]
    fn test_from_vec_validates() {
        assert_eq!(
            Tensor::from_vec(vec![0.; 5], 2, 2, 1),
            Err(PixelError::SourceSizeMismatch(MismatchedSize {
                expected: 4,
                received: 5
            }))
        );
        assert_eq!(
            Tensor::from_vec(vec![], 0, 2, 1),
            Err(PixelError::ZeroBaseSize)
        );
    }
}
