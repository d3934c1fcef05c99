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
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelError {
    SourceSizeMismatch(MismatchedSize),
    DestinationSizeMismatch(MismatchedSize),
    ChannelsMismatch(MismatchedSize),
    UnsupportedChannels(usize),
    PointerOverflow,
    ZeroBaseSize,
    EmptyTensor,
}

impl Display for PixelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelError::SourceSizeMismatch(size) => f.write_fmt(format_args!(
                "Source size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            PixelError::DestinationSizeMismatch(size) => f.write_fmt(format_args!(
                "Destination size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            PixelError::ChannelsMismatch(size) => f.write_fmt(format_args!(
                "Tensor must have {} channels for this pixel type, but it has {}",
                size.expected, size.received
            )),
            PixelError::UnsupportedChannels(channels) => f.write_fmt(format_args!(
                "Only 1, 3 or 4 samples per pixel are supported, but {} was requested",
                channels
            )),
            PixelError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            PixelError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            PixelError::EmptyTensor => f.write_str("Tensor is empty"),
        }
    }
}

impl Error for PixelError {}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, PixelError> {
    v0.checked_mul(v1)
        .and_then(|product| product.checked_mul(v2))
        .ok_or(PixelError::PointerOverflow)
}

#[inline]
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), PixelError> {
    if width == 0 || height == 0 {
        return Err(PixelError::ZeroBaseSize);
    }
    Ok(())
}

/// Checks that an interleaved buffer holds exactly `width * height * channels` samples
#[inline]
pub(crate) fn check_pixels_source<V>(
    arr: &[V],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<(), PixelError> {
    check_dimensions(width, height)?;
    let expected = check_overflow_v3(width, height, channels)?;
    if arr.len() != expected {
        return Err(PixelError::SourceSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_pixels_destination<V>(
    arr: &[V],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<(), PixelError> {
    check_dimensions(width, height)?;
    let expected = check_overflow_v3(width, height, channels)?;
    if arr.len() != expected {
        return Err(PixelError::DestinationSizeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            check_overflow_v3(usize::MAX / 2, 3, 1),
            Err(PixelError::PointerOverflow)
        );
        assert_eq!(check_overflow_v3(4, 3, 2), Ok(24));
    }

    #[test]
    fn test_zero_size_rejected() {
        let data = [0u8; 0];
        assert_eq!(
            check_pixels_source(&data, 0, 4, 3),
            Err(PixelError::ZeroBaseSize)
        );
    }

    #[test]
    fn test_size_mismatch_payload() {
        let data = [0u8; 11];
        assert_eq!(
            check_pixels_destination(&data, 2, 2, 3),
            Err(PixelError::DestinationSizeMismatch(MismatchedSize {
                expected: 12,
                received: 11,
            }))
        );
        let msg = PixelError::SourceSizeMismatch(MismatchedSize {
            expected: 12,
            received: 11,
        })
        .to_string();
        assert_eq!(msg, "Source size mismatch: expected=12, received=11");
    }
}
