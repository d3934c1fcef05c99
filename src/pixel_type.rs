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
use std::fmt::{Debug, Formatter};

/// Shift of the target layout inside a conversion selector
pub const PIXEL_CONVERT_SHIFT: u32 = 16;
/// Bits holding the base (source) layout
pub const PIXEL_FORMAT_MASK: u32 = 0x0000ffff;
/// Bits holding the target layout of a conversion
pub const PIXEL_CONVERT_MASK: u32 = 0xffff0000;

/// Interleaved 8-bit pixel layout.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    Rgb = 0,
    Bgr = 1,
    Gray = 2,
    Rgba = 3,
}

impl From<u8> for PixelLayout {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => PixelLayout::Rgb,
            1 => PixelLayout::Bgr,
            2 => PixelLayout::Gray,
            3 => PixelLayout::Rgba,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl PixelLayout {
    #[inline(always)]
    pub const fn get_channels_count(&self) -> usize {
        match self {
            PixelLayout::Gray => 1,
            PixelLayout::Rgb | PixelLayout::Bgr => 3,
            PixelLayout::Rgba => 4,
        }
    }

    #[inline(always)]
    pub const fn has_alpha(&self) -> bool {
        match self {
            PixelLayout::Rgb | PixelLayout::Bgr | PixelLayout::Gray => false,
            PixelLayout::Rgba => true,
        }
    }

    #[inline(always)]
    pub const fn is_gray(&self) -> bool {
        matches!(self, PixelLayout::Gray)
    }

    /// Selector bit of the layout, see [PixelType]
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            PixelLayout::Rgb => 1,
            PixelLayout::Bgr => 1 << 1,
            PixelLayout::Gray => 1 << 2,
            PixelLayout::Rgba => 1 << 3,
        }
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Option<PixelLayout> {
        match bits {
            1 => Some(PixelLayout::Rgb),
            2 => Some(PixelLayout::Bgr),
            4 => Some(PixelLayout::Gray),
            8 => Some(PixelLayout::Rgba),
            _ => None,
        }
    }
}

impl PixelLayout {
    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        match self {
            PixelLayout::Rgb | PixelLayout::Rgba => 0,
            PixelLayout::Bgr => 2,
            PixelLayout::Gray => 0,
        }
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        match self {
            PixelLayout::Rgb | PixelLayout::Bgr | PixelLayout::Rgba => 1,
            PixelLayout::Gray => 0,
        }
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        match self {
            PixelLayout::Rgb | PixelLayout::Rgba => 2,
            PixelLayout::Bgr => 0,
            PixelLayout::Gray => 0,
        }
    }

    #[inline(always)]
    pub const fn get_a_channel_offset(&self) -> usize {
        match self {
            PixelLayout::Rgb | PixelLayout::Bgr | PixelLayout::Gray => 0,
            PixelLayout::Rgba => 3,
        }
    }
}

/// Pixel format selector.
///
/// The low 16 bits hold the layout of the pixel buffer, the high 16 bits hold
/// the layout of the tensor when a conversion is requested.
/// Values are stable and may be stored by callers.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelType(u32);

impl PixelType {
    pub const RGB: PixelType = PixelType(PixelLayout::Rgb.bits());
    pub const BGR: PixelType = PixelType(PixelLayout::Bgr.bits());
    pub const GRAY: PixelType = PixelType(PixelLayout::Gray.bits());
    pub const RGBA: PixelType = PixelType(PixelLayout::Rgba.bits());

    pub const RGB2BGR: PixelType = PixelType::convert(PixelLayout::Rgb, PixelLayout::Bgr);
    pub const RGB2GRAY: PixelType = PixelType::convert(PixelLayout::Rgb, PixelLayout::Gray);

    pub const BGR2RGB: PixelType = PixelType::convert(PixelLayout::Bgr, PixelLayout::Rgb);
    pub const BGR2GRAY: PixelType = PixelType::convert(PixelLayout::Bgr, PixelLayout::Gray);

    pub const GRAY2RGB: PixelType = PixelType::convert(PixelLayout::Gray, PixelLayout::Rgb);
    pub const GRAY2BGR: PixelType = PixelType::convert(PixelLayout::Gray, PixelLayout::Bgr);

    pub const RGBA2RGB: PixelType = PixelType::convert(PixelLayout::Rgba, PixelLayout::Rgb);
    pub const RGBA2BGR: PixelType = PixelType::convert(PixelLayout::Rgba, PixelLayout::Bgr);
    pub const RGBA2GRAY: PixelType = PixelType::convert(PixelLayout::Rgba, PixelLayout::Gray);

    const fn convert(from: PixelLayout, to: PixelLayout) -> PixelType {
        PixelType(from.bits() | (to.bits() << PIXEL_CONVERT_SHIFT))
    }

    /// Wraps a raw selector, unknown values are kept and resolve to no conversion.
    #[inline]
    pub const fn from_bits(bits: u32) -> PixelType {
        PixelType(bits)
    }

    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn has_conversion(&self) -> bool {
        self.0 & PIXEL_CONVERT_MASK != 0
    }

    /// Layout of the pixel buffer, ignoring any conversion
    #[inline]
    pub const fn source_layout(&self) -> Option<PixelLayout> {
        PixelLayout::from_bits(self.0 & PIXEL_FORMAT_MASK)
    }

    /// Layout of the tensor planes
    #[inline]
    pub const fn target_layout(&self) -> Option<PixelLayout> {
        if self.has_conversion() {
            PixelLayout::from_bits(self.0 >> PIXEL_CONVERT_SHIFT)
        } else {
            self.source_layout()
        }
    }

    pub const fn conversion(&self) -> Option<PixelConversion> {
        match self.0 {
            v if v == PixelType::RGB.0 => Some(PixelConversion::Rgb),
            v if v == PixelType::BGR.0 => Some(PixelConversion::Bgr),
            v if v == PixelType::GRAY.0 => Some(PixelConversion::Gray),
            v if v == PixelType::RGBA.0 => Some(PixelConversion::Rgba),
            v if v == PixelType::RGB2BGR.0 => Some(PixelConversion::RgbToBgr),
            v if v == PixelType::RGB2GRAY.0 => Some(PixelConversion::RgbToGray),
            v if v == PixelType::BGR2RGB.0 => Some(PixelConversion::BgrToRgb),
            v if v == PixelType::BGR2GRAY.0 => Some(PixelConversion::BgrToGray),
            v if v == PixelType::GRAY2RGB.0 => Some(PixelConversion::GrayToRgb),
            v if v == PixelType::GRAY2BGR.0 => Some(PixelConversion::GrayToBgr),
            v if v == PixelType::RGBA2RGB.0 => Some(PixelConversion::RgbaToRgb),
            v if v == PixelType::RGBA2BGR.0 => Some(PixelConversion::RgbaToBgr),
            v if v == PixelType::RGBA2GRAY.0 => Some(PixelConversion::RgbaToGray),
            _ => None,
        }
    }
}

impl Debug for PixelType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.conversion() {
            Some(conversion) => f.write_fmt(format_args!("PixelType::{:?}", conversion)),
            None => f.write_fmt(format_args!("PixelType({:#x})", self.0)),
        }
    }
}

impl From<PixelConversion> for PixelType {
    fn from(value: PixelConversion) -> Self {
        value.pixel_type()
    }
}

/// Every supported combination of pixel layout and tensor layout
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelConversion {
    Rgb,
    Bgr,
    Gray,
    Rgba,
    RgbToBgr,
    RgbToGray,
    BgrToRgb,
    BgrToGray,
    GrayToRgb,
    GrayToBgr,
    RgbaToRgb,
    RgbaToBgr,
    RgbaToGray,
}

impl PixelConversion {
    /// Every variant, in selector table order
    pub const ALL: [PixelConversion; 13] = [
        PixelConversion::Rgb,
        PixelConversion::Bgr,
        PixelConversion::Gray,
        PixelConversion::Rgba,
        PixelConversion::RgbToBgr,
        PixelConversion::RgbToGray,
        PixelConversion::BgrToRgb,
        PixelConversion::BgrToGray,
        PixelConversion::GrayToRgb,
        PixelConversion::GrayToBgr,
        PixelConversion::RgbaToRgb,
        PixelConversion::RgbaToBgr,
        PixelConversion::RgbaToGray,
    ];

    pub const fn pixel_type(&self) -> PixelType {
        match self {
            PixelConversion::Rgb => PixelType::RGB,
            PixelConversion::Bgr => PixelType::BGR,
            PixelConversion::Gray => PixelType::GRAY,
            PixelConversion::Rgba => PixelType::RGBA,
            PixelConversion::RgbToBgr => PixelType::RGB2BGR,
            PixelConversion::RgbToGray => PixelType::RGB2GRAY,
            PixelConversion::BgrToRgb => PixelType::BGR2RGB,
            PixelConversion::BgrToGray => PixelType::BGR2GRAY,
            PixelConversion::GrayToRgb => PixelType::GRAY2RGB,
            PixelConversion::GrayToBgr => PixelType::GRAY2BGR,
            PixelConversion::RgbaToRgb => PixelType::RGBA2RGB,
            PixelConversion::RgbaToBgr => PixelType::RGBA2BGR,
            PixelConversion::RgbaToGray => PixelType::RGBA2GRAY,
        }
    }

    /// Layout of the interleaved pixel buffer
    pub const fn source_layout(&self) -> PixelLayout {
        match self {
            PixelConversion::Rgb | PixelConversion::RgbToBgr | PixelConversion::RgbToGray => {
                PixelLayout::Rgb
            }
            PixelConversion::Bgr | PixelConversion::BgrToRgb | PixelConversion::BgrToGray => {
                PixelLayout::Bgr
            }
            PixelConversion::Gray | PixelConversion::GrayToRgb | PixelConversion::GrayToBgr => {
                PixelLayout::Gray
            }
            PixelConversion::Rgba
            | PixelConversion::RgbaToRgb
            | PixelConversion::RgbaToBgr
            | PixelConversion::RgbaToGray => PixelLayout::Rgba,
        }
    }

    /// Layout of the tensor planes
    pub const fn target_layout(&self) -> PixelLayout {
        match self {
            PixelConversion::Rgb
            | PixelConversion::BgrToRgb
            | PixelConversion::GrayToRgb
            | PixelConversion::RgbaToRgb => PixelLayout::Rgb,
            PixelConversion::Bgr
            | PixelConversion::RgbToBgr
            | PixelConversion::GrayToBgr
            | PixelConversion::RgbaToBgr => PixelLayout::Bgr,
            PixelConversion::Gray
            | PixelConversion::RgbToGray
            | PixelConversion::BgrToGray
            | PixelConversion::RgbaToGray => PixelLayout::Gray,
            PixelConversion::Rgba => PixelLayout::Rgba,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_values_are_stable() {
        assert_eq!(PixelType::RGB.bits(), 0x1);
        assert_eq!(PixelType::BGR.bits(), 0x2);
        assert_eq!(PixelType::GRAY.bits(), 0x4);
        assert_eq!(PixelType::RGBA.bits(), 0x8);
        assert_eq!(PixelType::RGB2BGR.bits(), 0x20001);
        assert_eq!(PixelType::RGB2GRAY.bits(), 0x40001);
        assert_eq!(PixelType::BGR2RGB.bits(), 0x10002);
        assert_eq!(PixelType::BGR2GRAY.bits(), 0x40002);
        assert_eq!(PixelType::GRAY2RGB.bits(), 0x10004);
        assert_eq!(PixelType::GRAY2BGR.bits(), 0x20004);
        assert_eq!(PixelType::RGBA2RGB.bits(), 0x10008);
        assert_eq!(PixelType::RGBA2BGR.bits(), 0x20008);
        assert_eq!(PixelType::RGBA2GRAY.bits(), 0x40008);
    }

    #[test]
    fn test_every_selector_resolves_to_one_conversion() {
        for conversion in PixelConversion::ALL {
            let pixel_type = conversion.pixel_type();
            assert_eq!(pixel_type.conversion(), Some(conversion));
            assert_eq!(pixel_type.source_layout(), Some(conversion.source_layout()));
            assert_eq!(pixel_type.target_layout(), Some(conversion.target_layout()));
        }
        for (i, a) in PixelConversion::ALL.iter().enumerate() {
            for b in PixelConversion::ALL.iter().skip(i + 1) {
                assert_ne!(a.pixel_type(), b.pixel_type());
            }
        }
    }

    #[test]
    fn test_layout_and_conversion_values_never_collide() {
        for conversion in PixelConversion::ALL {
            let pixel_type = conversion.pixel_type();
            let is_identity = conversion.source_layout() == conversion.target_layout();
            assert_eq!(pixel_type.has_conversion(), !is_identity);
        }
    }

    #[test]
    fn test_unknown_selectors() {
        assert_eq!(PixelType::from_bits(0).conversion(), None);
        assert_eq!(PixelType::from_bits(0x3).conversion(), None);
        assert_eq!(PixelType::from_bits(0x80008).conversion(), None);
        // RGBA is never a conversion target
        assert_eq!(PixelType::from_bits(0x80001).conversion(), None);
        assert_eq!(PixelType::from_bits(0x3).source_layout(), None);
        assert_eq!(format!("{:?}", PixelType::from_bits(0x3)), "PixelType(0x3)");
        assert_eq!(format!("{:?}", PixelType::RGB2GRAY), "PixelType::RgbToGray");
    }

    #[test]
    fn test_layout_offsets() {
        let bgr = PixelLayout::Bgr;
        assert_eq!(bgr.get_r_channel_offset(), 2);
        assert_eq!(bgr.get_b_channel_offset(), 0);
        assert_eq!(PixelLayout::Rgba.get_a_channel_offset(), 3);
        assert_eq!(PixelLayout::Gray.get_channels_count(), 1);
        for layout in [
            PixelLayout::Rgb,
            PixelLayout::Bgr,
            PixelLayout::Gray,
            PixelLayout::Rgba,
        ] {
            assert_eq!(PixelLayout::from(layout as u8), layout);
            assert_eq!(PixelLayout::from_bits(layout.bits()), Some(layout));
        }
    }
}
