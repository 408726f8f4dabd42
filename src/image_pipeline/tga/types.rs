//! TGA container types

use crate::image_pipeline::common::error::{PipelineError, Result};

pub const HEADER_LEN: usize = 18;

/// Image type 2: uncompressed true-color.
pub const IMAGE_TYPE_TRUECOLOR: u8 = 2;

/// Descriptor bit 5: rows run top to bottom.
pub const DESCRIPTOR_TOP_LEFT: u8 = 32;

pub const BITS_PER_PIXEL: u8 = 24;

/// The fixed 18-byte Truevision TGA header.
///
/// Only the fields this crate writes are modelled; the ID length, color map
/// and origin fields are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TgaHeader {
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    pub descriptor: u8,
}

impl TgaHeader {
    /// Header for a 24-bit, top-left origin image.
    pub fn truecolor(width: usize, height: usize) -> Result<Self> {
        let width = u16::try_from(width)
            .map_err(|_| PipelineError::InvalidGeometry(format!("width {} does not fit TGA", width)))?;
        let height = u16::try_from(height)
            .map_err(|_| PipelineError::InvalidGeometry(format!("height {} does not fit TGA", height)))?;

        Ok(Self {
            width,
            height,
            bits_per_pixel: BITS_PER_PIXEL,
            descriptor: DESCRIPTOR_TOP_LEFT,
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[2] = IMAGE_TYPE_TRUECOLOR;
        bytes[12..14].copy_from_slice(&self.width.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.height.to_le_bytes());
        bytes[16] = self.bits_per_pixel;
        bytes[17] = self.descriptor;
        bytes
    }

    /// Reads back a header written by [`TgaHeader::to_bytes`].
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN || bytes[2] != IMAGE_TYPE_TRUECOLOR {
            return Err(PipelineError::InvalidGeometry(
                "not an uncompressed true-color TGA header".to_string(),
            ));
        }

        Ok(Self {
            width: u16::from_le_bytes([bytes[12], bytes[13]]),
            height: u16::from_le_bytes([bytes[14], bytes[15]]),
            bits_per_pixel: bytes[16],
            descriptor: bytes[17],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let header = TgaHeader::truecolor(1920, 1080).unwrap();

        assert_eq!(
            header.to_bytes(),
            [0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x80, 0x07, 0x38, 0x04, 24, 32]
        );
    }

    #[test]
    fn test_parse_recovers_dimensions() {
        let header = TgaHeader::truecolor(641, 3).unwrap();

        let parsed = TgaHeader::parse(&header.to_bytes()).unwrap();

        assert_eq!(parsed, header);
        assert_eq!((parsed.width, parsed.height), (641, 3));
    }

    #[test]
    fn test_oversized_image_rejected() {
        assert!(matches!(
            TgaHeader::truecolor(65_536, 1),
            Err(PipelineError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_parse_rejects_truncated_header() {
        assert!(TgaHeader::parse(&[0, 0, 2]).is_err());
    }
}
