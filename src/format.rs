//! netpbm format versions and their magic numbers
use crate::error::NetpbmError;

// Type         	Magic number	    Extension	Colors
//                  ASCII (plain)	Binary (raw)
// Portable BitMap	P1	            P4	.pbm	0–1 (white & black)
// Portable GrayMap	P2	            P5	.pgm	0–255 (gray scale), variable, black-to-white range
// Portable PixMap	P3 	            P6	.ppm	0–255 for each RGB channel
pub mod magic_numbers {
    pub const PBM_ASCII: &[u8] = b"P1";
    pub const PGM_ASCII: &[u8] = b"P2";
    pub const PPM_ASCII: &[u8] = b"P3";
    pub const PBM_BINARY: &[u8] = b"P4";
    pub const PGM_BINARY: &[u8] = b"P5";
    pub const PPM_BINARY: &[u8] = b"P6";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatVersion {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
}

/// What a pixel is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Bitmap,
    Graymap,
    Pixmap,
}

/// How samples are stored after the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Ascii,
    Raw,
}

impl FormatVersion {
    pub fn from_magic(magic: &[u8]) -> Result<FormatVersion, NetpbmError> {
        match magic {
            magic_numbers::PBM_ASCII => Ok(FormatVersion::P1),
            magic_numbers::PGM_ASCII => Ok(FormatVersion::P2),
            magic_numbers::PPM_ASCII => Ok(FormatVersion::P3),
            magic_numbers::PBM_BINARY => Ok(FormatVersion::P4),
            magic_numbers::PGM_BINARY => Ok(FormatVersion::P5),
            magic_numbers::PPM_BINARY => Ok(FormatVersion::P6),
            _ => Err(NetpbmError::InvalidFormat(String::from_utf8_lossy(magic).into_owned())),
        }
    }

    pub fn kind(self) -> ImageKind {
        match self {
            FormatVersion::P1 | FormatVersion::P4 => ImageKind::Bitmap,
            FormatVersion::P2 | FormatVersion::P5 => ImageKind::Graymap,
            FormatVersion::P3 | FormatVersion::P6 => ImageKind::Pixmap,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            FormatVersion::P1 | FormatVersion::P2 | FormatVersion::P3 => Encoding::Ascii,
            FormatVersion::P4 | FormatVersion::P5 | FormatVersion::P6 => Encoding::Raw,
        }
    }

    /// Bitmaps have no max value in their header.
    pub fn has_max_value(self) -> bool {
        self.kind() != ImageKind::Bitmap
    }
}

impl ImageKind {
    pub fn samples_per_pixel(self) -> usize {
        match self {
            ImageKind::Bitmap | ImageKind::Graymap => 1,
            ImageKind::Pixmap => 3,
        }
    }
}
