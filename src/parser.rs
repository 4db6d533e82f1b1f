//! module for parsing netpbm images
use crate::error::NetpbmError;
use crate::format::{FormatVersion, ImageKind};
use crate::image::{ImageSink, RgbImage};
use crate::render;
use crate::scanner::TokenScanner;
use crate::unpack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: FormatVersion,
    pub width: u32,
    pub height: u32,
    /// Absent for bitmaps.
    pub max_value: Option<u64>,
}

impl Header {
    /// Number of samples the data after the header has to hold.
    pub fn sample_count(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.version.kind().samples_per_pixel())
    }
}

/// Limits checked right after the header is parsed, before anything is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
}

impl Limits {
    fn check(&self, header: &Header) -> Result<(), NetpbmError> {
        let width = u64::from(header.width);
        let height = u64::from(header.height);
        let too_large = self.max_width.is_some_and(|max| width > max)
            || self.max_height.is_some_and(|max| height > max)
            || self.max_pixels.is_some_and(|max| width * height > max)
            || header.sample_count().is_none();
        if too_large {
            return Err(NetpbmError::DimensionsTooLarge { width, height });
        }
        Ok(())
    }
}

fn parse_header(scanner: &mut TokenScanner) -> Result<Header, NetpbmError> {
    let magic = scanner.next_word().ok_or(NetpbmError::MissingMagicNumber)?;
    let version = FormatVersion::from_magic(magic)?;
    log::debug!("Parsed format version {version:?}");

    let width = scanner.next_unsigned_integer();
    let height = scanner.next_unsigned_integer();
    let (Some(width), Some(height)) = (width, height) else {
        return Err(NetpbmError::MissingDimensions);
    };
    let (Ok(width32), Ok(height32)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(NetpbmError::InvalidDimensions { width, height });
    };
    log::debug!("Parsed dimensions {width}x{height}");

    let max_value = if version.has_max_value() {
        let max_value = scanner.next_unsigned_integer().ok_or(NetpbmError::MissingMaxValue)?;
        if max_value == 0 {
            return Err(NetpbmError::InvalidMaxValue(max_value));
        }
        log::debug!("Parsed max value {max_value}");
        Some(max_value)
    } else {
        None
    };

    Ok(Header {
        version,
        width: width32,
        height: height32,
        max_value,
    })
}

/// Parses only the header, without touching the pixel data.
pub fn read_header(contents: &[u8]) -> Result<Header, NetpbmError> {
    parse_header(&mut TokenScanner::new(contents))
}

/// Decodes netpbm data, holding the limits it enforces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    limits: Limits,
}

impl Decoder {
    pub fn new() -> Decoder {
        Decoder::default()
    }

    pub fn with_limits(limits: Limits) -> Decoder {
        Decoder { limits }
    }

    pub fn decode<I: ImageSink>(&self, contents: &[u8]) -> Result<I, NetpbmError> {
        log::info!("start decoding contents of size {}", contents.len());
        let mut scanner = TokenScanner::new(contents);
        let header = parse_header(&mut scanner)?;
        self.limits.check(&header)?;

        let remaining = scanner.remaining_data();
        let samples = unpack::unpack(header.version, remaining, header.width)?;
        // checked here as well so a short input never allocates the full image
        let expected = header.sample_count().unwrap_or(usize::MAX);
        if samples.len() != expected {
            return Err(NetpbmError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }

        let mut image = I::create(header.width, header.height);
        // bitmaps are the only kind without a max value
        let max_value = header.max_value.unwrap_or(1);
        match header.version.kind() {
            ImageKind::Bitmap => render::render_bitmap(&mut image, &samples)?,
            ImageKind::Graymap => render::render_graymap(&mut image, max_value, &samples)?,
            ImageKind::Pixmap => render::render_pixmap(&mut image, max_value, &samples)?,
        }
        log::info!("decoded {:?} image {}x{}", header.version, header.width, header.height);
        Ok(image)
    }
}

/// Decodes `contents` into any sink, without limits.
pub fn decode<I: ImageSink>(contents: &[u8]) -> Result<I, NetpbmError> {
    Decoder::new().decode(contents)
}

pub fn decode_rgb(contents: &[u8]) -> Result<RgbImage, NetpbmError> {
    decode(contents)
}
