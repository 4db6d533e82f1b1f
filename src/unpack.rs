//! module for turning the data after a header into one byte per sample
use crate::error::NetpbmError;
use crate::format::{Encoding, FormatVersion, ImageKind};

pub(crate) fn unpack(
    version: FormatVersion,
    data: &[u8],
    width: u32,
) -> Result<Vec<u8>, NetpbmError> {
    let samples = match (version.kind(), version.encoding()) {
        (ImageKind::Bitmap, Encoding::Ascii) => unpack_digits(data),
        (ImageKind::Bitmap, Encoding::Raw) => unpack_bits(data, width),
        (ImageKind::Graymap | ImageKind::Pixmap, Encoding::Ascii) => unpack_integers(data)?,
        (ImageKind::Graymap | ImageKind::Pixmap, Encoding::Raw) => data.to_vec(),
    };
    log::debug!("unpacked {} bytes into {} samples", data.len(), samples.len());
    Ok(samples)
}

/// Every ASCII digit becomes one sample holding its value; everything else is dropped.
pub(crate) fn unpack_digits(data: &[u8]) -> Vec<u8> {
    data.iter()
        .filter(|byte| byte.is_ascii_digit())
        .map(|byte| byte - b'0')
        .collect()
}

/// Every run of ASCII digits becomes one sample.
pub(crate) fn unpack_integers(data: &[u8]) -> Result<Vec<u8>, NetpbmError> {
    data.split(|byte| !byte.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| {
            let value = run.iter().fold(0u64, |acc, digit| {
                acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
            });
            u8::try_from(value).map_err(|_| NetpbmError::SampleOverflow(value))
        })
        .collect()
}

/// One sample per bit, most significant bit first. Rows are padded to whole bytes, so the
/// bits left in a byte once a row is complete are discarded. A zero width has no rows to pad.
pub(crate) fn unpack_bits(data: &[u8], width: u32) -> Vec<u8> {
    let width = width as usize;
    let mut result = Vec::with_capacity(data.len() * 8);
    let mut bits_read = 0usize;
    for packed in data {
        for shift in (0..8).rev() {
            result.push((packed >> shift) & 1);
            bits_read += 1;
            if width != 0 && bits_read % width == 0 {
                break;
            }
        }
    }
    result
}
