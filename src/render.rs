//! module for writing samples into an image sink
use crate::error::NetpbmError;
use crate::image::ImageSink;

const WHITE: u32 = 0xFF_FF_FF;
const BLACK: u32 = 0x00_00_00;

fn check_sample_count(samples: &[u8], expected: usize) -> Result<(), NetpbmError> {
    if samples.len() != expected {
        return Err(NetpbmError::SampleCountMismatch {
            expected,
            actual: samples.len(),
        });
    }
    Ok(())
}

fn pixel_count<I: ImageSink>(image: &I) -> usize {
    image.width() as usize * image.height() as usize
}

// Visits pixels row by row, left to right.
fn for_each_position<I: ImageSink>(
    image: &mut I,
    colors: impl Iterator<Item = Result<u32, NetpbmError>>,
) -> Result<(), NetpbmError> {
    let width = image.width();
    let (mut x, mut y) = (0, 0);
    for color in colors {
        image.set_pixel(x, y, color?);
        x += 1;
        if x >= width {
            x = 0;
            y += 1;
        }
    }
    Ok(())
}

/// Scales `sample` from `0..=max_value` onto `0..=255`, rounding down.
pub(crate) fn rescale(sample: u8, max_value: u64) -> Result<u32, NetpbmError> {
    let scaled = u64::from(sample) * 255 / max_value;
    if scaled > 255 {
        return Err(NetpbmError::InvalidSampleValue(scaled as u32));
    }
    Ok(scaled as u32)
}

/// `0` is white and `1` is black.
pub(crate) fn render_bitmap<I: ImageSink>(
    image: &mut I,
    samples: &[u8],
) -> Result<(), NetpbmError> {
    check_sample_count(samples, pixel_count(image))?;
    let colors = samples.iter().map(|sample| match *sample {
        0 => Ok(WHITE),
        1 => Ok(BLACK),
        other => Err(NetpbmError::InvalidSampleValue(u32::from(other))),
    });
    for_each_position(image, colors)
}

pub(crate) fn render_graymap<I: ImageSink>(
    image: &mut I,
    max_value: u64,
    samples: &[u8],
) -> Result<(), NetpbmError> {
    check_sample_count(samples, pixel_count(image))?;
    let colors = samples.iter().map(|sample| {
        let gray = rescale(*sample, max_value)?;
        Ok((gray << 16) | (gray << 8) | gray)
    });
    for_each_position(image, colors)
}

/// Samples come in red, green, blue order.
pub(crate) fn render_pixmap<I: ImageSink>(
    image: &mut I,
    max_value: u64,
    samples: &[u8],
) -> Result<(), NetpbmError> {
    check_sample_count(samples, 3 * pixel_count(image))?;
    let colors = samples.chunks_exact(3).map(|rgb| {
        let red = rescale(rgb[0], max_value)?;
        let green = rescale(rgb[1], max_value)?;
        let blue = rescale(rgb[2], max_value)?;
        Ok((red << 16) | (green << 8) | blue)
    });
    for_each_position(image, colors)
}
