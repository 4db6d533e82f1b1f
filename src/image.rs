//! module for the pixel sinks that decoded images are written into
use std::fmt::{Display, Formatter};

/// Anything a decoder can render pixels into.
///
/// Colors are packed as `0xRRGGBB`. The decoder never reads pixels back.
pub trait ImageSink: Sized {
    fn create(width: u32, height: u32) -> Self;
    fn set_pixel(&mut self, x: u32, y: u32, rgb: u32);
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Row-major buffer of packed 24-bit colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    data: Vec<u32>,
    width: u32,
    height: u32,
}

impl RgbImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(self.index(x, y)).copied()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl ImageSink for RgbImage {
    fn create(width: u32, height: u32) -> Self {
        log::debug!("Create RgbImage with size:({width},{height})");
        RgbImage {
            data: vec![0; width as usize * height as usize],
            width,
            height,
        }
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgb: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        self.data[i] = rgb & 0xFF_FF_FF;
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

// Rec. 601 luma, 0.0..=1.0
fn luminance(rgb: u32) -> f32 {
    let r = ((rgb >> 16) & 0xFF) as f32;
    let g = ((rgb >> 8) & 0xFF) as f32;
    let b = (rgb & 0xFF) as f32;
    (0.299 * r + 0.587 * g + 0.114 * b) / f32::from(u8::MAX)
}

impl Display for RgbImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        log::debug!("Display image with size:({},{})", self.width, self.height);
        for row in self.data.chunks(self.width.max(1) as usize) {
            for rgb in row {
                let gray = luminance(*rgb);
                let char = if gray < 0.2 {
                    ' '
                } else if gray < 0.4 {
                    '░'
                } else if gray < 0.6 {
                    '▒'
                } else if gray < 0.8 {
                    '▓'
                } else {
                    '█'
                };
                write!(f, "{char}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
