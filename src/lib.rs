//! Decoder for the plain and raw netpbm formats (P1 to P6).
//!
//! ```
//! use netpbm_reader::decode_rgb;
//!
//! let image = decode_rgb(b"P6\n1 1\n255\n\xff\x00\x80").unwrap();
//! assert_eq!(image.pixel(0, 0), Some(0xFF0080));
//! ```
pub mod error;
pub mod format;
pub mod image;
pub mod parser;
pub mod scanner;
mod render;
mod unpack;
#[cfg(feature = "display")]
pub mod display;

pub use error::NetpbmError;
pub use format::{Encoding, FormatVersion, ImageKind};
pub use image::{ImageSink, RgbImage};
pub use parser::{decode, decode_rgb, read_header, Decoder, Header, Limits};
pub use scanner::TokenScanner;
