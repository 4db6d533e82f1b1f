use netpbm_reader::*;

const WHITE: u32 = 0xFFFFFF;
const BLACK: u32 = 0x000000;

/// Records every write, to check the order pixels arrive in.
struct RecordingSink {
    width: u32,
    height: u32,
    writes: Vec<(u32, u32, u32)>,
}

impl ImageSink for RecordingSink {
    fn create(width: u32, height: u32) -> Self {
        RecordingSink { width, height, writes: vec![] }
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgb: u32) {
        self.writes.push((x, y, rgb));
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[test]
fn raw_pixmap_single_pixel() {
    let mut contents = b"P6\n1 1\n255\n".to_vec();
    contents.extend([255, 0, 128]);
    let image = decode_rgb(&contents).unwrap();
    assert_eq!(image.width(), 1);
    assert_eq!(image.height(), 1);
    assert_eq!(image.pixels(), &[0xFF0080]);
}

#[test]
fn plain_bitmap() {
    let image = decode_rgb(b"P1\n# a J\n3 2\n0 1 0\n1 1 0\n").unwrap();
    assert_eq!(image.pixels(), &[WHITE, BLACK, WHITE, BLACK, BLACK, WHITE]);
}

#[test]
fn plain_bitmap_without_separators() {
    let image = decode_rgb(b"P1 2 2 0110").unwrap();
    assert_eq!(image.pixels(), &[WHITE, BLACK, BLACK, WHITE]);
}

#[test]
fn raw_bitmap_rows_start_on_fresh_bytes() {
    let mut contents = b"P4\n3 2\n".to_vec();
    contents.extend([0b1011_0000, 0b0110_0000]);
    let image = decode_rgb(&contents).unwrap();
    assert_eq!(image.pixels(), &[BLACK, WHITE, BLACK, WHITE, BLACK, BLACK]);
}

#[test]
fn plain_and_raw_graymap_agree() {
    let plain = decode_rgb(b"P2\n# comment\n4 2\n15\n0 3 7 15\n15 7 3 0\n").unwrap();
    let mut raw = b"P5\n4 2\n15\n".to_vec();
    raw.extend([0, 3, 7, 15, 15, 7, 3, 0]);
    let raw = decode_rgb(&raw).unwrap();
    assert_eq!(plain, raw);
    assert_eq!(plain.pixel(3, 0), Some(WHITE));
    assert_eq!(plain.pixel(0, 0), Some(BLACK));
    // 3 * 255 / 15
    assert_eq!(plain.pixel(1, 0), Some(0x333333));
}

#[test]
fn plain_pixmap_rescales_channels() {
    let image = decode_rgb(b"P3\n2 1\n15\n15 0 7  0 15 15\n").unwrap();
    assert_eq!(image.pixels(), &[0xFF0077, 0x00FFFF]);
}

#[test]
fn graymap_rescaling_truncates() {
    for max_value in [1u32, 2, 3, 7, 15, 100, 254, 255] {
        for sample in 0..=max_value {
            let contents = format!("P2 1 1 {max_value} {sample}");
            let image = decode_rgb(contents.as_bytes()).unwrap();
            let gray = (f64::from(sample) / f64::from(max_value) * 255.0) as u32;
            assert_eq!(image.pixel(0, 0), Some((gray << 16) | (gray << 8) | gray));
        }
    }
}

#[test]
fn zero_width_raw_bitmap_with_payload() {
    assert_eq!(
        decode_rgb(b"P4 0 5\n\xff"),
        Err(NetpbmError::SampleCountMismatch { expected: 0, actual: 8 })
    );
    assert_eq!(
        decode_rgb(b"P4 0 5\n\xff\xff\xff"),
        Err(NetpbmError::SampleCountMismatch { expected: 0, actual: 24 })
    );
}

#[test]
fn pixels_are_written_row_major() {
    let sink: RecordingSink = decode(b"P2 2 2 255 1 2 3 4").unwrap();
    let positions = sink.writes.iter().map(|(x, y, _)| (*x, *y)).collect::<Vec<_>>();
    assert_eq!(positions, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn bad_magic_numbers() {
    assert!(matches!(decode_rgb(b"PZ\n1 1\n0"), Err(NetpbmError::InvalidFormat(_))));
    assert!(matches!(decode_rgb(b"Q1\n1 1\n0"), Err(NetpbmError::InvalidFormat(_))));
    assert_eq!(decode_rgb(b"\n\n"), Err(NetpbmError::MissingMagicNumber));
}

#[test]
fn too_few_bitmap_samples() {
    assert_eq!(
        decode_rgb(b"P1\n2 2\n0 1\n1\n"),
        Err(NetpbmError::SampleCountMismatch { expected: 4, actual: 3 })
    );
}

#[test]
fn too_many_pixmap_samples() {
    assert_eq!(
        decode_rgb(b"P3 1 1 255 1 2 3 4"),
        Err(NetpbmError::SampleCountMismatch { expected: 3, actual: 4 })
    );
}

#[test]
fn ascii_sample_over_255() {
    assert_eq!(decode_rgb(b"P2 2 1 255 0 300"), Err(NetpbmError::SampleOverflow(300)));
}

#[test]
fn sample_above_max_value() {
    assert_eq!(decode_rgb(b"P2 1 1 15 16"), Err(NetpbmError::InvalidSampleValue(272)));
    let mut raw = b"P6 1 1 1\n".to_vec();
    raw.extend([1, 1, 2]);
    assert_eq!(decode_rgb(&raw), Err(NetpbmError::InvalidSampleValue(510)));
}

#[test]
fn plain_bitmap_digit_other_than_zero_or_one() {
    assert_eq!(decode_rgb(b"P1 2 1 0 2"), Err(NetpbmError::InvalidSampleValue(2)));
}

#[test]
fn missing_header_fields() {
    assert_eq!(decode_rgb(b"P3\n# no size\n"), Err(NetpbmError::MissingDimensions));
    assert_eq!(decode_rgb(b"P2 3 3\n"), Err(NetpbmError::MissingMaxValue));
    assert_eq!(decode_rgb(b"P5 3 3 0\n"), Err(NetpbmError::InvalidMaxValue(0)));
}

#[test]
fn empty_image() {
    let image = decode_rgb(b"P2 0 0 255\n").unwrap();
    assert!(image.pixels().is_empty());
    let image = decode_rgb(b"P4 0 5\n").unwrap();
    assert_eq!(image.height(), 5);
}

#[test]
fn decoding_is_repeatable() {
    let contents = b"P3 2 2 255 1 2 3 4 5 6 7 8 9 10 11 12";
    let handles = (0..4)
        .map(|_| std::thread::spawn(move || decode_rgb(contents).unwrap()))
        .collect::<Vec<_>>();
    let first = decode_rgb(contents).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), first);
    }
}

#[test]
fn header_probe_matches_decode() {
    let contents = b"P5\n# probe\n3 1\n200\n\x01\x02\x03";
    let header = read_header(contents).unwrap();
    assert_eq!(header.version, FormatVersion::P5);
    assert_eq!(header.version.kind(), ImageKind::Graymap);
    assert_eq!(header.version.encoding(), Encoding::Raw);
    assert_eq!((header.width, header.height, header.max_value), (3, 1, Some(200)));
    let image = decode_rgb(contents).unwrap();
    assert_eq!(image.width(), header.width);
}
