//! Wire-level integration tests.
//!
//! Each test assembles commands through the public API and asserts the
//! exact byte sequences the SRP-350 expects, including the worked examples
//! from the command manual.

use pretty_assertions::assert_eq;

use image::{DynamicImage, Rgba, RgbaImage};
use tirilla::printer::Session;
use tirilla::protocol::barcode::{self, BarcodeSystem};
use tirilla::protocol::commands::{self, CutMode};
use tirilla::protocol::graphics::RasterMode;
use tirilla::protocol::text::{self, PrintMode, Underline};
use tirilla::render::RasterImage;
use tirilla::transport::MemoryTransport;
use tirilla::TirillaError;

fn session() -> Session<MemoryTransport> {
    Session::new(MemoryTransport::default())
}

// ============================================================================
// WORKED EXAMPLES FROM THE COMMAND MANUAL
// ============================================================================

#[test]
fn print_mode_worked_example() {
    // Font B + emphasized + double width + underline packs to 169
    let mode = PrintMode {
        font_b: true,
        emphasized: true,
        double_width: true,
        underline: true,
        ..Default::default()
    };
    assert_eq!(text::select_print_mode(mode), vec![0x1B, 0x21, 169]);
}

#[test]
fn character_size_worked_example() {
    // Width 3, height 5 packs to 53
    assert_eq!(
        text::select_character_size(3, 5).unwrap(),
        vec![0x1D, 0x21, 53]
    );
}

#[test]
fn barcode_shapes_worked_examples() {
    // System A: NUL-terminated, no length byte
    let ean8 = barcode::print_barcode(BarcodeSystem::Ean8, "41057759").unwrap();
    let mut expected = vec![0x1D, 0x6B, 3];
    expected.extend_from_slice(b"41057759");
    expected.push(0x00);
    assert_eq!(ean8, expected);

    // System B: length-prefixed, no terminator
    let ean13 = barcode::print_barcode(BarcodeSystem::Ean13Ext, "4388860567386").unwrap();
    let mut expected = vec![0x1D, 0x6B, 67, 13];
    expected.extend_from_slice(b"4388860567386");
    assert_eq!(ean13, expected);
}

#[test]
fn cut_with_and_without_feed() {
    assert_eq!(
        commands::cut(CutMode::FeedAndCut, Some(40)),
        vec![0x1D, 0x56, 66, 40]
    );
    // No feed distance: 3-byte form, the feed byte is absent entirely
    assert_eq!(
        commands::cut(CutMode::Default, None),
        vec![0x1D, 0x56, 49]
    );
}

// ============================================================================
// SESSION BUFFERING
// ============================================================================

#[test]
fn buffer_equals_concatenation_of_payloads() {
    let mut session = session();
    let mut expected = Vec::new();
    expected.extend(session.initialize());
    expected.extend(session.select_character_size(2, 2).unwrap());
    expected.extend(session.println("DOUBLE"));
    expected.extend(session.select_character_size(0, 0).unwrap());
    expected.extend(
        session
            .print_barcode(BarcodeSystem::Code128, "{BNo.123456")
            .unwrap(),
    );
    expected.extend(session.cut(CutMode::FeedAndCut, Some(40)));

    assert_eq!(session.buffer(), &expected[..]);
}

#[test]
fn send_is_a_single_write_then_empty() {
    let mut session = session();
    session.initialize();
    session.emphasize(true);
    session.println("TOTAL 12.50");
    let expected = session.buffer().to_vec();

    session.send().unwrap();
    assert_eq!(session.transport().writes.len(), 1);
    assert_eq!(session.transport().writes[0], expected);
    assert!(session.buffer().is_empty());

    // A second flush with an empty buffer writes an empty payload
    session.send().unwrap();
    assert_eq!(session.transport().writes.len(), 2);
    assert!(session.transport().writes[1].is_empty());
}

#[test]
fn rejected_commands_leave_no_partial_bytes() {
    let mut session = session();
    session.initialize();
    let clean = session.buffer().to_vec();

    assert!(matches!(
        session.select_character_size(8, 0),
        Err(TirillaError::OutOfRange { name: "width", .. })
    ));
    assert!(session.real_time_status(0).is_err());
    assert!(session.print_barcode(BarcodeSystem::Ean8, "über").is_err());
    assert!(session.define_downloaded_bit_image(0, 1, &[]).is_err());
    assert!(matches!(
        session.print_nv_bit_image(),
        Err(TirillaError::Unsupported(_))
    ));

    assert_eq!(session.buffer(), &clean[..]);
}

#[test]
fn session_encodes_text_in_cp437() {
    let mut session = session();
    session.print("Ñandú");
    // Ñ = 0xA5, ú = 0xA3 in CP437
    assert_eq!(session.buffer(), &[0xA5, b'a', b'n', b'd', 0xA3]);
}

// ============================================================================
// RASTER PIPELINE END TO END
// ============================================================================

#[test]
fn raster_image_through_session() {
    // 16x2 all black: 2 bytes wide, every bit set
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        16,
        2,
        Rgba([0, 0, 0, 255]),
    ));

    let mut session = session();
    session.print_image(&img, false).unwrap();

    let expected = [
        0x1D, 0x76, 0x30, 0, // GS v 0, normal mode
        2, 0, // width: 2 bytes
        2, 0, // height: 2 dots
        0xFF, 0xFF, 0xFF, 0xFF,
    ];
    assert_eq!(session.buffer(), &expected[..]);
}

#[test]
fn oversize_bitmap_is_scaled_and_centered_bitmap_is_padded() {
    // 1024 wide scales down to the 512-dot head
    let wide = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        1024,
        20,
        Rgba([255, 255, 255, 255]),
    ));
    let raster = RasterImage::from_image(&wide, false).unwrap();
    assert_eq!(raster.width_bytes(), 64);
    assert_eq!(raster.height_dots(), 10);

    // 100 wide with centering pads to the full 64-byte row
    let narrow = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        100,
        1,
        Rgba([0, 0, 0, 255]),
    ));
    let raster = RasterImage::from_image(&narrow, true).unwrap();
    assert_eq!(raster.width_bytes(), 64);
    // Margin is (512 - 100) / 2 = 206 dots; the printed band spans
    // columns 206..306 and everything outside stays blank
    let row = &raster.data;
    assert_eq!(row.len(), 64);
    assert_eq!(row[0], 0);
    assert_eq!(row[63], 0);
    let ones: u32 = row.iter().map(|b| b.count_ones()).sum();
    assert_eq!(ones, 100);
}

#[test]
fn raster_mode_scaling_variants() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        8,
        1,
        Rgba([0, 0, 0, 255]),
    ));
    let raster = RasterImage::from_image(&img, false).unwrap();

    for (mode, m) in [
        (RasterMode::Normal, 0u8),
        (RasterMode::DoubleWidth, 1),
        (RasterMode::DoubleHeight, 2),
        (RasterMode::Quadruple, 3),
    ] {
        let cmd = raster.to_command(mode).unwrap();
        assert_eq!(cmd[..8], [0x1D, 0x76, 0x30, m, 1, 0, 1, 0]);
        assert_eq!(&cmd[8..], &[0xFF]);
    }
}

// ============================================================================
// FULL RECEIPT GOLDEN SEQUENCE
// ============================================================================

#[test]
fn full_receipt_golden_bytes() {
    let mut session = session();
    session.initialize();
    session.select_charset(text::Charset::Spain);
    session.underline(Underline::DoubleDot);
    session.println("PANADERIA SOL");
    session.underline(Underline::Off);
    session.horizontal_tab();
    session.println("pan: 1.20");
    session.set_barcode_height(80);
    session
        .print_barcode(BarcodeSystem::Itf, "0123456789")
        .unwrap();
    session.print_and_feed_lines(2);
    session.cut(CutMode::FeedAndCut, Some(40));
    session.send().unwrap();

    let expected: Vec<u8> = [
        vec![0x1B, 0x40],
        vec![0x1B, 0x52, 7],
        vec![0x1B, 0x2D, 50],
        b"PANADERIA SOL".to_vec(),
        vec![0x0A],
        vec![0x1B, 0x2D, 48],
        vec![0x09],
        b"pan: 1.20".to_vec(),
        vec![0x0A],
        vec![0x1D, 0x68, 80],
        vec![0x1D, 0x6B, 5],
        b"0123456789".to_vec(),
        vec![0x00],
        vec![0x1B, 0x64, 2],
        vec![0x1D, 0x56, 66, 40],
    ]
    .concat();

    assert_eq!(session.transport().writes, vec![expected]);
}
