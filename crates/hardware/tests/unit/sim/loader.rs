//! Program Image Tests.
//!
//! Verifies segment layout, typed data serialization, binary files and
//! the fit check performed before anything is written.

use std::io::Write;

use dlxsim_core::common::SimError;
use dlxsim_core::sim::loader::{ProgramImage, Segment};
use dlxsim_core::soc::Memory;
use pretty_assertions::assert_eq;

#[test]
fn words_are_serialized_little_endian() {
    let image = ProgramImage::from_words(0x10, &[0x1122_3344]);
    assert_eq!(image.entry(), 0x10);
    assert_eq!(
        image.segments(),
        &[Segment {
            base: 0x10,
            bytes: vec![0x44, 0x33, 0x22, 0x11],
        }]
    );
}

#[test]
fn typed_data_segments() {
    let image = ProgramImage::new(0)
        .with_singles(0x100, &[1.0])
        .with_doubles(0x200, &[2.0]);
    let segs = image.segments();
    assert_eq!(segs[0].bytes, 1.0f32.to_le_bytes().to_vec());
    assert_eq!(segs[1].bytes, 2.0f64.to_le_bytes().to_vec());
}

#[test]
fn load_copies_every_segment() {
    let image = ProgramImage::from_words(0, &[0xAABB_CCDD]).with_words(0x40, &[5, 6]);
    let mut mem = Memory::new(0x100);
    image.load_into(&mut mem).unwrap();
    assert_eq!(mem.read_word(0).unwrap(), 0xAABB_CCDD);
    assert_eq!(mem.read_word(0x40).unwrap(), 5);
    assert_eq!(mem.read_word(0x44).unwrap(), 6);
}

#[test]
fn later_segments_overwrite_earlier_ones() {
    let image = ProgramImage::new(0)
        .with_words(0, &[1, 2])
        .with_words(4, &[9]);
    let mut mem = Memory::new(16);
    image.load_into(&mut mem).unwrap();
    assert_eq!(mem.read_word(0).unwrap(), 1);
    assert_eq!(mem.read_word(4).unwrap(), 9);
}

#[test]
fn segment_that_does_not_fit_writes_nothing() {
    let image = ProgramImage::new(0)
        .with_words(0, &[7])
        .with_words(12, &[1, 2]);
    let mut mem = Memory::new(16);
    assert_eq!(
        image.load_into(&mut mem),
        Err(SimError::ImageOutOfRange {
            base: 12,
            len: 8,
            size: 16,
        })
    );
    assert_eq!(mem.read_word(0).unwrap(), 0);
}

#[test]
fn binary_file_is_loaded_at_base() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x05, 0x00, 0x01, 0x20]).unwrap();

    let image = ProgramImage::from_binary_file(file.path(), 0x80).unwrap();
    assert_eq!(image.entry(), 0x80);
    let mut mem = Memory::new(0x100);
    image.load_into(&mut mem).unwrap();
    assert_eq!(mem.read_word(0x80).unwrap(), 0x2001_0005);
}

#[test]
fn missing_binary_file_is_an_image_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ProgramImage::from_binary_file(dir.path().join("absent.bin"), 0).unwrap_err();
    assert!(matches!(err, SimError::ImageIo(_)));
}
