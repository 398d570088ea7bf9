//! End-to-end tests over real files and sequential multi-source use.

use escapefn::{Escaper, Mode, Status, Unescaper};
use std::fs::File;
use std::io::Write;

const MODES: [Mode; 3] = [Mode::Minimum, Mode::CStyle, Mode::Octal];

/// Every byte value round-trips through escape then unescape, in every mode.
#[test]
fn whole_byte_space_round_trips() {
    let raw: Vec<u8> = (0u8..=255).collect();
    for mode in MODES {
        let mut escaped = Vec::new();
        assert_eq!(Escaper::new(mode).escape(&raw[..], &mut escaped), Status::Ok);

        let mut restored = Vec::new();
        let mut diag = Vec::new();
        let status = Unescaper::new().unescape_with_diag(&escaped[..], &mut restored, &mut diag);
        assert_eq!(status, Status::Ok);
        assert!(diag.is_empty(), "escaper output must never draw warnings");
        assert_eq!(restored, raw, "round trip failed for {mode:?}");
    }
}

/// Awkward but realistic filename lists survive the round trip.
#[test]
fn filename_lists_round_trip() {
    let raw: &[u8] = b"plain.txt\0with space\0tab\there\0line\nbreak\0back\\slash\0bell\x07\0";
    for mode in MODES {
        let mut escaped = Vec::new();
        assert_eq!(Escaper::new(mode).escape(raw, &mut escaped), Status::Ok);

        let mut restored = Vec::new();
        assert_eq!(Unescaper::new().unescape(&escaped[..], &mut restored), Status::Ok);
        assert_eq!(restored, raw);
    }
}

/// One NUL in, exactly one LF out; one LF in, exactly one NUL out.
#[test]
fn separator_translation_is_one_to_one() {
    let raw = b"a\0b\0c\0";
    for mode in MODES {
        let mut escaped = Vec::new();
        Escaper::new(mode).escape(&raw[..], &mut escaped);
        assert_eq!(escaped.iter().filter(|&&b| b == b'\n').count(), 3);

        let mut restored = Vec::new();
        Unescaper::new().unescape(&escaped[..], &mut restored);
        assert_eq!(restored.iter().filter(|&&b| b == 0x00).count(), 3);
    }
}

/// Escaping a file on disk, the way the CLI consumes sources.
#[test]
fn escapes_from_a_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.bin");
    let mut file = File::create(&path).unwrap();
    file.write_all(b"first\0sec\nond\0").unwrap();
    drop(file);

    let mut escaped = Vec::new();
    let status = Escaper::new(Mode::Minimum).escape(File::open(&path).unwrap(), &mut escaped);
    assert_eq!(status, Status::Ok);
    assert_eq!(escaped, b"first\nsec\\nond\n");
}

/// Two sources escaped back-to-back into one shared sink interleave in
/// strict source order, the way the CLI processes its file arguments.
#[test]
fn sequential_sources_share_one_sink() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.bin");
    let second = dir.path().join("second.bin");
    std::fs::write(&first, b"one\0").unwrap();
    std::fs::write(&second, b"two\0").unwrap();

    let escaper = Escaper::new(Mode::Minimum);
    let mut sink = Vec::new();
    for path in [&first, &second] {
        let status = escaper.escape(File::open(path).unwrap(), &mut sink);
        assert_eq!(status, Status::Ok);
    }
    assert_eq!(sink, b"one\ntwo\n");
}

/// Unescaping a file written by hand, including convenience escapes the
/// escaper itself never emits.
#[test]
fn unescapes_from_a_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.txt");
    std::fs::write(&path, b"a\\ b\n\\101\\t\n").unwrap();

    let mut raw = Vec::new();
    let status = Unescaper::new().unescape(File::open(&path).unwrap(), &mut raw);
    assert_eq!(status, Status::Ok);
    assert_eq!(raw, b"a b\0A\t\0");
}
