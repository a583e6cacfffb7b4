use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use spooltag_core::{NfcFileSource, SourceError, TagSource, TagType};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn temp_dump(name: &str, contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("spooltag_{name}_{unique}.nfc"));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn nfc_source_reads_fixture() {
    let path = repo_root()
        .join("tests")
        .join("golden")
        .join("bambu_pink")
        .join("input.nfc");
    let mut source = NfcFileSource::open(&path).unwrap();
    let dump = source.read_tag().unwrap();

    assert_eq!(dump.tag_type(), TagType::Classic1k);
    assert_eq!(dump.block_count(), 64);
    // Key B of every sector trailer is unreadable in the dump.
    assert_eq!(&dump.block(3).unwrap()[10..], &[0u8; 6]);
    assert_eq!(&dump.block(3).unwrap()[6..10], &[0x87, 0x87, 0x87, 0x69]);
}

#[test]
fn nfc_source_reads_4k_fixture() {
    let path = repo_root()
        .join("tests")
        .join("golden")
        .join("bambu_on_4k")
        .join("input.nfc");
    let dump = NfcFileSource::open(&path).unwrap().read_tag().unwrap();
    assert_eq!(dump.tag_type(), TagType::Classic4k);
    assert_eq!(dump.block_count(), 256);
}

#[test]
fn nfc_source_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("spooltag_definitely_missing.nfc");
    let err = match NfcFileSource::open(&path) {
        Ok(_) => panic!("expected missing file to be rejected"),
        Err(err) => err,
    };
    assert!(matches!(err, SourceError::Io(_)));
}

#[test]
fn nfc_source_rejects_bad_hex() {
    let path = temp_dump("bad_hex", "Mifare Classic type: 1K\nBlock 1: 41 ZZ\n");
    let result = NfcFileSource::open(&path).and_then(|mut source| source.read_tag());
    let _ = fs::remove_file(&path);

    let err = result.unwrap_err();
    assert!(matches!(err, SourceError::Dump(ref msg) if msg.contains("invalid hex byte 'ZZ'")));
}

#[test]
fn nfc_source_requires_tag_type() {
    let path = temp_dump("no_type", "Filetype: Flipper NFC device\nBlock 1: 41\n");
    let result = NfcFileSource::open(&path).and_then(|mut source| source.read_tag());
    let _ = fs::remove_file(&path);

    assert!(matches!(result, Err(SourceError::Dump(_))));
}
