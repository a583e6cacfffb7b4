use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("spooltag"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn fixture(name: &str) -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join(name)
        .join("input.nfc")
}

fn sample_dump() -> std::path::PathBuf {
    fixture("bambu_pink")
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_supports_decode_and_parse() {
    cmd()
        .arg("dump")
        .arg("decode")
        .arg("--help")
        .assert()
        .success();
    cmd()
        .arg("dump")
        .arg("parse")
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn long_version_includes_build_info() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("spooltag").and(contains("commit:")).and(contains("build date:")));
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(contains("spooltag").and(contains("commit:").not()));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.nfc");
    let report = temp.path().join("report.json");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn wrong_extension_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("spool.bin");
    std::fs::copy(sample_dump(), &input).expect("copy fixture");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("unsupported input format").and(contains("expected a .nfc file")));
}

#[test]
fn malformed_dump_is_an_error() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("broken.nfc");
    std::fs::write(&input, "Mifare Classic type: 1K\nBlock 1: XY\n").expect("write dump");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .code(2)
        .stderr(contains("invalid hex byte 'XY'").and(contains("hint:")));
}

#[test]
fn stdout_outputs_json() {
    let assert = cmd()
        .arg("dump")
        .arg("decode")
        .arg(sample_dump())
        .arg("--stdout")
        .assert()
        .success();
    let report = stdout_json(&assert);
    assert_eq!(report["recognized"], true);
    assert_eq!(report["spool"]["variant_id"], "A00-R3");
    assert_eq!(report["product"]["color_name"], "Hot Pink");
    assert_eq!(report["produced_at"], "2025-07-21T14:17:00");
}

#[test]
fn glob_input_resolving_to_one_file() {
    let pattern = repo_root()
        .join("tests")
        .join("golden")
        .join("bambu_pin?")
        .join("*.nfc");

    let assert = cmd()
        .arg("dump")
        .arg("decode")
        .arg(pattern)
        .arg("--stdout")
        .assert()
        .success();
    assert_eq!(stdout_json(&assert)["spool"]["detailed_type"], "PLA Basic");
}

#[test]
fn glob_matching_several_files_is_rejected() {
    let pattern = repo_root()
        .join("tests")
        .join("golden")
        .join("bambu_*")
        .join("input.nfc");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(pattern)
        .arg("--stdout")
        .assert()
        .code(2)
        .stderr(contains("multiple files match pattern"));
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(sample_dump())
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(sample_dump())
        .arg("-o")
        .arg(report)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn report_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("spool.nfc");
    std::fs::copy(sample_dump(), &input).expect("copy fixture");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(contains("report path must differ from input"));
}

#[test]
fn report_written_with_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("out").join("report.json");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(sample_dump())
        .arg("-o")
        .arg(&report)
        .arg("--pretty")
        .assert()
        .success()
        .stderr(contains("OK: report written ->"));

    let json = std::fs::read_to_string(&report).expect("read report");
    assert!(json.contains("\n  \"report_version\": 1"));
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["spool"]["filament_length_m"], 330);
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(sample_dump())
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::contains("OK:").not());
}

#[test]
fn strict_fails_when_tag_not_recognised() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(fixture("foreign_1k"))
        .arg("-o")
        .arg(&report)
        .arg("--strict")
        .assert()
        .code(2)
        .stderr(contains("tag not recognised").and(contains("\"GF\"")));

    let value: Value =
        serde_json::from_str(&std::fs::read_to_string(&report).expect("read report"))
            .expect("valid json");
    assert_eq!(value["recognized"], false);
}

#[test]
fn unrecognised_tag_without_strict_succeeds() {
    let assert = cmd()
        .arg("dump")
        .arg("decode")
        .arg(fixture("bambu_on_4k"))
        .arg("--stdout")
        .assert()
        .success();
    let report = stdout_json(&assert);
    assert_eq!(report["recognized"], false);
    assert_eq!(report["rejection"], "unsupported tag type: Mifare Classic 4K");
    assert!(report.get("spool").is_none());
}

#[test]
fn strict_passes_for_recognised_tag() {
    cmd()
        .arg("dump")
        .arg("decode")
        .arg(sample_dump())
        .arg("--stdout")
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn text_renders_spool_card() {
    cmd()
        .arg("dump")
        .arg("decode")
        .arg(sample_dump())
        .arg("--text")
        .assert()
        .success()
        .stdout(
            contains("Bambu Lab Filament\nType: PLA Basic\n")
                .and(contains("Color: Hot Pink (#F5547C)\n"))
                .and(contains("Filament Code: 10204\n"))
                .and(contains("Prod: 2025-07-21 14:17\n"))
                .and(contains("Hotend: 190-230 C\n"))
                .and(contains("Drying: 55 C for 8h\n"))
                .and(contains("Nozzle: >= 0.20mm\n"))
                .and(contains("Weight: 1000g\n"))
                .and(contains("Diameter: 1.75mm\n"))
                .and(contains("Spool Width: 32.12mm\n"))
                .and(contains("Length: 330m\n")),
        );
}

#[test]
fn text_shows_transparency() {
    cmd()
        .arg("dump")
        .arg("parse")
        .arg(fixture("bambu_translucent_blue"))
        .arg("--text")
        .assert()
        .success()
        .stdout(contains("Color: Translucent Light Blue (#61B0FF @ 50%)\n"));
}

#[test]
fn text_and_stdout_conflict() {
    cmd()
        .arg("dump")
        .arg("decode")
        .arg(sample_dump())
        .arg("--text")
        .arg("--stdout")
        .assert()
        .failure();
}

#[test]
fn custom_catalog_replaces_builtin() {
    let temp = TempDir::new().expect("tempdir");
    let catalog = temp.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"[{"variant_id": "B00-D1", "product_code": "99999", "color_name": "Test Grey"}]"#,
    )
    .expect("write catalog");

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(fixture("bambu_abs"))
        .arg("--text")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("Color: Test Grey (#87909A)\n").and(contains("Filament Code: 99999\n")));

    cmd()
        .arg("dump")
        .arg("decode")
        .arg(sample_dump())
        .arg("--text")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .success()
        .stdout(contains("Color: #F5547C\n").and(contains("Material ID: GFA00\n")));
}

#[test]
fn duplicate_catalog_entries_are_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let catalog = temp.path().join("catalog.json");
    std::fs::write(
        &catalog,
        r#"[
            {"variant_id": "A00-R3", "product_code": "1", "color_name": "One"},
            {"variant_id": "A00-R3", "product_code": "2", "color_name": "Two"}
        ]"#,
    )
    .expect("write catalog");

    cmd()
        .arg("catalog")
        .arg("lookup")
        .arg("A00-R3")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .code(2)
        .stderr(contains("failed to load catalog").and(contains("A00-R3")));
}

#[test]
fn catalog_lookup_prints_entry() {
    let assert = cmd()
        .arg("catalog")
        .arg("lookup")
        .arg("A16-W0")
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(value["catalog"], "builtin");
    assert_eq!(value["entry"]["product_code"], "13106");
    assert_eq!(value["entry"]["color_name"], "White Oak");
}

#[test]
fn catalog_lookup_miss_exits_with_hint() {
    cmd()
        .arg("catalog")
        .arg("lookup")
        .arg("a00-r3")
        .assert()
        .code(2)
        .stderr(contains("variant id not found: a00-r3").and(contains("hint:")));
}

#[test]
fn verbose_logs_decode_to_stderr() {
    cmd()
        .arg("-v")
        .arg("dump")
        .arg("decode")
        .arg(sample_dump())
        .arg("--stdout")
        .assert()
        .success()
        .stderr(contains("decoding dump"));
}
