use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let commit = env::var("GITHUB_SHA")
        .ok()
        .filter(|sha| !sha.is_empty())
        .map(|sha| sha.chars().take(7).collect())
        .or_else(|| run_git(&["rev-parse", "--short=7", "HEAD"]))
        .unwrap_or_else(|| UNKNOWN.to_string());

    let build_date = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .filter(|epoch| !epoch.is_empty())
        .map(|epoch| format!("@{epoch}"))
        .or_else(|| run_git(&["log", "-1", "--format=%cs"]))
        .unwrap_or_else(|| UNKNOWN.to_string());

    println!("cargo:rustc-env=SPOOLTAG_BUILD_COMMIT={commit}");
    println!("cargo:rustc-env=SPOOLTAG_BUILD_DATE={build_date}");
}

fn run_git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}
