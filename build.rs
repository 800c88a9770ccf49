use std::fs;
use std::path::Path;
use std::process::Command;

/// Read a single-line stamp file, falling back when it is missing.
fn read_stamp(path: &str, fallback: &str) -> String {
    let file = Path::new(path);
    if file.exists() {
        fs::read_to_string(file)
            .unwrap_or_else(|_| fallback.to_string())
            .trim()
            .to_string()
    } else {
        fallback.to_string()
    }
}

fn git_hash() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // Monotonic build counter, persisted next to the manifest
    let build_number: u64 = read_stamp("BUILD_NUMBER", "0").parse().unwrap_or(0);
    let new_build = build_number + 1;
    fs::write("BUILD_NUMBER", new_build.to_string()).expect("Failed to write build number");

    let version = read_stamp("VERSION", "0.1.0");
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    let profile_label = if profile == "release" { "release" } else { "development" };

    println!("cargo:rustc-env=SEEDSTREAM_VERSION={}", version);
    println!("cargo:rustc-env=SEEDSTREAM_BUILD={}", new_build);
    println!("cargo:rustc-env=SEEDSTREAM_PROFILE={}", profile_label);
    println!("cargo:rustc-env=SEEDSTREAM_GIT_HASH={}", git_hash());

    println!("cargo:rerun-if-changed=BUILD_NUMBER");
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=PROFILE");
}
