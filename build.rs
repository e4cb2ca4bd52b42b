//! Embeds the git revision and build date into `build_info.rs`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    let commit = env::var("TWOPIECE_BUILD_COMMIT")
        .ok()
        .or_else(git_revision)
        .unwrap_or_else(|| "unknown".to_string());
    let date = env::var("TWOPIECE_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    fs::write(
        Path::new(&out_dir).join("build_info.rs"),
        format!(
            "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
            commit, date
        ),
    )
    .expect("write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=TWOPIECE_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=TWOPIECE_BUILD_DATE");
}
