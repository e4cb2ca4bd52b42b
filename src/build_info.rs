//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `<version> (<date> <commit>)`, as printed by `--version`.
pub fn version_string() -> String {
    format!(
        "{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
