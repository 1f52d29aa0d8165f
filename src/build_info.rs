//! Compile-time build information, shown on the splash screen.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line build label, e.g. `2026-10-18 (a1b2c3d)`.
pub fn build_label() -> String {
    format!("{} ({})", BUILD_DATE, BUILD_COMMIT)
}
