//! Build metadata and record-file format version.
//! Includes the generated version.rs from the build script so there is a
//! single source of truth for the storage layer and `--version` output.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Parse the record-file format version from the build script into u32.
/// Falls back to the first format version if parsing fails.
pub fn data_format_version() -> u32 {
    DATA_FORMAT_VERSION.parse().unwrap_or(1)
}

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Long version string shown by `hms --version`
pub fn long_version() -> String {
    format!(
        "{} (data format v{}, built {}, {})",
        env!("CARGO_PKG_VERSION"),
        data_format_version(),
        build_time(),
        git_hash()
    )
}
