//! Temporary configuration files.

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a temporary `.toml` file deleted on drop.
pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("vaxsched-config-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes())
        .expect("write temp config");
    file
}
