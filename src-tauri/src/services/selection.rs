//! Selection list formatting.

use crate::models::file::FileEntry;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size in 1024-based units.
///
/// Bytes are printed as an integer, larger units with two decimals. Anything
/// beyond GB stays in GB.
pub fn format_file_size(bytes: u64) -> String {
    let mut unit = 0;
    let mut divisor: u64 = 1;
    while unit < SIZE_UNITS.len() - 1 && bytes >= divisor * 1024 {
        divisor *= 1024;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, SIZE_UNITS[0])
    } else {
        format!("{:.2} {}", bytes as f64 / divisor as f64, SIZE_UNITS[unit])
    }
}

/// One display line per file: `name (size)`.
pub fn describe_selection(files: &[FileEntry]) -> Vec<String> {
    files
        .iter()
        .map(|f| format!("{} ({})", f.file_name, format_file_size(f.file_size)))
        .collect()
}
