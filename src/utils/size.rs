//! Human-readable byte sizes

/// Binary unit prefixes, smallest first. The last entry absorbs anything larger.
pub const UNIT_PREFIXES: [&str; 9] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"];

/// Suffix appended after the unit prefix
pub const SIZE_SUFFIX: &str = "B";

/// Format a byte count with one decimal digit and a binary unit, e.g. `1.5MiB`.
///
/// Values past the `Yi` range stay in `Yi` rather than growing a new unit.
pub fn abbreviate<T: Into<u128>>(bytes: T) -> String {
    let bytes = bytes.into();
    if bytes == 0 {
        return format!("0.0{}", SIZE_SUFFIX);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNIT_PREFIXES.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1}{}{}", value, UNIT_PREFIXES[unit], SIZE_SUFFIX)
}
