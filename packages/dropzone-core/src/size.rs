//! Human readable byte counts.

/// Unit names, indexed by the power of 1024 they stand for.
///
/// `u64::MAX` is just under 16 EB, so the table covers every representable size.
pub const UNITS: [&str; 7] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB"];

const STEP: u64 = 1024;

/// Format a byte count the way the drop zone displays it.
///
/// The unit is the largest power of 1024 that does not exceed `bytes`. The scaled value is rounded to two
/// decimals (ties away from zero) and trailing zeros are dropped.
///
/// ```
/// use dropzone_core::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(1048576), "1 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let index = unit_index(bytes);
    let divisor = (STEP as u128).pow(index as u32);

    // Work in hundredths with integer math so ties round the same way for every magnitude.
    let scaled = bytes as u128 * 100;
    let hundredths = (2 * scaled + divisor) / (2 * divisor);

    let whole = hundredths / 100;
    let frac = hundredths % 100;

    let number = match frac {
        0 => whole.to_string(),
        f if f % 10 == 0 => format!("{whole}.{}", f / 10),
        f => format!("{whole}.{f:02}"),
    };

    format!("{number} {}", UNITS[index])
}

/// floor(log1024(bytes)), computed exactly.
fn unit_index(bytes: u64) -> usize {
    let mut index = 0;
    let mut remaining = bytes;
    while remaining >= STEP && index < UNITS.len() - 1 {
        remaining /= STEP;
        index += 1;
    }
    index
}
