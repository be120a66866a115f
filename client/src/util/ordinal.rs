//! Ordinal extraction from stored filenames.

#[cfg(test)]
#[path = "ordinal_test.rs"]
mod ordinal_test;

/// Extract the ordinal encoded in a filename.
///
/// The ordinal is the run of leading decimal digits immediately followed by a
/// literal dot (`"3.png"` is ordinal 3). No digits, digits without a dot,
/// zero, and values that overflow `u32` all count as "no ordinal" and exclude
/// the asset from pairing.
pub fn ordinal_from_filename(filename: &str) -> Option<u32> {
    let digits = filename.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || filename.as_bytes().get(digits) != Some(&b'.') {
        return None;
    }
    let ordinal: u32 = filename[..digits].parse().ok()?;
    (ordinal >= 1).then_some(ordinal)
}
