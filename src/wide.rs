//! UTF-8 <-> UTF-16 conversion at the native dialog boundary.
//!
//! The shell dialog API consumes and produces NUL-terminated UTF-16. Decoding
//! stops at the first NUL, so a buffer may carry trailing terminators or
//! padding. Encoding for the native side refuses interior NULs, because the OS
//! would silently truncate the string there.

use crate::error::{PickerError, Result};

/// Convert a Rust string to a null-terminated UTF-16 vector.
pub fn to_wstring(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Like [`to_wstring`], but rejects strings the OS would truncate.
pub fn to_wstring_checked(value: &str) -> Result<Vec<u16>> {
    if let Some(pos) = value.find('\0') {
        return Err(PickerError::Encoding(format!(
            "interior NUL at byte {} in {:?}",
            pos, value
        )));
    }
    Ok(to_wstring(value))
}

/// Decode UTF-16 up to the first NUL (or the whole slice if there is none).
pub fn from_wide(units: &[u16]) -> Result<String> {
    let len = units.iter().position(|&c| c == 0).unwrap_or(units.len());
    String::from_utf16(&units[..len]).map_err(|e| PickerError::Encoding(e.to_string()))
}

/// Decode a NUL-terminated wide string owned by the OS.
///
/// # Safety
/// `ptr` must be null or point to a readable, NUL-terminated UTF-16 string.
pub unsafe fn from_wide_ptr(ptr: *const u16) -> Result<String> { unsafe {
    if ptr.is_null() {
        return Err(PickerError::Encoding("null string pointer".to_string()));
    }
    let len = (0..).take_while(|&i| *ptr.offset(i) != 0).count();
    from_wide(std::slice::from_raw_parts(ptr, len))
}}
