//! Entry name validation.
//!
//! Entry names are file names directly inside the store directory, so any
//! name that could resolve elsewhere is rejected before a write.

use crate::core::constants;
use crate::error::{Result, StoreError};

/// Validate an entry name for writing.
///
/// Rejects:
/// - empty names, `.` and `..`
/// - names containing `/`, `\` or NUL
/// - names starting with the store's temp file prefix
///
/// # Errors
///
/// Returns `StoreError::InvalidEntryName` describing the first violation.
pub fn validate_entry_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("cannot be empty")
    } else if name == "." || name == ".." {
        Some("cannot be a relative directory")
    } else if name.contains('/') || name.contains('\\') {
        Some("cannot contain path separators")
    } else if name.contains('\0') {
        Some("cannot contain NUL bytes")
    } else if name.starts_with(constants::TEMP_PREFIX) {
        Some("prefix is reserved for temporary files")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(StoreError::InvalidEntryName {
            name: name.to_string(),
            reason,
        }
        .into()),
        None => Ok(()),
    }
}
