// Serialization utilities for library persistence

use crate::library::LibraryError;
use crate::library::types::LibrarySnapshot;

/// Serialize a library snapshot to JSON
pub fn serialize_to_json(snapshot: &LibrarySnapshot) -> Result<String, LibraryError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Deserialize a library snapshot from JSON
///
/// The snapshot is validated before it is returned.
pub fn deserialize_from_json(json_data: &str) -> Result<LibrarySnapshot, LibraryError> {
    let snapshot: LibrarySnapshot = serde_json::from_str(json_data)?;
    crate::library::validate_snapshot(&snapshot)?;
    Ok(snapshot)
}
