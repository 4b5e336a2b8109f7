//! Time helpers.

use jiff::Timestamp;

/// Current time as an RFC 3339 UTC string, the format used by every
/// `createdAt`/`updatedAt`/`loginTime` field.
pub fn now_iso() -> String {
    Timestamp::now().to_string()
}
