//! Unique id generation for users and tickets.

use jiff::Timestamp;

/// Generates unique, creation-ordered integer ids.
///
/// Ids are wall-clock milliseconds bumped to stay strictly monotonic, so
/// two entities created within the same millisecond still get distinct
/// ids. They remain comparable with ids minted by earlier versions that
/// used the raw clock value.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next id.
    pub fn next_id(&mut self) -> u64 {
        let now_ms = Timestamp::now().as_millisecond().max(0) as u64;
        let id = now_ms.max(self.last + 1);
        self.last = id;
        id
    }
}
