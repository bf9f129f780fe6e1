/// ID types for Keepsake content items
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Content item identifier
///
/// Ids are positive integers, unique within the effective set of one content
/// kind. Zero never deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(NonZeroU32);

impl ItemId {
    /// The id assigned to the first item of an empty set
    pub const FIRST: ItemId = ItemId(NonZeroU32::MIN);

    /// Create an item ID, `None` for zero
    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    /// The id following this one, `None` at `u32::MAX`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Get the inner value
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroU32> for ItemId {
    fn from(id: NonZeroU32) -> Self {
        Self(id)
    }
}
