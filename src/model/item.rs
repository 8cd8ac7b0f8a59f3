use serde::{Deserialize, Serialize};

/// Stable identifier for an item. Allocated from the list's monotonic
/// counter at creation; never reused or reassigned, even after the item
/// is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single list entry. Plain data — all mutation goes through the
/// operations in `ops::item_ops`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Current display text (mutable via rename)
    pub text: String,
    pub completed: bool,
    /// Excluded from the visible projection when true. Only the bulk
    /// hide-completed operation ever changes this.
    pub hidden: bool,
}

impl Item {
    /// Create a fresh item: not completed, not hidden.
    pub fn new(id: ItemId, text: String) -> Self {
        Item {
            id,
            text,
            completed: false,
            hidden: false,
        }
    }
}
