//! Change notification for code outside the update loop
//!
//! Observers register a callback and receive the set of areas that changed
//! once per processed message.

use std::fmt;

/// Set of state areas touched by one message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Change(u8);

impl Change {
    pub const NONE: Change = Change(0);
    pub const SELECTION: Change = Change(1 << 0);
    pub const SEARCH: Change = Change(1 << 1);
    pub const SORT: Change = Change(1 << 2);
    pub const DATA: Change = Change(1 << 3);
    pub const EDIT: Change = Change(1 << 4);

    const NAMES: [(Change, &'static str); 5] = [
        (Change::SELECTION, "selection"),
        (Change::SEARCH, "search"),
        (Change::SORT, "sort"),
        (Change::DATA, "data"),
        (Change::EDIT, "edit"),
    ];

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Change) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Change) {
        self.0 |= other.0;
    }

    /// Insert `other` only when `changed` is true
    pub fn set(&mut self, other: Change, changed: bool) {
        if changed {
            self.insert(other);
        }
    }
}

impl std::ops::BitOr for Change {
    type Output = Change;

    fn bitor(self, rhs: Change) -> Change {
        Change(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Change {
    fn bitor_assign(&mut self, rhs: Change) {
        self.insert(rhs);
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "{}", names.join("|"))
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Change)>;

/// Registered observers in subscription order
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub fn subscribe(&mut self, callback: impl FnMut(&Change) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Call every observer with `change`; empty changes are not delivered
    pub fn notify(&mut self, change: Change) {
        if change.is_empty() {
            return;
        }
        for (_, callback) in &mut self.entries {
            callback(&change);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
