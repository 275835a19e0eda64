use std::fmt;

use crate::model::Region;

/// Achievement awarded when a playthrough is won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    /// Final score reached the chef threshold.
    Chef,
    /// Won a playthrough restricted to a specific region.
    Explorer(Region),
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::Chef => f.write_str("Chef"),
            Badge::Explorer(region) => write!(f, "Explorateur {}", region.id()),
        }
    }
}

/// Insertion-ordered set of earned badges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeSet(Vec<Badge>);

impl BadgeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `badge` unless it is already held. Returns `true` when it was new.
    pub fn insert(&mut self, badge: Badge) -> bool {
        if self.contains(badge) {
            return false;
        }
        self.0.push(badge);
        true
    }

    #[must_use]
    pub fn contains(&self, badge: Badge) -> bool {
        self.0.contains(&badge)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Badge> + '_ {
        self.0.iter().copied()
    }

    /// Badge identifiers in the order they were earned.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|badge| badge.to_string()).collect()
    }
}
