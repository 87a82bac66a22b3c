use crate::model::EntityKind;
use itertools::Itertools;
use std::fmt::Display;

/// size change of one collection between two checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionChange {
    pub kind: EntityKind,
    pub before: usize,
    pub after: usize,
}

impl CollectionChange {
    pub fn removed(&self) -> i64 {
        self.before as i64 - self.after as i64
    }
}

impl Display for CollectionChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "  - {:<14}: {} of {} => {}",
            self.kind.collection_name(),
            abbreviate(self.removed()),
            abbreviate(self.before as i64),
            abbreviate(self.after as i64)
        )
    }
}

/// shortens large counts for the change log: at least 100 million is shown in
/// millions with a `"` suffix, at least 100 thousand in thousands with a `'`
/// suffix. smaller counts are shown as is.
pub fn abbreviate(count: i64) -> String {
    if count >= 100_000_000 {
        format!("{}\"", count / 1_000_000)
    } else if count >= 100_000 {
        format!("{}'", count / 1_000)
    } else {
        count.to_string()
    }
}

/// the collections that changed since their last checkpoint, in summary order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    changes: Vec<CollectionChange>,
}

impl ChangeSummary {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn changes(&self) -> &[CollectionChange] {
        &self.changes
    }

    pub fn push(&mut self, change: CollectionChange) {
        self.changes.push(change);
    }

    pub fn extend(&mut self, other: ChangeSummary) {
        self.changes.extend(other.changes);
    }

    /// total number of entities removed from all collections.
    pub fn total_removed(&self) -> i64 {
        self.changes.iter().map(CollectionChange::removed).sum()
    }

    /// number of entities removed from collections of the given kind.
    pub fn removed(&self, kind: EntityKind) -> i64 {
        self.changes
            .iter()
            .filter(|c| c.kind == kind)
            .map(CollectionChange::removed)
            .sum()
    }
}

impl Display for ChangeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.changes.iter().join("\n"))
    }
}
