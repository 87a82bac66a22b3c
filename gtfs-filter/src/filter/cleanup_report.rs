use super::ChangeSummary;
use crate::model::EntityKind;

/// outcome of running the cleanup to its fixed point: one change summary per
/// pass, the last of which is always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub passes: Vec<ChangeSummary>,
}

impl CleanupReport {
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// passes which removed at least one entity.
    pub fn removal_passes(&self) -> usize {
        self.passes.iter().filter(|p| p.has_changes()).count()
    }

    pub fn total_removed(&self) -> i64 {
        self.passes.iter().map(ChangeSummary::total_removed).sum()
    }

    pub fn removed(&self, kind: EntityKind) -> i64 {
        self.passes.iter().map(|p| p.removed(kind)).sum()
    }
}
