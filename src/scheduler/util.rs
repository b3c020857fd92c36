use crate::model::Day;
use std::collections::BTreeSet;

/// Jours déjà travaillés par une personne pendant la génération en cours.
#[derive(Debug, Clone, Default)]
pub(super) struct Workload {
    days: BTreeSet<Day>,
}

impl Workload {
    pub(super) fn has_capacity(&self, cap: usize) -> bool {
        self.days.len() < cap
    }

    pub(super) fn is_free_on(&self, day: Day) -> bool {
        !self.days.contains(&day)
    }

    pub(super) fn mark(&mut self, day: Day) {
        self.days.insert(day);
    }

    pub(super) fn count(&self) -> usize {
        self.days.len()
    }
}
