mod assignment;
mod conflicts;
mod diagnostics;
mod gaps;
mod types;
mod util;

pub use conflicts::detect_conflicts;
pub use types::{
    Conflict, ConflictKind, Diagnostics, GenerateOptions, IssueKind, RunId, SchedError, Schedule,
};

use crate::model::{Occupant, Roster, Slot};
use crate::preferences::PreferenceStore;
use rand::Rng;
use tracing::{debug, info, trace, warn};
use util::Workload;

/// Construit un planning hebdomadaire à partir d'un `PreferenceStore`.
///
/// Deux passes : placement selon les préférences (ordre d'import), puis
/// comblement des trous (employé tiré au sort → manager → non assigné).
/// Chaque `build` repart d'un état vierge.
#[derive(Debug)]
pub struct RosterBuilder<'a> {
    store: &'a PreferenceStore,
    opts: GenerateOptions,
    roster: Roster,
    workloads: Vec<Workload>,
    manager: Workload,
}

impl<'a> RosterBuilder<'a> {
    pub fn new(store: &'a PreferenceStore) -> Self {
        Self {
            store,
            opts: GenerateOptions::default(),
            roster: Roster::default(),
            workloads: vec![Workload::default(); store.len()],
            manager: Workload::default(),
        }
    }

    pub fn with_options(
        store: &'a PreferenceStore,
        opts: GenerateOptions,
    ) -> Result<Self, SchedError> {
        opts.validate()?;
        Ok(Self::from_validated(store, opts))
    }

    pub(crate) fn from_validated(store: &'a PreferenceStore, opts: GenerateOptions) -> Self {
        Self {
            opts,
            ..Self::new(store)
        }
    }

    pub fn options(&self) -> GenerateOptions {
        self.opts
    }

    pub fn build<R: Rng + ?Sized>(mut self, rng: &mut R) -> Schedule {
        let run_id = RunId::random();
        debug!(
            run_id = run_id.as_str(),
            employees = self.store.len(),
            "generating roster"
        );

        assignment::assign_preferred(&mut self);
        gaps::fill_gaps(&mut self, rng);

        let diagnostics = diagnostics::classify(&self.roster);
        for (slot, kind) in diagnostics.issues() {
            warn!(run_id = run_id.as_str(), %slot, ?kind, "slot understaffed");
        }
        info!(
            run_id = run_id.as_str(),
            manager_days = self.manager.count(),
            manager_only = diagnostics.manager_only.len(),
            unassigned = diagnostics.unassigned.len(),
            "roster generated"
        );

        Schedule {
            run_id,
            roster: self.roster,
            diagnostics,
        }
    }

    /// Place l'employé d'indice `idx` dans `slot` et consomme son jour.
    fn place(&mut self, idx: usize, slot: Slot) {
        let store = self.store;
        let name = &store.all_employees()[idx].name;
        trace!(employee = name.as_str(), %slot, "placed");
        self.roster.push(slot, Occupant::Employee(name.clone()));
        self.workloads[idx].mark(slot.day);
    }
}

/// Génère le planning avec les options par défaut.
pub fn generate<R: Rng + ?Sized>(store: &PreferenceStore, rng: &mut R) -> Schedule {
    RosterBuilder::new(store).build(rng)
}
