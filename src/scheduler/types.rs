use crate::model::{Day, Occupant, Roster, Slot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;
use uuid::Uuid;

/// Options de génération
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Effectif visé par case
    pub staff_per_shift: usize,
    /// Nombre maximal de jours travaillés dans la semaine
    pub weekly_cap: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            staff_per_shift: 2,
            weekly_cap: 5,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), SchedError> {
        if self.staff_per_shift == 0 {
            return Err(SchedError::InvalidOptions("staff_per_shift must be > 0"));
        }
        if self.weekly_cap > Day::ALL.len() {
            return Err(SchedError::InvalidOptions("weekly_cap cannot exceed 7 days"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    Overfilled,      // plus d'occupants que l'effectif visé
    DuplicateInSlot, // même employé deux fois dans une case
    DoubleBooked,    // deux créneaux le même jour
    OverCap,         // plafond hebdomadaire dépassé
}

#[derive(Debug, Clone)]
pub struct Conflict {
    /// Nom de l'employé, ou "Manager"
    pub who: Option<String>,
    pub slot: Option<Slot>,
    pub kind: ConflictKind,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid options: {0}")]
    InvalidOptions(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    ManagerOnly,
    Unassigned,
}

/// Cases à problème, dans l'ordre jour puis créneau
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub manager_only: Vec<Slot>,
    pub unassigned: Vec<Slot>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.manager_only.is_empty() && self.unassigned.is_empty()
    }

    pub fn len(&self) -> usize {
        self.manager_only.len() + self.unassigned.len()
    }

    pub fn issues(&self) -> impl Iterator<Item = (Slot, IssueKind)> + '_ {
        self.manager_only
            .iter()
            .map(|s| (*s, IssueKind::ManagerOnly))
            .chain(self.unassigned.iter().map(|s| (*s, IssueKind::Unassigned)))
    }
}

/// Identifiant d'une exécution de génération
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Résultat figé d'une génération
#[derive(Debug, Clone)]
pub struct Schedule {
    pub run_id: RunId,
    pub roster: Roster,
    pub diagnostics: Diagnostics,
}

impl Schedule {
    /// Jours où `name` apparaît dans le planning.
    pub fn days_worked(&self, name: &str) -> usize {
        self.count_days(|o| o.is_employee(name))
    }

    pub fn manager_days(&self) -> usize {
        self.count_days(|o| *o == Occupant::Manager)
    }

    fn count_days<F: Fn(&Occupant) -> bool>(&self, pred: F) -> usize {
        self.roster
            .iter()
            .filter(|(_, occupants)| occupants.iter().any(&pred))
            .map(|(slot, _)| slot.day)
            .collect::<BTreeSet<_>>()
            .len()
    }
}
