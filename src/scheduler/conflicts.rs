use super::{Conflict, ConflictKind, GenerateOptions};
use crate::model::{Day, Occupant, Roster, Slot};
use std::collections::{BTreeMap, BTreeSet};

/// Vérifie a posteriori les contraintes d'un planning.
///
/// Un planning issu de `RosterBuilder` n'en produit aucun.
pub fn detect_conflicts(roster: &Roster, opts: GenerateOptions) -> Vec<Conflict> {
    let mut out = Vec::new();
    let mut days_by_name: BTreeMap<&str, Vec<(Day, Slot)>> = BTreeMap::new();
    let mut manager_days = BTreeSet::new();

    for (slot, occupants) in roster.iter() {
        if occupants.len() > opts.staff_per_shift {
            out.push(Conflict {
                who: None,
                slot: Some(slot),
                kind: ConflictKind::Overfilled,
            });
        }

        let mut seen = BTreeSet::new();
        for occupant in occupants {
            match occupant {
                Occupant::Employee(name) => {
                    if !seen.insert(name.as_str()) {
                        out.push(Conflict {
                            who: Some(name.clone()),
                            slot: Some(slot),
                            kind: ConflictKind::DuplicateInSlot,
                        });
                        continue;
                    }
                    days_by_name
                        .entry(name.as_str())
                        .or_default()
                        .push((slot.day, slot));
                }
                Occupant::Manager => {
                    manager_days.insert(slot.day);
                }
                Occupant::Unassigned => {}
            }
        }
    }

    for (name, entries) in &days_by_name {
        let mut days = BTreeSet::new();
        for (day, slot) in entries {
            if !days.insert(*day) {
                out.push(Conflict {
                    who: Some((*name).to_string()),
                    slot: Some(*slot),
                    kind: ConflictKind::DoubleBooked,
                });
            }
        }
        if days.len() > opts.weekly_cap {
            out.push(Conflict {
                who: Some((*name).to_string()),
                slot: None,
                kind: ConflictKind::OverCap,
            });
        }
    }

    if manager_days.len() > opts.weekly_cap {
        out.push(Conflict {
            who: Some("Manager".to_string()),
            slot: None,
            kind: ConflictKind::OverCap,
        });
    }

    out
}
