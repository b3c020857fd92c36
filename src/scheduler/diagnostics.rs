use super::Diagnostics;
use crate::model::{Occupant, Roster};

pub(super) fn classify(roster: &Roster) -> Diagnostics {
    let mut out = Diagnostics::default();

    for (slot, occupants) in roster.iter() {
        match occupants {
            [Occupant::Manager] => out.manager_only.push(slot),
            _ if occupants.contains(&Occupant::Unassigned) => out.unassigned.push(slot),
            _ => {}
        }
    }

    out
}
