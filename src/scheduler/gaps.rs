use super::RosterBuilder;
use crate::model::{Occupant, Slot};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Seconde passe : complète chaque case sous l'effectif visé.
///
/// Par unité manquante : un employé libre ce jour-là et sous le plafond,
/// tiré uniformément. Sinon le manager (s'il lui reste des jours), sinon
/// `Unassigned`. Ces deux derniers replis terminent la case, même si elle
/// reste incomplète.
pub(super) fn fill_gaps<R: Rng + ?Sized>(builder: &mut RosterBuilder<'_>, rng: &mut R) {
    let staff = builder.opts.staff_per_shift;
    let cap = builder.opts.weekly_cap;
    let mut random_picks = 0usize;

    for slot in Slot::all() {
        while builder.roster.len(slot) < staff {
            let available: Vec<usize> = builder
                .workloads
                .iter()
                .enumerate()
                .filter(|(_, w)| w.is_free_on(slot.day) && w.has_capacity(cap))
                .map(|(idx, _)| idx)
                .collect();

            if let Some(&idx) = available.choose(&mut *rng) {
                builder.place(idx, slot);
                random_picks += 1;
                continue;
            }

            // le manager n'est limité que par son plafond, pas par le jour
            if builder.manager.has_capacity(cap) {
                builder.roster.push(slot, Occupant::Manager);
                builder.manager.mark(slot.day);
            } else {
                builder.roster.push(slot, Occupant::Unassigned);
            }
            break;
        }
    }

    debug!(random_picks, "gap filling done");
}
