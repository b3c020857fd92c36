use super::RosterBuilder;
use crate::model::{Day, Slot};
use tracing::debug;

/// Première passe : chaque jour, chaque employé (ordre d'import) prend le
/// premier créneau de sa liste qui a encore de la place. Une seule case par
/// jour et par employé.
pub(super) fn assign_preferred(builder: &mut RosterBuilder<'_>) {
    let store = builder.store;
    let staff = builder.opts.staff_per_shift;
    let cap = builder.opts.weekly_cap;
    let mut placed = 0usize;

    for day in Day::ALL {
        for (idx, employee) in store.all_employees().iter().enumerate() {
            if !builder.workloads[idx].has_capacity(cap) {
                continue;
            }

            let chosen = employee.preferences(day).iter().find_map(|&shift| {
                let slot = Slot::new(day, shift);
                let open = builder.roster.len(slot) < staff;
                let present = builder.roster.contains_employee(slot, &employee.name);
                let free = builder.workloads[idx].is_free_on(day);
                (open && !present && free).then_some(slot)
            });

            if let Some(slot) = chosen {
                builder.place(idx, slot);
                placed += 1;
            }
        }
    }

    debug!(placed, "preference pass done");
}
