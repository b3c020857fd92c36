use crate::model::Day;
use crate::scheduler::Schedule;
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt::Write;

/// Permet de customiser le rendu du planning (texte, mail, etc.).
pub trait ReportRenderer {
    fn render(&self, schedule: &Schedule) -> String;
}

/// Rendu texte : jour par jour, puis un résumé des erreurs s'il y en a.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport {
    /// Lundi de la semaine planifiée ; ajoute les dates aux en-têtes.
    pub week_start: Option<NaiveDate>,
}

impl TextReport {
    pub fn for_week(week_start: NaiveDate) -> Self {
        Self {
            week_start: Some(week_start),
        }
    }
}

impl ReportRenderer for TextReport {
    fn render(&self, schedule: &Schedule) -> String {
        // write! sur une String ne peut pas échouer
        let mut out = String::new();

        if let Some(start) = self.week_start {
            let _ = writeln!(out, "Week of {start}\n");
        }

        for day in Day::ALL {
            match self.week_start {
                Some(start) => {
                    let _ = writeln!(out, "{day} {}:", day.date_in_week(start));
                }
                None => {
                    let _ = writeln!(out, "{day}:");
                }
            }
            for (slot, occupants) in schedule.roster.iter().filter(|(s, _)| s.day == day) {
                let names: Vec<&str> = occupants.iter().map(|o| o.label()).collect();
                let _ = writeln!(out, "  {}: {}", slot.shift, names.join(", "));
            }
            out.push('\n');
        }

        let diag = &schedule.diagnostics;
        if !diag.is_clean() {
            out.push_str("\nERROR SUMMARY\n");
        }
        if !diag.manager_only.is_empty() {
            out.push_str("\nOnly Manager available (requires more staff):\n");
            for slot in &diag.manager_only {
                let _ = writeln!(out, "• {slot}");
            }
        }
        if !diag.unassigned.is_empty() {
            out.push_str("\nUnassigned Shifts (even Manager unavailable):\n");
            for slot in &diag.unassigned {
                let _ = writeln!(out, "• {slot}");
            }
        }

        out
    }
}

/// Lundi de la semaine contenant `date`.
pub fn week_start_for(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
