#![forbid(unsafe_code)]
//! Roulement : planning hebdomadaire d'équipe à partir de préférences classées.
//!
//! - Import CSV des préférences (`rang:créneau` par jour).
//! - Passe prioritaire dans l'ordre d'import, puis comblement aléatoire.
//! - Repli manager / non assigné, signalé dans les diagnostics.
//! - Source aléatoire injectable pour des générations reproductibles.

pub mod io;
pub mod model;
pub mod planner;
pub mod preferences;
pub mod report;
pub mod scheduler;

pub use io::ImportError;
pub use model::{Day, Employee, Occupant, Roster, Shift, Slot};
pub use planner::Planner;
pub use preferences::{PreferenceStore, StoreError};
pub use report::{week_start_for, ReportRenderer, TextReport};
pub use scheduler::{
    detect_conflicts, generate, Diagnostics, GenerateOptions, RosterBuilder, SchedError, Schedule,
};
