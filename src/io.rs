use crate::model::{Day, Occupant, Shift};
use crate::preferences::{PreferenceStore, StoreError};
use crate::scheduler::{Diagnostics, Schedule};
use anyhow::Context;
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, trace};

pub const NAME_COLUMN: &str = "Name";

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("reading preferences CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Import des préférences depuis CSV: header `Name,Monday,...,Sunday`,
/// cellules `"1:Morning,2:Evening"`.
pub fn import_preferences_csv<P: AsRef<Path>>(path: P) -> Result<PreferenceStore, ImportError> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    read_preferences(rdr)
}

/// Variante de [`import_preferences_csv`] sur un flux quelconque.
pub fn import_preferences_reader<R: Read>(reader: R) -> Result<PreferenceStore, ImportError> {
    let rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    read_preferences(rdr)
}

fn read_preferences<R: Read>(mut rdr: csv::Reader<R>) -> Result<PreferenceStore, ImportError> {
    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| ImportError::MissingColumn(name.to_string()))
    };
    let name_idx = column(NAME_COLUMN)?;
    let mut day_idx = [0usize; 7];
    for day in Day::ALL {
        day_idx[day.index()] = column(day.as_str())?;
    }

    let mut store = PreferenceStore::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(name_idx).unwrap_or("").trim();
        if name.is_empty() {
            trace!(line = ?rec.position().map(|p| p.line()), "skipping row without name");
            continue;
        }
        store.add_employee(name)?;
        for day in Day::ALL {
            let cell = rec.get(day_idx[day.index()]).unwrap_or("");
            store.set_preferences(name, day, parse_cell(cell));
        }
    }

    debug!(employees = store.len(), "preferences imported");
    Ok(store)
}

/// Découpe une cellule `rank:shift` séparée par des virgules et renvoie les
/// créneaux triés par rang croissant. Les jetons sans `:` ou au rang non
/// entier sont ignorés. Le créneau est le deuxième segment du jeton, tel
/// quel (`1:Morning:x` → `Morning`, `2: Evening` → ` Evening`, rejeté
/// ensuite par le store).
pub(crate) fn parse_cell(cell: &str) -> Vec<&str> {
    let mut ranked: Vec<(i64, &str)> = cell
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let mut parts = token.split(':');
            let rank = parts.next().unwrap_or_default();
            let Some(shift) = parts.next() else {
                trace!(token, "preference token without separator");
                return None;
            };
            match rank.trim().parse::<i64>() {
                Ok(rank) => Some((rank, shift)),
                Err(_) => {
                    trace!(token, "preference token with invalid rank");
                    None
                }
            }
        })
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, shift)| shift).collect()
}

#[derive(Debug, Serialize)]
struct SlotRecord<'a> {
    day: Day,
    shift: Shift,
    occupants: &'a [Occupant],
}

#[derive(Debug, Serialize)]
struct ScheduleRecord<'a> {
    run_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    week_start: Option<NaiveDate>,
    slots: Vec<SlotRecord<'a>>,
    diagnostics: &'a Diagnostics,
}

/// Export JSON du planning (jolie mise en forme)
pub fn schedule_to_json(
    schedule: &Schedule,
    week_start: Option<NaiveDate>,
) -> anyhow::Result<String> {
    let record = ScheduleRecord {
        run_id: schedule.run_id.as_str(),
        week_start,
        slots: schedule
            .roster
            .iter()
            .map(|(slot, occupants)| SlotRecord {
                day: slot.day,
                shift: slot.shift,
                occupants,
            })
            .collect(),
        diagnostics: &schedule.diagnostics,
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

pub fn export_schedule_json<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    week_start: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let json = schedule_to_json(schedule, week_start)?;
    write_atomic(path, json.as_bytes())
}

/// Export CSV: header `day,shift,position,occupant,kind`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    w.write_record(["day", "shift", "position", "occupant", "kind"])?;
    for (slot, occupants) in schedule.roster.iter() {
        for (pos, occupant) in occupants.iter().enumerate() {
            let pos = (pos + 1).to_string();
            w.write_record([
                slot.day.as_str(),
                slot.shift.as_str(),
                pos.as_str(),
                occupant.label(),
                occupant.kind(),
            ])?;
        }
    }
    let data = w.into_inner().context("flushing CSV buffer")?;
    write_atomic(path, &data)
}

/// Écrit le fichier de manière atomique (fichier temporaire + rename).
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_cell;

    #[test]
    fn cell_sorted_by_rank() {
        assert_eq!(
            parse_cell("3:Evening, 1:Morning ,2:Afternoon"),
            vec!["Morning", "Afternoon", "Evening"]
        );
    }

    #[test]
    fn cell_drops_malformed_tokens() {
        assert_eq!(parse_cell("Morning,x:Evening,2:Afternoon"), vec!["Afternoon"]);
        assert!(parse_cell("").is_empty());
        assert!(parse_cell("   ").is_empty());
    }

    #[test]
    fn cell_keeps_unknown_shift_names_for_the_store() {
        assert_eq!(parse_cell("1:Funday,2:Morning"), vec!["Funday", "Morning"]);
    }

    #[test]
    fn shift_is_second_segment_untrimmed() {
        assert_eq!(
            parse_cell("1:Morning:x, 2: Evening"),
            vec!["Morning", " Evening"]
        );
    }

    #[test]
    fn equal_ranks_keep_cell_order() {
        assert_eq!(parse_cell("1:Evening,1:Morning"), vec!["Evening", "Morning"]);
    }
}
