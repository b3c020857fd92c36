use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DAY_COUNT: usize = 7;
pub const SHIFT_COUNT: usize = 3;

/// Jour de la semaine (ordre fixe lundi → dimanche)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; DAY_COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Date de ce jour dans la semaine commençant le lundi `week_start`.
    pub fn date_in_week(self, week_start: NaiveDate) -> NaiveDate {
        week_start + Duration::days(self.index() as i64)
    }
}

impl From<Weekday> for Day {
    fn from(w: Weekday) -> Self {
        Day::ALL[w.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown day: {s}"))
    }
}

/// Créneau de la journée
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    pub const ALL: [Shift; SHIFT_COUNT] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = String;

    /// Correspondance exacte (sensible à la casse), comme dans le flux CSV.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shift::ALL
            .into_iter()
            .find(|sh| sh.as_str() == s)
            .ok_or_else(|| format!("unknown shift: {s}"))
    }
}

/// Case du planning : un créneau d'un jour donné
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub shift: Shift,
}

impl Slot {
    pub fn new(day: Day, shift: Shift) -> Self {
        Self { day, shift }
    }

    /// Les 21 cases, jour par jour puis créneau par créneau.
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Shift::ALL.into_iter().map(move |shift| Slot::new(day, shift)))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.day, self.shift)
    }
}

/// Employé et ses préférences classées (meilleure d'abord) pour chaque jour
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    preferences: [Vec<Shift>; DAY_COUNT],
}

impl Employee {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            preferences: Default::default(),
        }
    }

    pub fn preferences(&self, day: Day) -> &[Shift] {
        &self.preferences[day.index()]
    }

    pub fn set_preferences(&mut self, day: Day, ranked: Vec<Shift>) {
        self.preferences[day.index()] = ranked;
    }
}

/// Occupant d'une case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Occupant {
    Employee(String),
    /// Repli : le manager couvre la case
    Manager,
    /// Personne n'a pu être trouvé
    Unassigned,
}

impl Occupant {
    pub fn label(&self) -> &str {
        match self {
            Occupant::Employee(name) => name,
            Occupant::Manager => "Manager",
            Occupant::Unassigned => "Unassigned",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Occupant::Employee(_) => "employee",
            Occupant::Manager => "manager",
            Occupant::Unassigned => "unassigned",
        }
    }

    pub fn is_employee(&self, name: &str) -> bool {
        matches!(self, Occupant::Employee(n) if n == name)
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Planning de la semaine : occupants ordonnés par case
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    slots: [[Vec<Occupant>; SHIFT_COUNT]; DAY_COUNT],
}

impl Roster {
    pub fn occupants(&self, slot: Slot) -> &[Occupant] {
        &self.slots[slot.day.index()][slot.shift.index()]
    }

    pub fn len(&self, slot: Slot) -> usize {
        self.occupants(slot).len()
    }

    pub fn push(&mut self, slot: Slot, occupant: Occupant) {
        self.slots[slot.day.index()][slot.shift.index()].push(occupant);
    }

    pub fn contains_employee(&self, slot: Slot, name: &str) -> bool {
        self.occupants(slot).iter().any(|o| o.is_employee(name))
    }

    /// Créneau occupé par `name` ce jour-là, s'il y en a un.
    pub fn shift_of(&self, day: Day, name: &str) -> Option<Shift> {
        Shift::ALL
            .into_iter()
            .find(|&shift| self.contains_employee(Slot::new(day, shift), name))
    }

    /// Parcours jour par jour puis créneau par créneau.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &[Occupant])> + '_ {
        Slot::all().map(move |slot| (slot, self.occupants(slot)))
    }
}
