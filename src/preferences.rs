use crate::model::{Day, Employee, Shift};
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate employee name: {0}")]
    DuplicateEmployee(String),
}

/// Préférences classées de chaque employé, dans l'ordre d'ajout.
///
/// L'ordre d'ajout compte : lors de la passe prioritaire, les premiers
/// employés importés se servent en premier sur les créneaux disputés.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    employees: Vec<Employee>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un employé sans préférences. Le nom sert de clé unique.
    pub fn add_employee<N: Into<String>>(&mut self, name: N) -> Result<(), StoreError> {
        let name = name.into();
        if self.employee(&name).is_some() {
            return Err(StoreError::DuplicateEmployee(name));
        }
        self.employees.push(Employee::new(name));
        Ok(())
    }

    /// Enregistre la liste (déjà triée, meilleure d'abord) des créneaux
    /// acceptés par `employee` pour `day`.
    ///
    /// Les identifiants inconnus sont ignorés silencieusement ; un employé
    /// absent est ajouté en fin de liste. Retourne le nombre de créneaux
    /// retenus.
    pub fn set_preferences<I, S>(&mut self, employee: &str, day: Day, ranked: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let shifts: Vec<Shift> = ranked
            .into_iter()
            .filter_map(|raw| match raw.as_ref().parse::<Shift>() {
                Ok(shift) => Some(shift),
                Err(reason) => {
                    trace!(employee, %day, %reason, "dropping preference entry");
                    None
                }
            })
            .collect();
        let kept = shifts.len();

        let pos = match self.employees.iter().position(|e| e.name == employee) {
            Some(pos) => pos,
            None => {
                self.employees.push(Employee::new(employee));
                self.employees.len() - 1
            }
        };
        self.employees[pos].set_preferences(day, shifts);
        kept
    }

    pub fn all_employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
