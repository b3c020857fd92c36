use crate::io::{self, ImportError};
use crate::preferences::PreferenceStore;
use crate::scheduler::{GenerateOptions, RosterBuilder, SchedError, Schedule};
use rand::Rng;
use std::path::Path;
use tracing::info;

/// Point d'entrée : importer des préférences, puis générer le planning.
///
/// Un import raté laisse les préférences courantes intactes.
#[derive(Debug, Default)]
pub struct Planner {
    store: PreferenceStore,
    opts: GenerateOptions,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: GenerateOptions) -> Result<Self, SchedError> {
        opts.validate()?;
        Ok(Self {
            store: PreferenceStore::new(),
            opts,
        })
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn options(&self) -> GenerateOptions {
        self.opts
    }

    /// Remplace les préférences par celles du CSV ; retourne le nombre
    /// d'employés importés.
    pub fn import_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, ImportError> {
        let path = path.as_ref();
        let store = io::import_preferences_csv(path)?;
        info!(path = %path.display(), employees = store.len(), "preferences replaced");
        Ok(self.replace(store))
    }

    pub fn import_reader<R: std::io::Read>(&mut self, reader: R) -> Result<usize, ImportError> {
        let store = io::import_preferences_reader(reader)?;
        info!(source = "reader", employees = store.len(), "preferences replaced");
        Ok(self.replace(store))
    }

    fn replace(&mut self, store: PreferenceStore) -> usize {
        self.store = store;
        self.store.len()
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Schedule {
        RosterBuilder::from_validated(&self.store, self.opts).build(rng)
    }
}
