//! Treatment repository: the sole owner of the treatments collection.
//!
//! Each mutation persists the updated list before it is committed in
//! memory, so a failed write leaves the repository unchanged.

use uuid::Uuid;

use crate::adherence::{adherence, Adherence};
use crate::date::DateKey;
use crate::error::Result;
use crate::storage::{get_or, put, Collection, KvStore};
use crate::treatment::{Treatment, TreatmentDraft};

pub struct TreatmentRepository<S: KvStore> {
    store: S,
    treatments: Vec<Treatment>,
}

impl<S: KvStore> TreatmentRepository<S> {
    /// Hydrate from `store`. Missing or malformed data yields an empty list.
    pub fn open(store: S) -> Self {
        let treatments: Vec<Treatment> = get_or(&store, Collection::Treatments.key(), Vec::new());
        tracing::debug!(count = treatments.len(), "loaded treatments");
        Self { store, treatments }
    }

    /// Current treatments, newest first.
    pub fn list(&self) -> &[Treatment] {
        &self.treatments
    }

    pub fn get(&self, id: &str) -> Option<&Treatment> {
        self.treatments.iter().find(|t| t.id == id)
    }

    /// Create a treatment from `draft` and prepend it.
    ///
    /// # Errors
    /// Returns an error if the updated list cannot be persisted.
    pub fn add(&mut self, draft: TreatmentDraft) -> Result<Treatment> {
        let treatment = draft.into_treatment(Uuid::new_v4().to_string());

        let mut next = Vec::with_capacity(self.treatments.len() + 1);
        next.push(treatment.clone());
        next.extend(self.treatments.iter().cloned());
        self.commit(next)?;

        tracing::info!(id = %treatment.id, name = %treatment.name, "treatment created");
        Ok(treatment)
    }

    /// Record one dose of treatment `id` on `date`, capped at its daily target.
    ///
    /// Returns `Ok(None)` for an unknown id. At the cap this is a no-op that
    /// still returns the treatment.
    ///
    /// # Errors
    /// Returns an error if the updated list cannot be persisted.
    pub fn mark_dose_taken(&mut self, id: &str, date: DateKey) -> Result<Option<Treatment>> {
        let Some(index) = self.treatments.iter().position(|t| t.id == id) else {
            tracing::debug!(id, "dose mark for unknown treatment ignored");
            return Ok(None);
        };

        let mut updated = self.treatments[index].clone();
        if updated.record_dose(date) {
            let mut next = self.treatments.clone();
            next[index] = updated.clone();
            self.commit(next)?;
            tracing::debug!(id, %date, taken = updated.taken_on(&date), "dose recorded");
        } else {
            tracing::debug!(id, %date, "daily target already reached");
        }
        Ok(Some(updated))
    }

    /// Today's adherence for treatment `id`.
    pub fn adherence_today(&self, id: &str) -> Option<Adherence> {
        self.get(id).map(|t| adherence(t, &DateKey::today()))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn commit(&mut self, next: Vec<Treatment>) -> Result<()> {
        put(&mut self.store, Collection::Treatments.key(), &next)?;
        self.treatments = next;
        Ok(())
    }
}
