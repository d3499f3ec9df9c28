//! # HealthDash Core Library
//!
//! Treatment adherence tracking and persistence for the HealthDash personal
//! health dashboard. All state and derived computation lives here; the CLI
//! (and any GUI) is a thin layer that reads snapshots and calls back into
//! these services.
//!
//! ## Architecture
//!
//! - **Storage**: a [`KvStore`] trait holding JSON collections under fixed,
//!   versioned keys, backed by SQLite ([`Database`]) or memory
//!   ([`MemoryStore`]). Reads never fail; they fall back to empty.
//! - **Treatments**: [`TreatmentRepository`] owns the treatment list and its
//!   per-day dose ledgers, writing through to the store on every change.
//! - **Adherence**: [`adherence`] derives a day's completion percentage.
//! - **Charts**: [`plot`] maps time-series samples to canvas geometry.
//!
//! ## Key Components
//!
//! - [`Treatment`], [`TreatmentDraft`]: the treatment model
//! - [`DateKey`]: canonical `YYYY-MM-DD` ledger index
//! - [`HealthRecords`]: shared people, cholesterol, family history
//! - [`Config`]: application configuration management

pub mod adherence;
pub mod chart;
pub mod date;
pub mod error;
pub mod records;
pub mod repository;
pub mod storage;
pub mod treatment;

pub use adherence::{adherence, adherence_history, Adherence, MAX_HISTORY_DAYS};
pub use chart::{plot, ChartFrame, Plot, PlotPoint};
pub use date::DateKey;
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use records::{CholesterolSample, HealthRecords, SharedPerson};
pub use repository::TreatmentRepository;
pub use storage::{Collection, Config, Database, KvStore, MemoryStore};
pub use treatment::{Treatment, TreatmentDraft};
