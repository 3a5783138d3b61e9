//! Rule-based writing coach for Italian LinkedIn bios and startup pitches.
//!
//! Two pipelines share the same shape (classify, generate or score, report):
//!
//! - **Bio**: [`generate_bio`] assembles three sections from a role, a
//!   target, an activity and a goal; [`analyze_bio`] checks them against a
//!   fixed rubric and optionally scores them 0-100.
//! - **Startup**: [`analyze_startup`] reviews five free-text fields and
//!   returns per-dimension metrics, strengths, weaknesses and typed risks.
//!
//! Field validators ([`validate_role`] and friends) give live feedback on a
//! single input. Nothing here does I/O or keeps state between calls; the
//! only hidden input is the RNG used to pick templates, which every
//! `*_with` entry point takes explicitly.

pub mod bio_analyzer;
pub mod classifier;
pub mod config;
pub mod error;
pub mod generator;
pub mod lexicon;
pub mod model;
pub mod session;
pub mod startup_analyzer;
pub mod templates;
pub mod validation;

pub use bio_analyzer::{analyze_bio, analyze_bio_with, ScoreWeights};
pub use classifier::{classify, ActivityCategory, Category, RoleCategory};
pub use config::{Config, ConfigLoader};
pub use error::{PitchError, Result};
pub use generator::{generate_bio, generate_bio_with};
pub use model::{
    BioAnalysisReport, BioInput, BusinessModelAnalysis, CompetitionAnalysis, GeneratedBio, Goal,
    MarketAnalysis, ProblemAnalysis, Risk, ScoreBand, Severity, SolutionAnalysis,
    StartupAnalysisReport, StartupInput,
};
pub use session::{BioInputPatch, BioSession, StartupInputPatch, StartupSession};
pub use startup_analyzer::analyze_startup;
pub use validation::{
    validate_activity, validate_role, validate_startup_field, validate_target, StartupField,
    ValidationResult,
};
