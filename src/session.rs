//! In-memory wizard state for the two flows.
//!
//! A session owns the form being filled in, the current step and the last
//! results. Results are always replaced wholesale, never patched in place.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bio_analyzer::{analyze_bio_with, ScoreWeights};
use crate::generator::generate_bio_with;
use crate::model::{BioAnalysisReport, BioInput, GeneratedBio, Goal, StartupAnalysisReport, StartupInput};
use crate::startup_analyzer::analyze_startup;

/// Partial update of a [`BioInput`]; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BioInputPatch {
    pub role: Option<String>,
    pub target: Option<String>,
    pub activity: Option<String>,
    pub goal: Option<Goal>,
}

/// Partial update of a [`StartupInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartupInputPatch {
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub target_market: Option<String>,
    pub competition: Option<String>,
    pub business_model: Option<String>,
}

fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BioSession {
    pub form: BioInput,
    pub current_step: usize,
    pub generated: Option<GeneratedBio>,
    pub analysis: Option<BioAnalysisReport>,
    pub score_enabled: bool,
    #[serde(skip)]
    weights: ScoreWeights,
}

impl BioSession {
    pub fn new(weights: ScoreWeights) -> Self {
        Self {
            weights,
            ..Default::default()
        }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    pub fn update_form(&mut self, patch: BioInputPatch) {
        apply(&mut self.form.role, patch.role);
        apply(&mut self.form.target, patch.target);
        apply(&mut self.form.activity, patch.activity);
        apply(&mut self.form.goal, patch.goal);
    }

    pub fn set_step(&mut self, step: usize) {
        self.current_step = step;
    }

    /// Generate a fresh bio from the form and analyze it.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &GeneratedBio {
        let bio = generate_bio_with(&self.form, rng);
        self.analysis = Some(analyze_bio_with(
            &bio,
            &self.form,
            self.score_enabled,
            &self.weights,
        ));
        debug!(step = self.current_step, "bio session generated");
        self.generated.insert(bio)
    }

    /// Flip scoring and, when a bio exists, replace its report.
    pub fn toggle_score(&mut self) {
        self.score_enabled = !self.score_enabled;
        if let Some(bio) = &self.generated {
            self.analysis = Some(analyze_bio_with(
                bio,
                &self.form,
                self.score_enabled,
                &self.weights,
            ));
        }
    }

    /// Back to the initial state; the weighting is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.weights);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupSession {
    pub form: StartupInput,
    pub current_step: usize,
    pub analysis: Option<StartupAnalysisReport>,
    pub score_enabled: bool,
}

impl StartupSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_form(&mut self, patch: StartupInputPatch) {
        apply(&mut self.form.problem, patch.problem);
        apply(&mut self.form.solution, patch.solution);
        apply(&mut self.form.target_market, patch.target_market);
        apply(&mut self.form.competition, patch.competition);
        apply(&mut self.form.business_model, patch.business_model);
    }

    pub fn set_step(&mut self, step: usize) {
        self.current_step = step;
    }

    pub fn analyze(&mut self) -> &StartupAnalysisReport {
        let report = analyze_startup(&self.form, self.score_enabled);
        self.analysis.insert(report)
    }

    pub fn toggle_score(&mut self) {
        self.score_enabled = !self.score_enabled;
        if self.analysis.is_some() {
            self.analyze();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
