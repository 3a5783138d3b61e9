//! Keyword-based category detection for free-text fields.
//!
//! A category table is an ordered list of `(category, keywords)` pairs. The
//! input is lower-cased and the first category with a keyword contained in
//! it wins, so declaration order decides ties.

use serde::Serialize;
use tracing::trace;

use crate::lexicon;

/// A coarse semantic bucket detected from free text.
pub trait Category: Copy + std::fmt::Debug + 'static {
    /// Returned when no keyword matches.
    const GENERIC: Self;

    /// Ordered keyword table; earlier entries take precedence.
    fn table() -> &'static [(Self, &'static [&'static str])];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Tech,
    Marketing,
    Design,
    Business,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Development,
    Strategy,
    Growth,
    Optimization,
    Consulting,
    Training,
    Generic,
}

static ROLE_TABLE: [(RoleCategory, &[&str]); 4] = [
    (RoleCategory::Tech, lexicon::ROLE_TECH),
    (RoleCategory::Marketing, lexicon::ROLE_MARKETING),
    (RoleCategory::Design, lexicon::ROLE_DESIGN),
    (RoleCategory::Business, lexicon::ROLE_BUSINESS),
];

static ACTIVITY_TABLE: [(ActivityCategory, &[&str]); 6] = [
    (ActivityCategory::Development, lexicon::ACTIVITY_DEVELOPMENT),
    (ActivityCategory::Strategy, lexicon::ACTIVITY_STRATEGY),
    (ActivityCategory::Growth, lexicon::ACTIVITY_GROWTH),
    (ActivityCategory::Optimization, lexicon::ACTIVITY_OPTIMIZATION),
    (ActivityCategory::Consulting, lexicon::ACTIVITY_CONSULTING),
    (ActivityCategory::Training, lexicon::ACTIVITY_TRAINING),
];

impl Category for RoleCategory {
    const GENERIC: Self = RoleCategory::Generic;

    fn table() -> &'static [(Self, &'static [&'static str])] {
        &ROLE_TABLE
    }
}

impl Category for ActivityCategory {
    const GENERIC: Self = ActivityCategory::Generic;

    fn table() -> &'static [(Self, &'static [&'static str])] {
        &ACTIVITY_TABLE
    }
}

impl ActivityCategory {
    /// Verb phrases used to open an activity that lacks its own action verb.
    pub fn verb_phrases(self) -> &'static [&'static str] {
        match self {
            Self::Development => lexicon::VERBS_DEVELOPMENT,
            Self::Strategy => lexicon::VERBS_STRATEGY,
            Self::Growth => lexicon::VERBS_GROWTH,
            Self::Optimization => lexicon::VERBS_OPTIMIZATION,
            Self::Consulting => lexicon::VERBS_CONSULTING,
            Self::Training => lexicon::VERBS_TRAINING,
            Self::Generic => lexicon::VERBS_GENERIC,
        }
    }
}

/// Classify `text` against an explicit table, falling back to `generic`.
pub fn classify_with<C: Copy>(text: &str, table: &[(C, &[&str])], generic: C) -> C {
    let lower = text.to_lowercase();
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(category, _)| *category)
        .unwrap_or(generic)
}

pub fn classify<C: Category>(text: &str) -> C {
    let category = classify_with(text, C::table(), C::GENERIC);
    trace!(?category, "classified text");
    category
}
