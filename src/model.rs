//! Inputs and reports exchanged with the presentation layer.
//!
//! JSON field names are camelCase (`whoYouAre`, `hasCta`, `overallScore`) and
//! optional scores are omitted entirely when scoring is disabled.

use std::fmt;

use serde::{Deserialize, Serialize};


// ---------------------------------------------------------------------------
// Bio
// ---------------------------------------------------------------------------

/// What the bio should achieve. Drives the call to action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    /// No goal chosen yet; produces an empty call to action.
    #[default]
    Unset,
    Lavoro,
    Clienti,
    Networking,
    /// Any unrecognised value; produces the generic fallback call to action.
    Other(String),
}

impl Goal {
    pub fn as_str(&self) -> &str {
        match self {
            Goal::Unset => "",
            Goal::Lavoro => "lavoro",
            Goal::Clienti => "clienti",
            Goal::Networking => "networking",
            Goal::Other(s) => s,
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" => Goal::Unset,
            "lavoro" => Goal::Lavoro,
            "clienti" => Goal::Clienti,
            "networking" => Goal::Networking,
            _ => Goal::Other(value),
        }
    }
}

impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        Goal::from(value.to_string())
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.as_str().to_string()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BioInput {
    pub role: String,
    pub target: String,
    pub activity: String,
    pub goal: Goal,
}

impl BioInput {
    pub fn new(
        role: impl Into<String>,
        target: impl Into<String>,
        activity: impl Into<String>,
        goal: impl Into<Goal>,
    ) -> Self {
        Self {
            role: role.into(),
            target: target.into(),
            activity: activity.into(),
            goal: goal.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratedBio {
    pub who_you_are: String,
    pub value_proposition: String,
    pub call_to_action: String,
}

impl GeneratedBio {
    pub fn sections(&self) -> [&str; 3] {
        [
            &self.who_you_are,
            &self.value_proposition,
            &self.call_to_action,
        ]
    }

    /// Non-empty sections joined by a single space.
    pub fn full_text(&self) -> String {
        self.sections()
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Who-you-are and value proposition only; the call to action is canned.
    pub fn body_text(&self) -> String {
        format!("{} {}", self.who_you_are, self.value_proposition)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BioAnalysisReport {
    pub clarity: bool,
    pub has_target: bool,
    pub has_cta: bool,
    pub adequate_length: bool,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
}

impl BioAnalysisReport {
    pub fn band(&self) -> Option<ScoreBand> {
        self.score.map(ScoreBand::from_score)
    }
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartupInput {
    pub problem: String,
    pub solution: String,
    pub target_market: String,
    pub competition: String,
    pub business_model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemAnalysis {
    pub clarity: i32,
    pub urgency: i32,
    pub size: i32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionAnalysis {
    pub feasibility: i32,
    pub differentiation: i32,
    pub scalability: i32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub size: i32,
    pub accessibility: i32,
    pub growth: i32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionAnalysis {
    pub awareness: i32,
    pub differentiation: i32,
    pub competitive_advantage: i32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessModelAnalysis {
    pub clarity: i32,
    pub sustainability: i32,
    pub scalability: i32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Italian tag shown in front of the message.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::High => "RISCHIO ALTO",
            Severity::Medium => "RISCHIO MEDIO",
            Severity::Low => "RISCHIO",
        }
    }
}

/// A startup risk finding with a typed severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    pub severity: Severity,
    pub message: String,
}

impl Risk {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.tag(), self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupAnalysisReport {
    pub has_clear_problem: bool,
    pub has_viable_solution: bool,
    pub has_defined_target: bool,
    pub has_competition_analysis: bool,
    pub has_business_model: bool,

    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub improvements: Vec<String>,
    pub risks: Vec<Risk>,

    pub problem_analysis: ProblemAnalysis,
    pub solution_analysis: SolutionAnalysis,
    pub market_analysis: MarketAnalysis,
    pub competition_analysis: CompetitionAnalysis,
    pub business_model_analysis: BusinessModelAnalysis,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<i32>,
}

impl StartupAnalysisReport {
    pub fn high_risk_count(&self) -> usize {
        self.risks
            .iter()
            .filter(|r| r.severity == Severity::High)
            .count()
    }

    pub fn band(&self) -> Option<ScoreBand> {
        self.overall_score.map(ScoreBand::from_score)
    }
}

// ---------------------------------------------------------------------------
// Score bands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Eccellente,
    Buono,
    DaMigliorare,
}

impl ScoreBand {
    pub fn from_score(score: i32) -> Self {
        if score >= 70 {
            ScoreBand::Eccellente
        } else if score >= 50 {
            ScoreBand::Buono
        } else {
            ScoreBand::DaMigliorare
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Eccellente => "Eccellente",
            ScoreBand::Buono => "Buono",
            ScoreBand::DaMigliorare => "Da migliorare",
        }
    }
}
