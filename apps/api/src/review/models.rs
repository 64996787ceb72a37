//! Typed schemas for the per-mode model output.
//!
//! The upstream model promises JSON but never guarantees it. Each mode has an
//! explicit schema here; parse or validation failure is reported back to the
//! caller with the original completion text attached.

use serde::{Deserialize, Serialize};

/// Review mode selecting the prompt template and output schema.
/// Unrecognized input falls back to `Analyze` — the documented default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Analyze,
    Roast,
    Builder,
}

impl Mode {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "roast" => Mode::Roast,
            "builder" => Mode::Builder,
            _ => Mode::Analyze,
        }
    }
}

/// Recruiter-mode output: ATS score plus concrete gaps and fixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ats_score: u8,
    pub missing_skills: Vec<String>,
    pub summary: String,
    pub improvement_tips: Vec<String>,
}

impl AnalysisReport {
    /// Value-range check the types cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.ats_score > 100 {
            return Err(format!(
                "ats_score {} is outside the 0-100 range",
                self.ats_score
            ));
        }
        Ok(())
    }
}

/// Roast-mode output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoastReport {
    pub roast_title: String,
    pub burns: Vec<String>,
    pub overall_verdict: String,
}

/// Builder-mode output: a full structured résumé.
/// All five top-level sections must be present; sub-fields the model cannot
/// source from the résumé are optional and default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderResume {
    pub personal_info: PersonalInfo,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// What a review produces: a typed report, or an error object the caller can
/// inspect. Serialized untagged so clients see the report fields directly.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReviewOutcome {
    Analysis(AnalysisReport),
    Roast(RoastReport),
    Builder(BuilderResume),
    Error(ReviewError),
}

impl ReviewOutcome {
    /// Post-parse validation. Typed deserialization already enforces shape;
    /// this catches value-range violations the types cannot express.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            ReviewOutcome::Analysis(report) => report.validate(),
            _ => Ok(()),
        }
    }
}

/// Data-level error payload returned with HTTP 200.
#[derive(Debug, Serialize)]
pub struct ReviewError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ReviewError {
    /// The completion text failed typed parsing or validation.
    /// Keeps the original model output, unmodified, for diagnosis.
    pub fn malformed(raw_output: &str) -> Self {
        Self {
            error: "AI response was not valid JSON".to_string(),
            raw_output: Some(raw_output.to_string()),
            details: None,
        }
    }

    /// The completion call itself failed (network, auth, rate limit).
    pub fn unavailable(details: impl std::fmt::Display) -> Self {
        Self {
            error: "AI Service unavailable".to_string(),
            raw_output: None,
            details: Some(details.to_string()),
        }
    }
}
