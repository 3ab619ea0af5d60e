use serde::{Deserialize, Serialize};

/// A candidate next-step rotation recommendation produced by one of the
/// generation strategies. Component scores are 0-100; the overall benefit
/// score is the mean of the five components excluding pest management and is
/// filled in by the engine's scoring pass after all strategies have run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationOption {
    pub id: u64,
    /// Arrow-joined crop sequence, e.g. "Rice → Lentil".
    pub crop_sequence: String,
    pub description: String,
    pub soil_health_benefit: f64,
    pub climate_resilience: f64,
    pub economic_viability: f64,
    pub nutrient_cycling_score: f64,
    pub pest_management_score: f64,
    pub water_usage_score: f64,
    pub overall_benefit_score: f64,
    pub benefits: Vec<String>,
    pub considerations: Vec<String>,
    pub residue_management_recommendation: String,
    pub organic_matter_impact: String,
}

/// Component scores handed to [`RotationOption::new`], in a fixed order so
/// strategy code reads as a table.
#[derive(Debug, Clone, Copy)]
pub struct ComponentScores {
    pub nutrient_cycling: f64,
    pub soil_health: f64,
    pub economic: f64,
    pub climate: f64,
    pub water_usage: f64,
    pub pest_management: f64,
}

impl RotationOption {
    pub fn new(
        crop_sequence: impl Into<String>,
        description: impl Into<String>,
        scores: ComponentScores,
    ) -> Self {
        Self {
            id: 0,
            crop_sequence: crop_sequence.into(),
            description: description.into(),
            soil_health_benefit: scores.soil_health,
            climate_resilience: scores.climate,
            economic_viability: scores.economic,
            nutrient_cycling_score: scores.nutrient_cycling,
            pest_management_score: scores.pest_management,
            water_usage_score: scores.water_usage,
            overall_benefit_score: 0.0,
            benefits: Vec::new(),
            considerations: Vec::new(),
            residue_management_recommendation: String::new(),
            organic_matter_impact: String::new(),
        }
    }

    pub fn with_benefits(mut self, benefits: &[&str]) -> Self {
        self.benefits = benefits.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_considerations(mut self, considerations: &[&str]) -> Self {
        self.considerations = considerations.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_residue_note(mut self, note: impl Into<String>) -> Self {
        self.residue_management_recommendation = note.into();
        self
    }

    pub fn with_organic_matter_impact(mut self, impact: impl Into<String>) -> Self {
        self.organic_matter_impact = impact.into();
        self
    }
}

/// Overall pest/disease carryover pressure across the supplied history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PestRiskLevel {
    Low,
    Medium,
    High,
}

impl PestRiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PestRiskLevel::Low => "LOW",
            PestRiskLevel::Medium => "MEDIUM",
            PestRiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for PestRiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationResult {
    /// Ranked descending by overall benefit score.
    pub options: Vec<RotationOption>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
    pub has_rice_based_system: bool,
    pub pest_risk_level: PestRiskLevel,
}
