use super::crop_family::{CropFamily, RootDepth};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single past planting as supplied by the caller. No ordering is assumed;
/// the analyzer sorts internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropHistoryEntry {
    pub crop_name: String,
    pub sowing_date: Option<NaiveDate>,
}

impl CropHistoryEntry {
    pub fn new(crop_name: impl Into<String>, sowing_date: NaiveDate) -> Self {
        Self {
            crop_name: crop_name.into(),
            sowing_date: Some(sowing_date),
        }
    }
}

/// A history entry after enrichment: classified, depth-tagged and ordered.
/// `season_order` is 1-based with 1 = most recent planting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedEntry {
    pub crop_name: String,
    pub sowing_date: NaiveDate,
    pub crop_family: Option<CropFamily>,
    pub root_depth: RootDepth,
    pub season_order: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Nutrient depletion risk for one crop family, either from a consecutive
/// same-family run or from overall frequency across the analyzed window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientDepletionRisk {
    pub crop_family: CropFamily,
    pub crop_family_name: String,
    pub risk_level: RiskLevel,
    pub risk_description: String,
    pub affected_nutrients: String,
    pub consecutive_seasons: usize,
    pub affected_crops: Vec<String>,
    pub recommendation: String,
    /// 0-100, higher means more urgent.
    pub severity_score: f64,
}

/// Qualitative rollup of the analyzed history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub dominant_crop_family: Option<String>,
    pub consecutive_monoculture_count: usize,
    pub rotation_pattern: String,
    pub nutrient_balance_assessment: String,
    pub pest_disease_risk_level: String,
    pub has_good_rotation: bool,
    pub has_nutrient_depletion_risk: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryAnalysis {
    pub has_sufficient_history: bool,
    pub seasons_analyzed: usize,
    pub crop_history: Vec<EnrichedEntry>,
    pub nutrient_depletion_risks: Vec<NutrientDepletionRisk>,
    pub summary: AnalysisSummary,
    pub recommendations: Vec<String>,
}
