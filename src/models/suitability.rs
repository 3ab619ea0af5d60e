use serde::{Deserialize, Serialize};

/// India's cropping seasons. `All` disables season filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
    All,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
            Season::All => "All",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kharif" => Some(Season::Kharif),
            "rabi" => Some(Season::Rabi),
            "zaid" | "zayad" => Some(Season::Zaid),
            "all" => Some(Season::All),
            _ => None,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrrigationType {
    Rainfed,
    Drip,
    Sprinkler,
    Canal,
    Borewell,
    Mixed,
}

impl IrrigationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationType::Rainfed => "Rainfed",
            IrrigationType::Drip => "Drip",
            IrrigationType::Sprinkler => "Sprinkler",
            IrrigationType::Canal => "Canal",
            IrrigationType::Borewell => "Borewell",
            IrrigationType::Mixed => "Mixed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rainfed" | "rain-fed" => Some(IrrigationType::Rainfed),
            "drip" => Some(IrrigationType::Drip),
            "sprinkler" => Some(IrrigationType::Sprinkler),
            "canal" => Some(IrrigationType::Canal),
            "borewell" => Some(IrrigationType::Borewell),
            "mixed" => Some(IrrigationType::Mixed),
            _ => None,
        }
    }
}

impl std::fmt::Display for IrrigationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClimateRiskLevel {
    Low,
    Medium,
    High,
}

/// One row of the static GAEZ reference dataset for a (zone, crop) pair.
/// Component scores are 0-100; yields are t/ha. Owned by the external
/// dataset, read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaezBaseRecord {
    pub crop_code: String,
    pub crop_name: String,
    #[serde(default)]
    pub crop_name_local: Option<String>,
    pub climate_suitability_score: f64,
    pub soil_suitability_score: f64,
    pub terrain_suitability_score: f64,
    pub water_suitability_score: f64,
    #[serde(default)]
    pub rainfed_potential_yield: Option<f64>,
    #[serde(default)]
    pub irrigated_potential_yield: Option<f64>,
    #[serde(default)]
    pub water_requirements_mm: Option<f64>,
    #[serde(default)]
    pub growing_season_days: Option<u32>,
    #[serde(default)]
    pub kharif_suitable: bool,
    #[serde(default)]
    pub rabi_suitable: bool,
    #[serde(default)]
    pub zaid_suitable: bool,
    #[serde(default)]
    pub climate_risk_level: Option<ClimateRiskLevel>,
    #[serde(default)]
    pub data_version: Option<String>,
    #[serde(default)]
    pub data_resolution: Option<String>,
}

/// Parsed nutrient values from a government soil health card. All fields are
/// optional; missing values simply contribute no adjustment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoilHealthCard {
    pub nitrogen_kg_ha: Option<f64>,
    pub phosphorus_kg_ha: Option<f64>,
    pub potassium_kg_ha: Option<f64>,
    pub sulfur_ppm: Option<f64>,
    pub zinc_ppm: Option<f64>,
    pub iron_ppm: Option<f64>,
    pub ph: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuitabilityClass {
    HighlySuitable,
    Suitable,
    MarginallySuitable,
    NotSuitable,
}

impl SuitabilityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuitabilityClass::HighlySuitable => "Highly Suitable",
            SuitabilityClass::Suitable => "Suitable",
            SuitabilityClass::MarginallySuitable => "Marginally Suitable",
            SuitabilityClass::NotSuitable => "Not Suitable",
        }
    }
}

impl std::fmt::Display for SuitabilityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A crop scored for the requesting farm: adjusted component scores, overall
/// score, classification tier and yield estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCrop {
    pub crop_code: String,
    pub crop_name: String,
    pub crop_name_local: Option<String>,
    pub overall_suitability_score: f64,
    pub suitability_classification: SuitabilityClass,
    pub climate_suitability_score: f64,
    pub soil_suitability_score: f64,
    pub terrain_suitability_score: f64,
    pub water_suitability_score: f64,
    pub rainfed_potential_yield: Option<f64>,
    pub irrigated_potential_yield: Option<f64>,
    pub expected_yield_min: Option<f64>,
    pub expected_yield_expected: Option<f64>,
    pub expected_yield_max: Option<f64>,
    pub water_requirements_mm: Option<f64>,
    pub growing_season_days: Option<u32>,
    pub kharif_suitable: bool,
    pub rabi_suitable: bool,
    pub zaid_suitable: bool,
    pub climate_risk_level: Option<ClimateRiskLevel>,
    pub soil_health_recommendations: Vec<String>,
    pub data_version: Option<String>,
    pub data_resolution: Option<String>,
}
