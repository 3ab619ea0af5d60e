use crate::logic::scoring::{clamp_score, round2};
use crate::models::{
    GaezBaseRecord, IrrigationType, ScoredCrop, Season, SoilHealthCard, SuitabilityClass,
};
use tracing::debug;

// Weight factors for the overall suitability calculation
const CLIMATE_WEIGHT: f64 = 0.30;
const SOIL_WEIGHT: f64 = 0.25;
const TERRAIN_WEIGHT: f64 = 0.15;
const WATER_WEIGHT: f64 = 0.20;

/// Crops scoring below this overall threshold are dropped from results.
pub const MIN_SUITABILITY_THRESHOLD: f64 = 40.0;

/// Crop suitability scoring over the GAEZ v4 framework.
///
/// Combines static per-zone base scores (climate, soil, terrain, water) with
/// irrigation-type and soil-health-card adjustments into a bounded overall
/// score, a classification tier and yield estimates.
#[derive(Debug, Default)]
pub struct GaezSuitabilityService;

impl GaezSuitabilityService {
    pub fn new() -> Self {
        Self
    }

    /// Score candidate crops for a location. Results are filtered to the
    /// minimum suitability threshold and sorted descending by overall
    /// score. An empty candidate list yields an empty result.
    pub fn score_crops(
        &self,
        crops: &[GaezBaseRecord],
        season: Option<Season>,
        irrigation: Option<IrrigationType>,
        soil_health_card: Option<&SoilHealthCard>,
    ) -> Vec<ScoredCrop> {
        let mut scored: Vec<ScoredCrop> = crops
            .iter()
            .filter(|record| season_matches(record, season))
            .map(|record| score_crop(record, irrigation, soil_health_card))
            .filter(|s| s.overall_suitability_score >= MIN_SUITABILITY_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.overall_suitability_score
                .total_cmp(&a.overall_suitability_score)
        });

        debug!(
            candidates = crops.len(),
            suitable = scored.len(),
            "scored crop suitability"
        );
        scored
    }
}

fn season_matches(record: &GaezBaseRecord, season: Option<Season>) -> bool {
    match season {
        None | Some(Season::All) => true,
        Some(Season::Kharif) => record.kharif_suitable,
        Some(Season::Rabi) => record.rabi_suitable,
        Some(Season::Zaid) => record.zaid_suitable,
    }
}

fn score_crop(
    record: &GaezBaseRecord,
    irrigation: Option<IrrigationType>,
    soil_health_card: Option<&SoilHealthCard>,
) -> ScoredCrop {
    let climate_score = record.climate_suitability_score;
    let mut soil_score = record.soil_suitability_score;
    let terrain_score = record.terrain_suitability_score;
    let water_score = adjust_for_irrigation(record.water_suitability_score, irrigation);

    let mut recommendations: Vec<String> = Vec::new();
    let mut soil_health_adjustment = 0.0;
    if let Some(card) = soil_health_card {
        soil_health_adjustment = soil_health_adjustment_for(card, &mut recommendations);
        soil_score += soil_health_adjustment;
    }

    // The adjustment is already folded into the soil component above and is
    // added again here as a flat addend. Observed behavior of the reference
    // scoring; kept until product owners decide otherwise.
    let weighted = climate_score * CLIMATE_WEIGHT
        + soil_score * SOIL_WEIGHT
        + terrain_score * TERRAIN_WEIGHT
        + water_score * WATER_WEIGHT;
    let overall = clamp_score(round2(weighted + soil_health_adjustment));

    ScoredCrop {
        crop_code: record.crop_code.clone(),
        crop_name: record.crop_name.clone(),
        crop_name_local: record.crop_name_local.clone(),
        overall_suitability_score: overall,
        suitability_classification: classify(overall),
        climate_suitability_score: climate_score,
        soil_suitability_score: soil_score,
        terrain_suitability_score: terrain_score,
        water_suitability_score: water_score,
        rainfed_potential_yield: record.rainfed_potential_yield,
        irrigated_potential_yield: record.irrigated_potential_yield,
        expected_yield_min: expected_yield(record, overall, 0.70),
        expected_yield_expected: expected_yield(record, overall, 0.85),
        // Same factor as the expected estimate; no distinct max case exists
        // in the reference data.
        expected_yield_max: expected_yield(record, overall, 0.85),
        water_requirements_mm: record.water_requirements_mm,
        growing_season_days: record.growing_season_days,
        kharif_suitable: record.kharif_suitable,
        rabi_suitable: record.rabi_suitable,
        zaid_suitable: record.zaid_suitable,
        climate_risk_level: record.climate_risk_level,
        soil_health_recommendations: recommendations,
        data_version: record.data_version.clone(),
        data_resolution: record.data_resolution.clone(),
    }
}

/// Water score adjustment by irrigation type, clamped to [0, 100].
fn adjust_for_irrigation(base_score: f64, irrigation: Option<IrrigationType>) -> f64 {
    let Some(irrigation) = irrigation else {
        return base_score;
    };

    let adjustment = match irrigation {
        // Rain-fed only farms carry more water risk
        IrrigationType::Rainfed => -10.0,
        // Efficient irrigation
        IrrigationType::Drip | IrrigationType::Sprinkler => 5.0,
        // Reliable but less efficient
        IrrigationType::Canal | IrrigationType::Borewell => 2.0,
        IrrigationType::Mixed => 0.0,
    };

    clamp_score(base_score + adjustment)
}

/// Sum of independent per-nutrient deltas, clamped to [-15, +10]. Each
/// deficiency appends a matching recommendation.
fn soil_health_adjustment_for(card: &SoilHealthCard, recommendations: &mut Vec<String>) -> f64 {
    let mut adjustment = 0.0;

    if let Some(nitrogen) = card.nitrogen_kg_ha {
        let delta = band(nitrogen, 560.0, 280.0);
        adjustment += delta;
        if delta < 0.0 {
            recommendations.push("Low nitrogen: Consider nitrogen application".to_string());
        }
    }

    if let Some(phosphorus) = card.phosphorus_kg_ha {
        let delta = band(phosphorus, 25.0, 10.0);
        adjustment += delta;
        if delta < 0.0 {
            recommendations.push("Low phosphorus: Consider phosphorus application".to_string());
        }
    }

    if let Some(potassium) = card.potassium_kg_ha {
        let delta = band(potassium, 280.0, 108.0);
        adjustment += delta;
        if delta < 0.0 {
            recommendations.push("Low potassium: Consider potassium application".to_string());
        }
    }

    if card.sulfur_ppm.is_some_and(|s| s < 10.0) {
        adjustment -= 2.0;
        recommendations.push("Sulfur deficiency: Apply sulfur fertilizer".to_string());
    }

    if card.zinc_ppm.is_some_and(|z| z < 0.6) {
        adjustment -= 3.0;
        recommendations.push("Zinc deficiency: Apply zinc sulfate".to_string());
    }

    if card.iron_ppm.is_some_and(|fe| fe < 4.5) {
        adjustment -= 2.0;
        recommendations.push("Iron deficiency: Consider iron application".to_string());
    }

    if let Some(ph) = card.ph {
        // Optimal pH range is 6.0-7.5 for most crops
        adjustment += if (6.0..=7.5).contains(&ph) {
            5.0
        } else if (5.5..=8.0).contains(&ph) {
            0.0
        } else {
            -5.0
        };
    }

    adjustment.clamp(-15.0, 10.0)
}

/// High / adequate / deficient banding shared by the N, P and K checks.
fn band(value: f64, high: f64, adequate: f64) -> f64 {
    if value >= high {
        5.0
    } else if value >= adequate {
        0.0
    } else {
        -5.0
    }
}

fn classify(score: f64) -> SuitabilityClass {
    if score >= 80.0 {
        SuitabilityClass::HighlySuitable
    } else if score >= 60.0 {
        SuitabilityClass::Suitable
    } else if score >= MIN_SUITABILITY_THRESHOLD {
        SuitabilityClass::MarginallySuitable
    } else {
        SuitabilityClass::NotSuitable
    }
}

/// Expected yield: potential yield (irrigated preferred, rain-fed fallback)
/// scaled by the suitability score and the estimate factor.
fn expected_yield(record: &GaezBaseRecord, overall_score: f64, factor: f64) -> Option<f64> {
    let potential = record
        .irrigated_potential_yield
        .or(record.rainfed_potential_yield)?;
    Some(potential * (overall_score / 100.0) * factor)
}
