use crate::models::{CropFamily, RootDepth, RotationOption};

/// Clamp a score to the canonical 0-100 range.
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Overall benefit score for a rotation option: the arithmetic mean of the
/// five designated components. Pest management is tracked on the option but
/// deliberately excluded from the overall.
pub fn overall_benefit_score(option: &RotationOption) -> f64 {
    (option.nutrient_cycling_score
        + option.soil_health_benefit
        + option.economic_viability
        + option.climate_resilience
        + option.water_usage_score)
        / 5.0
}

/// Nutrient cycling score for following `last_crop` with `new_crop`.
/// Alternating root depth scores higher.
pub fn nutrient_cycling_score(new_crop: &str, last_crop: Option<&str>) -> f64 {
    let Some(last_crop) = last_crop else {
        return 75.0;
    };
    if RootDepth::for_crop(new_crop) != RootDepth::for_crop(last_crop) {
        85.0
    } else {
        65.0
    }
}

/// Pest management score: switching family breaks pest cycles, staying in
/// family does not. Unknown families score neutral.
pub fn pest_management_score(new_crop: &str, last_crop: Option<&str>) -> f64 {
    let Some(last_crop) = last_crop else {
        return 70.0;
    };
    match (CropFamily::for_crop(new_crop), CropFamily::for_crop(last_crop)) {
        (Some(new_family), Some(last_family)) if new_family != last_family => 85.0,
        (Some(_), Some(_)) => 50.0,
        _ => 70.0,
    }
}

/// Water usage score by root depth: shallow-rooted crops draw less.
pub fn water_usage_score(crop: &str) -> f64 {
    match RootDepth::for_crop(crop) {
        RootDepth::Deep => 70.0,
        RootDepth::Medium => 75.0,
        RootDepth::Shallow => 80.0,
    }
}
