use super::{
    intercropping::IntercroppingStrategy, legume_integration::LegumeIntegrationStrategy,
    nutrient_cycling::NutrientCyclingStrategy, rice_diversification::RiceDiversificationStrategy,
    tables, RotationContext, RotationStrategy,
};
use crate::logic::scoring::overall_benefit_score;
use crate::models::{
    CropFamily, CropHistoryEntry, PestRiskLevel, RotationOption, RotationResult, Season,
};
use tracing::debug;

/// Rotation recommendation engine.
///
/// Runs every generation strategy over the supplied history, scores and
/// ranks the combined candidates, and assesses pest/disease carryover risk
/// between crop cycles.
pub struct RotationEngine {
    strategies: Vec<Box<dyn RotationStrategy>>,
}

impl RotationEngine {
    pub fn new() -> Self {
        let strategies: Vec<Box<dyn RotationStrategy>> = vec![
            Box::new(NutrientCyclingStrategy),
            Box::new(LegumeIntegrationStrategy),
            Box::new(RiceDiversificationStrategy),
            Box::new(IntercroppingStrategy),
        ];

        Self { strategies }
    }

    pub fn list_strategies(&self) -> Vec<(&'static str, &'static str)> {
        self.strategies.iter().map(|s| (s.id(), s.name())).collect()
    }

    /// Generate ranked rotation options for the given history and target
    /// season. Never fails; an empty history still yields generic options.
    pub fn generate(
        &self,
        history: &[CropHistoryEntry],
        target_season: Option<Season>,
    ) -> RotationResult {
        // Most recent first; entries without dates sort last
        let mut sorted: Vec<CropHistoryEntry> = history.to_vec();
        sorted.sort_by(|a, b| b.sowing_date.cmp(&a.sowing_date));

        let ctx = RotationContext {
            history: &sorted,
            target_season,
        };

        let has_rice_based_system = ctx.has_rice_based_system();

        let mut options: Vec<RotationOption> = Vec::new();
        for strategy in &self.strategies {
            let generated = strategy.generate(&ctx);
            debug!(strategy = strategy.id(), count = generated.len(), "generated options");
            options.extend(generated);
        }

        // Score after all strategies have run, then rank
        for (i, option) in options.iter_mut().enumerate() {
            option.id = i as u64 + 1;
            option.overall_benefit_score = overall_benefit_score(option);
        }
        options.sort_by(|a, b| b.overall_benefit_score.total_cmp(&a.overall_benefit_score));

        let mut warnings: Vec<String> = Vec::new();
        if has_rice_based_system {
            warnings.push(
                "Rice-based system detected. Consider diversification to break pest cycles \
                 and improve soil health."
                    .to_string(),
            );
        }
        warnings.extend(assess_pest_carryover(&sorted));

        let recommendations = general_recommendations(&sorted, has_rice_based_system);

        RotationResult {
            options,
            warnings,
            recommendations,
            has_rice_based_system,
            pest_risk_level: overall_pest_risk_level(&sorted),
        }
    }
}

impl Default for RotationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Warnings for pest/disease carryover between adjacent crop cycles, plus
/// the known pest list of the most recent crop.
fn assess_pest_carryover(history: &[CropHistoryEntry]) -> Vec<String> {
    let mut risks: Vec<String> = Vec::new();

    for pair in history.windows(2) {
        let first = CropFamily::for_crop(&pair[0].crop_name);
        let second = CropFamily::for_crop(&pair[1].crop_name);
        if let (Some(family), Some(next)) = (first, second) {
            if family == next && tables::has_family_carryover(family) {
                risks.push(format!(
                    "High pest carryover risk: Consecutive {} crops may increase {} pest \
                     pressure. Consider rotating to a different crop family.",
                    family.family_name(),
                    family.family_name()
                ));
            }
        }
    }

    if let Some(last) = history.first() {
        if let Some(pests) = tables::known_pests(&last.crop_name) {
            risks.push(format!(
                "{} may carry over pests/diseases: {}. Consider crop rotation or pest \
                 management measures.",
                last.crop_name,
                pests.join(", ")
            ));
        }
    }

    risks
}

/// Overall carryover pressure from the count of adjacent same-family pairs.
fn overall_pest_risk_level(history: &[CropHistoryEntry]) -> PestRiskLevel {
    let same_family_pairs = history
        .windows(2)
        .filter(|pair| CropFamily::same_family(&pair[0].crop_name, &pair[1].crop_name))
        .count();

    match same_family_pairs {
        0 => PestRiskLevel::Low,
        1 => PestRiskLevel::Medium,
        _ => PestRiskLevel::High,
    }
}

fn general_recommendations(
    history: &[CropHistoryEntry],
    has_rice_based_system: bool,
) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    let has_consecutive_monoculture = history
        .windows(2)
        .any(|pair| CropFamily::same_family(&pair[0].crop_name, &pair[1].crop_name));
    if has_consecutive_monoculture {
        recommendations.push(
            "Consider rotating to a different crop family to break pest and disease cycles."
                .to_string(),
        );
    }

    if has_rice_based_system {
        recommendations.push(
            "For rice-based systems, consider green manuring with Sesbania or Crotalaria \
             before next rice crop."
                .to_string(),
        );
        recommendations.push(
            "Alternate rice with pulses or oilseeds to improve soil health and reduce \
             fertilizer requirements."
                .to_string(),
        );
    }

    recommendations.push("Incorporate crop residues to increase organic matter content.".to_string());
    recommendations.push("Consider soil testing before finalizing rotation plan.".to_string());

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(name: &str, year: i32, month: u32) -> CropHistoryEntry {
        CropHistoryEntry::new(name, NaiveDate::from_ymd_opt(year, month, 1).unwrap())
    }

    #[test]
    fn rice_history_produces_relay_and_diversification() {
        let engine = RotationEngine::new();
        let history = vec![entry("Rice", 2024, 6)];
        let result = engine.generate(&history, None);

        assert!(result.has_rice_based_system);
        for relay in ["Lentil", "Chickpea", "Greengram", "Blackgram"] {
            assert!(
                result
                    .options
                    .iter()
                    .any(|o| o.crop_sequence == format!("Rice (relay with {})", relay)),
                "missing relay option for {}",
                relay
            );
        }
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Rice-based system detected")));
    }

    #[test]
    fn options_are_ranked_descending() {
        let engine = RotationEngine::new();
        let history = vec![entry("Rice", 2024, 6), entry("Wheat", 2024, 2)];
        let result = engine.generate(&history, None);

        assert!(!result.options.is_empty());
        for pair in result.options.windows(2) {
            assert!(pair[0].overall_benefit_score >= pair[1].overall_benefit_score);
        }
    }

    #[test]
    fn overall_score_is_mean_of_five_components() {
        let engine = RotationEngine::new();
        let history = vec![entry("Rice", 2024, 6)];
        let result = engine.generate(&history, None);

        for option in &result.options {
            let expected = (option.nutrient_cycling_score
                + option.soil_health_benefit
                + option.economic_viability
                + option.climate_resilience
                + option.water_usage_score)
                / 5.0;
            assert!((option.overall_benefit_score - expected).abs() < 1e-9);
            assert!(option.overall_benefit_score >= 0.0);
            assert!(option.overall_benefit_score <= 100.0);
        }
    }

    #[test]
    fn option_ids_are_unique() {
        let engine = RotationEngine::new();
        let history = vec![entry("Rice", 2024, 6)];
        let result = engine.generate(&history, None);
        let mut ids: Vec<u64> = result.options.iter().map(|o| o.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), result.options.len());
    }

    #[test]
    fn pest_risk_levels_from_adjacent_pairs() {
        let engine = RotationEngine::new();

        // No same-family pairs
        let diverse = vec![entry("Rice", 2024, 6), entry("Chickpea", 2024, 2)];
        assert_eq!(engine.generate(&diverse, None).pest_risk_level, PestRiskLevel::Low);

        // One same-family pair
        let one = vec![
            entry("Rice", 2024, 6),
            entry("Wheat", 2024, 2),
            entry("Chickpea", 2023, 10),
        ];
        assert_eq!(engine.generate(&one, None).pest_risk_level, PestRiskLevel::Medium);

        // Two same-family pairs
        let two = vec![
            entry("Rice", 2024, 6),
            entry("Wheat", 2024, 2),
            entry("Maize", 2023, 10),
        ];
        assert_eq!(engine.generate(&two, None).pest_risk_level, PestRiskLevel::High);
    }

    #[test]
    fn carryover_warning_names_family_and_pests() {
        let engine = RotationEngine::new();
        let history = vec![entry("Rice", 2024, 6), entry("Wheat", 2024, 2)];
        let result = engine.generate(&history, None);

        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Consecutive Cereals crops")));
        // The most recent crop's specific pests are listed
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Blast") && w.contains("Brown Planthopper")));
    }

    #[test]
    fn rice_general_recommendations_present() {
        let engine = RotationEngine::new();
        let history = vec![entry("Paddy", 2024, 6)];
        let result = engine.generate(&history, None);

        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("green manuring with Sesbania")));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("pulses or oilseeds")));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("Incorporate crop residues")));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("soil testing")));
    }

    #[test]
    fn empty_history_still_generates_options() {
        let engine = RotationEngine::new();
        let result = engine.generate(&[], None);

        assert!(!result.has_rice_based_system);
        assert_eq!(result.pest_risk_level, PestRiskLevel::Low);
        // Nutrient cycling and legume strategies still propose candidates
        assert!(!result.options.is_empty());
        assert!(result
            .options
            .iter()
            .any(|o| o.crop_sequence == "Sunflower → Cabbage → Greengram"));
    }

    #[test]
    fn unsorted_history_is_sorted_internally() {
        let engine = RotationEngine::new();
        // Oldest first on purpose; the most recent crop is Rice
        let history = vec![entry("Wheat", 2023, 10), entry("Rice", 2024, 6)];
        let result = engine.generate(&history, None);

        // Relay options key off the most recent crop, which must be Rice
        assert!(result
            .options
            .iter()
            .any(|o| o.crop_sequence.starts_with("Rice (relay with")));
    }

    #[test]
    fn legume_strategy_gated_by_last_family() {
        let engine = RotationEngine::new();
        let history = vec![entry("Chickpea", 2024, 6)];
        let result = engine.generate(&history, None);

        assert!(result
            .options
            .iter()
            .all(|o| o.description != "Legume integration for biological nitrogen fixation"));
    }
}
