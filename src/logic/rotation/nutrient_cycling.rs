use super::{sequence, tables, RotationContext, RotationStrategy};
use crate::logic::scoring::{nutrient_cycling_score, pest_management_score, water_usage_score};
use crate::models::{ComponentScores, CropFamily, RootDepth, RotationOption};

/// Nutrient cycling optimization
///
/// Alternates root depth from the most recent crop: deep-rooted crops pull
/// nutrients up from lower layers, shallow-rooted crops work the topsoil.
/// Candidates come from the static depth tables, excluding the most recent
/// crop's own family. A fixed balanced 3-year template
/// (deep → shallow → legume) is always proposed as well.
pub struct NutrientCyclingStrategy;

impl RotationStrategy for NutrientCyclingStrategy {
    fn id(&self) -> &'static str {
        "nutrient_cycling"
    }

    fn name(&self) -> &'static str {
        "Nutrient Cycling Optimization"
    }

    fn generate(&self, ctx: &RotationContext) -> Vec<RotationOption> {
        let last_crop = ctx.last_crop();
        let last_family = ctx.last_family();
        let last_depth = last_crop.map(RootDepth::for_crop).unwrap_or(RootDepth::Medium);

        // Rotate to the opposite depth category
        let (candidates, depth_label): (&[&str], &str) = if last_depth == RootDepth::Deep {
            (
                &tables::SHALLOW_ROOTED_CROPS,
                "shallow-rooted (topsoil nutrient utilization)",
            )
        } else {
            (
                &tables::DEEP_ROOTED_CROPS,
                "deep-rooted (nutrient cycling from deeper layers)",
            )
        };
        let description_prefix = if last_depth == RootDepth::Deep {
            "Shallow-rooted crop for nutrient cycling"
        } else {
            "Deep-rooted crop for nutrient cycling"
        };

        let mut options: Vec<RotationOption> = candidates
            .iter()
            .filter(|crop| CropFamily::for_crop(crop) != last_family)
            .map(|crop| {
                let nutrient = nutrient_cycling_score(crop, last_crop);
                RotationOption::new(
                    sequence(last_crop, crop),
                    format!("{}: {} ({})", description_prefix, crop, depth_label),
                    ComponentScores {
                        nutrient_cycling: nutrient,
                        soil_health: nutrient,
                        economic: 70.0,
                        climate: 75.0,
                        water_usage: water_usage_score(crop),
                        pest_management: pest_management_score(crop, last_crop),
                    },
                )
                .with_benefits(&[
                    "Alternates root depth for better nutrient utilization",
                    "Improves soil structure through different root systems",
                    "Reduces nutrient depletion in specific soil layers",
                ])
                .with_considerations(&[
                    "Consider market demand for the recommended crop",
                    "Ensure crop is suitable for the growing season",
                    "Check water requirements match available resources",
                ])
                .with_residue_note("Incorporate residues to enhance organic matter")
                .with_organic_matter_impact("Moderate - depends on biomass production")
            })
            .collect();

        options.push(balanced_rotation_option(last_crop));
        options
    }
}

/// Fixed deep → shallow → legume template spanning three seasons.
fn balanced_rotation_option(last_crop: Option<&str>) -> RotationOption {
    let sequence = match last_crop {
        Some(last) => format!("{} → Sunflower → Cabbage → Greengram", last),
        None => "Sunflower → Cabbage → Greengram".to_string(),
    };

    RotationOption::new(
        sequence,
        "Balanced 3-year rotation for optimal nutrient cycling",
        ComponentScores {
            nutrient_cycling: 95.0,
            soil_health: 90.0,
            economic: 80.0,
            climate: 85.0,
            water_usage: 75.0,
            pest_management: 85.0,
        },
    )
    .with_benefits(&[
        "Deep-rooted (Sunflower) accesses nutrients from deeper soil layers",
        "Shallow-rooted (Cabbage) utilizes topsoil nutrients efficiently",
        "Legume (Greengram) fixes atmospheric nitrogen",
        "Breaks pest and disease cycles effectively",
    ])
    .with_considerations(&[
        "Requires planning across multiple seasons",
        "Market timing important for each crop",
        "Adjust based on local climate and soil conditions",
    ])
    .with_residue_note("Rotate residue management practices between crops")
    .with_organic_matter_impact("High - diverse root systems contribute to soil organic matter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropHistoryEntry;
    use chrono::NaiveDate;

    fn ctx_for(history: &[CropHistoryEntry]) -> RotationContext<'_> {
        RotationContext {
            history,
            target_season: None,
        }
    }

    fn entry(name: &str) -> CropHistoryEntry {
        CropHistoryEntry::new(name, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn deep_last_crop_gets_shallow_candidates() {
        // Rice is deep-rooted in the taxonomy
        let history = vec![entry("Rice")];
        let options = NutrientCyclingStrategy.generate(&ctx_for(&history));

        // Wheat and Rice are in the shallow table but share the cereal
        // family with the last crop, so they are excluded.
        assert!(options
            .iter()
            .all(|o| !o.crop_sequence.contains("→ Wheat")));
        assert!(options
            .iter()
            .any(|o| o.crop_sequence == "Rice → Cabbage"));
    }

    #[test]
    fn medium_last_crop_gets_deep_candidates() {
        let history = vec![entry("Chickpea")];
        let options = NutrientCyclingStrategy.generate(&ctx_for(&history));
        assert!(options
            .iter()
            .any(|o| o.crop_sequence == "Chickpea → Sunflower"));
        // Soybean is deep-rooted but a legume like the last crop
        assert!(options
            .iter()
            .all(|o| !o.crop_sequence.contains("→ Soybean")));
    }

    #[test]
    fn balanced_template_always_present() {
        let empty: Vec<CropHistoryEntry> = Vec::new();
        let options = NutrientCyclingStrategy.generate(&ctx_for(&empty));
        let balanced = options
            .iter()
            .find(|o| o.crop_sequence == "Sunflower → Cabbage → Greengram")
            .expect("balanced option missing");
        assert_eq!(balanced.nutrient_cycling_score, 95.0);
        assert_eq!(balanced.soil_health_benefit, 90.0);
    }

    #[test]
    fn alternating_depth_scores_higher() {
        let history = vec![entry("Rice")];
        let options = NutrientCyclingStrategy.generate(&ctx_for(&history));
        let cabbage = options
            .iter()
            .find(|o| o.crop_sequence == "Rice → Cabbage")
            .unwrap();
        // Rice deep, cabbage shallow: alternating depth
        assert_eq!(cabbage.nutrient_cycling_score, 85.0);
    }
}
