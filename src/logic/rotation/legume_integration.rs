use super::{sequence, tables, RotationContext, RotationStrategy};
use crate::logic::scoring::pest_management_score;
use crate::models::{ComponentScores, CropFamily, RotationOption};

/// Legume integration for biological nitrogen fixation
///
/// Proposes one option per legume in the static set. Skipped entirely when
/// the most recent crop is already a legume; the legume matching the last
/// crop's name is skipped individually.
pub struct LegumeIntegrationStrategy;

impl RotationStrategy for LegumeIntegrationStrategy {
    fn id(&self) -> &'static str {
        "legume_integration"
    }

    fn name(&self) -> &'static str {
        "Legume Integration"
    }

    fn generate(&self, ctx: &RotationContext) -> Vec<RotationOption> {
        if ctx.last_family() == Some(CropFamily::Legumes) {
            return Vec::new();
        }

        let last_crop = ctx.last_crop();

        tables::LEGUME_CROPS
            .iter()
            .filter(|legume| {
                last_crop.map_or(true, |last| !legume.eq_ignore_ascii_case(last))
            })
            .map(|legume| {
                RotationOption::new(
                    sequence(last_crop, legume),
                    "Legume integration for biological nitrogen fixation",
                    ComponentScores {
                        nutrient_cycling: 90.0,
                        soil_health: 85.0,
                        economic: 70.0,
                        climate: 75.0,
                        water_usage: 65.0,
                        pest_management: pest_management_score(legume, last_crop),
                    },
                )
                .with_benefits(&[
                    "Biological nitrogen fixation (40-60 kg N/ha)",
                    "Improves soil organic matter",
                    "Breaks pest and disease cycles",
                    "Reduces fertilizer requirements for subsequent crops",
                ])
                .with_considerations(&[
                    "Requires proper rhizobium inoculation",
                    "Market price fluctuations possible",
                    "May need additional phosphorus for nodulation",
                ])
                .with_residue_note("Incorporate crop residues or use as green manure")
                .with_organic_matter_impact("High - adds organic matter and improves soil structure")
            })
            .collect()
    }
}
