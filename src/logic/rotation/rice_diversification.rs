use super::{tables, RotationContext, RotationStrategy};
use crate::logic::scoring::{pest_management_score, water_usage_score};
use crate::models::{ComponentScores, RotationOption};

/// Rice-based system diversification
///
/// Runs only when rice or paddy appears anywhere in the history. Sequences
/// start from the most recent rice planting (not necessarily the most
/// recent entry) and target crops that grow on residual moisture after the
/// rice harvest.
pub struct RiceDiversificationStrategy;

impl RotationStrategy for RiceDiversificationStrategy {
    fn id(&self) -> &'static str {
        "rice_diversification"
    }

    fn name(&self) -> &'static str {
        "Rice System Diversification"
    }

    fn generate(&self, ctx: &RotationContext) -> Vec<RotationOption> {
        let Some(last_rice) = ctx.last_rice_crop() else {
            return Vec::new();
        };

        tables::RICE_DIVERSIFICATION_CROPS
            .iter()
            .filter(|crop| !tables::is_rice_crop(crop))
            .map(|crop| {
                RotationOption::new(
                    format!("{} → {}", last_rice, crop),
                    "Rice-based system diversification to leverage residual moisture",
                    ComponentScores {
                        nutrient_cycling: 72.0,
                        soil_health: 80.0,
                        economic: 75.0,
                        climate: 78.0,
                        water_usage: water_usage_score(crop),
                        pest_management: pest_management_score(crop, Some(last_rice)),
                    },
                )
                .with_benefits(&[
                    "Utilizes residual soil moisture after rice harvest",
                    "Breaks rice-specific pest and disease cycles",
                    "Diversifies income sources",
                    "Improves soil health through different root systems",
                ])
                .with_considerations(&[
                    "Timing critical - sow before soil dries completely",
                    "May require minimal irrigation if moisture insufficient",
                    "Consider market demand before selection",
                ])
                .with_residue_note("Manage rice residues properly to avoid pest habitat")
                .with_organic_matter_impact("Moderate - varies by crop choice")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropHistoryEntry;
    use chrono::NaiveDate;

    fn entry(name: &str, month: u32) -> CropHistoryEntry {
        CropHistoryEntry::new(name, NaiveDate::from_ymd_opt(2024, month, 1).unwrap())
    }

    #[test]
    fn skipped_without_rice_in_history() {
        let history = vec![entry("Wheat", 6)];
        let ctx = RotationContext {
            history: &history,
            target_season: None,
        };
        assert!(RiceDiversificationStrategy.generate(&ctx).is_empty());
    }

    #[test]
    fn sequences_start_from_most_recent_rice_entry() {
        // Mustard is more recent than paddy; sequences still anchor on the
        // rice crop.
        let history = vec![entry("Mustard", 10), entry("Paddy", 6)];
        let ctx = RotationContext {
            history: &history,
            target_season: None,
        };
        let options = RiceDiversificationStrategy.generate(&ctx);
        assert!(!options.is_empty());
        assert!(options
            .iter()
            .all(|o| o.crop_sequence.starts_with("Paddy → ")));
    }

    #[test]
    fn rice_itself_is_never_a_target() {
        let history = vec![entry("Rice", 6)];
        let ctx = RotationContext {
            history: &history,
            target_season: None,
        };
        let options = RiceDiversificationStrategy.generate(&ctx);
        assert!(options.iter().all(|o| !o.crop_sequence.ends_with("Rice")));
        // Wheat is in the diversification set and stays
        assert!(options.iter().any(|o| o.crop_sequence == "Rice → Wheat"));
    }
}
