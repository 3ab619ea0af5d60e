use super::{tables, RotationContext, RotationStrategy};
use crate::models::{ComponentScores, RotationOption};

/// Intercropping and relay cropping suggestions
///
/// Relay options sow a partner crop into the maturing main crop (paira/utera
/// in rice systems); intercropping options grow both together. Both use the
/// static pairing tables keyed by the most recent crop.
pub struct IntercroppingStrategy;

impl RotationStrategy for IntercroppingStrategy {
    fn id(&self) -> &'static str {
        "intercropping"
    }

    fn name(&self) -> &'static str {
        "Intercropping and Relay Cropping"
    }

    fn generate(&self, ctx: &RotationContext) -> Vec<RotationOption> {
        let Some(last_crop) = ctx.last_crop() else {
            return Vec::new();
        };

        let mut options: Vec<RotationOption> = Vec::new();

        if let Some(partners) = tables::relay_partners(last_crop) {
            for relay_crop in partners {
                options.push(relay_option(last_crop, relay_crop));
            }
        }

        for intercrop in tables::intercrop_partners(last_crop) {
            options.push(intercrop_option(last_crop, intercrop));
        }

        options
    }
}

fn relay_option(main_crop: &str, relay_crop: &str) -> RotationOption {
    let description = if tables::is_rice_crop(main_crop) {
        format!(
            "Paira/Utera relay cropping: Sow {} into maturing {}",
            relay_crop, main_crop
        )
    } else {
        format!("Relay cropping: Sow {} into maturing {}", relay_crop, main_crop)
    };

    RotationOption::new(
        format!("{} (relay with {})", main_crop, relay_crop),
        description,
        ComponentScores {
            nutrient_cycling: 78.0,
            soil_health: 85.0,
            economic: 88.0,
            climate: 80.0,
            water_usage: 90.0,
            pest_management: 82.0,
        },
    )
    .with_benefits(&[
        "Utilizes residual soil moisture efficiently",
        "Maximizes land productivity per season",
        "Reduces weed competition",
        &format!("{} fixes nitrogen benefiting subsequent crops", relay_crop),
    ])
    .with_considerations(&[
        "Timing critical - sow relay crop 2-3 weeks before main crop harvest",
        "May require minimal additional inputs",
        "Ensure relay crop is suitable for the climate",
    ])
    .with_residue_note("Manage main crop residues to avoid smothering relay crop")
    .with_organic_matter_impact("High - dual crop biomass increases organic input")
}

fn intercrop_option(main_crop: &str, intercrop: &str) -> RotationOption {
    RotationOption::new(
        format!("{} + {} (intercropping)", main_crop, intercrop),
        format!(
            "Intercrop {} with {} for better resource utilization",
            intercrop, main_crop
        ),
        ComponentScores {
            nutrient_cycling: 75.0,
            soil_health: 82.0,
            economic: 85.0,
            climate: 78.0,
            water_usage: 72.0,
            pest_management: 80.0,
        },
    )
    .with_benefits(&[
        "Maximizes land use efficiency",
        "Intercrop may fix nitrogen (if legume)",
        "Reduces pest and disease incidence through diversity",
        "Provides additional income source",
    ])
    .with_considerations(&[
        "Requires careful crop combination selection",
        "May need adjustment of input rates",
        "Harvest timing may be more complex",
    ])
    .with_residue_note("Manage residues of both crops appropriately")
    .with_organic_matter_impact("Moderate to High - depends on crop combination")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CropHistoryEntry;
    use chrono::NaiveDate;

    fn entry(name: &str) -> CropHistoryEntry {
        CropHistoryEntry::new(name, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn rice_gets_paira_utera_relay_options() {
        let history = vec![entry("Rice")];
        let ctx = RotationContext {
            history: &history,
            target_season: None,
        };
        let options = IntercroppingStrategy.generate(&ctx);

        for relay in ["Lentil", "Chickpea", "Greengram", "Blackgram"] {
            let option = options
                .iter()
                .find(|o| o.crop_sequence == format!("Rice (relay with {})", relay))
                .unwrap_or_else(|| panic!("missing relay option for {}", relay));
            assert!(option.description.contains("Paira/Utera"));
            assert_eq!(option.water_usage_score, 90.0);
        }
    }

    #[test]
    fn wheat_relay_is_not_paira_utera() {
        let history = vec![entry("Wheat")];
        let ctx = RotationContext {
            history: &history,
            target_season: None,
        };
        let options = IntercroppingStrategy.generate(&ctx);
        let relay = options
            .iter()
            .find(|o| o.crop_sequence.contains("relay with"))
            .unwrap();
        assert!(!relay.description.contains("Paira/Utera"));
        assert!(relay.description.starts_with("Relay cropping"));
    }

    #[test]
    fn intercrop_options_for_mapped_main_crop() {
        let history = vec![entry("Cotton")];
        let ctx = RotationContext {
            history: &history,
            target_season: None,
        };
        let options = IntercroppingStrategy.generate(&ctx);
        // Cotton has no relay partners, only intercrops
        assert!(options
            .iter()
            .all(|o| o.crop_sequence.contains("(intercropping)")));
        assert!(options
            .iter()
            .any(|o| o.crop_sequence == "Cotton + Soybean (intercropping)"));
    }

    #[test]
    fn unmapped_crop_produces_nothing() {
        let history = vec![entry("Tomato")];
        let ctx = RotationContext {
            history: &history,
            target_season: None,
        };
        assert!(IntercroppingStrategy.generate(&ctx).is_empty());
    }
}
