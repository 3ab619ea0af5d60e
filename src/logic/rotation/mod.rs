pub mod engine;
pub mod intercropping;
pub mod legume_integration;
pub mod nutrient_cycling;
pub mod rice_diversification;
pub mod tables;

pub use engine::RotationEngine;

use crate::models::{CropFamily, CropHistoryEntry, RotationOption, Season};

/// Inputs shared by all generation strategies. History is sorted most
/// recent first by the engine before strategies run.
pub struct RotationContext<'a> {
    pub history: &'a [CropHistoryEntry],
    pub target_season: Option<Season>,
}

impl RotationContext<'_> {
    /// Name of the most recent planting, if any.
    pub fn last_crop(&self) -> Option<&str> {
        self.history.first().map(|e| e.crop_name.as_str())
    }

    pub fn last_family(&self) -> Option<CropFamily> {
        self.last_crop().and_then(CropFamily::for_crop)
    }

    /// Most recent rice/paddy planting, which need not be the most recent
    /// entry overall.
    pub fn last_rice_crop(&self) -> Option<&str> {
        self.history
            .iter()
            .map(|e| e.crop_name.as_str())
            .find(|name| tables::is_rice_crop(name))
    }

    pub fn has_rice_based_system(&self) -> bool {
        self.last_rice_crop().is_some()
    }
}

/// A rotation generation strategy. Each strategy independently proposes
/// candidate options; the engine concatenates, scores and ranks them.
pub trait RotationStrategy: Send + Sync {
    /// Unique identifier for this strategy
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Generate candidate options. Strategies whose preconditions are not
    /// met return an empty list.
    fn generate(&self, ctx: &RotationContext) -> Vec<RotationOption>;
}

/// Arrow-joined sequence from an optional predecessor to a successor.
pub(crate) fn sequence(last_crop: Option<&str>, next_crop: &str) -> String {
    match last_crop {
        Some(last) => format!("{} → {}", last, next_crop),
        None => next_crop.to_string(),
    }
}
