pub mod crop_family;
pub mod history;
pub mod rotation;
pub mod suitability;

pub use crop_family::{CropFamily, RootDepth};
pub use history::{
    AnalysisSummary, CropHistoryEntry, EnrichedEntry, HistoryAnalysis, NutrientDepletionRisk,
    RiskLevel,
};
pub use rotation::{ComponentScores, PestRiskLevel, RotationOption, RotationResult};
pub use suitability::{
    ClimateRiskLevel, GaezBaseRecord, IrrigationType, ScoredCrop, Season, SoilHealthCard,
    SuitabilityClass,
};
