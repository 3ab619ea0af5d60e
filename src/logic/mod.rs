pub mod history;
pub mod rotation;
pub mod scoring;
pub mod suitability;

pub use history::CropHistoryAnalyzer;
pub use rotation::RotationEngine;
pub use suitability::GaezSuitabilityService;
