//! Agronomic decision support for Indian cropping systems: crop history
//! analysis, rotation recommendation and GAEZ-based suitability scoring.
//!
//! The library is pure, synchronous computation over caller-supplied
//! records. Persistence, HTTP and external data fetching are the calling
//! layer's concern.

pub mod error;
pub mod logic;
pub mod models;

pub use error::{CropCycleError, Result};
pub use logic::{CropHistoryAnalyzer, GaezSuitabilityService, RotationEngine};
