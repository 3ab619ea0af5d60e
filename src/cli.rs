use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cropcycle", version, about = "Crop rotation and suitability advisor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit machine-readable JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze crop history for rotation and nutrient depletion risks
    Analyze {
        /// JSON file with the crop history entries
        history: PathBuf,
    },
    /// Generate ranked rotation recommendations
    Rotate {
        /// JSON file with the crop history entries
        history: PathBuf,

        /// Target season (kharif, rabi, zaid, all)
        #[arg(short, long)]
        season: Option<String>,
    },
    /// Score crop suitability from GAEZ base records
    Suitability {
        /// JSON file with the GAEZ base records for the zone
        crops: PathBuf,

        /// Season filter (kharif, rabi, zaid, all)
        #[arg(short, long)]
        season: Option<String>,

        /// Irrigation type (rainfed, drip, sprinkler, canal, borewell, mixed)
        #[arg(short, long)]
        irrigation: Option<String>,

        /// JSON file with soil health card nutrient values
        #[arg(long)]
        soil_card: Option<PathBuf>,
    },
}
