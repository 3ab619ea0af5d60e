mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use cropcycle::error::CropCycleError;
use cropcycle::models::{
    CropHistoryEntry, GaezBaseRecord, IrrigationType, Season, SoilHealthCard,
};
use cropcycle::{CropHistoryAnalyzer, GaezSuitabilityService, RotationEngine};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match &cli.command {
        Commands::Analyze { history } => {
            let entries: Vec<CropHistoryEntry> = read_json(history)?;
            let result = CropHistoryAnalyzer::new().analyze(&entries);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_analysis(&result);
            }
        }
        Commands::Rotate { history, season } => {
            let entries: Vec<CropHistoryEntry> = read_json(history)?;
            let season = season.as_deref().map(parse_season).transpose()?;
            let result = RotationEngine::new().generate(&entries, season);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_rotation(&result);
            }
        }
        Commands::Suitability {
            crops,
            season,
            irrigation,
            soil_card,
        } => {
            let records: Vec<GaezBaseRecord> = read_json(crops)?;
            let season = season.as_deref().map(parse_season).transpose()?;
            let irrigation = irrigation.as_deref().map(parse_irrigation).transpose()?;
            let card: Option<SoilHealthCard> = match soil_card {
                Some(path) => Some(read_json(path)?),
                None => None,
            };
            let scored =
                GaezSuitabilityService::new().score_crops(&records, season, irrigation, card.as_ref());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&scored)?);
            } else {
                print_suitability(&scored);
            }
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(value)
}

fn parse_season(s: &str) -> Result<Season, CropCycleError> {
    Season::from_str(s)
        .ok_or_else(|| CropCycleError::InvalidData(format!("unknown season: {}", s)))
}

fn parse_irrigation(s: &str) -> Result<IrrigationType, CropCycleError> {
    IrrigationType::from_str(s)
        .ok_or_else(|| CropCycleError::InvalidData(format!("unknown irrigation type: {}", s)))
}

fn print_analysis(result: &cropcycle::models::HistoryAnalysis) {
    println!("Seasons analyzed: {}", result.seasons_analyzed);
    println!("Sufficient history: {}", result.has_sufficient_history);
    println!("Rotation pattern: {}", result.summary.rotation_pattern);
    println!(
        "Nutrient balance: {}",
        result.summary.nutrient_balance_assessment
    );
    println!(
        "Pest/disease risk: {}",
        result.summary.pest_disease_risk_level
    );
    if let Some(family) = &result.summary.dominant_crop_family {
        println!("Dominant family: {}", family);
    }

    if !result.nutrient_depletion_risks.is_empty() {
        println!("\nNutrient depletion risks:");
        for risk in &result.nutrient_depletion_risks {
            println!(
                "  [{}] {} ({} seasons, severity {:.0})",
                risk.risk_level, risk.crop_family_name, risk.consecutive_seasons, risk.severity_score
            );
            println!("      {}", risk.risk_description);
            println!("      Affected nutrients: {}", risk.affected_nutrients);
        }
    }

    println!("\nRecommendations:");
    for rec in &result.recommendations {
        println!("  - {}", rec);
    }
}

fn print_rotation(result: &cropcycle::models::RotationResult) {
    println!("Pest risk level: {}", result.pest_risk_level);
    println!("Rice-based system: {}", result.has_rice_based_system);

    println!("\nTop rotation options:");
    for option in result.options.iter().take(10) {
        println!(
            "  {:.1}  {}",
            option.overall_benefit_score, option.crop_sequence
        );
        println!("        {}", option.description);
    }

    if !result.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &result.warnings {
            println!("  ! {}", warning);
        }
    }

    println!("\nRecommendations:");
    for rec in &result.recommendations {
        println!("  - {}", rec);
    }
}

fn print_suitability(scored: &[cropcycle::models::ScoredCrop]) {
    if scored.is_empty() {
        println!("No suitable crops found.");
        return;
    }

    println!("Suitable crops:");
    for crop in scored {
        println!(
            "  {:.2}  {} ({})",
            crop.overall_suitability_score,
            crop.crop_name,
            crop.suitability_classification
        );
        if let Some(expected) = crop.expected_yield_expected {
            println!("        Expected yield: {:.2} t/ha", expected);
        }
        for rec in &crop.soil_health_recommendations {
            println!("        - {}", rec);
        }
    }
}
