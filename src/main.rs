//! Needs Analysis CLI
//!
//! Runs needs analyses over an intake CSV export and renders client reports

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use needs_analysis::{
    export, format_currency, profile::load_profiles, AnalysisConfig, BatchRunner, ClientProfile,
    JsonLinesStore, PremiumRates,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "needs_analysis", version, about = "Life insurance needs analysis")]
struct Cli {
    /// JSON analysis config; defaults apply to missing keys
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding premium_age_bands.csv
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze every client in an intake CSV
    Analyze {
        /// Intake CSV (camelCase form columns)
        #[arg(long)]
        input: PathBuf,

        /// Write one summary row per client to this CSV
        #[arg(long)]
        output: Option<PathBuf>,

        /// Append each analysis to this JSON-lines store
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Render the text report for one client
    Report {
        #[arg(long)]
        input: PathBuf,

        /// Client name as it appears in the intake CSV
        #[arg(long)]
        client: String,

        /// Directory for the report file
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn load_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_json_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    if let Some(dir) = &cli.assumptions {
        let rates = PremiumRates::from_csv_path(dir)
            .with_context(|| format!("failed to load premium age bands from {}", dir.display()))?;
        config.premium.age_bands = rates.age_bands;
    }

    Ok(config)
}

fn read_profiles(input: &Path) -> Result<Vec<ClientProfile>> {
    load_profiles(input).with_context(|| format!("failed to load intake from {}", input.display()))
}

fn analyze(
    config: AnalysisConfig,
    input: &Path,
    output: Option<&Path>,
    store: Option<&Path>,
) -> Result<()> {
    let runner = BatchRunner::with_config(config);
    let profiles = read_profiles(input)?;
    let results = runner.run_batch(&profiles);

    println!(
        "{:<24} {:>16} {:>16} {:>16} {:>5}",
        "Client", "Needs", "Existing", "Gap", "Recs"
    );
    println!("{}", "-".repeat(81));
    for (profile, result) in profiles.iter().zip(&results) {
        println!(
            "{:<24} {:>16} {:>16} {:>16} {:>5}",
            profile.name,
            format_currency(result.total_family_needs),
            format_currency(result.existing_coverage.total),
            format_currency(result.coverage_gaps.total),
            result.recommendations.len(),
        );
    }

    let summary = BatchRunner::summarize(&results);
    println!("\nSummary:");
    println!("  Households: {}", summary.households);
    println!("  Underinsured: {}", summary.underinsured);
    println!("  Total Needs: {}", format_currency(summary.total_needs));
    println!("  Total Gap: {}", format_currency(summary.total_gap));

    if let Some(path) = output {
        export::write_results_csv(path, &profiles, &results)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\nResults written to: {}", path.display());
    }

    if let Some(path) = store {
        let mut store = JsonLinesStore::new(path);
        let saved = export::save_all(&mut store, &profiles, &results)
            .with_context(|| format!("failed to save analyses to {}", path.display()))?;
        println!("Saved {} analyses to: {}", saved, path.display());
    }

    Ok(())
}

fn report(config: AnalysisConfig, input: &Path, client: &str, out_dir: &Path) -> Result<()> {
    let runner = BatchRunner::with_config(config);
    let profiles = read_profiles(input)?;

    let Some(profile) = export::find_client(&profiles, client) else {
        bail!("client {:?} not found in {}", client, input.display());
    };

    let result = runner.run(profile);
    let (path, text) =
        export::write_report(out_dir, profile, &result, chrono::Local::now().date_naive())
            .with_context(|| format!("failed to write report to {}", out_dir.display()))?;

    println!("{}", text);
    println!("\nReport written to: {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    match &cli.command {
        Command::Analyze {
            input,
            output,
            store,
        } => analyze(config, input, output.as_deref(), store.as_deref()),
        Command::Report {
            input,
            client,
            out_dir,
        } => report(config, input, client, out_dir),
    }
}
