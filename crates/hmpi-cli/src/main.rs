mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use hmpi_core::model::{ConcentrationRecord, Metal};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hmpi",
    version,
    about = "Heavy-metal pollution index and health-risk tool for water samples"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Concentration flags shared by `assess` and `risk`, all in mg/L.
#[derive(Args)]
struct MetalArgs {
    #[arg(long, value_name = "MG_L", default_value = "0")]
    lead: Decimal,
    #[arg(long, value_name = "MG_L", default_value = "0")]
    mercury: Decimal,
    #[arg(long, value_name = "MG_L", default_value = "0")]
    cadmium: Decimal,
    #[arg(long, value_name = "MG_L", default_value = "0")]
    arsenic: Decimal,
    #[arg(long, value_name = "MG_L", default_value = "0")]
    chromium: Decimal,
    #[arg(long, value_name = "MG_L", default_value = "0")]
    copper: Decimal,
    #[arg(long, value_name = "MG_L", default_value = "0")]
    zinc: Decimal,
    #[arg(long, value_name = "MG_L", default_value = "0")]
    nickel: Decimal,
}

impl MetalArgs {
    fn to_record(&self) -> ConcentrationRecord {
        let pairs = [
            (Metal::Lead, self.lead),
            (Metal::Mercury, self.mercury),
            (Metal::Cadmium, self.cadmium),
            (Metal::Arsenic, self.arsenic),
            (Metal::Chromium, self.chromium),
            (Metal::Copper, self.copper),
            (Metal::Zinc, self.zinc),
            (Metal::Nickel, self.nickel),
        ];
        pairs
            .into_iter()
            .filter(|(_, c)| *c != Decimal::ZERO)
            .collect()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one sample: pollution indices, quality status, exceedances
    Assess {
        /// Sampling site name
        #[arg(long)]
        location: String,

        #[arg(long)]
        latitude: f64,

        #[arg(long)]
        longitude: f64,

        /// Sample date (free form, e.g. 2024-01-15)
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        metals: MetalArgs,

        /// Custom guideline JSON file (default: who-epa preset)
        #[arg(short, long, value_name = "FILE")]
        guidelines: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Append the assessed sample to a dataset store
        #[arg(long, value_name = "FILE")]
        store: Option<PathBuf>,
    },
    /// Predict disease risks and the exposure screening score
    Risk {
        #[command(flatten)]
        metals: MetalArgs,

        /// Pin the jitter RNG for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Custom guideline JSON file (default: who-epa preset)
        #[arg(short, long, value_name = "FILE")]
        guidelines: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Import samples from a CSV or XLSX file and assess every row
    Import {
        /// Path to CSV or XLSX file
        input_file: PathBuf,

        /// Custom guideline JSON file (default: who-epa preset)
        #[arg(short, long, value_name = "FILE")]
        guidelines: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Append the imported samples to a dataset store
        #[arg(long, value_name = "FILE")]
        store: Option<PathBuf>,
    },
    /// Export a dataset store as CSV
    Export {
        /// Dataset store file
        #[arg(long, value_name = "FILE")]
        store: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Summary statistics over a dataset store
    Summary {
        /// Dataset store file
        #[arg(long, value_name = "FILE")]
        store: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect guideline sets
    Guidelines {
        #[command(subcommand)]
        action: GuidelinesAction,
    },
}

#[derive(Subcommand)]
enum GuidelinesAction {
    /// List predefined guideline sets
    List,
    /// Print a guideline set's full limit table
    Show {
        /// Preset name (e.g., "who-epa")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom guideline file
    Validate {
        /// Path to JSON guideline file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assess {
            location,
            latitude,
            longitude,
            date,
            metals,
            guidelines,
            output,
            store,
        } => {
            let input = hmpi_core::model::SampleInput {
                location,
                latitude,
                longitude,
                date,
                concentrations: metals.to_record(),
            };
            commands::assess::run(input, guidelines, &output, store)
        }
        Commands::Risk {
            metals,
            seed,
            guidelines,
            output,
        } => commands::risk::run(metals.to_record(), seed, guidelines, &output),
        Commands::Import {
            input_file,
            guidelines,
            output,
            store,
        } => commands::import::run(input_file, guidelines, &output, store),
        Commands::Export { store, out } => commands::export::run(store, out),
        Commands::Summary { store, output } => commands::summary::run(store, &output),
        Commands::Guidelines { action } => match action {
            GuidelinesAction::List => commands::guidelines::list(),
            GuidelinesAction::Show { preset } => commands::guidelines::show(&preset),
            GuidelinesAction::Schema => commands::guidelines::schema(),
            GuidelinesAction::Validate { file } => commands::guidelines::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
