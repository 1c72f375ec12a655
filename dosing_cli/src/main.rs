use clap::{Parser, Subcommand};
use dosing_core::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dosecalc")]
#[command(about = "Weight-based pediatric dose estimates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output language (en, cs)
    #[arg(long, global = true)]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate per-dose and 24-hour maximum for one weight
    Calc {
        /// Body weight in kg (2-300)
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Drug identifier (ibuprofen, paracetamol, or one from the config)
        #[arg(long)]
        drug: String,

        /// Rounding step in mg (overrides config)
        #[arg(long)]
        step: Option<u32>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known drugs and their dosing rules
    Drugs,

    /// Print a dosing chart as CSV
    Chart {
        /// Drug identifier
        #[arg(long)]
        drug: String,

        /// First weight in kg
        #[arg(long, default_value_t = 2.0)]
        from: f64,

        /// Last weight in kg
        #[arg(long, default_value_t = 40.0)]
        to: f64,

        /// Weight increment in kg
        #[arg(long, default_value_t = 2.0)]
        by: f64,

        /// Rounding step in mg (overrides config)
        #[arg(long)]
        step: Option<u32>,

        /// Write CSV to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    dosing_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let locale = match cli.lang {
        Some(ref code) => code.parse::<Locale>()?,
        None => config.display.language,
    };
    let rules = config.rule_table()?;

    match cli.command {
        Commands::Calc {
            weight,
            drug,
            step,
            json,
        } => cmd_calc(&rules, &config, locale, &weight, &drug, step, json),
        Commands::Drugs => cmd_drugs(&rules, locale),
        Commands::Chart {
            drug,
            from,
            to,
            by,
            step,
            output,
        } => cmd_chart(&rules, &config, &drug, from, to, by, step, output),
    }
}

fn normalize_drug(drug: &str) -> String {
    drug.trim().to_lowercase()
}

fn resolve_step(config: &Config, step: Option<u32>) -> Result<u32> {
    match step {
        Some(0) => Err(Error::Config("--step must be at least 1".into())),
        Some(step) => Ok(step),
        None => Ok(config.calculation.rounding_step),
    }
}

fn cmd_calc(
    rules: &RuleTable,
    config: &Config,
    locale: Locale,
    weight: &str,
    drug: &str,
    step: Option<u32>,
    json: bool,
) -> Result<()> {
    let step = resolve_step(config, step)?;
    let drug = normalize_drug(drug);

    let weight_kg = match parse_weight(weight) {
        Ok(w) => w,
        Err(e) => {
            // The localized message replaces the result; no raw error line.
            tracing::debug!("{}", e);
            eprintln!("{}", invalid_weight_message(locale));
            std::process::exit(1);
        }
    };

    let rule = rules.lookup(&drug)?;
    let result = calc_dose(rules, weight_kg, &drug, step)?;

    if json {
        let report = DoseReport::new(&drug, rule, locale, weight_kg, result, step);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_result(&result, rule, locale));
    }

    Ok(())
}

fn cmd_drugs(rules: &RuleTable, locale: Locale) -> Result<()> {
    for (id, rule) in rules.iter() {
        println!("{}", id);
        println!("  {} — {}", rule.label.get(locale), rule.interval.get(locale));
        println!(
            "  {} mg/kg per dose (max {}), {} mg/kg per day (max {})",
            rule.per_dose_mg_per_kg,
            format_mg(rule.single_dose_cap_mg.round() as u32, locale),
            rule.max_daily_mg_per_kg,
            format_mg(rule.max_daily_cap_mg.round() as u32, locale),
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_chart(
    rules: &RuleTable,
    config: &Config,
    drug: &str,
    from: f64,
    to: f64,
    by: f64,
    step: Option<u32>,
    output: Option<PathBuf>,
) -> Result<()> {
    let step = resolve_step(config, step)?;
    let rows = dosing_chart(rules, &normalize_drug(drug), from, to, by, step)?;

    match output {
        Some(path) => {
            write_chart_csv(&rows, File::create(&path)?)?;
            println!("✓ Wrote {} rows to {}", rows.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_chart_csv(&rows, &mut handle)?;
            handle.flush()?;
        }
    }

    Ok(())
}
