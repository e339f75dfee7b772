use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;

use typeling::app_dirs::AppDirs;
use typeling::config::{ConfigStore, FileConfigStore, TrainerConfig};
use typeling::registry::{Registry, RegistryError};
use typeling::report::{append_session_log, render_table};
use typeling::simulator::{PracticeSimulator, SimulationConfig};

/// multi-language typing practice tracker
#[derive(Parser, Debug)]
#[clap(
    version,
    about,
    long_about = "Tracks per-language typing speed and cumulative progress, derives speed growth from practice volume, and answers catch-up and most-active queries."
)]
struct Cli {
    /// output format for reports
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// run a scripted practice walkthrough
    Demo,
    /// run randomized practice sessions against the configured registry
    Simulate {
        /// languages to add before practicing (the default language is always present)
        #[clap(short, long)]
        languages: Vec<String>,

        /// number of practice sessions to run
        #[clap(short, long, default_value_t = 10)]
        sessions: usize,

        /// seed for reproducible runs
        #[clap(long)]
        seed: Option<u64>,

        /// skip appending to the practice log
        #[clap(long)]
        no_log: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo => run_demo(cli.format),
        Command::Simulate {
            languages,
            sessions,
            seed,
            no_log,
        } => run_simulate(cli.format, &languages, sessions, seed, no_log),
    }
}

fn print_report(registry: &Registry, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let reports = registry.report();
    match format {
        OutputFormat::Table => println!("{}", render_table(&reports)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

/// Report-and-continue handling for the recoverable registry errors.
fn note(result: Result<(), RegistryError>) {
    if let Err(err) = result {
        println!("skipped: {err}");
    }
}

fn print_queries(registry: &Registry) {
    match registry.most_active() {
        Some(code) => println!("most active: {code}"),
        None => println!("most active: none"),
    }
    match registry.catch_up() {
        Ok(est) => println!(
            "{} ({}) needs {} symbols to catch {} ({})",
            est.slower, est.slower_speed, est.symbols_needed, est.faster, est.faster_speed
        ),
        Err(err) => println!("catch-up: {err}"),
    }
}

/// Scripted walkthrough: practice the default language, bootstrap two more,
/// query the registry, then fill it to capacity.
fn run_demo(format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let mut registry = Registry::new(TrainerConfig::default());

    print_report(&registry, format)?;

    note(registry.record_symbols("ru", 500));
    note(registry.record_symbols("ru", 700));

    note(registry.add_language("en"));
    note(registry.record_symbols("en", 300));

    note(registry.add_language("es"));
    note(registry.record_duration("es", 2.0));

    print_report(&registry, format)?;
    print_queries(&registry);

    note(registry.add_language("fr"));
    note(registry.add_language("de"));
    note(registry.add_language("it"));

    print_report(&registry, format)?;
    Ok(())
}

fn run_simulate(
    format: OutputFormat,
    languages: &[String],
    sessions: usize,
    seed: Option<u64>,
    no_log: bool,
) -> Result<(), Box<dyn Error>> {
    let store = FileConfigStore::new();
    let mut registry = Registry::new(store.load());

    for code in languages {
        note(registry.add_language(code));
    }

    let codes: Vec<String> = registry.report().into_iter().map(|r| r.code).collect();
    let sim = PracticeSimulator::new(SimulationConfig {
        sessions,
        ..SimulationConfig::default()
    });
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    sim.run(&mut registry, &codes, &mut rng)?;

    print_report(&registry, format)?;
    print_queries(&registry);

    if !no_log {
        if let Some(path) = AppDirs::log_path() {
            append_session_log(path, &registry.report())?;
        }
    }
    Ok(())
}
