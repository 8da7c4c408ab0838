use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use degrees::{load_data, report, resolve_person, Config, Dataset, PersonId, ResolutionPolicy, Search};

/// Degrees of separation between two people through the movies they starred in
#[derive(Debug, Parser)]
#[command(name = "degrees", version)]
struct Cli {
    /// Directory holding people.csv, movies.csv and stars.csv
    directory: Option<PathBuf>,

    /// Name of the first person (asked on stdin if omitted)
    #[arg(long)]
    source: Option<String>,

    /// Name of the second person (asked on stdin if omitted)
    #[arg(long)]
    target: Option<String>,

    /// How to pick between people sharing a name
    #[arg(long, value_enum)]
    resolve: Option<ResolutionPolicy>,

    /// Config file (defaults to $DEGREES_CONFIG, then ./degrees.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags win over the config file.
    fn apply_to(&self, config: &mut Config) {
        if let Some(directory) = &self.directory {
            config.data.directory = directory.clone();
        }
        if let Some(policy) = self.resolve {
            config.search.resolution = policy;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    // RUST_LOG takes precedence over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    config.validate()?;

    println!("Loading data...");
    let dataset = load_data(&config.data.directory)
        .with_context(|| format!("Failed to load data from {}", config.data.directory.display()))?;
    println!("Data loaded.");

    run(
        &dataset,
        &cli,
        config.search.resolution,
        io::stdin().lock(),
        io::stdout().lock(),
    )
}

/// Resolves both people, searches, and writes the report. Names missing from
/// the command line and any disambiguation answers are read from `input`.
fn run<R: BufRead, W: Write>(
    dataset: &Dataset,
    cli: &Cli,
    policy: ResolutionPolicy,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let source = person_for(dataset, cli.source.as_deref(), policy, &mut input, &mut output)?;
    let target = person_for(dataset, cli.target.as_deref(), policy, &mut input, &mut output)?;

    let path = Search::new(dataset).shortest_path(&source, &target)?;
    report::write_report(&mut output, dataset, &source, path.as_deref())?;
    Ok(())
}

fn person_for<R: BufRead, W: Write>(
    dataset: &Dataset,
    given: Option<&str>,
    policy: ResolutionPolicy,
    input: &mut R,
    output: &mut W,
) -> Result<PersonId> {
    let name = match given {
        Some(name) => name.to_string(),
        None => ask_name(input, output)?,
    };
    let person_id = resolve_person(dataset, &name, policy, &mut *input, &mut *output)?;
    Ok(person_id)
}

fn ask_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Name: ")?;
    output.flush()?;

    let mut name = String::new();
    input.read_line(&mut name)?;
    Ok(name.trim().to_string())
}
