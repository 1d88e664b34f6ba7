mod reports;
mod scenarios;
mod tester;
mod util;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use scenarios::{expand_scenarios, find_scenario, list_scenarios};
use tester::{LogicTester, ScenarioResult};
use util::{parse_seeds, split_csv};

#[derive(Debug, Parser)]
#[command(name = "heart-hunt-tester", version)]
#[command(about = "Automated scenario testing for the heart hunt game logic")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&split_csv(&args.scenarios));
    let seeds = parse_seeds(&args.seeds)?;
    let (results, unknown) = run_scenarios(&args, &scenarios, &seeds);

    write_reports(&args, &results, start_time)?;

    if unknown > 0 || results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:16} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "💘 Heart Hunt Automated Tester".bright_magenta().bold());
    println!("{}", "==============================".magenta());
}

/// Run every requested scenario; returns the results and how many names were
/// not in the catalog.
fn run_scenarios(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
) -> (Vec<ScenarioResult>, usize) {
    println!("{}", "🧠 Running Logic Scenarios".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(args.verbose);
    let mut results = Vec::new();
    let mut unknown = 0;

    for name in scenarios {
        let Some(scenario) = find_scenario(name) else {
            eprintln!("⚠️  Unknown scenario: {}", name.yellow());
            unknown += 1;
            continue;
        };
        let scenario_results = logic_tester.run_scenario(&scenario, seeds, args.iterations);
        for result in &scenario_results {
            let mark = if result.passed { "✅".green() } else { "❌".red() };
            println!(
                "{mark} {} seed {} ({}/{})",
                result.scenario_name, result.seed, result.successful_iterations, result.iterations_run
            );
        }
        results.extend(scenario_results);
    }

    (results, unknown)
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    let generated_at = Utc::now();

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results, generated_at)?,
        "markdown" => reports::generate_markdown_report(&mut output_target, results, generated_at)?,
        _ => {
            reports::generate_console_report(&mut output_target, results, start_time.elapsed())?;
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target
        .flush_inner()
        .context("failed to flush report output")?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
