use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

use crate::tester::ScenarioResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Totals {
    total: usize,
    passed: usize,
    failed: usize,
}

impl Totals {
    fn of(results: &[ScenarioResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn success_rate(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }
}

pub fn generate_console_report<W: Write + ?Sized>(
    writer: &mut W,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    let totals = Totals::of(results);

    writeln!(writer)?;
    writeln!(writer, "{}", "📊 Heart Hunt Test Results".bright_cyan().bold())?;
    writeln!(writer, "{}", "==========================".cyan())?;
    writeln!(writer, "Total runs: {}", totals.total)?;
    writeln!(writer, "Passed: {}", totals.passed.to_string().green())?;
    writeln!(writer, "Failed: {}", totals.failed.to_string().red())?;
    writeln!(writer, "Success rate: {:.1}%", totals.success_rate())?;
    writeln!(writer, "Total time: {total_duration:?}")?;
    writeln!(writer)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            writer,
            "{status} {} (seed {})",
            result.scenario_name.bold(),
            result.seed
        )?;
        writeln!(
            writer,
            "   Iterations: {}/{} successful",
            result.successful_iterations, result.iterations_run
        )?;
        writeln!(writer, "   Average time: {:?}", result.average_duration)?;
        if !result.failures.is_empty() {
            writeln!(writer, "   Failures:")?;
            for failure in &result.failures {
                writeln!(writer, "     • {}", failure.red())?;
            }
        }
        writeln!(writer)?;
    }

    let fastest = results.iter().min_by_key(|r| r.average_duration);
    let slowest = results.iter().max_by_key(|r| r.average_duration);
    if let (Some(fastest), Some(slowest)) = (fastest, slowest) {
        writeln!(writer, "{}", "⚡ Performance Summary".bright_yellow().bold())?;
        writeln!(writer, "{}", "=====================".yellow())?;
        writeln!(
            writer,
            "Fastest: {} ({:?})",
            fastest.scenario_name.green(),
            fastest.average_duration
        )?;
        writeln!(
            writer,
            "Slowest: {} ({:?})",
            slowest.scenario_name.yellow(),
            slowest.average_duration
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    total: usize,
    passed: usize,
    failed: usize,
    results: &'a [ScenarioResult],
}

pub fn generate_json_report<W: Write + ?Sized>(
    writer: &mut W,
    results: &[ScenarioResult],
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let totals = Totals::of(results);
    let report = JsonReport {
        generated_at,
        total: totals.total,
        passed: totals.passed,
        failed: totals.failed,
        results,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    writer: &mut W,
    results: &[ScenarioResult],
    generated_at: DateTime<Utc>,
) -> Result<()> {
    let totals = Totals::of(results);

    writeln!(writer, "# Heart Hunt Test Results\n")?;
    writeln!(writer, "_Generated {}_\n", generated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(writer, "## Summary\n")?;
    writeln!(writer, "- **Total runs**: {}", totals.total)?;
    writeln!(writer, "- **Passed**: {}", totals.passed)?;
    writeln!(writer, "- **Failed**: {}", totals.failed)?;
    writeln!(writer, "- **Success rate**: {:.1}%\n", totals.success_rate())?;

    if results.is_empty() {
        writeln!(writer, "_No scenarios executed._")?;
        return Ok(());
    }

    writeln!(writer, "## Detailed Results\n")?;
    writeln!(writer, "| Scenario | Seed | Iterations | Average |")?;
    writeln!(writer, "|---|---|---|---|")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            writer,
            "| {status} {} | {} | {}/{} | {:?} |",
            result.scenario_name,
            result.seed,
            result.successful_iterations,
            result.iterations_run,
            result.average_duration
        )?;
    }

    let failing: Vec<_> = results.iter().filter(|r| !r.passed).collect();
    if !failing.is_empty() {
        writeln!(writer, "\n## Failures\n")?;
        for result in failing {
            writeln!(writer, "### {} (seed {})\n", result.scenario_name, result.seed)?;
            for failure in &result.failures {
                writeln!(writer, "- {failure}")?;
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}
