use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenarios::{Scenario, ScenarioCtx};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester {
    verbose: bool,
}

impl LogicTester {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &Scenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.key.bright_white()
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &Scenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut timings = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let mut ctx = ScenarioCtx::new(iteration_seed);
            let start = Instant::now();
            let outcome = (scenario.run)(&mut ctx);
            let elapsed = start.elapsed();

            match outcome {
                Ok(()) => {
                    successes += 1;
                    timings.push(elapsed);
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{iterations} passed ({elapsed:?})",
                            i + 1
                        );
                    }
                }
                Err(err) => {
                    log::debug!("{} seed {iteration_seed} failed: {err:#}", scenario.key);
                    let message = format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if timings.is_empty() {
            Duration::ZERO
        } else {
            timings.iter().sum::<Duration>() / u32::try_from(timings.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.key.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::find_scenario;

    fn failing(_: &mut ScenarioCtx) -> anyhow::Result<()> {
        anyhow::bail!("always fails")
    }

    #[test]
    fn passing_scenario_counts_every_iteration() {
        let scenario = find_scenario("smoke").unwrap();
        let results = LogicTester::new(false).run_scenario(&scenario, &[1, 2], 3);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed && r.successful_iterations == 3));
        assert_eq!(results[1].seed, 2);
    }

    #[test]
    fn failures_carry_iteration_seed() {
        let scenario = Scenario {
            key: "broken",
            description: "",
            run: failing,
        };
        let result = LogicTester::new(false).run_single_scenario(&scenario, 10, 2);
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.average_duration, Duration::ZERO);
        assert!(result.failures[1].contains("seed 11"));
    }

    #[test]
    fn results_serialize_durations_as_micros() {
        let result = ScenarioResult {
            scenario_name: "smoke".into(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_micros(1500),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 1500);
        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.average_duration, Duration::from_micros(1500));
    }
}
