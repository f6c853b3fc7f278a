use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::{SimulationPlan, TestScenario};
use crate::logic::seeds::SeedInfo;
use crate::logic::simulation::{SimulationConfig, SimulationSummary, simulate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
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
        scenario: &TestScenario,
        seeds: &[SeedInfo],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (player: {} seed: {})",
                        scenario.name.bright_white(),
                        scenario.plan.style,
                        seed.label()
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: &SeedInfo,
        iterations: usize,
    ) -> ScenarioResult {
        let (successes, failures, performance_data) =
            self.run_simulation_iterations(&scenario.plan, seed, iterations);

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            seed: seed.label(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }

    fn run_simulation_iterations(
        &self,
        plan: &SimulationPlan,
        seed: &SeedInfo,
        iterations: usize,
    ) -> (usize, Vec<String>, Vec<Duration>) {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            let source = seed.source_for_iteration(i);
            let config = SimulationConfig {
                source: source.clone(),
                style: plan.style,
                policy_seed: seed.seed.rotate_left(17) ^ u64::try_from(i).unwrap_or(0),
            };

            let verdict = simulate(config).and_then(|summary| {
                match evaluate_expectations(plan, &summary) {
                    Ok(()) => Ok(summary),
                    Err(err) => Err(err.context(describe(&summary))),
                }
            });

            match verdict {
                Ok(summary) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{} passed ({duration:?}) {}",
                            i + 1,
                            iterations,
                            describe(&summary)
                        );
                    }
                }
                Err(err) => {
                    let message = format!("Iteration {} ({source:?}): {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        (successes, failures, performance_data)
    }
}

fn evaluate_expectations(plan: &SimulationPlan, summary: &SimulationSummary) -> anyhow::Result<()> {
    plan.expectations
        .iter()
        .try_for_each(|expectation| expectation(summary))
}

fn describe(summary: &SimulationSummary) -> String {
    format!(
        "{} {} lives {}/{} marked {} lines {} caller {:?} tally {}/{}/{} @{}ms",
        summary.share_code.as_deref().unwrap_or("custom"),
        summary.outcome,
        summary.lives,
        summary.starting_lives,
        summary.marked,
        summary.lines,
        summary.caller_index,
        summary.tally.matches,
        summary.tally.misses,
        summary.tally.wrong_taps,
        summary.virtual_ms
    )
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Vec::<u128>::deserialize(deserializer)?;
        Ok(millis
            .into_iter()
            .map(|m| Duration::from_millis(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::get_scenario;

    #[test]
    fn smoke_passes_for_numeric_and_code_seeds() {
        let tester = LogicTester::new(false);
        let scenario = get_scenario("smoke").unwrap();
        let seeds = [
            SeedInfo::from_numeric(1337),
            SeedInfo::from_share_code(
                tempo_game::decode_to_seed("TP-SOL10").unwrap(),
                "TP-SOL10".into(),
            ),
        ];
        let results = tester.run_scenario(&scenario, &seeds, 3);
        assert_eq!(results.len(), 2);
        for result in results {
            assert!(result.passed, "{:?}", result.failures);
            assert_eq!(result.successful_iterations, 3);
            assert_eq!(result.performance_data.len(), 3);
        }
    }

    #[test]
    fn idle_scenario_holds_its_expectations() {
        let tester = LogicTester::new(false);
        let scenario = get_scenario("idle").unwrap();
        let results = tester.run_scenario(&scenario, &[SeedInfo::from_numeric(5)], 4);
        assert!(results[0].passed, "{:?}", results[0].failures);
    }

    #[test]
    fn failing_expectation_is_reported_with_context() {
        let tester = LogicTester::new(false);
        let mut scenario = get_scenario("idle").unwrap();
        scenario.plan = scenario.plan.expect(|summary| {
            anyhow::ensure!(summary.outcome == tempo_game::Outcome::Victory, "idle never wins");
            Ok(())
        });
        let results = tester.run_scenario(&scenario, &[SeedInfo::from_numeric(5)], 1);
        assert!(!results[0].passed);
        assert!(results[0].failures[0].contains("idle never wins"));
        assert!(results[0].failures[0].contains("game_over"));
    }

    #[test]
    fn durations_serialize_as_millis() {
        let result = ScenarioResult {
            scenario_name: "smoke".into(),
            seed: "1".into(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(12),
            performance_data: vec![Duration::from_millis(12)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 12);
        assert_eq!(json["performance_data"][0], 12);
    }
}
