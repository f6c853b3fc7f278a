//! Named scenarios the CLI can run.
use anyhow::{Result, bail, ensure};
use tempo_game::Outcome;

use crate::logic::policy::PlayStyle;
use crate::logic::simulation::SimulationSummary;

pub type Expectation = fn(&SimulationSummary) -> Result<()>;

/// Player style plus what every round it plays must satisfy.
#[derive(Clone)]
pub struct SimulationPlan {
    pub style: PlayStyle,
    pub expectations: Vec<Expectation>,
}

impl SimulationPlan {
    #[must_use]
    pub fn new(style: PlayStyle) -> Self {
        Self {
            style,
            expectations: vec![no_violations, finished],
        }
    }

    #[must_use]
    pub fn expect(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }
}

#[derive(Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: SimulationPlan,
}

const SCENARIOS: [(&str, &str); 5] = [
    ("smoke", "One perfect round per seed; must end in LOTERÍA"),
    ("perfect", "Perfect play keeps every life and wins"),
    ("idle", "No input at all; misses cost the whole round"),
    ("sloppy", "Hesitant player; any ending, invariants hold"),
    ("reckless", "Player who sometimes taps wrong cells"),
];

#[must_use]
pub fn list_scenarios() -> &'static [(&'static str, &'static str)] {
    &SCENARIOS
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let plan = match name.to_lowercase().as_str() {
        "smoke" => SimulationPlan::new(PlayStyle::Perfect).expect(victory),
        "perfect" => SimulationPlan::new(PlayStyle::Perfect)
            .expect(victory)
            .expect(no_lives_lost),
        "idle" => SimulationPlan::new(PlayStyle::Idle)
            .expect(game_over)
            .expect(no_matches),
        "sloppy" => SimulationPlan::new(PlayStyle::Sloppy),
        "reckless" => SimulationPlan::new(PlayStyle::Reckless).expect(wrong_taps_cost_lives),
        _ => return None,
    };
    let name = SCENARIOS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map_or_else(|| name.to_string(), |(key, _)| (*key).to_string());
    Some(TestScenario { name, plan })
}

fn no_violations(summary: &SimulationSummary) -> Result<()> {
    if let Some(first) = summary.violations.first() {
        bail!(
            "{} invariant violation(s), first: {first}",
            summary.violations.len()
        );
    }
    Ok(())
}

fn finished(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.outcome.is_finished(),
        "round still in progress after {} steps",
        summary.steps
    );
    Ok(())
}

fn victory(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.outcome == Outcome::Victory,
        "expected victory, got {}",
        summary.outcome
    );
    Ok(())
}

fn game_over(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.outcome == Outcome::GameOver && summary.lives == 0,
        "expected game over, got {} with {} lives",
        summary.outcome,
        summary.lives
    );
    Ok(())
}

fn no_lives_lost(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.lives == summary.starting_lives,
        "lost {} lives",
        summary.starting_lives - summary.lives
    );
    Ok(())
}

fn no_matches(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.tally.matches == 0,
        "{} matches without input",
        summary.tally.matches
    );
    Ok(())
}

fn wrong_taps_cost_lives(summary: &SimulationSummary) -> Result<()> {
    let lost = u32::from(summary.starting_lives - summary.lives);
    let charged = summary.tally.misses + summary.tally.wrong_taps;
    ensure!(
        lost == charged,
        "lost {lost} lives for {charged} penalties"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key).unwrap();
            assert_eq!(scenario.name, *key);
            assert!(scenario.plan.expectations.len() >= 2);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(get_scenario("SMOKE").unwrap().name, "smoke");
        assert!(get_scenario("boss-fight").is_none());
    }
}
