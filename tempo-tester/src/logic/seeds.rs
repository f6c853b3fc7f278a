use anyhow::{Result, bail};
use std::collections::HashSet;
use tempo_game::seed::WORD_LIST;
use tempo_game::{decode_to_seed, encode_friendly};

use crate::logic::simulation::RoundSource;

/// A CLI seed argument, resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedInfo {
    pub seed: u64,
    /// Set when the argument was a share code; the round is replayed exactly.
    pub code: Option<String>,
}

impl SeedInfo {
    #[must_use]
    pub const fn from_numeric(seed: u64) -> Self {
        Self { seed, code: None }
    }

    #[must_use]
    pub const fn from_share_code(seed: u64, code: String) -> Self {
        Self {
            seed,
            code: Some(code),
        }
    }

    /// Round for iteration `i`: share codes replay their round first, then
    /// later iterations fan out from the decoded seed.
    #[must_use]
    pub fn source_for_iteration(&self, i: usize) -> RoundSource {
        match &self.code {
            Some(code) if i == 0 => RoundSource::ShareCode(code.clone()),
            _ => RoundSource::Seed(
                self.seed
                    .wrapping_add(u64::try_from(i).unwrap_or(u64::MAX)),
            ),
        }
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.code
            .clone()
            .unwrap_or_else(|| self.seed.to_string())
    }
}

/// Resolve CLI seed tokens: integers, share codes, or `all` for every code.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<SeedInfo>> {
    let mut pending: Vec<SeedInfo> = Vec::new();

    for token in tokens {
        if token.is_empty() {
            continue;
        }
        if token.eq_ignore_ascii_case("all") {
            pending.extend(all_share_code_seeds());
            continue;
        }
        if let Ok(value) = token.parse::<i64>() {
            pending.push(SeedInfo::from_numeric(value.unsigned_abs()));
            continue;
        }
        if let Ok(value) = token.parse::<u64>() {
            pending.push(SeedInfo::from_numeric(value));
            continue;
        }
        if let Some(seed) = decode_to_seed(token) {
            pending.push(SeedInfo::from_share_code(seed, encode_friendly(seed)));
            continue;
        }
        bail!("Unrecognized seed token: {token}");
    }

    let mut seen = HashSet::new();
    pending.retain(|info| seen.insert((info.seed, info.code.is_some())));

    if pending.is_empty() {
        pending.push(SeedInfo::from_numeric(1337));
    }
    Ok(pending)
}

fn all_share_code_seeds() -> Vec<SeedInfo> {
    WORD_LIST
        .iter()
        .flat_map(|word| (0..100).map(move |nn| format!("TP-{word}{nn:02}")))
        .filter_map(|code| decode_to_seed(&code).map(|seed| SeedInfo::from_share_code(seed, code)))
        .collect()
}
