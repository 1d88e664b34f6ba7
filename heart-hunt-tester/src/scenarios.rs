//! Scenario catalog driven against the game logic with an in-memory store.

use std::time::Duration;

use anyhow::{Result, bail, ensure};
use heart_hunt_game::constants::{FLAG_GAME_COMPLETED, FLAG_HEARTS_FOUND, FLAG_TTL, TARGET_COUNT};
use heart_hunt_game::{
    Flags, GuardDecision, HeartHunt, HuntError, HuntPhase, HuntSignal, MemoryFlagStore,
    RewardGuard, TargetId,
};
use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

pub type ScenarioFn = fn(&mut ScenarioCtx) -> Result<()>;

/// Per-iteration inputs handed to a scenario.
pub struct ScenarioCtx {
    pub seed: u64,
    pub rng: ChaCha20Rng,
    pub store: MemoryFlagStore,
}

impl ScenarioCtx {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            store: MemoryFlagStore::new(),
        }
    }

    /// A hunt sharing this context's store.
    #[must_use]
    pub fn hunt(&self) -> HeartHunt<MemoryFlagStore> {
        HeartHunt::new(self.flags())
    }

    #[must_use]
    pub fn flags(&self) -> Flags<MemoryFlagStore> {
        Flags::new(self.store.clone())
    }

    fn shuffled_ids(&mut self) -> Vec<TargetId> {
        let mut ids: Vec<TargetId> = (0..TARGET_COUNT)
            .filter_map(|i| TargetId::try_from(i).ok())
            .collect();
        ids.shuffle(&mut self.rng);
        ids
    }
}

#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    pub run: ScenarioFn,
}

const CATALOG: &[Scenario] = &[
    Scenario {
        key: "smoke",
        description: "Start, find every heart, unlock the reward",
        run: smoke,
    },
    Scenario {
        key: "duplicates",
        description: "Repeated clicks never double count or re-complete",
        run: duplicates,
    },
    Scenario {
        key: "partial",
        description: "An unfinished hunt keeps the reward locked",
        run: partial,
    },
    Scenario {
        key: "restart",
        description: "Starting again relocks a finished hunt",
        run: restart,
    },
    Scenario {
        key: "unknown-target",
        description: "Unknown target ids are rejected without side effects",
        run: unknown_target,
    },
    Scenario {
        key: "fresh-guard",
        description: "Missing or malformed flags deny the reward",
        run: fresh_guard,
    },
    Scenario {
        key: "expiry",
        description: "Completion flags lapse after their lifetime",
        run: expiry,
    },
    Scenario {
        key: "random-orders",
        description: "Seeded click sequences keep progress consistent",
        run: random_orders,
    },
];

#[must_use]
pub fn catalog() -> &'static [Scenario] {
    CATALOG
}

#[must_use]
pub fn find_scenario(key: &str) -> Option<Scenario> {
    CATALOG.iter().copied().find(|s| s.key == key)
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.description)).collect()
}

/// Expand `all` into every catalog key, keeping explicit names in order.
#[must_use]
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut out: Vec<String> = requested.iter().filter(|s| *s != "all").cloned().collect();
    if requested.iter().any(|s| s == "all") {
        for scenario in CATALOG {
            if !out.iter().any(|s| s == scenario.key) {
                out.push(scenario.key.to_string());
            }
        }
    }
    out
}

fn expect_guard(ctx: &ScenarioCtx, expected: GuardDecision) -> Result<()> {
    let decision = RewardGuard::evaluate(&ctx.flags());
    ensure!(
        decision == expected,
        "guard returned {decision:?}, expected {expected:?}"
    );
    Ok(())
}

fn expect_flag(ctx: &ScenarioCtx, key: &str, expected: &str) -> Result<()> {
    let stored = ctx.flags().get_flag(key);
    ensure!(
        stored.as_deref() == Some(expected),
        "flag {key} is {stored:?}, expected {expected:?}"
    );
    Ok(())
}

fn smoke(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut hunt = ctx.hunt();
    hunt.start();
    expect_flag(ctx, FLAG_HEARTS_FOUND, "0")?;
    expect_flag(ctx, FLAG_GAME_COMPLETED, "false")?;
    expect_guard(ctx, GuardDecision::Redirect)?;

    let mut completions = 0;
    for id in ctx.shuffled_ids() {
        let signals = hunt.discover(id)?;
        completions += signals
            .iter()
            .filter(|s| matches!(s, HuntSignal::HuntCompleted))
            .count();
    }

    ensure!(completions == 1, "completion fired {completions} times");
    ensure!(hunt.phase() == HuntPhase::Completed, "phase is {:?}", hunt.phase());
    expect_flag(ctx, FLAG_HEARTS_FOUND, &TARGET_COUNT.to_string())?;
    expect_flag(ctx, FLAG_GAME_COMPLETED, "true")?;
    expect_guard(ctx, GuardDecision::Grant)
}

fn duplicates(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut hunt = ctx.hunt();
    hunt.start();
    let ids = ctx.shuffled_ids();

    let first = ids[0];
    hunt.discover(first)?;
    let repeats = ctx.rng.gen_range(1..=5);
    for _ in 0..repeats {
        let signals = hunt.discover(first)?;
        ensure!(signals.is_empty(), "duplicate click emitted {signals:?}");
    }
    ensure!(hunt.progress().found == 1, "found {}", hunt.progress().found);
    expect_flag(ctx, FLAG_HEARTS_FOUND, "1")?;

    for &id in &ids[1..] {
        hunt.discover(id)?;
    }
    for &id in &ids {
        let signals = hunt.discover(id)?;
        ensure!(signals.is_empty(), "click after completion emitted {signals:?}");
    }
    expect_guard(ctx, GuardDecision::Grant)
}

fn partial(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut hunt = ctx.hunt();
    hunt.start();
    let ids = ctx.shuffled_ids();
    let take = ctx.rng.gen_range(0..TARGET_COUNT);

    for &id in &ids[..take] {
        hunt.discover(id)?;
    }

    ensure!(hunt.phase() == HuntPhase::InProgress, "phase is {:?}", hunt.phase());
    ensure!(
        usize::from(hunt.progress().remaining()) == TARGET_COUNT - take,
        "remaining {}",
        hunt.progress().remaining()
    );
    expect_flag(ctx, FLAG_HEARTS_FOUND, &take.to_string())?;
    expect_flag(ctx, FLAG_GAME_COMPLETED, "false")?;
    expect_guard(ctx, GuardDecision::Redirect)
}

fn restart(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut hunt = ctx.hunt();
    hunt.start();
    for id in ctx.shuffled_ids() {
        hunt.discover(id)?;
    }
    expect_guard(ctx, GuardDecision::Grant)?;

    hunt.start();
    ensure!(hunt.phase() == HuntPhase::InProgress, "phase is {:?}", hunt.phase());
    ensure!(
        hunt.targets().iter().all(|t| !t.discovered),
        "targets survived a restart"
    );
    expect_flag(ctx, FLAG_HEARTS_FOUND, "0")?;
    expect_guard(ctx, GuardDecision::Redirect)
}

fn unknown_target(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut hunt = ctx.hunt();
    let stray: TargetId = ctx.rng.gen_range(3..=TargetId::MAX);

    match hunt.discover(0) {
        Err(HuntError::UnknownTarget { known: 0, .. }) => {}
        other => bail!("discover before start returned {other:?}"),
    }

    hunt.start();
    let before = hunt.snapshot();
    match hunt.discover(stray) {
        Err(HuntError::UnknownTarget { id, .. }) if id == stray => {}
        other => bail!("discover({stray}) returned {other:?}"),
    }
    ensure!(hunt.snapshot() == before, "rejected click changed the hunt");
    expect_flag(ctx, FLAG_HEARTS_FOUND, "0")
}

fn fresh_guard(ctx: &mut ScenarioCtx) -> Result<()> {
    expect_guard(ctx, GuardDecision::Redirect)?;

    for tampered in ["TRUE", "1", "yes", "true ", "false"] {
        ctx.store.insert_raw(FLAG_GAME_COMPLETED, tampered, FLAG_TTL);
        expect_guard(ctx, GuardDecision::Redirect)?;
    }

    ctx.store.set_unavailable(true);
    let mut hunt = ctx.hunt();
    hunt.start();
    for id in ctx.shuffled_ids() {
        hunt.discover(id)?;
    }
    ensure!(
        hunt.phase() == HuntPhase::Completed,
        "storage outage stopped the hunt"
    );
    expect_guard(ctx, GuardDecision::Redirect)
}

fn expiry(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut hunt = ctx.hunt();
    hunt.start();
    for id in ctx.shuffled_ids() {
        hunt.discover(id)?;
    }

    let early = ctx.rng.gen_range(1..FLAG_TTL.as_secs());
    ctx.store.advance(Duration::from_secs(early));
    expect_guard(ctx, GuardDecision::Grant)?;

    ctx.store.advance(FLAG_TTL);
    expect_guard(ctx, GuardDecision::Redirect)?;
    ensure!(
        ctx.flags().get_flag(FLAG_HEARTS_FOUND).is_none(),
        "progress flag outlived its lifetime"
    );
    ensure!(
        ctx.store.live_len() == 0,
        "{} flags still live after expiry",
        ctx.store.live_len()
    );
    Ok(())
}

fn random_orders(ctx: &mut ScenarioCtx) -> Result<()> {
    let mut hunt = ctx.hunt();
    hunt.start();

    let clicks = ctx.rng.gen_range(TARGET_COUNT..TARGET_COUNT * 4);
    let mut seen: Vec<TargetId> = Vec::new();
    let mut completions = 0;

    for _ in 0..clicks {
        let id: TargetId = ctx.rng.gen_range(0..3);
        let signals = hunt.discover(id)?;
        if !seen.contains(&id) {
            seen.push(id);
        }
        completions += signals
            .iter()
            .filter(|s| matches!(s, HuntSignal::HuntCompleted))
            .count();

        let found = usize::from(hunt.progress().found);
        ensure!(
            found == seen.len(),
            "seed {}: found {found} but {} distinct ids clicked",
            ctx.seed,
            seen.len()
        );
        expect_flag(ctx, FLAG_HEARTS_FOUND, &found.to_string())?;
    }

    let expected = usize::from(seen.len() == TARGET_COUNT);
    ensure!(
        completions == expected,
        "seed {}: completion fired {completions} times, expected {expected}",
        ctx.seed
    );
    Ok(())
}
