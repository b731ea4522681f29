//! Headless demo driver
//!
//! Runs a batch of episodes with a simple closed-loop heuristic (jump
//! whenever the body sits below the next gap center) and prints one JSON
//! summary line per episode. Rendering, input polling and argument parsing
//! live outside this crate; this binary exists to exercise the stepped
//! driver end to end.

use serde::Serialize;

use jetdash::consts::SIM_DT;
use jetdash::{Action, Env, SimConfig};

const EPISODES: u64 = 8;
/// Hard stop at five simulated minutes per episode
const MAX_TICKS: u64 = 30 * 60 * 5;
/// Jump-threshold bias below the gap center, in observation units. Keeps
/// the impulse chatter away from the upper gap edge.
const FOLLOW_MARGIN: f32 = 0.125;

#[derive(Debug, Serialize)]
struct EpisodeSummary {
    seed: u64,
    score: u32,
    ticks: u64,
    won: bool,
    sim_seconds: f32,
}

fn main() {
    env_logger::init();

    let config = SimConfig::default();

    for seed in 0..EPISODES {
        let mut env = Env::new(config.clone(), seed);
        let mut obs = env.reset();
        let mut ticks = 0u64;

        loop {
            // Observation components grow upward, so "body below the next
            // gap center" reads as obs[0] < obs[2].
            let action = if obs[0] < obs[2] - FOLLOW_MARGIN {
                Action::Jump
            } else {
                Action::Idle
            };
            let outcome = env.step(action);
            obs = outcome.observation;
            ticks += 1;

            if outcome.done || ticks >= MAX_TICKS {
                break;
            }
        }

        let state = env.state();
        log::info!(
            "episode {seed}: score {} after {ticks} ticks (won: {})",
            state.score,
            state.is_won()
        );
        log::debug!("final snapshot: {:?}", state.snapshot());

        let summary = EpisodeSummary {
            seed,
            score: state.score,
            ticks,
            won: state.is_won(),
            sim_seconds: ticks as f32 * SIM_DT,
        };
        match serde_json::to_string(&summary) {
            Ok(line) => println!("{line}"),
            Err(err) => log::error!("failed to serialize episode summary: {err}"),
        }
    }
}
