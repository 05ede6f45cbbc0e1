//! Hopcross entry point
//!
//! Wires the headless clock/input stand-in and the logging sink into the
//! session loop, then reports the outcome.

use hopcross::driver::{LogSink, ScriptedSource, run_session};
use hopcross::sim::GameState;
use hopcross::{Config, HighScores};

fn main() {
    env_logger::init();

    let config = Config::from_env();
    log::info!(
        "starting: seed {}, tick period {}ms, {} session(s)",
        config.seed,
        config.tick_period_ms,
        config.max_sessions
    );

    let state = GameState::new(config.seed);
    let mut source = ScriptedSource::demo();
    let mut sink = LogSink;
    let mut scores = HighScores::new();

    let final_state = run_session(
        state,
        &mut source,
        &mut sink,
        &mut scores,
        config.max_sessions,
    );

    log::info!(
        "done: high score {}, {} run(s) on the board",
        final_state.high_score,
        scores.entries.len()
    );

    if config.dump_json {
        match serde_json::to_string_pretty(&final_state) {
            Ok(snapshot) => println!("{snapshot}"),
            Err(err) => log::error!("snapshot serialization failed: {err}"),
        }
        if !scores.is_empty() {
            match serde_json::to_string_pretty(&scores) {
                Ok(board) => println!("{board}"),
                Err(err) => log::error!("leaderboard serialization failed: {err}"),
            }
        }
    }
}
