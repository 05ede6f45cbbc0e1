//! Session loop and the seams to the outside world
//!
//! The simulation core never initiates I/O. Everything that does - the clock,
//! the input device, the display - sits behind the two traits here, and the
//! loop below owns the one mutable state cell in the whole program.

use crate::highscores::HighScores;
use crate::sim::{self, GameEvent, GameState};

/// Produces the chronological event stream driving a session
///
/// Tick and input events merged upstream must arrive one at a time in
/// arrival order. How ties between simultaneous sources are broken is the
/// source's own contract; the simulation only relies on the ordering.
pub trait EventSource {
    /// Next event, or None once the stream is exhausted
    fn next_event(&mut self) -> Option<GameEvent>;

    /// Start a fresh stream after the session has been reseeded
    fn resubscribe(&mut self);
}

/// Receives one immutable snapshot after every transition
pub trait RenderSink {
    fn present(&mut self, state: &GameState);
}

/// Replays a fixed script of events, then ends the stream
///
/// Stands in for the clock/keyboard merge when running headless; a
/// resubscribed script starts over from the top, which also restarts its
/// tick counter the way a fresh level expects.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    events: Vec<GameEvent>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(events: Vec<GameEvent>) -> Self {
        Self { events, cursor: 0 }
    }

    /// A canned run: steady ticks with a forward hop every so often and the
    /// occasional sidestep. Enough to cross the road, reach the river and
    /// eventually drown a few times.
    pub fn demo() -> Self {
        use crate::consts::GRID_STEP;
        let mut events = Vec::new();
        let mut hops = 0u32;
        for tick in 1..=1500u64 {
            events.push(GameEvent::Tick { elapsed: tick });
            if tick.is_multiple_of(90) {
                hops += 1;
                events.push(GameEvent::Move {
                    dx: 0.0,
                    dy: -GRID_STEP,
                    scoring: true,
                });
                if hops.is_multiple_of(4) {
                    events.push(GameEvent::Move {
                        dx: GRID_STEP,
                        dy: 0.0,
                        scoring: false,
                    });
                }
            }
        }
        Self::new(events)
    }
}

impl EventSource for ScriptedSource {
    fn next_event(&mut self) -> Option<GameEvent> {
        let event = self.events.get(self.cursor).copied();
        if event.is_some() {
            self.cursor += 1;
        }
        event
    }

    fn resubscribe(&mut self) {
        self.cursor = 0;
    }
}

/// Render sink that narrates the session through the log
///
/// Never mutates the snapshot it is handed.
#[derive(Debug, Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn present(&mut self, state: &GameState) {
        log::debug!(
            "tick {} | score {} | level {} | lives {} | player ({:.0},{:.0})",
            state.tick,
            state.total_score,
            state.level,
            state.lives,
            state.player.pos.x,
            state.player.pos.y,
        );
        if state.game_over {
            log::info!(
                "GAME OVER - final score {}, high score {} (restart to play again)",
                state.total_score,
                state.high_score
            );
        }
    }
}

/// Drive sessions until the stream runs dry or enough runs have finished
///
/// One event in, one snapshot out, presented before the next event is read.
/// Terminal flags are the only cancellation point: the current stream is
/// dropped, the state reseeded through `regenerate`, and the source asked
/// for a fresh stream.
pub fn run_session<S, R>(
    mut state: GameState,
    source: &mut S,
    sink: &mut R,
    scores: &mut HighScores,
    max_sessions: u32,
) -> GameState
where
    S: EventSource,
    R: RenderSink,
{
    let mut finished_runs = 0u32;
    while let Some(event) = source.next_event() {
        state = sim::next(state, &event);
        sink.present(&state);

        if state.game_over {
            let _ = scores.add_score(state.total_score, state.level, state.tick);
            finished_runs += 1;
            state = sim::regenerate(state);
            source.resubscribe();
            if finished_runs >= max_sessions {
                break;
            }
        } else if state.level_passed {
            state = sim::regenerate(state);
            source.resubscribe();
        }
    }
    state
}
