//! Collision detection and resolution against the player
//!
//! The tricky part of Hopcross: one pass over every entity class the player
//! can touch, with layered outcomes that all read the same pre-resolution
//! player position.

use glam::Vec2;

use super::state::{Body, GameState};
use crate::consts::*;

/// Rectangle overlap test
///
/// Deliberately asymmetric: `a` must sit vertically inside `b`, while the
/// horizontal check is edge-inclusive in both directions. Which edge of a
/// goal zone counts as reached depends on this exact shape, so it stays
/// as-is; do not swap it for a symmetric AABB test.
#[inline]
pub fn overlapping(a: &Body, b: &Body) -> bool {
    a.pos.x + a.size.x >= b.pos.x
        && a.pos.x <= b.pos.x + b.size.x
        && a.pos.y + a.size.y <= b.pos.y + b.size.y
        && a.pos.y >= b.pos.y
}

/// Resolve every player interaction and derive the successor state
///
/// Runs after motion on every tick. All overlap sets are computed against
/// the same player position before any repositioning is applied.
pub fn resolve(mut state: GameState) -> GameState {
    let player = &state.player;

    // First matching support carries the player on the next tick
    let support_vel = state
        .supports()
        .find(|&b| overlapping(player, b))
        .map(|b| b.vel_x);
    let hit_car = state.cars().any(|b| overlapping(player, b));
    let goal_idx = state.goals.iter().position(|g| overlapping(player, g));
    let hit_croc_head = state.croc_heads.iter().any(|b| overlapping(player, b));
    let on_filled = state.filled.iter().any(|m| overlapping(player, m));
    let got_fly = overlapping(player, &state.fly);

    let y = player.pos.y;
    let in_river = (RIVER_TOP..=RIVER_BOTTOM).contains(&y) && support_vel.is_none();
    let in_top_gap = y <= RIVER_TOP && goal_idx.is_none();
    let at_edge = player.pos.x <= 0.0 || player.pos.x >= FIELD_WIDTH;
    let dead = hit_car || at_edge || in_river || hit_croc_head;

    // Player repositioning, then the velocity handoff
    if dead || goal_idx.is_some() {
        state.player = state
            .player
            .at(Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    } else if in_top_gap || on_filled {
        let pos = state.player.pos + Vec2::new(0.0, GRID_STEP);
        state.player = state.player.at(pos);
    }
    state.player = state.player.with_vel(support_vel.unwrap_or(0.0));

    if got_fly {
        state.fly = state.fly.at(Vec2::new(PARK_X, PARK_Y));
        state.fly_score += FLY_BONUS;
    }

    if let Some(idx) = goal_idx {
        let slot = state.goals[idx].pos;
        state.last_goal = Some(state.goals[idx].id.clone());
        state.reached_goals += 1;
        // The marker takes the slot and the zone retires off-field, so a
        // zone counts once and a later visit lands on the marker instead.
        state.filled[idx] = state.filled[idx].at(slot);
        state.goals[idx] = state.goals[idx].at(Vec2::new(slot.x, PARK_Y));
        state.goal_score += GOAL_BONUS;
        log::debug!(
            "goal {} reached ({}/{})",
            state.last_goal.as_deref().unwrap_or(""),
            state.reached_goals,
            state.goals.len()
        );
        if state.reached_goals as usize == state.goals.len() {
            state.level_passed = true;
        }
    }

    state.total_score = state.goal_score + state.fly_score + state.move_score;
    state.high_score = state.high_score.max(state.total_score);

    let lives_before = state.lives;
    if dead {
        state.lives = lives_before.saturating_sub(1);
        log::debug!("player down at tick {}, {} lives left", state.tick, state.lives);
    }
    // The flag reads the pre-decrement count, so it trails the last life by
    // one transition. Latching keeps a restart-raised flag from clearing.
    state.game_over = state.game_over || lives_before == 0;

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::BodyKind;

    fn player_at(x: f32, y: f32) -> Body {
        Body::new(
            "player",
            BodyKind::Player,
            Vec2::new(x, y),
            Vec2::new(PLAYER_SIZE, PLAYER_SIZE),
            0.0,
            0,
        )
    }

    fn state_with_player(x: f32, y: f32) -> GameState {
        let mut state = GameState::new(5);
        state.player = player_at(x, y);
        state
    }

    /// A road coordinate clear of every hazard in the level-1 layout
    const SAFE_X: f32 = 500.0;

    #[test]
    fn test_overlap_requires_vertical_containment() {
        let a = player_at(100.0, 290.0);
        let b = Body::new("car", BodyKind::Car, Vec2::new(100.0, 290.0), Vec2::new(50.0, 50.0), 0.0, 0);
        assert!(overlapping(&a, &b));
        // The taller body is not inside the smaller one; the test is not
        // symmetric.
        assert!(!overlapping(&b, &a));
    }

    #[test]
    fn test_overlap_horizontal_edges_touch() {
        let a = player_at(60.0, 290.0);
        let b = Body::new("car", BodyKind::Car, Vec2::new(100.0, 290.0), Vec2::new(50.0, 50.0), 0.0, 0);
        // Right edge of a (100.0) just reaches b
        assert!(overlapping(&a, &b));
        let far = player_at(49.0, 290.0);
        assert!(!overlapping(&far, &b));
    }

    #[test]
    fn test_car_hit_costs_a_life_and_repositions() {
        let mut state = state_with_player(0.0, 0.0);
        let car = state.car_lanes[0][0].clone();
        state.player = player_at(car.pos.x + 5.0, car.pos.y);
        let lives = state.lives;
        let out = resolve(state);
        assert_eq!(out.lives, lives - 1);
        assert_eq!(out.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    }

    #[test]
    fn test_river_without_support_is_lethal() {
        // Row 140 holds planks starting at x 140; x 20 is open water
        let state = state_with_player(20.0, 140.0);
        let lives = state.lives;
        let out = resolve(state);
        assert_eq!(out.lives, lives - 1);
        assert_eq!(out.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    }

    #[test]
    fn test_support_overrides_river_death() {
        let mut state = GameState::new(5);
        let plank = state.plank_lanes[0][0].clone();
        state.player = player_at(plank.pos.x + 10.0, plank.pos.y);
        let lives = state.lives;
        let out = resolve(state);
        assert_eq!(out.lives, lives);
        assert_eq!(out.player.vel_x, plank.vel_x);
        assert_eq!(out.player.pos.x, plank.pos.x + 10.0);
    }

    #[test]
    fn test_croc_body_carries_but_head_kills() {
        let mut state = GameState::new(5);
        let body = state.croc_bodies[0].clone();
        state.player = player_at(body.pos.x + 10.0, body.pos.y);
        let out = resolve(state);
        assert_eq!(out.player.vel_x, body.vel_x);

        let mut state = GameState::new(5);
        let head = state.croc_heads[0].clone();
        // Past the walkable part, fully onto the head
        state.player = player_at(head.pos.x + 6.0, head.pos.y);
        let lives = state.lives;
        let out = resolve(state);
        assert_eq!(out.lives, lives - 1);
    }

    #[test]
    fn test_field_edge_is_lethal() {
        let state = state_with_player(0.0, PLAYER_START_Y);
        let lives = state.lives;
        let out = resolve(state);
        assert_eq!(out.lives, lives - 1);
        assert_eq!(out.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    }

    #[test]
    fn test_goal_reach_scores_and_repositions() {
        let mut state = state_with_player(GOAL_XS[2] + 5.0, GOAL_ROW_Y);
        state.move_score = 30;
        state.total_score = 30;
        let out = resolve(state);
        assert_eq!(out.reached_goals, 1);
        assert_eq!(out.last_goal.as_deref(), Some("goal-2"));
        assert_eq!(out.goal_score, GOAL_BONUS);
        assert_eq!(out.total_score, GOAL_BONUS + 30);
        assert_eq!(out.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
        // No life lost on a successful crossing
        assert_eq!(out.lives, START_LIVES);
    }

    #[test]
    fn test_goal_reach_swaps_zone_for_marker() {
        let state = state_with_player(GOAL_XS[0] + 5.0, GOAL_ROW_Y);
        let out = resolve(state);
        assert_eq!(out.filled[0].pos, Vec2::new(GOAL_XS[0], GOAL_ROW_Y));
        assert_eq!(out.goals[0].pos.y, PARK_Y);
        // Untouched slots keep their zones in place
        assert_eq!(out.goals[1].pos.y, GOAL_ROW_Y);
        assert_eq!(out.filled[1].pos.y, PARK_Y);
    }

    #[test]
    fn test_filled_slot_pushes_player_back() {
        let first = resolve(state_with_player(GOAL_XS[0] + 5.0, GOAL_ROW_Y));
        let mut again = first.clone();
        again.player = player_at(GOAL_XS[0] + 5.0, GOAL_ROW_Y);
        let out = resolve(again);
        // Pushed back a row, no second count, no extra score
        assert_eq!(out.player.pos.y, GOAL_ROW_Y + GRID_STEP);
        assert_eq!(out.reached_goals, 1);
        assert_eq!(out.goal_score, GOAL_BONUS);
    }

    #[test]
    fn test_top_row_between_goals_pushes_player_back() {
        // x 100 lies in the gap between the first two goal columns
        let state = state_with_player(100.0, GOAL_ROW_Y);
        let out = resolve(state);
        assert_eq!(out.player.pos, Vec2::new(100.0, GOAL_ROW_Y + GRID_STEP));
    }

    #[test]
    fn test_all_goals_reached_passes_level() {
        let mut state = GameState::new(5);
        for i in 0..GOAL_XS.len() {
            state.player = player_at(GOAL_XS[i] + 5.0, GOAL_ROW_Y);
            state = resolve(state);
        }
        assert!(state.level_passed);
        assert_eq!(state.reached_goals as usize, GOAL_XS.len());
        assert_eq!(state.goal_score, GOAL_BONUS * GOAL_XS.len() as u64);
    }

    #[test]
    fn test_fly_pickup_scores_and_parks() {
        let mut state = state_with_player(SAFE_X, PLAYER_START_Y);
        state.fly = state.fly.at(Vec2::new(SAFE_X, PLAYER_START_Y));
        let out = resolve(state);
        assert_eq!(out.fly_score, FLY_BONUS);
        assert_eq!(out.fly.pos, Vec2::new(PARK_X, PARK_Y));
        assert_eq!(out.total_score, FLY_BONUS);
    }

    #[test]
    fn test_fly_and_goal_both_score_on_same_visit() {
        let mut state = state_with_player(GOAL_XS[1] + 5.0, GOAL_ROW_Y);
        state.fly = state.fly.at(Vec2::new(GOAL_XS[1] + 5.0, GOAL_ROW_Y));
        let out = resolve(state);
        assert_eq!(out.goal_score, GOAL_BONUS);
        assert_eq!(out.fly_score, FLY_BONUS);
        assert_eq!(out.total_score, GOAL_BONUS + FLY_BONUS);
    }

    #[test]
    fn test_high_score_tracks_total() {
        let state = state_with_player(GOAL_XS[0] + 5.0, GOAL_ROW_Y);
        let out = resolve(state);
        assert_eq!(out.high_score, out.total_score);

        // A session reset keeps the high score above a smaller total
        let mut poorer = state_with_player(SAFE_X, PLAYER_START_Y);
        poorer.high_score = 900;
        let out = resolve(poorer);
        assert_eq!(out.high_score, 900);
        assert!(out.high_score >= out.total_score);
    }

    #[test]
    fn test_safe_spot_resolves_to_identity() {
        let state = state_with_player(SAFE_X, PLAYER_START_Y);
        let expected = state.clone();
        let out = resolve(state);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_game_over_trails_last_life_by_one_transition() {
        let mut state = state_with_player(20.0, 140.0);
        state.lives = 1;
        let out = resolve(state);
        assert_eq!(out.lives, 0);
        assert!(!out.game_over);

        // Any later resolution reads the zeroed count and raises the flag
        let next = resolve(out);
        assert!(next.game_over);
        assert_eq!(next.lives, 0);
    }

    #[test]
    fn test_lives_never_go_negative() {
        let mut state = state_with_player(20.0, 140.0);
        state.lives = 0;
        let out = resolve(state);
        assert_eq!(out.lives, 0);
        assert!(out.game_over);
    }
}
