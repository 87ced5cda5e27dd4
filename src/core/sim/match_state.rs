//=========================================================================
// Match State
//=========================================================================
//
// The whole game: one Player, one Opponent, one Ball, advanced one tick
// at a time from a snapshot of held controls.
//
// Tick pipeline (order is significant):
// ```text
//   1. speed          base or sprint
//   2. move player    four independent axis checks (no normalisation)
//   3. possession     player first, then opponent, radius 1.5
//   4. player owns    snap ball, then shoot / pass / lob (last wins)
//   5. opponent owns  dribble toward x = -19, snap ball, shoot past -18
//   6. otherwise      opponent chases the ball on x and z independently
//   7. ball flight    integrate if free, friction always
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

//=== Internal Dependencies ===============================================

use super::controls::ControlFlags;
use super::types::{Agent, Ball, Possession, Role, Vec2};

//=== Tuning ==============================================================

/// Player walking pace per tick.
pub const PLAYER_SPEED: f32 = 0.1;

/// Player pace per tick while sprinting.
pub const PLAYER_SPRINT_SPEED: f32 = 0.2;

/// Opponent chase pace per tick, per axis.
pub const OPPONENT_CHASE_SPEED: f32 = 0.05;

/// Opponent pace per tick while dribbling.
pub const OPPONENT_DRIBBLE_SPEED: f32 = 0.08;

/// Strict upper bound on agent-to-ball distance for a pickup.
pub const POSSESSION_RADIUS: f32 = 1.5;

/// Ball lead on x in front of its owner (the Opponent uses the negation).
pub const LEAD_OFFSET: f32 = 1.0;

/// Per-tick velocity retention.
pub const FRICTION: f32 = 0.98;

/// The Opponent dribbles while its x is above this line.
pub const OPPONENT_DRIBBLE_LIMIT_X: f32 = -19.0;

/// The Opponent shoots once its x is below this line.
pub const OPPONENT_SHOT_LINE_X: f32 = -18.0;

/// Player shot velocity along x, toward the goal at positive x.
pub const SHOT_SPEED: f32 = 0.5;
/// Shot deflection is drawn from `[-SHOT_SPREAD / 2, SHOT_SPREAD / 2)`.
pub const SHOT_SPREAD: f32 = 0.5;
/// Ground pass launch velocity.
pub const PASS_VELOCITY: Vec2 = Vec2::new(0.3, 0.0);
/// Lob launch velocity. Drifts toward negative z.
pub const LOB_VELOCITY: Vec2 = Vec2::new(0.4, -0.2);
/// Opponent shot velocity along x, toward the goal at negative x.
pub const OPPONENT_SHOT_SPEED: f32 = -0.5;
/// Opponent deflection is drawn from
/// `[-OPPONENT_SHOT_SPREAD / 2, OPPONENT_SHOT_SPREAD / 2)`.
pub const OPPONENT_SHOT_SPREAD: f32 = 0.3;

/// Player kickoff position.
pub const PLAYER_SPAWN: Vec2 = Vec2::new(-10.0, 0.0);
/// Opponent kickoff position.
pub const OPPONENT_SPAWN: Vec2 = Vec2::new(10.0, 0.0);
/// Ball kickoff position, the centre spot.
pub const BALL_SPAWN: Vec2 = Vec2::ZERO;

//=== Release =============================================================

/// How the ball left its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseKind {
    Shot,
    Pass,
    Lob,
    OpponentShot,
}

/// The last release of the ball: who, how, and the launch velocity.
///
/// `velocity` is the value written at release time, before the friction
/// step of that same tick is applied to the ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub tick: u64,
    pub by: Role,
    pub kind: ReleaseKind,
    pub velocity: Vec2,
}

//=== MatchState ==========================================================

/// Positions of both agents and the ball, advanced once per tick.
///
/// Fields are public so renderers and tests can read (and set up) the
/// scene directly; the only mutation path during play is [`update`].
///
/// [`update`]: MatchState::update
#[derive(Clone)]
pub struct MatchState {
    pub player: Agent,
    pub opponent: Agent,
    pub ball: Ball,
    tick: u64,
    last_release: Option<Release>,
    rng: ChaCha8Rng,
}

impl MatchState {
    //--- Construction -----------------------------------------------------

    /// Kickoff layout with a deterministic deflection sequence.
    pub fn new(seed: u64) -> Self {
        Self::with_positions(PLAYER_SPAWN, OPPONENT_SPAWN, BALL_SPAWN, seed)
    }

    /// Kickoff layout seeded from OS entropy.
    pub fn from_entropy() -> Self {
        let mut state = Self::new(0);
        state.rng = ChaCha8Rng::from_entropy();
        state
    }

    /// Custom layout; the ball starts free and at rest.
    pub fn with_positions(player: Vec2, opponent: Vec2, ball: Vec2, seed: u64) -> Self {
        Self {
            player: Agent::new(Role::Player, player, PLAYER_SPEED),
            opponent: Agent::new(Role::Opponent, opponent, OPPONENT_CHASE_SPEED),
            ball: Ball::new(ball),
            tick: 0,
            last_release: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Current owner of the ball.
    pub fn possession(&self) -> Possession {
        self.ball.owner
    }

    /// Number of completed updates.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Most recent release, if the ball has ever been kicked.
    pub fn last_release(&self) -> Option<Release> {
        self.last_release
    }

    pub fn agent(&self, role: Role) -> &Agent {
        match role {
            Role::Player => &self.player,
            Role::Opponent => &self.opponent,
        }
    }

    //--- Update -----------------------------------------------------------

    /// Advances the match by one tick.
    pub fn update(&mut self, controls: ControlFlags) {
        let previous_owner = self.ball.owner;

        self.move_player(&controls);
        self.resolve_possession();

        if self.ball.owner == Possession::Player {
            self.player_actions(&controls);
        }

        if self.ball.owner == Possession::Opponent {
            self.opponent_dribble();
        } else {
            self.opponent_chase();
        }

        self.ball_flight();

        if self.ball.owner != previous_owner {
            debug!(
                target: "sim",
                "tick {}: possession {} -> {}",
                self.tick, previous_owner, self.ball.owner
            );
        }

        self.tick += 1;
    }

    //--- Pipeline Steps ---------------------------------------------------

    fn move_player(&mut self, controls: &ControlFlags) {
        let speed = if controls.sprint {
            PLAYER_SPRINT_SPEED
        } else {
            self.player.speed
        };

        let position = &mut self.player.position;
        if controls.up {
            position.z -= speed;
        }
        if controls.down {
            position.z += speed;
        }
        if controls.left {
            position.x -= speed;
        }
        if controls.right {
            position.x += speed;
        }
    }

    fn resolve_possession(&mut self) {
        let ball = self.ball.position;

        if self.player.position.distance(&ball) < POSSESSION_RADIUS {
            self.ball.owner = Possession::Player;
        } else if self.opponent.position.distance(&ball) < POSSESSION_RADIUS {
            self.ball.owner = Possession::Opponent;
        }
    }

    /// Snaps the ball to the Player, then applies every held action in
    /// order. Each one overwrites the previous, so lob beats pass beats shot.
    fn player_actions(&mut self, controls: &ControlFlags) {
        self.ball.position = self.player.position.offset(LEAD_OFFSET, 0.0);

        if controls.shoot {
            let deflection = self.deflection(SHOT_SPREAD);
            self.release(Role::Player, ReleaseKind::Shot, Vec2::new(SHOT_SPEED, deflection));
        }
        if controls.pass {
            self.release(Role::Player, ReleaseKind::Pass, PASS_VELOCITY);
        }
        if controls.lob {
            self.release(Role::Player, ReleaseKind::Lob, LOB_VELOCITY);
        }
    }

    fn opponent_dribble(&mut self) {
        if self.opponent.position.x > OPPONENT_DRIBBLE_LIMIT_X {
            self.opponent.position.x -= OPPONENT_DRIBBLE_SPEED;
        }
        self.ball.position = self.opponent.position.offset(-LEAD_OFFSET, 0.0);

        if self.opponent.position.x < OPPONENT_SHOT_LINE_X {
            let deflection = self.deflection(OPPONENT_SHOT_SPREAD);
            self.release(
                Role::Opponent,
                ReleaseKind::OpponentShot,
                Vec2::new(OPPONENT_SHOT_SPEED, deflection),
            );
        }
    }

    /// Each axis check reads the position left by the one before it, so a
    /// gap smaller than one step makes the Opponent step over and back.
    fn opponent_chase(&mut self) {
        let ball = self.ball.position;
        let speed = self.opponent.speed;
        let position = &mut self.opponent.position;

        if ball.x > position.x {
            position.x += speed;
        }
        if ball.x < position.x {
            position.x -= speed;
        }
        if ball.z > position.z {
            position.z += speed;
        }
        if ball.z < position.z {
            position.z -= speed;
        }
    }

    fn ball_flight(&mut self) {
        if self.ball.is_free() {
            self.ball.position.x += self.ball.velocity.x;
            self.ball.position.z += self.ball.velocity.z;
        }

        // Applied while owned too; velocity is only overwritten on release.
        self.ball.velocity.x *= FRICTION;
        self.ball.velocity.z *= FRICTION;
    }

    //--- Helpers ----------------------------------------------------------

    /// Uniform sample in `[-spread / 2, spread / 2)`.
    fn deflection(&mut self, spread: f32) -> f32 {
        (self.rng.gen::<f32>() - 0.5) * spread
    }

    fn release(&mut self, by: Role, kind: ReleaseKind, velocity: Vec2) {
        self.ball.release(velocity);
        self.last_release = Some(Release {
            tick: self.tick,
            by,
            kind,
            velocity,
        });

        debug!(
            target: "sim",
            "tick {}: {:?} {:?} at ({:.2}, {:.2}) with velocity ({:.3}, {:.3})",
            self.tick, by, kind, self.ball.position.x, self.ball.position.z, velocity.x, velocity.z
        );
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl std::fmt::Debug for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchState")
            .field("tick", &self.tick)
            .field("player", &self.player.position)
            .field("opponent", &self.opponent.position)
            .field("ball", &self.ball)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sim::Control;

    //--- Test Helpers -----------------------------------------------------

    const EPS: f32 = 1e-4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    /// Opponent parked far away so it never interferes.
    fn far_opponent() -> Vec2 {
        Vec2::new(1000.0, 1000.0)
    }

    fn player_with_ball() -> MatchState {
        let mut state = MatchState::with_positions(
            Vec2::ZERO,
            far_opponent(),
            Vec2::new(1.0, 0.0),
            7,
        );
        state.update(ControlFlags::NONE);
        assert_eq!(state.possession(), Possession::Player);
        state
    }

    fn opponent_with_ball_at(x: f32) -> MatchState {
        let mut state = MatchState::with_positions(
            Vec2::new(1000.0, 1000.0),
            Vec2::new(x, 0.0),
            Vec2::new(x - 1.0, 0.0),
            7,
        );
        state.ball.owner = Possession::Opponent;
        state
    }

    //=====================================================================
    // Construction
    //=====================================================================

    #[test]
    fn kickoff_layout() {
        let state = MatchState::new(1);
        assert_eq!(state.player.position, Vec2::new(-10.0, 0.0));
        assert_eq!(state.opponent.position, Vec2::new(10.0, 0.0));
        assert_eq!(state.ball.position, Vec2::ZERO);
        assert_eq!(state.possession(), Possession::None);
        assert_eq!(state.player.role, Role::Player);
        assert_eq!(state.opponent.role, Role::Opponent);
        assert_eq!(state.tick(), 0);
        assert!(state.last_release().is_none());
    }

    #[test]
    fn update_counts_ticks() {
        let mut state = MatchState::new(1);
        for _ in 0..5 {
            state.update(ControlFlags::NONE);
        }
        assert_eq!(state.tick(), 5);
    }

    //=====================================================================
    // Player Movement
    //=====================================================================

    #[test]
    fn movement_axes() {
        let mut state = MatchState::with_positions(
            Vec2::ZERO,
            far_opponent(),
            Vec2::new(50.0, 50.0),
            0,
        );

        state.update(ControlFlags::NONE.with(Control::MoveUp));
        assert!(approx(state.player.position.z, -0.1));

        state.update(ControlFlags::NONE.with(Control::MoveDown));
        assert!(approx(state.player.position.z, 0.0));

        state.update(ControlFlags::NONE.with(Control::MoveLeft));
        assert!(approx(state.player.position.x, -0.1));

        state.update(ControlFlags::NONE.with(Control::MoveRight));
        assert!(approx(state.player.position.x, 0.0));
    }

    #[test]
    fn sprint_doubles_speed() {
        let mut state = MatchState::with_positions(
            Vec2::ZERO,
            far_opponent(),
            Vec2::new(50.0, 50.0),
            0,
        );
        state.update(ControlFlags::from_controls([Control::MoveRight, Control::Sprint]));
        assert!(approx(state.player.position.x, 0.2));
    }

    #[test]
    fn diagonal_movement_is_not_normalized() {
        let mut state = MatchState::with_positions(
            Vec2::ZERO,
            far_opponent(),
            Vec2::new(50.0, 50.0),
            0,
        );
        state.update(ControlFlags::from_controls([Control::MoveRight, Control::MoveDown]));

        let travelled = state.player.position.distance(&Vec2::ZERO);
        assert!(approx(travelled, 0.1 * 2f32.sqrt()));
    }

    #[test]
    fn opposite_directions_cancel() {
        let mut state = MatchState::with_positions(
            Vec2::ZERO,
            far_opponent(),
            Vec2::new(50.0, 50.0),
            0,
        );
        state.update(ControlFlags::from_controls([Control::MoveLeft, Control::MoveRight]));
        assert!(approx(state.player.position.x, 0.0));
    }

    #[test]
    fn positions_are_not_clamped() {
        let mut state = MatchState::with_positions(
            Vec2::new(19.9, 0.0),
            far_opponent(),
            Vec2::new(-50.0, 50.0),
            0,
        );
        for _ in 0..100 {
            state.update(ControlFlags::from_controls([Control::MoveRight, Control::Sprint]));
        }
        assert!(state.player.position.x > 39.0);
    }

    //=====================================================================
    // Possession
    //=====================================================================

    #[test]
    fn player_walks_onto_ball() {
        let mut state = MatchState::new(3);
        assert!(approx(state.player.position.distance(&state.ball.position), 10.0));

        let mut ticks = 0;
        while state.possession() == Possession::None && ticks < 200 {
            state.update(ControlFlags::NONE.with(Control::MoveRight));
            ticks += 1;
        }

        assert_eq!(state.possession(), Possession::Player);
        assert!(ticks >= 85, "picked up after only {} ticks", ticks);
        assert!(ticks <= 87, "picked up after {} ticks", ticks);
    }

    #[test]
    fn pickup_radius_is_strict() {
        let mut state = MatchState::with_positions(
            Vec2::new(-1.5, 0.0),
            far_opponent(),
            Vec2::ZERO,
            0,
        );
        state.update(ControlFlags::NONE);
        assert_eq!(state.possession(), Possession::None);

        let mut state = MatchState::with_positions(
            Vec2::new(-1.49, 0.0),
            far_opponent(),
            Vec2::ZERO,
            0,
        );
        state.update(ControlFlags::NONE);
        assert_eq!(state.possession(), Possession::Player);
    }

    #[test]
    fn player_checked_before_opponent() {
        let mut state = MatchState::with_positions(
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::ZERO,
            0,
        );
        state.update(ControlFlags::NONE);
        assert_eq!(state.possession(), Possession::Player);
    }

    #[test]
    fn player_steals_from_opponent() {
        let mut state = opponent_with_ball_at(0.0);
        state.player.position = Vec2::new(-1.5, 0.5);

        state.update(ControlFlags::NONE);

        assert_eq!(state.possession(), Possession::Player);
    }

    #[test]
    fn opponent_picks_up_loose_ball() {
        let mut state = MatchState::with_positions(
            Vec2::new(-30.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::ZERO,
            0,
        );
        state.update(ControlFlags::NONE);
        assert_eq!(state.possession(), Possession::Opponent);
    }

    #[test]
    fn possession_kept_when_nobody_in_range() {
        let mut state = MatchState::with_positions(
            Vec2::new(-30.0, 0.0),
            far_opponent(),
            Vec2::ZERO,
            0,
        );
        state.ball.owner = Possession::Player;

        // Ball snaps to the player even from afar: ownership is sticky.
        state.update(ControlFlags::NONE);

        assert_eq!(state.possession(), Possession::Player);
        assert_eq!(state.ball.position, Vec2::new(-29.0, 0.0));
    }

    //=====================================================================
    // Player Actions
    //=====================================================================

    #[test]
    fn owned_ball_sticks_ahead_of_player() {
        let mut state = player_with_ball();
        let moves = [
            ControlFlags::NONE.with(Control::MoveUp),
            ControlFlags::from_controls([Control::MoveRight, Control::Sprint]),
            ControlFlags::from_controls([Control::MoveLeft, Control::MoveDown]),
        ];

        for controls in moves.iter().cycle().take(30) {
            state.update(*controls);
            assert_eq!(state.possession(), Possession::Player);
            assert_eq!(state.ball.position.x, state.player.position.x + 1.0);
            assert_eq!(state.ball.position.z, state.player.position.z);
        }
    }

    #[test]
    fn shoot_releases_with_deflection() {
        let mut state = player_with_ball();
        state.update(ControlFlags::NONE.with(Control::Shoot));

        assert_eq!(state.possession(), Possession::None);

        let release = state.last_release().expect("shot should be recorded");
        assert_eq!(release.kind, ReleaseKind::Shot);
        assert_eq!(release.by, Role::Player);
        assert_eq!(release.velocity.x, 0.5);
        assert!((-0.25..=0.25).contains(&release.velocity.z));

        // Friction of the release tick already applied to the stored velocity.
        assert!(approx(state.ball.velocity.x, 0.5 * FRICTION));
    }

    #[test]
    fn shot_deflection_stays_in_range() {
        for seed in 0..200 {
            let mut state = MatchState::with_positions(
                Vec2::ZERO,
                far_opponent(),
                Vec2::new(1.0, 0.0),
                seed,
            );
            state.ball.owner = Possession::Player;
            state.update(ControlFlags::NONE.with(Control::Shoot));

            let vz = state.last_release().map(|r| r.velocity.z).unwrap_or(f32::NAN);
            assert!((-0.25..0.25).contains(&vz), "seed {} gave {}", seed, vz);
        }
    }

    #[test]
    fn pass_releases_straight() {
        let mut state = player_with_ball();
        state.update(ControlFlags::NONE.with(Control::Pass));

        assert_eq!(state.possession(), Possession::None);
        let release = state.last_release().unwrap();
        assert_eq!(release.kind, ReleaseKind::Pass);
        assert_eq!(release.velocity, Vec2::new(0.3, 0.0));
    }

    #[test]
    fn lob_releases_up_field() {
        let mut state = player_with_ball();
        state.update(ControlFlags::NONE.with(Control::Lob));

        let release = state.last_release().unwrap();
        assert_eq!(release.kind, ReleaseKind::Lob);
        assert_eq!(release.velocity, Vec2::new(0.4, -0.2));
    }

    #[test]
    fn simultaneous_actions_last_wins() {
        let mut state = player_with_ball();
        state.update(ControlFlags::from_controls([Control::Shoot, Control::Pass, Control::Lob]));

        let release = state.last_release().unwrap();
        assert_eq!(release.kind, ReleaseKind::Lob);
        assert_eq!(release.velocity, LOB_VELOCITY);

        let mut state = player_with_ball();
        state.update(ControlFlags::from_controls([Control::Shoot, Control::Pass]));
        assert_eq!(state.last_release().unwrap().kind, ReleaseKind::Pass);
    }

    #[test]
    fn released_ball_flies_the_same_tick() {
        let mut state = player_with_ball();
        let start = state.ball.position;

        state.update(ControlFlags::NONE.with(Control::Pass));

        assert!(approx(state.ball.position.x, start.x + 0.3));
    }

    #[test]
    fn actions_ignored_without_possession() {
        let mut state = MatchState::with_positions(
            Vec2::new(-30.0, 0.0),
            far_opponent(),
            Vec2::ZERO,
            0,
        );
        state.update(ControlFlags::from_controls([Control::Shoot, Control::Pass, Control::Lob]));

        assert!(state.last_release().is_none());
        assert_eq!(state.ball.velocity, Vec2::ZERO);
    }

    //=====================================================================
    // Opponent AI
    //=====================================================================

    #[test]
    fn opponent_dribbles_toward_player_goal() {
        let mut state = opponent_with_ball_at(0.0);

        for _ in 0..20 {
            let before = state.opponent.position.x;
            state.update(ControlFlags::NONE);

            assert_eq!(state.possession(), Possession::Opponent);
            assert!(approx(before - state.opponent.position.x, 0.08));
            assert_eq!(state.ball.position.x, state.opponent.position.x - 1.0);
            assert_eq!(state.ball.position.z, state.opponent.position.z);
        }
    }

    #[test]
    fn opponent_shoots_past_the_line() {
        let mut state = opponent_with_ball_at(-18.42);
        state.update(ControlFlags::NONE);

        assert_eq!(state.possession(), Possession::None);
        let release = state.last_release().unwrap();
        assert_eq!(release.by, Role::Opponent);
        assert_eq!(release.kind, ReleaseKind::OpponentShot);
        assert_eq!(release.velocity.x, -0.5);
        assert!((-0.15..=0.15).contains(&release.velocity.z));
    }

    #[test]
    fn opponent_shoots_from_full_dribble() {
        let mut state = opponent_with_ball_at(0.0);

        let mut ticks = 0;
        while state.possession() == Possession::Opponent && ticks < 1000 {
            state.update(ControlFlags::NONE);
            ticks += 1;
        }

        assert_eq!(state.possession(), Possession::None);
        assert!(state.opponent.position.x < -18.0);
        assert!(state.opponent.position.x > -18.1);
        assert!(state.ball.velocity.x < 0.0);
    }

    #[test]
    fn opponent_stops_dribbling_at_limit() {
        let mut state = opponent_with_ball_at(-19.0);
        state.update(ControlFlags::NONE);

        assert_eq!(state.opponent.position.x, -19.0);
    }

    #[test]
    fn opponent_chases_loose_ball_diagonally() {
        let mut state = MatchState::with_positions(
            Vec2::new(-30.0, 30.0),
            Vec2::new(10.0, 10.0),
            Vec2::ZERO,
            0,
        );
        state.update(ControlFlags::NONE);

        assert!(approx(state.opponent.position.x, 9.95));
        assert!(approx(state.opponent.position.z, 9.95));
    }

    #[test]
    fn opponent_chase_jitters_inside_one_step() {
        let mut state = MatchState::with_positions(
            Vec2::new(-30.0, 30.0),
            Vec2::new(9.98, 5.0),
            Vec2::new(10.0, 5.0),
            0,
        );
        state.opponent.position = Vec2::new(9.98, 20.0);
        state.update(ControlFlags::NONE);

        // Stepped over (+0.05) then straight back (-0.05).
        assert!(approx(state.opponent.position.x, 9.98));
    }

    #[test]
    fn opponent_chases_ball_carried_by_player() {
        let mut state = player_with_ball();
        state.opponent.position = Vec2::new(10.0, 3.0);

        state.update(ControlFlags::NONE.with(Control::MoveRight));

        assert_eq!(state.possession(), Possession::Player);
        assert!(approx(state.opponent.position.x, 9.95));
        assert!(approx(state.opponent.position.z, 2.95));
    }

    #[test]
    fn opponent_does_not_chase_on_its_shot_tick() {
        let mut state = opponent_with_ball_at(-18.42);
        state.update(ControlFlags::NONE);

        assert_eq!(state.possession(), Possession::None);
        assert!(approx(state.opponent.position.x, -18.5));
        assert_eq!(state.opponent.position.z, 0.0);
    }

    //=====================================================================
    // Ball Kinematics
    //=====================================================================

    #[test]
    fn friction_after_one_tick() {
        let mut state = MatchState::with_positions(
            Vec2::new(-30.0, 30.0),
            far_opponent(),
            Vec2::ZERO,
            0,
        );
        state.ball.velocity = Vec2::new(1.0, 0.0);

        state.update(ControlFlags::NONE);

        assert!(approx(state.ball.velocity.x, 0.98));
        assert_eq!(state.ball.velocity.z, 0.0);
        assert!(approx(state.ball.position.x, 1.0));
    }

    #[test]
    fn free_ball_decays_geometrically() {
        let mut state = MatchState::with_positions(
            Vec2::new(-30.0, 30.0),
            Vec2::new(-1000.0, -1000.0),
            Vec2::ZERO,
            0,
        );
        state.ball.velocity = Vec2::new(1.0, 0.0);

        let mut previous = state.ball.velocity.x;
        for _ in 0..230 {
            state.update(ControlFlags::NONE);
            assert_eq!(state.possession(), Possession::None);
            assert!(state.ball.velocity.x < previous);
            previous = state.ball.velocity.x;
        }

        assert!(state.ball.velocity.x > 0.0, "decay never reaches zero");
        assert!(state.ball.velocity.x < 0.01);
        // Travel converges toward 1 / (1 - 0.98) = 50.
        assert!(state.ball.position.x > 49.0 && state.ball.position.x < 50.0);
    }

    #[test]
    fn friction_applies_while_owned() {
        let mut state = player_with_ball();
        state.ball.velocity = Vec2::new(0.5, 0.0);

        state.update(ControlFlags::NONE);

        assert!(approx(state.ball.velocity.x, 0.49));
        // Owned ball is not integrated.
        assert_eq!(state.ball.position.x, state.player.position.x + 1.0);
    }

    //=====================================================================
    // Determinism
    //=====================================================================

    #[test]
    fn same_seed_same_match() {
        let script = [
            ControlFlags::NONE.with(Control::MoveRight),
            ControlFlags::from_controls([Control::MoveRight, Control::Sprint]),
            ControlFlags::NONE.with(Control::Shoot),
            ControlFlags::NONE.with(Control::MoveUp),
        ];

        let mut a = MatchState::new(99);
        let mut b = MatchState::new(99);
        for controls in script.iter().cycle().take(600) {
            a.update(*controls);
            b.update(*controls);
        }

        assert_eq!(a.player, b.player);
        assert_eq!(a.opponent, b.opponent);
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.last_release(), b.last_release());
    }

    #[test]
    fn ownership_always_single() {
        let mut state = MatchState::new(5);
        let script = [
            ControlFlags::NONE.with(Control::MoveRight),
            ControlFlags::NONE.with(Control::Shoot),
            ControlFlags::NONE.with(Control::MoveDown),
        ];

        for controls in script.iter().cycle().take(900) {
            state.update(*controls);
            match state.possession() {
                Possession::Player => {
                    assert_eq!(state.ball.position.x, state.player.position.x + 1.0)
                }
                Possession::Opponent => {
                    assert_eq!(state.ball.position.x, state.opponent.position.x - 1.0)
                }
                Possession::None => {}
            }
        }
    }
}
