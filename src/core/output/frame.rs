//=========================================================================
// Frame Snapshot
//=========================================================================
//
// Immutable per-tick view of the match handed to rendering sinks.
//
// Positions are lifted from the ground plane into 3D using the constant
// heights of the pitch layout: x and z come from the simulation, y never
// changes.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::sim::{MatchState, PitchLayout, Possession, Vec2};

//=== EntityId ============================================================

/// Identifies one renderable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityId {
    Player,
    Opponent,
    Ball,
}

impl EntityId {
    pub const ALL: [EntityId; 3] = [EntityId::Player, EntityId::Opponent, EntityId::Ball];
}

//=== FrameSnapshot =======================================================

/// Everything a renderer needs to draw one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub possession: Possession,
    pub player: [f32; 3],
    pub opponent: [f32; 3],
    pub ball: [f32; 3],
}

impl FrameSnapshot {
    /// Captures the current state of `state` using the standard pitch.
    pub fn from_state(state: &MatchState) -> Self {
        Self::with_layout(state, &PitchLayout::STANDARD)
    }

    /// Captures the current state of `state`, placing entities at the
    /// heights given by `layout`.
    pub fn with_layout(state: &MatchState, layout: &PitchLayout) -> Self {
        Self {
            tick: state.tick(),
            possession: state.possession(),
            player: lift(state.player.position, layout.agent_height),
            opponent: lift(state.opponent.position, layout.agent_height),
            ball: lift(state.ball.position, layout.ball_height),
        }
    }

    /// Position of a single entity.
    pub fn position(&self, id: EntityId) -> [f32; 3] {
        match id {
            EntityId::Player => self.player,
            EntityId::Opponent => self.opponent,
            EntityId::Ball => self.ball,
        }
    }

    /// (entity, position) updates in a fixed order.
    pub fn positions(&self) -> impl Iterator<Item = (EntityId, [f32; 3])> + '_ {
        EntityId::ALL.into_iter().map(move |id| (id, self.position(id)))
    }
}

fn lift(position: Vec2, height: f32) -> [f32; 3] {
    [position.x, height, position.z]
}

//=========================================================================
// Unit Tests
//=========================================================================
