//=========================================================================
// Pitch Layout
//=========================================================================
//
// Static scene description for renderers: field, goals, entity sizes and
// the constant heights of each entity above the ground plane.
//
// None of these values feed back into the simulation.
//
//=========================================================================

/// Axis-aligned box dimensions (width on x, height on y, depth on z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Scene geometry a renderer builds once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchLayout {
    /// Field extent along x (goal to goal).
    pub field_length: f32,
    /// Field extent along z.
    pub field_width: f32,
    pub goal_size: BoxSize,
    /// Centre of the goal the Opponent attacks (x, y, z).
    pub player_goal: [f32; 3],
    /// Centre of the goal the Player attacks (x, y, z).
    pub opponent_goal: [f32; 3],
    pub agent_size: BoxSize,
    pub ball_radius: f32,
    /// Height of an agent's centre above the ground.
    pub agent_height: f32,
    /// Height of the ball's centre above the ground.
    pub ball_height: f32,
}

impl PitchLayout {
    pub const STANDARD: Self = Self {
        field_length: 40.0,
        field_width: 20.0,
        goal_size: BoxSize { x: 1.0, y: 5.0, z: 6.0 },
        player_goal: [-20.5, 2.5, 0.0],
        opponent_goal: [20.5, 2.5, 0.0],
        agent_size: BoxSize { x: 1.0, y: 2.0, z: 1.0 },
        ball_radius: 0.5,
        agent_height: 1.0,
        ball_height: 0.5,
    };

    /// Returns `true` if (x, z) lies on the field surface.
    ///
    /// Purely informational: entities are never clamped to the field.
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x.abs() <= self.field_length / 2.0 && z.abs() <= self.field_width / 2.0
    }
}

impl Default for PitchLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}
