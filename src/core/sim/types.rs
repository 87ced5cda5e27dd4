//=========================================================================
// Simulation Types
//=========================================================================
//
// Plain data carried by the match: ground-plane vectors, agents, ball and
// the possession tag.
//
// All positions live on the ground plane (x, z). The vertical axis is
// constant per entity and only matters to renderers.
//
//=========================================================================

//=== Vec2 ================================================================

/// Point or displacement on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub z: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, z: 0.0 };

    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Planar Euclidean distance.
    pub fn distance(&self, other: &Vec2) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    pub fn offset(&self, dx: f32, dz: f32) -> Vec2 {
        Vec2::new(self.x + dx, self.z + dz)
    }
}

//=== Role ================================================================

/// Which side an agent plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Keyboard-controlled agent.
    Player,

    /// Scripted agent (chase and dribble AI).
    Opponent,
}

//=== Possession ==========================================================

/// Who currently controls the ball.
///
/// Stored once on the [`Ball`]; there is no second copy that could drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Possession {
    #[default]
    None,
    Player,
    Opponent,
}

impl Possession {
    /// Returns `true` if some agent holds the ball.
    pub fn is_owned(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl From<Role> for Possession {
    fn from(role: Role) -> Self {
        match role {
            Role::Player => Self::Player,
            Role::Opponent => Self::Opponent,
        }
    }
}

impl std::fmt::Display for Possession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "loose"),
            Self::Player => write!(f, "player"),
            Self::Opponent => write!(f, "opponent"),
        }
    }
}

//=== Agent ===============================================================

/// A cube on the pitch.
///
/// `speed` is the nominal per-tick step: the walking pace for the Player
/// (doubled while sprinting) and the per-axis chase pace for the Opponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Agent {
    pub position: Vec2,
    pub role: Role,
    pub speed: f32,
}

impl Agent {
    pub fn new(role: Role, position: Vec2, speed: f32) -> Self {
        Self { position, role, speed }
    }
}

//=== Ball ================================================================

/// The ball: position, velocity and current owner.
///
/// Velocity is only written on release; while owned the ball is snapped to
/// its owner every tick and the stored velocity keeps decaying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub owner: Possession,
}

impl Ball {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            owner: Possession::None,
        }
    }

    pub fn is_free(&self) -> bool {
        !self.owner.is_owned()
    }

    /// Drops possession and launches the ball with the given velocity.
    pub(crate) fn release(&mut self, velocity: Vec2) {
        self.owner = Possession::None;
        self.velocity = velocity;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
