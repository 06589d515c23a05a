//! Turtle pose and the operations a symbol can map to.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// The turtle grows along its local Y axis; planar turns (`+`/`-`) rotate
/// around its local Z axis, so a 2D curve lies in the XY plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Current world-space position of the cursor.
    pub position: Vec3,

    /// Current world-space orientation.
    pub rotation: Quat,

    /// Scale applied to step length (Y) and available to consumers for
    /// segment thickness (X/Z).
    pub scale: Vec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Pose {
    /// Returns the turtle's local up direction (Y-axis) in world space.
    /// This is the direction of travel.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Returns the turtle's local forward direction (Z-axis) in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Returns the turtle's local right direction (X-axis) in world space.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Moves the turtle `distance` along its up axis.
    pub fn advance(&mut self, distance: f32) {
        self.position += self.up() * distance;
    }

    /// Rotates the turtle around its local X axis by `angle` radians (Pitch).
    pub fn rotate_local_x(&mut self, angle: f32) {
        self.rotation = (self.rotation * Quat::from_axis_angle(Vec3::X, angle)).normalize();
    }

    /// Rotates the turtle around its local Y axis by `angle` radians (Roll).
    pub fn rotate_local_y(&mut self, angle: f32) {
        self.rotation = (self.rotation * Quat::from_axis_angle(Vec3::Y, angle)).normalize();
    }

    /// Rotates the turtle around its local Z axis by `angle` radians (Yaw).
    pub fn rotate_local_z(&mut self, angle: f32) {
        self.rotation = (self.rotation * Quat::from_axis_angle(Vec3::Z, angle)).normalize();
    }
}

/// Operations that can be bound to a symbol.
///
/// Rotation variants carry a sign multiplier applied to the configured
/// turn angle, so `+` is usually `Yaw(1.0)` and `-` is `Yaw(-1.0)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleOp {
    // --- Spatial ---
    /// Advance one step and emit a segment (`F`).
    Draw,
    /// Advance one step without drawing (`f`).
    Move,
    /// Rotate around Z (`+`/`-`).
    Yaw(f32),
    /// Rotate around X (`&`/`^`).
    Pitch(f32),
    /// Rotate around Y (`\` / `/`).
    Roll(f32),
    /// Turn 180 degrees (`|`).
    TurnAround,
    /// Multiply the pose scale uniformly (`!` shrinks, `'` grows).
    Scale(f32),

    // --- Flow ---
    /// Save the pose onto the stack (`[`).
    Push,
    /// Restore the most recently pushed pose (`]`).
    Pop,
    /// No-op: symbol has no drawing meaning.
    Ignore,
}

/// One step of interpreted output, carrying the pose it leaves the turtle in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleCommand {
    /// A drawn segment from `from` to `to`.
    Draw { from: Pose, to: Pose },
    /// A pen-up move from `from` to `to`.
    Move { from: Pose, to: Pose },
    /// Orientation changed in place.
    Rotate(Pose),
    /// Scale changed in place.
    Scale(Pose),
    /// Pose pushed; `depth` is the stack depth after the push.
    Push { pose: Pose, depth: usize },
    /// Pose restored; `depth` is the stack depth after the pop.
    Pop { pose: Pose, depth: usize },
}

impl TurtleCommand {
    /// The pose the turtle is in after this command.
    pub fn pose(&self) -> &Pose {
        match self {
            Self::Draw { to, .. } | Self::Move { to, .. } => to,
            Self::Rotate(pose) | Self::Scale(pose) => pose,
            Self::Push { pose, .. } | Self::Pop { pose, .. } => pose,
        }
    }
}
