//! Star, velocity and sprite types for the starfield.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A single star in canvas pixels; `z` is its depth scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, new)]
pub struct Star {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Depth; larger is closer and moves faster.
    pub z: f64,
}

/// Current and target drift velocity plus the zoom speed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    /// Current horizontal drift.
    pub x: f64,
    /// Current vertical drift.
    pub y: f64,
    /// Target horizontal drift, fed by the pointer.
    pub tx: f64,
    /// Target vertical drift, fed by the pointer.
    pub ty: f64,
    /// Depth gained per frame.
    pub z: f64,
}

/// Where a pointer event came from. Touch drags the stars along with the
/// finger; mouse movement pushes them the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    /// Mouse or trackpad.
    Mouse,
    /// Touch screen.
    Touch,
}

impl PointerKind {
    pub(super) fn direction(self) -> f64 {
        match self {
            PointerKind::Mouse => -1.0,
            PointerKind::Touch => 1.0,
        }
    }
}

/// What the renderer needs to draw one star this frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, new)]
pub struct StarSprite {
    /// Horizontal position in canvas pixels.
    pub x: f64,
    /// Vertical position in canvas pixels.
    pub y: f64,
    /// Stroke width in canvas pixels.
    pub width: f64,
    /// Opacity in `[0.5, 1.0)`, re-rolled every frame for twinkle.
    pub alpha: f64,
}

/// Side a recycled star re-enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Entry {
    /// Anywhere on screen, far away.
    Zoom,
    Left,
    Right,
    Top,
    Bottom,
}
