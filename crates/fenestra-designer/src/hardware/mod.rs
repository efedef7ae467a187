//! Handles and locks.
//!
//! Hardware never stores where it sits. Its position and pointing direction
//! are computed from the hosting polygon (or circle) and the open direction
//! of the sash that owns it, so they cannot drift from the geometry.

pub mod handle;
pub mod on_circle;

pub use handle::Handle;
pub use on_circle::HandleOnCircle;

use fenestra_core::Vector;
use serde::{Deserialize, Serialize};

use crate::edge_finder::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HardwareShape {
    Handle,
    Handle2,
    HandleForFold,
    HandleForSlide,
    HandleForSlide2,
    Lock,
    Lock2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockSide {
    Inside,
    Outside,
}

/// The way a sash swings or slides open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenDirection {
    Up,
    Down,
    Left,
    Right,
}

impl OpenDirection {
    pub const ALL: [OpenDirection; 4] = [
        OpenDirection::Up,
        OpenDirection::Down,
        OpenDirection::Left,
        OpenDirection::Right,
    ];

    pub fn opposite(self) -> OpenDirection {
        match self {
            OpenDirection::Up => OpenDirection::Down,
            OpenDirection::Down => OpenDirection::Up,
            OpenDirection::Left => OpenDirection::Right,
            OpenDirection::Right => OpenDirection::Left,
        }
    }

    /// Unit vector pointing this way.
    pub fn unit(self) -> Vector {
        match self {
            OpenDirection::Up => Vector::new(0.0, 1.0),
            OpenDirection::Down => Vector::new(0.0, -1.0),
            OpenDirection::Left => Vector::new(-1.0, 0.0),
            OpenDirection::Right => Vector::new(1.0, 0.0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, OpenDirection::Up | OpenDirection::Down)
    }
}

impl From<OpenDirection> for Direction {
    fn from(open: OpenDirection) -> Self {
        match open {
            OpenDirection::Up => Direction::Up,
            OpenDirection::Down => Direction::Down,
            OpenDirection::Left => Direction::Left,
            OpenDirection::Right => Direction::Right,
        }
    }
}

/// Settings shared by every kind of hardware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareConfig {
    pub hardware_shape: HardwareShape,
    pub dock_side: DockSide,
    /// Sit on the side opposite the open direction (the lock side).
    pub dock_opposite_with_open_direction: bool,
    pub always_point_to_bottom: bool,
    pub use_profile_color: bool,
    /// Position along the hosting edge, 0..=1.
    pub position_ratio: f64,
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            hardware_shape: HardwareShape::Handle,
            dock_side: DockSide::Inside,
            dock_opposite_with_open_direction: true,
            always_point_to_bottom: false,
            use_profile_color: false,
            position_ratio: 0.5,
        }
    }
}

/// Saved hardware. Older files may leave any field out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_shape: Option<HardwareShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dock_side: Option<DockSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dock_opposite_with_open_direction: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_point_to_bottom: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_profile_color: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_ratio: Option<f64>,
}

/// Fills the gaps of saved hardware; a missing shape becomes a plain handle.
pub fn fix_data(data: &HardwareData) -> HardwareConfig {
    let d = HardwareConfig::default();
    HardwareConfig {
        hardware_shape: data.hardware_shape.unwrap_or(HardwareShape::Handle),
        dock_side: data.dock_side.unwrap_or(d.dock_side),
        dock_opposite_with_open_direction: data
            .dock_opposite_with_open_direction
            .unwrap_or(d.dock_opposite_with_open_direction),
        always_point_to_bottom: data.always_point_to_bottom.unwrap_or(d.always_point_to_bottom),
        use_profile_color: data.use_profile_color.unwrap_or(d.use_profile_color),
        position_ratio: data
            .position_ratio
            .map_or(d.position_ratio, |r| r.clamp(0.0, 1.0)),
    }
}

impl From<&HardwareConfig> for HardwareData {
    fn from(c: &HardwareConfig) -> Self {
        Self {
            hardware_shape: Some(c.hardware_shape),
            dock_side: Some(c.dock_side),
            dock_opposite_with_open_direction: Some(c.dock_opposite_with_open_direction),
            always_point_to_bottom: Some(c.always_point_to_bottom),
            use_profile_color: Some(c.use_profile_color),
            position_ratio: Some(c.position_ratio),
        }
    }
}
