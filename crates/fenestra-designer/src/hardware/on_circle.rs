//! Hardware hosted on a round sash.

use fenestra_core::{Point, Vector};
use uuid::Uuid;

use super::{fix_data, HardwareConfig, HardwareData, OpenDirection};

/// Handle on a circular host. Round sashes only distinguish horizontal
/// and vertical hardware, so the direction is one of two fixed vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleOnCircle {
    id: Uuid,
    pub config: HardwareConfig,
}

impl Default for HandleOnCircle {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleOnCircle {
    pub fn new() -> Self {
        Self::with_config(HardwareConfig::default())
    }

    pub fn with_config(config: HardwareConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
        }
    }

    pub fn from_data(data: &HardwareData) -> Self {
        Self::with_config(fix_data(data))
    }

    pub fn to_data(&self) -> HardwareData {
        HardwareData::from(&self.config)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn copy_settings_from(&mut self, other: &HandleOnCircle) {
        self.config = other.config;
    }

    pub fn recreate(&self) -> HandleOnCircle {
        Self::with_config(self.config)
    }

    /// Always the side facing away from the open direction.
    pub fn dock_direction(&self, open: OpenDirection) -> OpenDirection {
        open.opposite()
    }

    pub fn hardware_shape_direction(&self, open: OpenDirection) -> Vector {
        if open.is_vertical() {
            Vector::new(1.0, 0.0)
        } else {
            Vector::new(0.0, 1.0)
        }
    }

    /// Point on the circle at the dock side.
    pub fn position(&self, center: Point, radius: f64, open: OpenDirection) -> Point {
        center + self.dock_direction(open).unit() * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_on_dock_side() {
        let handle = HandleOnCircle::new();
        let p = handle.position(Point::new(10.0, 10.0), 5.0, OpenDirection::Left);
        assert_eq!(p, Point::new(15.0, 10.0));
    }

    #[test]
    fn test_dock_direction_faces_away_from_opening() {
        let handle = HandleOnCircle::new();
        let expected = [
            OpenDirection::Down,
            OpenDirection::Up,
            OpenDirection::Right,
            OpenDirection::Left,
        ];
        for (open, dock) in OpenDirection::ALL.into_iter().zip(expected) {
            assert_eq!(handle.dock_direction(open), dock, "opening {:?}", open);
        }
    }

    #[test]
    fn test_directions() {
        let handle = HandleOnCircle::new();
        assert_eq!(
            handle.hardware_shape_direction(OpenDirection::Up),
            Vector::new(1.0, 0.0)
        );
        assert_eq!(
            handle.hardware_shape_direction(OpenDirection::Right),
            Vector::new(0.0, 1.0)
        );
    }
}
