//! Hardware hosted on a polygon edge.

use fenestra_core::constants::{EPS_ANG, EPS_LEN};
use fenestra_core::{Edge, Point, Vector};
use uuid::Uuid;

use super::{fix_data, DockSide, HardwareConfig, HardwareData, HardwareShape, OpenDirection};
use crate::edge_finder::{Direction, EdgeFinder};
use crate::polygon::WinPolygon;

/// A handle or lock sitting on one edge of its sash.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    id: Uuid,
    pub config: HardwareConfig,
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

impl Handle {
    /// Standard window handle on the lock side, inside.
    pub fn new() -> Self {
        Self::with_config(HardwareConfig::default())
    }

    pub fn with_config(config: HardwareConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
        }
    }

    pub fn for_door() -> Self {
        Self::with_config(HardwareConfig {
            hardware_shape: HardwareShape::Handle2,
            always_point_to_bottom: true,
            ..HardwareConfig::default()
        })
    }

    pub fn for_fold() -> Self {
        Self::with_config(HardwareConfig {
            hardware_shape: HardwareShape::HandleForFold,
            use_profile_color: true,
            ..HardwareConfig::default()
        })
    }

    /// Slide handles sit on the side the sash slides toward.
    pub fn for_slide() -> Self {
        Self::with_config(HardwareConfig {
            hardware_shape: HardwareShape::HandleForSlide,
            dock_opposite_with_open_direction: false,
            use_profile_color: true,
            ..HardwareConfig::default()
        })
    }

    pub fn for_slide2() -> Self {
        Self::with_config(HardwareConfig {
            hardware_shape: HardwareShape::HandleForSlide2,
            ..Self::for_slide().config
        })
    }

    pub fn lock() -> Self {
        Self::with_config(HardwareConfig {
            hardware_shape: HardwareShape::Lock,
            dock_side: DockSide::Outside,
            always_point_to_bottom: true,
            ..HardwareConfig::default()
        })
    }

    pub fn lock2() -> Self {
        Self::with_config(HardwareConfig {
            hardware_shape: HardwareShape::Lock2,
            ..Self::lock().config
        })
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

    /// Takes over every setting of `other`, keeping this handle's identity.
    pub fn copy_settings_from(&mut self, other: &Handle) {
        self.config = other.config;
    }

    /// Same settings under a fresh identity.
    pub fn recreate(&self) -> Handle {
        Self::with_config(self.config)
    }

    pub fn set_position_ratio(&mut self, ratio: f64) {
        self.config.position_ratio = ratio.clamp(0.0, 1.0);
    }

    /// Side of the sash the handle sits on.
    pub fn dock_direction(&self, open: OpenDirection) -> OpenDirection {
        if self.config.dock_opposite_with_open_direction {
            open.opposite()
        } else {
            open
        }
    }

    pub fn edge_index(&self, polygon: &WinPolygon, open: OpenDirection) -> Option<usize> {
        EdgeFinder::find_index(Direction::from(self.dock_direction(open)), polygon)
    }

    pub fn hosting_edge<'a>(&self, polygon: &'a WinPolygon, open: OpenDirection) -> Option<&'a Edge> {
        polygon.edge(self.edge_index(polygon, open)?)
    }

    pub fn position(&self, polygon: &WinPolygon, open: OpenDirection) -> Option<Point> {
        self.hosting_edge(polygon, open)
            .map(|edge| edge.point_at(self.config.position_ratio))
    }

    /// Pointing direction: along the hosting edge, reversed on the outside.
    pub fn hardware_shape_direction(
        &self,
        polygon: &WinPolygon,
        open: OpenDirection,
    ) -> Option<Vector> {
        let edge = self.hosting_edge(polygon, open)?;
        let tangent = edge.tangent_at(self.config.position_ratio).normalize();
        let direction = match self.config.dock_side {
            DockSide::Inside => tangent,
            DockSide::Outside => tangent.invert(),
        };
        Some(if self.config.always_point_to_bottom {
            self.point_to_bottom(direction, edge)
        } else {
            direction
        })
    }

    /// Flips `direction` when it runs up the edge at the handle. On a level
    /// edge "up" is the plain +y axis.
    pub fn point_to_bottom(&self, direction: Vector, edge: &Edge) -> Vector {
        let tangent = edge.tangent_at(self.config.position_ratio).normalize();
        let up = if tangent.y.abs() > EPS_ANG {
            tangent * tangent.y.signum()
        } else {
            Vector::new(0.0, 1.0)
        };
        if direction.dot(&up) > EPS_LEN {
            direction.invert()
        } else {
            direction
        }
    }
}
