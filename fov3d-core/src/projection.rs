/// Observer and field-of-view projection
use nalgebra::{Point2, Point3};

use crate::geometry::{angle_triple, center_on, distance_to_origin, AxisAngles};
use crate::transform::{Rotation, Transform};

/// Slack (in degrees) granted to angles on the edge of the field, which
/// `acos` only reproduces up to rounding
const ANGLE_EPS: f64 = 1e-9;

/// Angular window (in degrees) seen by an observer.
///
/// Horizontal angles are measured from the forward axis (local +X), so the
/// window is centered on 0. Vertical angles are measured from the up axis
/// (local +Y), so the window is centered on 90.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl FieldBounds {
    /// A window narrower than a finite angle cannot hold any point
    pub fn is_degenerate(&self) -> bool {
        !(self.max_x > self.min_x && self.max_y > self.min_y)
    }

    /// Whether a direction falls inside the window, edges included
    pub fn contains(&self, angles: &AxisAngles) -> bool {
        angles.x >= self.min_x - ANGLE_EPS
            && angles.x <= self.max_x + ANGLE_EPS
            && angles.y >= self.min_y - ANGLE_EPS
            && angles.y <= self.max_y + ANGLE_EPS
    }
}

/// Point of view: where the observer stands, where it looks and how wide it sees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub position: Point3<f64>,
    pub rotation: Rotation,
    /// Horizontal field of view, in degrees
    pub field_width: f64,
    /// Vertical field of view, in degrees
    pub field_height: f64,
}

impl Observer {
    pub fn new(
        position: Point3<f64>,
        rotation: Rotation,
        field_width: f64,
        field_height: f64,
    ) -> Self {
        Self {
            position,
            rotation,
            field_width,
            field_height,
        }
    }

    /// Observer at `position` turned so that its forward axis points at `target`.
    ///
    /// Only a yaw (rotation around Z) is applied. The observer is never
    /// pitched or rolled, so targets off its horizontal plane are framed only
    /// by the width of its vertical field.
    pub fn look_at(
        position: Point3<f64>,
        target: Point3<f64>,
        field_width: f64,
        field_height: f64,
    ) -> Self {
        let angles = angle_triple(&center_on(&target, &position));
        Self::new(position, Rotation::yaw(angles.x), field_width, field_height)
    }

    pub fn field_bounds(&self) -> FieldBounds {
        FieldBounds {
            min_x: -self.field_width / 2.0,
            max_x: self.field_width / 2.0,
            min_y: 90.0 - self.field_height / 2.0,
            max_y: 90.0 + self.field_height / 2.0,
        }
    }

    /// Project a world point onto this observer's screen.
    ///
    /// Returns `None` when the point is outside the field of view, when the
    /// field is degenerate, or when the point sits on the observer itself.
    pub fn project(&self, point: &Point3<f64>, dot_radius: f64) -> Option<ProjectedPoint> {
        let bounds = self.field_bounds();
        if bounds.is_degenerate() {
            return None;
        }

        let local = Transform::point_in_system(point, &self.position, &self.rotation);
        let distance = distance_to_origin(&local);
        if distance == 0.0 {
            return None;
        }
        let angles = angle_triple(&local);

        if !bounds.contains(&angles) {
            return None;
        }

        // Edge points may land a rounding step outside [0, 1]
        let screen_x = ((angles.x - bounds.min_x) / (bounds.max_x - bounds.min_x)).clamp(0.0, 1.0);
        let screen_y = ((angles.y - bounds.min_y) / (bounds.max_y - bounds.min_y)).clamp(0.0, 1.0);

        Some(ProjectedPoint {
            screen: Point2::new(screen_x, screen_y),
            size: dot_radius / distance,
        })
    }
}

/// A point as seen by an observer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Position on screen, both coordinates normalized to `[0, 1]`
    pub screen: Point2<f64>,
    /// Dot radius divided by the distance to the observer
    pub size: f64,
}

impl ProjectedPoint {
    /// Scale the normalized screen position to a raster of the given size
    pub fn to_pixels(&self, width: u32, height: u32) -> (f64, f64) {
        (
            self.screen.x * width as f64,
            self.screen.y * height as f64,
        )
    }
}

/// Project `point` for `observer`, see [`Observer::project`]
pub fn project(point: &Point3<f64>, observer: &Observer, dot_radius: f64) -> Option<ProjectedPoint> {
    observer.project(point, dot_radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance_between;

    const EPS: f64 = 1e-9;

    fn front_observer() -> Observer {
        Observer::new(Point3::origin(), Rotation::zero(), 90.0, 90.0)
    }

    #[test]
    fn test_field_bounds() {
        let bounds = front_observer().field_bounds();
        assert_eq!(bounds.min_x, -45.0);
        assert_eq!(bounds.max_x, 45.0);
        assert_eq!(bounds.min_y, 45.0);
        assert_eq!(bounds.max_y, 135.0);
        assert!(!bounds.is_degenerate());
    }

    #[test]
    fn test_point_straight_ahead_is_centered() {
        let projected = front_observer()
            .project(&Point3::new(4.0, 0.0, 0.0), 10.0)
            .unwrap();
        assert!((projected.screen.x - 0.5).abs() < EPS);
        assert!((projected.screen.y - 0.5).abs() < EPS);
        assert!((projected.size - 2.5).abs() < EPS);
    }

    #[test]
    fn test_point_on_horizontal_edge() {
        let observer = front_observer();
        let point = Point3::new(1.0, 0.0, 1.0);

        let local = Transform::point_in_system(&point, &observer.position, &observer.rotation);
        assert_eq!(local, point);
        let angles = angle_triple(&local);
        assert!((angles.x - 45.0).abs() < EPS);
        assert!((angles.y - 90.0).abs() < EPS);
        assert!((angles.z - 45.0).abs() < EPS);

        let projected = observer.project(&point, 10.0).unwrap();
        assert!((projected.screen.x - 1.0).abs() < EPS);
        assert!((projected.screen.y - 0.5).abs() < EPS);
        assert!((projected.size - 10.0 / 2f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_points_on_every_edge_are_visible() {
        let narrow = front_observer();
        let left = narrow.project(&Point3::new(1.0, 0.0, -1.0), 10.0).unwrap();
        assert!((left.screen.x - 1.0).abs() < EPS);
        assert!((left.screen.y - 0.5).abs() < EPS);

        let wide = Observer::new(Point3::origin(), Rotation::zero(), 180.0, 90.0);
        let top = wide.project(&Point3::new(1.0, 1.0, 0.0), 10.0).unwrap();
        assert!((top.screen.x - 0.75).abs() < EPS);
        assert!(top.screen.y.abs() < EPS);
        let bottom = wide.project(&Point3::new(1.0, -1.0, 0.0), 10.0).unwrap();
        assert!((bottom.screen.x - 0.75).abs() < EPS);
        assert!((bottom.screen.y - 1.0).abs() < EPS);

        for projected in [left, top, bottom] {
            assert!((0.0..=1.0).contains(&projected.screen.x));
            assert!((0.0..=1.0).contains(&projected.screen.y));
        }
    }

    #[test]
    fn test_points_past_the_edge_are_hidden() {
        let observer = front_observer();
        assert!(observer.project(&Point3::new(1.0, 0.0, 1.01), 10.0).is_none());
        assert!(observer.project(&Point3::new(1.0, 1.01, 0.0), 10.0).is_none());
        assert!(observer.project(&Point3::new(1.0, -1.01, 0.0), 10.0).is_none());
    }

    #[test]
    fn test_field_bounds_include_their_edges() {
        let bounds = front_observer().field_bounds();
        assert!(bounds.contains(&AxisAngles::new(-45.0, 90.0, 0.0)));
        assert!(bounds.contains(&AxisAngles::new(45.0 + 1e-12, 45.0, 0.0)));
        assert!(bounds.contains(&AxisAngles::new(0.0, 135.0, 0.0)));
        assert!(!bounds.contains(&AxisAngles::new(45.1, 90.0, 0.0)));
        assert!(!bounds.contains(&AxisAngles::new(0.0, 44.9, 0.0)));
    }

    #[test]
    fn test_point_behind_is_hidden() {
        let observer = front_observer();
        assert!(observer.project(&Point3::new(-1.0, 0.0, 0.0), 10.0).is_none());
        assert!(observer.project(&Point3::new(-5.0, 0.5, 0.5), 10.0).is_none());
    }

    #[test]
    fn test_point_above_field_is_hidden() {
        let observer = Observer::new(Point3::origin(), Rotation::zero(), 180.0, 30.0);
        assert!(observer.project(&Point3::new(1.0, 5.0, 0.0), 10.0).is_none());
        assert!(observer.project(&Point3::new(1.0, -5.0, 0.0), 10.0).is_none());
        assert!(observer.project(&Point3::new(5.0, 1.0, 0.0), 10.0).is_some());
    }

    #[test]
    fn test_vertical_position() {
        // 30 degrees up from the forward axis
        let point = Point3::new(60f64.to_radians().sin(), 60f64.to_radians().cos(), 0.0);
        let projected = front_observer().project(&point, 1.0).unwrap();
        // angle with +Y is 60, window is [45, 135]
        assert!((projected.screen.y - 15.0 / 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_field_is_never_visible() {
        let straight_ahead = Point3::new(3.0, 0.0, 0.0);
        for (width, height) in [(0.0, 90.0), (90.0, 0.0), (0.0, 0.0), (-10.0, 90.0)] {
            let observer = Observer::new(Point3::origin(), Rotation::zero(), width, height);
            assert!(observer.field_bounds().is_degenerate());
            assert!(observer.project(&straight_ahead, 10.0).is_none());
        }
    }

    #[test]
    fn test_point_on_observer_is_hidden() {
        let observer = Observer::new(Point3::new(1.0, 2.0, 3.0), Rotation::zero(), 90.0, 90.0);
        assert!(observer.project(&Point3::new(1.0, 2.0, 3.0), 10.0).is_none());
    }

    #[test]
    fn test_projection_distance_matches_world_distance() {
        let observer = Observer::new(
            Point3::new(-3.0, 1.0, 2.0),
            Rotation::new(5.0, -10.0, 20.0),
            170.0,
            170.0,
        );
        let point = Point3::new(4.0, 2.0, 1.0);
        let local = Transform::point_in_system(&point, &observer.position, &observer.rotation);
        assert!(
            (distance_to_origin(&local) - distance_between(&point, &observer.position)).abs() < EPS
        );

        let projected = observer.project(&point, 6.0).unwrap();
        assert!((projected.size - 6.0 / distance_between(&point, &observer.position)).abs() < EPS);
    }

    #[test]
    fn test_look_at_centers_target() {
        let target = Point3::origin();
        let observer = Observer::look_at(Point3::new(0.0, 5.0, 0.0), target, 90.0, 90.0);
        assert_eq!(observer.rotation.x, 0.0);
        assert_eq!(observer.rotation.y, 0.0);
        assert!((observer.rotation.z - 90.0).abs() < EPS);

        let projected = observer.project(&target, 10.0).unwrap();
        assert!((projected.screen.x - 0.5).abs() < 1e-6);
        assert!((projected.screen.y - 0.5).abs() < 1e-6);
        assert!((projected.size - 2.0).abs() < EPS);
    }

    #[test]
    fn test_look_at_along_forward_axis() {
        let observer = Observer::look_at(Point3::origin(), Point3::new(3.0, 0.0, 0.0), 60.0, 60.0);
        assert_eq!(observer.rotation, Rotation::zero());
    }

    #[test]
    fn test_look_at_does_not_pitch() {
        // Target straight up the Z axis: a yaw cannot bring it in front
        let observer = Observer::look_at(Point3::origin(), Point3::new(0.0, 0.0, 5.0), 90.0, 90.0);
        assert_eq!(observer.rotation.x, 0.0);
        assert_eq!(observer.rotation.y, 0.0);
        assert!(observer.project(&Point3::new(0.0, 0.0, 5.0), 10.0).is_none());
    }

    #[test]
    fn test_to_pixels() {
        let projected = ProjectedPoint {
            screen: Point2::new(0.25, 0.5),
            size: 1.0,
        };
        assert_eq!(projected.to_pixels(400, 200), (100.0, 100.0));
    }

    #[test]
    fn test_free_function_matches_method() {
        let observer = front_observer();
        let point = Point3::new(2.0, 0.5, -0.3);
        assert_eq!(project(&point, &observer, 3.0), observer.project(&point, 3.0));
    }
}
