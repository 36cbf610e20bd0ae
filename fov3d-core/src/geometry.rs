/// Geometry primitives: distances, re-centering and axis angles
use nalgebra::{Point3, Vector3};

/// Angles (in degrees) between each axis and the ray from the origin to a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl AxisAngles {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Default for AxisAngles {
    fn default() -> Self {
        Self::zero()
    }
}

/// Euclidean distance between two points
pub fn distance_between(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    nalgebra::distance(a, b)
}

pub fn distance_to_origin(a: &Point3<f64>) -> f64 {
    distance_between(a, &Point3::origin())
}

/// Coordinates of `point` in a frame translated so that `origin` is its origin
pub fn center_on(point: &Point3<f64>, origin: &Point3<f64>) -> Point3<f64> {
    Point3::from(point - origin)
}

/// Angle between each axis and the line from the origin to `point`.
///
/// The origin itself has no direction; it yields `(0, 0, 0)` by convention,
/// which callers must read as "undefined" rather than "on every axis".
pub fn angle_triple(point: &Point3<f64>) -> AxisAngles {
    let dist = distance_to_origin(point);
    if dist == 0.0 {
        return AxisAngles::zero();
    }

    // Rounding can push a ratio just past ±1, where acos is NaN
    let angle = |component: f64| (component / dist).clamp(-1.0, 1.0).acos().to_degrees();

    AxisAngles::new(angle(point.x), angle(point.y), angle(point.z))
}

/// Point at `distance` from the origin whose direction cosines are the
/// cosines of `angles`.
///
/// Only triples produced by [`angle_triple`] describe a real direction, so
/// this inverts [`angle_triple`] for those and nothing else.
pub fn from_angle_triple(angles: &AxisAngles, distance: f64) -> Point3<f64> {
    if distance == 0.0 {
        return Point3::origin();
    }

    let direction = Vector3::new(
        angles.x.to_radians().cos(),
        angles.y.to_radians().cos(),
        angles.z.to_radians().cos(),
    );
    Point3::from(direction * distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_angles(actual: AxisAngles, expected: (f64, f64, f64)) {
        assert!((actual.x - expected.0).abs() < EPS, "x: {:?} vs {:?}", actual, expected);
        assert!((actual.y - expected.1).abs() < EPS, "y: {:?} vs {:?}", actual, expected);
        assert!((actual.z - expected.2).abs() < EPS, "z: {:?} vs {:?}", actual, expected);
    }

    #[test]
    fn test_angles_on_axes() {
        for n in (1..100).step_by(10) {
            let n = n as f64;
            assert_angles(angle_triple(&Point3::new(n, 0.0, 0.0)), (0.0, 90.0, 90.0));
            assert_angles(angle_triple(&Point3::new(0.0, n, 0.0)), (90.0, 0.0, 90.0));
            assert_angles(angle_triple(&Point3::new(0.0, 0.0, n)), (90.0, 90.0, 0.0));
        }
    }

    #[test]
    fn test_angles_on_diagonals() {
        assert_angles(angle_triple(&Point3::new(0.0, 1.0, 1.0)), (90.0, 45.0, 45.0));
        assert_angles(angle_triple(&Point3::new(1.0, 0.0, 1.0)), (45.0, 90.0, 45.0));
        assert_angles(angle_triple(&Point3::new(1.0, 1.0, 0.0)), (45.0, 45.0, 90.0));
    }

    #[test]
    fn test_angles_on_negative_axis() {
        assert_angles(angle_triple(&Point3::new(-3.0, 0.0, 0.0)), (180.0, 90.0, 90.0));
    }

    #[test]
    fn test_angles_at_origin() {
        assert_eq!(angle_triple(&Point3::origin()), AxisAngles::zero());
    }

    #[test]
    fn test_distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(distance_to_origin(&a), 0.0);
        assert_eq!(distance_between(&a, &a), 0.0);
        assert_eq!(distance_between(&b, &b), 0.0);
        assert!((distance_between(&a, &b) - 3f64.sqrt()).abs() < EPS);
        assert!((distance_to_origin(&b) - 3f64.sqrt()).abs() < EPS);

        let c = Point3::new(1.0, 0.0, 0.0);
        let d = Point3::new(0.0, 1.0, 0.0);
        let e = Point3::new(0.0, 0.0, 1.0);
        for p in [c, d, e] {
            assert!((distance_between(&a, &p) - 1.0).abs() < EPS);
            assert!((distance_to_origin(&p) - 1.0).abs() < EPS);
        }
        assert!((distance_between(&d, &c) - 2f64.sqrt()).abs() < EPS);
        assert!((distance_between(&d, &e) - 2f64.sqrt()).abs() < EPS);
        assert!((distance_between(&e, &c) - 2f64.sqrt()).abs() < EPS);

        let f = Point3::new(-7.7, 0.0, 2.4);
        assert!((distance_to_origin(&f) - 8.07).abs() < 0.005);
        assert_eq!(distance_to_origin(&f), distance_between(&a, &f));
    }

    #[test]
    fn test_center_on() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(center_on(&a, &b), Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(center_on(&b, &b), Point3::origin());

        let c = Point3::new(1.0, 0.0, 0.0);
        assert_eq!(center_on(&c, &a), c);

        let p = Point3::new(4.5, -2.0, 7.25);
        let centered = center_on(&p, &b);
        assert_eq!(center_on(&centered, &Point3::origin()), centered);
    }

    #[test]
    fn test_from_angle_triple_round_trip() {
        let points = [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-4.0, 0.5, 2.0),
            Point3::new(0.0, -7.0, 0.0),
            Point3::new(-1.0, -1.0, -1.0),
        ];
        for p in points {
            let rebuilt = from_angle_triple(&angle_triple(&p), distance_to_origin(&p));
            assert!((rebuilt - p).norm() < 1e-9, "{} rebuilt as {}", p, rebuilt);
        }
    }

    #[test]
    fn test_from_angle_triple_zero_distance() {
        let angles = AxisAngles::new(10.0, 20.0, 30.0);
        assert_eq!(from_angle_triple(&angles, 0.0), Point3::origin());
    }
}
