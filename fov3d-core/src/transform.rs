/// Axis rotations and the world to observer-local transform
use nalgebra::{Matrix3, Point3, Rotation2, Rotation3, Vector2, Vector3};

use crate::geometry::center_on;

/// Rotation around the three axes, in degrees, applied X first, then Y, then Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Rotation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Rotation around the Z axis only
    pub fn yaw(degrees: f64) -> Self {
        Self::new(0.0, 0.0, degrees)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::zero()
    }
}

/// Counter-clockwise rotation of the `(u, v)` plane by `degrees`
fn rotate_plane(u: f64, v: f64, degrees: f64) -> (f64, f64) {
    let rotated = Rotation2::new(degrees.to_radians()) * Vector2::new(u, v);
    (rotated.x, rotated.y)
}

/// Coordinate system transformations
pub struct Transform;

impl Transform {
    /// Rotate a point around each axis in turn.
    ///
    /// Each stage rotates the plane orthogonal to its axis, (y, z) then
    /// (x, z) then (x, y), and works on the output of the previous stage.
    pub fn rotate(point: &Point3<f64>, rotation: &Rotation) -> Point3<f64> {
        let (mut x, mut y, mut z) = (point.x, point.y, point.z);

        if rotation.x != 0.0 {
            (y, z) = rotate_plane(y, z, rotation.x);
        }
        if rotation.y != 0.0 {
            (x, z) = rotate_plane(x, z, rotation.y);
        }
        if rotation.z != 0.0 {
            (x, y) = rotate_plane(x, y, rotation.z);
        }

        Point3::new(x, y, z)
    }

    /// Coordinates of `point` in the system centered on `origin` and rotated
    /// by `rotation`: translate first, then rotate.
    pub fn point_in_system(
        point: &Point3<f64>,
        origin: &Point3<f64>,
        rotation: &Rotation,
    ) -> Point3<f64> {
        Self::rotate(&center_on(point, origin), rotation)
    }

    /// Matrix equivalent of [`Transform::rotate`], for transforming many
    /// points with one rotation.
    pub fn rotation_matrix(rotation: &Rotation) -> Matrix3<f64> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), rotation.x.to_radians());
        // The (x, z) plane turns from x towards z, the opposite of the
        // right-handed sense around +Y
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), -rotation.y.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), rotation.z.to_radians());

        (rz * ry * rx).into_inner()
    }
}
