/// FOV3D Core Library - Field-of-view projection of wireframe graphs
///
/// This library provides the stateless core: coordinate transforms into an
/// observer's frame, angular field-of-view projection, graph aggregation,
/// edge-list parsing and orbit frame sequencing.

pub mod edges;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod orbit;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use error::{Fov3dError, Result};
pub use geometry::AxisAngles;
pub use graph::{Edge, Graph};
pub use orbit::{Frame, Orbit, OrbitSettings, Segment};
pub use projection::{project, Observer, ProjectedPoint};
pub use transform::{Rotation, Transform};
