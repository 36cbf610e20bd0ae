/// Wireframe graphs: edges, their deduplicated nodes and bounding box
use std::collections::HashSet;

use nalgebra::{Point3, Vector3};

use crate::error::{Fov3dError, Result};

/// A line segment between two points in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: Point3<f64>,
    pub target: Point3<f64>,
}

impl Edge {
    pub fn new(source: Point3<f64>, target: Point3<f64>) -> Self {
        Self { source, target }
    }

    pub fn endpoints(&self) -> [Point3<f64>; 2] {
        [self.source, self.target]
    }
}

/// Smallest and largest coordinate along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisExtent {
    pub min: f64,
    pub max: f64,
}

impl AxisExtent {
    fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn center(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    pub fn amplitude(&self) -> f64 {
        self.max - self.min
    }
}

/// Axis-aligned bounding box of a set of points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent3 {
    pub x: AxisExtent,
    pub y: AxisExtent,
    pub z: AxisExtent,
}

impl Extent3 {
    fn enclosing<'a>(points: impl IntoIterator<Item = &'a Point3<f64>>) -> Self {
        let mut extent = Self {
            x: AxisExtent::empty(),
            y: AxisExtent::empty(),
            z: AxisExtent::empty(),
        };
        for point in points {
            extent.x.include(point.x);
            extent.y.include(point.y);
            extent.z.include(point.z);
        }
        extent
    }

    pub fn center(&self) -> Point3<f64> {
        Point3::new(self.x.center(), self.y.center(), self.z.center())
    }

    pub fn amplitude(&self) -> Vector3<f64> {
        Vector3::new(self.x.amplitude(), self.y.amplitude(), self.z.amplitude())
    }
}

/// Hashable identity of a point; `-0.0` and `0.0` are the same node
fn node_key(point: &Point3<f64>) -> [u64; 3] {
    let bits = |v: f64| if v == 0.0 { 0f64.to_bits() } else { v.to_bits() };
    [bits(point.x), bits(point.y), bits(point.z)]
}

/// An immutable wireframe graph.
///
/// Every derived field is computed once from the node set when the graph is
/// built.
#[derive(Debug, Clone)]
pub struct Graph {
    edges: Vec<Edge>,
    nodes: Vec<Point3<f64>>,
    center: Point3<f64>,
    extent: Extent3,
    amplitude: Vector3<f64>,
}

impl Graph {
    /// Build a graph from its edges. Nodes keep the order of first appearance.
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Result<Self> {
        let edges: Vec<Edge> = edges.into_iter().collect();
        if edges.is_empty() {
            return Err(Fov3dError::EmptyGraph);
        }
        Ok(Self::aggregate(edges))
    }

    fn aggregate(edges: Vec<Edge>) -> Self {
        let mut seen = HashSet::new();
        let nodes: Vec<Point3<f64>> = edges
            .iter()
            .flat_map(Edge::endpoints)
            .filter(|node| seen.insert(node_key(node)))
            .collect();

        let extent = Extent3::enclosing(&nodes);

        Self {
            center: extent.center(),
            amplitude: extent.amplitude(),
            extent,
            nodes,
            edges,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn nodes(&self) -> &[Point3<f64>] {
        &self.nodes
    }

    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    pub fn extent(&self) -> &Extent3 {
        &self.extent
    }

    pub fn amplitude(&self) -> Vector3<f64> {
        self.amplitude
    }

    /// A cube whose back face is shifted diagonally from its front face
    pub fn cube() -> Self {
        Self::aggregate(vec![
            // front square
            edge([2.0, 2.0, 5.0], [2.0, 4.0, 5.0]),
            edge([2.0, 4.0, 5.0], [4.0, 4.0, 5.0]),
            edge([4.0, 4.0, 5.0], [4.0, 2.0, 5.0]),
            edge([4.0, 2.0, 5.0], [2.0, 2.0, 5.0]),
            // back square
            edge([3.0, 3.0, 7.0], [3.0, 5.0, 7.0]),
            edge([3.0, 5.0, 7.0], [5.0, 5.0, 7.0]),
            edge([5.0, 5.0, 7.0], [5.0, 3.0, 7.0]),
            edge([5.0, 3.0, 7.0], [3.0, 3.0, 7.0]),
            // links between the two
            edge([2.0, 2.0, 5.0], [3.0, 3.0, 7.0]),
            edge([2.0, 4.0, 5.0], [3.0, 5.0, 7.0]),
            edge([4.0, 2.0, 5.0], [5.0, 3.0, 7.0]),
            edge([4.0, 4.0, 5.0], [5.0, 5.0, 7.0]),
        ])
    }

    /// Two square pyramids sharing their base, the back apex slightly closer
    /// to the base than the front one
    pub fn double_tetrahedron() -> Self {
        Self::aggregate(vec![
            // front apex to the base corners
            edge([50.0, 50.0, 10.0], [20.0, 20.0, 50.0]),
            edge([50.0, 50.0, 10.0], [20.0, 80.0, 50.0]),
            edge([50.0, 50.0, 10.0], [80.0, 20.0, 50.0]),
            edge([50.0, 50.0, 10.0], [80.0, 80.0, 50.0]),
            // base
            edge([20.0, 80.0, 50.0], [80.0, 80.0, 50.0]),
            edge([20.0, 80.0, 50.0], [20.0, 20.0, 50.0]),
            edge([80.0, 20.0, 50.0], [80.0, 80.0, 50.0]),
            edge([80.0, 20.0, 50.0], [20.0, 20.0, 50.0]),
            // back apex to the base corners
            edge([50.0, 50.0, 70.0], [20.0, 20.0, 50.0]),
            edge([50.0, 50.0, 70.0], [20.0, 80.0, 50.0]),
            edge([50.0, 50.0, 70.0], [80.0, 20.0, 50.0]),
            edge([50.0, 50.0, 70.0], [80.0, 80.0, 50.0]),
        ])
    }
}

fn edge(source: [f64; 3], target: [f64; 3]) -> Edge {
    Edge::new(Point3::from(source), Point3::from(target))
}
