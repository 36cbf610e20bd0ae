/// Frame sequencing: observers circling a graph and the projected frames they see
use std::f64::consts::PI;

use nalgebra::{Point2, Point3};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{Fov3dError, Result};
use crate::graph::Graph;
use crate::projection::{Observer, ProjectedPoint};

/// `count` evenly spaced points on a circle, counter-clockwise from angle 0
pub fn points_on_circle(
    center: Point2<f64>,
    radius: f64,
    count: usize,
) -> impl Iterator<Item = Point2<f64>> {
    let arc = 2.0 * PI / count.max(1) as f64;
    (0..count).map(move |i| {
        let angle = arc * i as f64;
        Point2::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        )
    })
}

/// Parameters of an orbit around a graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    /// Number of observer positions around the circle
    pub frames: usize,
    /// Orbit radius, in half-spans of the graph
    pub distance_factor: f64,
    pub field_width: f64,
    pub field_height: f64,
    pub dot_radius: f64,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            frames: 100,
            distance_factor: 4.7,
            field_width: 90.0,
            field_height: 90.0,
            dot_radius: 10.0,
        }
    }
}

/// Observers evenly placed on a horizontal circle around a graph, all
/// looking at its center.
///
/// The circle lies in the XY plane at the height of the center, which is the
/// plane [`Observer::look_at`] can turn in.
#[derive(Debug, Clone)]
pub struct Orbit {
    center: Point3<f64>,
    radius: f64,
    settings: OrbitSettings,
}

impl Orbit {
    pub fn around(graph: &Graph, settings: OrbitSettings) -> Result<Self> {
        if settings.frames == 0 {
            return Err(Fov3dError::InvalidOrbit("at least one frame is needed".into()));
        }
        if !(settings.distance_factor.is_finite() && settings.distance_factor > 0.0) {
            return Err(Fov3dError::InvalidOrbit(format!(
                "distance factor must be positive, got {}",
                settings.distance_factor
            )));
        }

        let amplitude = graph.amplitude();
        let radius = amplitude.x.max(amplitude.y) / 2.0 * settings.distance_factor;
        if radius <= 0.0 {
            return Err(Fov3dError::InvalidOrbit(
                "graph has no extent in the XY plane".into(),
            ));
        }

        Ok(Self {
            center: graph.center(),
            radius,
            settings,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    pub fn settings(&self) -> &OrbitSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.settings.frames
    }

    pub fn is_empty(&self) -> bool {
        self.settings.frames == 0
    }

    /// One observer per frame, in frame order, each looking at the center
    pub fn observers(&self) -> impl Iterator<Item = Observer> + '_ {
        points_on_circle(
            Point2::new(self.center.x, self.center.y),
            self.radius,
            self.len(),
        )
        .map(|point| {
            Observer::look_at(
                Point3::new(point.x, point.y, self.center.z),
                self.center,
                self.settings.field_width,
                self.settings.field_height,
            )
        })
    }
}

/// An edge whose both ends are visible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub source: ProjectedPoint,
    pub target: ProjectedPoint,
}

/// Everything one observer sees of a graph
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub observer: Observer,
    pub segments: Vec<Segment>,
    pub nodes: Vec<ProjectedPoint>,
    pub center: Option<ProjectedPoint>,
}

impl Frame {
    pub fn is_blank(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Project a graph for one observer. Edges with an end out of view are dropped.
pub fn render_frame(graph: &Graph, observer: &Observer, index: usize, dot_radius: f64) -> Frame {
    let nodes: Vec<ProjectedPoint> = graph
        .nodes()
        .iter()
        .filter_map(|node| observer.project(node, dot_radius))
        .collect();

    let segments: Vec<Segment> = graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let source = observer.project(&edge.source, dot_radius)?;
            let target = observer.project(&edge.target, dot_radius)?;
            Some(Segment { source, target })
        })
        .collect();

    let center = observer.project(&graph.center(), dot_radius);

    debug!(
        frame = index,
        x = observer.position.x,
        y = observer.position.y,
        z = observer.position.z,
        yaw = observer.rotation.z,
        visible_nodes = nodes.len(),
        visible_edges = segments.len(),
        "rendered frame"
    );

    Frame {
        index,
        observer: *observer,
        segments,
        nodes,
        center,
    }
}

/// Every frame of an orbit, in order
pub fn render_frames(graph: &Graph, orbit: &Orbit) -> Vec<Frame> {
    let dot_radius = orbit.settings().dot_radius;
    orbit
        .observers()
        .enumerate()
        .map(|(index, observer)| render_frame(graph, &observer, index, dot_radius))
        .collect()
}

/// Same as [`render_frames`], frames computed in parallel
pub fn render_frames_parallel(graph: &Graph, orbit: &Orbit) -> Vec<Frame> {
    let dot_radius = orbit.settings().dot_radius;
    let observers: Vec<Observer> = orbit.observers().collect();
    observers
        .par_iter()
        .enumerate()
        .map(|(index, observer)| render_frame(graph, observer, index, dot_radius))
        .collect()
}
