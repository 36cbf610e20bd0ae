/// Command line options and the validated render configuration built from them.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fov3d_core::OrbitSettings;

use crate::AppError;

/// Graphs shipped with the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuiltinGraph {
    Cube,
    DoubleTetrahedron,
}

/// Where the graph to render comes from
#[derive(Debug, Clone, PartialEq)]
pub enum GraphSource {
    Builtin(BuiltinGraph),
    File(PathBuf),
}

/// Orbit a wireframe graph and render what an observer sees.
#[derive(Debug, Parser)]
#[command(name = "fov3d", version)]
pub struct Cli {
    /// Built-in graph to render
    #[arg(long, value_enum, default_value_t = BuiltinGraph::Cube, conflicts_with = "file")]
    pub graph: BuiltinGraph,

    /// Edge-list file to render instead of a built-in graph
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Number of observer positions around the graph
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,

    /// Orbit radius, in half-spans of the graph
    #[arg(long, default_value_t = 4.7)]
    pub distance_factor: f64,

    /// Horizontal field of view, in degrees
    #[arg(long, default_value_t = 90.0)]
    pub field_width: f64,

    /// Vertical field of view, in degrees
    #[arg(long, default_value_t = 90.0)]
    pub field_height: f64,

    /// Node size at unit distance
    #[arg(long, default_value_t = 10.0)]
    pub dot_radius: f64,

    /// Playback speed of the interactive player
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Print every frame to stdout instead of playing them
    #[arg(long)]
    pub dump: bool,

    /// Canvas width in characters (dump mode)
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Canvas height in characters (dump mode)
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub source: GraphSource,
    pub orbit: OrbitSettings,
    pub fps: u32,
    pub dump: bool,
    pub width: usize,
    pub height: usize,
}

impl Cli {
    pub fn into_config(self) -> Result<RenderConfig, AppError> {
        let config = RenderConfig {
            source: match self.file {
                Some(path) => GraphSource::File(path),
                None => GraphSource::Builtin(self.graph),
            },
            orbit: OrbitSettings {
                frames: self.frames as usize,
                distance_factor: self.distance_factor,
                field_width: self.field_width,
                field_height: self.field_height,
                dot_radius: self.dot_radius,
            },
            fps: self.fps,
            dump: self.dump,
            width: self.width as usize,
            height: self.height as usize,
        };
        config.validate()?;
        Ok(config)
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let orbit = &self.orbit;
        if orbit.frames == 0 {
            return Err(AppError::Config("at least one frame is needed".into()));
        }
        if !(orbit.distance_factor.is_finite() && orbit.distance_factor > 0.0) {
            return Err(AppError::Config(format!(
                "distance factor must be positive, got {}",
                orbit.distance_factor
            )));
        }
        if !(orbit.field_width > 0.0 && orbit.field_width <= 360.0) {
            return Err(AppError::Config(format!(
                "field width must be in (0, 360], got {}",
                orbit.field_width
            )));
        }
        if !(orbit.field_height > 0.0 && orbit.field_height <= 180.0) {
            return Err(AppError::Config(format!(
                "field height must be in (0, 180], got {}",
                orbit.field_height
            )));
        }
        if !(orbit.dot_radius.is_finite() && orbit.dot_radius >= 0.0) {
            return Err(AppError::Config(format!(
                "dot radius must not be negative, got {}",
                orbit.dot_radius
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(AppError::Config("canvas must not be empty".into()));
        }
        Ok(())
    }
}
