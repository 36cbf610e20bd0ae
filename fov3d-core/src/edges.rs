/// Edge-list text format.
///
/// One edge per line, as two points of three coordinates:
///
/// ```text
/// # front square
/// 2 2 5 -> 2 4 5
/// (2, 4, 5) (4, 4, 5)
/// ```
///
/// Coordinates are separated by whitespace or commas, points may be wrapped
/// in parentheses and the arrow between them is optional. `#` starts a
/// comment.
use std::path::Path;

use nalgebra::Point3;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, space0, space1},
    combinator::{all_consuming, map, value},
    number::complete::double,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};
use tracing::info;

use crate::error::{Fov3dError, Result};
use crate::graph::{Edge, Graph};

/// Parse every edge of an edge list
pub fn parse_edges(input: &str) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let edge = match all_consuming(parse_edge)(content) {
            Ok((_, edge)) => edge,
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                return Err(Fov3dError::parse(
                    line_number,
                    format!("expected `x y z -> x y z`, found {:?}", e.input),
                ));
            }
            Err(nom::Err::Incomplete(_)) => {
                return Err(Fov3dError::parse(line_number, "incomplete edge"));
            }
        };

        let finite = edge
            .endpoints()
            .iter()
            .all(|p| p.coords.iter().all(|c| c.is_finite()));
        if !finite {
            return Err(Fov3dError::parse(line_number, "coordinates must be finite"));
        }

        edges.push(edge);
    }

    Ok(edges)
}

/// Parse an edge list into a graph
pub fn parse_graph(input: &str) -> Result<Graph> {
    Graph::from_edges(parse_edges(input)?)
}

/// Read and parse an edge-list file
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let graph = parse_graph(&text)?;
    info!(
        path = %path.display(),
        edges = graph.edges().len(),
        nodes = graph.nodes().len(),
        "loaded graph"
    );
    Ok(graph)
}

fn parse_edge(input: &str) -> IResult<&str, Edge> {
    let (input, source) = parse_point(input)?;
    let (input, _) = point_separator(input)?;
    let (input, target) = parse_point(input)?;
    Ok((input, Edge::new(source, target)))
}

fn point_separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(space0, tag("->"), space0)),
        coordinate_separator,
    ))(input)
}

fn coordinate_separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), delimited(space0, char(','), space0)),
        value((), space1),
    ))(input)
}

fn parse_point(input: &str) -> IResult<&str, Point3<f64>> {
    alt((
        delimited(
            pair(char('('), space0),
            parse_coordinates,
            pair(space0, char(')')),
        ),
        parse_coordinates,
    ))(input)
}

fn parse_coordinates(input: &str) -> IResult<&str, Point3<f64>> {
    map(
        tuple((
            double,
            preceded(coordinate_separator, double),
            preceded(coordinate_separator, double),
        )),
        |(x, y, z)| Point3::new(x, y, z),
    )(input)
}
