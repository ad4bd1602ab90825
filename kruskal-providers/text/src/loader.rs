//! Parsing of the vertex-count-then-triples edge list format.

use std::io::BufRead;

use kruskal_core::{Edge, Graph, VertexId, Weight};
use tracing::{Span, debug, field, instrument};

use crate::errors::TextProviderError;

/// Largest vertex count the loader accepts.
///
/// Component trackers keep one machine word per vertex, so the count is capped
/// at 2^31 and never above what a single allocation of words can address.
pub const MAX_VERTEX_COUNT: usize = {
    let addressable = isize::MAX.unsigned_abs() / size_of::<usize>();
    if addressable < 1 << 31 { addressable } else { 1 << 31 }
};

/// Parses an edge list held in memory.
///
/// # Errors
/// See [`read_graph`].
///
/// # Examples
/// ```
/// use kruskal_providers_text::parse_graph;
///
/// let graph = parse_graph("3\n0 1 5\n0 1 2\n\n1 2 4\n")?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// # Ok::<(), kruskal_providers_text::TextProviderError>(())
/// ```
pub fn parse_graph(input: &str) -> Result<Graph, TextProviderError> {
    read_graph(input.as_bytes())
}

/// Reads an edge list and builds a validated, normalized graph.
///
/// Blank lines are skipped anywhere in the input. Line numbers in errors are
/// 1-based and count blank lines.
///
/// # Errors
/// - [`TextProviderError::MissingVertexCount`] when the input has no non-blank
///   line.
/// - [`TextProviderError::VertexCount`] when the first non-blank line is not a
///   non-negative integer.
/// - [`TextProviderError::VertexCountTooLarge`] when that integer exceeds
///   [`MAX_VERTEX_COUNT`].
/// - [`TextProviderError::MalformedLine`] when an edge line is not exactly
///   three integers with non-negative endpoints.
/// - [`TextProviderError::Graph`] when an endpoint is not below the vertex
///   count.
/// - [`TextProviderError::Io`] when reading fails.
#[instrument(
    name = "text.read_graph",
    err,
    skip(reader),
    fields(vertex_count = field::Empty, edges = field::Empty),
)]
pub fn read_graph(reader: impl BufRead) -> Result<Graph, TextProviderError> {
    let mut vertex_count: Option<usize> = None;
    let mut edges: Vec<(usize, Edge)> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let content = line.trim();
        if content.is_empty() {
            continue;
        }
        if vertex_count.is_none() {
            vertex_count = Some(parse_vertex_count(number, content)?);
        } else {
            edges.push((number, parse_edge(number, content)?));
        }
    }

    let vertex_count = vertex_count.ok_or(TextProviderError::MissingVertexCount)?;
    let span = Span::current();
    span.record("vertex_count", vertex_count);
    span.record("edges", edges.len());

    let graph = Graph::from_edges(vertex_count, edges.iter().map(|&(_, edge)| edge)).map_err(
        |source| TextProviderError::Graph {
            line: first_out_of_range_line(&edges, vertex_count),
            source,
        },
    )?;
    debug!(normalized = graph.edges().len(), "edge list loaded");
    Ok(graph)
}

fn first_out_of_range_line(edges: &[(usize, Edge)], vertex_count: usize) -> usize {
    edges
        .iter()
        .find(|(_, edge)| !edge.fits(vertex_count))
        .map_or(0, |&(line, _)| line)
}

fn parse_vertex_count(line: usize, content: &str) -> Result<usize, TextProviderError> {
    let vertex_count = content
        .parse::<usize>()
        .map_err(|_| TextProviderError::VertexCount {
            line,
            content: content.to_owned(),
        })?;
    if vertex_count > MAX_VERTEX_COUNT {
        return Err(TextProviderError::VertexCountTooLarge {
            line,
            vertex_count,
            max: MAX_VERTEX_COUNT,
        });
    }
    Ok(vertex_count)
}

fn parse_edge(line: usize, content: &str) -> Result<Edge, TextProviderError> {
    let malformed = |reason| TextProviderError::MalformedLine {
        line,
        content: content.to_owned(),
        reason,
    };

    let mut fields = content.split_whitespace();
    let (Some(from), Some(to), Some(weight), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed("expected exactly three fields `from to weight`"));
    };

    let from = from
        .parse::<VertexId>()
        .map_err(|_| malformed("`from` is not a vertex id"))?;
    let to = to
        .parse::<VertexId>()
        .map_err(|_| malformed("`to` is not a vertex id"))?;
    let weight = weight
        .parse::<Weight>()
        .map_err(|_| malformed("`weight` is not a 32-bit integer"))?;
    Ok(Edge::new(from, to, weight))
}
