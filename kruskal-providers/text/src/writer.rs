//! Text rendering of edge lists and spanning forests.

use std::io::{self, Write};

use kruskal_core::{Edge, MinimumSpanningForest};

/// Writes the forest as `(from,to) ` pairs on one line followed by the total
/// cost on the next.
///
/// # Errors
/// Propagates failures from `out`.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, Strategy, kruskal_with};
/// use kruskal_providers_text::write_forest;
///
/// let forest = kruskal_with(Strategy::Naive, 3, [Edge::new(0, 1, 1), Edge::new(1, 2, 2)])?;
/// let mut out = Vec::new();
/// write_forest(&forest, &mut out)?;
/// assert_eq!(String::from_utf8(out)?, "(0,1) (1,2) \nTotal cost: 3\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_forest(forest: &MinimumSpanningForest, mut out: impl Write) -> io::Result<()> {
    for edge in forest.edges() {
        write!(out, "({},{}) ", edge.from(), edge.to())?;
    }
    writeln!(out)?;
    writeln!(out, "Total cost: {}", forest.total_cost())
}

/// Prints one `(from,to,w=weight)` line per edge.
///
/// # Errors
/// Propagates failures from `out`.
pub fn print_edges(edges: &[Edge], mut out: impl Write) -> io::Result<()> {
    for edge in edges {
        writeln!(out, "{edge}")?;
    }
    Ok(())
}

/// Prints the forest as a `(from,to) ->` chain followed by the total cost.
///
/// # Errors
/// Propagates failures from `out`.
pub fn print_forest(forest: &MinimumSpanningForest, mut out: impl Write) -> io::Result<()> {
    for edge in forest.edges() {
        write!(out, "({},{}) ->", edge.from(), edge.to())?;
    }
    writeln!(out)?;
    writeln!(out, "Total cost: {}", forest.total_cost())
}

#[cfg(test)]
mod tests {
    use kruskal_core::{Strategy, kruskal_with};

    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("output is UTF-8")
    }

    #[test]
    fn prints_edges_one_per_line() {
        let edges = [Edge::new(0, 1, 1), Edge::new(2, 3, -4)];
        let text = render(|out| print_edges(&edges, out));
        assert_eq!(text, "(0,1,w=1)\n(2,3,w=-4)\n");
    }

    #[test]
    fn prints_forest_as_chain() {
        let forest = kruskal_with(
            Strategy::DisjointSet,
            3,
            [Edge::new(1, 2, 2), Edge::new(0, 1, 1), Edge::new(0, 2, 3)],
        )
        .expect("edges are in range");
        let text = render(|out| print_forest(&forest, out));
        assert_eq!(text, "(0,1) ->(1,2) ->\nTotal cost: 3\n");
    }

    #[test]
    fn empty_forest_still_reports_cost() {
        let forest = kruskal_with(Strategy::Naive, 0, Vec::<Edge>::new()).expect("no edges");
        assert_eq!(render(|out| write_forest(&forest, out)), "\nTotal cost: 0\n");
        assert_eq!(render(|out| print_forest(&forest, out)), "\nTotal cost: 0\n");
    }
}
