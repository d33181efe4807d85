//! Readers for the plain-text edge and heuristic files.
//!
//! Both formats are whitespace separated, one record per line:
//!
//! ```text
//! Luebeck Hamburg 63
//! Hamburg Bremen 116
//! END OF INPUT
//! ```
//!
//! Blank lines are skipped, short lines are ignored, and a line reading `END` or
//! `END OF INPUT` (any case) stops the read. Extra columns are ignored.
//! Numbers use Rust float syntax (`5`, `2.5`, `1e3`) and must be finite; Java-style
//! suffixes and hex floats such as `5d` or `0x1p3` are not accepted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::errors::{Result, RouteError};
use crate::graph::{Graph, Heuristics};

use num_traits::Float;


/// Parse edge lines `<from> <to> <cost>` into a graph
pub fn parse_edges<C, R>(reader: R, source_name: &str) -> Result<Graph<C>>
where
    C: Float + FromStr,
    R: BufRead,
{
    let mut graph = Graph::new();
    for_each_record(reader, source_name, 3, |line, tokens| {
        let cost = parse_number(tokens[2], source_name, line)?;
        graph.add_edge(tokens[0], tokens[1], cost);
        Ok(())
    })?;

    debug!(
        source = source_name,
        locations = graph.location_count(),
        edges = graph.edge_count(),
        "loaded edges"
    );
    Ok(graph)
}

/// Parse heuristic lines `<location> <estimate>` into a table
pub fn parse_heuristics<C, R>(reader: R, source_name: &str) -> Result<Heuristics<C>>
where
    C: Float + FromStr,
    R: BufRead,
{
    let mut table = Heuristics::new();
    for_each_record(reader, source_name, 2, |line, tokens| {
        let value = parse_number(tokens[1], source_name, line)?;
        table.set(tokens[0], value);
        Ok(())
    })?;

    debug!(source = source_name, entries = table.len(), "loaded heuristics");
    Ok(table)
}

/// Load an edge file from disk
pub fn load_edges<C>(path: &Path) -> Result<Graph<C>>
where
    C: Float + FromStr,
{
    parse_edges(open(path)?, &path.display().to_string())
}

/// Load a heuristic file from disk
pub fn load_heuristics<C>(path: &Path) -> Result<Heuristics<C>>
where
    C: Float + FromStr,
{
    parse_heuristics(open(path)?, &path.display().to_string())
}


fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| RouteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn is_sentinel(line: &str) -> bool {
    line.eq_ignore_ascii_case("END") || line.eq_ignore_ascii_case("END OF INPUT")
}

/// Feed every usable record to `handle` with its 1-based line number.
/// Records with fewer than `min_tokens` columns are dropped.
fn for_each_record<R, F>(reader: R, source_name: &str, min_tokens: usize, mut handle: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &[&str]) -> Result<()>,
{
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| RouteError::Read {
            source_name: source_name.to_string(),
            source,
        })?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if is_sentinel(line) {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < min_tokens {
            trace!(source = source_name, line = index + 1, "skipping short line");
            continue;
        }

        handle(index + 1, &tokens)?;
    }
    Ok(())
}

/// Finite real number; `inf` and `nan` are rejected so every cost stays ordered
fn parse_number<C: Float + FromStr>(token: &str, source_name: &str, line: usize) -> Result<C> {
    match token.parse::<C>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RouteError::InvalidNumber {
            source_name: source_name.to_string(),
            line,
            value: token.to_string(),
        }),
    }
}
