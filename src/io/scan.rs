//! Parsing of edges from the textual graph formats.
//!
//! There are two formats, one for each storage.
//!
//! **Matrix** (used by [`DenseGraph`]) is a square matrix of costs, one row
//! per line, cells separated by whitespace. A nonzero cell in row `i` and
//! column `j` is the edge `(i, j, cell)`:
//!
//! ```text
//! 0 2 10 0
//! 0 0 3 0
//! 0 0 0 1
//! 0 0 0 0
//! ```
//!
//! Only rows terminated by a newline are scanned. A token that is not an
//! integer ends its row.
//!
//! **List** (used by [`SparseGraph`]) is a `;`-separated sequence of edges
//! written as `from-to,cost`:
//!
//! ```text
//! 0-1,2; 1-2,3; 0-2,10; 2-3,1
//! ```
//!
//! The last edge does not need to be followed by `;`. Tokens that do not have
//! this form are skipped.

use crate::{
    core::{marker::EdgeType, Cost, Edge, VertexId},
    storage::{DenseGraph, SparseGraph},
};

/// Parsing of edges in the textual format native to the storage.
pub trait ScanEdges {
    fn scan_edges(data: &str) -> Vec<Edge>;
}

impl<Ty: EdgeType> ScanEdges for DenseGraph<Ty> {
    fn scan_edges(data: &str) -> Vec<Edge> {
        scan_matrix(data)
    }
}

impl<Ty: EdgeType> ScanEdges for SparseGraph<Ty> {
    fn scan_edges(data: &str) -> Vec<Edge> {
        scan_list(data)
    }
}

pub fn scan_matrix(data: &str) -> Vec<Edge> {
    let mut edges = Vec::new();

    let rows = data.split_inclusive('\n').filter(|row| row.ends_with('\n'));

    for (i, row) in rows.enumerate() {
        for (j, token) in row.split_whitespace().enumerate() {
            let Ok(cost) = token.parse::<Cost>() else {
                tracing::trace!(row = i, token, "non-integer cell ends the row");
                break;
            };

            if cost != 0 {
                edges.push(Edge::new(i, j, cost));
            }
        }
    }

    edges
}

pub fn scan_list(data: &str) -> Vec<Edge> {
    data.split(';')
        .filter(|token| !token.trim().is_empty())
        .filter_map(|token| {
            let edge = parse_list_edge(token);

            if edge.is_none() {
                tracing::trace!(token, "skipping malformed edge");
            }

            edge
        })
        .collect()
}

fn parse_list_edge(token: &str) -> Option<Edge> {
    let dash = token.find('-')?;
    let comma = token.find(',')?;

    // Only the first occurrences are separators, so that a negative cost
    // still parses.
    let mut token = token.to_owned();
    token.replace_range(dash..dash + 1, " ");
    token.replace_range(comma..comma + 1, " ");

    let mut parts = token.split_whitespace();
    let from = parts.next()?.parse::<VertexId>().ok()?;
    let to = parts.next()?.parse::<VertexId>().ok()?;
    let cost = parts.next()?.parse::<Cost>().ok()?;

    Some(Edge::new(from, to, cost))
}
