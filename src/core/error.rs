use std::{fmt, io};

use thiserror::Error;

use super::edge::Edge;

#[derive(Debug, Error, PartialEq)]
#[error("inserting edge {edge} failed: {kind}")]
pub struct InsertEdgeError {
    pub edge: Edge,
    pub kind: InsertEdgeErrorKind,
}

impl InsertEdgeError {
    pub fn new(edge: Edge, kind: InsertEdgeErrorKind) -> Self {
        Self { edge, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    ZeroCost,
    AlreadyExists,
}

impl fmt::Display for InsertEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            InsertEdgeErrorKind::SourceAbsent => "source does not exist",
            InsertEdgeErrorKind::DestinationAbsent => "destination does not exist",
            InsertEdgeErrorKind::ZeroCost => "the storage cannot represent an edge with zero cost",
            InsertEdgeErrorKind::AlreadyExists => "an edge between the vertices already exists",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("removing edge {from}-{to} failed: {kind}")]
pub struct RemoveEdgeError {
    pub from: usize,
    pub to: usize,
    pub kind: RemoveEdgeErrorKind,
}

impl RemoveEdgeError {
    pub fn new(from: usize, to: usize, kind: RemoveEdgeErrorKind) -> Self {
        Self { from, to, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoveEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    EdgeAbsent,
}

impl fmt::Display for RemoveEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RemoveEdgeErrorKind::SourceAbsent => "source does not exist",
            RemoveEdgeErrorKind::DestinationAbsent => "destination does not exist",
            RemoveEdgeErrorKind::EdgeAbsent => "edge does not exist",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error)]
pub enum ReadGraphError {
    #[error("reading graph from {path} failed: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}
