use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::core::{error::ReadGraphError, GraphMut};

use super::scan::ScanEdges;

/// Clean-up applied to every line before the text is scanned for edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    extra_chars: Vec<char>,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Characters that do not belong to the data and are replaced by spaces,
    /// for example brackets around matrix rows.
    pub fn extra_chars<I>(self, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut extra_chars = self.extra_chars;
        extra_chars.extend(chars);
        Self { extra_chars }
    }

    /// Formats a single line:
    ///
    /// * extra characters are replaced by spaces,
    /// * runs of the same whitespace character are collapsed into one,
    /// * one leading and one trailing space is removed.
    pub fn format_line(&self, line: &str) -> String {
        let mut formatted = String::with_capacity(line.len());
        let mut prev = None;

        for c in line.chars() {
            let c = if self.extra_chars.contains(&c) { ' ' } else { c };

            if c.is_ascii_whitespace() && prev == Some(c) {
                continue;
            }

            formatted.push(c);
            prev = Some(c);
        }

        let trimmed = formatted.strip_prefix(' ').unwrap_or(&formatted);
        let trimmed = trimmed.strip_suffix(' ').unwrap_or(trimmed);

        trimmed.to_owned()
    }

    fn format_text<I, S>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = String::new();

        for line in lines {
            data.push_str(&self.format_line(line.as_ref()));
            data.push('\n');
        }

        data
    }
}

/// Reads edges from the file at `path` and inserts them into `graph`.
///
/// The file is read line by line, each line is cleaned up according to
/// `options` and the result is scanned in the format native to the storage
/// (see [`ScanEdges`]). Edges that the graph rejects (out of range, already
/// present, ...) are silently skipped.
pub fn read_graph<G, P>(graph: &mut G, path: P, options: &ReadOptions) -> Result<(), ReadGraphError>
where
    G: GraphMut + ScanEdges,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let io_error = |source| ReadGraphError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error)?;

    let inserted = insert_scanned(graph, &options.format_text(lines));

    tracing::debug!(path = %path.display(), inserted, "read graph from file");

    Ok(())
}

/// Same as [`read_graph`], but the text is given directly.
pub fn read_graph_from_str<G>(graph: &mut G, text: &str, options: &ReadOptions)
where
    G: GraphMut + ScanEdges,
{
    let inserted = insert_scanned(graph, &options.format_text(text.lines()));

    tracing::debug!(inserted, "read graph from string");
}

fn insert_scanned<G>(graph: &mut G, data: &str) -> usize
where
    G: GraphMut + ScanEdges,
{
    let edges = G::scan_edges(data);
    let before = graph.edge_count();

    graph.extend_with_edges(edges);

    graph.edge_count() - before
}
