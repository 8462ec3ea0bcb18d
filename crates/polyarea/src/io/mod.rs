//! Text formats for point sets and polygons.
//!
//! Point files
//! - A header line holding the token `points` preceded by the count in
//!   parentheses, e.g. `(12 points)`. Other header tokens are ignored.
//! - One optional free-form line right after the header (instance files
//!   carry a description there); it is skipped when its first token is not
//!   an integer.
//! - Then `n` lines `<index> <x> <y>`, indices `0..n` in order, coordinates
//!   non-negative. Blank lines are ignored; anything after the `n`-th point
//!   is ignored.
//!
//! Polygon files
//! - One point index per line, in traversal order.

mod error;

use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use error::{LoadError, LoadResult};

use crate::geom::Point;

/// Parse a point set from the contents of a point file.
pub fn parse_points(text: &str) -> LoadResult<Vec<Point>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(k, l)| (k + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .peekable();

    let (_, header) = lines.next().ok_or(LoadError::MissingHeader)?;
    let n = parse_header(header)?;
    if n < 3 {
        return Err(LoadError::TooFewPoints { count: n });
    }
    if let Some(&(_, next)) = lines.peek() {
        let first = next.split_whitespace().next().unwrap_or("");
        if first.parse::<i64>().is_err() {
            lines.next();
        }
    }

    // The header count is untrusted; reserve no more than the text can hold.
    let cap = n.min(text.lines().count());
    let mut points = Vec::with_capacity(cap);
    let mut seen: HashMap<(i32, i32), usize> = HashMap::with_capacity(cap);
    for (line_no, line) in lines.take(n) {
        let index = points.len();
        let (found, x, y) = parse_point_line(line_no, line)?;
        if found != index as i64 {
            return Err(LoadError::WrongIndex {
                line: line_no,
                expected: index,
                found,
            });
        }
        if x < 0 || y < 0 {
            return Err(LoadError::NegativeCoordinate { index });
        }
        if let Some(&first) = seen.get(&(x, y)) {
            return Err(LoadError::DuplicatePoint {
                first,
                second: index,
            });
        }
        seen.insert((x, y), index);
        points.push(Point::new(x, y));
    }
    if points.len() < n {
        return Err(LoadError::Truncated {
            expected: n,
            found: points.len(),
        });
    }
    Ok(points)
}

fn parse_header(line: &str) -> LoadResult<usize> {
    let malformed = || LoadError::MalformedHeader {
        line: line.to_string(),
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let at = tokens
        .iter()
        .position(|t| t.contains("points"))
        .ok_or_else(malformed)?;
    let count = at.checked_sub(1).map(|k| tokens[k]).ok_or_else(malformed)?;
    count.replace('(', "").parse().map_err(|_| malformed())
}

fn parse_point_line(line_no: usize, line: &str) -> LoadResult<(i64, i32, i32)> {
    let malformed = || LoadError::MalformedPoint {
        line: line_no,
        text: line.to_string(),
    };
    let mut it = line.split_whitespace();
    let index: i64 = it.next().and_then(|t| t.parse().ok()).ok_or_else(malformed)?;
    let x: i32 = it.next().and_then(|t| t.parse().ok()).ok_or_else(malformed)?;
    let y: i32 = it.next().and_then(|t| t.parse().ok()).ok_or_else(malformed)?;
    Ok((index, x, y))
}

/// Load a point set from a point file.
pub fn read_points<P: AsRef<Path>>(path: P) -> LoadResult<Vec<Point>> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "reading points");
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let points = parse_points(&text)?;
    tracing::debug!(points = points.len(), "points loaded");
    Ok(points)
}

/// Parse a polygon (one index per line). Range and permutation checks are
/// left to `geom::check_validity`.
pub fn parse_polygon(text: &str) -> LoadResult<Vec<usize>> {
    text.lines()
        .enumerate()
        .map(|(k, l)| (k + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .map(|(line, l)| {
            l.parse().map_err(|_| LoadError::MalformedIndex {
                line,
                text: l.to_string(),
            })
        })
        .collect()
}

/// Load a polygon file.
pub fn read_polygon<P: AsRef<Path>>(path: P) -> LoadResult<Vec<usize>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_polygon(&text)
}

/// Write a polygon, one index per line. `None` is logged and writes nothing.
pub fn write_polygon<P: AsRef<Path>>(polygon: Option<&[usize]>, path: P) -> std::io::Result<()> {
    let path = path.as_ref();
    let Some(polygon) = polygon else {
        tracing::warn!(path = %path.display(), "polygon not defined; nothing written");
        return Ok(());
    };
    let mut out = BufWriter::new(fs::File::create(path)?);
    for v in polygon {
        writeln!(out, "{v}")?;
    }
    out.flush()?;
    tracing::info!(path = %path.display(), len = polygon.len(), "polygon written");
    Ok(())
}

/// `(max x, max y)` over a point set with non-negative coordinates.
///
/// Used for display scaling only; an empty set yields `(0, 0)`.
pub fn bounding_box(points: &[Point]) -> LoadResult<(i32, i32)> {
    let mut xmax = 0;
    let mut ymax = 0;
    for (index, p) in points.iter().enumerate() {
        if p.x < 0 || p.y < 0 {
            return Err(LoadError::NegativeCoordinate { index });
        }
        xmax = xmax.max(p.x);
        ymax = ymax.max(p.y);
    }
    Ok((xmax, ymax))
}
