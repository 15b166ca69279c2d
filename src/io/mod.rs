//! Text loaders and writer for problem and solution files
//!
//! Problem file: vessel count, initial configuration, goal configuration,
//! obstacle count, then one obstacle per line given as the coordinates of
//! its four corners. Solution file: `pathLength cost` header, then one
//! configuration per line.
//!
//! These are the only operations in the crate that produce hard errors;
//! everything downstream is pure and infallible.

use std::fs;
use std::path::Path;

use crate::core::error::{BoomwalkError, Result};
use crate::geom::Rect;
use crate::model::{Configuration, Problem, Solution};

fn malformed_problem(line: usize, reason: impl Into<String>) -> BoomwalkError {
    BoomwalkError::MalformedProblem {
        line,
        reason: reason.into(),
    }
}

fn malformed_solution(line: usize, reason: impl Into<String>) -> BoomwalkError {
    BoomwalkError::MalformedSolution {
        line,
        reason: reason.into(),
    }
}

/// Parse one obstacle line: the x/y coordinates of all four corners
///
/// The rectangle is the axis-aligned bounding box of the listed corners, so
/// corner order does not matter.
fn parse_obstacle(text: &str) -> Option<Rect> {
    let values: Vec<f64> = text
        .split_whitespace()
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    if values.len() != 8 {
        return None;
    }
    let xs = [values[0], values[2], values[4], values[6]];
    let ys = [values[1], values[3], values[5], values[7]];
    let x_min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let y_min = ys.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    Some(Rect::new(x_min, y_min, x_max - x_min, y_max - y_min))
}

/// Load a problem description from a text file
pub fn load_problem(path: impl AsRef<Path>) -> Result<Problem> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines().enumerate();

    let (n, count_line) = lines
        .next()
        .ok_or_else(|| malformed_problem(1, "empty file"))?;
    let asv_count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| malformed_problem(n + 1, "expected vessel count"))?;
    if asv_count < 1 {
        return Err(malformed_problem(n + 1, "vessel count must be at least 1"));
    }

    let mut next_cfg = |what: &str| -> Result<Configuration> {
        let (n, line) = lines
            .next()
            .ok_or_else(|| malformed_problem(0, format!("missing {what}")))?;
        let cfg = Configuration::parse(line)
            .ok_or_else(|| malformed_problem(n + 1, format!("bad {what}")))?;
        if cfg.len() != asv_count {
            return Err(malformed_problem(
                n + 1,
                format!("{what} has {} vessels, expected {asv_count}", cfg.len()),
            ));
        }
        Ok(cfg)
    };

    let initial = next_cfg("initial configuration")?;
    let goal = next_cfg("goal configuration")?;

    let (n, count_line) = lines
        .next()
        .ok_or_else(|| malformed_problem(0, "missing obstacle count"))?;
    let obstacle_count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| malformed_problem(n + 1, "expected obstacle count"))?;

    let mut obstacles = Vec::with_capacity(obstacle_count);
    for _ in 0..obstacle_count {
        let (n, line) = lines
            .next()
            .ok_or_else(|| malformed_problem(0, "missing obstacle line"))?;
        let rect = parse_obstacle(line)
            .ok_or_else(|| malformed_problem(n + 1, "expected 8 corner coordinates"))?;
        obstacles.push(rect);
    }

    Ok(Problem::new(asv_count, initial, goal, obstacles))
}

/// Load a solution path from a text file
pub fn load_solution(path: impl AsRef<Path>) -> Result<Solution> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines().enumerate();

    let (n, header) = lines
        .next()
        .ok_or_else(|| malformed_solution(1, "empty file"))?;
    let mut parts = header.split_whitespace();
    let path_length: usize = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| malformed_solution(n + 1, "expected path length"))?;
    let cost: f64 = parts
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| malformed_solution(n + 1, "expected solution cost"))?;

    let mut path = Vec::with_capacity(path_length);
    for _ in 0..path_length {
        let (n, line) = lines
            .next()
            .ok_or_else(|| malformed_solution(0, "missing configuration line"))?;
        let cfg = Configuration::parse(line)
            .ok_or_else(|| malformed_solution(n + 1, "bad configuration"))?;
        path.push(cfg);
    }

    Ok(Solution::new(path, cost))
}

/// Save a solution back to the text format it was loaded from
pub fn save_solution(path: impl AsRef<Path>, solution: &Solution) -> Result<()> {
    let mut out = format!("{} {}\n", solution.path.len(), solution.cost);
    for cfg in &solution.path {
        out.push_str(&cfg.render());
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}
