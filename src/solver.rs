//! Fixed-endpoint nearest-neighbour solver.
//!
//! Starting from `start`, repeatedly moves to the closest unvisited point,
//! keeping `end` (if any) aside until the very last position. Ties go to the
//! lowest index, so the same inputs always give the same order.
//!
//! This is a heuristic. Tours on clustered or adversarial point sets can be
//! noticeably longer than optimal; `SolveOptions::improvement_passes` opts
//! into a bounded 2-opt pass.

use tracing::debug;

use crate::error::{Endpoint, RouteError};
use crate::matrix::DistanceMatrix;

#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Maximum number of 2-opt sweeps after the greedy pass. Zero keeps the
    /// plain nearest-neighbour order.
    pub improvement_passes: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Permutation of `0..n`.
    pub order: Vec<usize>,
    /// Meters along `order`.
    pub total_distance: f64,
}

/// Checks the point count and endpoint indices for `n` points.
pub fn validate_endpoints(n: usize, start: usize, end: Option<usize>) -> Result<(), RouteError> {
    if n < 2 {
        return Err(RouteError::InsufficientLocations(n));
    }
    if start >= n {
        return Err(RouteError::IndexOutOfRange {
            endpoint: Endpoint::Start,
            index: start,
            len: n,
        });
    }
    match end {
        Some(end) if end >= n => Err(RouteError::IndexOutOfRange {
            endpoint: Endpoint::End,
            index: end,
            len: n,
        }),
        Some(end) if end == start => Err(RouteError::EndEqualsStart(end)),
        _ => Ok(()),
    }
}

/// Plain nearest-neighbour order from `start`, finishing at `end` if given.
pub fn solve(matrix: &DistanceMatrix, start: usize, end: Option<usize>) -> Result<Solution, RouteError> {
    solve_with(matrix, start, end, &SolveOptions::default())
}

pub fn solve_with(
    matrix: &DistanceMatrix,
    start: usize,
    end: Option<usize>,
    options: &SolveOptions,
) -> Result<Solution, RouteError> {
    let n = matrix.len();
    validate_endpoints(n, start, end)?;
    matrix.check_shape(n)?;

    let mut order = nearest_neighbour(matrix, start, end);
    if options.improvement_passes > 0 {
        two_opt(matrix, &mut order, end.is_some(), options.improvement_passes);
    }

    let total_distance = matrix.path_distance(&order);
    debug!(stops = order.len(), total_distance, "solved route order");

    Ok(Solution {
        order,
        total_distance,
    })
}

fn nearest_neighbour(matrix: &DistanceMatrix, start: usize, end: Option<usize>) -> Vec<usize> {
    let n = matrix.len();
    let target = n - usize::from(end.is_some());

    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    order.push(start);
    visited[start] = true;
    let mut current = start;

    while order.len() < target {
        let mut best: Option<(usize, f64)> = None;
        for i in 0..n {
            if visited[i] || Some(i) == end {
                continue;
            }
            let distance = matrix.distance(current, i);
            // Strict comparison keeps the first (lowest) index on ties.
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((i, distance));
            }
        }

        let Some((next, _)) = best else {
            break;
        };
        order.push(next);
        visited[next] = true;
        current = next;
    }

    if let Some(end) = end {
        order.push(end);
    }

    order
}

/// Reverses interior segments while that strictly shortens the order.
///
/// Position 0 never moves; the last position only moves when the end is open.
/// Segment reversal flips leg direction, so candidates are re-costed in full
/// to stay correct on asymmetric matrices.
fn two_opt(matrix: &DistanceMatrix, order: &mut [usize], fixed_end: bool, max_passes: usize) {
    let n = order.len();
    let last_movable = if fixed_end { n.saturating_sub(2) } else { n.saturating_sub(1) };
    if last_movable < 2 {
        return;
    }

    let mut best = matrix.path_distance(order);
    for _ in 0..max_passes {
        let mut improved = false;
        for i in 1..last_movable {
            for j in i + 1..=last_movable {
                order[i..=j].reverse();
                let candidate = matrix.path_distance(order);
                if candidate < best {
                    best = candidate;
                    improved = true;
                } else {
                    order[i..=j].reverse();
                }
            }
        }
        if !improved {
            break;
        }
    }
}
