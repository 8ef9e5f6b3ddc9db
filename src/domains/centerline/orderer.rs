use super::types::{CandidateSet, Path, Point};
use ordered_float::OrderedFloat;

/// Chain the candidates into a path by repeatedly taking the nearest
/// unvisited point, starting from `anchor`.
///
/// Greedy, O(n^2). Equal distances resolve to the earliest candidate.
pub fn order_path(candidates: CandidateSet, anchor: Point) -> Path {
    let points = candidates.into_points();
    let mut visited = vec![false; points.len()];
    let mut ordered = Vec::with_capacity(points.len());
    let mut cursor = anchor;

    while let Some(idx) = nearest_unvisited(&points, &visited, &cursor) {
        visited[idx] = true;
        cursor = points[idx];
        ordered.push(cursor);
    }

    Path::from(ordered)
}

fn nearest_unvisited(points: &[Point], visited: &[bool], from: &Point) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(idx, _)| !visited[*idx])
        .min_by_key(|(_, p)| OrderedFloat(p.distance(from)))
        .map(|(idx, _)| idx)
}
