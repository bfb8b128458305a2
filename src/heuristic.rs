//! The most common Heuristics to guide the search.
//!
//! [`find_path`](crate::find_path) accepts any `Fn(&Id, &Id) -> Result<Cost, Error<Id>>`
//! closure as Heuristic, estimating the remaining Cost from the first Node to the second.
//! The search is only guaranteed to return the cheapest Path if that estimate is
//! *admissible*: it must never overestimate the true remaining Cost. The engine does not
//! verify this; supplying an admissible Heuristic is the caller's responsibility.

use crate::{Cost, Error, Position};
use std::fmt::Debug;
use std::hash::Hash;

/// A mapping from Node identifiers to their [`Position`] in the 2D plane.
///
/// The Graph itself never touches this map; it is built by the caller and handed to
/// [`euclid`] through the Heuristic closure.
pub type PositionMap<Id> = hashbrown::HashMap<Id, Position>;

/// Returns the straight-line (Euclidean) distance between the Positions of `a` and `b`.
///
/// This Heuristic is admissible as long as every Edge of the Graph costs at least the
/// straight-line distance between its endpoints, which holds for most delay- or
/// distance-weighted Networks.
///
/// ## Examples
/// Basic usage:
/// ```
/// use network_pathfinding::heuristic::{euclid, PositionMap};
///
/// let positions: PositionMap<&str> = [("A", (0.0, 0.0)), ("B", (3.0, 4.0))]
///     .into_iter()
///     .collect();
///
/// assert_eq!(euclid(&"A", &"B", &positions), Ok(5.0));
/// ```
///
/// ## Errors
/// [`Error::UnknownPosition`] if either Node has no entry in `positions`.
pub fn euclid<Id: Clone + Eq + Hash + Debug>(
    a: &Id,
    b: &Id,
    positions: &PositionMap<Id>,
) -> Result<Cost, Error<Id>> {
    let &(ax, ay) = positions
        .get(a)
        .ok_or_else(|| Error::UnknownPosition(a.clone()))?;
    let &(bx, by) = positions
        .get(b)
        .ok_or_else(|| Error::UnknownPosition(b.clone()))?;

    let dx = ax - bx;
    let dy = ay - by;

    Ok((dx * dx + dy * dy).sqrt())
}

/// The trivial Heuristic: estimates every remaining Cost as 0.
///
/// Always admissible, which makes it the right choice for Networks without meaningful
/// coordinates. The search degrades to a uniform-cost (Dijkstra) search and expands more
/// Nodes than it would with a real estimate, but the result stays correct.
pub fn zero<Id: Debug>(_a: &Id, _b: &Id) -> Result<Cost, Error<Id>> {
    Ok(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclid_distance() {
        let positions: PositionMap<&str> = [("A", (1.0, 1.0)), ("B", (4.0, 5.0))]
            .into_iter()
            .collect();

        assert_eq!(euclid(&"A", &"B", &positions), Ok(5.0));
        assert_eq!(euclid(&"B", &"A", &positions), Ok(5.0));
        assert_eq!(euclid(&"A", &"A", &positions), Ok(0.0));
    }

    #[test]
    fn euclid_missing_position() {
        let positions: PositionMap<&str> = [("A", (0.0, 0.0))].into_iter().collect();

        assert_eq!(
            euclid(&"A", &"X", &positions),
            Err(Error::UnknownPosition("X"))
        );
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(zero::<&str>(&"A", &"B"), Ok(0.0));
    }
}
