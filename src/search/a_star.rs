use super::OpenElement;
use crate::{Cost, Error, Graph, Path};
use hashbrown::{HashMap, HashSet};
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

/// Searches a [`Graph`] for the cheapest Path between two Nodes using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The search expands Nodes in order of their f-score, the Cost so far plus the Heuristic
/// estimate of the remaining Cost. Instead of decreasing the priority of a Node that was
/// reached more cheaply, the Node is simply pushed onto the open list again; the stale
/// entry is recognized and dropped when it surfaces. Ties between equal f-scores are
/// resolved by whatever order the open list pops them in.
///
/// The first pop of the goal yields the cheapest Path, provided the Heuristic is
/// admissible and no Edge has a negative Cost. See the [`heuristic`](crate::heuristic)
/// module for the admissibility contract.
///
/// ## Examples
/// Basic usage:
/// ```
/// use network_pathfinding::prelude::*;
///
/// // A --10-- G
/// //  \      /
/// //   1    2
/// //    \  /
/// //     B
/// let mut graph = Graph::new();
/// graph.add_edge("A", "G", 10.0).unwrap();
/// graph.add_edge("A", "B", 1.0).unwrap();
/// graph.add_edge("B", "G", 2.0).unwrap();
///
/// let route = find_path(&graph, &"A", &"G", zero).unwrap().unwrap();
///
/// assert_eq!(route.path, vec!["A", "B", "G"]);
/// assert_eq!(route.cost, 3.0);
/// ```
///
/// ## Arguments
/// - `graph` - the Network to search; read-only for the duration of the call
/// - `start` - the Node the Path has to begin at
/// - `goal` - the Node the Path has to end at
/// - `heuristic` - estimates the remaining Cost between two Nodes, usually a closure
///   binding [`euclid`](crate::heuristic::euclid) to a Position map
///
/// ## Returns
/// `Ok(Some(path))` with the cheapest Path from `start` to `goal`, beginning with `start`
/// and ending with `goal`. If `start == goal` the Path consists of that single Node with
/// Cost 0. `Ok(None)` if the goal is unreachable; no Cost is reported in that case.
///
/// ## Errors
/// [`Error::UnknownNode`] if `start` or `goal` was never added to the Graph, and whatever
/// Error the Heuristic returns, typically [`Error::UnknownPosition`].
pub fn find_path<Id: Clone + Eq + Hash + Debug>(
    graph: &Graph<Id>,
    start: &Id,
    goal: &Id,
    heuristic: impl Fn(&Id, &Id) -> Result<Cost, Error<Id>>,
) -> Result<Option<Path<Id>>, Error<Id>> {
    if !graph.contains(start) {
        return Err(Error::UnknownNode(start.clone()));
    }
    if !graph.contains(goal) {
        return Err(Error::UnknownNode(goal.clone()));
    }
    if start == goal {
        return Ok(Some(Path::new(vec![start.clone()], 0.0)));
    }

    let mut g_score: HashMap<Id, Cost> = HashMap::new();
    let mut came_from: HashMap<Id, Id> = HashMap::new();
    let mut closed: HashSet<Id> = HashSet::new();
    let mut open = BinaryHeap::new();

    g_score.insert(start.clone(), 0.0);
    open.push(OpenElement(start.clone(), heuristic(start, goal)?));

    while let Some(OpenElement(current, _)) = open.pop() {
        if current == *goal {
            let cost = g_score[goal];

            let steps = {
                let mut steps = vec![goal.clone()];
                let mut current = goal;

                while current != start {
                    current = &came_from[current];
                    steps.push(current.clone());
                }
                steps.reverse();
                steps
            };

            return Ok(Some(Path::new(steps, cost)));
        }

        // a Node reached more cheaply later sits in the open list twice; only the pop
        // carrying its best f-score expands it, stale entries are dropped here
        if !closed.insert(current.clone()) {
            continue;
        }

        let current_cost = g_score[&current];

        for edge in graph.neighbors(&current)? {
            let tentative = current_cost + edge.cost;
            let known = g_score.get(&edge.to).copied().unwrap_or(Cost::INFINITY);

            if tentative < known {
                came_from.insert(edge.to.clone(), current.clone());
                g_score.insert(edge.to.clone(), tentative);
                open.push(OpenElement(
                    edge.to.clone(),
                    tentative + heuristic(&edge.to, goal)?,
                ));
            }
        }
    }

    Ok(None)
}
