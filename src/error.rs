use crate::Cost;
use std::fmt::Debug;
use thiserror::Error;

/// The Errors that can occur while building or searching a [`Graph`](crate::Graph).
///
/// Note that failing to find a Path is *not* an Error: [`find_path`](crate::find_path)
/// reports that as `Ok(None)`. The variants here are contract violations by the caller
/// and are never silently swallowed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error<Id: Debug> {
    /// a Node was referenced that was never added to the Graph
    #[error("unknown Node {0:?}")]
    UnknownNode(Id),

    /// a Node has no entry in the Position map handed to the Heuristic
    #[error("no Position for Node {0:?}")]
    UnknownPosition(Id),

    /// an Edge was inserted with a Cost that is NaN or infinite
    #[error("Edge {from:?} -> {to:?} has non-finite Cost {cost}")]
    NonFiniteCost {
        /// the source Node of the rejected Edge
        from: Id,
        /// the target Node of the rejected Edge
        to: Id,
        /// the offending Cost value
        cost: Cost,
    },
}
