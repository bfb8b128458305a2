#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find least-cost routes through weighted Networks.
//!
//! ## Introduction
//! Many routing-style problems boil down to the same question: given a Network of Nodes
//! connected by weighted Edges (the weight being latency, distance, fuel, ...), what is the
//! cheapest way to get from one Node to another? This crate answers that question with the
//! [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm): a best-first search
//! that uses a Heuristic estimate of the remaining Cost to expand as few Nodes as possible.
//!
//! The crate is deliberately small: a [`Graph`] to hold the Edges, a [`find_path`] function
//! to search it, and a [`heuristic`] module with the common straight-line estimate. Anything
//! around that (populating the Network, displaying the result) is left to the caller.
//!
//! ## Examples
//! Finding the cheapest transmission route through a small Network:
//! ```
//! use network_pathfinding::prelude::*;
//!
//! // the Positions of the Nodes, used only by the Heuristic
//! let positions: PositionMap<&str> = [
//!     ("A", (0.0, 0.0)),
//!     ("B", (2.0, 3.0)),
//!     ("C", (4.0, 1.0)),
//!     ("D", (6.0, 4.0)),
//!     ("E", (8.0, 2.0)),
//!     ("F", (10.0, 0.0)),
//! ]
//! .into_iter()
//! .collect();
//!
//! // the Network itself: Edges carry the transmission Cost
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", 4.0).unwrap();
//! graph.add_edge("A", "C", 2.0).unwrap();
//! graph.add_edge("B", "D", 5.0).unwrap();
//! graph.add_edge("C", "D", 7.0).unwrap();
//! graph.add_edge("C", "E", 3.0).unwrap();
//! graph.add_edge("D", "E", 2.0).unwrap();
//! graph.add_edge("E", "F", 1.0).unwrap();
//!
//! let route = find_path(&graph, &"A", &"F", |a, b| euclid(a, b, &positions))
//!     .unwrap()
//!     .expect("F should be reachable from A");
//!
//! assert_eq!(route.path, vec!["A", "C", "E", "F"]);
//! assert_eq!(route.cost, 6.0);
//! ```
//! Note that the Graph never sees the Positions. They exist solely for the Heuristic closure,
//! so a Network without meaningful coordinates can search with [`heuristic::zero`] instead and
//! still get correct (if slower) results.
//!
//! ## Correctness
//! A* only guarantees the cheapest route if the supplied Heuristic is *admissible*, meaning it
//! never overestimates the true remaining Cost, and all Edge Costs are non-negative.
//! [`euclid`](heuristic::euclid) is admissible whenever every Edge costs at least the
//! straight-line distance between its endpoints. The engine does not verify either condition.
//!
//! ## Concurrency
//! One search runs to completion on the calling thread. All bookkeeping lives inside the
//! [`find_path`] invocation, so any number of searches may run over the same Graph from
//! different threads, as long as nobody mutates the Graph while they do.

/// The Type used to measure the Cost of traversing an Edge or a Path
pub type Cost = f64;

/// A Node's location in the 2D plane, used by the [`euclid`](heuristic::euclid) Heuristic
pub type Position = (f64, f64);

mod error;
pub use self::error::Error;

mod graph;
pub use self::graph::{Edge, Graph};

mod path;
pub use self::path::Path;

pub mod heuristic;

mod search;
pub use self::search::find_path;

/// Everything needed to build and search a Network
pub mod prelude {
    pub use crate::heuristic::{euclid, zero, PositionMap};
    pub use crate::{find_path, Cost, Edge, Error, Graph, Path, Position};
}
