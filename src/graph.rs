use crate::{Cost, Error};
use hashbrown::{hash_map::Entry, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// A directed connection to another Node of the [`Graph`].
///
/// An Edge is owned by the adjacency list of its source Node, so it only needs to name
/// the target and the Cost of getting there.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<Id> {
    /// the Node this Edge leads to
    pub to: Id,
    /// the Cost of traversing this Edge
    pub cost: Cost,
}

/// A weighted Network of Nodes, stored as adjacency lists.
///
/// The Generic type Parameter `Id` uniquely identifies a Node. This may be a Number, String,
/// or any other key that can be compared, hashed and cloned. The Graph holds no coordinate
/// data; Positions live in a separate [`PositionMap`](crate::heuristic::PositionMap) that
/// only the Heuristic ever sees.
///
/// Every Node referenced by an Edge is guaranteed to exist as a key of the Graph, since the
/// insert operations register missing endpoints on the fly.
///
/// ## Examples
/// Basic usage:
/// ```
/// use network_pathfinding::Graph;
///
/// let mut graph = Graph::new();
/// // inserting an Edge registers both endpoints
/// graph.add_edge("Berlin", "Munich", 504.0).unwrap();
/// graph.add_directed_edge("Munich", "Vienna", 354.0).unwrap();
///
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.neighbors(&"Munich").unwrap().len(), 2);
/// // the directed Edge has no reciprocal
/// assert_eq!(graph.neighbors(&"Vienna").unwrap().len(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Graph<Id> {
    nodes: HashMap<Id, Vec<Edge<Id>>>,
}

impl<Id: Clone + Eq + Hash + Debug> Graph<Id> {
    /// Creates an empty Graph.
    pub fn new() -> Graph<Id> {
        Graph {
            nodes: HashMap::new(),
        }
    }

    /// Registers `id` with an empty outgoing-Edge list.
    ///
    /// Returns `true` if the Node was newly added. Registering a Node twice is a no-op:
    /// the existing Edge list is left untouched, a diagnostic is emitted through [`log`]
    /// and `false` is returned.
    pub fn add_node(&mut self, id: Id) -> bool {
        match self.nodes.entry(id) {
            Entry::Occupied(entry) => {
                log::debug!("Node {:?} is already registered", entry.key());
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(Vec::new());
                true
            }
        }
    }

    /// Inserts a bidirectional Edge between `from` and `to`.
    ///
    /// This is a convenience for the common case of symmetric links: it appends the Edge
    /// `from -> to` and its reciprocal `to -> from`, both with the same `cost`. Missing
    /// endpoints are registered on the fly.
    ///
    /// ## Errors
    /// [`Error::NonFiniteCost`] if `cost` is NaN or infinite. Negative Costs are accepted
    /// by the Graph but break the optimality guarantee of [`find_path`](crate::find_path);
    /// a warning is logged when one is inserted.
    pub fn add_edge(&mut self, from: Id, to: Id, cost: Cost) -> Result<(), Error<Id>> {
        self.add_directed_edge(from.clone(), to.clone(), cost)?;
        self.add_directed_edge(to, from, cost)
    }

    /// Inserts a one-way Edge from `from` to `to`.
    ///
    /// Missing endpoints are registered on the fly. See [`add_edge`](Graph::add_edge) for
    /// the Cost requirements.
    pub fn add_directed_edge(&mut self, from: Id, to: Id, cost: Cost) -> Result<(), Error<Id>> {
        if !cost.is_finite() {
            return Err(Error::NonFiniteCost { from, to, cost });
        }
        if cost < 0.0 {
            log::warn!(
                "Edge {:?} -> {:?} has negative Cost {}, the search may return non-optimal Paths",
                from,
                to,
                cost
            );
        }
        self.nodes.entry(to.clone()).or_default();
        self.nodes.entry(from).or_default().push(Edge { to, cost });
        Ok(())
    }

    /// Returns the outgoing Edges of a Node.
    ///
    /// ## Errors
    /// [`Error::UnknownNode`] if `id` was never added to the Graph. A missing Node is a
    /// caller bug and is never treated as "no neighbors".
    pub fn neighbors(&self, id: &Id) -> Result<&[Edge<Id>], Error<Id>> {
        self.nodes
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownNode(id.clone()))
    }

    /// Returns the Cost of the first Edge from `from` to `to`, if one exists.
    ///
    /// Useful for re-deriving the per-hop Costs of a finished [`Path`](crate::Path).
    ///
    /// ## Errors
    /// [`Error::UnknownNode`] if `from` was never added to the Graph.
    pub fn edge_cost(&self, from: &Id, to: &Id) -> Result<Option<Cost>, Error<Id>> {
        Ok(self
            .neighbors(from)?
            .iter()
            .find(|edge| edge.to == *to)
            .map(|edge| edge.cost))
    }

    /// `true` if `id` is registered in the Graph.
    pub fn contains(&self, id: &Id) -> bool {
        self.nodes.contains_key(id)
    }

    /// The number of registered Nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph has no Nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// An Iterator over all registered Node identifiers, in no particular order.
    pub fn node_ids(&self) -> impl Iterator<Item = &Id> + '_ {
        self.nodes.keys()
    }
}

impl<Id> Default for Graph<Id> {
    fn default() -> Graph<Id> {
        Graph {
            nodes: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_auto_registers_endpoints() {
        let mut graph = Graph::new();
        graph.add_directed_edge("A", "B", 1.0).unwrap();

        assert!(graph.contains(&"A"));
        assert!(graph.contains(&"B"));
        assert!(graph.neighbors(&"B").unwrap().is_empty());
    }

    #[test]
    fn duplicate_node_keeps_edges() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4.0).unwrap();

        assert!(!graph.add_node("A"));
        assert_eq!(
            graph.neighbors(&"A").unwrap(),
            &[Edge {
                to: "B",
                cost: 4.0
            }][..]
        );
    }

    #[test]
    fn bidirectional_inserts_reciprocal() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4.0).unwrap();

        assert_eq!(graph.edge_cost(&"A", &"B").unwrap(), Some(4.0));
        assert_eq!(graph.edge_cost(&"B", &"A").unwrap(), Some(4.0));
    }

    #[test]
    fn unknown_node_fails_loudly() {
        let graph = Graph::<&str>::new();

        assert_eq!(graph.neighbors(&"A"), Err(Error::UnknownNode("A")));
        assert_eq!(graph.edge_cost(&"A", &"B"), Err(Error::UnknownNode("A")));
    }

    #[test]
    fn non_finite_cost_is_rejected() {
        let mut graph = Graph::new();

        assert!(matches!(
            graph.add_edge("A", "B", f64::NAN),
            Err(Error::NonFiniteCost { from: "A", to: "B", .. })
        ));
        assert!(graph.add_edge("A", "B", f64::INFINITY).is_err());
        // a rejected Edge must not register its endpoints
        assert!(graph.is_empty());
    }

    #[test]
    fn negative_cost_is_accepted() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", -2.0).unwrap();

        assert_eq!(graph.edge_cost(&"A", &"B").unwrap(), Some(-2.0));
    }

    #[test]
    fn missing_edge_is_none() {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_node("B");

        assert_eq!(graph.edge_cost(&"A", &"B").unwrap(), None);
    }
}
