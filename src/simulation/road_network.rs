//! Village road graph and route finding
//!
//! The graph is built once from a list of roads and is read-only afterwards.
//! Neighbors are always reported in road insertion order, which is what makes
//! route finding deterministic.

use petgraph::algo::connected_components;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet, VecDeque};

use super::error::{Result, SimError};
use super::types::Place;

/// Parses roads written as `"From-To"` into place pairs
pub fn parse_roads(roads: &[&str]) -> Result<Vec<(Place, Place)>> {
    roads
        .iter()
        .map(|road| match road.split('-').collect::<Vec<_>>().as_slice() {
            [from, to] if !from.is_empty() && !to.is_empty() => {
                Ok((Place::from(*from), Place::from(*to)))
            }
            _ => Err(SimError::MalformedRoad(road.to_string())),
        })
        .collect()
}

/// Undirected road graph between village places
#[derive(Debug, Clone, Default)]
pub struct VillageGraph {
    /// Places as nodes, edge weights are the road's insertion index
    graph: UnGraph<Place, usize>,

    /// Maps places to their node indices in the graph
    place_to_node: HashMap<Place, NodeIndex>,
}

impl VillageGraph {
    /// Builds the graph from a list of roads, each usable in both directions.
    ///
    /// Places are created on first use. Duplicate roads are kept and show up
    /// as duplicate neighbors.
    pub fn build<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<Place>,
        B: Into<Place>,
    {
        let mut village = Self::default();
        for (from, to) in edges {
            let from_node = village.node_or_insert(from.into());
            let to_node = village.node_or_insert(to.into());
            let road_index = village.graph.edge_count();
            village.graph.add_edge(from_node, to_node, road_index);
        }
        village
    }

    fn node_or_insert(&mut self, place: Place) -> NodeIndex {
        if let Some(node) = self.place_to_node.get(&place) {
            return *node;
        }
        let node = self.graph.add_node(place.clone());
        self.place_to_node.insert(place, node);
        node
    }

    fn node(&self, place: &Place) -> Result<NodeIndex> {
        self.place_to_node
            .get(place)
            .copied()
            .ok_or_else(|| SimError::UnknownPlace(place.clone()))
    }

    /// Adjacent nodes in road insertion order.
    /// petgraph walks its edge lists newest first, so sort by edge index.
    fn neighbor_nodes(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut roads: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges(node)
            .map(|edge| {
                let other = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                (edge.id(), other)
            })
            .collect();
        roads.sort_by_key(|(edge, _)| *edge);
        roads.into_iter().map(|(_, other)| other).collect()
    }

    /// Places directly reachable from `place`, in road insertion order
    pub fn neighbors(&self, place: &Place) -> Result<Vec<&Place>> {
        let node = self.node(place)?;
        Ok(self
            .neighbor_nodes(node)
            .into_iter()
            .map(|other| &self.graph[other])
            .collect())
    }

    /// Whether a road joins the two places. Unknown places are never adjacent.
    pub fn is_adjacent(&self, from: &Place, to: &Place) -> bool {
        match (self.place_to_node.get(from), self.place_to_node.get(to)) {
            (Some(from_node), Some(to_node)) => self.graph.contains_edge(*from_node, *to_node),
            _ => false,
        }
    }

    pub fn contains(&self, place: &Place) -> bool {
        self.place_to_node.contains_key(place)
    }

    /// All places in the order they were first seen
    pub fn places(&self) -> Vec<&Place> {
        self.graph.node_weights().collect()
    }

    pub fn place_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn road_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True when every place can reach every other place
    pub fn is_connected(&self) -> bool {
        connected_components(&self.graph) <= 1
    }

    /// Finds a shortest route between two places using breadth-first search.
    ///
    /// The returned route excludes `from` and ends with `to`; it is empty when
    /// both are the same place. Among routes of equal length, the one found
    /// first following road insertion order wins.
    pub fn find_route(&self, from: &Place, to: &Place) -> Result<Vec<Place>> {
        let start = self.node(from)?;
        let goal = self.node(to)?;
        if start == goal {
            return Ok(vec![]);
        }

        let mut discovered_from: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut seen: HashSet<NodeIndex> = HashSet::from([start]);
        let mut work: VecDeque<NodeIndex> = VecDeque::from([start]);

        while let Some(at) = work.pop_front() {
            for next in self.neighbor_nodes(at) {
                if !seen.insert(next) {
                    continue;
                }
                discovered_from.insert(next, at);
                if next == goal {
                    return Ok(self.trace_back(&discovered_from, start, goal));
                }
                work.push_back(next);
            }
        }

        Err(SimError::NoRoute {
            from: from.clone(),
            to: to.clone(),
        })
    }

    fn trace_back(
        &self,
        discovered_from: &HashMap<NodeIndex, NodeIndex>,
        start: NodeIndex,
        goal: NodeIndex,
    ) -> Vec<Place> {
        let mut route = vec![self.graph[goal].clone()];
        let mut at = goal;
        while let Some(&previous) = discovered_from.get(&at) {
            if previous == start {
                break;
            }
            route.push(self.graph[previous].clone());
            at = previous;
        }
        route.reverse();
        route
    }
}
