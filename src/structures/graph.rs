use std::{collections::HashMap, fmt::Debug, hash::Hash};

use thiserror::Error;

use crate::structures::Weight;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("self-loop on {0} is not supported")]
    SelfLoop(String),
    #[error("invalid weight between {from} and {to}: weights must be non-negative")]
    InvalidWeight { from: String, to: String },
    #[error("distance to {0} overflows the weight type")]
    Overflow(String),
}

// Weights are stored under both orderings of their endpoints.
#[derive(Debug, Clone)]
pub struct Graph<N, W> {
    nodes: Vec<N>,
    neighbors: HashMap<N, Vec<N>>,
    weights: HashMap<(N, N), W>,
}

impl<N, W> Default for Graph<N, W> {
    fn default() -> Self {
        Graph {
            nodes: Vec::new(),
            neighbors: HashMap::new(),
            weights: HashMap::new(),
        }
    }
}

impl<N, W> Graph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    pub fn new() -> Graph<N, W> {
        Graph::default()
    }

    pub fn add_node(&mut self, node: N) {
        if self.neighbors.contains_key(&node) {
            return;
        }
        self.nodes.push(node.clone());
        self.neighbors.insert(node, Vec::new());
    }

    /// Registers unknown endpoints. Adding the same pair again replaces its weight.
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::SelfLoop(format!("{from:?}")));
        }
        if !weight.is_valid() {
            return Err(GraphError::InvalidWeight {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
            });
        }

        self.add_node(from.clone());
        self.add_node(to.clone());

        let known = self
            .weights
            .insert((from.clone(), to.clone()), weight)
            .is_some();
        self.weights.insert((to.clone(), from.clone()), weight);

        if !known {
            if let Some(adj) = self.neighbors.get_mut(&from) {
                adj.push(to.clone());
            }
            if let Some(adj) = self.neighbors.get_mut(&to) {
                adj.push(from);
            }
        }

        Ok(())
    }

    pub fn neighbors(&self, node: &N) -> &[N] {
        self.neighbors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.weights.get(&(from.clone(), to.clone())).copied()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.neighbors.contains_key(node)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len() / 2
    }
}
