use std::{
    cmp::{Ordering, Reverse},
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use priority_queue::PriorityQueue;
use tracing::debug;

use crate::structures::{Graph, GraphError, Weight};

/// Only nodes reachable from the source appear in either map.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<N: Eq + Hash, W> {
    source: N,
    distances: HashMap<N, W>,
    predecessors: HashMap<N, N>,
}

impl<N, W> ShortestPaths<N, W>
where
    N: Clone + Eq + Hash,
    W: Copy,
{
    pub fn source(&self) -> &N {
        &self.source
    }

    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node)
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }

    pub fn distances(&self) -> &HashMap<N, W> {
        &self.distances
    }

    pub fn predecessors(&self) -> &HashMap<N, N> {
        &self.predecessors
    }

    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(previous) = self.predecessors.get(current) {
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();

        Some(path)
    }
}

/// Dijkstra with a linear scan for the closest unvisited node, O(n²).
///
/// Fails with [`GraphError::Overflow`] when a path length does not fit in `W`.
pub fn shortest_paths<N, W>(
    graph: &Graph<N, W>,
    source: &N,
) -> Result<ShortestPaths<N, W>, GraphError>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    if !graph.contains_node(source) {
        return Err(GraphError::UnknownNode(format!("{source:?}")));
    }

    let mut distances = HashMap::<N, W>::new();
    let mut predecessors = HashMap::<N, N>::new();
    let mut visited = HashSet::<&N>::new();
    distances.insert(source.clone(), W::zero());

    loop {
        let mut closest: Option<(&N, W)> = None;
        for node in graph.nodes() {
            if visited.contains(node) {
                continue;
            }
            let Some(&distance) = distances.get(node) else {
                continue;
            };
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((node, distance));
            }
        }

        let Some((current, current_distance)) = closest else {
            break;
        };

        for neighbor in graph.neighbors(current) {
            if visited.contains(neighbor) {
                continue;
            }
            let Some(weight) = graph.edge_weight(current, neighbor) else {
                continue;
            };
            let candidate = current_distance
                .checked_add(weight)
                .ok_or_else(|| GraphError::Overflow(format!("{neighbor:?}")))?;

            let improves = match distances.get(neighbor) {
                Some(&known) => candidate < known,
                None => true,
            };
            if improves {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), current.clone());
            }
        }

        visited.insert(current);
    }

    debug!(
        "Settled {} of {} nodes from {:?}",
        visited.len(),
        graph.node_count(),
        source
    );

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    })
}

// Weights accepted by the graph are never NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cost<W>(W);

impl<W: PartialOrd> Eq for Cost<W> {}

impl<W: PartialOrd> PartialOrd for Cost<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for Cost<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

pub fn shortest_paths_heap<N, W>(
    graph: &Graph<N, W>,
    source: &N,
) -> Result<ShortestPaths<N, W>, GraphError>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    if !graph.contains_node(source) {
        return Err(GraphError::UnknownNode(format!("{source:?}")));
    }

    let mut pq = PriorityQueue::<N, Reverse<Cost<W>>>::new();
    let mut distances = HashMap::<N, W>::new();
    let mut predecessors = HashMap::<N, N>::new();
    let mut visited = HashSet::<N>::new();

    distances.insert(source.clone(), W::zero());
    pq.push(source.clone(), Reverse(Cost(W::zero())));

    while let Some((current, Reverse(Cost(current_distance)))) = pq.pop() {
        for neighbor in graph.neighbors(&current) {
            if visited.contains(neighbor) {
                continue;
            }
            let Some(weight) = graph.edge_weight(&current, neighbor) else {
                continue;
            };
            let candidate = current_distance
                .checked_add(weight)
                .ok_or_else(|| GraphError::Overflow(format!("{neighbor:?}")))?;

            match pq.get_priority(neighbor) {
                Some(Reverse(Cost(known))) => {
                    if candidate < *known {
                        pq.change_priority(neighbor, Reverse(Cost(candidate)));
                        distances.insert(neighbor.clone(), candidate);
                        predecessors.insert(neighbor.clone(), current.clone());
                    }
                }
                None => {
                    pq.push(neighbor.clone(), Reverse(Cost(candidate)));
                    distances.insert(neighbor.clone(), candidate);
                    predecessors.insert(neighbor.clone(), current.clone());
                }
            }
        }

        visited.insert(current);
    }

    debug!(
        "Settled {} of {} nodes from {:?}",
        visited.len(),
        graph.node_count(),
        source
    );

    Ok(ShortestPaths {
        source: source.clone(),
        distances,
        predecessors,
    })
}
