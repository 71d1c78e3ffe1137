use std::time::SystemTime;

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    routing::shortest_paths,
    structures::{
        DemoConfig, GraphError, GraphScenario, PlatformScenario, ScheduleError, hhmm_to_time,
    },
};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Scenario '{name}': {source}")]
    Schedule {
        name: String,
        #[source]
        source: ScheduleError,
    },
    #[error("Scenario '{name}': {source}")]
    Graph {
        name: String,
        #[source]
        source: GraphError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub name: String,
    /// `false` only when the scenario had an expectation and missed it.
    pub passed: bool,
}

pub fn run_demo(config: &DemoConfig) -> Result<Vec<Outcome>, DemoError> {
    let mut outcomes = Vec::new();

    for scenario in &config.platforms {
        outcomes.push(run_platforms(scenario)?);
    }
    for scenario in &config.graphs {
        outcomes.push(run_graph(scenario)?);
    }

    Ok(outcomes)
}

pub fn run_platforms(scenario: &PlatformScenario) -> Result<Outcome, DemoError> {
    let schedule = scenario.schedule().map_err(|source| DemoError::Schedule {
        name: scenario.name.clone(),
        source,
    })?;

    for (arrival, departure) in schedule.arrivals().iter().zip(schedule.departures()) {
        match (hhmm_to_time(*arrival), hhmm_to_time(*departure)) {
            (Some(a), Some(d)) => info!("  {} -> {}", a.format("%H:%M"), d.format("%H:%M")),
            _ => warn!("  {arrival} -> {departure} (not a valid hh:mm)"),
        }
    }

    let platforms = schedule.min_platforms();
    info!(
        "'{}': {} trains need {} platforms",
        scenario.name,
        schedule.len(),
        platforms
    );

    Ok(check(&scenario.name, scenario.expected, platforms))
}

pub fn run_graph(scenario: &GraphScenario) -> Result<Outcome, DemoError> {
    let err = |source: GraphError| DemoError::Graph {
        name: scenario.name.clone(),
        source,
    };

    let graph = scenario.graph().map_err(err)?;
    info!(
        "'{}': {} nodes, {} edges",
        scenario.name,
        graph.node_count(),
        graph.edge_count()
    );

    let before = SystemTime::now();
    let paths = shortest_paths(&graph, &scenario.source).map_err(err)?;
    if let Ok(elapsed) = before.elapsed() {
        info!("Ran in {}us", elapsed.as_micros());
    }

    for node in graph.nodes() {
        match paths.path_to(node) {
            Some(path) => info!(
                "  {} = {} via {}",
                node,
                paths.distance(node).unwrap_or_default(),
                path.join(" -> ")
            ),
            None => info!("  {node} unreachable"),
        }
    }

    let passed = match &scenario.expected {
        Some(expected) => expected
            .iter()
            .all(|(node, distance)| paths.distance(node) == Some(*distance))
            && expected.len() == paths.distances().len(),
        None => true,
    };
    if !passed {
        warn!("'{}': distances differ from expectation", scenario.name);
    }

    Ok(Outcome {
        name: scenario.name.clone(),
        passed,
    })
}

fn check(name: &str, expected: Option<usize>, actual: usize) -> Outcome {
    let passed = expected.is_none_or(|e| e == actual);
    if !passed {
        warn!("'{name}': expected {expected:?}, got {actual}");
    }
    Outcome {
        name: name.to_string(),
        passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_demo_passes() {
        let config = DemoConfig::builtin().unwrap();
        let outcomes = run_demo(&config).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.passed));
    }

    #[test]
    fn test_wrong_expectation_fails() {
        let scenario = PlatformScenario {
            name: "off".to_string(),
            arrival: vec![900, 905],
            departure: vec![1000, 1005],
            expected: Some(1),
        };

        assert!(!run_platforms(&scenario).unwrap().passed);
    }

    #[test]
    fn test_unknown_source_is_an_error() {
        let scenario = GraphScenario {
            name: "lost".to_string(),
            source: "Z".to_string(),
            nodes: vec![],
            edges: vec![("A".to_string(), "B".to_string(), 1)],
            expected: None,
        };

        assert!(matches!(
            run_graph(&scenario),
            Err(DemoError::Graph {
                source: GraphError::UnknownNode(_),
                ..
            })
        ));
    }
}
