use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

use crate::structures::{Graph, GraphError, Schedule, ScheduleError};

static BUILTIN: &str = include_str!("../../demo.yml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yml::Error),
    #[error("Unknown log level '{0}'")]
    LogLevel(String),
}

/// Scenarios run by the demo binary.
#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub platforms: Vec<PlatformScenario>,
    #[serde(default)]
    pub graphs: Vec<GraphScenario>,
}

#[derive(Debug, Deserialize)]
pub struct PlatformScenario {
    pub name: String,
    pub arrival: Vec<i32>,
    pub departure: Vec<i32>,
    pub expected: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct GraphScenario {
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String, u64)>,
    pub expected: Option<BTreeMap<String, u64>>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DemoConfig {
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse(BUILTIN)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(content)?)
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

impl PlatformScenario {
    pub fn schedule(&self) -> Result<Schedule, ScheduleError> {
        Schedule::new(self.arrival.clone(), self.departure.clone())
    }
}

impl GraphScenario {
    pub fn graph(&self) -> Result<Graph<String, u64>, GraphError> {
        let mut g = Graph::new();
        for node in &self.nodes {
            g.add_node(node.clone());
        }
        for (from, to, weight) in &self.edges {
            g.add_edge(from.clone(), to.clone(), *weight)?;
        }
        Ok(g)
    }
}
