use business::domain::shopping::settings::PlannerSettings;

use super::planner_config;

const DEFAULT_SNAPSHOT_PATH: &str = "./event-snapshot.json";

pub struct AppConfig {
    pub snapshot_path: String,
    pub planner: PlannerSettings,
}

impl AppConfig {
    /// Environment variables:
    /// - PLANNER_SNAPSHOT_PATH: event snapshot to read (default: "./event-snapshot.json")
    /// - see `planner_config` for the planner tunables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            snapshot_path: lookup("PLANNER_SNAPSHOT_PATH")
                .filter(|path| !path.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string()),
            planner: planner_config::settings_from_lookup(&lookup),
        }
    }

    /// Command-line path wins over the environment.
    pub fn with_snapshot_override(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.snapshot_path = path;
        }
        self
    }
}
