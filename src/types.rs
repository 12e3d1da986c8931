/// Raw report data structures
///
/// This module mirrors the subset of the Playwright JSON reporter output that the
/// summarizer consumes. Every other field in the report is ignored, and every
/// consumed field tolerates being absent.

/// Top-level report document
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    pub config: Config,
    pub suites: Vec<Suite>,
}

/// Run-level metadata (`config` block)
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: Option<String>,   // "1.44.1"
    pub metadata: Option<Metadata>,
    pub workers: Option<u32>,      // declared worker count
    pub shard: Option<Shard>,      // null when not sharded
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub total_time: Option<f64>,     // ms
    pub actual_workers: Option<u32>, // workers actually spawned
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Shard {
    pub total: Option<u32>,
    pub current: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
}

/// A grouping node: a test file at the top level, a describe block below it
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Suite {
    pub title: String,
    pub file: Option<String>,
    pub specs: Vec<Spec>,
    pub suites: Vec<Suite>,
}

impl Suite {
    /// Check if this suite has describe blocks nested under it
    pub fn has_children(&self) -> bool {
        !self.suites.is_empty()
    }
}

/// A single test declaration
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Spec {
    pub title: String,
    pub ok: bool,
    pub tests: Vec<TestExecution>,
    pub file: Option<String>,
    pub line: u32,
    pub column: u32,
}

impl Spec {
    /// Get the first test execution, if any
    pub fn first_execution(&self) -> Option<&TestExecution> {
        self.tests.first()
    }

    /// Get the last test execution, if any
    pub fn last_execution(&self) -> Option<&TestExecution> {
        self.tests.last()
    }
}

/// One run of a spec under a specific project
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestExecution {
    pub status: String,       // "expected" | "unexpected" | "flaky" | "skipped"
    pub project_name: String, // "chromium"
}

impl TestExecution {
    pub fn is_flaky(&self) -> bool {
        self.status == "flaky"
    }

    pub fn is_skipped(&self) -> bool {
        self.status == "skipped"
    }

    pub fn is_unexpected(&self) -> bool {
        self.status == "unexpected"
    }
}
