//! Per-invocation options for the task builders
//!
//! Each builder takes its own options struct. [`TaskOptions`] is the union
//! used by the registry and by hosts that fill options from flags or config.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Kind of test suite to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    #[default]
    Unit,
    Api,
}

impl TestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Unit => "unit",
            TestType::Api => "api",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "unit" => Ok(TestType::Unit),
            "api" => Ok(TestType::Api),
            other => Err(Error::ConfigError(format!("Unknown test type: {other}"))),
        }
    }
}

/// Options for the build phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Rebuild on source changes instead of building once. Default: `false`
    pub watch: bool,
}

/// Options for the test phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestOptions {
    /// Which suite to run. Default: [`TestType::Unit`]
    pub test_type: TestType,
    /// Re-run the suite on source or test changes. Default: `false`
    pub watch: bool,
}

/// Options for the lint phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintOptions {
    /// Let the linter apply automatic fixes. Default: `false`
    pub fix: bool,
}

/// Options for the format phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Only verify formatting, never rewrite files. Default: `false`
    pub check: bool,
}

/// Options for the publish phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishOptions {
    /// Run the publish without uploading anything. Default: `false`
    pub dry_run: bool,
    /// Distribution tag to publish under. Default: none (registry default)
    pub tag: Option<String>,
}

/// Options accepted by every phase through the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct TaskOptions {
    pub watch: bool,
    pub test_type: TestType,
    pub fix: bool,
    pub check: bool,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl From<&TaskOptions> for BuildOptions {
    fn from(options: &TaskOptions) -> Self {
        Self {
            watch: options.watch,
        }
    }
}

impl From<&TaskOptions> for TestOptions {
    fn from(options: &TaskOptions) -> Self {
        Self {
            test_type: options.test_type,
            watch: options.watch,
        }
    }
}

impl From<&TaskOptions> for LintOptions {
    fn from(options: &TaskOptions) -> Self {
        Self { fix: options.fix }
    }
}

impl From<&TaskOptions> for FormatOptions {
    fn from(options: &TaskOptions) -> Self {
        Self {
            check: options.check,
        }
    }
}

impl From<&TaskOptions> for PublishOptions {
    fn from(options: &TaskOptions) -> Self {
        Self {
            dry_run: options.dry_run,
            tag: options.tag.clone(),
        }
    }
}
