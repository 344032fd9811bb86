use serde::Serialize;
use serde_json::{Map, Value};

use crate::format::FormattedResult;

/// Key/value record handed back to the workflow runtime.
///
/// Carries the formatted result plus whatever invocation metadata the caller
/// attaches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionRecord {
    #[serde(flatten)]
    formatted: FormattedResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<String>,
}

impl ExecutionRecord {
    pub fn new(formatted: FormattedResult) -> Self {
        Self {
            formatted,
            image: None,
            command: None,
        }
    }

    /// Attach the image the container ran.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Attach the command the container ran.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn formatted(&self) -> &FormattedResult {
        &self.formatted
    }

    /// Flatten into a JSON object: `stdout`, `stderr`, `exitCode`, `success`,
    /// `hasOutput`, and `image`/`command` when attached.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}
