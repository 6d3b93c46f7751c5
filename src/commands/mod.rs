mod config;
mod ls;

pub use config::{cmd_config_set, cmd_config_show};
pub use ls::{LsOptions, cmd_ls};

use serde_json::Value;

use crate::error::Result;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

/// Command result with both a JSON and a human readable rendering
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print in the requested format. Falls back to pretty JSON when no text
    /// rendering was provided.
    pub fn print(self, output: OutputOptions) -> Result<()> {
        match (output.json, self.text) {
            (false, Some(text)) => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}
