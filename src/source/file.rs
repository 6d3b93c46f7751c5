//! Ticket source backed by a YAML or JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{Result, TicketDeskError};
use crate::source::TicketSource;
use crate::ticket::{TicketRecord, records_to_tickets};
use crate::types::Ticket;

/// Reads a list of ticket records from disk on every load.
///
/// Files ending in `.json` are parsed as JSON; anything else as YAML.
#[derive(Debug, Clone)]
pub struct FileTicketSource {
    path: PathBuf,
}

impl FileTicketSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }

    fn parse(&self, content: &str) -> Result<Vec<TicketRecord>> {
        if self.is_json() {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(serde_yaml_ng::from_str(content)?)
        }
    }
}

#[async_trait]
impl TicketSource for FileTicketSource {
    async fn load_all(&self) -> Result<Vec<Ticket>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            TicketDeskError::SourceFailure(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let records = self.parse(&content).map_err(|e| {
            TicketDeskError::SourceFailure(format!(
                "failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;

        records_to_tickets(records)
    }
}
