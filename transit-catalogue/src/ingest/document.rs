//! The top-level request document.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::requests::StatRequest;
use crate::router::RoutingSettings;

use super::error::DocumentError;
use super::records::BaseRequest;

/// Everything a single run consumes: catalogue records, routing
/// configuration and the queries to answer.
///
/// Keys this crate does not use (for example `render_settings`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransitDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

impl TransitDocument {
    /// Parse a document from JSON text.
    pub fn parse(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a JSON document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Whether any stat request needs the route graph.
    pub fn has_route_requests(&self) -> bool {
        self.stat_requests
            .iter()
            .any(|request| matches!(request, StatRequest::Route { .. }))
    }
}
