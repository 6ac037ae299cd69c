use crate::graph::{Connection, Position, Step, StepKind};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Wire form of a step, as stored in workflow documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: AHashMap<String, serde_json::Value>,
}

impl StepDocument {
    pub fn into_step(self) -> Step {
        Step {
            id: self.id,
            kind: self.kind,
            position: self.position,
            attributes: self.data,
        }
    }
}

impl From<&Step> for StepDocument {
    fn from(step: &Step) -> Self {
        Self {
            id: step.id.clone(),
            kind: step.kind,
            position: step.position,
            data: step.attributes.clone(),
        }
    }
}

/// Wire form of a connection. Missing endpoints default to empty
/// strings, which traversal later skips, matching how hand-edited files
/// behave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeDocument {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
}

impl EdgeDocument {
    pub fn into_connection(self) -> Connection {
        Connection {
            source: self.source,
            target: self.target,
        }
    }
}

impl From<&Connection> for EdgeDocument {
    fn from(connection: &Connection) -> Self {
        Self {
            source: connection.source.clone(),
            target: connection.target.clone(),
        }
    }
}

/// The exported document: a timestamp plus the full graph.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(rename = "exportedAt")]
    pub exported_at: String,
    pub nodes: Vec<StepDocument>,
    pub edges: Vec<EdgeDocument>,
}
