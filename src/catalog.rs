//! Read-only catalog of automated actions, fetched once per editing
//! session and consumed by the form layer when configuring automated
//! steps.

use serde::{Deserialize, Serialize};

/// One automated action: an id, a display label, and the parameter
/// names the form layer must collect for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automation {
    pub id: String,
    pub label: String,
    pub params: Vec<String>,
}

/// Ordered, read-only lookup of available automations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutomationCatalog {
    automations: Vec<Automation>,
}

impl AutomationCatalog {
    pub fn new(automations: Vec<Automation>) -> Self {
        Self { automations }
    }

    /// The built-in action set.
    pub fn builtin() -> Self {
        Self::new(vec![
            Automation {
                id: "send_email".to_string(),
                label: "Send Email".to_string(),
                params: vec!["to".to_string(), "subject".to_string()],
            },
            Automation {
                id: "generate_doc".to_string(),
                label: "Generate Document".to_string(),
                params: vec!["template".to_string(), "recipient".to_string()],
            },
        ])
    }

    pub fn automations(&self) -> &[Automation] {
        &self.automations
    }

    pub fn find(&self, id: &str) -> Option<&Automation> {
        self.automations.iter().find(|automation| automation.id == id)
    }
}
