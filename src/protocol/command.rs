//! Command definitions
//!
//! Represents commands arriving from clients.

use serde::{Deserialize, Serialize};

use crate::registry::{CodeSpace, CommandCode};

/// An inbound command
///
/// Every command carries an `OpCode`. Project-scoped commands (start/stop
/// monitor, scan topology, ...) also carry a `ProjectId`; it is omitted when 0.
/// Fields a specific command adds beyond these are left in the raw message
/// for the handler to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CommandRequest {
    pub op_code: CommandCode,
    #[serde(skip_serializing_if = "is_zero")]
    pub project_id: i64,
}

impl CommandRequest {
    /// A command with no project scope
    pub fn new(op_code: CommandCode) -> Self {
        Self {
            op_code,
            project_id: 0,
        }
    }

    /// A command scoped to a project
    pub fn for_project(op_code: CommandCode, project_id: i64) -> Self {
        Self {
            op_code,
            project_id,
        }
    }

    /// Whether the op code resolved to something this side knows
    pub fn is_recognized(&self) -> bool {
        !self.op_code.is_unknown()
    }

    /// Project-scoped commands need a positive project id
    pub fn has_valid_project(&self) -> bool {
        self.project_id > 0
    }
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}
