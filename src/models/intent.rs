use serde::{Deserialize, Serialize};

/// Command category recognised in normalized user text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Setup,
    Services,
    Appointment,
    Other,
}
