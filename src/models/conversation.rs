use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Idle,
    CollectingName,
    CollectingHours,
    CollectingServices,
    Completed,
}

impl ConversationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::CollectingName => "collecting_name",
            ConversationState::CollectingHours => "collecting_hours",
            ConversationState::CollectingServices => "collecting_services",
            ConversationState::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "collecting_name" => ConversationState::CollectingName,
            "collecting_hours" => ConversationState::CollectingHours,
            "collecting_services" => ConversationState::CollectingServices,
            "completed" => ConversationState::Completed,
            _ => ConversationState::Idle,
        }
    }
}

/// Fictitious business assembled during the setup walk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessProfile {
    pub name: String,
    pub hours: String,
    pub services: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Outcome of a single engine step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advance {
    pub state: ConversationState,
    pub profile: BusinessProfile,
    pub reply: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoSession {
    pub id: Uuid,
    pub state: ConversationState,
    pub profile: BusinessProfile,
    pub transcript: Vec<Message>,
    pub created_at: NaiveDateTime,
    pub last_activity: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}
