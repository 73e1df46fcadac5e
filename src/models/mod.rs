pub mod analytics;
pub mod conversation;
pub mod intent;
pub mod lead;
pub mod roi;

pub use analytics::AnalyticsEvent;
pub use conversation::{Advance, BusinessProfile, ConversationState, DemoSession, Message, Role};
pub use intent::Intent;
pub use lead::Lead;
pub use roi::{InputLabel, InputRange, RoiInputs, RoiModel, RoiResult};
