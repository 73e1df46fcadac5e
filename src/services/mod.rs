pub mod analytics;
pub mod conversation;
pub mod format;
pub mod roi;
pub mod seo;
pub mod sessions;
pub mod validation;
pub mod whatsapp;
