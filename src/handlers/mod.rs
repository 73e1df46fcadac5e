pub mod admin;
pub mod demo;
pub mod events;
pub mod health;
pub mod leads;
pub mod links;
pub mod roi;
pub mod seo;
