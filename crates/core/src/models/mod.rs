pub mod analytics;
pub mod insight;
pub mod message;
pub mod performance;
pub mod portfolio;
pub mod preferences;
pub mod provider;
pub mod session;
pub mod subscription;
pub mod user;
