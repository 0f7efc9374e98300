pub mod message_store;
pub mod preferences_store;
pub mod subscription_store;
