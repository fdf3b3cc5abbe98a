pub mod chat;
pub mod header;
pub mod market;
pub mod settings;
pub mod sidebar;
