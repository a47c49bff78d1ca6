pub mod error;
pub mod plugin;
