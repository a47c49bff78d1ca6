//! OpenADR 3 resources. Field names serialize with the protocol's camelCase spelling.

pub mod common;
pub mod event;
pub mod program;
pub mod report;
pub mod ven;
