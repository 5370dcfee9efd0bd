//! Application catalog contracts: the record model and the host service that owns it.

pub mod service;
pub mod types;
