//! Statement records and configuration.

pub mod config;
pub mod invoice;
