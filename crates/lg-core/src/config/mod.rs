//! # Pure Data Module - Data Transfer Objects Only
//!
//! Configuration structures and the TOML → DTO mapping. Validation lives in the
//! application layer; this module holds data and defaults only.

mod gate_config;

pub use gate_config::{GateConfig, LaunchTimings, ServiceConfig};
