//! Data Transfer Objects for REST responses that are not domain types.
//!
//! Metric rows and chart payloads serialize directly from
//! [`crate::domain`]; only envelope types live here.

pub mod dataset_dto;

pub use dataset_dto::*;
