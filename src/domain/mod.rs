//! Domain models for fnship
//!
//! This module contains pure domain objects representing a deployment.
//! These types are free of I/O and carry the validation rules of a request.

pub mod request;

pub use request::DeploymentRequest;
