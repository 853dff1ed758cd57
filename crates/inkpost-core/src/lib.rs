//! # Inkpost Core
//!
//! The domain layer of the Inkpost blog backend.
//! This crate contains the post model, the ports infrastructure must implement,
//! and the post controller. It has zero infrastructure dependencies.

pub mod controller;
pub mod domain;
pub mod error;
pub mod ports;

pub use controller::{PostController, PostRequest, RouteParams, Session};
pub use error::{ControllerError, ModelError, NotImplementedError};
