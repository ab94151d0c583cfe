//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate entity transitions and validation into use-case level APIs.
//! - Keep CLI and future transport layers decoupled from validation details.

pub mod category_service;
