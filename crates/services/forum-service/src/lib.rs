//! Forum Service Library
//!
//! Application layer of the forum: use cases, the collaborator contracts
//! they depend on, and concrete adapters for those contracts.

pub mod config;
pub mod cryptography;
pub mod infra;
pub mod presenters;
pub mod repository;
pub mod use_cases;
