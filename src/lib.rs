//! # SubmissionDocs - Submission PDF Generation & Archival
//!
//! A focused service that renders onboarding submissions into PDF documents
//! and delivers them individually or as a streamed ZIP archive, built on
//! Clean Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Core business logic (entities, value objects)
//! - **Application**: Use cases and ports (interfaces)
//! - **Infrastructure**: PDF composition, archive streaming, storage and
//!   persistence adapters
//! - **API**: HTTP handlers and middleware
//!
//! ## Key Features
//!
//! - Bulk archival: one PDF per submission, streamed into a single ZIP with
//!   bounded memory and per-record failure isolation
//! - Template overlay: master-PDF stamping with idempotent persistence keyed
//!   by the normalized tax number
//! - API key authentication with request-scoped authorization context

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::{entities, value_objects};
