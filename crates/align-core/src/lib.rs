//! # align-core
//!
//! Core types shared across the alignment crates.
//!
//! This crate provides the foundational types for re-attaching metadata to
//! work items that an external copy tool cloned from one project to another:
//! - Work items, their typed relation links, and opaque description values
//! - Migration plans and provenance records (the audit document shape)
//! - Area paths with root / remainder access
//! - Field reference names and the copy tool's link comment marker
//! - Cross-cutting store error types

pub mod area_path;
pub mod description;
pub mod entities;
pub mod errors;
pub mod fields;
mod id_string;

pub use area_path::AreaPath;
pub use description::Description;
pub use errors::StoreError;
