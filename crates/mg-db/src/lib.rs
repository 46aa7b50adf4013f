//! mg-db: database access and persistence layer.
//!
//! This crate provides SQLite-backed storage with connection pooling,
//! idempotent schema creation, typed models, raw prepared-statement queries
//! for cats, and a small entity-mapping layer used by the people service.

pub mod entity;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod seed;
