//! Scanlink - a multi-tenant QR short-link service
//!
//! This library provides the core functionality for the Scanlink service:
//! owner-scoped short links, per-scan event logging, HTTP 307 redirection,
//! and recent-scan analytics.
//!
//! # Architecture
//! - `storage`: SeaORM storage backend and data access
//! - `services`: link registry, scan logger, analytics queries
//! - `api`: HTTP services and middleware
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle
//! - `system`: Logging and system utilities

pub mod api;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
