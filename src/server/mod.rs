//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for persistence.
//! Uploaded document files live on the local filesystem beneath the media root.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, lookup resolution and admin reconciliation
//! - **Data Layer** (`data/`) - Database operations over the `entity` crate
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token extraction and permission guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, document storage, public URL)
//! - **Storage** (`storage`) - Local file store for uploaded documents
//! - **Startup** (`startup`) - Database connection, migrations, storage setup and shutdown signal
//! - **Router** (`router`) - Axum route configuration
//! - **Doc** (`doc`) - OpenAPI document served alongside Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** extracts the bearer token when the handler needs one
//! 3. **Controller** resolves the target, checks permissions, converts DTOs to params
//! 4. **Service** executes business logic inside a transaction where it mutates
//! 5. **Data** queries database and returns entity models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
pub mod util;

#[cfg(test)]
mod test;
