//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the gift certificate store: API
//! endpoints, business logic, data access, the generic search pipeline and background
//! jobs. The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and data layer
//! - **Data Layer** (`data/`) - Repositories and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Search** (`search/`) - Field registries, query parsing, predicate building and
//!   pagination shared by every list endpoint
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Logging, database connection and shutdown signal
//! - **Router** (`router`) - Axum route table and API documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs (purchase expiry)
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** converts DTOs to params (or passes raw search parameters) and calls
//!    a service
//! 3. **Service** applies business rules and calls repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod search;
pub mod service;
pub mod startup;
pub mod state;
