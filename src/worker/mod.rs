//! Background worker thread for searching and exporting.
//!
//! The worker owns the trip fixture so that building result sets and writing
//! CSV files never block rendering. It speaks JSON over Zellij's worker API and
//! propagates trace context across the thread boundary.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::TgvMaxWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
