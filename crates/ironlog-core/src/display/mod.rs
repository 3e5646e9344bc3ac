//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results so
//! every interface prints the same markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Format Functions│    │   Formatted     │
//! │ (Plan, Progress)│───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Exercises, DayPlans,
//!   Executions)
//! - [`execution`]: One-line execution summaries ([`format_execution`])
//! - [`results`]: Operation result types (CreateResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use ironlog_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Seeded 12 exercises".to_string());
//! assert_eq!(success.to_string(), "Success: Seeded 12 exercises\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod execution;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{DayPlans, Executions, Exercises};
pub use datetime::LocalDateTime;
pub use execution::{format_execution, ExecutionSummary};
pub use results::CreateResult;
pub use status::OperationStatus;
