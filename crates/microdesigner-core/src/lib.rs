//! # microdesigner-core - Core Domain Types
//!
//! Foundation crate for MicroDesigner. Provides the service domain types,
//! the fixed sample catalog, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ServiceRecord`] - A static description of a hypothetical microservice
//! - [`ServiceStatus`] - Display status (Running, Stopped)
//! - [`ServiceCategory`] - Kind of component (Service, Database, Gateway)
//! - [`ServiceMetrics`] - CPU, memory and request-rate figures
//! - [`CanvasPosition`] - Fixed card coordinate on the canvas
//!
//! ### Catalog (`catalog`)
//! - [`ServiceCatalog`] - The compiled-in list of records
//! - [`ToolboxEntry`], [`TOOLBOX_ENTRIES`] - Static toolbox capabilities
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use microdesigner_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all MicroDesigner crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{canvas_position, ServiceCatalog, ToolboxEntry, TOOLBOX_ENTRIES};
pub use error::{Error, Result, ResultExt};
pub use types::{CanvasPosition, ServiceCategory, ServiceMetrics, ServiceRecord, ServiceStatus};
