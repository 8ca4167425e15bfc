//! Shared plumbing for the wayfare workspace.
//!
//! Only cross-cutting concerns live here so every crate can depend on it
//! without pulling in HTTP or HTML parsing:
//!
//! - [`observability`]: one-shot `tracing` initialisation for binaries and tests
//!
//! ```rust
//! use wayfare_common::observability::{LogConfig, LogFormat};
//!
//! let cfg = LogConfig {
//!     app_name: "wayfare-doc",
//!     format: LogFormat::Json,
//!     ..LogConfig::default()
//! };
//! assert_eq!(cfg.default_filter, "info");
//! ```

pub mod observability;
