//! # mgmtwire
//!
//! Wire vocabulary for a device-management control channel:
//! - Command codes and response-status codes with total, never-failing resolution
//! - Monitor payload records (liveness, system status, traffic, swift, endpoint)
//! - JSON message envelopes and a size-limited codec
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Transport / session layer (external)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ raw JSON bytes
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       JsonCodec                              │
//! │             (peek_command / encode / decode)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Registry   │          │  Payloads   │
//!   │ (Cmd/Status)│          │  (serde)    │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod registry;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{WireError, Result};
pub use config::Config;
pub use registry::{Code, CodeSpace, CodeSpaceKind, CommandCode, StatusCode};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of mgmtwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
