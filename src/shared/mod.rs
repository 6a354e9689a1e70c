// Shared Kernel - Domain Driven Design
// Cross-module concerns live here; feature modules must not depend on each other.

pub mod config; // Environment-backed configuration
pub mod errors; // Shared error types
pub mod http; // HTTP client factory and retry policy
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use config::AppConfig;
pub use errors::{AppError, AppResult, ProviderError};
