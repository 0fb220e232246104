//! Navigation session API
//!
//! Callback-based façade over the tracker and the external providers, plus
//! guidance output formatting.

pub mod types;
pub mod callback;
pub mod formatting;

pub use types::{ApiError, ApiResult, SessionConfig, SessionState};
pub use callback::{
    CallbackHandle, EventCallback, GuidanceCallback, NavigationSession, SessionEvent,
};
pub use formatting::{JsonFormatter, TextFormatter};
