//! Helpers shared by the integration tests.

mod body;

pub use app_state::{RecordingResetNotifier, TestContextExt};
pub use body::{body_json, body_text};
