//! Delivery of temporary passwords issued by the reset flow.

/// Sink for temporary passwords.
///
/// The reset endpoint never returns the temporary password to the caller; it hands
/// it to the notifier in [`AppState`](crate::server::model::app::AppState), which is
/// responsible for getting it to the account owner.
pub trait ResetNotifier: Send + Sync {
    fn deliver(&self, email: &str, temp_password: &str);
}

/// Writes the temporary password to the debug log.
///
/// For development deployments without a mail relay. The password is only
/// visible when debug logging is enabled for this module, e.g.
/// `RUST_LOG=petpal::server::util::notify=debug`.
pub struct DevLogResetNotifier;

impl ResetNotifier for DevLogResetNotifier {
    fn deliver(&self, email: &str, temp_password: &str) {
        tracing::info!(email = %email, "Issued temporary password");
        tracing::debug!(email = %email, "Temporary password is {}", temp_password);
    }
}
