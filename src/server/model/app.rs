use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::util::notify::{DevLogResetNotifier, ResetNotifier};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Receives temporary passwords issued by the reset flow
    pub reset_notifier: Arc<dyn ResetNotifier>,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            reset_notifier: Arc::new(DevLogResetNotifier),
        }
    }
}
