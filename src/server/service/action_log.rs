use sea_orm::DatabaseConnection;

use crate::server::{data::action_log::ActionLogRepository, model::action_log::AuditEntry};

/// Best-effort audit sink.
///
/// Entries are written after the primary mutation has been persisted and are not part
/// of its atomicity boundary. A failed write is logged and swallowed so it can never
/// undo or fail the mutation it describes.
pub struct ActionLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActionLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a single audit entry, logging instead of returning failures.
    pub async fn record(&self, entry: AuditEntry) {
        let entity_type = entry.entity_type;
        let entity_id = entry.entity_id.clone();
        let action_type = entry.action_type;

        if let Err(e) = ActionLogRepository::new(self.db).create(entry).await {
            tracing::warn!(
                "Failed to write {} audit entry for {} {}: {}",
                action_type,
                entity_type,
                entity_id,
                e
            );
        }
    }

    /// Records entries in order. Each write is independent of the others.
    pub async fn record_all(&self, entries: impl IntoIterator<Item = AuditEntry>) {
        for entry in entries {
            self.record(entry).await;
        }
    }
}
