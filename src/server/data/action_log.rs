use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

use crate::server::model::action_log::AuditEntry;

/// Append-only writer for the `action_log` table.
pub struct ActionLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActionLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit entry stamped with the current time
    ///
    /// # Returns
    /// - `Ok(())`: Entry written
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, entry: AuditEntry) -> Result<(), DbErr> {
        entity::action_log::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            entity_type: ActiveValue::Set(entry.entity_type.to_string()),
            entity_id: ActiveValue::Set(entry.entity_id),
            action_type: ActiveValue::Set(entry.action_type.to_string()),
            performed_by: ActiveValue::Set(entry.performed_by),
            changes: ActiveValue::Set(entry.changes),
            timestamp: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
