use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActionLog::Table)
                    .if_not_exists()
                    .col(string(ActionLog::Id).primary_key())
                    .col(string(ActionLog::EntityType))
                    .col(string(ActionLog::EntityId))
                    .col(string(ActionLog::ActionType))
                    .col(string(ActionLog::PerformedBy))
                    .col(json(ActionLog::Changes))
                    .col(
                        timestamp_with_time_zone(ActionLog::Timestamp)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_action_log_entity")
                    .table(ActionLog::Table)
                    .col(ActionLog::EntityType)
                    .col(ActionLog::EntityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActionLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActionLog {
    Table,
    Id,
    EntityType,
    EntityId,
    ActionType,
    PerformedBy,
    Changes,
    Timestamp,
}
