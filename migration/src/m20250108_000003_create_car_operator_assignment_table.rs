use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250106_000001_create_car_table::Car,
    m20250106_000002_create_car_operator_table::CarOperator,
};

/// Name of the partial unique index allowing one active assignment per car.
pub const ACTIVE_CAR_ASSIGNMENT_INDEX: &str = "idx_assignment_active_car";

/// Name of the partial unique index allowing one active assignment per operator.
pub const ACTIVE_OPERATOR_ASSIGNMENT_INDEX: &str = "idx_assignment_active_operator";

/// Partial indexes are written as raw DDL; the syntax is shared by Postgres and Sqlite.
pub const CREATE_ACTIVE_CAR_ASSIGNMENT_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     idx_assignment_active_car ON car_operator_assignment (car_id) WHERE end_date IS NULL";

pub const CREATE_ACTIVE_OPERATOR_ASSIGNMENT_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     idx_assignment_active_operator ON car_operator_assignment (operator_id) WHERE end_date IS NULL";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarOperatorAssignment::Table)
                    .if_not_exists()
                    .col(string(CarOperatorAssignment::Id).primary_key())
                    .col(string(CarOperatorAssignment::CarId))
                    .col(string(CarOperatorAssignment::OperatorId))
                    .col(date(CarOperatorAssignment::StartDate))
                    .col(date_null(CarOperatorAssignment::EndDate))
                    .col(text_null(CarOperatorAssignment::Notes))
                    .col(
                        timestamp_with_time_zone(CarOperatorAssignment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(CarOperatorAssignment::CreatedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_car_id")
                            .from(CarOperatorAssignment::Table, CarOperatorAssignment::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_operator_id")
                            .from(
                                CarOperatorAssignment::Table,
                                CarOperatorAssignment::OperatorId,
                            )
                            .to(CarOperator::Table, CarOperator::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignment_car_start_date")
                    .table(CarOperatorAssignment::Table)
                    .col(CarOperatorAssignment::CarId)
                    .col(CarOperatorAssignment::StartDate)
                    .to_owned(),
            )
            .await?;

        let db = manager.get_connection();
        db.execute_unprepared(CREATE_ACTIVE_CAR_ASSIGNMENT_INDEX)
            .await?;
        db.execute_unprepared(CREATE_ACTIVE_OPERATOR_ASSIGNMENT_INDEX)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarOperatorAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CarOperatorAssignment {
    Table,
    Id,
    CarId,
    OperatorId,
    StartDate,
    EndDate,
    Notes,
    CreatedAt,
    CreatedBy,
}
