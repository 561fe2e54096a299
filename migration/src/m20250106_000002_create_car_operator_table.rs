use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CarOperator::Table)
                    .if_not_exists()
                    .col(string(CarOperator::Id).primary_key())
                    .col(string_uniq(CarOperator::EmployeeNumber))
                    .col(string(CarOperator::FirstName))
                    .col(string(CarOperator::LastName))
                    .col(string_null(CarOperator::Email))
                    .col(string_null(CarOperator::Phone))
                    .col(string_null(CarOperator::Department))
                    .col(boolean(CarOperator::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(CarOperator::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(CarOperator::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string_null(CarOperator::CreatedBy))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarOperator::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CarOperator {
    Table,
    Id,
    EmployeeNumber,
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    IsActive,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
}
