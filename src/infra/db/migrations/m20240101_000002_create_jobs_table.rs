//! Migration: Create jobs table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Jobs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Jobs::Position).string().null())
                    .col(ColumnDef::new(Jobs::Company).string().null())
                    .col(ColumnDef::new(Jobs::Location).string().null())
                    .col(ColumnDef::new(Jobs::WorkType).string().null())
                    .col(ColumnDef::new(Jobs::Skills).json().null())
                    .col(ColumnDef::new(Jobs::Education).string().null())
                    .col(ColumnDef::new(Jobs::Description).text().null())
                    .col(ColumnDef::new(Jobs::Vacancies).double().null())
                    .col(ColumnDef::new(Jobs::Salary).string().null())
                    .col(ColumnDef::new(Jobs::ExpectedYear).double().null())
                    .col(ColumnDef::new(Jobs::PostedTime).timestamp_with_time_zone().null())
                    .col(
                        ColumnDef::new(Jobs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing order
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_created_at")
                    .table(Jobs::Table)
                    .col(Jobs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Jobs {
    Table,
    Id,
    Position,
    Company,
    Location,
    WorkType,
    Skills,
    Education,
    Description,
    Vacancies,
    Salary,
    ExpectedYear,
    PostedTime,
    CreatedAt,
}
