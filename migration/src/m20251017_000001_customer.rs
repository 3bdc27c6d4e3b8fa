use sea_orm_migration::{prelude::*, schema::*};

static IDX_CUSTOMER_CREATED_AT: &str = "idx_customer_created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_uuid(Customer::Id))
                    .col(string(Customer::FullName))
                    .col(string(Customer::Email))
                    .col(string(Customer::GithubUsername))
                    .col(date(Customer::DateOfBirth))
                    .col(timestamp(Customer::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CUSTOMER_CREATED_AT)
                    .table(Customer::Table)
                    .col(Customer::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CUSTOMER_CREATED_AT)
                    .table(Customer::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Customer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Customer {
    Table,
    Id,
    FullName,
    Email,
    GithubUsername,
    DateOfBirth,
    CreatedAt,
}
