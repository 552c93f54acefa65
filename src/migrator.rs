use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_orders_table::Migration),
            Box::new(m20240101_000003_create_returns_table::Migration),
            Box::new(m20240101_000004_create_dispute_cases_table::Migration),
            Box::new(m20240101_000005_create_dispute_case_returns_table::Migration),
            Box::new(m20240101_000006_create_dispute_evidence_table::Migration),
        ]
    }
}

mod m20240101_000001_create_users_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_users_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Users::Username)
                                .string_len(150)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::Email).string_len(255).not_null())
                        .col(
                            ColumnDef::new(Users::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Users {
        Table,
        Id,
        Username,
        Email,
        CreatedAt,
    }
}

mod m20240101_000002_create_orders_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Orders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Orders::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Orders::AmazonOrderId)
                                .string_len(64)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Orders::Sku).string_len(128).null())
                        .col(ColumnDef::new(Orders::Title).string_len(255).not_null())
                        .col(ColumnDef::new(Orders::CustomerName).string_len(255).null())
                        .col(ColumnDef::new(Orders::CustomerEmail).string_len(255).null())
                        .col(
                            ColumnDef::new(Orders::OrderDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Orders::Amount)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Orders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Orders::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_orders_amazon_order_id")
                        .table(Orders::Table)
                        .col(Orders::AmazonOrderId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_orders_order_date")
                        .table(Orders::Table)
                        .col(Orders::OrderDate)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Orders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Orders {
        Table,
        Id,
        AmazonOrderId,
        Sku,
        Title,
        CustomerName,
        CustomerEmail,
        OrderDate,
        Amount,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000003_create_returns_table {
    use super::m20240101_000002_create_orders_table::Orders;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_returns_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Returns::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Returns::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Returns::OrderId).integer().not_null())
                        .col(
                            ColumnDef::new(Returns::ReturnReason)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Returns::TrackingNumber)
                                .string_len(128)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(Returns::ReturnDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Returns::ConditionOnReturn).text().null())
                        .col(ColumnDef::new(Returns::Notes).text().null())
                        .col(
                            ColumnDef::new(Returns::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_returns_order_id")
                                .from(Returns::Table, Returns::OrderId)
                                .to(Orders::Table, Orders::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::NoAction),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_returns_order_id")
                        .table(Returns::Table)
                        .col(Returns::OrderId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Returns::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Returns {
        Table,
        Id,
        OrderId,
        ReturnReason,
        TrackingNumber,
        ReturnDate,
        ConditionOnReturn,
        Notes,
        CreatedAt,
    }
}

mod m20240101_000004_create_dispute_cases_table {
    use super::m20240101_000001_create_users_table::Users;
    use super::m20240101_000002_create_orders_table::Orders;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_dispute_cases_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DisputeCases::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DisputeCases::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(DisputeCases::CaseId)
                                .string_len(64)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(DisputeCases::Title)
                                .string_len(255)
                                .not_null(),
                        )
                        .col(ColumnDef::new(DisputeCases::Description).text().not_null())
                        .col(ColumnDef::new(DisputeCases::CreatedBy).integer().null())
                        .col(ColumnDef::new(DisputeCases::LinkedOrderId).integer().null())
                        .col(
                            ColumnDef::new(DisputeCases::Status)
                                .string_len(32)
                                .not_null(),
                        )
                        .col(ColumnDef::new(DisputeCases::ResolutionNotes).text().null())
                        .col(
                            ColumnDef::new(DisputeCases::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DisputeCases::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_dispute_cases_created_by")
                                .from(DisputeCases::Table, DisputeCases::CreatedBy)
                                .to(Users::Table, Users::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::NoAction),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_dispute_cases_linked_order_id")
                                .from(DisputeCases::Table, DisputeCases::LinkedOrderId)
                                .to(Orders::Table, Orders::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::NoAction),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_dispute_cases_case_id")
                        .table(DisputeCases::Table)
                        .col(DisputeCases::CaseId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_dispute_cases_created_at")
                        .table(DisputeCases::Table)
                        .col(DisputeCases::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DisputeCases::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum DisputeCases {
        Table,
        Id,
        CaseId,
        Title,
        Description,
        CreatedBy,
        LinkedOrderId,
        Status,
        ResolutionNotes,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000005_create_dispute_case_returns_table {
    use super::m20240101_000003_create_returns_table::Returns;
    use super::m20240101_000004_create_dispute_cases_table::DisputeCases;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_dispute_case_returns_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DisputeCaseReturns::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DisputeCaseReturns::DisputeCaseId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DisputeCaseReturns::ReturnId)
                                .integer()
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .col(DisputeCaseReturns::DisputeCaseId)
                                .col(DisputeCaseReturns::ReturnId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_dispute_case_returns_dispute_case_id")
                                .from(
                                    DisputeCaseReturns::Table,
                                    DisputeCaseReturns::DisputeCaseId,
                                )
                                .to(DisputeCases::Table, DisputeCases::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::NoAction),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_dispute_case_returns_return_id")
                                .from(DisputeCaseReturns::Table, DisputeCaseReturns::ReturnId)
                                .to(Returns::Table, Returns::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::NoAction),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DisputeCaseReturns::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum DisputeCaseReturns {
        Table,
        DisputeCaseId,
        ReturnId,
    }
}

mod m20240101_000006_create_dispute_evidence_table {
    use super::m20240101_000004_create_dispute_cases_table::DisputeCases;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_dispute_evidence_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DisputeEvidence::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DisputeEvidence::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(DisputeEvidence::DisputeCaseId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(DisputeEvidence::FilePath)
                                .string_len(512)
                                .not_null(),
                        )
                        .col(ColumnDef::new(DisputeEvidence::Description).text().null())
                        .col(
                            ColumnDef::new(DisputeEvidence::UploadedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_dispute_evidence_dispute_case_id")
                                .from(DisputeEvidence::Table, DisputeEvidence::DisputeCaseId)
                                .to(DisputeCases::Table, DisputeCases::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::NoAction),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DisputeEvidence::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum DisputeEvidence {
        Table,
        Id,
        DisputeCaseId,
        FilePath,
        Description,
        UploadedAt,
    }
}
