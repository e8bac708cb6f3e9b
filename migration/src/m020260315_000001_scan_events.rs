//! Scan event table migration
//!
//! Creates the scan_events table, one row per redirect traversal:
//! - timestamp
//! - requester ip
//! - user agent
//! - referer

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScanEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScanEvents::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ScanEvents::LinkId).string().not_null())
                    .col(
                        ColumnDef::new(ScanEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScanEvents::Ip).string_len(45).null())
                    .col(ColumnDef::new(ScanEvents::UserAgent).text().null())
                    .col(ColumnDef::new(ScanEvents::Referer).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scan_events_link_id")
                            .from(ScanEvents::Table, ScanEvents::LinkId)
                            .to(Links::Table, Links::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Single-link queries
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scan_events_link_id")
                    .table(ScanEvents::Table)
                    .col(ScanEvents::LinkId)
                    .to_owned(),
            )
            .await?;

        // Single-link recent-first time series
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_scan_events_link_time")
                    .table(ScanEvents::Table)
                    .col(ScanEvents::LinkId)
                    .col(ScanEvents::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_scan_events_link_time").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_scan_events_link_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ScanEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScanEvents {
    #[sea_orm(iden = "scan_events")]
    Table,
    Id,
    LinkId,
    CreatedAt,
    Ip,
    UserAgent,
    Referer,
}

#[derive(DeriveIden)]
enum Links {
    #[sea_orm(iden = "links")]
    Table,
    Id,
}
