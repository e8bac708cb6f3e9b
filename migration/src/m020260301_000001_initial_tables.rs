use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // users table: owned by the identity provider, required here so link
        // creation can verify the owner exists
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Users::Name).string().null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Links::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Links::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Links::Slug).string_len(16).not_null())
                    .col(ColumnDef::new(Links::Label).text().not_null())
                    .col(
                        ColumnDef::new(Links::Destination)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Links::OwnerId).string().not_null())
                    .col(
                        ColumnDef::new(Links::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_links_owner_id")
                            .from(Links::Table, Links::OwnerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index on slug: the source of truth for slug uniqueness.
        // The pre-insert existence check is an optimization only.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_links_slug")
                    .table(Links::Table)
                    .col(Links::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Owner-scoped listing is always newest-first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_links_owner_created")
                    .table(Links::Table)
                    .col(Links::OwnerId)
                    .col(Links::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_links_owner_created").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_links_slug").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Links::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Links {
    #[sea_orm(iden = "links")]
    Table,
    Id,
    Slug,
    Label,
    Destination,
    OwnerId,
    CreatedAt,
}
