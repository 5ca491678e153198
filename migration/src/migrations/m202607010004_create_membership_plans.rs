use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202607010004_create_membership_plans"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("membership_plans"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("name")).string().not_null().unique_key())
                    .col(ColumnDef::new(Alias::new("price")).double().not_null())
                    .col(ColumnDef::new(Alias::new("original_price")).double())
                    .col(ColumnDef::new(Alias::new("duration")).string().not_null())
                    .col(ColumnDef::new(Alias::new("features")).json().not_null())
                    .col(ColumnDef::new(Alias::new("popular")).boolean().not_null().default(false))
                    .col(ColumnDef::new(Alias::new("theme")).string().not_null().default("starter"))
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("membership_plans")).to_owned())
            .await
    }
}
