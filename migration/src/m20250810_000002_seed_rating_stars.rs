use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The allowed star values are rows, not a check constraint.
        let mut insert = Query::insert()
            .into_table(RatingStars::Table)
            .columns([RatingStars::Value])
            .to_owned();

        for value in 1..=5u16 {
            insert.values_panic([value.into()]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(RatingStars::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RatingStars {
    Table,
    Value,
}
