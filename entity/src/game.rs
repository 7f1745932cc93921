use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub genre: String,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub age_rating: String,
    /// Price in hundredths of the currency unit, so stored values stay exact.
    pub price_cents: i64,
    #[sea_orm(column_type = "String(StringLen::N(1000))")]
    pub description: String,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub author: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
