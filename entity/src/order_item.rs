use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: i32,
    pub merchandise_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    /// Always `quantity * unit_price`; maintained by the writer.
    pub total: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::merchandise::Entity",
        from = "Column::MerchandiseId",
        to = "super::merchandise::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Merchandise,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::merchandise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Merchandise.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
