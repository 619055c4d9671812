use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "squads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    #[sea_orm(unique)]
    pub jersey_number: String,
    pub biography: String,
    #[sea_orm(column_type = "Text")]
    pub image: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub date_of_birth: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_statistic::Entity")]
    PlayerStatistic,
}

impl Related<super::player_statistic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerStatistic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
