use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player_statistics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub squad_id: i32,
    pub matches_played: i32,
    pub tries_scored: i32,
    pub conversions: i32,
    pub penalties: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub minutes_played: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::squad::Entity",
        from = "Column::SquadId",
        to = "super::squad::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Squad,
}

impl Related<super::squad::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Squad.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
