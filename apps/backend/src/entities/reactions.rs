use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub thought_id: String,
    pub reaction_body: String,
    pub username: String,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::thoughts::Entity",
        from = "Column::ThoughtId",
        to = "super::thoughts::Column::Id",
        on_delete = "Cascade"
    )]
    Thought,
}

impl Related<super::thoughts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Thought.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
