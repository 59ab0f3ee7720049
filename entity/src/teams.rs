use super::users;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        users::Relation::Team.def().rev()
    }
}

impl ActiveModelBehavior for ActiveModel {}
