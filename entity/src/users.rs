use super::{pr_reviewers, pull_requests, teams};
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Team,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::TeamName)
                .to(teams::Column::TeamName)
                .into(),
        }
    }
}

impl Related<teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<pull_requests::Entity> for Entity {
    fn to() -> RelationDef {
        pr_reviewers::Relation::PullRequest.def()
    }

    fn via() -> Option<RelationDef> {
        Some(pr_reviewers::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Membership snapshot of a single team, in stable order.
    #[inline]
    pub fn find_in_team(team_name: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::TeamName.eq(team_name))
            .order_by_asc(Column::UserId)
    }
}
