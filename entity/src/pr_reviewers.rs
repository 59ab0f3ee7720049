use super::{pull_requests, users};
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pr_reviewers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pr_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PullRequest,
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::PullRequest => Entity::belongs_to(pull_requests::Entity)
                .from(Column::PrId)
                .to(pull_requests::Column::PullRequestId)
                .into(),
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::UserId)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Current reviewer set of a pull request, in stable order.
    #[inline]
    pub fn find_for_pr(pr_id: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::PrId.eq(pr_id))
            .order_by_asc(Column::UserId)
    }
}
