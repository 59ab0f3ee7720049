use super::{pr_reviewers, users};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pull_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: Status,
    pub created_at: DateTimeWithTimeZone,
    pub merged_at: Option<DateTimeWithTimeZone>,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[sea_orm(string_value = "OPEN")]
    Open,
    #[sea_orm(string_value = "MERGED")]
    Merged,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Author,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Author => Entity::belongs_to(users::Entity)
                .from(Column::AuthorId)
                .to(users::Column::UserId)
                .into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        pr_reviewers::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(pr_reviewers::Relation::PullRequest.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_open() -> Select<Entity> {
        Self::find().filter(Column::Status.eq(Status::Open))
    }
}
