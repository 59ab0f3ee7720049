use crate::utils::create_table_migration;
use entity::pr_reviewers;

create_table_migration!(pr_reviewers::Entity);
