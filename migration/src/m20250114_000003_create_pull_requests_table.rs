use crate::utils::create_table_migration;
use entity::pull_requests;

create_table_migration!(pull_requests::Entity);
