use crate::utils::create_table_migration;
use entity::users;

create_table_migration!(users::Entity);
