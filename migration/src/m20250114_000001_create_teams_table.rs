use crate::utils::create_table_migration;
use entity::teams;

create_table_migration!(teams::Entity);
