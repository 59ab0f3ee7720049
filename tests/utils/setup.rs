use super::App;
use migration::MigratorTrait;
use pr_review_backend::State;
use sea_orm::{ConnectOptions, Database};

pub async fn setup() -> App {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    // a single pooled connection so every query sees the same in-memory db
    opts.max_connections(1);

    let db = Database::connect(opts)
        .await
        .expect("failed to connect to sqlite");

    migration::Migrator::fresh(&db)
        .await
        .expect("failed to apply migrations");

    let state = State::with_database(db).await;

    App::with_router(pr_review_backend::app(state))
}
