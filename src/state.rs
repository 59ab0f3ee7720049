use rand::{
    rngs::{adapter::ReseedingRng, OsRng},
    Rng, SeedableRng,
};
use rand_chacha::ChaCha20Core;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{env, sync::Arc};

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone;
    type Rand: Rng;

    fn db(&self) -> &Self::Db;
    fn rng(&self) -> Self::Rand;
}

pub struct State {
    database: DbConn,
}

impl State {
    pub async fn new() -> Arc<Self> {
        Self::with_database(Self::connect_database().await).await
    }

    pub async fn with_database(conn: DbConn) -> Arc<Self> {
        Arc::new(Self { database: conn })
    }

    async fn connect_database() -> DbConn {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
        let opts = ConnectOptions::new(url);

        let db = Database::connect(opts).await.unwrap();

        info!("Connected to database");

        db
    }
}

thread_local! {
    static CHACHA_THREAD_RNG: ReseedingRng<ChaCha20Core, OsRng> = {
        let rng = ChaCha20Core::from_entropy();
        ReseedingRng::new(rng, 1024 * 64, OsRng)
    };
}

impl StateTrait for Arc<State> {
    type Db = DbConn;
    type Rand = ReseedingRng<ChaCha20Core, OsRng>;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn rng(&self) -> Self::Rand {
        CHACHA_THREAD_RNG.with(|x| x.clone())
    }
}
