use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    ConnectOptions, PgPool, SqlitePool,
};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::infra::renderer::http_renderer::HttpDocumentRenderer;
use crate::infra::repositories::{
    postgres_expenditure_repo::PostgresExpenditureRepo, postgres_member_repo::PostgresMemberRepo,
    postgres_payment_repo::PostgresPaymentRepo, postgres_reading_repo::PostgresReadingRepo,
    postgres_register_repo::PostgresRegisterRepo,
    postgres_transaction_repo::PostgresTransactionRepo,
    sqlite_expenditure_repo::SqliteExpenditureRepo, sqlite_member_repo::SqliteMemberRepo,
    sqlite_payment_repo::SqlitePaymentRepo, sqlite_reading_repo::SqliteReadingRepo,
    sqlite_register_repo::SqliteRegisterRepo, sqlite_transaction_repo::SqliteTransactionRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let auth_service = Arc::new(AuthService::new(config));
    let renderer = Arc::new(HttpDocumentRenderer::new(config.renderer_url.clone()));

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            member_repo: Arc::new(PostgresMemberRepo::new(pool.clone())),
            reading_repo: Arc::new(PostgresReadingRepo::new(pool.clone())),
            payment_repo: Arc::new(PostgresPaymentRepo::new(pool.clone())),
            register_repo: Arc::new(PostgresRegisterRepo::new(pool.clone())),
            expenditure_repo: Arc::new(PostgresExpenditureRepo::new(pool.clone())),
            transaction_repo: Arc::new(PostgresTransactionRepo::new(pool)),
            auth_service,
            renderer,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            member_repo: Arc::new(SqliteMemberRepo::new(pool.clone())),
            reading_repo: Arc::new(SqliteReadingRepo::new(pool.clone())),
            payment_repo: Arc::new(SqlitePaymentRepo::new(pool.clone())),
            register_repo: Arc::new(SqliteRegisterRepo::new(pool.clone())),
            expenditure_repo: Arc::new(SqliteExpenditureRepo::new(pool.clone())),
            transaction_repo: Arc::new(SqliteTransactionRepo::new(pool)),
            auth_service,
            renderer,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
