use apr_backend::{
    api::router::create_router,
    config::Config,
    domain::models::member::{Member, ROLE_ADMIN},
    domain::ports::DocumentRenderer,
    domain::services::auth_service::AuthService,
    domain::services::invoice::InvoiceData,
    domain::services::ledger::ArrearsMode,
    error::AppError,
    infra::repositories::{
        sqlite_expenditure_repo::SqliteExpenditureRepo, sqlite_member_repo::SqliteMemberRepo,
        sqlite_payment_repo::SqlitePaymentRepo, sqlite_reading_repo::SqliteReadingRepo,
        sqlite_register_repo::SqliteRegisterRepo, sqlite_transaction_repo::SqliteTransactionRepo,
    },
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct MockRenderer;

#[async_trait]
impl DocumentRenderer for MockRenderer {
    async fn render_invoice(&self, invoice: &InvoiceData) -> Result<Vec<u8>, AppError> {
        Ok(format!("%PDF-mock {}", invoice.number).into_bytes())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_arrears_mode(ArrearsMode::Naive).await
    }

    pub async fn with_arrears_mode(mode: ArrearsMode) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            jwt_secret: "test-secret".to_string(),
            token_ttl_days: 7,
            tariff: Default::default(),
            arrears_mode: mode,
            renderer_url: String::new(),
            payment_portal_url: "https://pagos.test/pagar".to_string(),
        };

        let state = Arc::new(AppState {
            auth_service: Arc::new(AuthService::new(&config)),
            config,
            member_repo: Arc::new(SqliteMemberRepo::new(pool.clone())),
            reading_repo: Arc::new(SqliteReadingRepo::new(pool.clone())),
            payment_repo: Arc::new(SqlitePaymentRepo::new(pool.clone())),
            register_repo: Arc::new(SqliteRegisterRepo::new(pool.clone())),
            expenditure_repo: Arc::new(SqliteExpenditureRepo::new(pool.clone())),
            transaction_repo: Arc::new(SqliteTransactionRepo::new(pool.clone())),
            renderer: Arc::new(MockRenderer),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Inserts a member straight through the repository; login still goes
    /// over HTTP. The first admin always exists out of band.
    pub async fn seed_member(&self, rut: &str, password: &str, role: &str) -> Member {
        let hash = AuthService::hash_password(password).unwrap();
        let member = Member::new(
            rut.to_string(),
            format!("Member {}", rut),
            hash,
            role.to_string(),
        );
        self.state.member_repo.create(&member).await.unwrap()
    }

    pub async fn seed_admin(&self) -> Member {
        self.seed_member("11.111.111-1", "admin-secret", ROLE_ADMIN)
            .await
    }

    pub async fn login(&self, rut: &str, password: &str) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/v1/auth/login",
                None,
                Some(serde_json::json!({ "rut": rut, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {:?}", body);
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn login_admin(&self) -> String {
        self.login("11.111.111-1", "admin-secret").await
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
