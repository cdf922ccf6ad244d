use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

use crate::api::handlers::{
    auth, expenditure, health, invoice, member, payment, reading, register, report, transaction,
};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/verify", get(auth::verify))

        // Members
        .route("/api/v1/members", get(member::list_members).post(member::create_member))
        .route("/api/v1/members/{id}", get(member::get_member))
        .route("/api/v1/members/{id}/status", put(member::update_member_status))
        .route("/api/v1/members/{id}/readings", get(reading::list_member_readings))
        .route("/api/v1/members/{id}/statement", get(report::get_member_statement))
        .route("/api/v1/members/{id}/invoice", get(invoice::download_invoice))
        .route("/api/v1/members/{id}/invoice/preview", get(invoice::preview_invoice))

        // Readings
        .route("/api/v1/readings", get(reading::list_readings).post(reading::create_reading))

        // Payments
        .route("/api/v1/payments", get(payment::list_payments).post(payment::create_payment))

        // Register sessions
        .route("/api/v1/registers", get(register::list_registers))
        .route("/api/v1/registers/filter", get(register::list_registers_by_date))
        .route("/api/v1/registers/open", get(register::get_open_register).post(register::open_register))
        .route("/api/v1/registers/{id}/close", put(register::close_register))
        .route("/api/v1/registers/{id}/payments", get(payment::list_register_payments))
        .route("/api/v1/registers/{id}/summary", get(register::get_register_summary))
        .route("/api/v1/registers/{id}/expenditures", get(expenditure::list_register_expenditures))
        .route("/api/v1/registers/{id}/expenditures/total", get(expenditure::get_register_expenditure_total))

        // Expenditures
        .route("/api/v1/expenditures", get(expenditure::list_expenditures).post(expenditure::create_expenditure))

        // General ledger
        .route("/api/v1/transactions", get(transaction::list_transactions).post(transaction::create_transaction))
        .route("/api/v1/transactions/kind/{kind}", get(transaction::list_transactions_by_kind))
        .route("/api/v1/transactions/balance", get(transaction::get_monthly_balance))

        // Reports
        .route("/api/v1/reports/delinquency", get(report::get_delinquency_report))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        member_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
