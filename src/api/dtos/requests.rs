use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub rut: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateMemberRequest {
    pub rut: String,
    pub name: String,
    pub password: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub client_number: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateMemberStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct CreateReadingRequest {
    pub member_id: String,
    pub previous_reading: i64,
    pub current_reading: i64,
    pub month: i32,
    pub year: i32,
    pub subsidy: Option<i64>,
    pub penalty: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CreatePaymentRequest {
    pub member_id: String,
    pub register_id: Option<String>,
    pub amount: i64,
    pub method: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct OpenRegisterRequest {
    pub opening_float: i64,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CloseRegisterRequest {
    pub counted_cash: i64,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterDateRangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Deserialize)]
pub struct CreateExpenditureRequest {
    pub register_id: String,
    pub category: String,
    pub description: String,
    pub amount: i64,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateTransactionRequest {
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount: i64,
    pub occurred_at: Option<DateTime<Utc>>,
    pub member_id: Option<String>,
}

#[derive(Deserialize)]
pub struct BalanceQuery {
    pub month: Option<i32>,
    pub year: Option<i32>,
}
