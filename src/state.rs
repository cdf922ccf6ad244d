use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    DocumentRenderer, ExpenditureRepository, MemberRepository, PaymentRepository,
    ReadingRepository, RegisterRepository, TransactionRepository,
};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub member_repo: Arc<dyn MemberRepository>,
    pub reading_repo: Arc<dyn ReadingRepository>,
    pub payment_repo: Arc<dyn PaymentRepository>,
    pub register_repo: Arc<dyn RegisterRepository>,
    pub expenditure_repo: Arc<dyn ExpenditureRepository>,
    pub transaction_repo: Arc<dyn TransactionRepository>,
    pub auth_service: Arc<AuthService>,
    pub renderer: Arc<dyn DocumentRenderer>,
}
