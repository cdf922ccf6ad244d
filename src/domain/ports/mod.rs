use crate::domain::models::{
    expenditure::Expenditure, member::Member, payment::Payment, reading::MeterReading,
    register::RegisterSession, transaction::Transaction,
};
use crate::domain::services::invoice::InvoiceData;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, member: &Member) -> Result<Member, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, AppError>;
    async fn find_by_rut(&self, rut: &str) -> Result<Option<Member>, AppError>;
    async fn list(&self) -> Result<Vec<Member>, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<Member, AppError>;
}

#[async_trait]
pub trait ReadingRepository: Send + Sync {
    async fn create(&self, reading: &MeterReading) -> Result<MeterReading, AppError>;
    async fn list(&self) -> Result<Vec<MeterReading>, AppError>;
    /// Newest-first by reading date.
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<MeterReading>, AppError>;
    async fn find_period(
        &self,
        member_id: &str,
        month: i32,
        year: i32,
    ) -> Result<Option<MeterReading>, AppError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &Payment) -> Result<Payment, AppError>;
    async fn list(&self) -> Result<Vec<Payment>, AppError>;
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Payment>, AppError>;
    async fn list_by_register(&self, register_id: &str) -> Result<Vec<Payment>, AppError>;
}

#[async_trait]
pub trait RegisterRepository: Send + Sync {
    /// Fails with a unique violation when another session is already open;
    /// the single-open invariant lives in the storage layer.
    async fn create(&self, session: &RegisterSession) -> Result<RegisterSession, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<RegisterSession>, AppError>;
    async fn find_open(&self) -> Result<Option<RegisterSession>, AppError>;
    async fn list(&self) -> Result<Vec<RegisterSession>, AppError>;
    async fn list_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<RegisterSession>, AppError>;
    /// Persists the closing snapshot. Only an open row is updated; `None`
    /// means the session was already closed by the time the write ran.
    async fn close(&self, session: &RegisterSession) -> Result<Option<RegisterSession>, AppError>;
}

#[async_trait]
pub trait ExpenditureRepository: Send + Sync {
    async fn create(&self, expenditure: &Expenditure) -> Result<Expenditure, AppError>;
    async fn list(&self) -> Result<Vec<Expenditure>, AppError>;
    async fn list_by_register(&self, register_id: &str) -> Result<Vec<Expenditure>, AppError>;
    async fn total_by_register(&self, register_id: &str) -> Result<i64, AppError>;
}

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn create(&self, transaction: &Transaction) -> Result<Transaction, AppError>;
    async fn list(&self) -> Result<Vec<Transaction>, AppError>;
    async fn list_by_kind(&self, kind: &str) -> Result<Vec<Transaction>, AppError>;
    /// (income, expense) totals for the given month.
    async fn monthly_balance(&self, month: i32, year: i32) -> Result<(i64, i64), AppError>;
}

/// Turns assembled invoice data into a rendered PDF. The layout lives in an
/// external collaborator; this side only supplies the data.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render_invoice(&self, invoice: &InvoiceData) -> Result<Vec<u8>, AppError>;
}
