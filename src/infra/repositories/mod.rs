pub mod sqlite_expenditure_repo;
pub mod sqlite_member_repo;
pub mod sqlite_payment_repo;
pub mod sqlite_reading_repo;
pub mod sqlite_register_repo;
pub mod sqlite_transaction_repo;

pub mod postgres_expenditure_repo;
pub mod postgres_member_repo;
pub mod postgres_payment_repo;
pub mod postgres_reading_repo;
pub mod postgres_register_repo;
pub mod postgres_transaction_repo;
