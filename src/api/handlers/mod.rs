pub mod auth;
pub mod expenditure;
pub mod health;
pub mod invoice;
pub mod member;
pub mod payment;
pub mod reading;
pub mod register;
pub mod report;
pub mod transaction;
