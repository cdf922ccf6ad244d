pub mod auth;
pub mod expenditure;
pub mod member;
pub mod payment;
pub mod reading;
pub mod register;
pub mod transaction;
