pub mod auth_service;
pub mod delinquency;
pub mod invoice;
pub mod ledger;
pub mod reconciliation;
pub mod tariff;
