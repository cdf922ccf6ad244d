use std::env;

use crate::domain::services::ledger::ArrearsMode;
use crate::domain::services::tariff::TariffSchedule;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub tariff: TariffSchedule,
    pub arrears_mode: ArrearsMode,
    pub renderer_url: String,
    pub payment_portal_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            token_ttl_days: env_i64("TOKEN_TTL_DAYS", 7),
            tariff: TariffSchedule {
                fixed_charge: env_i64("TARIFF_FIXED_CHARGE", 3000),
                tier1_rate: env_i64("TARIFF_TIER1_RATE", 700),
                tier2_rate: env_i64("TARIFF_TIER2_RATE", 900),
                tier3_rate: env_i64("TARIFF_TIER3_RATE", 1200),
                tax_rate: env::var("TARIFF_TAX_RATE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0.19),
                apply_tax: env::var("TARIFF_APPLY_TAX")
                    .map(|v| v == "true" || v == "1")
                    .unwrap_or(false),
            },
            arrears_mode: match env::var("ARREARS_MODE").as_deref() {
                Ok("allocated") => ArrearsMode::Allocated,
                _ => ArrearsMode::Naive,
            },
            renderer_url: env::var("RENDERER_URL")
                .unwrap_or_else(|_| "http://localhost:8100/render".to_string()),
            payment_portal_url: env::var("PAYMENT_PORTAL_URL")
                .unwrap_or_else(|_| "https://pagos.apr.local/pagar".to_string()),
        }
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
