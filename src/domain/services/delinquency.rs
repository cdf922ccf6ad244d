use serde::Serialize;

use crate::domain::models::{
    member::{Member, ROLE_MEMBER, STATUS_DELINQUENT},
    reading::MeterReading,
};

#[derive(Debug, Clone, Serialize)]
pub struct DelinquentEntry {
    pub member_id: String,
    pub name: String,
    pub rut: String,
    pub client_number: Option<String>,
    pub total_debt: i64,
    pub months_in_arrears: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DelinquencyReport {
    pub entries: Vec<DelinquentEntry>,
    pub delinquent_count: usize,
    pub total_debt: i64,
    pub average_debt: i64,
}

/// Partitions flagged members and ranks them by descending debt. Debt is
/// the sum of billed charges; "months in arrears" is the reading-row count,
/// which is how the historical report counted it (unpaid months are the
/// only ones left on file for flagged members).
pub fn classify(members: &[Member], readings: &[MeterReading]) -> DelinquencyReport {
    let mut entries: Vec<DelinquentEntry> = members
        .iter()
        .filter(|m| m.status == STATUS_DELINQUENT && m.role == ROLE_MEMBER)
        .map(|member| {
            let theirs: Vec<&MeterReading> = readings
                .iter()
                .filter(|r| r.member_id == member.id)
                .collect();
            DelinquentEntry {
                member_id: member.id.clone(),
                name: member.name.clone(),
                rut: member.rut.clone(),
                client_number: member.client_number.clone(),
                total_debt: theirs.iter().map(|r| r.charge).sum(),
                months_in_arrears: theirs.len(),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total_debt.cmp(&a.total_debt));

    let delinquent_count = entries.len();
    let total_debt: i64 = entries.iter().map(|e| e.total_debt).sum();
    let average_debt = if delinquent_count > 0 {
        total_debt / delinquent_count as i64
    } else {
        0
    };

    DelinquencyReport {
        entries,
        delinquent_count,
        total_debt,
        average_debt,
    }
}
