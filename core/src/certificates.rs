//! Quality certificate lookup for the service dashboard
//!
//! Searches the recent-inspection sample set. Nothing is fetched from a
//! ledger or IPFS; a match only means the query names a known batch or
//! product.

use serde::Serialize;

use crate::notifications::Notification;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionRecord {
    pub batch: &'static str,
    pub product: &'static str,
    pub grade: &'static str,
    pub date: &'static str,
}

const RECENT_INSPECTIONS: &[InspectionRecord] = &[
    InspectionRecord {
        batch: "BATCH-001",
        product: "Organic Tomatoes",
        grade: "Premium A+",
        date: "Jan 15",
    },
    InspectionRecord {
        batch: "BATCH-002",
        product: "Fresh Lettuce",
        grade: "Excellent A",
        date: "Jan 14",
    },
    InspectionRecord {
        batch: "BATCH-003",
        product: "Premium Carrots",
        grade: "Premium A+",
        date: "Jan 13",
    },
];

pub fn recent_inspections() -> &'static [InspectionRecord] {
    RECENT_INSPECTIONS
}

/// Outcome of a certificate search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateLookup {
    pub query: String,
    pub matches: Vec<InspectionRecord>,
    pub notification: Notification,
}

/// Match `query` against batch numbers and product names
///
/// Case-insensitive substring match on the trimmed query. An empty query
/// yields an error notification and no matches.
pub fn lookup_certificate(query: &str) -> CertificateLookup {
    let needle = query.trim().to_lowercase();

    if needle.is_empty() {
        return CertificateLookup {
            query: query.to_string(),
            matches: Vec::new(),
            notification: Notification::error("Please enter a product ID or batch number"),
        };
    }

    let matches: Vec<InspectionRecord> = RECENT_INSPECTIONS
        .iter()
        .filter(|r| {
            r.batch.to_lowercase().contains(&needle) || r.product.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    let notification = if matches.is_empty() {
        Notification::error("No certificate found")
            .with_description(format!("Nothing on record matches '{}'", query.trim()))
    } else {
        Notification::success(format!("{} certificate(s) verified", matches.len()))
            .with_description("Verify authenticity using blockchain records")
    };

    CertificateLookup {
        query: query.to_string(),
        matches,
        notification,
    }
}
