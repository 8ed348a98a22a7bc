//! Askama templates for HTMX UI

use agrochain_core::{
    FieldSpec, FormRecord, InspectionRecord, JourneyStage, Notification, RoleDefinition,
    RoleSummary,
};
use askama::Template;

// ============================================================================
// Shared view models
// ============================================================================

/// A schema field paired with its current value
#[derive(Debug, Clone)]
pub struct FieldView {
    pub spec: &'static FieldSpec,
    pub value: String,
}

impl FieldView {
    /// Pair every declared field with its value in `record`
    pub fn from_record(definition: &'static RoleDefinition, record: &FormRecord) -> Vec<Self> {
        definition
            .fields
            .iter()
            .map(|spec| FieldView {
                spec,
                value: record.get(spec.name).unwrap_or_default().to_string(),
            })
            .collect()
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.value == option
    }
}

// ============================================================================
// Home
// ============================================================================

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Blockchain Verified",
        description: "Every transaction recorded on Ethereum/Polygon",
    },
    Feature {
        title: "IPFS Storage",
        description: "Certificates and documents stored decentralized",
    },
    Feature {
        title: "Real-time Tracking",
        description: "Complete transparency from source to consumer",
    },
];

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub roles: Vec<RoleSummary>,
    pub features: &'static [Feature],
}

// ============================================================================
// Role dashboards
// ============================================================================

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub definition: &'static RoleDefinition,
    pub fields: Vec<FieldView>,
    pub notification: Option<Notification>,
}

/// Form fragment returned to HTMX submissions
#[derive(Template)]
#[template(path = "components/dashboard_form_response.html")]
pub struct DashboardFormTemplate {
    pub definition: &'static RoleDefinition,
    pub fields: Vec<FieldView>,
    pub notification: Option<Notification>,
}

#[derive(Template)]
#[template(path = "components/certificate_results_response.html")]
pub struct CertificateResultsTemplate {
    pub query: String,
    pub matches: Vec<InspectionRecord>,
    pub notification: Option<Notification>,
}

// ============================================================================
// Customer journey
// ============================================================================

#[derive(Template)]
#[template(path = "pages/customer.html")]
pub struct CustomerTemplate {
    pub identifier: String,
    pub show_result: bool,
    pub product: &'static str,
    pub stages: &'static [JourneyStage],
    pub notification: Option<Notification>,
}

/// Journey panel fragment returned to HTMX requests
#[derive(Template)]
#[template(path = "components/journey_panel_response.html")]
pub struct JourneyPanelTemplate {
    pub identifier: String,
    pub show_result: bool,
    pub product: &'static str,
    pub stages: &'static [JourneyStage],
    pub notification: Option<Notification>,
}

// ============================================================================
// Fallback
// ============================================================================

#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}
