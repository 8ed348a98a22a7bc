//! Customer journey viewer
//!
//! Two-state machine: `Input` (initial) and `Result`. The rendered journey
//! is the same fixed five-stage sequence for every identifier; the entered
//! identifier is never used to select data.

use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

use crate::notifications::Notification;

/// Identifier loaded by "View Sample Journey"
pub const SAMPLE_IDENTIFIER: &str = "0x1234567890abcdef";

/// Product shown in the result header
pub const SAMPLE_PRODUCT: &str = "Organic Tomatoes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Completed,
    Current,
    Pending,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Completed => "completed",
            StageStatus::Current => "current",
            StageStatus::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StageStatus::Completed => "Completed",
            StageStatus::Current => "Current",
            StageStatus::Pending => "Pending",
        }
    }
}

/// One step of the product timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyStage {
    pub position: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub timestamp: &'static str,
    pub location: &'static str,
    pub status: StageStatus,
    pub details: Vec<(&'static str, &'static str)>,
}

/// The fixed timeline, built once
pub fn journey_stages() -> &'static [JourneyStage] {
    static STAGES: OnceLock<Vec<JourneyStage>> = OnceLock::new();
    STAGES.get_or_init(|| {
        vec![
            JourneyStage {
                position: 1,
                title: "Farm Origin",
                description: "Organic Tomatoes harvested from Green Valley Farm",
                timestamp: "2024-01-10 08:30 AM",
                location: "Green Valley Farm, California",
                status: StageStatus::Completed,
                details: vec![
                    ("farmer", "John Doe Farm"),
                    ("weight", "100 kg"),
                    ("quality", "Premium Grade A+"),
                    ("certifications", "USDA Organic, Non-GMO"),
                ],
            },
            JourneyStage {
                position: 2,
                title: "Quality Inspection",
                description: "Passed all quality and safety tests",
                timestamp: "2024-01-10 02:15 PM",
                location: "AgriCert Lab, California",
                status: StageStatus::Completed,
                details: vec![
                    ("inspector", "Dr. Jane Smith - QI-001"),
                    ("grade", "Premium A+"),
                    ("tests", "Pesticide residue: PASS, Heavy metals: PASS"),
                    ("certificate", "QmX1...abc (IPFS)"),
                ],
            },
            JourneyStage {
                position: 3,
                title: "Transportation",
                description: "Cold chain transport to distribution center",
                timestamp: "2024-01-11 06:00 AM",
                location: "En route to Central Hub",
                status: StageStatus::Completed,
                details: vec![
                    ("driver", "Mike Johnson"),
                    ("truck", "TRK-001"),
                    ("temperature", "4°C maintained"),
                    ("duration", "6 hours"),
                ],
            },
            JourneyStage {
                position: 4,
                title: "Retail Store",
                description: "Arrived at FreshMart Downtown",
                timestamp: "2024-01-11 12:30 PM",
                location: "FreshMart, Downtown",
                status: StageStatus::Completed,
                details: vec![
                    ("receiver", "Sarah Williams"),
                    ("shelf", "Produce Section A3"),
                    ("price", "$4.99/kg"),
                    ("remaining", "7 days shelf life"),
                ],
            },
            JourneyStage {
                position: 5,
                title: "Purchase",
                description: "Ready for customer purchase",
                timestamp: "Available now",
                location: "FreshMart, Downtown",
                status: StageStatus::Current,
                details: vec![
                    ("availability", "In stock"),
                    ("freshness", "Peak quality"),
                    ("expires", "2024-01-18"),
                    ("blockchain", "Verified on Polygon"),
                ],
            },
        ]
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyView {
    #[default]
    Input,
    Result,
}

/// Customer tracker state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyViewer {
    identifier: String,
    view: JourneyView,
}

impl JourneyViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a viewer from state carried in a request
    pub fn with_state(identifier: impl Into<String>, view: JourneyView) -> Self {
        Self {
            identifier: identifier.into(),
            view,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn view(&self) -> JourneyView {
        self.view
    }

    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.identifier = value.into();
    }

    /// Show the journey if an identifier was entered
    pub fn track(&mut self) -> Notification {
        if self.identifier.trim().is_empty() {
            debug!("Track requested without identifier");
            return Notification::error("Please enter a QR code or product ID");
        }

        debug!(identifier = %self.identifier, "Tracking product");
        self.view = JourneyView::Result;
        Notification::success("Product found! Displaying journey...")
    }

    /// Load the sample identifier and show the journey unconditionally
    pub fn load_sample(&mut self) -> Notification {
        self.identifier = SAMPLE_IDENTIFIER.to_string();
        self.view = JourneyView::Result;
        Notification::success("Sample product loaded!")
    }

    /// Share the displayed journey; the view is unchanged
    pub fn share(&self) -> Notification {
        debug!(identifier = %self.identifier, "Sharing journey");
        Notification::success("Journey shared successfully!")
    }

    /// Back to the input view; the identifier is kept
    pub fn reset(&mut self) {
        self.view = JourneyView::Input;
    }

    pub fn stages(&self) -> &'static [JourneyStage] {
        journey_stages()
    }
}
