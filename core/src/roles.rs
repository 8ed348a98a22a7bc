//! Role definitions
//!
//! Every dashboard is the same generic page driven by a [`RoleDefinition`]:
//! the form schema, the success notification, and the static side panels.
//! The customer role has no form; it is served by the journey viewer.

use serde::Serialize;
use std::sync::OnceLock;

use crate::certificates::{recent_inspections, InspectionRecord};
use crate::notifications::Notification;
use crate::schema::{FieldSpec, SelectOption};

/// The five supply-chain participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    Distributor,
    Retailer,
    Service,
    Customer,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Farmer,
        Role::Distributor,
        Role::Retailer,
        Role::Service,
        Role::Customer,
    ];

    /// Roles whose page is a form dashboard
    pub const DASHBOARDS: [Role; 4] = [
        Role::Farmer,
        Role::Distributor,
        Role::Retailer,
        Role::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::Distributor => "distributor",
            Role::Retailer => "retailer",
            Role::Service => "service",
            Role::Customer => "customer",
        }
    }

    /// Card shown on the home page role selector
    pub fn summary(&self) -> RoleSummary {
        let (title, description) = match self {
            Role::Farmer => ("Farmer", "Add products and track from farm"),
            Role::Distributor => ("Distributor", "Manage transport and logistics"),
            Role::Retailer => ("Retailer", "Track arrivals and inventory"),
            Role::Service => ("Service", "Quality checks and verification"),
            Role::Customer => ("Customer", "Scan and trace product journey"),
        };
        RoleSummary {
            role: *self,
            title,
            description,
        }
    }

    /// Dashboard definition, `None` for the customer journey page
    pub fn dashboard(&self) -> Option<&'static RoleDefinition> {
        let defs = definitions();
        match self {
            Role::Farmer => Some(&defs[0]),
            Role::Distributor => Some(&defs[1]),
            Role::Retailer => Some(&defs[2]),
            Role::Service => Some(&defs[3]),
            Role::Customer => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    pub role: Role,
    pub title: &'static str,
    pub description: &'static str,
}

impl RoleSummary {
    pub fn path(&self) -> String {
        format!("/{}", self.role.as_str())
    }
}

/// Colour family for badges and values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Default,
    Primary,
    Success,
    Muted,
    Destructive,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Default => "default",
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Muted => "muted",
            Tone::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListItem {
    pub title: String,
    pub detail: String,
    pub detail_tone: Tone,
    pub badge: String,
    pub badge_tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListPanel {
    pub title: &'static str,
    pub description: &'static str,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsPanel {
    pub title: &'static str,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoPanel {
    pub title: &'static str,
    pub rows: Vec<InfoRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
    pub tone: Tone,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertsPanel {
    pub title: &'static str,
    pub alerts: Vec<Alert>,
}

/// Everything needed to render and drive one dashboard
#[derive(Debug, Clone, Serialize)]
pub struct RoleDefinition {
    pub role: Role,
    pub title: &'static str,
    pub form_title: &'static str,
    pub form_description: &'static str,
    pub submit_label: &'static str,
    pub success_title: &'static str,
    pub success_description: &'static str,
    pub fields: Vec<FieldSpec>,
    pub list: ListPanel,
    pub alerts: Option<AlertsPanel>,
    pub stats: Option<StatsPanel>,
    pub info: Option<InfoPanel>,
    /// Service dashboard only
    pub certificate_lookup: bool,
}

impl RoleDefinition {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The notification emitted on every successful submit
    pub fn success_notification(&self) -> Notification {
        Notification::success(self.success_title).with_description(self.success_description)
    }

    pub fn path(&self) -> String {
        format!("/{}", self.role.as_str())
    }
}

// ============================================================================
// Static definitions
// ============================================================================

const CATEGORIES: &[SelectOption] = &[
    SelectOption::new("vegetables", "Vegetables"),
    SelectOption::new("fruits", "Fruits"),
    SelectOption::new("grains", "Grains"),
    SelectOption::new("meat", "Meat"),
    SelectOption::new("dairy", "Dairy"),
    SelectOption::new("other", "Other"),
];

const WAREHOUSES: &[SelectOption] = &[
    SelectOption::new("warehouse-1", "Central Warehouse A"),
    SelectOption::new("warehouse-2", "Distribution Hub B"),
    SelectOption::new("warehouse-3", "Regional Center C"),
    SelectOption::new("warehouse-4", "Cold Storage D"),
];

const QUALITY_CHECKS: &[SelectOption] = &[
    SelectOption::new("excellent", "Excellent - Premium grade"),
    SelectOption::new("good", "Good - Standard quality"),
    SelectOption::new("fair", "Fair - Minor defects"),
    SelectOption::new("poor", "Poor - Requires discount"),
];

const STORAGE_LOCATIONS: &[SelectOption] = &[
    SelectOption::new("produce-section", "Produce Section"),
    SelectOption::new("cold-storage", "Cold Storage"),
    SelectOption::new("dry-goods", "Dry Goods"),
    SelectOption::new("freezer", "Freezer Section"),
];

const QUALITY_GRADES: &[SelectOption] = &[
    SelectOption::new("premium", "Premium Grade A+"),
    SelectOption::new("excellent", "Excellent Grade A"),
    SelectOption::new("good", "Good Grade B"),
    SelectOption::new("standard", "Standard Grade C"),
    SelectOption::new("basic", "Basic Grade D"),
];

const CERTIFICATIONS: &[SelectOption] = &[
    SelectOption::new("organic", "USDA Organic Certified"),
    SelectOption::new("gmp", "Good Manufacturing Practice"),
    SelectOption::new("haccp", "HACCP Certified"),
    SelectOption::new("iso", "ISO 22000 Certified"),
    SelectOption::new("fair-trade", "Fair Trade Certified"),
    SelectOption::new("none", "No Certification"),
];

const PRODUCT_ID_PLACEHOLDER: &str = "0x1234...abcd";

fn definitions() -> &'static [RoleDefinition; 4] {
    static DEFINITIONS: OnceLock<[RoleDefinition; 4]> = OnceLock::new();
    DEFINITIONS.get_or_init(|| [farmer(), distributor(), retailer(), service()])
}

fn stat(value: &'static str, label: &'static str) -> Stat {
    Stat { value, label }
}

fn info(label: &'static str, value: &'static str, tone: Tone) -> InfoRow {
    InfoRow { label, value, tone }
}

fn farmer() -> RoleDefinition {
    let products = [
        ("Organic Tomatoes", "Confirmed", "2024-01-15"),
        ("Fresh Lettuce", "Pending", "2024-01-14"),
        ("Premium Carrots", "Confirmed", "2024-01-13"),
    ];

    RoleDefinition {
        role: Role::Farmer,
        title: "Farmer Dashboard",
        form_title: "Add New Product",
        form_description: "Register your agricultural products on the blockchain",
        submit_label: "Add to Blockchain",
        success_title: "Product added to blockchain successfully!",
        success_description: "Transaction hash: 0x1234...abcd",
        fields: vec![
            FieldSpec::text("productName", "Product Name")
                .required()
                .placeholder("e.g., Organic Tomatoes"),
            FieldSpec::select("category", "Category", CATEGORIES)
                .required()
                .placeholder("Select category"),
            FieldSpec::date("packingDate", "Packing Date").required(),
            FieldSpec::date("expiryDate", "Expiry Date").required(),
            FieldSpec::number("quantity", "Quantity (kg)")
                .required()
                .placeholder("100"),
            FieldSpec::text("location", "Farm Location")
                .required()
                .placeholder("City, State"),
            FieldSpec::textarea("description", "Description", 3)
                .placeholder("Additional details about the product..."),
        ],
        list: ListPanel {
            title: "Recent Products",
            description: "Your latest blockchain entries",
            items: products
                .iter()
                .map(|(name, status, date)| ListItem {
                    title: name.to_string(),
                    detail: date.to_string(),
                    detail_tone: Tone::Muted,
                    badge: status.to_string(),
                    badge_tone: if *status == "Confirmed" {
                        Tone::Success
                    } else {
                        Tone::Primary
                    },
                })
                .collect(),
        },
        alerts: None,
        stats: None,
        info: Some(InfoPanel {
            title: "Blockchain Info",
            rows: vec![
                info("Network", "Polygon Mainnet", Tone::Default),
                info("Gas Price", "2.1 Gwei", Tone::Default),
                info("Your Products", "12 Active", Tone::Primary),
            ],
        }),
        certificate_lookup: false,
    }
}

fn distributor() -> RoleDefinition {
    let shipments = [
        ("SH001", "Organic Tomatoes", "Farm A → Hub B", "2h 30m"),
        ("SH002", "Fresh Lettuce", "Farm C → Store D", "4h 15m"),
        ("SH003", "Premium Carrots", "Hub E → Store F", "1h 45m"),
    ];

    RoleDefinition {
        role: Role::Distributor,
        title: "Distributor Dashboard",
        form_title: "Update Transport Details",
        form_description: "Record logistics and delivery information on blockchain",
        submit_label: "Update Blockchain",
        success_title: "Transport details updated on blockchain!",
        success_description: "Product tracking updated successfully",
        fields: vec![
            FieldSpec::text("productId", "Product ID")
                .required()
                .placeholder(PRODUCT_ID_PLACEHOLDER),
            FieldSpec::text("truckId", "Truck ID")
                .required()
                .placeholder("TRK-001"),
            FieldSpec::text("driverName", "Driver Name")
                .required()
                .placeholder("John Doe"),
            FieldSpec::text("pickupLocation", "Pickup Location")
                .required()
                .placeholder("Farm Address"),
            FieldSpec::select("warehouse", "Destination Warehouse", WAREHOUSES)
                .required()
                .placeholder("Select warehouse"),
            FieldSpec::date("deliveryDate", "Expected Delivery").required(),
            FieldSpec::number("temperature", "Transport Temp (°C)").placeholder("4"),
            FieldSpec::textarea("notes", "Transport Notes", 3)
                .placeholder("Special handling instructions..."),
        ],
        list: ListPanel {
            title: "Active Shipments",
            description: "Currently in transit",
            items: shipments
                .iter()
                .map(|(id, product, route, eta)| ListItem {
                    title: format!("{} · {}", id, product),
                    detail: route.to_string(),
                    detail_tone: Tone::Muted,
                    badge: eta.to_string(),
                    badge_tone: Tone::Primary,
                })
                .collect(),
        },
        alerts: None,
        stats: Some(StatsPanel {
            title: "Transport Statistics",
            stats: vec![
                stat("23", "Active Routes"),
                stat("96%", "On-Time Delivery"),
                stat("5.2°C", "Avg Temperature"),
                stat("847", "Total Deliveries"),
            ],
        }),
        info: Some(InfoPanel {
            title: "Fleet Status",
            rows: vec![
                info("Available Trucks", "12/15", Tone::Success),
                info("In Transit", "3", Tone::Primary),
                info("Maintenance", "0", Tone::Muted),
            ],
        }),
        certificate_lookup: false,
    }
}

/// Items expiring within two days are highlighted
fn expiry_tone(days: u32) -> Tone {
    if days <= 2 {
        Tone::Destructive
    } else {
        Tone::Muted
    }
}

fn retailer() -> RoleDefinition {
    let inventory = [
        ("Organic Tomatoes", "23 kg", "excellent", 3),
        ("Fresh Lettuce", "15 kg", "good", 2),
        ("Premium Carrots", "31 kg", "excellent", 5),
    ];

    RoleDefinition {
        role: Role::Retailer,
        title: "Retailer Dashboard",
        form_title: "Record Product Arrival",
        form_description: "Update inventory and track product quality on blockchain",
        submit_label: "Confirm Arrival",
        success_title: "Product arrival confirmed on blockchain!",
        success_description: "Inventory updated successfully",
        fields: vec![
            FieldSpec::text("productId", "Product ID")
                .required()
                .placeholder(PRODUCT_ID_PLACEHOLDER),
            FieldSpec::date("arrivalDate", "Arrival Date").required(),
            FieldSpec::number("receivedQuantity", "Received Quantity (kg)")
                .required()
                .placeholder("95"),
            FieldSpec::select("qualityCheck", "Quality Assessment", QUALITY_CHECKS)
                .required()
                .placeholder("Select quality status"),
            FieldSpec::select("storageLocation", "Storage Location", STORAGE_LOCATIONS)
                .required()
                .placeholder("Select storage area"),
            FieldSpec::number("shelfLife", "Remaining Shelf Life (days)")
                .required()
                .placeholder("7"),
            FieldSpec::number("sellingPrice", "Selling Price ($/kg)")
                .step("0.01")
                .required()
                .placeholder("4.99"),
            FieldSpec::textarea("notes", "Additional Notes", 2)
                .placeholder("Storage conditions, special handling..."),
        ],
        list: ListPanel {
            title: "Current Inventory",
            description: "Products on shelf",
            items: inventory
                .iter()
                .map(|(name, quantity, quality, days)| ListItem {
                    title: name.to_string(),
                    detail: format!("{} · Expires in {} days", quantity, days),
                    detail_tone: expiry_tone(*days),
                    badge: quality.to_string(),
                    badge_tone: if *quality == "excellent" {
                        Tone::Success
                    } else {
                        Tone::Primary
                    },
                })
                .collect(),
        },
        alerts: Some(AlertsPanel {
            title: "Alerts & Notifications",
            alerts: vec![
                Alert {
                    title: "Expiry Alert",
                    message: "Fresh Lettuce expires in 2 days",
                    tone: Tone::Destructive,
                },
                Alert {
                    title: "New Shipment",
                    message: "Expected delivery in 3 hours",
                    tone: Tone::Primary,
                },
            ],
        }),
        stats: Some(StatsPanel {
            title: "Store Statistics",
            stats: vec![
                stat("156", "Products Tracked"),
                stat("98%", "Quality Score"),
                stat("2.1%", "Waste Reduction"),
                stat("$12.4k", "Monthly Revenue"),
            ],
        }),
        info: None,
        certificate_lookup: false,
    }
}

fn inspection_item(record: &InspectionRecord) -> ListItem {
    ListItem {
        title: record.batch.to_string(),
        detail: format!("{} · {}", record.product, record.date),
        detail_tone: Tone::Muted,
        badge: record.grade.to_string(),
        badge_tone: if record.grade.contains("Premium") {
            Tone::Primary
        } else {
            Tone::Success
        },
    }
}

fn service() -> RoleDefinition {
    RoleDefinition {
        role: Role::Service,
        title: "Quality Service Dashboard",
        form_title: "Quality Inspection Report",
        form_description: "Issue quality certificates and store on IPFS + blockchain",
        submit_label: "Issue Certificate",
        success_title: "Quality certificate issued on blockchain!",
        success_description: "IPFS hash: QmX1...abc stored successfully",
        fields: vec![
            FieldSpec::text("productId", "Product ID")
                .required()
                .placeholder(PRODUCT_ID_PLACEHOLDER),
            FieldSpec::text("batchNumber", "Batch Number")
                .required()
                .placeholder("BATCH-2024-001"),
            FieldSpec::date("inspectionDate", "Inspection Date").required(),
            FieldSpec::select("qualityGrade", "Quality Grade", QUALITY_GRADES)
                .required()
                .placeholder("Select quality grade"),
            FieldSpec::select("certificationLevel", "Certification Level", CERTIFICATIONS)
                .required()
                .placeholder("Select certification"),
            FieldSpec::textarea("testResults", "Test Results Summary", 3)
                .required()
                .placeholder(
                    "Microbiological tests: PASS, Pesticide residue: <0.01mg/kg, Heavy metals: PASS...",
                ),
            FieldSpec::text("inspector", "Inspector Name & ID")
                .required()
                .placeholder("Dr. Jane Smith - ID: QI-001"),
            FieldSpec::textarea("notes", "Additional Notes", 2)
                .placeholder("Special observations, recommendations..."),
        ],
        list: ListPanel {
            title: "Recent Inspections",
            description: "Latest quality assessments",
            items: recent_inspections().iter().map(inspection_item).collect(),
        },
        alerts: None,
        stats: Some(StatsPanel {
            title: "Inspection Statistics",
            stats: vec![
                stat("342", "Total Inspections"),
                stat("97.2%", "Pass Rate"),
                stat("156", "Certificates Issued"),
                stat("24h", "Avg Processing"),
            ],
        }),
        info: Some(InfoPanel {
            title: "IPFS Storage",
            rows: vec![
                info("Files Stored", "342 certificates", Tone::Default),
                info("Storage Used", "2.4 GB", Tone::Default),
                info("Network Status", "✓ Connected", Tone::Success),
            ],
        }),
        certificate_lookup: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_dashboard_role_has_definition() {
        for role in Role::DASHBOARDS {
            let def = role.dashboard().expect("dashboard definition");
            assert_eq!(def.role, role);
            assert_eq!(def.path(), format!("/{}", role));
        }
        assert!(Role::Customer.dashboard().is_none());
    }

    #[test]
    fn test_field_names_unique_per_schema() {
        for role in Role::DASHBOARDS {
            let def = role.dashboard().unwrap();
            let names: HashSet<_> = def.fields.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), def.fields.len(), "duplicate field in {}", role);
        }
    }

    #[test]
    fn test_every_dashboard_has_required_and_optional_fields() {
        for role in Role::DASHBOARDS {
            let def = role.dashboard().unwrap();
            assert!(def.fields.iter().any(|f| f.required));
            assert!(def.fields.iter().any(|f| !f.required));
        }
    }

    #[test]
    fn test_farmer_schema_matches_form() {
        let def = Role::Farmer.dashboard().unwrap();
        let names: Vec<_> = def.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec![
                "productName",
                "category",
                "packingDate",
                "expiryDate",
                "quantity",
                "location",
                "description"
            ]
        );
        assert!(!def.field("description").unwrap().required);
        assert_eq!(def.field("category").unwrap().kind.options().len(), 6);
    }

    #[test]
    fn test_success_notification() {
        let n = Role::Service.dashboard().unwrap().success_notification();
        assert!(n.is_success());
        assert_eq!(n.title, "Quality certificate issued on blockchain!");
        assert_eq!(
            n.description.as_deref(),
            Some("IPFS hash: QmX1...abc stored successfully")
        );
    }

    #[test]
    fn test_only_service_offers_certificate_lookup() {
        for role in Role::DASHBOARDS {
            let def = role.dashboard().unwrap();
            assert_eq!(def.certificate_lookup, role == Role::Service);
        }
    }

    #[test]
    fn test_expiry_highlight() {
        let def = Role::Retailer.dashboard().unwrap();
        let lettuce = &def.list.items[1];
        assert_eq!(lettuce.detail_tone, Tone::Destructive);
        assert_eq!(def.list.items[0].detail_tone, Tone::Muted);
    }

    #[test]
    fn test_summaries() {
        let paths: Vec<_> = Role::ALL.iter().map(|r| r.summary().path()).collect();
        assert_eq!(
            paths,
            vec!["/farmer", "/distributor", "/retailer", "/service", "/customer"]
        );
    }
}
