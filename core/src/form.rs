//! Dashboard form state
//!
//! A [`FormRecord`] holds one string per declared field. A
//! [`RoleDashboard`] owns one record and implements the edit/submit cycle:
//! edits always succeed, a submit is guarded only by required-field
//! presence, and a successful submit emits one notification and clears the
//! record.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result, SubmitError};
use crate::notifications::Notification;
use crate::roles::RoleDefinition;
use crate::schema::FieldSpec;

/// Field values for one submission cycle, in schema order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormRecord {
    values: Vec<(&'static str, String)>,
}

impl FormRecord {
    /// All declared fields present and empty
    pub fn empty(fields: &[FieldSpec]) -> Self {
        Self {
            values: fields.iter().map(|f| (f.name, String::new())).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace one value; returns `false` if `name` is not declared
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        for (_, value) in self.values.iter_mut() {
            value.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|(_, v)| v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// One dashboard page's form state
#[derive(Debug, Clone)]
pub struct RoleDashboard {
    definition: &'static RoleDefinition,
    record: FormRecord,
}

impl RoleDashboard {
    pub fn new(definition: &'static RoleDefinition) -> Self {
        Self {
            definition,
            record: FormRecord::empty(&definition.fields),
        }
    }

    pub fn definition(&self) -> &'static RoleDefinition {
        self.definition
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Replace one field's value. No validation beyond the name being declared.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if self.record.set(name, value) {
            Ok(())
        } else {
            Err(Error::UnknownField {
                form: self.definition.role.to_string(),
                field: name.to_string(),
            })
        }
    }

    /// Load submitted name/value pairs, skipping names the schema does not declare
    pub fn bind<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in pairs {
            if !self.record.set(name.as_ref(), value) {
                debug!(
                    role = %self.definition.role,
                    field = name.as_ref(),
                    "Ignoring undeclared form field"
                );
            }
        }
    }

    /// First required field that is still empty
    pub fn missing_required(&self) -> Option<&'static str> {
        self.definition
            .fields
            .iter()
            .filter(|f| f.required)
            .find(|f| self.record.get(f.name).map_or(true, str::is_empty))
            .map(|f| f.name)
    }

    /// Submit the form
    ///
    /// Blocked only when a required field is empty, in which case nothing
    /// changes. Otherwise returns the role's success notification and resets
    /// the record.
    pub fn submit(&mut self) -> std::result::Result<Notification, SubmitError> {
        if let Some(field) = self.missing_required() {
            debug!(role = %self.definition.role, field, "Submission blocked");
            return Err(SubmitError::MissingRequired { field });
        }

        info!(role = %self.definition.role, "Form submitted");
        self.record.clear();
        Ok(self.definition.success_notification())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Role;

    fn filled(role: Role) -> RoleDashboard {
        let def = role.dashboard().unwrap();
        let mut dash = RoleDashboard::new(def);
        for field in &def.fields {
            dash.update_field(field.name, format!("value-{}", field.name))
                .unwrap();
        }
        dash
    }

    #[test]
    fn test_initial_record_is_empty() {
        for role in Role::DASHBOARDS {
            let dash = RoleDashboard::new(role.dashboard().unwrap());
            assert!(dash.record().is_empty());
            assert_eq!(dash.record().len(), dash.definition().fields.len());
        }
    }

    #[test]
    fn test_submit_resets_and_notifies_once() {
        for role in Role::DASHBOARDS {
            let mut dash = filled(role);
            let notification = dash.submit().expect("submit should fire");
            assert!(notification.is_success());
            assert_eq!(notification, dash.definition().success_notification());
            assert!(dash.record().is_empty(), "{} not reset", role);
        }
    }

    #[test]
    fn test_missing_required_blocks_without_reset() {
        for role in Role::DASHBOARDS {
            let def = role.dashboard().unwrap();
            for required in def.fields.iter().filter(|f| f.required) {
                let mut dash = filled(role);
                dash.update_field(required.name, "").unwrap();
                let before = dash.record().clone();

                let err = dash.submit().unwrap_err();
                assert_eq!(
                    err,
                    SubmitError::MissingRequired {
                        field: required.name
                    }
                );
                assert_eq!(dash.record(), &before);
            }
        }
    }

    #[test]
    fn test_optional_fields_may_be_empty() {
        let def = Role::Farmer.dashboard().unwrap();
        let mut dash = filled(Role::Farmer);
        dash.update_field("description", "").unwrap();
        assert!(dash.submit().is_ok());
        assert!(def.field("description").is_some());
    }

    #[test]
    fn test_no_format_validation() {
        let mut dash = filled(Role::Retailer);
        dash.update_field("arrivalDate", "not a date").unwrap();
        dash.update_field("sellingPrice", "free").unwrap();
        dash.update_field("productId", " ").unwrap();
        assert!(dash.submit().is_ok());
    }

    #[test]
    fn test_update_field_idempotent() {
        let mut once = RoleDashboard::new(Role::Distributor.dashboard().unwrap());
        once.update_field("truckId", "TRK-001").unwrap();

        let mut twice = RoleDashboard::new(Role::Distributor.dashboard().unwrap());
        twice.update_field("truckId", "TRK-001").unwrap();
        twice.update_field("truckId", "TRK-001").unwrap();

        assert_eq!(once.record(), twice.record());
        assert_eq!(twice.record().get("truckId"), Some("TRK-001"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut dash = RoleDashboard::new(Role::Farmer.dashboard().unwrap());
        let err = dash.update_field("truckId", "TRK-001").unwrap_err();
        assert!(matches!(err, Error::UnknownField { ref field, .. } if field == "truckId"));
        assert!(dash.record().is_empty());
    }

    #[test]
    fn test_bind_skips_unknown() {
        let mut dash = RoleDashboard::new(Role::Service.dashboard().unwrap());
        dash.bind(vec![("batchNumber", "BATCH-001"), ("bogus", "x")]);
        assert_eq!(dash.record().get("batchNumber"), Some("BATCH-001"));
        assert_eq!(dash.record().get("bogus"), None);
    }
}
