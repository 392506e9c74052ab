//! Client-side form schemas
//!
//! These mirror the checks the backend performs so users get immediate
//! feedback; the backend remains authoritative and its field errors are
//! merged back through [`FieldErrors`].

use crate::enquiry::{
    ConversionStatus, CustomerOption, EnquiryDetail, EnquiryInput, LeadSource, PackageOption,
    Priority,
};
use crate::session::LoginRequest;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PASSWORD_MIN: usize = 8;
/// bcrypt only looks at the first 72 bytes
pub const PASSWORD_MAX: usize = 72;
pub const NAME_MAX: usize = 200;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-()\s]{6,20}$").expect("valid mobile regex"));

/// Field name → message; the first error recorded for a field wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn check(&mut self, field: &str, result: Result<(), &'static str>) {
        if let Err(message) = result {
            self.insert(field, message);
        }
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (k, v) in iter {
            errors.insert(k, v);
        }
        errors
    }
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        Err("Email is required")
    } else if !EMAIL_RE.is_match(email) {
        Err("Enter a valid email")
    } else {
        Ok(())
    }
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    let len = password.chars().count();
    if len < PASSWORD_MIN {
        Err("Password must be at least 8 characters")
    } else if len > PASSWORD_MAX {
        Err("Password too long (max 72 chars)")
    } else {
        Ok(())
    }
}

pub fn validate_name(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        Err("This field is required")
    } else if value.chars().count() > NAME_MAX {
        Err("Too long")
    } else {
        Ok(())
    }
}

/// Optional mobile number; blank passes
pub fn validate_mobile(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() || MOBILE_RE.is_match(value) {
        Ok(())
    } else {
        Err("Mobile looks invalid")
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("email", validate_email(&self.email));
        // Only the lower bound is checked at login; old accounts may predate the cap
        if self.password.chars().count() < PASSWORD_MIN {
            errors.insert("password", "Password must be at least 8 characters");
        }
        errors.into_result(|| LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterOrgForm {
    pub organization_name: String,
    pub country_code: String,
    pub admin_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationPayload {
    pub name: String,
    pub country_code: String,
    pub max_users: u32,
    pub max_bookings: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPayload {
    pub admin_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

/// Body of the organisation registration endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterOrgRequest {
    pub organization: OrganizationPayload,
    pub admin: AdminPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterOrgResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl RegisterOrgForm {
    pub const DEFAULT_MAX_USERS: u32 = 50;
    pub const DEFAULT_MAX_BOOKINGS: u32 = 1000;

    /// Form field a backend error key belongs to
    pub fn field_for(server_field: &str) -> &str {
        match server_field {
            "name" | "org_name" | "organization" => "organization_name",
            "admin_email" => "email",
            other => other,
        }
    }

    /// Rekey backend field errors onto this form's fields
    pub fn map_server_errors(errors: &FieldErrors) -> FieldErrors {
        errors
            .iter()
            .map(|(field, message)| (Self::field_for(field).to_string(), message.to_string()))
            .collect()
    }

    pub fn validate(&self) -> Result<RegisterOrgRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("organization_name", validate_name(&self.organization_name));
        errors.check("country_code", validate_name(&self.country_code));
        errors.check("admin_name", validate_name(&self.admin_name));
        errors.check("email", validate_email(&self.email));
        errors.check("mobile", validate_mobile(&self.mobile));
        errors.check("password", validate_password(&self.password));

        errors.into_result(|| RegisterOrgRequest {
            organization: OrganizationPayload {
                name: self.organization_name.trim().to_string(),
                country_code: self.country_code.trim().to_uppercase(),
                max_users: Self::DEFAULT_MAX_USERS,
                max_bookings: Self::DEFAULT_MAX_BOOKINGS,
            },
            admin: AdminPayload {
                admin_name: self.admin_name.trim().to_string(),
                email: self.email.trim().to_string(),
                mobile: self.mobile.trim().to_string(),
                password: self.password.chars().take(PASSWORD_MAX).collect(),
            },
        })
    }
}

/// Whether the form references an existing record or describes a new one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    #[default]
    New,
    Existing,
}

/// Editable state of the enquiry form, kept as raw input strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryFormDraft {
    pub customer_mode: SelectionMode,
    pub cust_id: Option<i64>,
    pub customer_name: String,
    pub customer_mobile: String,
    pub customer_email: String,
    pub package_mode: SelectionMode,
    pub pkg_id: Option<i64>,
    pub package_name: String,
    pub pax_count: String,
    pub lead_source: Option<LeadSource>,
    pub priority: Option<Priority>,
    pub conversion_status: ConversionStatus,
    pub description: String,
}

impl Default for EnquiryFormDraft {
    fn default() -> Self {
        Self {
            customer_mode: SelectionMode::New,
            cust_id: None,
            customer_name: String::new(),
            customer_mobile: String::new(),
            customer_email: String::new(),
            package_mode: SelectionMode::New,
            pkg_id: None,
            package_name: String::new(),
            pax_count: "1".to_string(),
            lead_source: None,
            priority: None,
            conversion_status: ConversionStatus::Pending,
            description: String::new(),
        }
    }
}

impl EnquiryFormDraft {
    /// Seed the form for editing an existing enquiry
    pub fn from_detail(detail: &EnquiryDetail) -> Self {
        let mode = |id: Option<i64>| {
            if id.is_some() {
                SelectionMode::Existing
            } else {
                SelectionMode::New
            }
        };
        Self {
            customer_mode: mode(detail.cust_id),
            cust_id: detail.cust_id,
            customer_name: detail.customer_name.clone(),
            customer_mobile: detail.customer_mobile.clone().unwrap_or_default(),
            customer_email: detail.customer_email.clone().unwrap_or_default(),
            package_mode: mode(detail.pkg_id),
            pkg_id: detail.pkg_id,
            package_name: detail.package_name.clone().unwrap_or_default(),
            pax_count: detail.pax_count.to_string(),
            lead_source: Some(detail.lead_source),
            priority: Some(detail.priority),
            conversion_status: detail.conversion_status,
            description: detail.description.clone().unwrap_or_default(),
        }
    }

    /// Switch between a new and an existing customer, clearing what no
    /// longer applies
    pub fn set_customer_mode(&mut self, mode: SelectionMode) {
        if self.customer_mode == mode {
            return;
        }
        self.customer_mode = mode;
        self.cust_id = None;
        self.customer_name.clear();
        self.customer_mobile.clear();
        self.customer_email.clear();
    }

    pub fn select_customer(&mut self, customer: &CustomerOption) {
        self.customer_mode = SelectionMode::Existing;
        self.cust_id = Some(customer.id);
        self.customer_name.clone_from(&customer.name);
        self.customer_mobile = customer.mobile.clone().unwrap_or_default();
        self.customer_email.clear();
    }

    pub fn set_package_mode(&mut self, mode: SelectionMode) {
        if self.package_mode == mode {
            return;
        }
        self.package_mode = mode;
        self.pkg_id = None;
        self.package_name.clear();
    }

    pub fn select_package(&mut self, package: &PackageOption) {
        self.package_mode = SelectionMode::Existing;
        self.pkg_id = Some(package.id);
        self.package_name.clone_from(&package.name);
    }

    /// Rekey backend field errors onto the form's inputs
    pub fn map_server_errors(errors: &FieldErrors) -> FieldErrors {
        errors
            .iter()
            .map(|(field, message)| {
                let field = match field {
                    "cust_id" | "customer" => "customer_name",
                    "pkg_id" | "package" => "package_name",
                    other => other,
                };
                (field.to_string(), message.to_string())
            })
            .collect()
    }

    pub fn validate(&self) -> Result<EnquiryInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let pax_count = match self.pax_count.trim().parse::<u32>() {
            Ok(0) => {
                errors.insert("pax_count", "Minimum 1 PAX");
                0
            }
            Ok(n) => n,
            Err(_) => {
                errors.insert("pax_count", "Minimum 1 PAX");
                0
            }
        };

        let existing_customer = self.customer_mode == SelectionMode::Existing;
        match (existing_customer, self.cust_id) {
            (true, Some(_)) => {}
            (true, None) => errors.insert("customer_name", "Customer is required"),
            (false, _) => {
                if self.customer_name.trim().is_empty() {
                    errors.insert("customer_name", "Customer is required");
                }
                errors.check("customer_mobile", validate_mobile(&self.customer_mobile));
                if !self.customer_email.trim().is_empty()
                    && !EMAIL_RE.is_match(self.customer_email.trim())
                {
                    errors.insert("customer_email", "Enter a valid email");
                }
            }
        }

        let existing_package = self.package_mode == SelectionMode::Existing;
        match (existing_package, self.pkg_id) {
            (true, Some(_)) => {}
            (true, None) => errors.insert("package_name", "Package is required"),
            (false, _) => {
                if self.package_name.trim().is_empty() {
                    errors.insert("package_name", "Package is required");
                }
            }
        }

        if self.lead_source.is_none() {
            errors.insert("lead_source", "Select a lead source");
        }
        if self.priority.is_none() {
            errors.insert("priority", "Select a priority");
        }

        let (Some(lead_source), Some(priority)) = (self.lead_source, self.priority) else {
            return Err(errors);
        };

        errors.into_result(|| {
            let (customer_name, customer_mobile, customer_email) = if existing_customer {
                (None, None, None)
            } else {
                (
                    optional(&self.customer_name),
                    optional(&self.customer_mobile),
                    optional(&self.customer_email),
                )
            };
            EnquiryInput {
                cust_id: if existing_customer { self.cust_id } else { None },
                customer_name,
                customer_mobile,
                customer_email,
                pkg_id: if existing_package { self.pkg_id } else { None },
                package_name: if existing_package {
                    None
                } else {
                    optional(&self.package_name)
                },
                pax_count,
                lead_source,
                priority,
                conversion_status: self.conversion_status,
                description: optional(&self.description),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EnquiryFormDraft {
        EnquiryFormDraft {
            customer_name: "Aadil Hussain".into(),
            package_name: "Kashmir Deluxe".into(),
            pax_count: "3".into(),
            lead_source: Some(LeadSource::Referral),
            priority: Some(Priority::Warm),
            ..EnquiryFormDraft::default()
        }
    }

    #[test]
    fn login_requires_valid_email_and_password() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters"));

        let errors = LoginForm {
            email: "not-an-email".into(),
            password: "longenough".into(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("email"), Some("Enter a valid email"));
        assert_eq!(errors.len(), 1);

        let req = LoginForm {
            email: " ops@agency.in ".into(),
            password: "longenough".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(req.email, "ops@agency.in");
    }

    #[test]
    fn register_builds_backend_payload() {
        let form = RegisterOrgForm {
            organization_name: "Sunrise Travels".into(),
            country_code: "in".into(),
            admin_name: "Priya".into(),
            email: "priya@sunrise.in".into(),
            mobile: String::new(),
            password: "correct horse".into(),
        };
        let req = form.validate().unwrap();
        assert_eq!(req.organization.max_users, 50);
        assert_eq!(req.organization.max_bookings, 1000);
        assert_eq!(req.organization.country_code, "IN");
        assert_eq!(req.admin.mobile, "");
    }

    #[test]
    fn register_reports_each_field() {
        let form = RegisterOrgForm {
            organization_name: "x".repeat(201),
            mobile: "abc".into(),
            password: "p".repeat(73),
            ..RegisterOrgForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("organization_name"), Some("Too long"));
        assert_eq!(errors.get("country_code"), Some("This field is required"));
        assert_eq!(errors.get("admin_name"), Some("This field is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("mobile"), Some("Mobile looks invalid"));
        assert_eq!(errors.get("password"), Some("Password too long (max 72 chars)"));
    }

    #[test]
    fn mobile_format() {
        assert!(validate_mobile("").is_ok());
        assert!(validate_mobile("+91 (982) 000-1111").is_ok());
        assert!(validate_mobile("12345").is_err());
        assert!(validate_mobile("98x2000111").is_err());
    }

    #[test]
    fn new_customer_and_package_pass() {
        let input = draft().validate().unwrap();
        assert_eq!(input.customer_name.as_deref(), Some("Aadil Hussain"));
        assert_eq!(input.cust_id, None);
        assert_eq!(input.pax_count, 3);
        assert_eq!(input.conversion_status, ConversionStatus::Pending);
        assert_eq!(input.description, None);
    }

    #[test]
    fn pax_must_be_positive() {
        for pax in ["0", "", "two"] {
            let d = EnquiryFormDraft {
                pax_count: pax.into(),
                ..draft()
            };
            assert_eq!(d.validate().unwrap_err().get("pax_count"), Some("Minimum 1 PAX"));
        }
    }

    #[test]
    fn customer_and_package_are_required() {
        let d = EnquiryFormDraft {
            customer_name: "   ".into(),
            package_name: String::new(),
            ..draft()
        };
        let errors = d.validate().unwrap_err();
        assert_eq!(errors.get("customer_name"), Some("Customer is required"));
        assert_eq!(errors.get("package_name"), Some("Package is required"));
    }

    #[test]
    fn existing_customer_sends_only_the_id() {
        let mut d = draft();
        d.select_customer(&CustomerOption {
            id: 2,
            name: "Aadil Hussain".into(),
            mobile: Some("8888888888".into()),
        });
        let input = d.validate().unwrap();
        assert_eq!(input.cust_id, Some(2));
        assert_eq!(input.customer_name, None);
        assert_eq!(input.customer_mobile, None);
    }

    #[test]
    fn switching_mode_clears_conflicting_fields() {
        let mut d = draft();
        d.select_package(&PackageOption { id: 9, name: "Goa".into() });
        d.set_package_mode(SelectionMode::New);
        assert_eq!(d.pkg_id, None);
        assert!(d.package_name.is_empty());

        d.set_customer_mode(SelectionMode::Existing);
        assert!(d.customer_name.is_empty());
        let errors = d.validate().unwrap_err();
        assert_eq!(errors.get("customer_name"), Some("Customer is required"));
    }

    #[test]
    fn selects_are_required() {
        let d = EnquiryFormDraft {
            lead_source: None,
            priority: None,
            ..draft()
        };
        let errors = d.validate().unwrap_err();
        assert_eq!(errors.get("lead_source"), Some("Select a lead source"));
        assert_eq!(errors.get("priority"), Some("Select a priority"));
    }

    #[test]
    fn optional_contact_details_are_checked() {
        let d = EnquiryFormDraft {
            customer_email: "nope".into(),
            customer_mobile: "12".into(),
            ..draft()
        };
        let errors = d.validate().unwrap_err();
        assert_eq!(errors.get("customer_email"), Some("Enter a valid email"));
        assert_eq!(errors.get("customer_mobile"), Some("Mobile looks invalid"));
    }

    #[test]
    fn draft_round_trips_from_detail() {
        let detail = EnquiryDetail {
            id: 5,
            cust_id: Some(1),
            customer_name: "John Doe".into(),
            customer_mobile: Some("9999999999".into()),
            customer_email: None,
            pkg_id: None,
            package_name: Some("Andaman Escape".into()),
            pax_count: 2,
            lead_source: LeadSource::Website,
            priority: Priority::Hot,
            conversion_status: ConversionStatus::Converted,
            description: Some("Honeymoon".into()),
            agent_name: None,
            created_at: "2024-01-01".into(),
        };
        let input = EnquiryFormDraft::from_detail(&detail).validate().unwrap();
        assert_eq!(input.cust_id, Some(1));
        assert_eq!(input.package_name.as_deref(), Some("Andaman Escape"));
        assert_eq!(input.conversion_status, ConversionStatus::Converted);
        assert_eq!(input.description.as_deref(), Some("Honeymoon"));
    }

    #[test]
    fn first_error_per_field_wins() {
        let errors: FieldErrors = [("email", "first"), ("email", "second")].into_iter().collect();
        assert_eq!(errors.get("email"), Some("first"));
    }

    #[test]
    fn register_server_errors_are_rekeyed() {
        let server: FieldErrors = [
            ("name".to_string(), "Organization already exists".to_string()),
            ("mobile".to_string(), "Invalid mobile".to_string()),
        ]
        .into_iter()
        .collect();
        let mapped = RegisterOrgForm::map_server_errors(&server);
        assert_eq!(
            mapped.get("organization_name"),
            Some("Organization already exists")
        );
        assert_eq!(mapped.get("mobile"), Some("Invalid mobile"));
    }

    #[test]
    fn enquiry_server_errors_land_on_inputs() {
        let server: FieldErrors = [("cust_id", "Customer not found"), ("pax_count", "Too many")]
            .into_iter()
            .collect();
        let mut mapped = EnquiryFormDraft::map_server_errors(&server);
        assert_eq!(mapped.get("customer_name"), Some("Customer not found"));
        assert_eq!(mapped.get("pax_count"), Some("Too many"));

        mapped.remove("pax_count");
        assert_eq!(mapped.len(), 1);
    }
}
