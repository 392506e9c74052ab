//! CRM enquiry wire types and display helpers

use crate::UnknownVariant;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $wire:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Value sent to and received from the backend
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Human readable label
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Sales temperature of an enquiry
    Priority, "priority" {
        Hot => "Hot", "Hot";
        Warm => "Warm", "Warm";
        Cold => "Cold", "Cold";
    }
}

wire_enum! {
    /// Outcome of an enquiry
    ConversionStatus, "conversion status" {
        Lost => "Lost", "Lost";
        Pending => "Pending", "Pending";
        Converted => "Converted", "Converted";
    }
}

wire_enum! {
    /// Channel the enquiry came in through
    LeadSource, "lead source" {
        Website => "Website", "Website";
        Agent => "Agent", "Agent";
        WalkIn => "WalkIn", "Walk-In";
        Referral => "Referral", "Referral";
        Corporate => "Corporate", "Corporate";
        Others => "Others", "Others";
    }
}

impl Default for ConversionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Colour family used for status chips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipTone {
    Error,
    Warning,
    Success,
    Neutral,
}

impl ChipTone {
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Error => "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-400",
            Self::Warning => {
                "bg-yellow-100 text-yellow-800 dark:bg-yellow-900/30 dark:text-yellow-400"
            }
            Self::Success => {
                "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400"
            }
            Self::Neutral => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300",
        }
    }
}

impl ConversionStatus {
    pub const fn tone(self) -> ChipTone {
        match self {
            Self::Lost => ChipTone::Error,
            Self::Pending => ChipTone::Warning,
            Self::Converted => ChipTone::Success,
        }
    }
}

impl Priority {
    pub const fn tone(self) -> ChipTone {
        match self {
            Self::Hot => ChipTone::Error,
            Self::Warm => ChipTone::Warning,
            Self::Cold => ChipTone::Success,
        }
    }
}

/// Row of the enquiry list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnquiryListItem {
    pub id: i64,
    pub customer_name: String,
    #[serde(default)]
    pub customer_mobile: Option<String>,
    #[serde(default)]
    pub package_name: Option<String>,
    pub pax_count: u32,
    pub priority: Priority,
    pub conversion_status: ConversionStatus,
    #[serde(default)]
    pub agent_name: Option<String>,
    pub created_at: String,
}

/// Single enquiry as returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnquiryDetail {
    pub id: i64,
    #[serde(default)]
    pub cust_id: Option<i64>,
    pub customer_name: String,
    #[serde(default)]
    pub customer_mobile: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub pkg_id: Option<i64>,
    #[serde(default)]
    pub package_name: Option<String>,
    pub pax_count: u32,
    pub lead_source: LeadSource,
    pub priority: Priority,
    pub conversion_status: ConversionStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub agent_name: Option<String>,
    pub created_at: String,
}

/// Validated create/update payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cust_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkg_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    pub pax_count: u32,
    pub lead_source: LeadSource,
    pub priority: Priority,
    pub conversion_status: ConversionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Pagination {
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            0
        } else {
            self.total.div_ceil(u64::from(self.page_size))
        }
    }

    /// 1-based index range shown in the footer, e.g. `11–20 of 42`
    pub fn shown_range(&self) -> Option<(u64, u64)> {
        if self.total == 0 || self.page == 0 {
            return None;
        }
        let size = u64::from(self.page_size);
        let start = u64::from(self.page - 1) * size + 1;
        if start > self.total {
            return None;
        }
        Some((start, (start + size - 1).min(self.total)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnquiryListResponse {
    pub data: Vec<EnquiryListItem>,
    pub pagination: Pagination,
}

/// Existing customer offered by the customer selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOption {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub mobile: Option<String>,
}

/// Existing package offered by the package selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageOption {
    pub id: i64,
    pub name: String,
}

/// File formats offered by the export menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Csv, Self::Excel, Self::Pdf];

    /// Value of the `format` query parameter
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Excel => "xlsx",
            Self::Pdf => "pdf",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Csv => "Export CSV",
            Self::Excel => "Export Excel",
            Self::Pdf => "Export PDF",
        }
    }
}

/// Result of a bulk import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSummary {
    pub imported: u32,
    pub failed: u32,
    pub errors: Vec<String>,
}

impl ImportSummary {
    pub fn describe(&self) -> String {
        if self.failed == 0 {
            format!("Imported {} enquiries", self.imported)
        } else {
            format!(
                "Imported {} enquiries, {} rows failed",
                self.imported, self.failed
            )
        }
    }
}

/// How a column's cells are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    Text,
    Chip,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnquiryColumn {
    pub id: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub align: ColumnAlign,
    pub format: ColumnFormat,
    pub min_width: u16,
}

const fn column(id: &'static str, label: &'static str, min_width: u16) -> EnquiryColumn {
    EnquiryColumn {
        id,
        label,
        sortable: true,
        align: ColumnAlign::Left,
        format: ColumnFormat::Text,
        min_width,
    }
}

/// Columns of the enquiry table, in display order
pub const ENQUIRY_COLUMNS: [EnquiryColumn; 9] = [
    column("id", "Enquiry", 90),
    column("customer_name", "Customer", 200),
    column("customer_mobile", "Mobile", 200),
    column("package_name", "Package", 220),
    EnquiryColumn {
        align: ColumnAlign::Center,
        ..column("pax_count", "PAX", 80)
    },
    EnquiryColumn {
        format: ColumnFormat::Chip,
        ..column("priority", "Priority", 110)
    },
    EnquiryColumn {
        format: ColumnFormat::Chip,
        ..column("conversion_status", "Conversion", 120)
    },
    column("agent_name", "Agent", 160),
    EnquiryColumn {
        format: ColumnFormat::Date,
        ..column("created_at", "Created On", 140)
    },
];

/// Rendered content of one table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Chip { label: &'static str, tone: ChipTone },
}

impl EnquiryListItem {
    pub fn cell(&self, column: &EnquiryColumn) -> CellValue {
        let text = |value: Option<&str>| {
            CellValue::Text(
                value
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or("-")
                    .to_string(),
            )
        };
        match column.id {
            "id" => CellValue::Text(format!("#{}", self.id)),
            "customer_name" => text(Some(&self.customer_name)),
            "customer_mobile" => text(self.customer_mobile.as_deref()),
            "package_name" => text(self.package_name.as_deref()),
            "pax_count" => CellValue::Text(self.pax_count.to_string()),
            "priority" => CellValue::Chip {
                label: self.priority.label(),
                tone: self.priority.tone(),
            },
            "conversion_status" => CellValue::Chip {
                label: self.conversion_status.label(),
                tone: self.conversion_status.tone(),
            },
            "agent_name" => text(self.agent_name.as_deref()),
            "created_at" => CellValue::Text(format_created_at(&self.created_at)),
            _ => text(None),
        }
    }
}

/// Render a backend timestamp as a calendar date.
///
/// Accepts RFC 3339, naive ISO datetimes and plain dates; anything else is
/// shown as received.
pub fn format_created_at(raw: &str) -> String {
    const OUT: &str = "%Y-%m-%d";
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(OUT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(OUT).to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, OUT) {
        return date.format(OUT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_response_parses_backend_shape() {
        let body = json!({
            "data": [{
                "id": 41,
                "customer_name": "John Doe",
                "customer_mobile": "9999999999",
                "package_name": "Kerala Backwaters",
                "pax_count": 4,
                "priority": "Hot",
                "conversion_status": "Pending",
                "agent_name": null,
                "created_at": "2024-11-02T09:15:00Z"
            }],
            "pagination": { "page": 2, "page_size": 10, "total": 11 }
        });
        let res: EnquiryListResponse = serde_json::from_value(body).unwrap();
        assert_eq!(res.data[0].priority, Priority::Hot);
        assert_eq!(res.data[0].agent_name, None);
        assert_eq!(res.pagination.total_pages(), 2);
        assert_eq!(res.pagination.shown_range(), Some((11, 11)));
    }

    #[test]
    fn lead_source_uses_wire_names() {
        assert_eq!(LeadSource::WalkIn.as_str(), "WalkIn");
        assert_eq!(LeadSource::WalkIn.label(), "Walk-In");
        assert_eq!("WalkIn".parse::<LeadSource>(), Ok(LeadSource::WalkIn));
        assert!("Walk-In".parse::<LeadSource>().is_err());
        assert_eq!(
            serde_json::to_value(LeadSource::WalkIn).unwrap(),
            json!("WalkIn")
        );
    }

    #[test]
    fn status_tones() {
        assert_eq!(ConversionStatus::Lost.tone(), ChipTone::Error);
        assert_eq!(ConversionStatus::Pending.tone(), ChipTone::Warning);
        assert_eq!(ConversionStatus::Converted.tone(), ChipTone::Success);
        assert_eq!(Priority::Cold.tone(), ChipTone::Success);
    }

    #[test]
    fn input_omits_absent_fields() {
        let input = EnquiryInput {
            cust_id: Some(2),
            customer_name: None,
            customer_mobile: None,
            customer_email: None,
            pkg_id: None,
            package_name: Some("Goa".into()),
            pax_count: 2,
            lead_source: LeadSource::Website,
            priority: Priority::Warm,
            conversion_status: ConversionStatus::Pending,
            description: None,
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({
                "cust_id": 2,
                "package_name": "Goa",
                "pax_count": 2,
                "lead_source": "Website",
                "priority": "Warm",
                "conversion_status": "Pending"
            })
        );
    }

    #[test]
    fn empty_pagination() {
        let p = Pagination { page: 1, page_size: 10, total: 0 };
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.shown_range(), None);
    }

    #[test]
    fn created_at_formats() {
        assert_eq!(format_created_at("2024-03-05T10:00:00+05:30"), "2024-03-05");
        assert_eq!(format_created_at("2024-03-05T10:00:00.123456"), "2024-03-05");
        assert_eq!(format_created_at("2024-03-05 10:00:00"), "2024-03-05");
        assert_eq!(format_created_at("2024-03-05"), "2024-03-05");
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }

    #[test]
    fn columns_cover_list_fields() {
        let ids: Vec<_> = ENQUIRY_COLUMNS.iter().map(|c| c.id).collect();
        assert_eq!(ids.first(), Some(&"id"));
        assert_eq!(ids.last(), Some(&"created_at"));
        assert_eq!(ENQUIRY_COLUMNS[4].align, ColumnAlign::Center);
    }

    #[test]
    fn import_summary_message() {
        let ok = ImportSummary { imported: 3, failed: 0, errors: vec![] };
        assert_eq!(ok.describe(), "Imported 3 enquiries");
        let partial: ImportSummary = serde_json::from_value(json!({ "imported": 3, "failed": 1 })).unwrap();
        assert_eq!(partial.describe(), "Imported 3 enquiries, 1 rows failed");
    }

    #[test]
    fn cells_follow_column_format() {
        let item = EnquiryListItem {
            id: 7,
            customer_name: "Meera Nair".into(),
            customer_mobile: None,
            package_name: Some("  ".into()),
            pax_count: 2,
            priority: Priority::Hot,
            conversion_status: ConversionStatus::Converted,
            agent_name: Some("Asha".into()),
            created_at: "2024-05-01T08:00:00Z".into(),
        };
        let by_id = |id: &str| {
            let column = ENQUIRY_COLUMNS.iter().find(|c| c.id == id).unwrap();
            item.cell(column)
        };
        assert_eq!(by_id("id"), CellValue::Text("#7".into()));
        assert_eq!(by_id("customer_mobile"), CellValue::Text("-".into()));
        assert_eq!(by_id("package_name"), CellValue::Text("-".into()));
        assert_eq!(by_id("created_at"), CellValue::Text("2024-05-01".into()));
        assert_eq!(
            by_id("conversion_status"),
            CellValue::Chip {
                label: "Converted",
                tone: ChipTone::Success
            }
        );
    }
}
