//! CRM enquiry service

use erp_core::enquiry::{CustomerOption, ImportSummary, PackageOption};
use erp_core::{EnquiryDetail, EnquiryInput, EnquiryListQuery, EnquiryListResponse, ExportFormat};
use erp_frontend_common::api_client;
use erp_frontend_common::services::with_auth_error_handling;
use erp_http::{ClientError, WriteAck};

/// Result of deleting several enquiries one by one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkDeleteOutcome {
    pub deleted: Vec<i64>,
    pub failed: Vec<i64>,
}

impl BulkDeleteOutcome {
    pub fn message(&self) -> String {
        match (self.deleted.len(), self.failed.len()) {
            (n, 0) => format!("Deleted {n} enquiries"),
            (0, f) => format!("Failed to delete {f} enquiries"),
            (n, f) => format!("Deleted {n} enquiries, {f} could not be deleted"),
        }
    }
}

#[derive(Clone, Default)]
pub struct EnquiryService;

impl EnquiryService {
    pub const fn new() -> Self {
        Self
    }

    pub async fn list(&self, query: &EnquiryListQuery) -> Result<EnquiryListResponse, ClientError> {
        let client = api_client()?;
        with_auth_error_handling(client.list_enquiries(query)).await
    }

    pub async fn get(&self, id: i64) -> Result<EnquiryDetail, ClientError> {
        let client = api_client()?;
        with_auth_error_handling(client.get_enquiry(id)).await
    }

    pub async fn create(&self, input: &EnquiryInput) -> Result<WriteAck, ClientError> {
        let client = api_client()?;
        with_auth_error_handling(client.create_enquiry(input)).await
    }

    pub async fn update(&self, id: i64, input: &EnquiryInput) -> Result<WriteAck, ClientError> {
        let client = api_client()?;
        with_auth_error_handling(client.update_enquiry(id, input)).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let client = api_client()?;
        with_auth_error_handling(client.delete_enquiry(id)).await
    }

    /// Delete sequentially; stops early only when the session is gone
    pub async fn delete_many(&self, ids: &[i64]) -> Result<BulkDeleteOutcome, ClientError> {
        let client = api_client()?;
        let mut outcome = BulkDeleteOutcome::default();
        for &id in ids {
            match with_auth_error_handling(client.delete_enquiry(id)).await {
                Ok(()) => outcome.deleted.push(id),
                Err(e) if e.is_auth_expired() => return Err(e),
                Err(e) => {
                    tracing::warn!(enquiry_id = id, error = %e, "Bulk delete item failed");
                    outcome.failed.push(id);
                }
            }
        }
        Ok(outcome)
    }

    pub fn export_url(
        &self,
        format: ExportFormat,
        query: &EnquiryListQuery,
    ) -> Result<String, ClientError> {
        Ok(api_client()?.export_url(format, query))
    }

    pub async fn import(
        &self,
        file_name: String,
        bytes: Vec<u8>,
        mime: &str,
    ) -> Result<ImportSummary, ClientError> {
        let client = api_client()?;
        with_auth_error_handling(client.import_enquiries(file_name, bytes, mime)).await
    }

    pub async fn search_customers(&self, term: &str) -> Result<Vec<CustomerOption>, ClientError> {
        let client = api_client()?;
        with_auth_error_handling(client.search_customers(term)).await
    }

    pub async fn search_packages(&self, term: &str) -> Result<Vec<PackageOption>, ClientError> {
        let client = api_client()?;
        with_auth_error_handling(client.search_packages(term)).await
    }
}
