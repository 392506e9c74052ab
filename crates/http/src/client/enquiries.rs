//! CRM enquiry API client methods

use super::{ClientError, ErpClient};
use crate::types::{DataEnvelope, WriteAck};
use erp_core::enquiry::{CustomerOption, ImportSummary, PackageOption};
use erp_core::query::encode_pairs;
use erp_core::{EnquiryDetail, EnquiryInput, EnquiryListQuery, EnquiryListResponse, ExportFormat};
use reqwest::multipart::{Form, Part};

const ENQUIRIES: &str = "/api/v1/crm/enquiries";

impl ErpClient {
    /// One page of enquiries matching the query
    pub async fn list_enquiries(
        &self,
        query: &EnquiryListQuery,
    ) -> Result<EnquiryListResponse, ClientError> {
        let req = self
            .request(reqwest::Method::GET, ENQUIRIES)
            .query(&query.api_pairs());
        self.execute(req).await
    }

    pub async fn get_enquiry(&self, id: i64) -> Result<EnquiryDetail, ClientError> {
        let req = self.request(reqwest::Method::GET, &format!("{ENQUIRIES}/{id}"));
        self.execute(req).await
    }

    pub async fn create_enquiry(&self, input: &EnquiryInput) -> Result<WriteAck, ClientError> {
        let req = self.request(reqwest::Method::POST, ENQUIRIES).json(input);
        let ack = self.execute_write(req).await?;
        tracing::info!(enquiry_id = ?ack.id, "Enquiry created");
        Ok(ack)
    }

    pub async fn update_enquiry(
        &self,
        id: i64,
        input: &EnquiryInput,
    ) -> Result<WriteAck, ClientError> {
        let req = self
            .request(reqwest::Method::PUT, &format!("{ENQUIRIES}/{id}"))
            .json(input);
        let ack = self.execute_write(req).await?;
        tracing::info!(enquiry_id = id, "Enquiry updated");
        Ok(ack)
    }

    pub async fn delete_enquiry(&self, id: i64) -> Result<(), ClientError> {
        let req = self.request(reqwest::Method::DELETE, &format!("{ENQUIRIES}/{id}"));
        self.execute_empty(req).await?;
        tracing::info!(enquiry_id = id, "Enquiry deleted");
        Ok(())
    }

    /// Download URL for the current search and filters.
    ///
    /// Paging is left out; the export covers every matching row.
    pub fn export_url(&self, format: ExportFormat, query: &EnquiryListQuery) -> String {
        let mut pairs = vec![("format", format.as_param().to_string())];
        pairs.extend(query.filter_pairs());
        format!("{}?{}", self.url(&format!("{ENQUIRIES}/export")), encode_pairs(&pairs))
    }

    /// Upload a spreadsheet of enquiries
    pub async fn import_enquiries(
        &self,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
        mime: &str,
    ) -> Result<ImportSummary, ClientError> {
        let part = Part::bytes(bytes).file_name(file_name.into()).mime_str(mime)?;
        let form = Form::new().part("file", part);
        let req = self
            .request(reqwest::Method::POST, &format!("{ENQUIRIES}/import"))
            .multipart(form);
        let summary: ImportSummary = self.execute(req).await?;
        tracing::info!(
            imported = summary.imported,
            failed = summary.failed,
            "Enquiry import finished"
        );
        Ok(summary)
    }

    /// Existing customers whose name or mobile matches `term`
    pub async fn search_customers(&self, term: &str) -> Result<Vec<CustomerOption>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/v1/crm/customers")
            .query(&[("search", term.trim())]);
        let envelope: DataEnvelope<CustomerOption> = self.execute(req).await?;
        Ok(envelope.data)
    }

    /// Existing packages whose name matches `term`
    pub async fn search_packages(&self, term: &str) -> Result<Vec<PackageOption>, ClientError> {
        let req = self
            .request(reqwest::Method::GET, "/api/v1/crm/packages")
            .query(&[("search", term.trim())]);
        let envelope: DataEnvelope<PackageOption> = self.execute(req).await?;
        Ok(envelope.data)
    }
}
