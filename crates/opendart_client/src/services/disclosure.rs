//! DS001 disclosure endpoints.

use crate::{DisclosureSearch, OpenDartClient};
use opendart_core::{Company, Disclosure};
use opendart_error::OpendartResult;
use opendart_interface::Operation;
use tracing::instrument;

/// Disclosure search, company overview and file downloads.
#[derive(Debug, Clone, Copy)]
pub struct DisclosureService<'a> {
    client: &'a OpenDartClient,
}

impl<'a> DisclosureService<'a> {
    pub(crate) fn new(client: &'a OpenDartClient) -> Self {
        Self { client }
    }

    /// Search filings.
    #[instrument(skip(self))]
    pub async fn search(&self, search: &DisclosureSearch) -> OpendartResult<Vec<Disclosure>> {
        self.client
            .get_list(Operation::DisclosureSearch.path(), &search.to_query())
            .await
    }

    /// Company overview for one corporation code.
    #[instrument(skip(self))]
    pub async fn get_company(&self, corp_code: &str) -> OpendartResult<Company> {
        self.client
            .get_single(
                Operation::DisclosureGetCompany.path(),
                &[("corp_code", corp_code.to_string())],
            )
            .await
    }

    /// Original filing as a ZIP archive.
    #[instrument(skip(self))]
    pub async fn download_document(&self, rcept_no: &str) -> OpendartResult<Vec<u8>> {
        self.client
            .get_bytes(
                Operation::DisclosureDownloadDocument.path(),
                &[("rcept_no", rcept_no.to_string())],
            )
            .await
    }

    /// The full corporation code table as a ZIP archive.
    #[instrument(skip(self))]
    pub async fn download_corp_codes(&self) -> OpendartResult<Vec<u8>> {
        self.client
            .get_bytes(Operation::DisclosureDownloadCorpCodes.path(), &[])
            .await
    }
}
