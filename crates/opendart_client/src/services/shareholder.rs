//! DS004 shareholding endpoints.

use crate::OpenDartClient;
use opendart_core::{ExecutiveStock, MajorStock};
use opendart_error::OpendartResult;
use opendart_interface::Operation;
use tracing::instrument;

/// Large holding and insider ownership reports.
#[derive(Debug, Clone, Copy)]
pub struct ShareholderService<'a> {
    client: &'a OpenDartClient,
}

impl<'a> ShareholderService<'a> {
    pub(crate) fn new(client: &'a OpenDartClient) -> Self {
        Self { client }
    }

    /// Large holding (5%) reports.
    #[instrument(skip(self))]
    pub async fn get_major_stock(&self, corp_code: &str) -> OpendartResult<Vec<MajorStock>> {
        self.client
            .get_list(
                Operation::ShareholderGetMajorStock.path(),
                &[("corp_code", corp_code.to_string())],
            )
            .await
    }

    /// Executive and major shareholder ownership reports.
    #[instrument(skip(self))]
    pub async fn get_executive_stock(&self, corp_code: &str) -> OpendartResult<Vec<ExecutiveStock>> {
        self.client
            .get_list(
                Operation::ShareholderGetExecutiveStock.path(),
                &[("corp_code", corp_code.to_string())],
            )
            .await
    }
}
