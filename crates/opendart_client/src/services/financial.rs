//! DS003 financial statement endpoints.

use crate::{FinancialQuery, OpenDartClient, ReportQuery};
use opendart_core::{FinancialAccount, FinancialIndicator, XbrlTaxonomy};
use opendart_error::OpendartResult;
use opendart_interface::Operation;
use tracing::instrument;

/// Financial statements, XBRL and indicators.
#[derive(Debug, Clone, Copy)]
pub struct FinancialService<'a> {
    client: &'a OpenDartClient,
}

impl<'a> FinancialService<'a> {
    pub(crate) fn new(client: &'a OpenDartClient) -> Self {
        Self { client }
    }

    /// Key accounts for one company.
    #[instrument(skip(self))]
    pub async fn get_single_account(
        &self,
        query: &FinancialQuery,
    ) -> OpendartResult<Vec<FinancialAccount>> {
        self.client
            .get_list(Operation::FinancialGetSingleAccount.path(), &query.to_query())
            .await
    }

    /// Key accounts for several companies; `corp_code` may be comma separated.
    #[instrument(skip(self))]
    pub async fn get_multi_account(
        &self,
        query: &FinancialQuery,
    ) -> OpendartResult<Vec<FinancialAccount>> {
        self.client
            .get_list(Operation::FinancialGetMultiAccount.path(), &query.to_query())
            .await
    }

    /// Every account of the full statements.
    #[instrument(skip(self))]
    pub async fn get_full_statements(
        &self,
        query: &FinancialQuery,
    ) -> OpendartResult<Vec<FinancialAccount>> {
        self.client
            .get_list(Operation::FinancialGetFullStatements.path(), &query.to_query())
            .await
    }

    /// XBRL instance document as a ZIP archive.
    #[instrument(skip(self))]
    pub async fn download_xbrl(&self, rcept_no: &str, reprt_code: &str) -> OpendartResult<Vec<u8>> {
        self.client
            .get_bytes(
                Operation::FinancialDownloadXbrl.path(),
                &[
                    ("rcept_no", rcept_no.to_string()),
                    ("reprt_code", reprt_code.to_string()),
                ],
            )
            .await
    }

    /// Standard account taxonomy for one statement division.
    #[instrument(skip(self))]
    pub async fn get_xbrl_taxonomy(&self, sj_div: &str) -> OpendartResult<Vec<XbrlTaxonomy>> {
        self.client
            .get_list(
                Operation::FinancialGetXbrlTaxonomy.path(),
                &[("sj_div", sj_div.to_string())],
            )
            .await
    }

    /// Profitability, stability, growth and activity indicators.
    #[instrument(skip(self))]
    pub async fn get_indicators(
        &self,
        query: &ReportQuery,
    ) -> OpendartResult<Vec<FinancialIndicator>> {
        self.client
            .get_list(Operation::FinancialGetIndicators.path(), &query.to_query())
            .await
    }
}
