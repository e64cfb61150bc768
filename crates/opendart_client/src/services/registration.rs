//! DS006 securities registration endpoints.

use crate::{OpenDartClient, PeriodQuery};
use opendart_core::{DebtSecurities, EquitySecurities, MergerRegistration, SplitRegistration};
use opendart_error::OpendartResult;
use opendart_interface::Operation;
use tracing::instrument;

/// Key information from securities registration statements.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationService<'a> {
    client: &'a OpenDartClient,
}

impl<'a> RegistrationService<'a> {
    pub(crate) fn new(client: &'a OpenDartClient) -> Self {
        Self { client }
    }

    /// Equity securities registrations.
    #[instrument(skip(self))]
    pub async fn get_equity_securities(
        &self,
        query: &PeriodQuery,
    ) -> OpendartResult<Vec<EquitySecurities>> {
        self.client
            .get_list(Operation::RegistrationGetEquitySecurities.path(), &query.to_query())
            .await
    }

    /// Debt securities registrations.
    #[instrument(skip(self))]
    pub async fn get_debt_securities(
        &self,
        query: &PeriodQuery,
    ) -> OpendartResult<Vec<DebtSecurities>> {
        self.client
            .get_list(Operation::RegistrationGetDebtSecurities.path(), &query.to_query())
            .await
    }

    /// Merger registrations.
    #[instrument(skip(self))]
    pub async fn get_merger_registration(
        &self,
        query: &PeriodQuery,
    ) -> OpendartResult<Vec<MergerRegistration>> {
        self.client
            .get_list(Operation::RegistrationGetMergerRegistration.path(), &query.to_query())
            .await
    }

    /// Split registrations.
    #[instrument(skip(self))]
    pub async fn get_split_registration(
        &self,
        query: &PeriodQuery,
    ) -> OpendartResult<Vec<SplitRegistration>> {
        self.client
            .get_list(Operation::RegistrationGetSplitRegistration.path(), &query.to_query())
            .await
    }
}
