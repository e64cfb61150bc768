//! DS005 major event endpoints.

use crate::{OpenDartClient, PeriodQuery};
use opendart_core::{BonusIssue, CapitalChange, ConvertibleBond, MergerDecision, SplitDecision};
use opendart_error::OpendartResult;
use opendart_interface::Operation;
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Board decisions filed as major event reports.
#[derive(Debug, Clone, Copy)]
pub struct MajorEventService<'a> {
    client: &'a OpenDartClient,
}

impl<'a> MajorEventService<'a> {
    pub(crate) fn new(client: &'a OpenDartClient) -> Self {
        Self { client }
    }

    async fn fetch<T>(&self, operation: Operation, query: &PeriodQuery) -> OpendartResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.client
            .get_list(operation.path(), &query.to_query())
            .await
    }

    /// Paid-in capital increase decisions.
    #[instrument(skip(self))]
    pub async fn get_paid_capital_increase(
        &self,
        query: &PeriodQuery,
    ) -> OpendartResult<Vec<CapitalChange>> {
        self.fetch(Operation::MajorEventGetPaidCapitalIncrease, query)
            .await
    }

    /// Bonus issue decisions.
    #[instrument(skip(self))]
    pub async fn get_bonus_issue(&self, query: &PeriodQuery) -> OpendartResult<Vec<BonusIssue>> {
        self.fetch(Operation::MajorEventGetBonusIssue, query).await
    }

    /// Capital reduction decisions.
    #[instrument(skip(self))]
    pub async fn get_capital_reduction(
        &self,
        query: &PeriodQuery,
    ) -> OpendartResult<Vec<CapitalChange>> {
        self.fetch(Operation::MajorEventGetCapitalReduction, query)
            .await
    }

    /// Convertible bond issuance decisions.
    #[instrument(skip(self))]
    pub async fn get_convertible_bond(
        &self,
        query: &PeriodQuery,
    ) -> OpendartResult<Vec<ConvertibleBond>> {
        self.fetch(Operation::MajorEventGetConvertibleBond, query)
            .await
    }

    /// Merger decisions.
    #[instrument(skip(self))]
    pub async fn get_merger_decision(
        &self,
        query: &PeriodQuery,
    ) -> OpendartResult<Vec<MergerDecision>> {
        self.fetch(Operation::MajorEventGetMergerDecision, query)
            .await
    }

    /// Split decisions.
    #[instrument(skip(self))]
    pub async fn get_split_decision(
        &self,
        query: &PeriodQuery,
    ) -> OpendartResult<Vec<SplitDecision>> {
        self.fetch(Operation::MajorEventGetSplitDecision, query)
            .await
    }
}
