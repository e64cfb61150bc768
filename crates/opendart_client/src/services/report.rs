//! DS002 periodic report endpoints.

use crate::{OpenDartClient, ReportQuery};
use opendart_core::{
    DirectorCompensation, DividendInfo, Employee, Executive, IndividualCompensation,
    LargestShareholder, StockChange, TreasuryStock,
};
use opendart_error::OpendartResult;
use opendart_interface::Operation;
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Key sections of annual and quarterly reports.
#[derive(Debug, Clone, Copy)]
pub struct ReportService<'a> {
    client: &'a OpenDartClient,
}

impl<'a> ReportService<'a> {
    pub(crate) fn new(client: &'a OpenDartClient) -> Self {
        Self { client }
    }

    async fn fetch<T>(&self, operation: Operation, query: &ReportQuery) -> OpendartResult<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.client
            .get_list(operation.path(), &query.to_query())
            .await
    }

    /// Capital increase and reduction history.
    #[instrument(skip(self))]
    pub async fn get_stock_changes(&self, query: &ReportQuery) -> OpendartResult<Vec<StockChange>> {
        self.fetch(Operation::ReportGetStockChanges, query).await
    }

    /// Dividends.
    #[instrument(skip(self))]
    pub async fn get_dividends(&self, query: &ReportQuery) -> OpendartResult<Vec<DividendInfo>> {
        self.fetch(Operation::ReportGetDividends, query).await
    }

    /// Treasury stock acquisitions and disposals.
    #[instrument(skip(self))]
    pub async fn get_treasury_stock(
        &self,
        query: &ReportQuery,
    ) -> OpendartResult<Vec<TreasuryStock>> {
        self.fetch(Operation::ReportGetTreasuryStock, query).await
    }

    /// Largest shareholder and related parties.
    #[instrument(skip(self))]
    pub async fn get_largest_shareholders(
        &self,
        query: &ReportQuery,
    ) -> OpendartResult<Vec<LargestShareholder>> {
        self.fetch(Operation::ReportGetLargestShareholders, query)
            .await
    }

    /// Executive roster.
    #[instrument(skip(self))]
    pub async fn get_executives(&self, query: &ReportQuery) -> OpendartResult<Vec<Executive>> {
        self.fetch(Operation::ReportGetExecutives, query).await
    }

    /// Employee headcount and pay.
    #[instrument(skip(self))]
    pub async fn get_employees(&self, query: &ReportQuery) -> OpendartResult<Vec<Employee>> {
        self.fetch(Operation::ReportGetEmployees, query).await
    }

    /// Individually disclosed compensation.
    #[instrument(skip(self))]
    pub async fn get_individual_compensation(
        &self,
        query: &ReportQuery,
    ) -> OpendartResult<Vec<IndividualCompensation>> {
        self.fetch(Operation::ReportGetIndividualCompensation, query)
            .await
    }

    /// Director and auditor compensation totals.
    #[instrument(skip(self))]
    pub async fn get_director_compensation(
        &self,
        query: &ReportQuery,
    ) -> OpendartResult<Vec<DirectorCompensation>> {
        self.fetch(Operation::ReportGetDirectorCompensation, query)
            .await
    }
}
