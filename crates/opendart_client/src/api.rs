//! [`DartApi`] implementation: operation dispatch over the service groups.

use crate::{FinancialQuery, OpenDartClient, PeriodQuery, ReportQuery};
use async_trait::async_trait;
use opendart_error::OpendartResult;
use opendart_interface::{DartApi, Operation, Param, Params, Payload};
use tracing::instrument;

fn report_query(params: &Params, operation: Operation) -> OpendartResult<ReportQuery> {
    Ok(ReportQuery::new(
        params.require(Param::CorpCode, operation)?,
        params.require(Param::BsnsYear, operation)?,
        params.require(Param::ReprtCode, operation)?,
    ))
}

fn financial_query(params: &Params, operation: Operation) -> OpendartResult<FinancialQuery> {
    Ok(FinancialQuery::new(
        report_query(params, operation)?,
        params.get(Param::FsDiv).map(str::to_string),
    ))
}

fn period_query(params: &Params, operation: Operation) -> OpendartResult<PeriodQuery> {
    Ok(PeriodQuery::new(
        params.require(Param::CorpCode, operation)?,
        params.get(Param::BgnDe).map(str::to_string),
        params.get(Param::EndDe).map(str::to_string),
    ))
}

fn disclosure_search(params: &Params) -> crate::DisclosureSearch {
    let owned = |param| params.get(param).map(str::to_string);
    crate::DisclosureSearch {
        corp_code: owned(Param::CorpCode),
        bgn_de: owned(Param::BgnDe),
        end_de: owned(Param::EndDe),
        last_reprt_at: owned(Param::LastReprtAt),
        pblntf_ty: owned(Param::PblntfTy),
        pblntf_detail_ty: owned(Param::PblntfDetailTy),
        corp_cls: owned(Param::CorpCls),
        sort: None,
        sort_mth: None,
        page_no: params.get(Param::PageNo).and_then(|v| v.parse().ok()),
        page_count: params.get(Param::PageCount).and_then(|v| v.parse().ok()),
    }
}

#[async_trait]
impl DartApi for OpenDartClient {
    #[instrument(skip(self, params), fields(operation = %operation))]
    async fn invoke(&self, operation: Operation, params: &Params) -> OpendartResult<Payload> {
        use Operation::*;

        let payload = match operation {
            DisclosureSearch => {
                Payload::records(self.disclosure().search(&disclosure_search(params)).await?)
            }
            DisclosureGetCompany => Payload::record(
                self.disclosure()
                    .get_company(params.require(Param::CorpCode, operation)?)
                    .await?,
            ),
            DisclosureDownloadDocument => Payload::Bytes(
                self.disclosure()
                    .download_document(params.require(Param::RceptNo, operation)?)
                    .await?,
            ),
            DisclosureDownloadCorpCodes => {
                Payload::Bytes(self.disclosure().download_corp_codes().await?)
            }

            ReportGetStockChanges => Payload::records(
                self.report()
                    .get_stock_changes(&report_query(params, operation)?)
                    .await?,
            ),
            ReportGetDividends => Payload::records(
                self.report()
                    .get_dividends(&report_query(params, operation)?)
                    .await?,
            ),
            ReportGetTreasuryStock => Payload::records(
                self.report()
                    .get_treasury_stock(&report_query(params, operation)?)
                    .await?,
            ),
            ReportGetLargestShareholders => Payload::records(
                self.report()
                    .get_largest_shareholders(&report_query(params, operation)?)
                    .await?,
            ),
            ReportGetExecutives => Payload::records(
                self.report()
                    .get_executives(&report_query(params, operation)?)
                    .await?,
            ),
            ReportGetEmployees => Payload::records(
                self.report()
                    .get_employees(&report_query(params, operation)?)
                    .await?,
            ),
            ReportGetIndividualCompensation => Payload::records(
                self.report()
                    .get_individual_compensation(&report_query(params, operation)?)
                    .await?,
            ),
            ReportGetDirectorCompensation => Payload::records(
                self.report()
                    .get_director_compensation(&report_query(params, operation)?)
                    .await?,
            ),

            FinancialGetSingleAccount => Payload::records(
                self.financial()
                    .get_single_account(&financial_query(params, operation)?)
                    .await?,
            ),
            FinancialGetMultiAccount => Payload::records(
                self.financial()
                    .get_multi_account(&financial_query(params, operation)?)
                    .await?,
            ),
            FinancialGetFullStatements => Payload::records(
                self.financial()
                    .get_full_statements(&financial_query(params, operation)?)
                    .await?,
            ),
            FinancialDownloadXbrl => Payload::Bytes(
                self.financial()
                    .download_xbrl(
                        params.require(Param::RceptNo, operation)?,
                        params.require(Param::ReprtCode, operation)?,
                    )
                    .await?,
            ),
            FinancialGetXbrlTaxonomy => Payload::records(
                self.financial()
                    .get_xbrl_taxonomy(params.require(Param::SjDiv, operation)?)
                    .await?,
            ),
            FinancialGetIndicators => Payload::records(
                self.financial()
                    .get_indicators(&report_query(params, operation)?)
                    .await?,
            ),

            ShareholderGetMajorStock => Payload::records(
                self.shareholder()
                    .get_major_stock(params.require(Param::CorpCode, operation)?)
                    .await?,
            ),
            ShareholderGetExecutiveStock => Payload::records(
                self.shareholder()
                    .get_executive_stock(params.require(Param::CorpCode, operation)?)
                    .await?,
            ),

            MajorEventGetPaidCapitalIncrease => Payload::records(
                self.major_event()
                    .get_paid_capital_increase(&period_query(params, operation)?)
                    .await?,
            ),
            MajorEventGetBonusIssue => Payload::records(
                self.major_event()
                    .get_bonus_issue(&period_query(params, operation)?)
                    .await?,
            ),
            MajorEventGetCapitalReduction => Payload::records(
                self.major_event()
                    .get_capital_reduction(&period_query(params, operation)?)
                    .await?,
            ),
            MajorEventGetConvertibleBond => Payload::records(
                self.major_event()
                    .get_convertible_bond(&period_query(params, operation)?)
                    .await?,
            ),
            MajorEventGetMergerDecision => Payload::records(
                self.major_event()
                    .get_merger_decision(&period_query(params, operation)?)
                    .await?,
            ),
            MajorEventGetSplitDecision => Payload::records(
                self.major_event()
                    .get_split_decision(&period_query(params, operation)?)
                    .await?,
            ),

            RegistrationGetEquitySecurities => Payload::records(
                self.registration()
                    .get_equity_securities(&period_query(params, operation)?)
                    .await?,
            ),
            RegistrationGetDebtSecurities => Payload::records(
                self.registration()
                    .get_debt_securities(&period_query(params, operation)?)
                    .await?,
            ),
            RegistrationGetMergerRegistration => Payload::records(
                self.registration()
                    .get_merger_registration(&period_query(params, operation)?)
                    .await?,
            ),
            RegistrationGetSplitRegistration => Payload::records(
                self.registration()
                    .get_split_registration(&period_query(params, operation)?)
                    .await?,
            ),
        };

        Ok(payload)
    }
}
