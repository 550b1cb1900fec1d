//! Deterministic monthly balance projection over recurring transactions.
//!
//! The engine is a pure function of its inputs: it reads the caller's
//! snapshot, walks a bounded sequence of month buckets, and folds each
//! bucket's net flow into a running balance. The anchor date is always
//! injected so nothing here touches a system clock.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CashflowError;
use crate::ledger::{CashflowSnapshot, Direction, MonthSequence, TransactionRecord};

/// Horizon used when the caller does not ask for a specific one.
pub const DEFAULT_HORIZON_MONTHS: u32 = 6;

/// One projected bucket: the first day of the month and the balance after
/// that month's flows have been applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    #[serde(rename = "date")]
    pub period_start: NaiveDate,
    pub balance: Decimal,
}

/// Flow summary across the whole projected horizon.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastTotals {
    pub projected_income: Decimal,
    pub projected_expense: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastResult {
    pub anchor: NaiveDate,
    pub horizon_months: u32,
    pub points: Vec<ForecastPoint>,
    pub totals: ForecastTotals,
}

/// Projects the balance month by month, starting at the bucket containing
/// `anchor` and covering `horizon_months` further buckets, so the series
/// always holds `horizon_months + 1` points. The first point already
/// reflects the anchor month's own net flow.
///
/// Every record is validated before any bucket is computed; the call either
/// returns a complete series or the first invariant violation.
pub fn forecast_balances(
    snapshot: &CashflowSnapshot,
    anchor: NaiveDate,
    horizon_months: u32,
) -> Result<ForecastResult, CashflowError> {
    for transaction in &snapshot.transactions {
        transaction.validate()?;
    }
    tracing::debug!(
        transactions = snapshot.transaction_count(),
        horizon_months,
        %anchor,
        "projecting cashflow"
    );

    let mut balance = snapshot.starting_balance;
    let mut points = Vec::with_capacity(horizon_months as usize + 1);
    let mut totals = ForecastTotals::default();

    for bucket in MonthSequence::new(anchor, horizon_months + 1) {
        let (income, expense) = bucket_flows(&snapshot.transactions, bucket)?;
        balance = balance
            .checked_add(income)
            .and_then(|updated| updated.checked_sub(expense))
            .ok_or_else(|| overflow_in(bucket))?;
        totals.projected_income = totals
            .projected_income
            .checked_add(income)
            .ok_or_else(|| overflow_in(bucket))?;
        totals.projected_expense = totals
            .projected_expense
            .checked_add(expense)
            .ok_or_else(|| overflow_in(bucket))?;
        points.push(ForecastPoint {
            period_start: bucket,
            balance,
        });
    }
    totals.net = totals
        .projected_income
        .checked_sub(totals.projected_expense)
        .ok_or_else(|| overflow_in(anchor))?;

    Ok(ForecastResult {
        anchor,
        horizon_months,
        points,
        totals,
    })
}

fn bucket_flows(
    transactions: &[TransactionRecord],
    bucket: NaiveDate,
) -> Result<(Decimal, Decimal), CashflowError> {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for transaction in transactions.iter().filter(|t| t.occurs_in(bucket)) {
        let sum = match transaction.direction {
            Direction::Income => &mut income,
            Direction::Expense => &mut expense,
        };
        *sum = sum
            .checked_add(transaction.amount)
            .ok_or_else(|| overflow_in(bucket))?;
    }
    Ok((income, expense))
}

fn overflow_in(bucket: NaiveDate) -> CashflowError {
    CashflowError::Overflow(format!(
        "amounts exceed the decimal range in the {bucket} bucket"
    ))
}
