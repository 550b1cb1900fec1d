use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CashflowError;

/// A single income or expense record owned by the caller. The projection
/// engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub title: String,
    pub amount: Decimal,
    pub direction: Direction,
    pub recurrence: Recurrence,
}

impl TransactionRecord {
    pub fn new(
        title: impl Into<String>,
        amount: Decimal,
        direction: Direction,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            amount,
            direction,
            recurrence,
        }
    }

    /// Checks the record invariants: a non-negative amount and a recurrence
    /// window that does not end before it starts.
    pub fn validate(&self) -> Result<(), CashflowError> {
        if self.amount < Decimal::ZERO {
            return Err(CashflowError::InvalidTransaction(format!(
                "'{}' has a negative amount {}",
                self.title, self.amount
            )));
        }
        self.recurrence
            .validate()
            .map_err(|reason| CashflowError::InvalidTransaction(format!("'{}': {reason}", self.title)))
    }

    /// Whether this record contributes to the bucket whose first day is
    /// `bucket_start`.
    pub fn occurs_in(&self, bucket_start: NaiveDate) -> bool {
        self.recurrence.occurs_in(bucket_start)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Income,
    Expense,
}

/// Pattern governing which month buckets a record contributes to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "frequency", rename_all = "snake_case")]
pub enum Recurrence {
    /// Lands in the single bucket matching `occurs_on`'s year and month.
    Once { occurs_on: NaiveDate },
    /// Lands once in every bucket whose first day falls inside the window.
    Monthly {
        starts_on: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ends_on: Option<NaiveDate>,
    },
    /// Lands once per bucket it overlaps, exactly like
    /// [`Recurrence::Monthly`]. A true per-week occurrence count would need
    /// sub-month buckets and is intentionally not modeled at this
    /// resolution.
    Weekly {
        starts_on: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ends_on: Option<NaiveDate>,
    },
}

impl Recurrence {
    fn validate(&self) -> Result<(), String> {
        match self {
            Recurrence::Once { .. } => Ok(()),
            Recurrence::Monthly { starts_on, ends_on }
            | Recurrence::Weekly { starts_on, ends_on } => match ends_on {
                Some(end) if end < starts_on => Err(format!(
                    "recurrence ends on {end} before it starts on {starts_on}"
                )),
                _ => Ok(()),
            },
        }
    }

    /// Whether the rule is active in the bucket whose first day is
    /// `bucket_start`. An `ends_on` anywhere inside a month keeps that
    /// whole month active; a `starts_on` after the 1st pushes the first
    /// contribution to the following bucket.
    pub fn occurs_in(&self, bucket_start: NaiveDate) -> bool {
        match self {
            Recurrence::Once { occurs_on } => {
                occurs_on.year() == bucket_start.year()
                    && occurs_on.month() == bucket_start.month()
            }
            Recurrence::Monthly { starts_on, ends_on }
            | Recurrence::Weekly { starts_on, ends_on } => {
                if bucket_start < *starts_on {
                    return false;
                }
                match ends_on {
                    Some(end) => bucket_start <= *end,
                    None => true,
                }
            }
        }
    }
}
