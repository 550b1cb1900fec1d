//! Transaction records, month-bucket arithmetic, and snapshot containers.

pub mod period;
pub mod snapshot;
pub mod transaction;

pub use period::{bucket_start, MonthSequence};
pub use snapshot::CashflowSnapshot;
pub use transaction::{Direction, Recurrence, TransactionRecord};
