use std::{fs, path::Path};

use crate::{errors::CashflowError, ledger::CashflowSnapshot};

/// Writes the snapshot to disk atomically by staging to a temporary file.
pub fn save_snapshot_to_file(
    snapshot: &CashflowSnapshot,
    path: &Path,
) -> Result<(), CashflowError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a snapshot from disk, returning structured errors on failure.
pub fn load_snapshot_from_file(path: &Path) -> Result<CashflowSnapshot, CashflowError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
