use std::{env, path::PathBuf, process};

use cashflow_core::{
    forecast::{forecast_balances, DEFAULT_HORIZON_MONTHS},
    init,
    ledger::{CashflowSnapshot, Direction, Recurrence, TransactionRecord},
    utils::persistence,
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    match command.as_str() {
        "sample" => {
            println!("{}", serde_json::to_string_pretty(&sample_snapshot())?);
        }
        "forecast" => {
            let path = args.next().map(PathBuf::from).unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            let anchor: NaiveDate = args
                .next()
                .unwrap_or_else(|| {
                    print_usage();
                    process::exit(1);
                })
                .parse()?;
            let horizon_months = match args.next() {
                Some(raw) => raw.parse()?,
                None => DEFAULT_HORIZON_MONTHS,
            };

            let snapshot = persistence::load_snapshot_from_file(&path)?;
            let result = forecast_balances(&snapshot, anchor, horizon_months)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn sample_snapshot() -> CashflowSnapshot {
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut snapshot = CashflowSnapshot::new(dec!(1000)).with_name("Sample");
    snapshot.add_transaction(TransactionRecord::new(
        "Salary",
        dec!(3200),
        Direction::Income,
        Recurrence::Monthly {
            starts_on: first,
            ends_on: None,
        },
    ));
    snapshot.add_transaction(TransactionRecord::new(
        "Rent",
        dec!(1400),
        Direction::Expense,
        Recurrence::Monthly {
            starts_on: first,
            ends_on: None,
        },
    ));
    snapshot.add_transaction(TransactionRecord::new(
        "Laptop",
        dec!(900),
        Direction::Expense,
        Recurrence::Once {
            occurs_on: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        },
    ));
    snapshot
}

fn print_usage() {
    eprintln!(
        "Usage: cashflow_core_cli <command>\n\
         Commands:\n  \
         sample\n  \
         forecast <snapshot.json> <anchor YYYY-MM-DD> [months]"
    );
}
