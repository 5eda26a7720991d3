//! Carry-over balance reconciliation example

use statement_core::{
    EntryType, Page, PrevBalancePattern, Statement, StatementConfig, Transaction,
};

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🧾 Statement Core - Carry-over Reconciliation Example\n");

    // 1. A statement whose layout reports the previous balance as prose
    println!("📄 Source document:");
    let lines = [
        "EXAMPLE BANK CREDIT CARD STATEMENT",
        "PREVIOUS BALANCE 1,000.00",
        "03 JUN  COFFEE HOUSE        250.00",
        "09 JUN  PAYMENT - THANK YOU 2,000.00 CR",
        "CREDIT BALANCE 750.00",
    ];
    for line in &lines {
        println!("  | {line}");
    }
    println!();

    let config = StatementConfig {
        prev_balance_pattern: Some(PrevBalancePattern::new(
            r"(?P<description>PREVIOUS BALANCE)\s+(?P<amount>[\d,]+\.\d{2})",
        )?),
        bank: Some("example".to_string()),
        ..StatementConfig::default()
    };

    let mut statement = Statement::new(
        EntryType::Credit,
        vec![Page::new(lines.iter().map(|l| l.to_string()).collect())],
        config,
        vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 6, 3).ok_or("bad date")?,
                "COFFEE HOUSE".to_string(),
                BigDecimal::from_str("250.00")?,
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 6, 9).ok_or("bad date")?,
                "PAYMENT - THANK YOU".to_string(),
                BigDecimal::from_str("-2000.00")?,
            ),
        ],
    );

    // 2. Reconcile the prose balance into a synthetic transaction
    println!("🔧 Reconciling carry-over balance...");
    statement.post_process_transactions()?;

    for transaction in &statement.transactions {
        println!(
            "  ✓ {}  {:<22} {:>10}",
            transaction.transaction_date, transaction.description, transaction.amount
        );
    }
    println!();

    // 3. Corroborate the total against the raw document text
    println!("🔍 Running safety check...");
    let verified = statement.perform_safety_check()?;
    println!("  ✓ Extraction verified: {verified}");

    Ok(())
}
