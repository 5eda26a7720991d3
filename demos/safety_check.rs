//! Safety-check strategy escalation example

use statement_core::{EntryType, Page, Statement, StatementConfig, Transaction};

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;

fn statement(entry_type: EntryType, lines: &[&str], amounts: &[&str]) -> Statement {
    let transactions = amounts
        .iter()
        .enumerate()
        .map(|(i, amount)| {
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 6, i as u32 + 1).expect("valid day"),
                format!("TRANSACTION {}", i + 1),
                BigDecimal::from_str(amount).expect("valid amount"),
            )
        })
        .collect();

    Statement::new(
        entry_type,
        vec![Page::new(lines.iter().map(|l| l.to_string()).collect())],
        StatementConfig::default(),
        transactions,
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🧾 Statement Core - Safety Check Example\n");

    // 1. Net total already corroborates itself
    println!("✅ Self-corroborating net total:");
    let trivially_safe = statement(EntryType::Credit, &[], &["120.00", "-20.00"]);
    println!(
        "  amounts [120.00, -20.00] → {}\n",
        trivially_safe.perform_safety_check()?
    );

    // 2. Net total is negative, corroborated by the document text
    println!("✅ Corroborated by document text:");
    let document_backed = statement(
        EntryType::Credit,
        &["CREDIT BALANCE 100.00"],
        &["-120.00", "20.00"],
    );
    println!(
        "  amounts [-120.00, 20.00], page mentions 100.00 → {}\n",
        document_backed.perform_safety_check()?
    );

    // 3. Only the split debit/credit totals appear in the document
    println!("✅ Corroborated via debit-style fallback:");
    let split_totals = statement(
        EntryType::Credit,
        &["TOTAL CREDITS 20.00", "TOTAL DEBITS 120.00"],
        &["-120.00", "20.00"],
    );
    println!(
        "  amounts [-120.00, 20.00], pages mention 20.00 and 120.00 → {}\n",
        split_totals.perform_safety_check()?
    );

    // 4. No strategy succeeds
    println!("❌ Unverifiable extraction:");
    let unverifiable = statement(EntryType::Credit, &["no totals here"], &["-10.00", "25.005"]);
    match unverifiable.perform_safety_check() {
        Ok(verified) => println!("  unexpected pass: {verified}"),
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
