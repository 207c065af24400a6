use crate::BillArgs;
use anyhow::{Result, anyhow};
use chrono::Utc;
use tipjar_application::TipSession;
use tipjar_core::calculator::{format_currency, format_percent};

fn apply(session: &mut TipSession, args: BillArgs) {
    let current = session.input().clone();
    let tip = args.tip.unwrap_or(current.tip_percent());
    let party = args.party.unwrap_or(current.party_size());

    session.set_input(
        current
            .with_amount_text(args.bill)
            .with_tip_percent(tip)
            .with_party_size(party)
            .with_category(args.category),
    );
}

fn print_calculation(session: &TipSession) {
    let symbol = &session.config().currency_symbol;
    let input = session.input();
    let calc = session.calculation();

    println!(
        "Tip ({}):   {}",
        format_percent(f64::from(input.tip_percent())),
        format_currency(calc.tip_amount, symbol)
    );
    println!("Total:       {}", format_currency(calc.total_amount, symbol));
    if input.party_size() > 1 {
        println!(
            "Per person:  {} tip, {} total (x{})",
            format_currency(calc.tip_per_person, symbol),
            format_currency(calc.total_per_person, symbol),
            input.party_size()
        );
    }
}

pub fn calc(session: &mut TipSession, args: BillArgs) {
    apply(session, args);
    print_calculation(session);
}

pub async fn save(session: &mut TipSession, args: BillArgs) -> Result<()> {
    apply(session, args);
    print_calculation(session);

    let record = session
        .save(Utc::now())
        .await
        .map_err(|e| anyhow!("Cannot save: {}", e))?;

    println!("✅ Saved {}", record.summary_line(&session.config().currency_symbol));
    Ok(())
}
