use anyhow::Result;
use chrono::Utc;
use tipjar_application::TipSession;
use tipjar_core::calculator::format_currency;
use tipjar_core::history::summary::recent;

pub fn history(session: &TipSession, limit: Option<usize>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(session.history())?);
        return Ok(());
    }

    if session.history().is_empty() {
        println!("No saved tips yet.");
        return Ok(());
    }

    let symbol = &session.config().currency_symbol;
    let limit = limit.unwrap_or(session.config().recent_limit);
    for record in recent(session.history(), limit) {
        println!("{}", record.summary_line(symbol));
    }
    Ok(())
}

pub async fn clear(session: &mut TipSession) {
    let count = session.history().len();
    session.clear().await;
    println!("🗑️  Cleared {} saved tips", count);
}

pub fn summary(session: &TipSession) {
    let symbol = &session.config().currency_symbol;
    let summary = session.summary(Utc::now());

    println!("Saved tips:    {}", summary.record_count);
    println!("Total tipped:  {}", format_currency(summary.total_tipped, symbol));
    println!(
        "Top category:  {}",
        summary
            .top_category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("Last 7 days:   {}", format_currency(summary.last_week_tip_sum, symbol));
}
