use chrono::Utc;
use tipjar_application::TipSession;

pub fn quote(session: &TipSession) {
    match session.quote() {
        Some(quote) => println!("\"{}\"\n  - {}", quote.text, quote.author),
        None => println!("No quote today."),
    }
}

pub fn reminder(session: &TipSession) {
    let now = Utc::now();
    println!("{}", session.reminder_body(now));
    println!(
        "Next reminder: {}",
        session.next_reminder(now).format("%A %Y-%m-%d %H:%M UTC")
    );
}
