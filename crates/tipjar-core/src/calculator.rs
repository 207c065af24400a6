//! Tip arithmetic.
//!
//! Every function here is total: bad input produces zero instead of an error,
//! so the live display can be recomputed on each keystroke.

use crate::input::BillInput;
use serde::{Deserialize, Serialize};

/// Tip on `bill` at `percent`, or zero unless `bill` is a positive number.
pub fn tip_amount(bill: f64, percent: u8) -> f64 {
    if bill.is_finite() && bill > 0.0 {
        bill * f64::from(percent) / 100.0
    } else {
        0.0
    }
}

/// Bill plus tip. Zero whenever the tip is zeroed for an invalid bill.
pub fn total_amount(bill: f64, percent: u8) -> f64 {
    if bill.is_finite() && bill > 0.0 {
        bill + tip_amount(bill, percent)
    } else {
        0.0
    }
}

/// Splits `amount` across `party_size` people; an empty party yields zero.
pub fn per_person(amount: f64, party_size: u8) -> f64 {
    if party_size > 0 {
        amount / f64::from(party_size)
    } else {
        0.0
    }
}

/// Derived values for one state of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub tip_amount: f64,
    pub total_amount: f64,
    pub tip_per_person: f64,
    pub total_per_person: f64,
}

/// Recomputes every derived value from the form contents.
pub fn calculate(input: &BillInput) -> Calculation {
    let bill = input.live_amount();
    let tip = tip_amount(bill, input.tip_percent());
    let total = total_amount(bill, input.tip_percent());

    Calculation {
        tip_amount: tip,
        total_amount: total,
        tip_per_person: per_person(tip, input.party_size()),
        total_per_person: per_person(total, input.party_size()),
    }
}

/// Formats a currency amount rounded to two decimal places.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Formats a percentage rounded to a whole number.
pub fn format_percent(percent: f64) -> String {
    format!("{:.0}%", percent)
}
