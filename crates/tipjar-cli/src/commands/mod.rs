mod bill;
mod history;
mod info;

pub use bill::{calc, save};
pub use history::{clear, history, summary};
pub use info::{quote, reminder};
