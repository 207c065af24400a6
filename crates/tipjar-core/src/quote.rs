//! Quote shown once per session.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "Gratitude is not only the greatest of virtues, but the parent of all others.",
        author: "Cicero",
    },
    Quote {
        text: "No act of kindness, no matter how small, is ever wasted.",
        author: "Aesop",
    },
    Quote {
        text: "Beware of little expenses; a small leak will sink a great ship.",
        author: "Benjamin Franklin",
    },
    Quote {
        text: "The best way to cheer yourself up is to try to cheer somebody else up.",
        author: "Mark Twain",
    },
    Quote {
        text: "Too many people spend money they haven't earned, to buy things they don't want, to impress people they don't like.",
        author: "Will Rogers",
    },
    Quote {
        text: "It is not how much we give, but how much love we put into giving.",
        author: "Mother Teresa",
    },
    Quote {
        text: "Wealth consists not in having great possessions, but in having few wants.",
        author: "Epictetus",
    },
];

/// Picks a quote uniformly at random; `None` only for an empty list.
pub fn pick_random<'a, R: Rng + ?Sized>(quotes: &'a [Quote], rng: &mut R) -> Option<&'a Quote> {
    quotes.choose(rng)
}

/// Same as [`pick_random`] with a seeded generator, so tests can pin the pick.
pub fn pick_seeded(quotes: &[Quote], seed: u64) -> Option<&Quote> {
    let mut rng = StdRng::seed_from_u64(seed);
    pick_random(quotes, &mut rng)
}
