//! Lottery adapter: envelope extraction plus the Mega Millions feed client.

mod extract;
mod megamillions;

pub use extract::{extract_json, ExtractError};
pub use megamillions::{MegaMillionsClient, MegaMillionsConfig};
