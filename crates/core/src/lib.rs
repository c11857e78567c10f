mod logic;
mod models;

pub mod prelude {
    pub use crate::logic::*;
    pub use crate::models::*;

    // Polkadot/Substrate Crates
    pub use sp_core::U256;

    // Third Party Crates
    pub use bon::Builder;
    pub use getset::Getters;
    pub use indexmap::IndexSet;
    pub use log::{debug, error, info, trace, warn};
    pub use url::Url;
}
