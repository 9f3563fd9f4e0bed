//! Port traits for external dependencies.

mod body;
mod error;
mod external;

pub use body::RelayBody;
pub use error::RelayError;
pub use external::{FactPort, GainsPort, HiscorePort};

#[cfg(test)]
pub use external::{MockFactPort, MockGainsPort, MockHiscorePort};
