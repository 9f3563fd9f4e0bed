//! Random fact use case. No input, pure pass-through.

use std::sync::Arc;

use crate::infrastructure::ports::{FactPort, RelayBody, RelayError};

pub struct FetchFact {
    facts: Arc<dyn FactPort>,
}

impl FetchFact {
    pub fn new(facts: Arc<dyn FactPort>) -> Self {
        Self { facts }
    }

    pub async fn execute(&self) -> Result<RelayBody, RelayError> {
        self.facts.fetch_fact().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Fact lookup failed");
        })
    }
}
