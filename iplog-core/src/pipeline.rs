use std::sync::Arc;

use crate::hostname::{normalize, Rejection, Validator};
use crate::resolver::Resolver;
use crate::store::{RecordStore, ResolvedRecord};
use crate::Result;

/// Typing this instead of a hostname leaves the resolve loop.
pub const SENTINEL_BACK: &str = "back";

/// How a single resolve request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The sentinel was entered, nothing happened.
    Aborted,
    /// The candidate did not pass validation, no lookup was made.
    Rejected {
        candidate: String,
        rejection: Rejection,
    },
    /// The lookup failed. `hostname` is exactly what was handed to the resolver.
    Failed { hostname: String, reason: String },
    /// The record was resolved and stored.
    Completed(ResolvedRecord),
}

/// Normalize, validate, resolve and finally store one hostname.
pub struct Pipeline {
    validator: Validator,
    resolver: Arc<dyn Resolver>,
    store: Arc<dyn RecordStore>,
}

impl Pipeline {
    pub fn new(
        validator: Validator,
        resolver: Arc<dyn Resolver>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            validator,
            resolver,
            store,
        }
    }

    /// Only the final step writes to the store; a storage failure there is the
    /// single case reported as an error rather than an outcome.
    pub async fn run(&self, raw: &str) -> Result<Outcome> {
        let raw = raw.trim();
        if raw == SENTINEL_BACK {
            debug!("resolve request is aborted");
            return Ok(Outcome::Aborted);
        }

        let hostname = normalize(raw);

        if let Err(rejection) = self.validator.validate(&hostname) {
            debug!("reject '{}': {}", &hostname, rejection);
            return Ok(Outcome::Rejected {
                candidate: hostname,
                rejection,
            });
        }

        let ip = match self.resolver.resolve_one(&hostname).await {
            Ok(ip) => ip,
            Err(e) => {
                return Ok(Outcome::Failed {
                    reason: e.to_string(),
                    hostname,
                })
            }
        };

        let ip_address = ip.to_string();
        let id = self.store.insert(&hostname, &ip_address)?;

        info!("resolve '{}' ok: record#{} -> {}", &hostname, id, &ip_address);

        Ok(Outcome::Completed(ResolvedRecord {
            id,
            hostname,
            ip_address,
        }))
    }
}
