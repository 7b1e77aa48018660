use std::net::IpAddr;
use std::sync::Arc;

use hashbrown::HashMap;

use crate::error::IplogError::NoAddressResolved;
use crate::Result;

use super::Resolver;

/// A resolver with a fixed table of answers. Hostnames missing from the table
/// are handed to the fallback resolver, or fail when there is none.
#[derive(Default)]
pub struct StaticResolver {
    table: HashMap<String, Vec<IpAddr>>,
    fallback: Option<Arc<dyn Resolver>>,
}

impl StaticResolver {
    pub fn new(table: HashMap<String, Vec<IpAddr>>) -> Self {
        Self {
            table,
            fallback: None,
        }
    }

    pub fn add<S: Into<String>>(mut self, hostname: S, ips: Vec<IpAddr>) -> Self {
        self.table.insert(hostname.into().to_ascii_lowercase(), ips);
        self
    }

    pub fn fallback(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.fallback.replace(resolver);
        self
    }
}

#[async_trait::async_trait]
impl Resolver for StaticResolver {
    async fn resolve(&self, hostname: &str) -> Result<Vec<IpAddr>> {
        if let Some(ips) = self.table.get(&hostname.to_ascii_lowercase()) {
            if !ips.is_empty() {
                debug!("resolve '{}' from static table: {:?}", hostname, ips);
                return Ok(Clone::clone(ips));
            }
        }

        match &self.fallback {
            Some(next) => next.resolve(hostname).await,
            None => Err(NoAddressResolved(hostname.to_string().into())),
        }
    }
}
