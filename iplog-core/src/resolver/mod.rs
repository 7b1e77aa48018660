use std::net::IpAddr;
use std::sync::Arc;

use hashbrown::HashMap;

pub use dns::NameServerResolver;
pub use fixed::StaticResolver;
pub use system::SystemResolver;

use iplog_etc::ResolverConfig;

use crate::error::IplogError::NoAddressResolved;
use crate::{IplogError, Result};

mod dns;
mod fixed;
mod system;

#[async_trait::async_trait]
pub trait Resolver: Send + Sync + 'static {
    async fn resolve(&self, hostname: &str) -> Result<Vec<IpAddr>>;

    /// Pick one address, IPv4 first, like the classic `gethostbyname`.
    async fn resolve_one(&self, hostname: &str) -> Result<IpAddr> {
        let all = self.resolve(hostname).await?;
        all.iter()
            .find(|it| it.is_ipv4())
            .or_else(|| all.first())
            .cloned()
            .ok_or_else(|| NoAddressResolved(hostname.to_string().into()))
    }
}

/// Build the resolver described by the configuration: explicit nameservers
/// when any are listed, the platform resolver otherwise, with the configured
/// overrides consulted first.
pub fn from_config(c: &ResolverConfig) -> Result<Arc<dyn Resolver>> {
    let inner: Arc<dyn Resolver> = if c.nameservers.is_empty() {
        Arc::new(SystemResolver::default())
    } else {
        Arc::new(NameServerResolver::new(&c.nameservers)?)
    };

    if c.overrides.is_empty() {
        return Ok(inner);
    }

    let mut overrides = HashMap::with_capacity(c.overrides.len());
    for (hostname, addrs) in &c.overrides {
        let mut ips = Vec::with_capacity(addrs.len());
        for next in addrs {
            let ip = next.parse::<IpAddr>().map_err(|_| {
                IplogError::InvalidConfig(
                    format!("resolver.overrides.{}: '{}'", hostname, next).into(),
                )
            })?;
            ips.push(ip);
        }
        overrides.insert(hostname.to_ascii_lowercase(), ips);
    }

    Ok(Arc::new(StaticResolver::new(overrides).fallback(inner)))
}
