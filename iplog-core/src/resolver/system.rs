use std::net::{IpAddr, ToSocketAddrs};

use crate::error::IplogError::NoAddressResolved;
use crate::Result;

use super::Resolver;

/// A resolver which asks the platform (`getaddrinfo`), so it honours the
/// hosts file and the system DNS settings. The lookup blocks, so it runs on
/// the blocking thread pool.
#[derive(Debug, Clone, Default)]
pub struct SystemResolver;

#[async_trait::async_trait]
impl Resolver for SystemResolver {
    async fn resolve(&self, hostname: &str) -> Result<Vec<IpAddr>> {
        let host = hostname.to_string();

        let joined = tokio::task::spawn_blocking(move || {
            debug!("resolving '{}' via getaddrinfo", &host);
            (host.as_str(), 0u16)
                .to_socket_addrs()
                .map(|it| it.map(|addr| addr.ip()).collect::<Vec<_>>())
        })
        .await;

        let ips = match joined {
            Ok(Ok(ips)) => ips,
            Ok(Err(e)) => {
                warn!("failed to resolve hostname '{}': {}", hostname, e);
                return Err(NoAddressResolved(hostname.to_string().into()));
            }
            Err(e) => {
                error!("resolving task of '{}' failed: {}", hostname, e);
                return Err(NoAddressResolved(hostname.to_string().into()));
            }
        };

        if ips.is_empty() {
            return Err(NoAddressResolved(hostname.to_string().into()));
        }

        debug!("resolve '{}' ok: {:?}", hostname, &ips);

        Ok(ips)
    }
}

#[cfg(test)]
mod system_resolver_tests {
    use crate::IplogError;

    use super::*;

    fn init() {
        pretty_env_logger::try_init_timed().ok();
    }

    #[tokio::test]
    async fn resolve_localhost() {
        init();

        let r = SystemResolver;
        let resolved = r.resolve("localhost").await;
        assert!(resolved.is_ok_and(|next| {
            info!("next: {:?}", next);
            next.iter().all(|it| it.is_loopback())
        }));
    }

    #[tokio::test]
    async fn resolve_unknown() {
        init();

        // '.invalid' is reserved and never resolves
        let r = SystemResolver;
        match r.resolve_one("doesnotexist.invalid").await {
            Err(IplogError::NoAddressResolved(hostname)) => {
                assert_eq!("doesnotexist.invalid", hostname)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
