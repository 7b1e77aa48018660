use std::net::{IpAddr, SocketAddr};

use hickory_resolver::config::{
    NameServerConfig, NameServerConfigGroup, Protocol, ResolverConfig, ResolverOpts,
};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioAsyncResolver;

use crate::error::IplogError::{InvalidConfig, NoAddressResolved};
use crate::Result;

use super::Resolver;

/// A resolver which queries the given nameservers over UDP instead of the
/// platform resolver.
pub struct NameServerResolver {
    inner: TokioAsyncResolver,
}

impl NameServerResolver {
    const DNS_PORT: u16 = 53;

    /// Each nameserver is either an ip address (port 53 is used) or a socket address.
    pub fn new<S: AsRef<str>>(nameservers: &[S]) -> Result<Self> {
        let mut nsc = vec![];
        for next in nameservers.iter().map(|it| it.as_ref().trim()) {
            if let Ok(ipaddr) = next.parse::<IpAddr>() {
                nsc.push(NameServerConfig::new(
                    SocketAddr::new(ipaddr, Self::DNS_PORT),
                    Protocol::Udp,
                ));
                continue;
            }
            if let Ok(socketaddr) = next.parse::<SocketAddr>() {
                nsc.push(NameServerConfig::new(socketaddr, Protocol::Udp));
                continue;
            }
            return Err(InvalidConfig(format!("nameserver '{}'", next).into()));
        }

        if nsc.is_empty() {
            return Err(InvalidConfig("no nameserver".into()));
        }

        info!("use {} nameserver(s) for dns lookup", nsc.len());

        let inner = TokioAsyncResolver::new(
            ResolverConfig::from_parts(None, vec![], NameServerConfigGroup::from(nsc)),
            ResolverOpts::default(),
            TokioConnectionProvider::default(),
        );

        Ok(Self { inner })
    }
}

#[async_trait::async_trait]
impl Resolver for NameServerResolver {
    async fn resolve(&self, hostname: &str) -> Result<Vec<IpAddr>> {
        match self.inner.lookup_ip(hostname).await {
            Ok(lookup) => {
                let ips: Vec<IpAddr> = lookup.iter().collect();
                if ips.is_empty() {
                    return Err(NoAddressResolved(hostname.to_string().into()));
                }
                debug!("resolve '{}' ok: {:?}", hostname, &ips);
                Ok(ips)
            }
            Err(e) => {
                warn!("failed to resolve hostname '{}': {}", hostname, e);
                Err(NoAddressResolved(hostname.to_string().into()))
            }
        }
    }
}

#[cfg(test)]
mod dns_resolver_tests {
    use crate::IplogError;

    use super::*;

    fn init() {
        pretty_env_logger::try_init_timed().ok();
    }

    #[tokio::test]
    async fn new_with_nameservers() {
        init();

        assert!(NameServerResolver::new(&["1.1.1.1", "8.8.8.8:53", " [::1]:5353 "]).is_ok());
    }

    #[tokio::test]
    async fn new_with_invalid_nameservers() {
        init();

        let empty: [&str; 0] = [];
        assert!(matches!(
            NameServerResolver::new(&empty),
            Err(IplogError::InvalidConfig(_))
        ));
        assert!(matches!(
            NameServerResolver::new(&["1.1.1.1", "dns.google"]),
            Err(IplogError::InvalidConfig(_))
        ));
    }
}
