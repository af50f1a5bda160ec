//! HTTP gateway
//!
//! Routes a service call to its vendor adapter and executes the resulting
//! request through the resilient fetch layer.

use async_trait::async_trait;
use fox_core::{Query, Service, Vendor};
use fox_net::{create_client, fetch, FetchConfig, FetchError};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::{
    HibpAdapter, HunterAdapter, LampyreAdapter, LeakcheckAdapter, OsintIndustriesAdapter,
    ShodanAdapter, VendorAdapter, VendorCredentials, VendorError, VendorGateway,
    VirusTotalAdapter, WhoisXmlAdapter,
};

/// Production [`VendorGateway`] over HTTP
pub struct HttpGateway {
    client: Client,
    fetch_config: FetchConfig,
    adapters: HashMap<Vendor, Box<dyn VendorAdapter>>,
}

impl HttpGateway {
    /// Gateway with every vendor adapter registered
    pub fn new(fetch_config: FetchConfig, credentials: &VendorCredentials) -> Result<Self, FetchError> {
        let client = create_client(&fetch_config)?;

        let gateway = Self {
            client,
            fetch_config,
            adapters: HashMap::new(),
        }
        .with_adapter(ShodanAdapter::new(credentials.owned(Vendor::Shodan)))
        .with_adapter(WhoisXmlAdapter::new(credentials.owned(Vendor::WhoisXml)))
        .with_adapter(HunterAdapter::new(credentials.owned(Vendor::Hunter)))
        .with_adapter(LeakcheckAdapter::new(credentials.owned(Vendor::Leakcheck)))
        .with_adapter(OsintIndustriesAdapter::new(
            credentials.owned(Vendor::OsintIndustries),
        ))
        .with_adapter(VirusTotalAdapter::new(credentials.owned(Vendor::VirusTotal)))
        .with_adapter(LampyreAdapter::new(credentials.owned(Vendor::Lampyre)))
        .with_adapter(HibpAdapter::new(credentials.owned(Vendor::Hibp)));

        Ok(gateway)
    }

    /// Register an adapter, replacing any existing one for the same vendor
    pub fn with_adapter<A: VendorAdapter + 'static>(mut self, adapter: A) -> Self {
        self.adapters.insert(adapter.vendor(), Box::new(adapter));
        self
    }
}

#[async_trait]
impl VendorGateway for HttpGateway {
    async fn call(&self, service: Service, query: &Query) -> Result<Value, VendorError> {
        let vendor = service.vendor();
        let adapter = self
            .adapters
            .get(&vendor)
            .ok_or_else(|| VendorError::unsupported(vendor, service, query))?;

        let request = adapter.build_request(service, query)?;
        debug!("Calling {} for {}", service, query);

        match fetch(&self.client, &request, &self.fetch_config).await {
            Ok(payload) => Ok(payload),
            Err(e) => match adapter.recover(service, &e) {
                Some(payload) => {
                    debug!("{} answered {}, treated as empty", service, e);
                    Ok(payload)
                }
                None => {
                    warn!("{} failed for {}: {}", service, query, e);
                    Err(VendorError::Fetch { vendor, source: e })
                }
            },
        }
    }
}
