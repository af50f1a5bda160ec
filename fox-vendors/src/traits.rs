//! Common traits for vendor adapters

use async_trait::async_trait;
use fox_core::{Query, QueryType, Service, Vendor};
use fox_net::{FetchError, VendorRequest};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Errors from vendor calls
///
/// The rendered message ends up in the result envelope, so it must never
/// contain an API key.
#[derive(Debug, Error)]
pub enum VendorError {
    #[error("Missing API key for {vendor}")]
    MissingCredential { vendor: Vendor },

    #[error("{source}")]
    Fetch { vendor: Vendor, source: FetchError },

    #[error("{vendor} does not support {service} for {query_type} queries")]
    Unsupported {
        vendor: Vendor,
        service: Service,
        query_type: QueryType,
    },
}

impl VendorError {
    pub fn unsupported(vendor: Vendor, service: Service, query: &Query) -> Self {
        VendorError::Unsupported {
            vendor,
            service,
            query_type: query.query_type,
        }
    }

    pub fn vendor(&self) -> Vendor {
        match self {
            VendorError::MissingCredential { vendor }
            | VendorError::Fetch { vendor, .. }
            | VendorError::Unsupported { vendor, .. } => *vendor,
        }
    }
}

/// Maps a query onto one vendor's HTTP API
pub trait VendorAdapter: Send + Sync {
    fn vendor(&self) -> Vendor;

    /// Describe the request serving `service` for `query`
    fn build_request(&self, service: Service, query: &Query) -> Result<VendorRequest, VendorError>;

    /// Vendor-specific "no data" answers that arrive as HTTP errors
    fn recover(&self, _service: Service, _error: &FetchError) -> Option<Value> {
        None
    }
}

/// Executes service calls; the seam between the router and the network
#[async_trait]
pub trait VendorGateway: Send + Sync {
    async fn call(&self, service: Service, query: &Query) -> Result<Value, VendorError>;
}

pub type SharedGateway = Arc<dyn VendorGateway>;

/// Borrow a configured key or fail without sending anything
pub(crate) fn require_key(vendor: Vendor, key: &Option<String>) -> Result<&str, VendorError> {
    key.as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or(VendorError::MissingCredential { vendor })
}

/// Percent-encode a value used as a URL path segment
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
