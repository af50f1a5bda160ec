//! Lampyre Lighthouse tasks
//!
//! `POST https://api.lighthouse.lampyre.io/api/1.0/tasks/{job}` with
//! `{"token": ..., "task_info": {...}}`. The response describes the created
//! task; results are fetched separately by task id.

use fox_core::{Query, QueryType, Service, Vendor};
use fox_net::VendorRequest;
use serde_json::{json, Value};

use crate::traits::require_key;
use crate::{VendorAdapter, VendorError};

pub const LAMPYRE_API: &str = "https://api.lighthouse.lampyre.io/api/1.0";

/// Lighthouse job and task payload for a query type
fn job_for(query: &Query) -> Option<(&'static str, Value)> {
    let value = query.value.as_str();
    match query.query_type {
        QueryType::Ip => Some(("test_ip_geoip_v1", json!({ "ip": value }))),
        QueryType::Username => Some(("username_checker_v1", json!({ "username": value }))),
        QueryType::Phone => Some(("phone_leakcheck_v1", json!({ "phone": value }))),
        QueryType::Email => Some(("email_spotify_checker_v1", json!({ "email": value }))),
        _ => None,
    }
}

pub struct LampyreAdapter {
    api_key: Option<String>,
    base_url: String,
}

impl LampyreAdapter {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: LAMPYRE_API.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl VendorAdapter for LampyreAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Lampyre
    }

    fn build_request(&self, service: Service, query: &Query) -> Result<VendorRequest, VendorError> {
        let (job, task_info) = match (service, job_for(query)) {
            (Service::Lampyre, Some(job)) => job,
            _ => return Err(VendorError::unsupported(self.vendor(), service, query)),
        };
        let token = require_key(self.vendor(), &self.api_key)?;

        Ok(VendorRequest::post_json(
            format!("{}/tasks/{}", self.base_url, job),
            json!({ "token": token, "task_info": task_info }),
        ))
    }
}
