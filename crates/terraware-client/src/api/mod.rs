//! Named wrappers around terraware-server endpoints.
//!
//! Payloads and results stay free-form JSON; these methods only fix the
//! path and verb, and unwrap the top-level field the server nests results in.

pub mod endpoints;

use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::{Error, HttpError, InvalidInputError};
use crate::http::{RequestOptions, TerrawareClient};

/// Roles allowed to administer an organization.
const ADMIN_ROLES: &[&str] = &["Owner", "Admin"];

impl TerrawareClient {
    /// List the organizations the caller belongs to.
    pub async fn list_organizations(&self) -> Result<Vec<Value>, Error> {
        let response: Value = self.get(endpoints::ORGANIZATIONS, RequestOptions::new()).await?;
        take_array(response, "organizations")
    }

    /// Returns the lowest-numbered organization id, optionally only among
    /// organizations the caller administers.
    #[instrument(skip(self))]
    pub async fn default_organization_id(&self, require_admin: bool) -> Result<i64, Error> {
        let organizations = self.list_organizations().await?;

        let id = organizations
            .iter()
            .filter(|org| {
                !require_admin
                    || org
                        .get("role")
                        .and_then(Value::as_str)
                        .is_some_and(|role| ADMIN_ROLES.contains(&role))
            })
            .filter_map(|org| org.get("id").and_then(Value::as_i64))
            .min()
            .ok_or_else(|| InvalidInputError::Other {
                message: "no matching organization is accessible".to_string(),
            })?;

        debug!(id, "picked default organization");
        Ok(id)
    }

    /// List the facilities the caller can access.
    pub async fn list_facilities(&self) -> Result<Vec<Value>, Error> {
        let response: Value = self.get(endpoints::FACILITIES, RequestOptions::new()).await?;
        take_array(response, "facilities")
    }

    /// List the devices at a facility.
    pub async fn list_devices(&self, facility_id: i64) -> Result<Vec<Value>, Error> {
        let response: Value = self
            .get(&endpoints::facility_devices(facility_id), RequestOptions::new())
            .await?;
        take_array(response, "devices")
    }

    /// Fetch a single device.
    pub async fn get_device(&self, device_id: i64) -> Result<Value, Error> {
        let response: Value = self
            .get(&endpoints::device(device_id), RequestOptions::new())
            .await?;
        take_field(response, "device")
    }

    /// List the timeseries defined for a device.
    pub async fn list_timeseries(&self, device_id: i64) -> Result<Vec<Value>, Error> {
        let options = RequestOptions::new().query("deviceId", device_id.to_string());
        let response: Value = self.get(endpoints::TIMESERIES, options).await?;
        take_array(response, "timeseries")
    }

    /// Create timeseries definitions.
    pub async fn create_timeseries(&self, payload: Value) -> Result<Value, Error> {
        self.post(endpoints::TIMESERIES_CREATE, RequestOptions::new().json(payload))
            .await
    }

    /// Record timeseries values.
    pub async fn record_timeseries_values(&self, payload: Value) -> Result<Value, Error> {
        self.post(endpoints::TIMESERIES_VALUES, RequestOptions::new().json(payload))
            .await
    }

    /// List the species of an organization.
    pub async fn list_species(&self, organization_id: i64) -> Result<Vec<Value>, Error> {
        let options = RequestOptions::new().query("organizationId", organization_id.to_string());
        let response: Value = self.get(endpoints::SPECIES, options).await?;
        take_array(response, "species")
    }

    /// List the planting sites of an organization.
    pub async fn list_planting_sites(&self, organization_id: i64) -> Result<Vec<Value>, Error> {
        let options = RequestOptions::new().query("organizationId", organization_id.to_string());
        let response: Value = self.get(endpoints::PLANTING_SITES, options).await?;
        take_array(response, "sites")
    }

    /// Fetch a single planting site.
    pub async fn get_planting_site(&self, site_id: i64) -> Result<Value, Error> {
        let response: Value = self
            .get(&endpoints::planting_site(site_id), RequestOptions::new())
            .await?;
        take_field(response, "site")
    }

    /// Record a completed ad-hoc observation.
    pub async fn complete_ad_hoc_observation(&self, payload: Value) -> Result<Value, Error> {
        self.post(
            endpoints::AD_HOC_OBSERVATIONS,
            RequestOptions::new().json(payload),
        )
        .await
    }

    /// Create a seed bank accession.
    pub async fn create_accession(&self, payload: Value) -> Result<Value, Error> {
        let response: Value = self
            .post(endpoints::ACCESSIONS, RequestOptions::new().json(payload))
            .await?;
        take_field(response, "accession")
    }

    /// Mark an accession as checked in.
    pub async fn check_in_accession(&self, accession_id: i64) -> Result<Value, Error> {
        let response: Value = self
            .post(
                &endpoints::accession_check_in(accession_id),
                RequestOptions::new(),
            )
            .await?;
        take_field(response, "accession")
    }

    /// Replace an accession's editable fields.
    pub async fn update_accession(&self, accession_id: i64, payload: Value) -> Result<Value, Error> {
        let response: Value = self
            .put(
                &endpoints::accession(accession_id),
                RequestOptions::new().json(payload),
            )
            .await?;
        take_field(response, "accession")
    }

    /// Run a search and return the result as CSV bytes.
    #[instrument(skip(self, payload))]
    pub async fn export_search_csv(&self, payload: Value) -> Result<Bytes, Error> {
        let options = RequestOptions::new()
            .header("Accept", "text/csv")
            .json(payload);
        let response = self.post_raw(endpoints::SEARCH, options).await?;
        let csv = response.bytes().await?;
        debug!(bytes = csv.len(), "export received");
        Ok(csv)
    }
}

fn take_field(mut response: Value, key: &str) -> Result<Value, Error> {
    match response.get_mut(key) {
        Some(value) => Ok(value.take()),
        None => Err(HttpError::Decode {
            message: format!("response has no '{}' field", key),
        }
        .into()),
    }
}

fn take_array(response: Value, key: &str) -> Result<Vec<Value>, Error> {
    match take_field(response, key)? {
        Value::Array(items) => Ok(items),
        _ => Err(HttpError::Decode {
            message: format!("'{}' is not an array", key),
        }
        .into()),
    }
}
