//! terraware-server endpoint paths.

/// GET: organizations the caller belongs to.
pub const ORGANIZATIONS: &str = "/api/v1/organizations";

/// GET: facilities the caller can access.
pub const FACILITIES: &str = "/api/v1/facilities";

/// GET: timeseries of a device (`deviceId` query parameter).
pub const TIMESERIES: &str = "/api/v1/timeseries";

/// POST: create timeseries definitions.
pub const TIMESERIES_CREATE: &str = "/api/v1/timeseries/create";

/// POST: record timeseries values.
pub const TIMESERIES_VALUES: &str = "/api/v1/timeseries/values";

/// GET: species of an organization (`organizationId` query parameter).
pub const SPECIES: &str = "/api/v1/species";

/// GET: planting sites of an organization (`organizationId` query parameter).
pub const PLANTING_SITES: &str = "/api/v1/tracking/sites";

/// POST: record a completed ad-hoc observation.
pub const AD_HOC_OBSERVATIONS: &str = "/api/v1/tracking/observations/adHoc";

/// POST: create a seed bank accession.
pub const ACCESSIONS: &str = "/api/v1/seedbank/accessions";

/// POST: search; answers with CSV when asked for `text/csv`.
pub const SEARCH: &str = "/api/v1/search";

pub fn facility_devices(facility_id: i64) -> String {
    format!("{}/{}/devices", FACILITIES, facility_id)
}

pub fn device(device_id: i64) -> String {
    format!("/api/v1/devices/{}", device_id)
}

pub fn planting_site(site_id: i64) -> String {
    format!("{}/{}", PLANTING_SITES, site_id)
}

pub fn accession(accession_id: i64) -> String {
    format!("{}/{}", ACCESSIONS, accession_id)
}

pub fn accession_check_in(accession_id: i64) -> String {
    format!("{}/{}/checkIn", ACCESSIONS, accession_id)
}
