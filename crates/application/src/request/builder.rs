use ktour_domain::config::ApiConfig;
use ktour_domain::KtourError;

use super::endpoint::Endpoint;

/// Assembles the canonical request URL for an endpoint.
///
/// The canonical URL doubles as the cache key, so parameter order is fixed:
/// credential and client tags first, then the operation parameters in the
/// order the caller supplies them. Building the same request twice yields
/// byte-identical URLs.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: String,
    service_key: String,
    mobile_os: String,
    mobile_app: String,
    response_format: String,
}

impl RequestBuilder {
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            service_key: api.service_key.clone(),
            mobile_os: api.mobile_os.clone(),
            mobile_app: api.mobile_app.clone(),
            response_format: api.response_format.clone(),
        }
    }

    /// Builds the fully-qualified URL. Fails with `InvalidUrl` before any
    /// I/O when the configured base URL cannot start a syntactically valid
    /// URL.
    pub fn build(
        &self,
        endpoint: Endpoint,
        params: &[(&'static str, String)],
    ) -> Result<String, KtourError> {
        validate_base_url(&self.base_url)?;

        let mut query = String::with_capacity(256);
        push_pair_raw(&mut query, "serviceKey", &encode_service_key(&self.service_key));
        push_pair(&mut query, "MobileOS", &self.mobile_os);
        push_pair(&mut query, "MobileApp", &self.mobile_app);
        push_pair(&mut query, "_type", &self.response_format);
        for (name, value) in params {
            push_pair(&mut query, name, value);
        }

        Ok(format!("{}/{}?{}", self.base_url, endpoint.path(), query))
    }
}

/// The service key is issued in decoded form: its alphanumerics are already
/// URL-safe and only `/`, `+`, `=` would break query parsing. Running it
/// through the general encoder instead double-escapes it and the upstream
/// rejects every call with an auth error.
fn encode_service_key(key: &str) -> String {
    key.replace('/', "%2F").replace('+', "%2B").replace('=', "%3D")
}

fn push_pair(query: &mut String, name: &str, value: &str) {
    push_pair_raw(query, name, &urlencoding::encode(value));
}

fn push_pair_raw(query: &mut String, name: &str, encoded_value: &str) {
    if !query.is_empty() {
        query.push('&');
    }
    query.push_str(name);
    query.push('=');
    query.push_str(encoded_value);
}

fn validate_base_url(base: &str) -> Result<(), KtourError> {
    let rest = base
        .strip_prefix("https://")
        .or_else(|| base.strip_prefix("http://"))
        .ok_or_else(|| KtourError::InvalidUrl(base.to_string()))?;

    let host = rest.split('/').next().unwrap_or("");
    if host.is_empty() || base.contains(char::is_whitespace) {
        return Err(KtourError::InvalidUrl(base.to_string()));
    }
    Ok(())
}
