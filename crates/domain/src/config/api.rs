use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the tourism service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Decoded service credential issued by the data portal. Required for
    /// every call; `KtourConfig::validate` rejects an empty value.
    #[serde(default)]
    pub service_key: String,

    #[serde(default = "default_mobile_os")]
    pub mobile_os: String,

    #[serde(default = "default_mobile_app")]
    pub mobile_app: String,

    #[serde(default = "default_response_format")]
    pub response_format: String,

    /// Rows per page when a caller does not ask for a specific size.
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            service_key: String::new(),
            mobile_os: default_mobile_os(),
            mobile_app: default_mobile_app(),
            response_format: default_response_format(),
            default_page_size: default_page_size(),
        }
    }
}

fn default_base_url() -> String {
    "https://apis.data.go.kr/B551011/KorService2".to_string()
}

fn default_mobile_os() -> String {
    "ETC".to_string()
}

fn default_mobile_app() -> String {
    "ktour".to_string()
}

fn default_response_format() -> String {
    "json".to_string()
}

fn default_page_size() -> u32 {
    10
}
