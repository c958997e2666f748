use serde::Deserialize;

use super::de;

/// One row of a code-table lookup (area, category, or legal-district).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeEntry {
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub rnum: Option<u32>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub name: Option<String>,
}
