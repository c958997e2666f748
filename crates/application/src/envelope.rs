//! Decode and validate the upstream response envelope.
//!
//! Every endpoint answers with the same wrapper:
//! `{ response: { header: { resultCode, resultMsg }, body: { items: { item:
//! [...] }, numOfRows, pageNo, totalCount } } }`. The header may be missing,
//! `items` degrades to an empty string when there are no rows, and the
//! pagination numbers come as strings or numbers. `resultCode` other than
//! "0000" means the service itself failed the call regardless of the HTTP
//! status.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use ktour_domain::models::de;
use ktour_domain::{KtourError, Page};

const SUCCESS_CODE: &str = "0000";

const DEFAULT_PAGE_NO: u32 = 1;
const DEFAULT_NUM_OF_ROWS: u32 = 10;

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Envelope<T> {
    response: Option<Response<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Response<T> {
    #[serde(default)]
    header: Option<Header>,
    #[serde(default)]
    body: Option<Body<T>>,
}

#[derive(Debug, Deserialize)]
struct Header {
    #[serde(rename = "resultCode", default, deserialize_with = "de::opt_string")]
    result_code: Option<String>,

    #[serde(rename = "resultMsg", default, deserialize_with = "de::opt_string")]
    result_msg: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Body<T> {
    #[serde(default)]
    items: ItemsField<T>,

    #[serde(rename = "numOfRows", default, deserialize_with = "de::opt_u32")]
    num_of_rows: Option<u32>,

    #[serde(rename = "pageNo", default, deserialize_with = "de::opt_u32")]
    page_no: Option<u32>,

    #[serde(rename = "totalCount", default, deserialize_with = "de::opt_u32")]
    total_count: Option<u32>,
}

impl<T> Default for Body<T> {
    fn default() -> Self {
        Self {
            items: ItemsField(Vec::new()),
            num_of_rows: None,
            page_no: None,
            total_count: None,
        }
    }
}

/// The `items` wrapper: `{ "item": [...] }` normally, `{ "item": {...} }`
/// for a single row, and a bare `""` when the result set is empty.
#[derive(Debug)]
struct ItemsField<T>(Vec<T>);

impl<T> Default for ItemsField<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T> Deserialize<'de> for ItemsField<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let rows = match value {
            Value::Object(mut map) => match map.remove("item") {
                Some(Value::Array(entries)) => entries
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<Result<Vec<T>, _>>()
                    .map_err(serde::de::Error::custom)?,
                Some(entry @ Value::Object(_)) => {
                    vec![serde_json::from_value(entry).map_err(serde::de::Error::custom)?]
                }
                _ => Vec::new(),
            },
            // Empty string, null, or any other scalar: no rows.
            _ => Vec::new(),
        };
        Ok(Self(rows))
    }
}

/// Decodes `bytes` into a typed page, enforcing the result-code contract.
///
/// Errors: `Decode` for malformed JSON or a missing envelope, `Api` when the
/// header reports a non-success code. Pagination numbers absent from the
/// body default to page 1, 10 rows, 0 total.
pub fn decode_page<T>(bytes: &[u8]) -> Result<Page<T>, KtourError>
where
    T: DeserializeOwned,
{
    let envelope: Envelope<T> =
        serde_json::from_slice(bytes).map_err(|e| KtourError::Decode(e.to_string()))?;

    let response = envelope
        .response
        .ok_or_else(|| KtourError::Decode("missing response envelope".to_string()))?;

    if let Some(header) = &response.header {
        if let Some(code) = &header.result_code {
            if code != SUCCESS_CODE {
                return Err(KtourError::Api {
                    code: code.clone(),
                    message: header.result_msg.clone().unwrap_or_default(),
                });
            }
        }
    }

    let body = response.body.unwrap_or_default();
    Ok(Page {
        items: body.items.0,
        page_no: body.page_no.unwrap_or(DEFAULT_PAGE_NO),
        num_of_rows: body.num_of_rows.unwrap_or(DEFAULT_NUM_OF_ROWS),
        total_count: body.total_count.unwrap_or(0),
    })
}
