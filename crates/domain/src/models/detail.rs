use chrono::NaiveDateTime;
use serde::Deserialize;

use super::de;
use crate::content_type::ContentTypeId;

/// Common detail record for a single content id. The `homepage` field keeps
/// the raw upstream value, which usually embeds an HTML anchor tag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TourDetail {
    #[serde(rename = "contentid", default, deserialize_with = "de::opt_string")]
    pub content_id: Option<String>,

    #[serde(rename = "contenttypeid", default, deserialize_with = "de::opt_content_type")]
    pub content_type: Option<ContentTypeId>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub addr1: Option<String>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub addr2: Option<String>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub zipcode: Option<String>,

    #[serde(rename = "areacode", default, deserialize_with = "de::opt_string")]
    pub area_code: Option<String>,

    #[serde(rename = "sigungucode", default, deserialize_with = "de::opt_string")]
    pub sigungu_code: Option<String>,

    #[serde(rename = "cat1", default, deserialize_with = "de::opt_string")]
    pub cat1: Option<String>,

    #[serde(rename = "cat2", default, deserialize_with = "de::opt_string")]
    pub cat2: Option<String>,

    #[serde(rename = "cat3", default, deserialize_with = "de::opt_string")]
    pub cat3: Option<String>,

    #[serde(rename = "firstimage", default, deserialize_with = "de::opt_string")]
    pub first_image: Option<String>,

    #[serde(rename = "firstimage2", default, deserialize_with = "de::opt_string")]
    pub first_image2: Option<String>,

    #[serde(rename = "mapx", default, deserialize_with = "de::opt_f64")]
    pub map_x: Option<f64>,

    #[serde(rename = "mapy", default, deserialize_with = "de::opt_f64")]
    pub map_y: Option<f64>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub tel: Option<String>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub homepage: Option<String>,

    #[serde(default, deserialize_with = "de::opt_string")]
    pub overview: Option<String>,

    #[serde(rename = "createdtime", default, deserialize_with = "de::opt_compact_datetime")]
    pub created_time: Option<NaiveDateTime>,

    #[serde(rename = "modifiedtime", default, deserialize_with = "de::opt_compact_datetime")]
    pub modified_time: Option<NaiveDateTime>,
}
