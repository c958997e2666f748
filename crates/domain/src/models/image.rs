use serde::Deserialize;

use super::de;

/// One gallery image for a content id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TourImage {
    #[serde(rename = "contentid", default, deserialize_with = "de::opt_string")]
    pub content_id: Option<String>,

    #[serde(rename = "originimgurl", default, deserialize_with = "de::opt_string")]
    pub origin_image_url: Option<String>,

    #[serde(rename = "smallimageurl", default, deserialize_with = "de::opt_string")]
    pub small_image_url: Option<String>,

    #[serde(rename = "imgname", default, deserialize_with = "de::opt_string")]
    pub image_name: Option<String>,

    #[serde(rename = "serialnum", default, deserialize_with = "de::opt_string")]
    pub serial_num: Option<String>,
}
