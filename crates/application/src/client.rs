use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use ktour_domain::config::ApiConfig;
use ktour_domain::{CodeEntry, KtourError, Page, TourDetail, TourImage, TourItem};

use crate::envelope;
use crate::params::{
    AreaCodeParams, AreaListParams, CategoryCodeParams, DetailParams, ImageParams,
    KeywordSearchParams, LdongCodeParams, LocationListParams, Paging, SyncListParams,
};
use crate::ports::{ResponseCache, TourTransport};
use crate::request::{Endpoint, RequestBuilder};

/// Upstream documented maximum for location searches.
const MAX_RADIUS_M: u32 = 20_000;

/// Public face of the client. Every operation builds a canonical URL,
/// consults the response cache when allowed, fetches through the transport,
/// validates, and caches only validated payloads.
///
/// Operations are independent async units: concurrent calls for the same
/// key may both fetch (there is no single-flight guard), which is harmless
/// for this read-mostly upstream.
pub struct TourDataClient {
    builder: RequestBuilder,
    transport: Arc<dyn TourTransport>,
    cache: Arc<dyn ResponseCache>,
    default_page_size: u32,
}

impl TourDataClient {
    pub fn new(
        api: &ApiConfig,
        transport: Arc<dyn TourTransport>,
        cache: Arc<dyn ResponseCache>,
    ) -> Self {
        Self {
            builder: RequestBuilder::new(api),
            transport,
            cache,
            default_page_size: api.default_page_size,
        }
    }

    #[instrument(skip(self))]
    pub async fn list_by_area(
        &self,
        params: AreaListParams,
    ) -> Result<Page<TourItem>, KtourError> {
        let mut query = self.paged(&params.paging);
        query.push(("arrange", params.arrange.code().to_string()));
        query.push(("contentTypeId", params.content_type.to_string()));
        push_opt(&mut query, "areaCode", params.area_code.as_deref());
        push_opt(&mut query, "sigunguCode", params.sigungu_code.as_deref());
        push_opt(&mut query, "cat1", params.cat1.as_deref());
        push_opt(&mut query, "cat2", params.cat2.as_deref());
        push_opt(&mut query, "cat3", params.cat3.as_deref());
        push_opt(&mut query, "keyword", params.keyword.as_deref());

        self.fetch_page(Endpoint::AreaBasedList, &query, params.use_cache)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_by_location(
        &self,
        params: LocationListParams,
    ) -> Result<Page<TourItem>, KtourError> {
        if params.radius_m == 0 || params.radius_m > MAX_RADIUS_M {
            return Err(KtourError::InvalidParameter(format!(
                "radius must be between 1 and {} meters, got {}",
                MAX_RADIUS_M, params.radius_m
            )));
        }

        let mut query = self.paged(&params.paging);
        query.push(("arrange", params.arrange.code().to_string()));
        query.push(("mapX", params.map_x.to_string()));
        query.push(("mapY", params.map_y.to_string()));
        query.push(("radius", params.radius_m.to_string()));
        if let Some(content_type) = params.content_type {
            query.push(("contentTypeId", content_type.to_string()));
        }

        self.fetch_page(Endpoint::LocationBasedList, &query, params.use_cache)
            .await
    }

    /// Fails fast with `InvalidParameter` on an empty keyword; no I/O is
    /// attempted in that case.
    #[instrument(skip(self))]
    pub async fn search_by_keyword(
        &self,
        params: KeywordSearchParams,
    ) -> Result<Page<TourItem>, KtourError> {
        let keyword = params.keyword.trim();
        if keyword.is_empty() {
            return Err(KtourError::InvalidParameter(
                "keyword must not be empty".to_string(),
            ));
        }

        let mut query = self.paged(&params.paging);
        query.push(("arrange", params.arrange.code().to_string()));
        query.push(("contentTypeId", params.content_type.to_string()));
        query.push(("keyword", keyword.to_string()));
        push_opt(&mut query, "areaCode", params.area_code.as_deref());

        self.fetch_page(Endpoint::SearchKeyword, &query, params.use_cache)
            .await
    }

    /// Common detail for one content id; absent when the upstream returns
    /// an empty list for it.
    #[instrument(skip(self))]
    pub async fn fetch_detail(
        &self,
        params: DetailParams,
    ) -> Result<Option<TourDetail>, KtourError> {
        let query = vec![
            ("contentId", params.content_id.clone()),
            ("contentTypeId", params.content_type.to_string()),
        ];

        let page = self
            .fetch_page::<TourDetail>(Endpoint::DetailCommon, &query, params.use_cache)
            .await?;
        Ok(page.items.into_iter().next())
    }

    #[instrument(skip(self))]
    pub async fn fetch_images(&self, params: ImageParams) -> Result<Vec<TourImage>, KtourError> {
        let query = vec![
            ("contentId", params.content_id.clone()),
            ("contentTypeId", params.content_type.to_string()),
            // Content gallery only; the alternative flag selects food menus.
            ("imageYN", "Y".to_string()),
        ];

        let page = self
            .fetch_page::<TourImage>(Endpoint::DetailImage, &query, params.use_cache)
            .await?;
        Ok(page.items)
    }

    #[instrument(skip(self))]
    pub async fn area_codes(&self, params: AreaCodeParams) -> Result<Page<CodeEntry>, KtourError> {
        let mut query = self.paged(&params.paging);
        push_opt(&mut query, "areaCode", params.parent.as_deref());

        self.fetch_page(Endpoint::AreaCode, &query, params.use_cache)
            .await
    }

    #[instrument(skip(self))]
    pub async fn category_codes(
        &self,
        params: CategoryCodeParams,
    ) -> Result<Page<CodeEntry>, KtourError> {
        let mut query = self.paged(&params.paging);
        if let Some(content_type) = params.content_type {
            query.push(("contentTypeId", content_type.to_string()));
        }
        push_opt(&mut query, "cat1", params.cat1.as_deref());
        push_opt(&mut query, "cat2", params.cat2.as_deref());

        self.fetch_page(Endpoint::CategoryCode, &query, params.use_cache)
            .await
    }

    #[instrument(skip(self))]
    pub async fn ldong_codes(
        &self,
        params: LdongCodeParams,
    ) -> Result<Page<CodeEntry>, KtourError> {
        let mut query = self.paged(&params.paging);
        push_opt(&mut query, "lDongRegnCd", params.region.as_deref());

        self.fetch_page(Endpoint::LdongCode, &query, params.use_cache)
            .await
    }

    /// Change feed of created/modified/withdrawn content since a sync date.
    /// Always fetched fresh: a feed is not a stable resource, so this
    /// operation never reads or writes the cache.
    #[instrument(skip(self))]
    pub async fn sync_list(&self, params: SyncListParams) -> Result<Page<TourItem>, KtourError> {
        let watermark = params.modified_since.unwrap_or(params.sync_date);

        let mut query = self.paged(&params.paging);
        query.push(("showflag", "1".to_string()));
        query.push(("modifiedtime", watermark.format("%Y%m%d").to_string()));
        push_opt(&mut query, "areaCode", params.area_code.as_deref());
        if let Some(content_type) = params.content_type {
            query.push(("contentTypeId", content_type.to_string()));
        }

        self.fetch_page(Endpoint::AreaBasedSyncList, &query, false)
            .await
    }

    /// Shared fetch path for every operation:
    ///
    /// 1. canonical URL, which doubles as the cache key
    /// 2. cache consult when enabled; an undecodable cached payload counts
    ///    as a miss, never as an error
    /// 3. transport fetch (the retry loop lives below this seam)
    /// 4. status check, then decode plus result-code validation
    /// 5. only a fully validated payload is written back to the cache
    async fn fetch_page<T>(
        &self,
        endpoint: Endpoint,
        params: &[(&'static str, String)],
        use_cache: bool,
    ) -> Result<Page<T>, KtourError>
    where
        T: DeserializeOwned,
    {
        let url = self.builder.build(endpoint, params)?;

        if use_cache {
            if let Some(cached) = self.cache.get(&url).await {
                match envelope::decode_page::<T>(&cached) {
                    Ok(page) => {
                        debug!(url = %url, rows = page.len(), "cache hit");
                        return Ok(page);
                    }
                    Err(e) => {
                        warn!(url = %url, error = %e, "cached payload no longer decodes, refetching");
                    }
                }
            }
        }

        let reply = self.transport.fetch(&url).await?;
        if !reply.is_success() {
            return Err(KtourError::Http(reply.status));
        }

        let page = envelope::decode_page::<T>(&reply.body)?;

        if use_cache {
            self.cache.put(&url, reply.body).await;
        }

        Ok(page)
    }

    fn paged(&self, paging: &Paging) -> Vec<(&'static str, String)> {
        vec![
            ("pageNo", paging.page.max(1).to_string()),
            (
                "numOfRows",
                paging.rows.unwrap_or(self.default_page_size).to_string(),
            ),
        ]
    }
}

fn push_opt(query: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            query.push((name, value.to_string()));
        }
    }
}
