//! Typed parameters for the public client operations.
//!
//! Every cacheable operation carries a `use_cache` flag that defaults to on;
//! builders follow the `with_*` convention and plain fields stay public so
//! callers can also fill structs directly.

use chrono::NaiveDate;
use ktour_domain::{Arrange, ContentTypeId};

/// Paging shared by the list operations. `rows = None` falls back to the
/// configured default page size.
#[derive(Debug, Clone, Copy)]
pub struct Paging {
    /// 1-based page number.
    pub page: u32,
    pub rows: Option<u32>,
}

impl Paging {
    pub fn page(page: u32) -> Self {
        Self { page, rows: None }
    }

    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self { page: 1, rows: None }
    }
}

/// Area-based list: browse one content type, optionally narrowed by region
/// and category codes.
#[derive(Debug, Clone)]
pub struct AreaListParams {
    pub content_type: ContentTypeId,
    pub area_code: Option<String>,
    pub sigungu_code: Option<String>,
    pub cat1: Option<String>,
    pub cat2: Option<String>,
    pub cat3: Option<String>,
    pub keyword: Option<String>,
    pub arrange: Arrange,
    pub paging: Paging,
    pub use_cache: bool,
}

impl AreaListParams {
    pub fn new(content_type: ContentTypeId) -> Self {
        Self {
            content_type,
            area_code: None,
            sigungu_code: None,
            cat1: None,
            cat2: None,
            cat3: None,
            keyword: None,
            arrange: Arrange::default(),
            paging: Paging::default(),
            use_cache: true,
        }
    }

    pub fn with_area(mut self, area_code: impl Into<String>) -> Self {
        self.area_code = Some(area_code.into());
        self
    }

    pub fn with_sigungu(mut self, sigungu_code: impl Into<String>) -> Self {
        self.sigungu_code = Some(sigungu_code.into());
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_arrange(mut self, arrange: Arrange) -> Self {
        self.arrange = arrange;
        self
    }

    pub fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    pub fn skip_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}

/// Location-based list: everything within `radius_m` meters of a point.
#[derive(Debug, Clone)]
pub struct LocationListParams {
    /// Longitude (WGS84).
    pub map_x: f64,
    /// Latitude (WGS84).
    pub map_y: f64,
    /// Search radius in meters; the upstream caps this at 20km.
    pub radius_m: u32,
    pub content_type: Option<ContentTypeId>,
    pub arrange: Arrange,
    pub paging: Paging,
    pub use_cache: bool,
}

impl LocationListParams {
    pub fn new(map_x: f64, map_y: f64, radius_m: u32) -> Self {
        Self {
            map_x,
            map_y,
            radius_m,
            content_type: None,
            arrange: Arrange::Distance,
            paging: Paging::default(),
            use_cache: true,
        }
    }

    pub fn with_content_type(mut self, content_type: ContentTypeId) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    pub fn skip_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}

/// Free-text search. `keyword` must be non-empty; the client rejects an
/// empty or all-whitespace keyword before any I/O.
#[derive(Debug, Clone)]
pub struct KeywordSearchParams {
    pub keyword: String,
    pub area_code: Option<String>,
    pub content_type: ContentTypeId,
    pub arrange: Arrange,
    pub paging: Paging,
    pub use_cache: bool,
}

impl KeywordSearchParams {
    pub fn new(keyword: impl Into<String>, content_type: ContentTypeId) -> Self {
        Self {
            keyword: keyword.into(),
            area_code: None,
            content_type,
            arrange: Arrange::default(),
            paging: Paging::default(),
            use_cache: true,
        }
    }

    pub fn with_area(mut self, area_code: impl Into<String>) -> Self {
        self.area_code = Some(area_code.into());
        self
    }

    pub fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    pub fn skip_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}

/// Common-detail lookup for one content id.
#[derive(Debug, Clone)]
pub struct DetailParams {
    pub content_id: String,
    pub content_type: ContentTypeId,
    pub use_cache: bool,
}

impl DetailParams {
    pub fn new(content_id: impl Into<String>, content_type: ContentTypeId) -> Self {
        Self {
            content_id: content_id.into(),
            content_type,
            use_cache: true,
        }
    }

    pub fn skip_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}

/// Image gallery lookup for one content id.
#[derive(Debug, Clone)]
pub struct ImageParams {
    pub content_id: String,
    pub content_type: ContentTypeId,
    pub use_cache: bool,
}

impl ImageParams {
    pub fn new(content_id: impl Into<String>, content_type: ContentTypeId) -> Self {
        Self {
            content_id: content_id.into(),
            content_type,
            use_cache: true,
        }
    }

    pub fn skip_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }
}

/// Area code table; `parent` narrows to the districts of one area.
#[derive(Debug, Clone)]
pub struct AreaCodeParams {
    pub parent: Option<String>,
    pub paging: Paging,
    pub use_cache: bool,
}

impl Default for AreaCodeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl AreaCodeParams {
    pub fn new() -> Self {
        Self {
            parent: None,
            paging: Paging::default(),
            use_cache: true,
        }
    }

    pub fn with_parent(mut self, area_code: impl Into<String>) -> Self {
        self.parent = Some(area_code.into());
        self
    }
}

/// Category classification table, narrowed stepwise by content type and the
/// upper category levels.
#[derive(Debug, Clone)]
pub struct CategoryCodeParams {
    pub content_type: Option<ContentTypeId>,
    pub cat1: Option<String>,
    pub cat2: Option<String>,
    pub paging: Paging,
    pub use_cache: bool,
}

impl Default for CategoryCodeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryCodeParams {
    pub fn new() -> Self {
        Self {
            content_type: None,
            cat1: None,
            cat2: None,
            paging: Paging::default(),
            use_cache: true,
        }
    }

    pub fn with_content_type(mut self, content_type: ContentTypeId) -> Self {
        self.content_type = Some(content_type);
        self
    }
}

/// Legal-district (beopjeongdong) code table.
#[derive(Debug, Clone)]
pub struct LdongCodeParams {
    pub region: Option<String>,
    pub paging: Paging,
    pub use_cache: bool,
}

impl Default for LdongCodeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl LdongCodeParams {
    pub fn new() -> Self {
        Self {
            region: None,
            paging: Paging::default(),
            use_cache: true,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Change-feed query. This operation always goes to the network; there is
/// deliberately no cache flag here.
#[derive(Debug, Clone)]
pub struct SyncListParams {
    /// Watermark date of the last successful sync; sent as `modifiedtime`.
    pub sync_date: NaiveDate,
    pub area_code: Option<String>,
    pub content_type: Option<ContentTypeId>,
    /// Finer-grained override of `sync_date`; takes precedence on the wire
    /// when set.
    pub modified_since: Option<NaiveDate>,
    pub paging: Paging,
}

impl SyncListParams {
    pub fn new(sync_date: NaiveDate) -> Self {
        Self {
            sync_date,
            area_code: None,
            content_type: None,
            modified_since: None,
            paging: Paging::default(),
        }
    }

    pub fn with_area(mut self, area_code: impl Into<String>) -> Self {
        self.area_code = Some(area_code.into());
        self
    }

    pub fn with_content_type(mut self, content_type: ContentTypeId) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }
}
