/// Service operations, addressed by path segment under the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AreaBasedList,
    LocationBasedList,
    SearchKeyword,
    DetailCommon,
    DetailImage,
    AreaCode,
    CategoryCode,
    LdongCode,
    AreaBasedSyncList,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AreaBasedList => "areaBasedList2",
            Endpoint::LocationBasedList => "locationBasedList2",
            Endpoint::SearchKeyword => "searchKeyword2",
            Endpoint::DetailCommon => "detailCommon2",
            Endpoint::DetailImage => "detailImage2",
            Endpoint::AreaCode => "areaCode2",
            Endpoint::CategoryCode => "categoryCode2",
            Endpoint::LdongCode => "ldongCode2",
            Endpoint::AreaBasedSyncList => "areaBasedSyncList2",
        }
    }
}
