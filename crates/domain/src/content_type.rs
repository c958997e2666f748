use std::fmt;

/// Upstream content classification. The numeric codes are fixed by the
/// open-data contract and appear both in requests (`contentTypeId`) and in
/// decoded items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentTypeId {
    TouristSpot,
    CulturalFacility,
    Festival,
    TravelCourse,
    Leisure,
    Lodging,
    Shopping,
    Restaurant,
}

impl ContentTypeId {
    pub fn code(&self) -> u32 {
        match self {
            ContentTypeId::TouristSpot => 12,
            ContentTypeId::CulturalFacility => 14,
            ContentTypeId::Festival => 15,
            ContentTypeId::TravelCourse => 25,
            ContentTypeId::Leisure => 28,
            ContentTypeId::Lodging => 32,
            ContentTypeId::Shopping => 38,
            ContentTypeId::Restaurant => 39,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            12 => Some(ContentTypeId::TouristSpot),
            14 => Some(ContentTypeId::CulturalFacility),
            15 => Some(ContentTypeId::Festival),
            25 => Some(ContentTypeId::TravelCourse),
            28 => Some(ContentTypeId::Leisure),
            32 => Some(ContentTypeId::Lodging),
            38 => Some(ContentTypeId::Shopping),
            39 => Some(ContentTypeId::Restaurant),
            _ => None,
        }
    }

    /// Korean display name as published by the upstream service.
    pub fn label(&self) -> &'static str {
        match self {
            ContentTypeId::TouristSpot => "관광지",
            ContentTypeId::CulturalFacility => "문화시설",
            ContentTypeId::Festival => "축제공연행사",
            ContentTypeId::TravelCourse => "여행코스",
            ContentTypeId::Leisure => "레포츠",
            ContentTypeId::Lodging => "숙박",
            ContentTypeId::Shopping => "쇼핑",
            ContentTypeId::Restaurant => "음식점",
        }
    }

    /// Default map marker asset for this category.
    pub fn marker(&self) -> &'static str {
        match self {
            ContentTypeId::TouristSpot => "pin_tourist_spot",
            ContentTypeId::CulturalFacility => "pin_cultural",
            ContentTypeId::Festival => "pin_festival",
            ContentTypeId::TravelCourse => "pin_course",
            ContentTypeId::Leisure => "pin_leisure",
            ContentTypeId::Lodging => "pin_lodging",
            ContentTypeId::Shopping => "pin_shopping",
            ContentTypeId::Restaurant => "pin_restaurant",
        }
    }

    pub fn all() -> [ContentTypeId; 8] {
        [
            ContentTypeId::TouristSpot,
            ContentTypeId::CulturalFacility,
            ContentTypeId::Festival,
            ContentTypeId::TravelCourse,
            ContentTypeId::Leisure,
            ContentTypeId::Lodging,
            ContentTypeId::Shopping,
            ContentTypeId::Restaurant,
        ]
    }
}

impl fmt::Display for ContentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
