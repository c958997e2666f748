use std::fmt;

/// Sort order accepted by the list endpoints. The single-letter codes are
/// the upstream contract; the `WithImage` variants restrict results to
/// entries that carry a thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arrange {
    Title,
    Modified,
    Created,
    #[default]
    TitleWithImage,
    ModifiedWithImage,
    CreatedWithImage,
    /// Only meaningful for location-based lists.
    Distance,
}

impl Arrange {
    pub fn code(&self) -> &'static str {
        match self {
            Arrange::Title => "A",
            Arrange::Modified => "C",
            Arrange::Created => "D",
            Arrange::TitleWithImage => "O",
            Arrange::ModifiedWithImage => "Q",
            Arrange::CreatedWithImage => "R",
            Arrange::Distance => "E",
        }
    }
}

impl fmt::Display for Arrange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
