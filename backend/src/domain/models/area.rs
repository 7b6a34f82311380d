use shared::{DevelopmentArea, ALL_AREAS};

/// Area selection coming from the presentation layer.
///
/// Parsing never fails: any value that is not exactly `all` or an area name
/// becomes `Unknown`, which matches no task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AreaFilter {
    #[default]
    All,
    Area(DevelopmentArea),
    Unknown(String),
}

impl AreaFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_AREAS {
            return AreaFilter::All;
        }
        match value.parse::<DevelopmentArea>() {
            Ok(area) => AreaFilter::Area(area),
            Err(_) => AreaFilter::Unknown(value.to_string()),
        }
    }

    /// Value as it appears in queries
    pub fn as_str(&self) -> &str {
        match self {
            AreaFilter::All => ALL_AREAS,
            AreaFilter::Area(area) => area.as_str(),
            AreaFilter::Unknown(value) => value,
        }
    }

    /// Label shown on the area tab
    pub fn label(&self) -> &str {
        match self {
            AreaFilter::All => "All Areas",
            AreaFilter::Area(area) => area.label(),
            AreaFilter::Unknown(value) => value,
        }
    }

    pub fn matches(&self, area: DevelopmentArea) -> bool {
        match self {
            AreaFilter::All => true,
            AreaFilter::Area(selected) => *selected == area,
            AreaFilter::Unknown(_) => false,
        }
    }
}

impl From<DevelopmentArea> for AreaFilter {
    fn from(area: DevelopmentArea) -> Self {
        AreaFilter::Area(area)
    }
}
