//! Category module - fixed topical buckets for claims

use serde::{Deserialize, Serialize};

/// Topical category of a claim
///
/// Assigned by the rule classifier in `claimlens-analysis`, which evaluates
/// its keyword rules in the order the variants are declared here; the first
/// matching rule wins and `General` is the fallback. The display strings
/// (`"Medical/Health"`, `"Climate/Weather"`, ...) are the category names
/// used in reports and serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Studies, research, peer review, experiments
    Scientific,

    /// Health, medicine, treatments, vaccines
    #[serde(rename = "Medical/Health")]
    MedicalHealth,

    /// Government, law, elections, legislation
    Political,

    /// Markets, prices, jobs, taxes
    Economic,

    /// Climate, emissions, weather events
    #[serde(rename = "Climate/Weather")]
    ClimateWeather,

    /// Past events, eras, years and decades
    Historical,

    /// Fallback when no rule matches
    General,
}

impl Category {
    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Scientific => "Scientific",
            Category::MedicalHealth => "Medical/Health",
            Category::Political => "Political",
            Category::Economic => "Economic",
            Category::ClimateWeather => "Climate/Weather",
            Category::Historical => "Historical",
            Category::General => "General",
        }
    }

    /// Parse a category from its display name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Scientific" => Some(Category::Scientific),
            "Medical/Health" => Some(Category::MedicalHealth),
            "Political" => Some(Category::Political),
            "Economic" => Some(Category::Economic),
            "Climate/Weather" => Some(Category::ClimateWeather),
            "Historical" => Some(Category::Historical),
            "General" => Some(Category::General),
            _ => None,
        }
    }

    /// All categories in classifier priority order (`General` last)
    pub fn all() -> [Category; 7] {
        [
            Category::Scientific,
            Category::MedicalHealth,
            Category::Political,
            Category::Economic,
            Category::ClimateWeather,
            Category::Historical,
            Category::General,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
