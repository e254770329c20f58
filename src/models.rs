use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Whether an activity adds calories (food) or spends them (exercise).
///
/// Serialized as its numeric code so that form posts and JSON share one
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    #[default]
    Food,
    Exercise,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Food, Category::Exercise];

    pub fn code(self) -> u8 {
        match self {
            Category::Food => 1,
            Category::Exercise => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Exercise => "Exercise",
        }
    }
}

impl TryFrom<u8> for Category {
    type Error = UnknownCategory;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Category::Food),
            2 => Ok(Category::Exercise),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Parses the code as posted by the category select, e.g. `"2"`.
impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u8>()
            .map_err(|_| UnknownCategory(raw.to_string()))
            .and_then(Category::try_from)
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.code()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category code {}, expected 1 (food) or 2 (exercise)", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub calories: u32,
}

/// Everything the store owns. Also the on-disk snapshot shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityState {
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub active_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveActivityRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub category: Category,
    pub name: String,
    pub calories: u32,
}

#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub id: String,
}

/// Raw fields posted by the HTML form, before coercion.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub calories: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub date: String,
    pub consumed: u64,
    pub burned: u64,
    pub net: i64,
    pub food_entries: usize,
    pub exercise_entries: usize,
}
