use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_SERVING_SIZE: &str = "100g (raw)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OxalateLevel {
    Low,
    Medium,
    High,
}

impl OxalateLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OxalateLevel::Low => "low",
            OxalateLevel::Medium => "medium",
            OxalateLevel::High => "high",
        }
    }
}

impl fmt::Display for OxalateLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OxalateLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(OxalateLevel::Low),
            "medium" => Ok(OxalateLevel::Medium),
            "high" => Ok(OxalateLevel::High),
            other => Err(CoreError::Invalid(format!("unknown oxalate level '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    /// mg per 100g
    pub oxalate_content: u32,
    pub oxalate_level: OxalateLevel,
    pub serving_size: String,
    pub alternative_tip: Option<String>,
    pub description: Option<String>,
}

impl Food {
    pub fn from_new(id: i32, new_food: NewFood) -> Self {
        Self {
            id,
            name: new_food.name,
            category: new_food.category,
            oxalate_content: new_food.oxalate_content,
            oxalate_level: new_food.oxalate_level,
            serving_size: new_food
                .serving_size
                .unwrap_or_else(|| DEFAULT_SERVING_SIZE.to_string()),
            alternative_tip: new_food.alternative_tip,
            description: new_food.description,
        }
    }
}

/// Insert payload for the food store. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFood {
    pub name: String,
    pub category: Option<String>,
    pub oxalate_content: u32,
    pub oxalate_level: OxalateLevel,
    pub serving_size: Option<String>,
    pub alternative_tip: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FoodSuggestion {
    pub id: i32,
    pub name: String,
}

impl From<&Food> for FoodSuggestion {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id,
            name: food.name.clone(),
        }
    }
}
