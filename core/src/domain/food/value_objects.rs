use std::str::FromStr;

use crate::domain::{common::entities::app_errors::CoreError, food::entities::OxalateLevel};

/// Level restriction applied to a search. `All` keeps every match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelFilter {
    #[default]
    All,
    Only(OxalateLevel),
}

impl LevelFilter {
    pub fn accepts(&self, level: OxalateLevel) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(expected) => *expected == level,
        }
    }
}

impl FromStr for LevelFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(LevelFilter::All),
            other => other
                .parse::<OxalateLevel>()
                .map(LevelFilter::Only)
                .map_err(|_| CoreError::Invalid(format!("unknown filter '{other}'"))),
        }
    }
}

/// A validated search request. The query is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    query: String,
    filter: LevelFilter,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, filter: LevelFilter) -> Result<Self, CoreError> {
        let query = query.into();
        if query.is_empty() {
            return Err(CoreError::Invalid("query must not be empty".to_string()));
        }

        Ok(Self { query, filter })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> LevelFilter {
        self.filter
    }
}

pub struct GetFoodInput {
    pub food_id: i32,
}

pub struct SuggestFoodsInput {
    pub query: String,
}

/// A seed entry before its description has been generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedFood {
    pub name: String,
    pub category: String,
    pub oxalate_content: u32,
    pub oxalate_level: OxalateLevel,
    pub serving_size: Option<String>,
    pub alternative_tip: Option<String>,
}
