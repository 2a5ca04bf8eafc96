use std::borrow::Cow;

use oxalens_core::domain::{
    common::entities::app_errors::CoreError,
    food::value_objects::{LevelFilter, SearchQuery},
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchFoodsParams {
    #[param(example = "spinach")]
    #[validate(
        required(message = "query is required"),
        length(min = 1, message = "query must contain at least 1 character")
    )]
    pub query: Option<String>,

    /// One of `all`, `low`, `medium`, `high`. Defaults to `all`.
    #[param(example = "all")]
    #[validate(custom(function = "validate_level_filter"))]
    pub filter: Option<String>,
}

impl SearchFoodsParams {
    pub fn to_search_query(&self) -> Result<SearchQuery, CoreError> {
        let filter = match self.filter.as_deref() {
            None | Some("") => LevelFilter::All,
            Some(value) => value.parse()?,
        };

        SearchQuery::new(self.query.clone().unwrap_or_default(), filter)
    }
}

fn validate_level_filter(filter: &str) -> Result<(), ValidationError> {
    if filter.is_empty() || filter.parse::<LevelFilter>().is_ok() {
        return Ok(());
    }

    Err(ValidationError::new("invalid_filter").with_message(Cow::from(
        "filter must be one of all, low, medium, high",
    )))
}

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestFoodsParams {
    #[param(example = "sp")]
    pub query: Option<String>,
}
