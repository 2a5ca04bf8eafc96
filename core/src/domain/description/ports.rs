use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, description::value_objects::DescribeFoodInput,
};

/// Produces the human-readable blurb stored on a food. Failures are returned
/// as errors; substituting a fallback is the caller's job.
#[cfg_attr(test, mockall::automock)]
pub trait DescriptionProvider: Send + Sync {
    fn describe(
        &self,
        input: DescribeFoodInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(
        &self,
        prompt: String,
        max_tokens: u32,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
