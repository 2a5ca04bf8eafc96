use crate::{
    domain::{
        common::{OxaLensConfig, entities::app_errors::CoreError, services::Service},
        description::services::LLMDescriptionProvider,
        food::{ports::FoodService, seed::initial_foods},
    },
    infrastructure::{
        food::InMemoryFoodRepository, llm::ConfiguredLLMClient, user::InMemoryUserRepository,
    },
};

pub type OxaLensService = Service<
    InMemoryFoodRepository,
    InMemoryUserRepository,
    LLMDescriptionProvider<ConfiguredLLMClient>,
>;

/// Builds the service and seeds the food store before returning it.
pub async fn create_service(config: OxaLensConfig) -> Result<OxaLensService, CoreError> {
    let llm_client = ConfiguredLLMClient::from_config(&config.llm)?;
    let description_provider = LLMDescriptionProvider::new(llm_client, config.llm.max_tokens);

    let service = Service::new(
        InMemoryFoodRepository::new(),
        InMemoryUserRepository::new(),
        description_provider,
    );

    service.seed_foods(initial_foods()).await?;

    Ok(service)
}
