use crate::domain::description::value_objects::DescribeFoodInput;

const UNKNOWN_CATEGORY: &str = "food";

fn category_or_default(input: &DescribeFoodInput) -> &str {
    input.category.as_deref().unwrap_or(UNKNOWN_CATEGORY)
}

pub fn build_description_prompt(input: &DescribeFoodInput) -> String {
    format!(
        "Write a short, nutritionally accurate description of {name} ({category}). \
It contains {content}mg of oxalates per 100g, which puts it in the {level} oxalate category.

Cover:
1. Its overall nutritional value
2. What its oxalate content means for someone on a low-oxalate diet
3. Preparation methods that lower the oxalate content, if any apply
4. One or two key health benefits

Stay factual and keep it under 100 words.",
        name = input.name,
        category = category_or_default(input),
        content = input.oxalate_content,
        level = input.oxalate_level,
    )
}

/// Deterministic text stored when the provider cannot describe a food.
pub fn fallback_description(input: &DescribeFoodInput) -> String {
    format!(
        "{} is a {} with {} oxalate content ({}mg per 100g).",
        input.name,
        category_or_default(input),
        input.oxalate_level,
        input.oxalate_content
    )
}
