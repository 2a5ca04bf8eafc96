use crate::domain::food::entities::OxalateLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeFoodInput {
    pub name: String,
    pub category: Option<String>,
    pub oxalate_level: OxalateLevel,
    /// mg per 100g
    pub oxalate_content: u32,
}
