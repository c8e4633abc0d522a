//! Editable recipe payload stored in every version snapshot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Brewing method category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeType {
    /// Hand pour-over (V60, Kalita, Chemex).
    #[default]
    Pourover,
    /// Pressure extraction.
    Espresso,
    /// Full immersion (French press, AeroPress, Clever).
    Immersion,
    /// Cold brew.
    ColdBrew,
    /// Anything else.
    Other,
}

/// Water temperature unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

/// References to equipment records owned by other services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRefs {
    #[serde(default)]
    pub brewer_id: Option<Uuid>,
    #[serde(default)]
    pub grinder_id: Option<Uuid>,
    #[serde(default)]
    pub extra_gear_ids: Vec<Uuid>,
}

/// Grind setting. `steps` is the grinder-specific click count; `microns`
/// and `setting` are optional finer descriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GrindSize {
    #[validate(range(min = 0.0, message = "Grind steps must not be negative"))]
    pub steps: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Grind microns must not be negative"))]
    pub microns: Option<f64>,
    #[serde(default)]
    pub setting: Option<String>,
}

/// One step of the brew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BrewStep {
    #[validate(length(min = 1, max = 500, message = "Step description must be 1-500 characters"))]
    pub description: String,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Step water amount must not be negative"))]
    pub water_amount: Option<f64>,
}

/// Sensory evaluation, each score on a 1-5 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TastingNotes {
    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub acidity: Option<u8>,
    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub sweetness: Option<u8>,
    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub body: Option<u8>,
    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub finish: Option<u8>,
    #[serde(default)]
    #[validate(range(min = 1, max = 5))]
    pub overall: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// The full editable content of a recipe at one version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecipeData {
    #[validate(length(min = 1, max = 200, message = "Recipe name must be 1-200 characters"))]
    pub name: String,
    #[serde(default)]
    pub recipe_type: RecipeType,
    #[serde(default)]
    pub equipment: EquipmentRefs,
    #[serde(default)]
    pub coffee_bean_id: Option<Uuid>,
    #[validate(range(min = 0.0, message = "Coffee amount must not be negative"))]
    pub coffee_amount: f64,
    #[serde(default)]
    #[validate(nested)]
    pub grind_size: GrindSize,
    #[validate(range(min = 0.0, max = 212.0, message = "Water temperature out of range"))]
    pub water_temperature: f64,
    #[serde(default)]
    pub water_temperature_unit: TemperatureUnit,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Flow rate must not be negative"))]
    pub flow_rate: Option<f64>,
    #[serde(default)]
    #[validate(nested)]
    pub steps: Vec<BrewStep>,
    #[serde(default)]
    #[validate(nested)]
    pub tasting_notes: TastingNotes,
    #[serde(default)]
    pub journal: Option<String>,
}

impl RecipeData {
    /// Minimal recipe with the given name and dose. Everything else takes
    /// its default.
    pub fn new(name: impl Into<String>, coffee_amount: f64) -> Self {
        Self {
            name: name.into(),
            recipe_type: RecipeType::default(),
            equipment: EquipmentRefs::default(),
            coffee_bean_id: None,
            coffee_amount,
            grind_size: GrindSize::default(),
            water_temperature: 93.0,
            water_temperature_unit: TemperatureUnit::default(),
            flow_rate: None,
            steps: Vec::new(),
            tasting_notes: TastingNotes::default(),
            journal: None,
        }
    }
}
