//! Recipe aggregate and editable recipe data.

pub mod data;
pub mod model;
pub mod view;

pub use data::{
    BrewStep, EquipmentRefs, GrindSize, RecipeData, RecipeType, TastingNotes, TemperatureUnit,
};
pub use model::Recipe;
pub use view::{RecipeView, VersionInfo};
