//! Field-level change detection between two recipe states.

use serde::Serialize;
use serde_json::Value;

use brewhub_entity::recipe::RecipeData;
use brewhub_entity::version::ChangeRecord;

/// Compare `old` and `new` over the tracked fields and describe every
/// difference. Identical inputs yield an empty list.
pub fn diff(old: &RecipeData, new: &RecipeData) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();

    if old.name != new.name {
        changes.push(record(
            "name",
            &old.name,
            &new.name,
            format!("Renamed from \"{}\" to \"{}\"", old.name, new.name),
        ));
    }

    if !same_f64(old.coffee_amount, new.coffee_amount) {
        changes.push(record(
            "coffeeAmount",
            &old.coffee_amount,
            &new.coffee_amount,
            format!(
                "Changed coffee amount from {}g to {}g",
                old.coffee_amount, new.coffee_amount
            ),
        ));
    }

    if !same_grind(old, new) {
        let description = if same_f64(old.grind_size.steps, new.grind_size.steps) {
            "Modified grind settings".to_string()
        } else {
            format!(
                "Changed grind size from {} to {} steps",
                old.grind_size.steps, new.grind_size.steps
            )
        };
        changes.push(record(
            "grindSize",
            &old.grind_size,
            &new.grind_size,
            description,
        ));
    }

    if !same_f64(old.water_temperature, new.water_temperature) {
        changes.push(record(
            "waterTemperature",
            &old.water_temperature,
            &new.water_temperature,
            format!(
                "Changed water temperature from {}° to {}°",
                old.water_temperature, new.water_temperature
            ),
        ));
    }

    if old.water_temperature_unit != new.water_temperature_unit {
        changes.push(updated(
            "waterTemperatureUnit",
            &old.water_temperature_unit,
            &new.water_temperature_unit,
        ));
    }

    let flow_rate_same = match (old.flow_rate, new.flow_rate) {
        (Some(a), Some(b)) => same_f64(a, b),
        (a, b) => a.is_none() && b.is_none(),
    };
    if !flow_rate_same {
        changes.push(updated("flowRate", &old.flow_rate, &new.flow_rate));
    }

    if old.steps != new.steps {
        changes.push(record(
            "steps",
            &old.steps,
            &new.steps,
            "Modified brewing steps".to_string(),
        ));
    }

    if old.tasting_notes != new.tasting_notes {
        changes.push(record(
            "tastingNotes",
            &old.tasting_notes,
            &new.tasting_notes,
            "Updated tasting notes".to_string(),
        ));
    }

    if old.journal != new.journal {
        changes.push(updated("journal", &old.journal, &new.journal));
    }

    changes
}

fn record<T: Serialize>(field: &str, old: &T, new: &T, description: String) -> ChangeRecord {
    ChangeRecord {
        field: field.to_string(),
        old_value: to_value(old),
        new_value: to_value(new),
        description,
    }
}

fn updated<T: Serialize>(field: &str, old: &T, new: &T) -> ChangeRecord {
    record(field, old, new, format!("Updated {field}"))
}

fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Float equality that treats two NaNs as equal, keeping `diff(x, x)` empty.
fn same_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn same_grind(old: &RecipeData, new: &RecipeData) -> bool {
    let (a, b) = (&old.grind_size, &new.grind_size);
    let microns_same = match (a.microns, b.microns) {
        (Some(x), Some(y)) => same_f64(x, y),
        (x, y) => x.is_none() && y.is_none(),
    };
    same_f64(a.steps, b.steps) && microns_same && a.setting == b.setting
}
