//! Recipe inspection and archiving commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use brewhub_core::error::AppError;
use brewhub_entity::recipe::RecipeView;
use brewhub_entity::version::{VersionHistory, VersionNumber};
use brewhub_service::{RecipeService, RequestContext, VersionService};

use crate::output::{self, OutputFormat};

/// Arguments for recipe commands
#[derive(Debug, Args)]
pub struct RecipeArgs {
    /// Recipe subcommand
    #[command(subcommand)]
    pub command: RecipeCommand,
}

/// Recipe subcommands
#[derive(Debug, Subcommand)]
pub enum RecipeCommand {
    /// Print the version tree of a recipe
    History {
        /// Recipe ID
        id: Uuid,
    },
    /// Print one version of a recipe
    Show {
        /// Recipe ID
        id: Uuid,
        /// Version to show; the current version when omitted
        #[arg(long)]
        version: Option<VersionNumber>,
    },
    /// Archive a recipe on behalf of its owner
    Archive {
        /// Recipe ID
        id: Uuid,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct VersionRow {
    version: String,
    kind: String,
    parent: String,
    current: String,
    created_by: String,
    created_at: String,
    changes: String,
}

/// Execute recipe commands
pub async fn execute(
    args: &RecipeArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let stores = super::open_stores(&config).await?;
    let recipes = RecipeService::new(stores.recipes.clone(), stores.versions.clone());
    let versions = VersionService::new(
        stores.recipes.clone(),
        stores.versions.clone(),
        &config.versioning,
    );

    let result = match &args.command {
        RecipeCommand::History { id } => versions
            .history(*id)
            .await
            .map(|history| print_history(&history, format)),
        RecipeCommand::Show { id, version } => recipes
            .get(*id, *version)
            .await
            .map(|view| print_view(&view, format)),
        RecipeCommand::Archive { id, force } => archive(&recipes, *id, *force).await,
    };

    stores.close().await;
    result
}

async fn archive(recipes: &RecipeService, id: Uuid, force: bool) -> Result<(), AppError> {
    let view = recipes.get(id, None).await?;
    if view.is_archived {
        output::print_warning(&format!("Recipe {id} is already archived"));
        return Ok(());
    }

    if !force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!("Archive \"{}\" ({id})?", view.data.name))
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let ctx = RequestContext::new(view.owner_id, "brewhub-cli");
    recipes.archive(&ctx, id).await?;
    output::print_success(&format!("Recipe {id} archived"));
    Ok(())
}

fn print_history(history: &VersionHistory, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_json(history);
        return;
    }

    output::print_kv("Recipe", &history.recipe_id.to_string());
    output::print_kv("Current version", &history.current_version.to_string());
    if let (Some(origin), Some(version)) = (history.original_recipe_id, history.original_version) {
        output::print_kv("Copied from", &format!("{origin} @ {version}"));
    }
    output::print_kv("Total versions", &history.total_versions.to_string());
    println!();

    let rows: Vec<VersionRow> = history
        .nodes()
        .map(|node| VersionRow {
            version: node.version.to_string(),
            kind: if node.is_main_version { "main" } else { "branch" }.to_string(),
            parent: node
                .parent_version
                .map(|p| p.to_string())
                .unwrap_or_default(),
            current: if node.is_current { "*" } else { "" }.to_string(),
            created_by: node.created_by.to_string(),
            created_at: node.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            changes: node
                .changes
                .iter()
                .map(|c| c.field.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    output::print_list(&rows, format);
}

fn print_view(view: &RecipeView, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_json(view);
        return;
    }

    output::print_kv("Recipe", &view.id.to_string());
    output::print_kv("Name", &view.data.name);
    output::print_kv("Owner", &view.owner_id.to_string());
    output::print_kv(
        "Version",
        &format!(
            "{}{}",
            view.version,
            if view.is_current { " (current)" } else { "" }
        ),
    );
    output::print_kv("Archived", &view.is_archived.to_string());
    output::print_kv("Coffee", &format!("{} g", view.data.coffee_amount));
    output::print_kv(
        "Water temperature",
        &format!(
            "{} {:?}",
            view.data.water_temperature, view.data.water_temperature_unit
        ),
    );
    output::print_kv("Steps", &view.data.steps.len().to_string());
    for change in &view.version_info.changes {
        output::print_kv(&change.field, &change.description);
    }
}
