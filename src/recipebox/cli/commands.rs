//! # CLI Layer
//!
//! This module is **one possible UI client** for recipebox; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Turns form input (trimmed text, comma-separated tags, image files) into
//!   drafts and patches, rejecting empty titles and ingredient names
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `execute()`: Runs one parsed command; shared with the session loop
//! - `handle_*()`: Per-command handlers that call the API and print results
//! - `build_draft()` / `build_patch()`: Form normalization

use super::print::{
    eprint_messages, print_basket, print_categories, print_config, print_full_recipes,
    print_json, print_messages, print_recipes,
};
use super::session;
use super::setup::{ClearField, Cli, Commands, IngredientCommands, RecipeFields};
use clap::Parser;
use recipebox::api::{CmdMessage, CmdResult, ConfigAction, RecipeBoxApi, RecipeSort};
use recipebox::config::RecipeBoxConfig;
use recipebox::error::{RecipeBoxError, Result};
use recipebox::filter::RecipeFilter;
use recipebox::image::load_image_file;
use recipebox::model::{
    normalize_text, parse_tags, Change, IngredientDraft, IngredientPatch, RecipeDraft,
    RecipePatch,
};
use recipebox::store::memory::InMemoryStore;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "RECIPEBOX_LOG";

pub(super) struct AppContext {
    pub(super) api: RecipeBoxApi<InMemoryStore>,
    pub(super) config: RecipeBoxConfig,
    pub(super) json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(cli.json);

    match cli.command {
        Some(Commands::Session) => session::run(&mut ctx),
        command => execute(&mut ctx, command),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("recipebox=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(json: bool) -> AppContext {
    let config_dir = match RecipeBoxConfig::default_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            tracing::warn!("{}; settings will not be saved", e);
            None
        }
    };

    let config = config_dir
        .as_deref()
        .map(|dir| {
            RecipeBoxConfig::load(dir).unwrap_or_else(|e| {
                tracing::warn!(dir = %dir.display(), "unreadable config, using defaults: {}", e);
                RecipeBoxConfig::default()
            })
        })
        .unwrap_or_default();

    let api = if config.load_samples {
        RecipeBoxApi::with_samples()
    } else {
        RecipeBoxApi::new(InMemoryStore::new())
    };
    let api = match config_dir {
        Some(dir) => api.with_config_dir(dir),
        None => api,
    };

    AppContext { api, config, json }
}

/// Runs one command against the session's store. No command lists everything.
pub(super) fn execute(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        None => handle_list(ctx, None, None, RecipeSort::default()),
        Some(Commands::List {
            search,
            category,
            sort,
        }) => handle_list(ctx, search, category, sort),
        Some(Commands::Categories) => handle_categories(ctx),
        Some(Commands::View { recipes }) => handle_view(ctx, &recipes),
        Some(Commands::Create {
            title,
            fields,
            ingredients,
        }) => handle_create(ctx, &title.join(" "), fields, ingredients),
        Some(Commands::Edit {
            recipe,
            title,
            fields,
            clear,
        }) => handle_edit(ctx, &recipe, title, fields, &clear),
        Some(Commands::Delete { recipes }) => handle_delete(ctx, &recipes),
        Some(Commands::Ingredient(cmd)) => handle_ingredient(ctx, cmd),
        Some(Commands::Basket { recipes }) => handle_basket(ctx, &recipes),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        Some(Commands::Session) => Err(RecipeBoxError::Api("Already in a session".to_string())),
    }
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    category: Option<String>,
    sort: RecipeSort,
) -> Result<()> {
    let filter = RecipeFilter {
        query: search.unwrap_or_default(),
        category,
        sort,
    };
    let result = ctx.api.list_recipes(&filter)?;

    if ctx.json {
        return print_json(&result.listed_recipes);
    }
    print_recipes(&result.listed_recipes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    if ctx.json {
        return print_json(&result.categories);
    }
    print_categories(&result.categories);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    let ids = ctx.api.resolve_recipes(selectors)?;
    let result = ctx.api.view_recipes(&ids)?;
    if ctx.json {
        return print_json(&result.listed_recipes);
    }
    print_full_recipes(&result.listed_recipes);
    Ok(())
}

fn handle_create(
    ctx: &mut AppContext,
    title: &str,
    fields: RecipeFields,
    ingredients: Vec<IngredientDraft>,
) -> Result<()> {
    let draft = build_draft(title, fields, ingredients, ctx.config.max_image_bytes)?;
    let result = ctx.api.create_recipe(draft)?;
    report(ctx, &result)
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: &str,
    title: Option<String>,
    fields: RecipeFields,
    clear: &[ClearField],
) -> Result<()> {
    let id = ctx.api.resolve_recipe(selector)?;
    let patch = build_patch(title, fields, clear, ctx.config.max_image_bytes)?;
    if patch.is_empty() {
        print_messages(&[CmdMessage::warning("Nothing to change")]);
        return Ok(());
    }
    let result = ctx.api.update_recipe(&id, patch)?;
    report(ctx, &result)
}

fn handle_delete(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    let ids = ctx.api.resolve_recipes(selectors)?;
    let result = ctx.api.delete_recipes(&ids)?;
    report(ctx, &result)
}

fn handle_ingredient(ctx: &mut AppContext, cmd: IngredientCommands) -> Result<()> {
    match cmd {
        IngredientCommands::Add { recipe, ingredient } => {
            let id = ctx.api.resolve_recipe(&recipe)?;
            let result = ctx.api.add_ingredient(&id, ingredient)?;
            report(ctx, &result)
        }
        IngredientCommands::Edit {
            recipe,
            ingredient,
            quantity,
            unit,
            name,
        } => {
            let recipe_id = ctx.api.resolve_recipe(&recipe)?;
            let ingredient_id = ctx.api.resolve_ingredient(&recipe_id, &ingredient)?;
            let patch = build_ingredient_patch(quantity, unit, name)?;
            if patch.is_empty() {
                print_messages(&[CmdMessage::warning("Nothing to change")]);
                return Ok(());
            }
            let result = ctx.api.update_ingredient(&recipe_id, &ingredient_id, patch)?;
            report(ctx, &result)
        }
        IngredientCommands::Remove {
            recipe,
            ingredients,
        } => {
            let recipe_id = ctx.api.resolve_recipe(&recipe)?;

            // Resolve every position before removing anything; positions shift.
            let mut ids = Vec::with_capacity(ingredients.len());
            for selector in &ingredients {
                let id = ctx.api.resolve_ingredient(&recipe_id, selector)?;
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }

            let mut combined = CmdResult::default();
            for id in &ids {
                let result = ctx.api.remove_ingredient(&recipe_id, id)?;
                combined.messages.extend(result.messages);
                if !result.affected_recipes.is_empty() {
                    combined.affected_recipes = result.affected_recipes;
                }
            }
            report(ctx, &combined)
        }
    }
}

fn handle_basket(ctx: &mut AppContext, selectors: &[String]) -> Result<()> {
    let ids = ctx.api.resolve_recipes(selectors)?;
    let result = ctx.api.basket(&ids)?;
    if ctx.json {
        return print_json(&result.basket);
    }
    print_basket(&result.basket);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let showing_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if let Some(config) = result.config {
        if showing_all {
            if ctx.json {
                print_json(&config)?;
            } else {
                print_config(&config);
            }
        }
        // Later commands in a session see the new limits.
        ctx.config = config;
    }
    print_messages(&result.messages);
    Ok(())
}

/// Mutation output: messages for humans, the affected recipes for `--json`.
fn report(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        eprint_messages(&result.messages);
        return print_json(&result.affected_recipes);
    }
    print_messages(&result.messages);
    Ok(())
}

// --- Form normalization ---

/// Builds a create draft from form input. Blank text and zero numbers are
/// absent; `--image` is loaded and checked against `max_image_bytes`.
pub(super) fn build_draft(
    title: &str,
    fields: RecipeFields,
    ingredients: Vec<IngredientDraft>,
    max_image_bytes: u64,
) -> Result<RecipeDraft> {
    let title = required(Some(title), "Title cannot be empty")?.unwrap_or_default();
    let image_url = resolve_image(&fields, max_image_bytes)?;

    Ok(RecipeDraft {
        title,
        description: fields.description.as_deref().and_then(normalize_text),
        image_url,
        prep_time: fields.prep.filter(|n| *n > 0),
        cook_time: fields.cook.filter(|n| *n > 0),
        servings: fields.servings.filter(|n| *n > 0),
        category: fields.category.as_deref().and_then(normalize_text),
        tags: fields.tags.as_deref().and_then(parse_tags),
        ingredients,
    })
}

/// Builds an edit patch. A flag given with a blank (or zero) value clears the
/// field, as does `--clear FIELD`; `--clear` wins over a value for the same
/// field.
pub(super) fn build_patch(
    title: Option<String>,
    fields: RecipeFields,
    clear: &[ClearField],
    max_image_bytes: u64,
) -> Result<RecipePatch> {
    let image_url = if fields.image.is_some() || fields.image_url.is_some() {
        resolve_image(&fields, max_image_bytes)?.map_or(Change::Clear, Change::Set)
    } else {
        Change::Unchanged
    };

    let mut patch = RecipePatch {
        title: required(title.as_deref(), "Title cannot be empty")?,
        description: text_change(fields.description.as_deref()),
        image_url,
        prep_time: number_change(fields.prep),
        cook_time: number_change(fields.cook),
        servings: number_change(fields.servings),
        category: text_change(fields.category.as_deref()),
        tags: match fields.tags.as_deref() {
            None => Change::Unchanged,
            Some(input) => parse_tags(input).map_or(Change::Clear, Change::Set),
        },
        ingredients: Change::Unchanged,
    };

    for field in clear {
        match field {
            ClearField::Description => patch.description = Change::Clear,
            ClearField::Image => patch.image_url = Change::Clear,
            ClearField::Prep => patch.prep_time = Change::Clear,
            ClearField::Cook => patch.cook_time = Change::Clear,
            ClearField::Servings => patch.servings = Change::Clear,
            ClearField::Category => patch.category = Change::Clear,
            ClearField::Tags => patch.tags = Change::Clear,
            ClearField::Ingredients => patch.ingredients = Change::Clear,
        }
    }

    Ok(patch)
}

pub(super) fn build_ingredient_patch(
    quantity: Option<String>,
    unit: Option<String>,
    name: Option<String>,
) -> Result<IngredientPatch> {
    Ok(IngredientPatch {
        quantity: text_change(quantity.as_deref()),
        unit: text_change(unit.as_deref()),
        name: required(name.as_deref(), "Ingredient name cannot be empty")?,
    })
}

/// `None` stays `None`; a given value must survive trimming.
fn required(input: Option<&str>, message: &str) -> Result<Option<String>> {
    match input {
        None => Ok(None),
        Some(text) => normalize_text(text)
            .map(Some)
            .ok_or_else(|| RecipeBoxError::Validation(message.to_string())),
    }
}

fn text_change(input: Option<&str>) -> Change<String> {
    match input {
        None => Change::Unchanged,
        Some(text) => normalize_text(text).map_or(Change::Clear, Change::Set),
    }
}

fn number_change(input: Option<u32>) -> Change<u32> {
    match input {
        None => Change::Unchanged,
        Some(0) => Change::Clear,
        Some(n) => Change::Set(n),
    }
}

fn resolve_image(fields: &RecipeFields, max_image_bytes: u64) -> Result<Option<String>> {
    match (&fields.image, &fields.image_url) {
        (Some(path), _) => load_image_file(path, max_image_bytes).map(Some),
        (None, Some(url)) => Ok(normalize_text(url)),
        (None, None) => Ok(None),
    }
}
