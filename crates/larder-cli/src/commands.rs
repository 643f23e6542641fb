//! Handlers for the recipe subcommands.
//!
//! Each handler validates input with the schema, calls one store
//! operation, and renders the result to `out`. Handlers never write to the
//! medium directly.

use std::io::Write;

use larder_core::types::timestamp;
use larder_core::{Error, Recipe, RecipeDraft, RecipeId, validate_create, validate_update};
use larder_storage::{Clock, RecipeStore, Saved, StoragePort};

use crate::error::{CliError, Result};

/// Print every recipe.
pub fn cmd_list<S: StoragePort, C: Clock>(
    store: &RecipeStore<S, C>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let recipes = store.list();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&recipes).map_err(Error::from)?)?;
        return Ok(());
    }

    if recipes.is_empty() {
        writeln!(out, "No recipes yet. Add one with `larder add`.")?;
        return Ok(());
    }

    for recipe in &recipes {
        writeln!(
            out,
            "{}  {}  ({} ingredients, {} steps)",
            recipe.id,
            recipe.title,
            recipe.ingredient_count(),
            recipe.step_count()
        )?;
    }
    Ok(())
}

/// Print one recipe.
pub fn cmd_show<S: StoragePort, C: Clock>(
    store: &RecipeStore<S, C>,
    id: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let id: RecipeId = id.parse()?;
    let recipe = store.get(&id).ok_or_else(|| Error::not_found(&id))?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&recipe).map_err(Error::from)?)?;
    } else {
        render_recipe(&recipe, out)?;
    }
    Ok(())
}

/// Validate and add a recipe.
pub fn cmd_add<S: StoragePort, C: Clock>(
    store: &RecipeStore<S, C>,
    draft: &RecipeDraft,
    out: &mut impl Write,
) -> Result<()> {
    let input = validate_create(draft)?;
    let saved = store.add(input);
    writeln!(out, "Added {}  {}", saved.value.id, saved.value.title)?;
    warn_if_unpersisted(&saved, out)
}

/// Validate and apply a partial update.
pub fn cmd_edit<S: StoragePort, C: Clock>(
    store: &RecipeStore<S, C>,
    id: &str,
    draft: &RecipeDraft,
    out: &mut impl Write,
) -> Result<()> {
    let id: RecipeId = id.parse()?;
    let patch = validate_update(draft)?;
    if patch.is_empty() {
        return Err(CliError::usage(
            "Nothing to change; pass at least one of --title, --ingredient, --step, --image-url",
        ));
    }

    let saved = store.update(&id, patch).ok_or_else(|| Error::not_found(&id))?;
    writeln!(out, "Updated {}  {}", saved.value.id, saved.value.title)?;
    warn_if_unpersisted(&saved, out)
}

/// Delete one recipe.
pub fn cmd_delete<S: StoragePort, C: Clock>(
    store: &RecipeStore<S, C>,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let id: RecipeId = id.parse()?;
    let saved = store.delete(&id);
    if !saved.value {
        return Err(Error::not_found(&id).into());
    }
    writeln!(out, "Deleted {id}")?;
    warn_if_unpersisted(&saved, out)
}

/// Delete every recipe, if confirmed.
pub fn cmd_reset<S: StoragePort, C: Clock>(
    store: &RecipeStore<S, C>,
    yes: bool,
    out: &mut impl Write,
) -> Result<()> {
    if !yes {
        return Err(CliError::usage("Refusing to delete all recipes without --yes"));
    }
    let saved = store.clear();
    writeln!(out, "Deleted {} recipes", saved.value)?;
    warn_if_unpersisted(&saved, out)
}

fn render_recipe(recipe: &Recipe, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", recipe.title)?;
    writeln!(out, "id: {}", recipe.id)?;
    if let Some(url) = &recipe.image_url {
        writeln!(out, "image: {url}")?;
    }

    writeln!(out)?;
    writeln!(out, "Ingredients:")?;
    for line in recipe.ingredient_lines() {
        writeln!(out, "  - {line}")?;
    }

    writeln!(out)?;
    writeln!(out, "Instructions:")?;
    for (n, step) in recipe.instruction_steps().iter().enumerate() {
        writeln!(out, "  {}. {step}", n + 1)?;
    }

    writeln!(out)?;
    writeln!(out, "created: {}", timestamp::format(&recipe.created_at))?;
    writeln!(out, "updated: {}", timestamp::format(&recipe.updated_at))?;
    Ok(())
}

fn warn_if_unpersisted<T>(saved: &Saved<T>, out: &mut impl Write) -> Result<()> {
    if !saved.is_persisted() {
        writeln!(
            out,
            "warning: the change could not be written to storage and will be lost"
        )?;
    }
    Ok(())
}
