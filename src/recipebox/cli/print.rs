use colored::Colorize;
use recipebox::api::{BasketLine, CmdMessage, MessageLevel};
use recipebox::config::RecipeBoxConfig;
use recipebox::error::Result;
use recipebox::index::DisplayRecipe;
use recipebox::model::Recipe;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const META_WIDTH: usize = 24;
const IMAGE_PREVIEW_WIDTH: usize = 60;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// In JSON mode stdout carries only data, so messages move to stderr.
pub(super) fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", message.content);
    }
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(super) fn print_recipes(recipes: &[DisplayRecipe]) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    let idx_width = recipes
        .iter()
        .map(|dr| format!("{}. ", dr.index).width())
        .max()
        .unwrap_or(0);

    for dr in recipes {
        let idx_str = format!("{:>width$}", format!("{}. ", dr.index), width = idx_width);
        let available = LINE_WIDTH.saturating_sub(idx_width + META_WIDTH + 2);

        let title_display = truncate_to_width(&dr.recipe.title, available);
        let padding = available.saturating_sub(title_display.width());

        let meta = format!("{:>width$}", summary(&dr.recipe), width = META_WIDTH);

        println!(
            "  {}{}{}{}",
            idx_str.yellow(),
            title_display,
            " ".repeat(padding),
            meta.dimmed()
        );
    }
}

/// `Soup · 35 min · serves 4`, skipping whatever is unset.
fn summary(recipe: &Recipe) -> String {
    let mut parts = Vec::new();
    if let Some(category) = &recipe.category {
        parts.push(category.clone());
    }
    if let Some(total) = recipe.total_time() {
        parts.push(format!("{} min", total));
    }
    if let Some(servings) = recipe.servings {
        parts.push(format!("serves {}", servings));
    }
    parts.join(" · ")
}

pub(super) fn print_full_recipes(recipes: &[DisplayRecipe]) {
    for (i, dr) in recipes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let recipe = &dr.recipe;
        println!("{} {}", dr.index.to_string().yellow(), recipe.title.bold());
        println!("--------------------------------");

        if let Some(description) = &recipe.description {
            println!("{}\n", description);
        }

        let mut times = Vec::new();
        if let Some(prep) = recipe.prep_time {
            times.push(format!("prep {} min", prep));
        }
        if let Some(cook) = recipe.cook_time {
            times.push(format!("cook {} min", cook));
        }
        if let Some(total) = recipe.total_time() {
            times.push(format!("total {} min", total));
        }
        if !times.is_empty() {
            println!("{} {}", "Time:".dimmed(), times.join(", "));
        }
        if let Some(servings) = recipe.servings {
            println!("{} {}", "Serves:".dimmed(), servings);
        }
        if let Some(category) = &recipe.category {
            println!("{} {}", "Category:".dimmed(), category);
        }
        if let Some(tags) = &recipe.tags {
            let tags: Vec<String> = tags.iter().map(|t| format!("#{}", t)).collect();
            println!("{} {}", "Tags:".dimmed(), tags.join(" ").cyan());
        }
        if let Some(image) = &recipe.image_url {
            println!(
                "{} {}",
                "Image:".dimmed(),
                truncate_to_width(image, IMAGE_PREVIEW_WIDTH)
            );
        }

        println!();
        if recipe.ingredients.is_empty() {
            println!("{}", "No ingredients yet.".dimmed());
        } else {
            println!("{}", "Ingredients".bold());
            for (n, ingredient) in recipe.ingredients.iter().enumerate() {
                println!("  {} {}", format!("{}.", n + 1).yellow(), ingredient.line());
            }
        }
    }
}

pub(super) fn print_categories(categories: &[String]) {
    if categories.is_empty() {
        println!("No categories.");
        return;
    }
    for category in categories {
        println!("  {}", category);
    }
}

pub(super) fn print_basket(lines: &[BasketLine]) {
    if lines.is_empty() {
        println!("Nothing to buy.");
        return;
    }
    for line in lines {
        let mut amount = line.quantities.join(" + ");
        if let Some(unit) = &line.unit {
            if amount.is_empty() {
                amount = unit.clone();
            } else {
                amount = format!("{} {}", amount, unit);
            }
        }
        let item = if amount.is_empty() {
            line.name.clone()
        } else {
            format!("{} {}", amount, line.name)
        };
        println!("  [ ] {}  {}", item, format!("({})", line.recipes.join(", ")).dimmed());
    }
}

pub(super) fn print_config(config: &RecipeBoxConfig) {
    for key in RecipeBoxConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
