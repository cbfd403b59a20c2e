use clap::{Args, Parser, Subcommand, ValueEnum};
use recipebox::api::RecipeSort;
use recipebox::model::IngredientDraft;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "recipebox", bin_name = "recipebox", version = get_version())]
#[command(about = "Browse, search and edit recipes for this session", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Text to look for in titles, descriptions and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only recipes in this category (exact match)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order: added, title or time
        #[arg(long, default_value = "added")]
        sort: RecipeSort,
    },

    /// List the categories in use
    Categories,

    /// Show one or more recipes in full
    #[command(alias = "v")]
    View {
        /// Indexes or ids of the recipes (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        recipes: Vec<String>,
    },

    /// Create a recipe
    #[command(alias = "n")]
    Create {
        /// Title of the recipe
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        #[command(flatten)]
        fields: RecipeFields,

        /// Ingredient as QTY|UNIT|NAME, QTY|NAME or NAME (repeatable)
        #[arg(short, long = "ingredient", value_name = "QTY|UNIT|NAME")]
        ingredients: Vec<IngredientDraft>,
    },

    /// Edit fields of a recipe
    #[command(alias = "e")]
    Edit {
        /// Index or id of the recipe
        recipe: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: RecipeFields,

        /// Clear a field (repeatable)
        #[arg(long, value_enum, value_name = "FIELD")]
        clear: Vec<ClearField>,
    },

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        /// Indexes or ids of the recipes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        recipes: Vec<String>,
    },

    /// Manage a recipe's ingredients
    #[command(subcommand, alias = "ing")]
    Ingredient(IngredientCommands),

    /// Shopping list for one or more recipes
    Basket {
        /// Indexes or ids of the recipes
        #[arg(required = true, num_args = 1..)]
        recipes: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (max-image-bytes, load-samples)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start an interactive session; changes last until it ends
    Session,
}

#[derive(Subcommand, Debug)]
pub enum IngredientCommands {
    /// Append an ingredient
    Add {
        /// Index or id of the recipe
        recipe: String,

        /// Ingredient as QTY|UNIT|NAME, QTY|NAME or NAME
        ingredient: IngredientDraft,
    },

    /// Edit an ingredient
    Edit {
        /// Index or id of the recipe
        recipe: String,

        /// Position or id of the ingredient within the recipe
        ingredient: String,

        #[arg(short, long)]
        quantity: Option<String>,

        #[arg(short, long)]
        unit: Option<String>,

        #[arg(short, long)]
        name: Option<String>,
    },

    /// Remove one or more ingredients
    #[command(alias = "rm")]
    Remove {
        /// Index or id of the recipe
        recipe: String,

        /// Positions or ids of the ingredients
        #[arg(required = true, num_args = 1..)]
        ingredients: Vec<String>,
    },
}

/// Optional recipe fields shared by `create` and `edit`.
///
/// On `edit`, an empty value clears the field.
#[derive(Args, Debug, Default, Clone)]
pub struct RecipeFields {
    #[arg(short, long)]
    pub description: Option<String>,

    /// Image file to attach (checked for type and size)
    #[arg(long, value_name = "PATH", conflicts_with = "image_url")]
    pub image: Option<PathBuf>,

    /// Remote image URL
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,

    /// Prep time in minutes
    #[arg(long, value_name = "MIN")]
    pub prep: Option<u32>,

    /// Cook time in minutes
    #[arg(long, value_name = "MIN")]
    pub cook: Option<u32>,

    #[arg(long)]
    pub servings: Option<u32>,

    #[arg(short, long)]
    pub category: Option<String>,

    /// Comma-separated tags
    #[arg(short, long, value_name = "a,b")]
    pub tags: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClearField {
    Description,
    Image,
    Prep,
    Cook,
    Servings,
    Category,
    Tags,
    Ingredients,
}
