use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RecipeBoxError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("{0}")]
    Validation(String),

    #[error("Please select an image file (JPEG, PNG, etc.), got {0}")]
    NotAnImage(String),

    #[error("Image must be under {} ({size} bytes given)", human_size(.max))]
    ImageTooLarge { size: u64, max: u64 },

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(Uuid),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecipeBoxError>;

/// `2MB` for whole mebibytes, plain bytes otherwise.
fn human_size(bytes: &u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if *bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_limit_reads_naturally() {
        let err = RecipeBoxError::ImageTooLarge {
            size: 3 * 1024 * 1024,
            max: 2 * 1024 * 1024,
        };
        assert_eq!(err.to_string(), "Image must be under 2MB (3145728 bytes given)");

        let err = RecipeBoxError::ImageTooLarge { size: 64, max: 32 };
        assert_eq!(err.to_string(), "Image must be under 32 bytes (64 bytes given)");
    }
}
