//! Sequential scan pipeline: one vision round trip to detect ingredients,
//! then one text round trip to generate recipes from them.
//!
//! Failures here are terminal to the current scan only. Detection errors
//! collapse to an empty ingredient list and generation errors to a
//! user-facing message, so a failed call never takes the caller down.

use log::{error, info, warn};

use crate::extract::extract_ingredients;
use crate::image::ImageSource;
use crate::model::{FridgeReport, Servings};
use crate::prompt::{
    build_recipe_prompt, INGREDIENT_DETECTION_PROMPT, INGREDIENT_DETECTION_REQUEST,
    RECIPE_SYSTEM_PROMPT,
};
use crate::providers::CompletionProvider;

/// Notice shown in place of recipes when detection came up empty.
pub const NO_INGREDIENTS_NOTICE: &str =
    "No ingredients detected, so no recipes were generated.";

/// Detect ingredients visible in a fridge photo.
///
/// Any failure along the way (image read, service call, payload shape)
/// yields an empty list; the error is logged, not propagated.
pub async fn detect_ingredients(
    provider: &dyn CompletionProvider,
    image: &ImageSource,
) -> Vec<String> {
    let data_url = match image.to_data_url().await {
        Ok(url) => url,
        Err(e) => {
            error!("Failed to prepare fridge image: {}", e);
            return Vec::new();
        }
    };

    match provider
        .complete_vision(
            INGREDIENT_DETECTION_PROMPT,
            INGREDIENT_DETECTION_REQUEST,
            &data_url,
        )
        .await
    {
        Ok(content) => {
            let ingredients = extract_ingredients(&content);
            info!("Detected {} ingredients", ingredients.len());
            ingredients
        }
        Err(e) => {
            error!("Ingredient detection failed: {}", e);
            Vec::new()
        }
    }
}

/// Generate recipe suggestions for a non-empty ingredient list.
///
/// Returns the generated Markdown unmodified. On failure the returned
/// string is a user-facing error message instead.
pub async fn suggest_recipes(
    provider: &dyn CompletionProvider,
    ingredients: &[String],
    servings: Servings,
) -> String {
    if ingredients.is_empty() {
        warn!("Recipe generation requested with no ingredients");
        return NO_INGREDIENTS_NOTICE.to_string();
    }

    let prompt = build_recipe_prompt(ingredients, servings);

    match provider.complete_text(RECIPE_SYSTEM_PROMPT, &prompt).await {
        Ok(content) => crate::extract::flatten_content(&content),
        Err(e) => {
            error!("Recipe generation failed: {}", e);
            format!("Recipe generation failed: {}", e)
        }
    }
}

/// Run the full scan: detection first, then generation from its output.
///
/// An empty detection result short-circuits generation.
pub async fn scan(
    provider: &dyn CompletionProvider,
    image: &ImageSource,
    servings: Servings,
) -> FridgeReport {
    let ingredients = detect_ingredients(provider, image).await;

    let recipes = if ingredients.is_empty() {
        NO_INGREDIENTS_NOTICE.to_string()
    } else {
        suggest_recipes(provider, &ingredients, servings).await
    };

    FridgeReport {
        ingredients,
        recipes,
    }
}
