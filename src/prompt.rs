use crate::model::Servings;

/// System prompt for the vision step. Asks the model for a bare JSON
/// array so the primary parse in `extract` can pick it up directly.
pub const INGREDIENT_DETECTION_PROMPT: &str = "You are an AI that inspects a photo of the inside of a refrigerator \
and lists visible food ingredients. \
Return ONLY a JSON array of short, lowercase ingredient names in English, \
for example: [\"milk\", \"eggs\", \"lettuce\"].";

/// Short user instruction paired with the image in the vision request.
pub const INGREDIENT_DETECTION_REQUEST: &str =
    "Identify the ingredients you can see in this fridge photo.";

/// System prompt for the recipe generation step.
pub const RECIPE_SYSTEM_PROMPT: &str = "You are a helpful cooking assistant.";

/// Build the recipe generation prompt for a detected ingredient list.
///
/// Interpolates the comma-joined ingredients and the servings count into a
/// fixed request for 3-4 recipes, each with a name, short description,
/// ingredient amounts, step-by-step instructions, and a food-waste note.
///
/// Callers must not pass an empty ingredient list.
pub fn build_recipe_prompt(ingredients: &[String], servings: Servings) -> String {
    debug_assert!(!ingredients.is_empty());

    let ingredient_list = ingredients.join(", ");

    format!(
        "You are an AI cooking assistant. A user has the following ingredients in their fridge:\n\
         \n\
         {ingredient_list}\n\
         \n\
         Please create 3–4 simple recipes using mostly these ingredients.\n\
         \n\
         For EACH recipe, provide:\n\
         1. Recipe name (English)\n\
         2. Short description (1–2 sentences)\n\
         3. Ingredients list with approximate amounts\n\
         4. Step-by-step instructions (4–8 short steps)\n\
         5. A short note about how this recipe helps reduce food waste.\n\
         \n\
         Write everything in clear English, beginner-friendly, formatted in Markdown.\n\
         Assume about {servings} servings per recipe.\n"
    )
}
