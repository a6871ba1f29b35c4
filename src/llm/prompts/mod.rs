// ABOUTME: Prompts for LLM recipe generation, with the system prompt loaded at compile time
// ABOUTME: Builds single-recipe (JSON object) and multi-recipe (JSON array) user prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Pantry Chef Contributors

//! # Recipe Prompts
//!
//! The system prompt lives in a markdown file for easy editing. User prompts
//! describe the exact JSON shape the generation parser expects.

use crate::generation::GenerationRequest;

/// System prompt for recipe generation
pub const RECIPE_SYSTEM_PROMPT: &str = include_str!("recipe_system.md");

/// Get the system prompt for recipe generation
#[must_use]
pub const fn get_recipe_system_prompt() -> &'static str {
    RECIPE_SYSTEM_PROMPT
}

/// JSON object template shown to the model, with the request's categories filled in
fn recipe_template(request: &GenerationRequest, name: &str, minutes: u32) -> String {
    format!(
        r#"{{
  "recipe_name": "{name}",
  "ingredients": "ingredient1, ingredient2, ingredient3",
  "cooking_time": {minutes},
  "meal_type": "{meal_type}",
  "cuisine": "{cuisine}",
  "instructions": "1. First step. 2. Second step. 3. Third step.",
  "reason": "Why this recipe suits the ingredients and time"
}}"#,
        meal_type = request.meal_type,
        cuisine = request.cuisine,
    )
}

/// Prompt asking for exactly one recipe as a JSON object
#[must_use]
pub fn single_recipe_prompt(request: &GenerationRequest) -> String {
    format!(
        "Generate a {cuisine} {meal} recipe using these ingredients: {ingredients}.\n\
         Cooking time: {time} minutes maximum.\n\n\
         Create a realistic recipe that:\n\
         1. Uses MOST of the given ingredients\n\
         2. Fits within the time limit\n\
         3. Is a {cuisine} {meal_type} dish\n\n\
         Respond ONLY with this EXACT JSON format:\n{template}",
        cuisine = request.cuisine,
        meal = request.meal_type.to_lowercase(),
        meal_type = request.meal_type,
        ingredients = request.ingredients.join(", "),
        time = request.time_budget,
        template = recipe_template(request, "Recipe Name", request.time_budget),
    )
}

/// Prompt asking for `request.count` distinct recipes as a JSON array
#[must_use]
pub fn multiple_recipes_prompt(request: &GenerationRequest) -> String {
    let count = request.count;
    let mut prompt = format!(
        "Generate {count} DIFFERENT {cuisine} {meal} recipes using these ingredients: {ingredients}.\n\
         Cooking time: {time} minutes maximum per recipe.\n\n\
         Requirements:\n\
         1. Generate {count} COMPLETELY DIFFERENT recipes\n\
         2. Each should use MOST of the given ingredients but in different ways\n\
         3. Each must fit within the time limit\n\
         4. Each should be a valid {cuisine} {meal_type} dish\n\n\
         Respond ONLY with a JSON array of {count} objects in this EXACT format:\n[\n",
        cuisine = request.cuisine,
        meal = request.meal_type.to_lowercase(),
        meal_type = request.meal_type,
        ingredients = request.ingredients.join(", "),
        time = request.time_budget,
    );

    // Two sample entries are enough to show the array shape
    let samples = count.min(2);
    for index in 1..=samples {
        let name = format!("Recipe {index} Name");
        prompt.push_str(&recipe_template(request, &name, request.time_budget));
        if index < samples {
            prompt.push(',');
        }
        prompt.push('\n');
    }
    prompt.push(']');
    prompt
}

/// Prompt for `request`: a single object when one recipe is wanted, an array otherwise
#[must_use]
pub fn recipe_prompt(request: &GenerationRequest) -> String {
    if request.count <= 1 {
        single_recipe_prompt(request)
    } else {
        multiple_recipes_prompt(request)
    }
}
