// Image-generation prompt derived from the strongest ability and category.

use super::categories::{Category, CategoryScores};
use super::scoring::{Ability, AbilityScores};

pub const BASE_PROMPT: &str = "Cybernetic implant system with L-shaped main module and 4 unique parts. MACHINE BUTCHER Corp branding. Retro futuristic style.";

/// Display colour (hex, name) associated with each ability.
pub fn ability_color(ability: Ability) -> (&'static str, &'static str) {
    match ability {
        Ability::Perception => ("#982B1C", "Deep Red"),
        Ability::Intelligence => ("#1230AE", "Royal Blue"),
        Ability::Emotional => ("#F0A8D0", "Soft Pink"),
        Ability::Physical => ("#739072", "Sage Green"),
        Ability::Social => ("#257180", "Teal"),
        Ability::Creative => ("#00FF9C", "Bright Mint"),
        Ability::Spiritual => ("#B7E0FF", "Light Sky Blue"),
        Ability::Moral => ("#B5C0D0", "Soft Gray"),
        Ability::Adaptability => ("#F5F7F8", "Off White"),
        Ability::SelfAwareness => ("#607274", "Slate Gray"),
        Ability::TimePerception => ("#399918", "Forest Green"),
        Ability::Communication => ("#FFF100", "Bright Yellow"),
        Ability::RiskAssessment => ("#EB8317", "Orange"),
        Ability::CulturalSensitivity => ("#E78F81", "Coral"),
    }
}

pub fn category_material(category: Category) -> &'static str {
    match category {
        Category::Perception => "chrome",
        Category::Intellect => "steel",
        Category::Emotion => "translucent shell",
        Category::Physical => "carbon fiber",
        Category::Extrasensory => "LED-embedded material",
    }
}

// Ties go to the later entry.
fn last_max<K: Copy>(items: impl Iterator<Item = (K, f32)>) -> Option<K> {
    items
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k)
}

pub fn generate_prompt(scores: &AbilityScores, categories: &CategoryScores) -> String {
    let top_ability = last_max(scores.iter()).unwrap_or(Ability::Perception);
    let top_category = last_max(categories.iter()).unwrap_or(Category::Perception);
    let (hex, name) = ability_color(top_ability);
    let glow = if top_category == Category::Extrasensory {
        " with glowing effects"
    } else {
        ""
    };
    format!(
        "{BASE_PROMPT} The main color scheme is {name} ({hex}). The primary material is {}{glow}.",
        category_material(top_category)
    )
}
