// Grouping of the fourteen abilities into five categories.

use super::scoring::{Ability, AbilityScores};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Perception,
    Intellect,
    Emotion,
    Physical,
    Extrasensory,
}

pub const CATEGORY_COUNT: usize = 5;

/// Fixed membership table. Member counts differ per category (2 to 4).
pub const CATEGORY_TABLE: [(Category, &[Ability]); CATEGORY_COUNT] = [
    (
        Category::Perception,
        &[Ability::Perception, Ability::TimePerception],
    ),
    (
        Category::Intellect,
        &[
            Ability::Intelligence,
            Ability::Communication,
            Ability::RiskAssessment,
        ],
    ),
    (
        Category::Emotion,
        &[
            Ability::Emotional,
            Ability::Social,
            Ability::CulturalSensitivity,
        ],
    ),
    (
        Category::Physical,
        &[Ability::Physical, Ability::Adaptability],
    ),
    (
        Category::Extrasensory,
        &[
            Ability::Creative,
            Ability::Spiritual,
            Ability::Moral,
            Ability::SelfAwareness,
        ],
    ),
];

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Perception,
        Category::Intellect,
        Category::Emotion,
        Category::Physical,
        Category::Extrasensory,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn members(self) -> &'static [Ability] {
        CATEGORY_TABLE[self.index()].1
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Perception => "Perception",
            Category::Intellect => "Intellect",
            Category::Emotion => "Emotion",
            Category::Physical => "Physical",
            Category::Extrasensory => "Extrasensory",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Perception => "recognising the environment and processing information",
            Category::Intellect => "logical thinking and problem solving",
            Category::Emotion => "understanding and managing emotions",
            Category::Physical => "physical activity and athletic ability",
            Category::Extrasensory => {
                "higher cognition including intuition, creativity and spiritual sense"
            }
        }
    }
}

/// First category whose member list contains `ability`.
pub fn category_for_ability(ability: Ability) -> Option<Category> {
    CATEGORY_TABLE
        .iter()
        .find(|(_, members)| members.contains(&ability))
        .map(|(c, _)| *c)
}

/// Unweighted mean of member ability scores, per category.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CategoryScores([f32; CATEGORY_COUNT]);

impl CategoryScores {
    #[inline]
    pub fn get(&self, category: Category) -> f32 {
        self.0[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f32)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.0[c.index()]))
    }
}

pub fn calculate_category_scores(scores: &AbilityScores) -> CategoryScores {
    let mut out = [0.0_f32; CATEGORY_COUNT];
    for (ability, score) in scores.iter() {
        if let Some(c) = category_for_ability(ability) {
            out[c.index()] += score;
        }
    }
    for c in Category::ALL {
        out[c.index()] /= c.members().len() as f32;
    }
    CategoryScores(out)
}
