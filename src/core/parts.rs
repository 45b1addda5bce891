// Unlockable implant "parts" per dimension, gated by score thresholds.

use super::scoring::{Ability, AbilityScores};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartGroup {
    Perception,
    Intellect,
    Emotion,
    Physical,
    Hidden,
}

impl PartGroup {
    pub const ALL: [PartGroup; 5] = [
        PartGroup::Perception,
        PartGroup::Intellect,
        PartGroup::Emotion,
        PartGroup::Physical,
        PartGroup::Hidden,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PartGroup::Perception => "Perception",
            PartGroup::Intellect => "Intellect",
            PartGroup::Emotion => "Emotion",
            PartGroup::Physical => "Physical",
            PartGroup::Hidden => "Hidden",
        }
    }
}

type Tier = (f32, &'static str);

const PERCEPTION_TIERS: &[Tier] = &[
    (60.0, "faster dynamic vision"),
    (70.0, "sharper eyesight"),
    (80.0, "keener sense of smell"),
    (90.0, "finely differentiated taste"),
];
const INTELLECT_TIERS: &[Tier] = &[
    (60.0, "stronger logical reasoning"),
    (70.0, "better memory"),
    (80.0, "rhetoric and language skills"),
    (90.0, "deeper grasp of abstract concepts"),
];
const EMOTION_TIERS: &[Tier] = &[
    (60.0, "empathy"),
    (70.0, "charisma"),
    (80.0, "emotional control"),
    (90.0, "aesthetic sense"),
];
const PHYSICAL_TIERS: &[Tier] = &[
    (60.0, "stamina, never tiring"),
    (70.0, "muscle and strength boost"),
    (80.0, "flexibility and elasticity"),
    (90.0, "reaction speed"),
];
const HIDDEN_TIERS: &[Tier] = &[
    (60.0, "heightened intuition"),
    (80.0, "goosebumps, sensing something unseen"),
];

/// Unlocked fragments per group, in threshold order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parts {
    pub perception: Vec<&'static str>,
    pub intellect: Vec<&'static str>,
    pub emotion: Vec<&'static str>,
    pub physical: Vec<&'static str>,
    pub hidden: Vec<&'static str>,
}

impl Parts {
    pub fn get(&self, group: PartGroup) -> &[&'static str] {
        match group {
            PartGroup::Perception => &self.perception,
            PartGroup::Intellect => &self.intellect,
            PartGroup::Emotion => &self.emotion,
            PartGroup::Physical => &self.physical,
            PartGroup::Hidden => &self.hidden,
        }
    }

    pub fn is_empty(&self) -> bool {
        PartGroup::ALL.into_iter().all(|g| self.get(g).is_empty())
    }
}

fn unlocked(score: Option<f32>, tiers: &[Tier]) -> Vec<&'static str> {
    let Some(score) = score else {
        return Vec::new();
    };
    tiers
        .iter()
        .filter(|(threshold, _)| score > *threshold)
        .map(|(_, text)| *text)
        .collect()
}

// No question block produces a hidden score yet.
fn hidden_score(_scores: &AbilityScores) -> Option<f32> {
    None
}

/// Thresholds are strict: a score of exactly 60 unlocks nothing.
pub fn extract_parts(scores: &AbilityScores) -> Parts {
    Parts {
        perception: unlocked(Some(scores.get(Ability::Perception)), PERCEPTION_TIERS),
        intellect: unlocked(Some(scores.get(Ability::Intelligence)), INTELLECT_TIERS),
        emotion: unlocked(Some(scores.get(Ability::Emotional)), EMOTION_TIERS),
        physical: unlocked(Some(scores.get(Ability::Physical)), PHYSICAL_TIERS),
        hidden: unlocked(hidden_score(scores), HIDDEN_TIERS),
    }
}
