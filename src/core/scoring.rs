// Likert answers to normalized ability scores.
//
// Answers are index-addressed: every consecutive block of
// [`QUESTIONS_PER_ABILITY`] answers belongs to one ability, in the order of
// [`Ability::ALL`].

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ability {
    Perception,
    Intelligence,
    Emotional,
    Physical,
    Social,
    Creative,
    Spiritual,
    Moral,
    Adaptability,
    SelfAwareness,
    TimePerception,
    Communication,
    RiskAssessment,
    CulturalSensitivity,
}

impl Ability {
    pub const ALL: [Ability; ABILITY_COUNT] = [
        Ability::Perception,
        Ability::Intelligence,
        Ability::Emotional,
        Ability::Physical,
        Ability::Social,
        Ability::Creative,
        Ability::Spiritual,
        Ability::Moral,
        Ability::Adaptability,
        Ability::SelfAwareness,
        Ability::TimePerception,
        Ability::Communication,
        Ability::RiskAssessment,
        Ability::CulturalSensitivity,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier used in payloads and result listings.
    pub fn key(self) -> &'static str {
        match self {
            Ability::Perception => "perception",
            Ability::Intelligence => "intelligence",
            Ability::Emotional => "emotional",
            Ability::Physical => "physical",
            Ability::Social => "social",
            Ability::Creative => "creative",
            Ability::Spiritual => "spiritual",
            Ability::Moral => "moral",
            Ability::Adaptability => "adaptability",
            Ability::SelfAwareness => "selfAwareness",
            Ability::TimePerception => "timePerception",
            Ability::Communication => "communication",
            Ability::RiskAssessment => "riskAssessment",
            Ability::CulturalSensitivity => "culturalSensitivity",
        }
    }

    /// Short description shown next to a score.
    pub fn description(self) -> &'static str {
        match self {
            Ability::Perception => "quickly sensing and analysing the surrounding situation",
            Ability::Intelligence => "solving complex problems and reasoning logically",
            Ability::Emotional => "understanding emotions and responding to them well",
            Ability::Physical => "performing and controlling physical activity",
            Ability::Social => "building and keeping relationships",
            Ability::Creative => "generating new ideas and thinking innovatively",
            Ability::Spiritual => "seeking meaning, purpose and inner peace",
            Ability::Moral => "making ethical judgements and acting on them",
            Ability::Adaptability => "responding flexibly to a changing environment",
            Ability::SelfAwareness => "seeing your own thoughts and feelings objectively",
            Ability::TimePerception => "managing and planning time effectively",
            Ability::Communication => "expressing yourself clearly and listening well",
            Ability::RiskAssessment => "weighing risk and deciding appropriately",
            Ability::CulturalSensitivity => "understanding and respecting other cultures",
        }
    }

    fn interpretation(self) -> &'static str {
        match self {
            Ability::Perception => "You notice subtle changes in people and places, which feeds intuition and insight.",
            Ability::Intelligence => "Your analytical, logical thinking is a standout strength with abstract problems.",
            Ability::Emotional => "Your emotional intelligence is high: you read and manage feelings with empathy.",
            Ability::Physical => "Your physical capability and body awareness are excellent.",
            Ability::Social => "You adapt well socially and show a talent for leadership.",
            Ability::Creative => "You think creatively and express original ideas with ease.",
            Ability::Spiritual => "You hold a deep interest in meaning and the mysteries of existence.",
            Ability::Moral => "You carry a strong ethical sense and a will to act fairly.",
            Ability::Adaptability => "You adapt fast to change; flexibility and resilience are your strengths.",
            Ability::SelfAwareness => "You understand your own emotions, thoughts and behaviour deeply.",
            Ability::TimePerception => "You balance past, present and future and manage time uniquely well.",
            Ability::Communication => "You express yourself clearly and listen effectively.",
            Ability::RiskAssessment => "You judge risk coolly even under uncertainty.",
            Ability::CulturalSensitivity => "You embrace cultural diversity and thrive in multicultural settings.",
        }
    }
}

/// Normalized score per ability, each in \[0, 100\].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AbilityScores([f32; ABILITY_COUNT]);

impl AbilityScores {
    #[inline]
    pub fn get(&self, ability: Ability) -> f32 {
        self.0[ability.index()]
    }

    pub fn set(&mut self, ability: Ability, score: f32) {
        self.0[ability.index()] = score;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, f32)> + '_ {
        Ability::ALL
            .into_iter()
            .map(move |a| (a, self.0[a.index()]))
    }

    /// Scores ordered highest first; equal scores keep table order.
    pub fn sorted_desc(&self) -> Vec<(Ability, f32)> {
        let mut v: Vec<(Ability, f32)> = self.iter().collect();
        v.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        v
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("expected {expected} answers, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("answer {index} is {value}, outside 1..=5")]
    OutOfRange { index: usize, value: u8 },
}

/// Sum each block of five answers and normalize with `(sum / 25) * 100`.
pub fn calculate_results(answers: &[u8]) -> Result<AbilityScores, ScoringError> {
    if answers.len() != QUESTION_COUNT {
        return Err(ScoringError::WrongLength {
            expected: QUESTION_COUNT,
            found: answers.len(),
        });
    }
    if let Some((index, &value)) = answers
        .iter()
        .enumerate()
        .find(|(_, v)| !(LIKERT_MIN..=LIKERT_MAX).contains(*v))
    {
        return Err(ScoringError::OutOfRange { index, value });
    }

    let mut scores = AbilityScores::default();
    for (ability, block) in Ability::ALL
        .into_iter()
        .zip(answers.chunks_exact(QUESTIONS_PER_ABILITY))
    {
        let sum: u32 = block.iter().map(|v| *v as u32).sum();
        // scale before dividing so integer sums land on exact scores
        scores.set(ability, (sum as f32 * 100.0) / BLOCK_MAX_SUM);
    }
    Ok(scores)
}

/// Abilities scoring at or above the significance threshold, with a sentence each.
pub fn interpret_results(scores: &AbilityScores) -> Vec<(Ability, &'static str)> {
    scores
        .iter()
        .filter(|(_, s)| *s >= SIGNIFICANT_SCORE)
        .map(|(a, _)| (a, a.interpretation()))
        .collect()
}
