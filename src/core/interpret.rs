use super::categories::{calculate_category_scores, Category, CategoryScores};
use super::parts::{extract_parts, Parts};
use super::prompt::generate_prompt;
use super::scoring::{calculate_results, interpret_results, Ability, AbilityScores, ScoringError};
use std::fmt::Write as _;

pub const TOP_ABILITY_COUNT: usize = 3;

/// Strongest and weakest areas of a result, used for the written summary.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpretation {
    pub top_category: Category,
    pub bottom_category: Category,
    pub top_abilities: Vec<(Ability, f32)>,
}

impl Interpretation {
    pub fn new(scores: &AbilityScores, categories: &CategoryScores) -> Self {
        // first maximum / first minimum in table order
        let mut top = (Category::ALL[0], categories.get(Category::ALL[0]));
        let mut bottom = top;
        for (c, s) in categories.iter().skip(1) {
            if s > top.1 {
                top = (c, s);
            }
            if s < bottom.1 {
                bottom = (c, s);
            }
        }
        let mut top_abilities = scores.sorted_desc();
        top_abilities.truncate(TOP_ABILITY_COUNT);
        Self {
            top_category: top.0,
            bottom_category: bottom.0,
            top_abilities,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        _ = write!(
            out,
            "Your cybernetic ability test shows your strongest area is {}. \
             This means you are especially strong in {}. \
             It is a valuable asset today and will remain one in the years ahead.\n\n",
            self.top_category.label(),
            self.top_category.description()
        );
        _ = write!(
            out,
            "By contrast, {} scored relatively low. \
             There is room to grow in {}, and working on it will lift your overall profile.\n\n",
            self.bottom_category.label(),
            self.bottom_category.description()
        );
        out.push_str("Individual abilities worth noting:\n");
        for (ability, score) in &self.top_abilities {
            _ = writeln!(
                out,
                "- {} (score: {:.2}): {}",
                ability.key(),
                score,
                ability.description()
            );
        }
        out.push_str(
            "\nBuild on these strengths while working on the weaker areas, \
             and you will grow into a more versatile and adaptable person. \
             This result reflects where you are now, not a limit on where you can go.",
        );
        out
    }
}

pub fn detailed_interpretation(scores: &AbilityScores, categories: &CategoryScores) -> String {
    Interpretation::new(scores, categories).render()
}

/// Everything the result screen shows for one completed questionnaire.
#[derive(Clone, Debug)]
pub struct Assessment {
    pub scores: AbilityScores,
    pub categories: CategoryScores,
    pub parts: Parts,
    pub significant: Vec<(Ability, &'static str)>,
    pub description: String,
    pub prompt: String,
}

impl Assessment {
    pub fn evaluate(answers: &[u8]) -> Result<Self, ScoringError> {
        let scores = calculate_results(answers)?;
        let categories = calculate_category_scores(&scores);
        Ok(Self {
            parts: extract_parts(&scores),
            significant: interpret_results(&scores),
            description: detailed_interpretation(&scores, &categories),
            prompt: generate_prompt(&scores, &categories),
            scores,
            categories,
        })
    }
}
