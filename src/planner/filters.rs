use strsim::jaro_winkler;

use crate::models::MealTemplate;
use crate::planner::constants::*;

/// Dietary predicates derived from a restriction tag list.
///
/// Tags compare case-insensitively. Tags outside the three filtering
/// restrictions are accepted and have no effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DietaryFilter {
    pub vegetarian: bool,
    pub low_carb: bool,
    pub high_protein: bool,
}

impl DietaryFilter {
    pub fn from_restrictions<S: AsRef<str>>(restrictions: &[S]) -> Self {
        let has = |tag: &str| {
            restrictions
                .iter()
                .any(|r| r.as_ref().trim().eq_ignore_ascii_case(tag))
        };

        Self {
            vegetarian: has(VEGETARIAN),
            low_carb: has(LOW_CARB),
            high_protein: has(HIGH_PROTEIN),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.vegetarian && !self.low_carb && !self.high_protein
    }

    /// Whether a template satisfies every active restriction.
    pub fn allows(&self, template: &MealTemplate) -> bool {
        if self.vegetarian && is_animal_based(template) {
            return false;
        }
        if self.low_carb && template.carbs_g > LOW_CARB_MAX_CARBS_G {
            return false;
        }
        if self.high_protein && template.protein_g < HIGH_PROTEIN_MIN_PROTEIN_G {
            return false;
        }
        true
    }

    /// Templates from `bucket` that pass, in bucket order.
    pub fn apply<'a>(&self, bucket: &[&'a MealTemplate]) -> Vec<&'a MealTemplate> {
        bucket.iter().copied().filter(|t| self.allows(t)).collect()
    }
}

/// Animal-named and not explicitly tagged vegetarian.
///
/// Both conditions are required: a template named "Vegetarian Chicken-style
/// Bowl" with the vegetarian tag passes, while "Turkey Wrap" passes because
/// no animal keyword appears in its name.
///
/// Applies only under the vegetarian restriction. Low-carb and high-protein
/// plans keep beef and salmon dishes.
fn is_animal_based(template: &MealTemplate) -> bool {
    let animal_named = ANIMAL_KEYWORDS.iter().any(|k| template.name_contains(k));
    animal_named && !template.has_tag(VEGETARIAN)
}

/// Whether a tag is in the known restriction vocabulary.
pub fn is_known_restriction(tag: &str) -> bool {
    RESTRICTION_VOCABULARY
        .iter()
        .any(|known| known.eq_ignore_ascii_case(tag.trim()))
}

/// Closest known restriction to a misspelled tag, if similar enough.
pub fn suggest_restriction(tag: &str) -> Option<&'static str> {
    let input = tag.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    RESTRICTION_VOCABULARY
        .iter()
        .map(|known| (*known, jaro_winkler(known, &input)))
        .filter(|(_, score)| *score >= RESTRICTION_SUGGEST_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(known, _)| known)
}
