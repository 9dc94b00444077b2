use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, HealthProfile, Sex, WeightGoal};
use crate::planner::{is_known_restriction, suggest_restriction};

fn parse_number<T: std::str::FromStr>(input: &str, what: &str) -> Result<T> {
    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid {}: '{}'", what, input)))
}

/// Resolve restriction tags against the known vocabulary.
///
/// Unknown tags with a close known match are offered as a correction; tags
/// the user keeps as typed are passed through lowercased.
pub fn resolve_restrictions(tags: &[String]) -> Result<Vec<String>> {
    let mut resolved = Vec::new();

    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }

        if is_known_restriction(&tag) {
            resolved.push(tag);
            continue;
        }

        let Some(suggestion) = suggest_restriction(&tag) else {
            println!("Unknown restriction '{}' will have no effect.", tag);
            resolved.push(tag);
            continue;
        };

        let accept = Confirm::new()
            .with_prompt(format!("Unknown restriction '{}'. Did you mean '{}'?", tag, suggestion))
            .default(true)
            .interact()?;

        if accept {
            resolved.push(suggestion.to_string());
        } else {
            resolved.push(tag);
        }
    }

    let mut seen = std::collections::HashSet::new();
    resolved.retain(|tag| seen.insert(tag.clone()));
    Ok(resolved)
}

/// Prompt for weight, height, age, sex, activity level and goal.
pub fn prompt_health_profile() -> Result<HealthProfile> {
    let weight: String = Input::new()
        .with_prompt("Weight (kg)")
        .default("70".to_string())
        .interact_text()?;
    let weight_kg: f64 = parse_number(&weight, "weight")?;

    let height: String = Input::new()
        .with_prompt("Height (cm)")
        .default("170".to_string())
        .interact_text()?;
    let height_cm: f64 = parse_number(&height, "height")?;

    let age: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .interact_text()?;
    let age_years: u32 = parse_number(&age, "age")?;

    let sex = match Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?
    {
        0 => Sex::Male,
        _ => Sex::Female,
    };

    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let activity = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(2)
        .interact()?;
    let activity_level = ActivityLevel::ALL
        .get(activity)
        .copied()
        .unwrap_or(ActivityLevel::ModeratelyActive);

    let goal = match Select::new()
        .with_prompt("Goal")
        .items(&["Lose weight", "Maintain weight", "Gain weight"])
        .default(1)
        .interact()?
    {
        0 => WeightGoal::Lose,
        2 => WeightGoal::Gain,
        _ => WeightGoal::Maintain,
    };

    Ok(HealthProfile {
        weight_kg,
        height_cm,
        age_years,
        sex,
        activity_level,
        goal,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_restrictions_resolve_without_prompting() {
        let tags = vec!["Vegetarian".to_string(), " LOW-CARB ".to_string(), String::new()];
        let resolved = resolve_restrictions(&tags).unwrap();
        assert_eq!(resolved, vec!["vegetarian", "low-carb"]);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<u32>(" 42 ", "age").unwrap(), 42);
        assert!(matches!(
            parse_number::<f64>("abc", "weight"),
            Err(PlannerError::InvalidInput(_))
        ));
    }
}
