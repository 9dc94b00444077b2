use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// WellNoosh: daily meal plans from a template catalog and cheapest-store
/// routes for your grocery list.
#[derive(Parser, Debug)]
#[command(name = "wellnoosh")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Settings file (defaults to ./wellnoosh.toml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the grocery list JSON file.
    #[arg(short, long, global = true)]
    pub grocery_file: Option<PathBuf>,
}

/// Options shared by `plan` and `regenerate`.
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Daily calorie target.
    #[arg(long, allow_negative_numbers = true)]
    pub calories: Option<i32>,

    /// Number of main meals (breakfast, lunch, dinner).
    #[arg(long, allow_negative_numbers = true)]
    pub meals: Option<i32>,

    /// Leave snacks out of the plan.
    #[arg(long)]
    pub no_snacks: bool,

    /// Dietary restriction tag; repeat for several.
    #[arg(short, long = "restriction")]
    pub restrictions: Vec<String>,

    /// Seed for a reproducible plan.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Plan date (YYYY-MM-DD), today when omitted.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// User id used in the plan id.
    #[arg(long)]
    pub user: Option<String>,

    /// Write the plan as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the planned meals as CSV rows.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a meal plan for one day.
    Plan(PlanArgs),

    /// Replace a day's plan with a fresh random draw.
    Regenerate(PlanArgs),

    /// Manage the grocery list.
    #[command(subcommand)]
    Grocery(GroceryCommand),

    /// Find the cheapest stores and a route for pending grocery items.
    Shop,

    /// Compute BMI and a daily calorie target from a health profile.
    Profile,

    /// Summarize weight readings against a target weight.
    Progress {
        /// Weight at the start of the goal, in kg.
        #[arg(long)]
        start: f64,

        /// Target weight in kg.
        #[arg(long)]
        target: f64,

        /// Height in cm, to also report the BMI trend.
        #[arg(long)]
        height: Option<f64>,

        /// Weight readings in kg, oldest first.
        #[arg(required = true)]
        weights: Vec<f64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum GroceryCommand {
    /// Add an item.
    Add {
        name: String,

        /// Quantity, e.g. "2 kg".
        #[arg(short, long, default_value = "1")]
        amount: String,

        #[arg(long)]
        category: Option<String>,

        /// Recipe the item is for.
        #[arg(long)]
        recipe: Option<String>,
    },

    /// Mark an item bought or not bought.
    Toggle { id: String },

    /// Remove an item.
    Remove { id: String },

    /// Remove all bought items.
    Clear,

    /// Show the list.
    List,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_flags() {
        let cli = Cli::parse_from([
            "wellnoosh",
            "plan",
            "--calories",
            "1800",
            "--no-snacks",
            "-r",
            "vegetarian",
            "-r",
            "low-carb",
            "--seed",
            "42",
            "--date",
            "2025-03-01",
        ]);

        let Some(Command::Plan(args)) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.calories, Some(1800));
        assert!(args.no_snacks);
        assert_eq!(args.restrictions, vec!["vegetarian", "low-carb"]);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test]
    fn test_parse_grocery_add_with_global_file() {
        let cli = Cli::parse_from([
            "wellnoosh",
            "grocery",
            "add",
            "Milk",
            "--amount",
            "2 L",
            "--grocery-file",
            "list.json",
        ]);

        assert_eq!(cli.grocery_file, Some(PathBuf::from("list.json")));
        match cli.command {
            Some(Command::Grocery(GroceryCommand::Add { name, amount, .. })) => {
                assert_eq!(name, "Milk");
                assert_eq!(amount, "2 L");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_progress_readings() {
        let cli = Cli::parse_from([
            "wellnoosh", "progress", "--start", "90", "--target", "80", "89.5", "88",
        ]);

        match cli.command {
            Some(Command::Progress {
                start,
                target,
                height,
                weights,
            }) => {
                assert_eq!(start, 90.0);
                assert_eq!(target, 80.0);
                assert!(height.is_none());
                assert_eq!(weights, vec![89.5, 88.0]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_plan() {
        let cli = Cli::parse_from(["wellnoosh"]);
        assert!(matches!(cli.command.unwrap_or_default(), Command::Plan(_)));
    }
}
