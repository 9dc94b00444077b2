use clap::Parser;
use std::path::Path;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use wellnoosh_planner::catalog::{MealCatalog, ShoppingCatalog};
use wellnoosh_planner::cli::{Cli, Command, GroceryCommand, PlanArgs};
use wellnoosh_planner::config::Settings;
use wellnoosh_planner::error::Result;
use wellnoosh_planner::interface::{
    display_grocery_list, display_plan, display_profile, display_shopping, display_weight_progress,
    prompt_health_profile, prompt_yes_no, resolve_restrictions,
};
use wellnoosh_planner::logging::init_logger;
use wellnoosh_planner::planner::{generate, regenerate, Generation, GenerationRequest};
use wellnoosh_planner::profile::{bmi, bmi_trend, summarize, weight_progress};
use wellnoosh_planner::shopping::score;
use wellnoosh_planner::state::{
    load_grocery_list, load_plan_json, save_grocery_list, save_plan_csv, save_plan_json,
    GroceryListManager, NewItem,
};

fn main() {
    init_logger();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(path) = &cli.grocery_file {
        settings.grocery_file = path.clone();
    }

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&settings, &args),
        Command::Regenerate(args) => cmd_regenerate(&settings, &args),
        Command::Grocery(sub) => cmd_grocery(&settings.grocery_file, sub),
        Command::Shop => cmd_shop(&settings),
        Command::Profile => cmd_profile(&settings),
        Command::Progress {
            start,
            target,
            height,
            weights,
        } => cmd_progress(start, target, height, &weights),
    }
}

/// Merge settings and flags into a generation request.
fn build_request(settings: &Settings, args: &PlanArgs) -> Result<GenerationRequest> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let mut request = GenerationRequest::for_date(date);

    request.user_id = args.user.clone().unwrap_or_else(|| settings.user_id.clone());
    request.target_calories = args.calories.unwrap_or(settings.target_calories);
    request.meals_per_day = args.meals.unwrap_or(settings.meals_per_day);
    request.include_snacks = settings.include_snacks && !args.no_snacks;

    let tags = if args.restrictions.is_empty() {
        &settings.dietary_restrictions
    } else {
        &args.restrictions
    };
    request.dietary_restrictions = resolve_restrictions(tags)?;

    Ok(request)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    debug!(seed, "seeding plan generator");
    StdRng::seed_from_u64(seed)
}

/// Print the plan and write the requested exports.
fn finish_plan(generation: &Generation, request: &GenerationRequest, args: &PlanArgs) -> Result<()> {
    display_plan(&generation.plan, &generation.warnings, request.target_calories);

    if let Some(path) = &args.json {
        save_plan_json(path, &generation.plan)?;
        println!("Plan written to {}", path.display());
    }
    if let Some(path) = &args.csv {
        save_plan_csv(path, &generation.plan)?;
        println!("Meals written to {}", path.display());
    }

    Ok(())
}

/// Generate a plan from settings and flags.
fn cmd_plan(settings: &Settings, args: &PlanArgs) -> Result<()> {
    let catalog = MealCatalog::load_or_builtin(settings.meal_catalog.as_ref())?;
    let request = build_request(settings, args)?;
    let mut rng = make_rng(args.seed.or(settings.seed));

    let generation = generate(&catalog, &request, &mut rng)?;
    finish_plan(&generation, &request, args)
}

/// Replace the plan stored at `--json` (if any) with a fresh draw.
fn cmd_regenerate(settings: &Settings, args: &PlanArgs) -> Result<()> {
    let catalog = MealCatalog::load_or_builtin(settings.meal_catalog.as_ref())?;
    let mut request = build_request(settings, args)?;
    // Only an explicit --seed applies here
    let mut rng = make_rng(args.seed);

    let previous = match &args.json {
        Some(path) if path.exists() => Some(load_plan_json(path)?),
        _ => None,
    };

    let generation = match previous {
        Some(previous) => {
            if args.date.is_none() {
                request.plan_date = previous.plan_date;
            }
            println!("Regenerating {}", previous.plan_id);
            regenerate(&catalog, &previous, &request, &mut rng)?
        }
        None => generate(&catalog, &request, &mut rng)?,
    };

    finish_plan(&generation, &request, args)
}

/// Add, toggle, remove, clear or list grocery items.
fn cmd_grocery(path: &Path, command: GroceryCommand) -> Result<()> {
    let mut manager = GroceryListManager::new(load_grocery_list(path)?);

    match command {
        GroceryCommand::Add {
            name,
            amount,
            category,
            recipe,
        } => {
            let id = manager.add(NewItem {
                name: name.clone(),
                amount,
                category,
                from_recipe: recipe,
            })?;
            println!("Added {} ({})", name, id);
        }
        GroceryCommand::Toggle { id } => {
            let completed = manager.toggle(&id)?;
            let state = if completed { "bought" } else { "not bought" };
            println!("Marked {} as {}", id, state);
        }
        GroceryCommand::Remove { id } => {
            let item = manager.remove(&id)?;
            println!("Removed {}", item.name);
        }
        GroceryCommand::Clear => {
            let removed = manager.clear_completed();
            println!("Removed {} bought items.", removed);
        }
        GroceryCommand::List => {
            display_grocery_list(manager.items());
            return Ok(());
        }
    }

    save_grocery_list(path, manager.items())?;
    Ok(())
}

/// Price the pending grocery items and suggest a route.
fn cmd_shop(settings: &Settings) -> Result<()> {
    let items = load_grocery_list(&settings.grocery_file)?;
    let manager = GroceryListManager::new(items);

    if manager.pending().is_empty() {
        println!("No pending items on the grocery list.");
        return Ok(());
    }

    let catalog = ShoppingCatalog::load_or_builtin(settings.shopping_catalog.as_ref())?;
    let analysis = score(manager.items(), &catalog.prices, &catalog.stores);
    display_shopping(&analysis, manager.items());

    Ok(())
}

/// Prompt for a health profile and show the derived targets.
fn cmd_profile(settings: &Settings) -> Result<()> {
    let profile = prompt_health_profile()?;
    let summary = summarize(&profile)?;
    display_profile(&profile, &summary);

    if prompt_yes_no("Generate a plan for this calorie target?", false)? {
        let args = PlanArgs {
            calories: Some(summary.daily_calories),
            ..PlanArgs::default()
        };
        cmd_plan(settings, &args)?;
    }

    Ok(())
}

/// Show progress toward a target weight, with the BMI trend when height is known.
fn cmd_progress(start: f64, target: f64, height: Option<f64>, weights: &[f64]) -> Result<()> {
    let progress = weight_progress(start, target, weights)?;

    let trend = match height {
        Some(height_cm) => {
            let series = weights
                .iter()
                .map(|w| bmi(*w, height_cm))
                .collect::<Result<Vec<f64>>>()?;
            Some(bmi_trend(&series)?)
        }
        None => None,
    };

    display_weight_progress(&progress, target, trend.as_ref());
    Ok(())
}
