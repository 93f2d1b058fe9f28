//! Command handlers for personactl.

use crate::config::CtlConfig;
use crate::display;
use crate::prompt::{self, PromptOutcome};
use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use persona_common::{
    classify, compatibility, feedback, stats, Catalog, CategoryCode, DbLocation, Location,
    NewDiagnosis, PersonaDb, ResponseSet, TieAnswers,
};
use std::path::PathBuf;
use tracing::info;

/// Resolve the database location: flag > config > XDG default.
pub fn db_location(flag: Option<PathBuf>, config: &CtlConfig) -> DbLocation {
    match flag.or_else(|| config.database.clone()) {
        Some(path) => DbLocation::Custom(path),
        None => DbLocation::User,
    }
}

/// Run one interactive diagnosis session.
pub async fn diagnose(
    db: DbLocation,
    mut config: CtlConfig,
    location: Option<String>,
    robot: Option<String>,
    catalog_path: Option<PathBuf>,
) -> Result<()> {
    display::header("Robot personality diagnosis");

    if !prompt::ask_consent()? {
        println!("Diagnosis needs consent to store the result. Nothing was run.");
        return Ok(());
    }

    let user_id = config.ensure_user_id()?;
    let catalog = match select_catalog(&config, location, catalog_path)? {
        Some(catalog) => catalog,
        None => {
            println!("Cancelled.");
            return Ok(());
        }
    };
    let db = PersonaDb::open(db).await?;
    let robot_name = match select_robot(&db, &config, &user_id, robot).await? {
        Some(name) => name,
        None => {
            println!("Cancelled.");
            return Ok(());
        }
    };

    info!(catalog = %catalog.name, robot = %robot_name, "starting diagnosis session");

    // One answer per catalog question, in order.
    let mut responses = ResponseSet::new();
    let total = catalog.questions.len();
    for (i, question) in catalog.questions.iter().enumerate() {
        match prompt::ask_question(question, i + 1, total)? {
            PromptOutcome::Selected(selection) => {
                responses.record(question.id.clone(), selection)
            }
            PromptOutcome::Cancelled => {
                println!("Cancelled - nothing was stored.");
                return Ok(());
            }
        }
    }

    let tally = persona_common::accumulate(&catalog, &responses)?;

    // Tie gate: every tied pair needs its forced-choice answer before
    // the type can be derived. Cancelling here abandons the whole run.
    let mut tie_answers = TieAnswers::new();
    for pair in tally.tied_pairs() {
        let tie_question = catalog
            .tie_breaker(pair)
            .with_context(|| format!("catalog '{}' has no tie-breaker for {pair}", catalog.name))?;
        match prompt::ask_tie_breaker(tie_question)? {
            PromptOutcome::Selected(selection) => tie_answers.record(pair, selection),
            PromptOutcome::Cancelled => {
                println!("The diagnosis cannot complete without the tie-break answer.");
                return Ok(());
            }
        }
    }

    let diagnosis = classify(&catalog, &responses, &tie_answers)?;

    // Previous result must be read before the insert, or the comparison
    // would see the run we are about to store.
    let previous = db.latest_diagnosis(&user_id, &robot_name).await?;

    db.insert_diagnosis(NewDiagnosis {
        user_id: user_id.clone(),
        robot_id: robot_name.clone(),
        location: catalog.name.clone(),
        profile: config.profile.clone(),
        responses,
        category: diagnosis.code,
        tally: diagnosis.tally.clone(),
        created_at: Utc::now(),
    })
    .await?;

    display::result_code(&robot_name, &diagnosis.code);
    display::tally_bars(&diagnosis.tally);
    display::guide(&diagnosis.code);

    display::header("Feedback");
    let previous_code = previous.as_ref().map(|r| &r.category);
    display::note(&feedback::adaptive_feedback(&diagnosis.code, previous_code));
    if let Some(recommendation) = feedback::recommendation_for(&diagnosis.code) {
        display::note(recommendation);
    }
    let history = db.history(&user_id, Some(&robot_name)).await?;
    let timestamps: Vec<_> = history.iter().map(|r| r.created_at).collect();
    if let Some(hint) = feedback::cadence_hint(&timestamps) {
        display::note(hint);
    }

    Ok(())
}

/// Show stored diagnoses for the current user.
pub async fn history(db: DbLocation, mut config: CtlConfig, robot: Option<String>) -> Result<()> {
    let user_id = config.ensure_user_id()?;
    let db = PersonaDb::open(db).await?;
    let records = db.history(&user_id, robot.as_deref()).await?;

    display::header("Diagnosis history");
    display::history_table(&records);
    Ok(())
}

/// Aggregate statistics over every stored diagnosis.
pub async fn show_stats(db: DbLocation, group_by: Option<String>, trend: bool) -> Result<()> {
    let db = PersonaDb::open(db).await?;
    let records = db.all_diagnoses().await?;

    display::header("Type distribution");
    display::distribution_table(&stats::distribution(&records));

    if let Some(key_name) = group_by {
        let key = stats::GroupKey::from_name(&key_name).with_context(|| {
            format!(
                "unknown group key '{key_name}' (expected one of: gender, age-group, occupation, robot, location)"
            )
        })?;
        for (group, counts) in stats::group_breakdown(&records, key) {
            display::header(&format!("{} = {}", key.name(), group));
            display::distribution_table(&counts);
        }
    }

    if trend {
        display::header("Daily trend");
        for (day, counts) in stats::daily_trend(&records) {
            let total: u32 = counts.values().sum();
            let codes: Vec<String> = counts
                .iter()
                .map(|(code, n)| format!("{code}:{n}"))
                .collect();
            println!("   {day}  {total:>3}  {}", codes.join(" "));
        }
    }

    Ok(())
}

/// Robot registry management.
pub async fn robots_list(db: DbLocation, mut config: CtlConfig) -> Result<()> {
    let user_id = config.ensure_user_id()?;
    let db = PersonaDb::open(db).await?;
    let robots = db.list_robots(&user_id).await?;

    display::header("Registered robots");
    if robots.is_empty() {
        println!("No robots registered. Add one with: personactl robots add <name>");
        return Ok(());
    }
    for robot in robots {
        if robot.description.is_empty() {
            println!("   {}", robot.name.bright_white());
        } else {
            println!("   {}  {}", robot.name.bright_white(), robot.description.dimmed());
        }
    }
    Ok(())
}

pub async fn robots_add(
    db: DbLocation,
    mut config: CtlConfig,
    name: String,
    description: Option<String>,
) -> Result<()> {
    let user_id = config.ensure_user_id()?;
    let db = PersonaDb::open(db).await?;
    let added = db
        .register_robot(&user_id, &name, description.as_deref().unwrap_or(""))
        .await?;
    if added {
        println!("Registered robot '{}'", name.trim());
    } else {
        println!("Robot '{}' is already registered", name.trim());
    }
    Ok(())
}

pub async fn robots_remove(db: DbLocation, mut config: CtlConfig, name: String) -> Result<()> {
    let user_id = config.ensure_user_id()?;
    let db = PersonaDb::open(db).await?;
    if db.delete_robot(&user_id, &name).await? {
        println!("Removed robot '{name}'");
    } else {
        println!("No robot named '{name}'");
    }
    Ok(())
}

/// List the built-in catalog variants.
pub fn locations() -> Result<()> {
    display::header("Catalog variants");
    for location in Location::ALL {
        let catalog = Catalog::builtin(location);
        println!(
            "   {:<14} {:>2} questions",
            location.name().bright_white(),
            catalog.questions.len()
        );
    }
    println!();
    println!("Use a variant with: personactl diagnose --location <name>");
    Ok(())
}

/// Affinity between two category codes.
pub fn compat(user: String, robot: String) -> Result<()> {
    let user_code: CategoryCode = user
        .parse()
        .with_context(|| format!("invalid category code '{user}'"))?;
    let robot_code: CategoryCode = robot
        .parse()
        .with_context(|| format!("invalid category code '{robot}'"))?;

    let (score, level) = compatibility::compatibility(&user_code, &robot_code);
    display::compatibility_line(&user_code, &robot_code, score, level);
    Ok(())
}

/// Show or update the configuration.
pub fn config_cmd(mut config: CtlConfig, set: Option<String>) -> Result<()> {
    match set {
        Some(setting) => {
            config.apply_setting(&setting)?;
            config.save()?;
            println!("Updated: {setting}");
        }
        None => {
            if let Some(path) = CtlConfig::user_config_path() {
                println!("# {}", path.display());
            }
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

/// Resolve which catalog to use for this session. Returns None if the
/// user cancels the location pick.
fn select_catalog(
    config: &CtlConfig,
    location_flag: Option<String>,
    catalog_path: Option<PathBuf>,
) -> Result<Option<Catalog>> {
    if let Some(path) = catalog_path {
        return Catalog::from_toml_path(&path).map(Some);
    }

    let name = location_flag.or_else(|| config.default_location.clone());
    let location = match name {
        Some(name) => Location::from_name(&name)
            .with_context(|| format!("unknown location '{name}' (see: personactl locations)"))?,
        None => {
            let names: Vec<String> = Location::ALL.iter().map(|l| l.name().to_string()).collect();
            match prompt::ask_pick("Where will you interact with the robot?", &names)? {
                Some(index) => Location::ALL[index],
                None => return Ok(None),
            }
        }
    };
    Ok(Some(Catalog::builtin(location)))
}

/// Resolve which robot this diagnosis is about, registering a new alias
/// when none exists yet. Returns None if the user cancels.
async fn select_robot(
    db: &PersonaDb,
    config: &CtlConfig,
    user_id: &str,
    robot_flag: Option<String>,
) -> Result<Option<String>> {
    if let Some(name) = robot_flag {
        let name = name.trim().to_string();
        db.register_robot(user_id, &name, "").await?;
        return Ok(Some(name));
    }

    let robots = db.list_robots(user_id).await?;
    if robots.is_empty() {
        let name = prompt::ask_line("Name the robot being diagnosed (e.g. kitchen-bot):")?;
        if name.is_empty() {
            return Ok(None);
        }
        db.register_robot(user_id, &name, "").await?;
        return Ok(Some(name));
    }

    if let Some(default) = &config.default_robot {
        if robots.iter().any(|r| &r.name == default) {
            return Ok(Some(default.clone()));
        }
    }

    let names: Vec<String> = robots.into_iter().map(|r| r.name).collect();
    match prompt::ask_pick("Which robot is being diagnosed?", &names)? {
        Some(index) => Ok(Some(names[index].clone())),
        None => Ok(None),
    }
}
