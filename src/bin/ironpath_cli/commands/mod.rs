// ABOUTME: Subcommand implementations for ironpath-cli
// ABOUTME: Loads a set log into in-memory stores and prints service results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ironpath::clock::SystemClock;
use ironpath::config::IntelligenceConfig;
use ironpath::errors::{AppError, AppResult};
use ironpath::log_import::read_set_log;
use ironpath::models::WorkoutTemplate;
use ironpath::services::AnalyticsService;
use ironpath::stores::{InMemoryLogStore, InMemoryProgramStore, InMemoryTemplateStore};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

type Result<T> = AppResult<T>;

/// Template id used for ad-hoc prescriptions from the command line
const CLI_TEMPLATE_ID: &str = "cli";

struct Session {
    athlete_id: Uuid,
    service: AnalyticsService,
    templates: InMemoryTemplateStore,
}

async fn load_session(config: &IntelligenceConfig, log: &Path) -> Result<Session> {
    let athlete_id = Uuid::new_v4();
    let logs = InMemoryLogStore::new();
    logs.record_sets(athlete_id, read_set_log(log).await?)?;

    let templates = InMemoryTemplateStore::new();
    let service = AnalyticsService::new(
        config,
        Arc::new(SystemClock),
        Arc::new(logs),
        Arc::new(InMemoryProgramStore::new()),
        Arc::new(templates.clone()),
    );

    Ok(Session {
        athlete_id,
        service,
        templates,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Forecast one exercise, optionally against a goal weight
pub async fn forecast(
    config: &IntelligenceConfig,
    log: &Path,
    exercise: &str,
    target: Option<f64>,
) -> Result<()> {
    let session = load_session(config, log).await?;
    let result = session
        .service
        .advanced_analytics(session.athlete_id, exercise, target)
        .await?;

    info!(exercise, days_to_goal = ?result.prediction.days_to_goal, "Forecast complete");
    print_json(&result)
}

/// Report plateau verdicts for every exercise in the log
pub async fn plateaus(config: &IntelligenceConfig, log: &Path) -> Result<()> {
    let session = load_session(config, log).await?;
    let results = session.service.plateaus(session.athlete_id).await?;
    print_json(&results)
}

/// Start a default program and prescribe weights for `exercises` in `week`
pub async fn prescribe(
    config: &IntelligenceConfig,
    log: &Path,
    exercises: Vec<String>,
    week: u32,
) -> Result<()> {
    if week == 0 {
        return Err(AppError::invalid_input("Week numbers start at 1"));
    }

    let session = load_session(config, log).await?;
    session.templates.insert(WorkoutTemplate {
        template_id: CLI_TEMPLATE_ID.to_owned(),
        name: "Command line selection".to_owned(),
        exercises,
    });

    let mut program = session.service.initiate_program(session.athlete_id).await?;
    while program.current_week < week && program.current_week < program.total_weeks() {
        program = session.service.advance_week(session.athlete_id).await?;
    }

    let prescriptions = session
        .service
        .suggested_weights(session.athlete_id, CLI_TEMPLATE_ID)
        .await?;

    print_json(&serde_json::json!({
        "week": program.current_week,
        "phase": program.current_phase().map(|phase| phase.phase_type),
        "prescriptions": prescriptions,
    }))
}
