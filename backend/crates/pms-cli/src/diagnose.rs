//! Backend smoke checks
//!
//! Runs health, database debug, project list, sprint list and a throwaway diagnostic sprint
//! creation against a live server. A failed health check ends the run; every
//! later step is attempted regardless of the one before it.

use crate::Client;

use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Serialize)]
pub struct DiagnosticStep {
    pub name: &'static str,
    pub ok: bool,
    pub detail: Value,
}

#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    pub steps: Vec<DiagnosticStep>,
    /// False when the run stopped early
    pub completed: bool,
}

impl DiagnosticReport {
    pub fn all_passed(&self) -> bool {
        self.completed && self.steps.iter().all(|s| s.ok)
    }
}

/// Body of the sprint created by the last step
pub fn diagnostic_sprint() -> Value {
    json!({
        "sprintName": "Diagnostic Sprint",
        "description": "Created by pms diagnose",
        "startDate": "2025-02-01",
        "endDate": "2025-02-15",
        "assignedUsers": [],
        "status": "Planning",
    })
}

pub async fn run_diagnostics(client: &Client) -> DiagnosticReport {
    let mut steps = Vec::new();

    let health = client.health().await;
    let healthy = health.is_ok();
    steps.push(step("health", health, |body| body));
    if !healthy {
        return DiagnosticReport {
            steps,
            completed: false,
        };
    }

    steps.push(step("debug-db", client.debug_db().await, |body| body));
    steps.push(step("list-projects", client.list_projects().await, |body| {
        json!(format!("Fetched {} projects", count(&body)))
    }));
    steps.push(step("list-sprints", client.list_sprints().await, |body| {
        json!(format!("Fetched {} sprints", count(&body)))
    }));
    steps.push(step(
        "create-sprint",
        client.create_sprint(&diagnostic_sprint()).await,
        |body| body,
    ));

    DiagnosticReport {
        steps,
        completed: true,
    }
}

fn step(
    name: &'static str,
    result: crate::CliClientResult<Value>,
    describe: impl FnOnce(Value) -> Value,
) -> DiagnosticStep {
    match result {
        Ok(body) => DiagnosticStep {
            name,
            ok: true,
            detail: describe(body),
        },
        Err(e) => DiagnosticStep {
            name,
            ok: false,
            detail: json!(e.to_string()),
        },
    }
}

fn count(body: &Value) -> usize {
    body.as_array().map_or(0, Vec::len)
}
