//! pms - project management backend CLI
//!
//! # Examples
//!
//! ```bash
//! # Check the backend and its database
//! pms health --pretty
//! pms diagnose
//!
//! # Tasks visible to one developer
//! pms task list --user-id <uuid> --role "Backend Developer"
//!
//! # Hash any plaintext passwords left in the database
//! pms migrate-passwords
//! ```

use pms_cli::{
    Cli, CliResult, Client, Commands, ListCommands, ProjectCommands, ScopedListCommands,
    migrate_passwords, run_diagnostics,
};
use pms_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(&cli.server, cli.token.as_deref());

    let result: CliResult<(Value, bool)> = match cli.command {
        Commands::Health => client.health().await.map(ok).map_err(Into::into),
        Commands::DebugDb => client.debug_db().await.map(ok).map_err(Into::into),
        Commands::Login { email, password } => client
            .login(&email, &password)
            .await
            .map(ok)
            .map_err(Into::into),

        Commands::Project { action } => match action {
            ProjectCommands::List => client.list_projects().await,
            ProjectCommands::Get { id } => client.get_project(&id).await,
        }
        .map(ok)
        .map_err(Into::into),

        Commands::User {
            action: ListCommands::List,
        } => client.list_users().await.map(ok).map_err(Into::into),
        Commands::Sprint {
            action: ListCommands::List,
        } => client.list_sprints().await.map(ok).map_err(Into::into),

        Commands::Task {
            action: ScopedListCommands::List { user_id, role },
        } => client
            .list_tasks(user_id.as_deref(), role.as_deref())
            .await
            .map(ok)
            .map_err(Into::into),
        Commands::DailyTask {
            action: ScopedListCommands::List { user_id, role },
        } => client
            .list_daily_tasks(user_id.as_deref(), role.as_deref())
            .await
            .map(ok)
            .map_err(Into::into),

        Commands::Diagnose => {
            let report = run_diagnostics(&client).await;
            let passed = report.all_passed();
            serde_json::to_value(&report)
                .map(|value| (value, passed))
                .map_err(|e| pms_cli::ClientError::from_json(e).into())
        }

        Commands::MigratePasswords => run_migration().await,
    };

    // Handle result
    match result {
        Ok((value, success)) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    if success {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::FAILURE
                    }
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn ok(value: Value) -> (Value, bool) {
    (value, true)
}

/// Open the configured database directly and hash legacy passwords
async fn run_migration() -> CliResult<(Value, bool)> {
    let config = Config::load()?;
    config.validate()?;

    let path = config.database_path()?;
    let pool = pms_db::connect(&path, config.database.max_connections).await?;
    pms_db::run_migrations(&pool).await?;

    let updated = migrate_passwords(&pool).await;
    pool.close().await;

    Ok((
        json!({ "database": path.display().to_string(), "updated": updated? }),
        true,
    ))
}
