use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the backend is up
    Health,

    /// Show database name, tables and row counts
    DebugDb,

    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Project operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// User operations
    User {
        #[command(subcommand)]
        action: ListCommands,
    },

    /// Sprint operations
    Sprint {
        #[command(subcommand)]
        action: ListCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: ScopedListCommands,
    },

    /// Daily planner operations
    DailyTask {
        #[command(subcommand)]
        action: ScopedListCommands,
    },

    /// Run the backend smoke checks in order, stopping if health fails
    Diagnose,

    /// Re-hash every plaintext password in the configured database
    MigratePasswords,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,
    /// Get a project by ID
    Get {
        /// Project ID (UUID)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// List all records
    List,
}

#[derive(Subcommand)]
pub enum ScopedListCommands {
    /// List records, optionally narrowed to one user
    List {
        /// Only records assigned to or created by this user
        #[arg(long)]
        user_id: Option<String>,
        /// Caller role; "Admin" sees everything
        #[arg(long)]
        role: Option<String>,
    },
}
