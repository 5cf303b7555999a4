use crate::{
    diagnostic_commands::DiagnosticCommands, patient_commands::PatientCommands,
    stats_commands::StatsCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and persist the bearer credential
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Forget the persisted credential
    Logout,

    /// Register a new account (accepted locally, not sent to the server)
    Register {
        /// Display name
        #[arg(long)]
        nom: String,

        #[arg(long)]
        email: String,

        /// Role: medecin, admin or super-admin
        #[arg(long, default_value = "medecin")]
        role: String,
    },

    /// Show the logged-in identity
    Whoami {
        /// Print the identity snapshot from the last login without asking the server
        #[arg(long)]
        offline: bool,
    },

    /// List the navigation entries available to the logged-in role
    Nav,

    /// Open a view (dashboard, patients, patient-form, diagnostics, admin)
    Open {
        view: String,
    },

    /// Patient operations
    Patient {
        #[command(subcommand)]
        action: PatientCommands,
    },

    /// Diagnostic operations
    Diagnostic {
        #[command(subcommand)]
        action: DiagnosticCommands,
    },

    /// Dashboard statistics
    Stats {
        #[command(subcommand)]
        action: StatsCommands,
    },
}
