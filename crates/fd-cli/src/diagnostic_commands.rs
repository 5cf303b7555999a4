use fd_core::DEFAULT_DIAGNOSTIC_MODEL;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum DiagnosticCommands {
    /// List diagnostics
    List {
        #[arg(long)]
        patient_id: Option<i64>,

        /// Fibrosis stage 0-4
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=4))]
        resultat: Option<i64>,
    },

    /// Get a diagnostic by ID
    Get { id: i64 },

    /// Submit an image for analysis
    Create {
        #[arg(long)]
        patient_id: i64,

        /// Image file to upload
        #[arg(long)]
        image: PathBuf,

        #[arg(long, default_value = DEFAULT_DIAGNOSTIC_MODEL)]
        model: String,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a diagnostic
    Delete { id: i64 },
}
