use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PatientCommands {
    /// List patients
    List {
        /// Match on first or last name
        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        skip: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },

    /// Get a patient by ID
    Get { id: i64 },

    /// Create a patient
    Create {
        /// Last name
        #[arg(long)]
        nom: String,

        /// First name
        #[arg(long)]
        prenom: String,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        date_naissance: String,

        /// Sex: M or F
        #[arg(long, value_parser = ["M", "F"])]
        sexe: String,

        #[arg(long)]
        telephone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        adresse: Option<String>,
    },

    /// Update a patient. Only the given fields change.
    Update {
        id: i64,

        #[arg(long)]
        nom: Option<String>,

        #[arg(long)]
        prenom: Option<String>,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        date_naissance: Option<String>,

        #[arg(long, value_parser = ["M", "F"])]
        sexe: Option<String>,

        #[arg(long)]
        telephone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        adresse: Option<String>,
    },

    /// Delete a patient
    Delete { id: i64 },
}
