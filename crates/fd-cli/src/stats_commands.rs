use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum StatsCommands {
    /// Totals, fibrosis distribution and monthly counts
    Summary {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        #[arg(long)]
        medecin_id: Option<i64>,
    },

    /// Per-clinician activity (admin only)
    Clinicians,

    /// Per-model performance
    Performance,
}
