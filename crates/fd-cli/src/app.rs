use crate::{
    commands::Commands,
    diagnostic_commands::DiagnosticCommands,
    error::{CliError, Result as CliErrorResult},
    patient_commands::PatientCommands,
    stats_commands::StatsCommands,
};

use fd_auth::{AuthGateway, FileCredentialStore, NavigationOutcome, RoleGatedRouter, SessionStore};
use fd_client::{Client, ImageUpload};
use fd_config::{ApiConfig, Config};
use fd_core::models::timestamp;
use fd_core::{
    CoreError, DiagnosticFilter, FibrosisStage, Identity, NewPatient, PatientQuery, PatientUpdate,
    Registration, Role, Sex, StatisticsFilter, View,
};

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde_json::{Value, json};

/// Wires the session store and router to one command invocation.
pub struct App {
    session: SessionStore<AuthGateway>,
    router: RoleGatedRouter,
}

impl App {
    pub fn new(gateway: AuthGateway) -> Self {
        Self {
            session: SessionStore::new(gateway),
            router: RoleGatedRouter::new(),
        }
    }

    /// Build from configuration. `server` overrides `[api].base_url`.
    pub fn from_config(config: &Config, server: Option<&str>) -> CliErrorResult<Self> {
        let api = match server {
            Some(url) => {
                let api = ApiConfig {
                    base_url: url.to_string(),
                };
                api.validate()?;
                api
            }
            None => config.api.clone(),
        };
        let base_url = api.base_url.as_str();
        let session_file = config.session_file_path()?;
        debug!("Using API at {base_url}, session file {}", session_file.display());

        let store = Arc::new(FileCredentialStore::new(session_file));
        Ok(Self::new(AuthGateway::new(Client::new(base_url), store)))
    }

    pub fn router(&self) -> &RoleGatedRouter {
        &self.router
    }

    pub async fn run(&mut self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::Login { email, password } => self.login(&email, &password).await,
            Commands::Logout => {
                self.session.clear();
                self.router.sync(&self.session.current());
                Ok(json!({ "logged_out": true }))
            }
            Commands::Register { nom, email, role } => {
                let registration = Registration {
                    display_name: nom,
                    email,
                    role: Role::from_str(&role)?,
                };
                let registered = self
                    .session
                    .authenticator()
                    .register(&registration)
                    .await?;
                Ok(json!({ "registered": registered }))
            }
            Commands::Whoami { offline: true } => {
                let identity = self
                    .session
                    .authenticator()
                    .cached_identity()
                    .ok_or_else(CliError::not_authenticated)?;
                Ok(serde_json::to_value(identity)?)
            }
            Commands::Whoami { offline: false } => {
                let identity = self.restore().await?;
                Ok(serde_json::to_value(identity)?)
            }
            Commands::Nav => {
                let identity = self.restore().await?;
                Ok(json!({
                    "role": identity.role,
                    "navigation": self.router.navigation_entries(),
                }))
            }
            Commands::Open { view } => {
                let view = View::from_str(&view)?;
                self.restore().await?;
                match self.router.navigate(view) {
                    NavigationOutcome::Shown(view) => Ok(json!({ "view": view })),
                    NavigationOutcome::Denied(view) => Err(CliError::view_denied(view)),
                    NavigationOutcome::Ignored => Ok(json!({
                        "view": self.router.current_view(),
                        "ignored": true,
                    })),
                }
            }
            Commands::Patient { action } => self.patient(action).await,
            Commands::Diagnostic { action } => self.diagnostic(action).await,
            Commands::Stats { action } => self.stats(action).await,
        }
    }

    async fn login(&mut self, email: &str, password: &str) -> CliErrorResult<Value> {
        if !self.session.login(email, password).await {
            return Err(CliError::login_failed());
        }

        self.router.sync(&self.session.current());
        let identity = self
            .session
            .current()
            .identity()
            .cloned()
            .ok_or_else(CliError::not_authenticated)?;

        Ok(json!({
            "user": identity,
            "navigation": self.router.navigation_entries(),
        }))
    }

    /// Restore the session from the persisted credential and apply it to
    /// the router.
    async fn restore(&mut self) -> CliErrorResult<Identity> {
        let session = self.session.initialize().await;
        self.router.sync(&session);
        session
            .identity()
            .cloned()
            .ok_or_else(CliError::not_authenticated)
    }

    /// Navigate to `view` and return a client carrying the credential.
    async fn open(&mut self, view: View) -> CliErrorResult<Client> {
        self.restore().await?;
        match self.router.navigate(view) {
            NavigationOutcome::Shown(_) => Ok(self.session.authenticator().authorized_client()),
            NavigationOutcome::Denied(view) => Err(CliError::view_denied(view)),
            NavigationOutcome::Ignored => Err(CliError::not_authenticated()),
        }
    }

    // =========================================================================
    // Patients
    // =========================================================================

    async fn patient(&mut self, action: PatientCommands) -> CliErrorResult<Value> {
        let view = match action {
            PatientCommands::Create { .. } | PatientCommands::Update { .. } => View::PatientForm,
            _ => View::PatientList,
        };
        let client = self.open(view).await?;

        match action {
            PatientCommands::List {
                search,
                skip,
                limit,
            } => {
                let query = PatientQuery {
                    search,
                    skip,
                    limit,
                };
                Ok(serde_json::to_value(client.list_patients(&query).await?)?)
            }
            PatientCommands::Get { id } => {
                Ok(serde_json::to_value(client.get_patient(id).await?)?)
            }
            PatientCommands::Create {
                nom,
                prenom,
                date_naissance,
                sexe,
                telephone,
                email,
                adresse,
            } => {
                let patient = NewPatient {
                    nom,
                    prenom,
                    date_naissance: parse_date("date_naissance", &date_naissance)?,
                    sexe: parse_sex(&sexe)?,
                    telephone,
                    email,
                    adresse,
                };
                patient.validate()?;

                let created = client.create_patient(&patient).await?;
                info!("Created patient {}", created.id);
                Ok(serde_json::to_value(created)?)
            }
            PatientCommands::Update {
                id,
                nom,
                prenom,
                date_naissance,
                sexe,
                telephone,
                email,
                adresse,
            } => {
                let update = PatientUpdate {
                    nom,
                    prenom,
                    date_naissance: date_naissance
                        .as_deref()
                        .map(|value| parse_date("date_naissance", value))
                        .transpose()?,
                    sexe: sexe.as_deref().map(parse_sex).transpose()?,
                    telephone,
                    email,
                    adresse,
                };
                update.validate()?;

                Ok(serde_json::to_value(
                    client.update_patient(id, &update).await?,
                )?)
            }
            PatientCommands::Delete { id } => {
                client.delete_patient(id).await?;
                Ok(json!({ "deleted": id }))
            }
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    async fn diagnostic(&mut self, action: DiagnosticCommands) -> CliErrorResult<Value> {
        let client = self.open(View::Diagnostics).await?;

        match action {
            DiagnosticCommands::List {
                patient_id,
                resultat,
            } => {
                let filter = DiagnosticFilter {
                    patient_id,
                    resultat: resultat.map(FibrosisStage::try_from).transpose()?,
                };
                Ok(serde_json::to_value(client.list_diagnostics(&filter).await?)?)
            }
            DiagnosticCommands::Get { id } => {
                Ok(serde_json::to_value(client.get_diagnostic(id).await?)?)
            }
            DiagnosticCommands::Create {
                patient_id,
                image,
                model,
                notes,
            } => {
                let upload = read_image(&image).await?;
                let diagnostic = client
                    .create_diagnostic(patient_id, upload, &model, notes.as_deref())
                    .await?;
                info!(
                    "Diagnostic {} for patient {}: {}",
                    diagnostic.id, diagnostic.patient_id, diagnostic.resultat
                );
                Ok(serde_json::to_value(diagnostic)?)
            }
            DiagnosticCommands::Delete { id } => {
                client.delete_diagnostic(id).await?;
                Ok(json!({ "deleted": id }))
            }
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    async fn stats(&mut self, action: StatsCommands) -> CliErrorResult<Value> {
        let view = match action {
            StatsCommands::Clinicians => View::Admin,
            _ => View::Dashboard,
        };
        let client = self.open(view).await?;

        match action {
            StatsCommands::Summary {
                start_date,
                end_date,
                medecin_id,
            } => {
                let filter = StatisticsFilter {
                    start_date,
                    end_date,
                    medecin_id,
                };
                Ok(serde_json::to_value(client.statistics(&filter).await?)?)
            }
            StatsCommands::Clinicians => {
                Ok(serde_json::to_value(client.clinician_statistics().await?)?)
            }
            StatsCommands::Performance => {
                Ok(serde_json::to_value(client.model_performance().await?)?)
            }
        }
    }
}

#[track_caller]
pub(crate) fn parse_date(field: &str, value: &str) -> CliErrorResult<DateTime<Utc>> {
    timestamp::parse_lenient(value)
        .ok_or_else(|| CoreError::validation(field, format!("'{value}' is not a date (YYYY-MM-DD)")))
        .map_err(CliError::from)
}

#[track_caller]
pub(crate) fn parse_sex(value: &str) -> CliErrorResult<Sex> {
    match value {
        "M" | "m" => Ok(Sex::Male),
        "F" | "f" => Ok(Sex::Female),
        _ => Err(CoreError::validation("sexe", "expected M or F").into()),
    }
}

async fn read_image(path: &Path) -> CliErrorResult<ImageUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CliError::io(path.to_path_buf(), e))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();
    Ok(ImageUpload::new(file_name, bytes))
}
