use crate::{Client, ClientResult};

use fd_core::{NewPatient, Patient, PatientQuery, PatientUpdate};

use reqwest::Method;

impl Client {
    /// List patients visible to the caller (clinicians only see their own)
    pub async fn list_patients(&self, query: &PatientQuery) -> ClientResult<Vec<Patient>> {
        let req = self.authorized(Method::GET, "/patients/")?.query(query);
        self.execute(req).await
    }

    /// Get a patient by ID
    pub async fn get_patient(&self, id: i64) -> ClientResult<Patient> {
        let req = self.authorized(Method::GET, &format!("/patients/{}", id))?;
        self.execute(req).await
    }

    /// Create a new patient
    pub async fn create_patient(&self, patient: &NewPatient) -> ClientResult<Patient> {
        let req = self.authorized(Method::POST, "/patients/")?.json(patient);
        self.execute(req).await
    }

    /// Update a patient
    pub async fn update_patient(&self, id: i64, update: &PatientUpdate) -> ClientResult<Patient> {
        let req = self
            .authorized(Method::PUT, &format!("/patients/{}", id))?
            .json(update);
        self.execute(req).await
    }

    /// Delete a patient
    pub async fn delete_patient(&self, id: i64) -> ClientResult<()> {
        let req = self.authorized(Method::DELETE, &format!("/patients/{}", id))?;
        self.execute_empty(req).await
    }
}
