use crate::{Client, ClientResult, ImageUpload};

use fd_core::{Diagnostic, DiagnosticFilter};

use reqwest::Method;
use reqwest::multipart::{Form, Part};

impl Client {
    /// List diagnostics, optionally for one patient or one stage
    pub async fn list_diagnostics(&self, filter: &DiagnosticFilter) -> ClientResult<Vec<Diagnostic>> {
        let req = self.authorized(Method::GET, "/diagnostics/")?.query(filter);
        self.execute(req).await
    }

    /// Get a diagnostic by ID
    pub async fn get_diagnostic(&self, id: i64) -> ClientResult<Diagnostic> {
        let req = self.authorized(Method::GET, &format!("/diagnostics/{}", id))?;
        self.execute(req).await
    }

    /// Submit an image for analysis. The backend stores the image and
    /// returns the resulting diagnostic.
    pub async fn create_diagnostic(
        &self,
        patient_id: i64,
        image: ImageUpload,
        model: &str,
        notes: Option<&str>,
    ) -> ClientResult<Diagnostic> {
        let mime = image.mime_type();
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(mime)?;

        let mut form = Form::new()
            .text("patient_id", patient_id.to_string())
            .text("modele_utilise", model.to_string())
            .part("image", part);
        if let Some(notes) = notes {
            form = form.text("notes", notes.to_string());
        }

        let req = self
            .authorized(Method::POST, "/diagnostics/")?
            .multipart(form);
        self.execute(req).await
    }

    /// Delete a diagnostic
    pub async fn delete_diagnostic(&self, id: i64) -> ClientResult<()> {
        let req = self.authorized(Method::DELETE, &format!("/diagnostics/{}", id))?;
        self.execute_empty(req).await
    }
}
