use crate::{Client, ClientResult};

use fd_core::{ClinicianStats, ModelPerformance, Statistics, StatisticsFilter};

use reqwest::Method;

impl Client {
    /// Aggregate statistics, optionally bounded by date or clinician
    pub async fn statistics(&self, filter: &StatisticsFilter) -> ClientResult<Statistics> {
        let req = self.authorized(Method::GET, "/stats/")?.query(filter);
        self.execute(req).await
    }

    /// Per-clinician counters (admin only on the backend)
    pub async fn clinician_statistics(&self) -> ClientResult<Vec<ClinicianStats>> {
        let req = self.authorized(Method::GET, "/stats/medecins")?;
        self.execute(req).await
    }

    /// Per-model confidence summary
    pub async fn model_performance(&self) -> ClientResult<Vec<ModelPerformance>> {
        let req = self.authorized(Method::GET, "/stats/performance")?;
        self.execute(req).await
    }
}
