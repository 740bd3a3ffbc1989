//! Dashboard summary endpoint

use crate::models::DashboardData;

pub async fn fetch() -> Result<DashboardData, String> {
    super::get("/dashboard/data", "data").await
}
