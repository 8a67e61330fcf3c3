use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, FromRow)]
pub struct DashboardStats {
    pub total_interviews: i64,
    pub completed_interviews: i64,
    pub pending_interviews: i64,
    pub total_recordings: i64,
    pub total_press_releases: i64,
}
