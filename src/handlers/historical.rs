use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    models::interview_request::{InterviewRequest, InterviewStatus},
    state::AppState,
    utils::search::filter_interview_requests,
};

#[derive(Debug, Default, Deserialize)]
pub struct HistoricalFilter {
    pub search: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoricalRow<'a> {
    #[serde(flatten)]
    pub request: &'a InterviewRequest,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub method_label: &'static str,
    pub method_color: &'static str,
}

impl<'a> From<&'a InterviewRequest> for HistoricalRow<'a> {
    fn from(request: &'a InterviewRequest) -> Self {
        HistoricalRow {
            request,
            status_label: request.status.label(),
            status_color: request.status.color(),
            method_label: request.interview_method.label(),
            method_color: request.interview_method.color(),
        }
    }
}

// Contadores sobre el conjunto completo, sin filtrar
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct HistoricalSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub media_count: usize,
}

impl HistoricalSummary {
    pub fn from_rows(rows: &[InterviewRequest]) -> Self {
        let count = |status: InterviewStatus| rows.iter().filter(|r| r.status == status).count();
        HistoricalSummary {
            total: rows.len(),
            completed: count(InterviewStatus::Completed),
            pending: count(InterviewStatus::Pending),
            media_count: rows.iter().map(|r| r.media_name.as_str()).collect::<HashSet<_>>().len(),
        }
    }
}

// GET /api/historical?search=texto&status=pending (público)
pub async fn historical_handler(
    opts: Option<Query<HistoricalFilter>>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let Query(opts) = opts.unwrap_or(Query(HistoricalFilter::default()));
    let rows = state.store.interview_requests().await;

    let items: Vec<HistoricalRow> =
        filter_interview_requests(&rows, opts.search.as_deref(), opts.status.as_deref())
            .into_iter()
            .map(HistoricalRow::from)
            .collect();

    let body = serde_json::json!({
        "summary": HistoricalSummary::from_rows(&rows),
        "items": items,
    });

    (StatusCode::OK, Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interview_request::InterviewMethod;
    use chrono::{NaiveDateTime, Utc};
    use uuid::Uuid;

    fn request(media: &str, status: InterviewStatus) -> InterviewRequest {
        InterviewRequest {
            id: Uuid::new_v4(),
            interviewer_name: "Rina".into(),
            media_name: media.into(),
            topic: "Banjir".into(),
            interview_method: InterviewMethod::Virtual,
            interview_datetime: NaiveDateTime::parse_from_str("2024-01-10T08:00:00", "%Y-%m-%dT%H:%M:%S").unwrap(),
            virtual_link: Some("https://meet.example/a".into()),
            status,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn summary_counts_statuses_and_distinct_media() {
        let rows = vec![
            request("Kompas", InterviewStatus::Completed),
            request("Kompas", InterviewStatus::Pending),
            request("Tempo", InterviewStatus::Pending),
            request("Detik", InterviewStatus::Cancelled),
        ];
        assert_eq!(
            HistoricalSummary::from_rows(&rows),
            HistoricalSummary { total: 4, completed: 1, pending: 2, media_count: 3 }
        );
    }

    #[test]
    fn row_carries_labels_and_colors() {
        let req = request("Kompas", InterviewStatus::Approved);
        let value = serde_json::to_value(HistoricalRow::from(&req)).unwrap();
        assert_eq!(value["status"], "approved");
        assert_eq!(value["status_label"], "Disetujui");
        assert_eq!(value["status_color"], "bg-blue-100 text-blue-800");
        assert_eq!(value["method_label"], "Virtual Meeting");
        assert_eq!(value["media_name"], "Kompas");
    }
}
