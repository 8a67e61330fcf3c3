use crate::models::interview_request::InterviewRequest;

/// Filtro de la vista histórica.
///
/// `search` se busca sin distinguir mayúsculas en el nombre del entrevistador,
/// el medio y el tema. `status` debe coincidir (también sin mayúsculas) salvo
/// que sea "all" o no venga.
pub fn filter_interview_requests<'a>(
    rows: &'a [InterviewRequest],
    search: Option<&str>,
    status: Option<&str>,
) -> Vec<&'a InterviewRequest> {
    let needle = search.unwrap_or_default().to_lowercase();
    let status = status
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty() && s != "all");

    rows.iter()
        .filter(|item| {
            let matches_search = item.interviewer_name.to_lowercase().contains(&needle)
                || item.media_name.to_lowercase().contains(&needle)
                || item.topic.to_lowercase().contains(&needle);

            let matches_status = match &status {
                Some(wanted) => item.status.as_str() == wanted,
                None => true,
            };

            matches_search && matches_status
        })
        .collect()
}
