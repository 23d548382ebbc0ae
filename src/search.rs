use crate::app::AppState;

/// Narrow `app.people` to labels containing the trimmed query, ignoring case.
/// The highlight follows the selection when it is still visible.
pub fn apply_search(app: &mut AppState) {
    let q = app.search_query.trim().to_lowercase();
    app.people = if q.is_empty() {
        app.people_all.clone()
    } else {
        app.people_all
            .iter()
            .filter(|p| p.label().to_lowercase().contains(&q))
            .cloned()
            .collect()
    };
    app.highlighted = app
        .selected_id
        .and_then(|id| app.people.iter().position(|p| p.id == id))
        .unwrap_or(0);
}
