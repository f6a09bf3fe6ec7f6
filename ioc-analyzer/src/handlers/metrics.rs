use axum::extract::State;

use crate::AppState;

pub async fn metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
