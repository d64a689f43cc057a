//! The home page: show a random name, accept new ones.

use std::sync::Arc;

use askama::Template;
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use namemycat_core::{title_case, DEFAULT_NAME};
use namemycat_store::{names, NameSession, SubmitError};

use crate::error::ApiError;
use crate::flash::Flash;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    name: String,
    flash: Option<Flash>,
}

/// Form body of `POST /`.
#[derive(Debug, Deserialize)]
pub struct SubmitNameForm {
    /// Submitted name. A missing field is treated as empty.
    #[serde(default)]
    pub name: String,
}

/// Render a random stored name, or "Cat" if there are none.
///
/// A pending flash is shown once and then cleared.
pub async fn show_name(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let mut session = state.store.session();
    let name = names::get_random_name(session.as_mut()).await;
    end_session(session.as_mut()).await;

    let name = name.unwrap_or_else(|| DEFAULT_NAME.to_string());
    let flash = Flash::from_headers(&headers, &state.config.secret_key);

    let page = Html(
        HomeTemplate {
            name: title_case(&name),
            flash,
        }
        .render()?,
    );

    if flash.is_some() {
        Ok(([(SET_COOKIE, Flash::clear_cookie())], page).into_response())
    } else {
        Ok(page.into_response())
    }
}

/// Store a submitted name and redirect back to the home page.
///
/// Empty names, unreadable bodies and database failures all produce the same
/// failure flash.
pub async fn submit_name(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SubmitNameForm>, FormRejection>,
) -> Response {
    let flash = match form {
        Ok(Form(form)) => store_name(&state, &form.name).await,
        Err(rejection) => {
            tracing::info!(error = %rejection, "Rejected unreadable name submission");
            Flash::Failure
        }
    };

    (
        [(SET_COOKIE, flash.set_cookie(&state.config.secret_key))],
        Redirect::to("/"),
    )
        .into_response()
}

async fn store_name(state: &AppState, name: &str) -> Flash {
    let mut session = state.store.session();
    let flash = match names::submit_name(session.as_mut(), name).await {
        Ok(_) => Flash::Success,
        Err(SubmitError::EmptyName) => {
            tracing::info!("Rejected empty name submission");
            Flash::Failure
        }
        Err(SubmitError::Store(_)) => Flash::Failure,
    };
    end_session(session.as_mut()).await;
    flash
}

async fn end_session(session: &mut dyn NameSession) {
    if let Err(e) = session.close().await {
        tracing::warn!(error = %e, "Failed to close request session");
    }
}
