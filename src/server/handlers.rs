//! Route handlers for the web interface
//!
//! Each mutating handler is a single-pass flow: validate the submitted form,
//! re-render with the messages (and the entered values) when it fails, else
//! persist inside one scoped store connection and redirect with the outcome
//! notice. Store errors are logged here, at the boundary; the response only
//! ever carries a generic message.

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info};

use crate::server::flash::{Notice, NoticeParams};
use crate::server::pages;
use crate::server::AppState;
use crate::validate::{CustomerFields, CustomerForm};

/// GET / - list all customers, newest first
///
/// A store failure degrades to an empty listing with a failure banner rather
/// than failing the whole page.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<NoticeParams>,
) -> Html<String> {
    match state.store.list_customers() {
        Ok(customers) => pages::index_page(&customers, params.notice(), false),
        Err(e) => {
            error!("Failed to load customer listing: {:#}", e);
            pages::index_page(&[], params.notice(), true)
        }
    }
}

/// GET /add - show the empty creation form
pub async fn add_form() -> Html<String> {
    pages::add_page(&CustomerForm::default(), &[])
}

/// POST /add - validate and insert a new customer
pub async fn add_submit(
    State(state): State<AppState>,
    Form(form): Form<CustomerForm>,
) -> Response {
    let fields = match CustomerFields::try_from(form.clone()) {
        Ok(fields) => fields,
        Err(errors) => return pages::add_page(&form, &errors).into_response(),
    };

    match state.store.insert_customer(&fields) {
        Ok(id) => {
            info!("Created customer {}", id);
            Notice::Created.redirect().into_response()
        }
        Err(e) => {
            error!("Failed to insert customer: {:#}", e);
            pages::add_page(&form, &[pages::STORE_FAILURE_MESSAGE.to_string()]).into_response()
        }
    }
}

/// GET /update/{id} - show the edit form pre-filled with current values
pub async fn update_form(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.store.get_customer(id) {
        Ok(Some(customer)) => pages::update_page(id, &customer.to_form(), &[]).into_response(),
        Ok(None) => Notice::NotFound.redirect().into_response(),
        Err(e) => {
            error!("Failed to fetch customer {}: {:#}", id, e);
            Notice::StoreFailure.redirect().into_response()
        }
    }
}

/// POST /update/{id} - validate and overwrite an existing customer
pub async fn update_submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<CustomerForm>,
) -> Response {
    let fields = match CustomerFields::try_from(form.clone()) {
        Ok(fields) => fields,
        Err(errors) => return pages::update_page(id, &form, &errors).into_response(),
    };

    match state.store.update_customer(id, &fields) {
        Ok(true) => {
            info!("Updated customer {}", id);
            Notice::Updated.redirect().into_response()
        }
        Ok(false) => Notice::NotFound.redirect().into_response(),
        Err(e) => {
            error!("Failed to update customer {}: {:#}", id, e);
            pages::update_page(id, &form, &[pages::STORE_FAILURE_MESSAGE.to_string()])
                .into_response()
        }
    }
}

/// POST /delete/{id} - delete a customer
pub async fn delete_submit(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.store.delete_customer(id) {
        Ok(true) => {
            info!("Deleted customer {}", id);
            Notice::Deleted.redirect().into_response()
        }
        Ok(false) => Notice::NotFound.redirect().into_response(),
        Err(e) => {
            error!("Failed to delete customer {}: {:#}", id, e);
            Notice::StoreFailure.redirect().into_response()
        }
    }
}

/// Fallback for unmatched routes
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, pages::not_found_page()).into_response()
}
