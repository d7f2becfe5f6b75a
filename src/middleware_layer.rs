//! Request tagging and HTTP timing.
//!
//! Every request is classified by its `utm_medium` query parameter before it
//! reaches a handler. The resulting [`MarketingMedium`] is stored in the
//! request extensions and attached as the `mkt_medium` label on the request
//! duration histogram recorded once the response is ready.

use crate::app_state::AppState;
use crate::domain::{MarketingMedium, MediumQuery};
use axum::{
    extract::{MatchedPath, Query, Request, State},
    http::Uri,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Route label for requests that matched no route (404 fallback).
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Classify the marketing medium of a request URI.
///
/// A query string that does not decode to at most one `utm_medium` value
/// (e.g. the parameter repeated) is classified as [`MarketingMedium::Other`].
pub fn medium_from_uri(uri: &Uri) -> MarketingMedium {
    // ---
    match Query::<MediumQuery>::try_from_uri(uri) {
        Ok(Query(query)) => MarketingMedium::from_query(&query),
        Err(_) => MarketingMedium::Other,
    }
}

/// Middleware that tags each request and records its duration.
pub(crate) async fn track_request(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // ---
    let start = Instant::now();

    let medium = medium_from_uri(request.uri());
    request.extensions_mut().insert(medium);

    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());

    let response = next.run(request).await;

    state.metrics().record_http_request(
        start,
        &route,
        &method,
        response.status().as_u16(),
        medium,
    );

    response
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn medium(uri: &str) -> MarketingMedium {
        medium_from_uri(&uri.parse::<Uri>().unwrap())
    }

    #[test]
    fn medium_from_query_string() {
        // ---
        assert_eq!(medium("/"), MarketingMedium::None);
        assert_eq!(medium("/?utm_medium="), MarketingMedium::None);
        assert_eq!(medium("/?utm_medium=social"), MarketingMedium::Social);
        assert_eq!(medium("/?utm_medium=email&x=1"), MarketingMedium::Email);
        assert_eq!(medium("/?utm_medium=organic"), MarketingMedium::Organic);
        assert_eq!(medium("/?utm_medium=xyz"), MarketingMedium::Other);
    }

    #[test]
    fn unrelated_parameters_are_ignored() {
        assert_eq!(medium("/?utm_source=newsletter"), MarketingMedium::None);
    }

    #[test]
    fn percent_encoded_value_is_decoded() {
        assert_eq!(medium("/?utm_medium=%73ocial"), MarketingMedium::Social);
    }

    #[test]
    fn repeated_parameter_is_other() {
        assert_eq!(
            medium("/?utm_medium=social&utm_medium=email"),
            MarketingMedium::Other
        );
    }
}
