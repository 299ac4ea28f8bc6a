//! Page handlers
//!
//! Each detail page runs the same pipeline:
//! parse `id` -> fetch endpoint -> decode envelope -> select record -> render.
//! The `id` is validated before the remote API is contacted; any stage
//! failure ends the request with an error page.

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{any, get},
    Router,
};
use groupie_common::{decode, select, Artist, ConcertDate, Location, Record, Relation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{PageError, PageResult};
use crate::AppState;

/// Raw query pairs, in request order
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Serialize)]
struct LocationsView<'a> {
    id: i64,
    locations: &'a [String],
}

#[derive(Debug, Serialize)]
struct DatesView<'a> {
    id: i64,
    dates: &'a [String],
}

#[derive(Debug, Serialize)]
struct RelationsView<'a> {
    id: i64,
    dates_locations: &'a BTreeMap<String, Vec<String>>,
}

/// Build page routes
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/artists", get(artists_alias))
        .route("/artists.html", get(artist_detail))
        .route("/locations.html", get(locations))
        .route("/dates.html", get(dates))
        .route("/relations.html", get(relations))
        .route("/404", any(not_found))
}

/// GET /
///
/// Lists every artist
pub async fn home(State(state): State<AppState>) -> PageResult<Html<String>> {
    let artists: Vec<Artist> = fetch_records(&state).await?;
    render(&state, "index", &artists)
}

/// GET /artists
///
/// Legacy alias for the listing page
pub async fn artists_alias() -> Redirect {
    Redirect::temporary("/")
}

/// GET /artists.html?id=N
pub async fn artist_detail(
    State(state): State<AppState>,
    query: Option<Query<QueryPairs>>,
) -> PageResult<Html<String>> {
    let id = parse_id(query)?;
    let artists: Vec<Artist> = fetch_records(&state).await?;
    let artist = find(&artists, id)?;
    render(&state, "artists", artist)
}

/// GET /locations.html?id=N
pub async fn locations(
    State(state): State<AppState>,
    query: Option<Query<QueryPairs>>,
) -> PageResult<Html<String>> {
    let id = parse_id(query)?;
    let records: Vec<Location> = fetch_records(&state).await?;
    let record = find(&records, id)?;
    render(
        &state,
        "locations",
        &LocationsView {
            id,
            locations: &record.locations,
        },
    )
}

/// GET /dates.html?id=N
pub async fn dates(
    State(state): State<AppState>,
    query: Option<Query<QueryPairs>>,
) -> PageResult<Html<String>> {
    let id = parse_id(query)?;
    let records: Vec<ConcertDate> = fetch_records(&state).await?;
    let record = find(&records, id)?;
    render(
        &state,
        "dates",
        &DatesView {
            id,
            dates: &record.dates,
        },
    )
}

/// GET /relations.html?id=N
pub async fn relations(
    State(state): State<AppState>,
    query: Option<Query<QueryPairs>>,
) -> PageResult<Html<String>> {
    let id = parse_id(query)?;
    let records: Vec<Relation> = fetch_records(&state).await?;
    let record = find(&records, id)?;
    render(
        &state,
        "relations",
        &RelationsView {
            id,
            dates_locations: &record.dates_locations,
        },
    )
}

/// `/404` and every unrouted path
pub async fn not_found() -> PageError {
    PageError::PageNotFound
}

/// First `id` query value as a base-10 integer
fn parse_id(query: Option<Query<QueryPairs>>) -> PageResult<i64> {
    let raw = query
        .and_then(|Query(pairs)| pairs.into_iter().find(|(key, _)| key == "id"))
        .map(|(_, value)| value)
        .unwrap_or_default();

    raw.parse::<i64>().map_err(|_| PageError::InvalidId(raw))
}

/// Fetch and decode the full collection for record kind `R`
async fn fetch_records<R>(state: &AppState) -> PageResult<Vec<R>>
where
    R: Record + DeserializeOwned + Default,
{
    let body = state.source.fetch(R::ENDPOINT).await?;
    let records = decode(&body, R::ENDPOINT.envelope())?;
    Ok(records)
}

fn find<R: Record>(records: &[R], id: i64) -> PageResult<&R> {
    select(records, id).ok_or(PageError::NotFound { kind: R::KIND, id })
}

fn render<T: Serialize>(state: &AppState, template: &str, data: &T) -> PageResult<Html<String>> {
    let html = state.templates.render(template, data)?;
    debug!(template, bytes = html.len(), "Rendered page");
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> Option<Query<QueryPairs>> {
        Some(Query(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn test_parse_id_accepts_base10_integers() {
        assert_eq!(parse_id(query(&[("id", "5")])).unwrap(), 5);
        assert_eq!(parse_id(query(&[("id", "+12")])).unwrap(), 12);
        assert_eq!(parse_id(query(&[("id", "-3")])).unwrap(), -3);
        assert_eq!(parse_id(query(&[("id", "007")])).unwrap(), 7);
    }

    #[test]
    fn test_parse_id_rejects_non_integers() {
        for raw in ["abc", "", " 5", "5 ", "1.5", "0x10", "99999999999999999999"] {
            let err = parse_id(query(&[("id", raw)])).unwrap_err();
            assert!(matches!(err, PageError::InvalidId(_)), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_id_missing() {
        assert!(matches!(parse_id(None), Err(PageError::InvalidId(_))));
        assert!(matches!(
            parse_id(query(&[("name", "queen")])),
            Err(PageError::InvalidId(_))
        ));
    }

    #[test]
    fn test_parse_id_first_value_wins() {
        assert_eq!(parse_id(query(&[("x", "1"), ("id", "4"), ("id", "9")])).unwrap(), 4);
    }
}
