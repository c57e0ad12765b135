//! Web API module for Mendeleev.
//!
//! This module provides a read-only REST API over the element data set,
//! for browser frontends and scripts.
//!
//! # Endpoints
//!
//! - `GET /health`, `GET /api/health` - Health check with cache stats
//! - `GET /api/elements` - Filtered, sorted, paginated element list
//! - `GET /api/elements/{identifier}` - One element by number, symbol or name
//! - `GET /api/search?q=` - Relevance-scored search
//! - `GET /api/aliases/search?q=` - Alias prefix search, as in the table UI
//! - `GET /api/compare/{a}/{b}` - Property-wise comparison
//! - `GET /api/stats` - Counts by category, period and phase
//! - `GET /api/export/json` - Every element as a downloadable JSON document

pub mod cache;

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{Language, ServerConfig};
use crate::data::{Dataset, Element};
use crate::search::SearchIndex;
use crate::services::catalog::{DEFAULT_SEARCH_LIMIT, DEFAULT_SIMILAR_LIMIT, MAX_SEARCH_LIMIT};
use crate::services::{
    compare, ElementCatalog, ListQuery, PageMetadata, SearchField, SortField, SortOrder,
    Statistics,
};
use crate::table::{Surfaces, TableBuilder};

use cache::{CacheStats, ResponseCache, ELEMENT_TTL, LIST_TTL, SHORT_TTL};

/// Value of the `X-API-Version` header.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

const REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
const API_VERSION_HEADER: HeaderName = HeaderName::from_static("x-api-version");

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Element and alias data (immutable after load)
    data: Arc<Dataset>,
    /// Alias index over the rendered cells
    aliases: Arc<SearchIndex>,
    /// Symbols of the rendered cells, ascending by atomic number
    symbols: Arc<Vec<String>>,
    /// Response cache
    cache: Arc<ResponseCache>,
    /// Server options
    server: Arc<ServerConfig>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// Lays the table out once to index its cells for alias search.
    pub fn new(data: Dataset, server: ServerConfig) -> anyhow::Result<Self> {
        let mut table = TableBuilder::new(Surfaces::attached(), None);
        let cells = table.try_build(&data.elements)?;
        let aliases = SearchIndex::init(&data.aliases, cells)
            .ok_or_else(|| anyhow::anyhow!("Alias index could not be initialized"))?;
        let symbols = cells.iter().map(|c| c.symbol().to_string()).collect();

        Ok(Self {
            data: Arc::new(data),
            aliases: Arc::new(aliases),
            symbols: Arc::new(symbols),
            cache: Arc::new(ResponseCache::new()),
            server: Arc::new(server),
        })
    }

    fn catalog(&self) -> ElementCatalog<'_> {
        ElementCatalog::new(&self.data.elements)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// API version.
    pub version: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
    /// Number of loaded elements.
    pub element_count: usize,
    /// Cache counters.
    pub cache_stats: CacheStats,
}

/// Hypermedia links of a list entry.
#[derive(Debug, Serialize)]
pub struct ElementLinks {
    /// Link by atomic number.
    #[serde(rename = "self")]
    pub self_link: String,
    /// Link by symbol.
    pub symbol: String,
}

/// Element fields returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ElementSummary {
    /// Atomic number.
    pub atomic_number: u32,
    /// Chemical symbol.
    pub symbol: String,
    /// English name.
    pub name: String,
    /// Persian name.
    pub fa_name: String,
    /// Atomic mass, if known.
    pub atomic_mass: Option<f64>,
    /// Category tag.
    pub category: String,
    /// Period.
    pub period: u8,
    /// Group; `null` for the f-block.
    pub group: Option<u8>,
    /// Phase at room temperature.
    pub phase: String,
}

impl From<&Element> for ElementSummary {
    fn from(e: &Element) -> Self {
        Self {
            atomic_number: e.atomic_number,
            symbol: e.symbol.clone(),
            name: e.name.clone(),
            fa_name: e.fa_name.clone(),
            atomic_mass: e.atomic_mass,
            category: e.category.clone(),
            period: e.period,
            group: e.group,
            phase: e.phase.clone(),
        }
    }
}

/// Extra fields of a detailed element response.
#[derive(Debug, Serialize)]
pub struct ElementDetails {
    /// Proton count.
    pub protons: u32,
    /// Neutron count.
    pub neutrons: u32,
    /// Electron count.
    pub electrons: u32,
    /// Electrons per shell, innermost first.
    pub electrons_per_shell: Vec<u32>,
    /// Common uses.
    pub uses: Vec<String>,
    /// Density in g/cm³.
    pub density: Option<f64>,
    /// Melting point in K.
    pub melting_point: Option<f64>,
    /// Boiling point in K.
    pub boiling_point: Option<f64>,
    /// Pauling electronegativity.
    pub electronegativity: Option<f64>,
    /// Atomic radius in pm.
    pub atomic_radius: Option<f64>,
    /// Discoverer(s).
    pub discovered_by: String,
    /// Year of discovery.
    pub discovery_year: String,
}

impl From<&Element> for ElementDetails {
    fn from(e: &Element) -> Self {
        Self {
            protons: e.protons,
            neutrons: e.neutrons,
            electrons: e.electrons,
            electrons_per_shell: e.electrons_per_shell.clone(),
            uses: e.uses.clone(),
            density: e.density,
            melting_point: e.melting_point,
            boiling_point: e.boiling_point,
            electronegativity: e.electronegativity,
            atomic_radius: e.atomic_radius,
            discovered_by: e.discovered_by.clone(),
            discovery_year: e.discovery_year.clone(),
        }
    }
}

/// One entry of the element list.
#[derive(Debug, Serialize)]
pub struct ListEntry {
    /// Basic fields.
    #[serde(flatten)]
    pub element: ElementSummary,
    /// Detailed fields, when requested.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub details: Option<ElementDetails>,
    /// Links to this element.
    #[serde(rename = "_links")]
    pub links: ElementLinks,
}

/// Element list response.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    /// Paging information.
    pub metadata: PageMetadata,
    /// Elements on this page.
    pub elements: Vec<ListEntry>,
    /// Response language.
    pub language: Language,
}

/// Single element response.
#[derive(Debug, Serialize)]
pub struct ElementResponse {
    /// Basic fields.
    #[serde(flatten)]
    pub element: ElementSummary,
    /// Name in the requested language.
    pub display_name: String,
    /// Detailed fields, unless `detailed=false`.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub details: Option<ElementDetails>,
    /// Similar elements, when `include_similar=true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_elements: Option<Vec<ElementSummary>>,
}

/// A scored search hit.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    /// Basic fields.
    #[serde(flatten)]
    pub element: ElementSummary,
    /// Name in the requested language.
    pub display_name: String,
    /// Relevance score.
    pub relevance_score: u32,
}

/// Scored search response.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// The query as given.
    pub query: String,
    /// Fields that were searched.
    pub fields_searched: Vec<SearchField>,
    /// Number of results.
    pub count: usize,
    /// Hits, best first.
    pub results: Vec<SearchResult>,
    /// Response language.
    pub language: Language,
}

/// Alias search response.
#[derive(Debug, Serialize)]
pub struct AliasSearchResponse {
    /// The query as given.
    pub query: String,
    /// Number of matching symbols.
    pub count: usize,
    /// Matching symbols, ascending by atomic number.
    pub symbols: Vec<String>,
}

/// Statistics response.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Element counts.
    #[serde(flatten)]
    pub statistics: Statistics,
    /// Cache counters.
    pub cache_stats: CacheStats,
}

/// Query parameters for `GET /api/elements`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Category filter.
    pub category: Option<String>,
    /// Phase filter.
    pub phase: Option<String>,
    /// Period filter.
    pub period: Option<u8>,
    /// Group filter.
    pub group: Option<u8>,
    /// Sort field name.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub order: Option<String>,
    /// One-based page.
    pub page: Option<usize>,
    /// Page size.
    pub limit: Option<usize>,
    /// Response language.
    pub lang: Option<String>,
    /// Include detailed fields.
    #[serde(default)]
    pub detailed: bool,
}

/// Query parameters for `GET /api/elements/{identifier}`.
#[derive(Debug, Deserialize)]
pub struct ElementParams {
    /// Include detailed fields.
    #[serde(default = "default_true")]
    pub detailed: bool,
    /// Include similar elements.
    #[serde(default)]
    pub include_similar: bool,
    /// Response language.
    pub lang: Option<String>,
}

const fn default_true() -> bool {
    true
}

/// Query parameters for `GET /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search text.
    pub q: String,
    /// Maximum number of results.
    pub limit: Option<usize>,
    /// Comma-separated field names.
    pub fields: Option<String>,
    /// Response language.
    pub lang: Option<String>,
}

/// Query parameters for `GET /api/aliases/search`.
#[derive(Debug, Deserialize)]
pub struct AliasSearchParams {
    /// Search text; empty matches every element.
    #[serde(default)]
    pub q: String,
}

/// Query parameters for `GET /api/export/json`.
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// `minified` (default) or `pretty`.
    pub format_type: Option<String>,
    /// Language of the exported display names.
    pub lang: Option<String>,
}

/// Layout of an exported JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Single line
    Minified,
    /// Indented
    Pretty,
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "minified" => Ok(Self::Minified),
            "pretty" => Ok(Self::Pretty),
            _ => anyhow::bail!("Invalid format '{s}'. Must be 'minified' or 'pretty'"),
        }
    }
}

/// Localized error messages.
#[derive(Debug, Serialize)]
pub struct LocalizedMessage {
    /// English.
    pub en: String,
    /// Persian.
    pub fa: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// The message in every supported language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<LocalizedMessage>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            messages: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
            messages: None,
        }
    }

    fn localized(en: String, fa: String) -> Self {
        Self {
            error: en.clone(),
            details: None,
            messages: Some(LocalizedMessage { en, fa }),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

fn bad_request(error: impl Into<String>, details: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details(error, details)),
    )
}

fn element_not_found(identifier: &str) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::localized(
            format!("Element {identifier} not found"),
            format!("عنصر {identifier} یافت نشد"),
        )),
    )
}

fn parse_language(lang: Option<&str>) -> ApiResult<Language> {
    lang.map_or(Ok(Language::En), |l| {
        l.parse()
            .map_err(|e: anyhow::Error| bad_request("Invalid language", e.to_string()))
    })
}

/// Returns the cached body for `key`, or builds, caches and returns it.
fn cached<T, F>(state: &AppState, key: &str, ttl: std::time::Duration, build: F) -> ApiResult<Json<Value>>
where
    T: Serialize,
    F: FnOnce() -> ApiResult<T>,
{
    if let Some(value) = state.cache.get(key) {
        debug!(key, "Cache hit");
        return Ok(Json(value));
    }

    let value = serde_json::to_value(build()?).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to serialize response", e.to_string())),
        )
    })?;
    state.cache.insert(key, value.clone(), ttl);
    Ok(Json(value))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: API_VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        element_count: state.data.elements.len(),
        cache_stats: state.cache.stats(),
    })
}

/// GET /api/elements - Filtered and paginated element list.
async fn list_elements(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Value>> {
    let language = parse_language(params.lang.as_deref())?;
    let sort_by: SortField = params
        .sort_by
        .as_deref()
        .map_or(Ok(SortField::default()), str::parse)
        .map_err(|e| bad_request("Invalid sort field", e.to_string()))?;
    let order: SortOrder = params
        .order
        .as_deref()
        .map_or(Ok(SortOrder::default()), str::parse)
        .map_err(|e| bad_request("Invalid sort order", e.to_string()))?;

    let defaults = ListQuery::default();
    let query = ListQuery {
        category: params.category.clone(),
        phase: params.phase.clone(),
        period: params.period,
        group: params.group,
        sort_by,
        order,
        page: params.page.unwrap_or(defaults.page),
        limit: params.limit.unwrap_or(defaults.limit),
    };

    let key = format!(
        "elements:{:?}:{:?}:{:?}:{:?}:{sort_by:?}:{order:?}:{}:{}:{language}:{}",
        query.category, query.phase, query.period, query.group, query.page, query.limit, params.detailed
    );

    cached(&state, &key, LIST_TTL, || {
        let page = state
            .catalog()
            .list(&query)
            .map_err(|e| bad_request("Invalid query", format!("{e:#}")))?;

        let elements = page
            .items
            .iter()
            .map(|e| ListEntry {
                element: ElementSummary::from(*e),
                details: params.detailed.then(|| ElementDetails::from(*e)),
                links: ElementLinks {
                    self_link: format!("/api/elements/{}", e.atomic_number),
                    symbol: format!("/api/elements/{}", e.symbol),
                },
            })
            .collect();

        Ok(ListResponse {
            metadata: page.metadata,
            elements,
            language,
        })
    })
}

/// GET /api/elements/{identifier} - Element by atomic number, symbol or name.
async fn get_element(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Query(params): Query<ElementParams>,
) -> ApiResult<Json<Value>> {
    let language = parse_language(params.lang.as_deref())?;
    let key = format!(
        "element:{identifier}:{}:{}:{language}",
        params.detailed, params.include_similar
    );

    cached(&state, &key, ELEMENT_TTL, || {
        let catalog = state.catalog();
        let element = catalog
            .find(&identifier)
            .ok_or_else(|| element_not_found(&identifier))?;

        let similar_elements = params.include_similar.then(|| {
            catalog
                .similar(element, DEFAULT_SIMILAR_LIMIT)
                .into_iter()
                .map(ElementSummary::from)
                .collect()
        });

        Ok(ElementResponse {
            element: ElementSummary::from(element),
            display_name: element.display_name(language).to_string(),
            details: params.detailed.then(|| ElementDetails::from(element)),
            similar_elements,
        })
    })
}

/// GET /api/search - Relevance-scored search.
async fn search_elements(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Value>> {
    let language = parse_language(params.lang.as_deref())?;
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
        return Err(bad_request(
            "Invalid limit",
            format!("limit must be between 1 and {MAX_SEARCH_LIMIT}"),
        ));
    }
    let fields = params
        .fields
        .as_deref()
        .map_or_else(|| SearchField::DEFAULT.to_vec(), SearchField::parse_list);

    let key = format!("search:{}:{fields:?}:{limit}:{language}", params.q);

    cached(&state, &key, SHORT_TTL, || {
        let results: Vec<SearchResult> = state
            .catalog()
            .search(&params.q, &fields, limit)
            .into_iter()
            .map(|hit| SearchResult {
                element: ElementSummary::from(hit.element),
                display_name: hit.element.display_name(language).to_string(),
                relevance_score: hit.score,
            })
            .collect();

        Ok(SearchResponse {
            query: params.q.clone(),
            fields_searched: fields.clone(),
            count: results.len(),
            results,
            language,
        })
    })
}

/// GET /api/aliases/search - Alias prefix search.
async fn search_aliases(
    State(state): State<AppState>,
    Query(params): Query<AliasSearchParams>,
) -> Json<AliasSearchResponse> {
    let symbols: Vec<String> = state
        .aliases
        .matching_symbols(&params.q, state.symbols.iter().map(String::as_str))
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(AliasSearchResponse {
        query: params.q,
        count: symbols.len(),
        symbols,
    })
}

/// GET /api/compare/{a}/{b} - Compare two elements.
async fn compare_elements(
    State(state): State<AppState>,
    Path((first, second)): Path<(String, String)>,
) -> ApiResult<Json<Value>> {
    let key = format!("compare:{first}:{second}");

    cached(&state, &key, ELEMENT_TTL, || {
        let catalog = state.catalog();
        let a = catalog.find(&first).ok_or_else(|| element_not_found(&first))?;
        let b = catalog.find(&second).ok_or_else(|| element_not_found(&second))?;
        Ok(compare(a, b))
    })
}

/// GET /api/stats - Element statistics.
async fn get_statistics(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        statistics: Statistics::collect(&state.data.elements),
        cache_stats: state.cache.stats(),
    })
}

/// GET /api/export/json - All elements keyed by atomic number, as a download.
async fn export_elements(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> ApiResult<Response> {
    let language = parse_language(params.lang.as_deref())?;
    let format: ExportFormat = params
        .format_type
        .as_deref()
        .map_or(Ok(ExportFormat::Minified), str::parse)
        .map_err(|e| bad_request("Invalid export format", e.to_string()))?;

    let Json(document) = cached(&state, &format!("export:{language}"), LIST_TTL, || {
        let elements: BTreeMap<u32, ElementResponse> = state
            .data
            .elements
            .iter()
            .map(|e| {
                let entry = ElementResponse {
                    element: ElementSummary::from(e),
                    display_name: e.display_name(language).to_string(),
                    details: Some(ElementDetails::from(e)),
                    similar_elements: None,
                };
                (e.atomic_number, entry)
            })
            .collect();
        Ok(elements)
    })?;

    let body = match format {
        ExportFormat::Minified => serde_json::to_string(&document),
        ExportFormat::Pretty => serde_json::to_string_pretty(&document),
    }
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to serialize export", e.to_string())),
        )
    })?;

    let filename = format!(
        "mendeleev_elements_{}.json",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    debug!(%filename, ?format, "Exporting elements");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        body,
    )
        .into_response())
}

/// Adds request id, API version and security headers to every response.
async fn response_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    if let Ok(id) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
        headers.insert(REQUEST_ID, id);
    }
    headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
    headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(header::X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    response
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let server = Arc::clone(&state.server);

    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/api/health", get(health_check))
        .route("/api/elements", get(list_elements))
        .route("/api/elements/{identifier}", get(get_element))
        .route("/api/search", get(search_elements))
        .route("/api/aliases/search", get(search_aliases))
        .route("/api/compare/{first}/{second}", get(compare_elements))
        .route("/api/stats", get(get_statistics))
        .route("/api/export/json", get(export_elements));

    if let Some(dir) = &server.static_dir {
        info!("Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    let router = router
        .layer(middleware::from_fn(response_headers))
        .layer(TraceLayer::new_for_http());

    let router = if server.cors_enabled {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers([REQUEST_ID, API_VERSION_HEADER]),
        )
    } else {
        router
    };

    router.with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the data cannot be indexed or the address cannot be
/// bound.
pub async fn run_server(data: Dataset, server: ServerConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(data, server)?;
    let app = create_router(state);

    info!("Starting Mendeleev web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
