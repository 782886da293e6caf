//! Static route table: internal gateway routes and their upstream mapping.
//!
//! Route behavior is data. Each descriptor names the internal path
//! pattern, the upstream endpoint template, the parameter policy applied
//! to caller input, and the caller-facing message used when the upstream
//! call fails. The table is immutable process-wide configuration.

use crate::error::ClientInputError;
use crate::query::CatalogQuery;

/// Fixed `append_to_response` value sent with every detail lookup.
pub const APPEND_TO_RESPONSE: &str = "videos,credits,similar";

/// Page forwarded when the caller supplies none.
pub const DEFAULT_PAGE: &str = "1";

/// How caller input maps onto upstream query parameters for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamPolicy {
    /// No caller parameters are forwarded.
    Fixed,
    /// `page` is forwarded, defaulting to `"1"` when absent.
    Paged,
    /// `query` is required; `page` defaults to `"1"`.
    Search,
    /// Optional `with_genres` filter plus `page`.
    Genre,
    /// Fixed `append_to_response` parts, id taken from the path.
    Detail,
    /// Path segments substituted into the template, no query parameters.
    PathOnly,
}

/// Mapping from one internal route to its upstream endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Internal path pattern served by the gateway.
    pub path: &'static str,
    /// Upstream endpoint template; `{..}` segments are filled from the
    /// internal path in order.
    pub upstream: &'static str,
    pub policy: ParamPolicy,
    /// Message returned to the caller when the upstream call fails.
    pub failure_message: &'static str,
}

/// Caller-supplied input extracted from an inbound request.
///
/// Values are carried as received, unvalidated; the route's policy
/// decides which of them reach the upstream.
#[derive(Debug, Clone, Default)]
pub struct CallerInput {
    /// Path segments, in template order.
    pub segments: Vec<String>,
    pub page: Option<String>,
    pub query: Option<String>,
    pub with_genres: Option<String>,
}

impl RouteDescriptor {
    /// Substitute path segments into the upstream template, in order.
    /// Placeholders beyond the supplied segments are left verbatim.
    pub fn upstream_path(&self, segments: &[&str]) -> String {
        let mut segs = segments.iter();
        self.upstream
            .split('/')
            .map(|part| {
                if part.starts_with('{') && part.ends_with('}') {
                    segs.next().copied().unwrap_or(part)
                } else {
                    part
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Build the upstream query for this route by applying its parameter
    /// policy to the caller's input.
    ///
    /// The only rejection is a missing/empty search `query`; everything
    /// else is forwarded as received.
    pub fn build_query(&self, input: CallerInput) -> Result<CatalogQuery, ClientInputError> {
        let segments: Vec<&str> = input.segments.iter().map(String::as_str).collect();
        let mut query = CatalogQuery::new(self.upstream_path(&segments));

        match self.policy {
            ParamPolicy::Fixed | ParamPolicy::PathOnly => {}
            ParamPolicy::Paged => {
                query = query.param("page", page_or_default(input.page));
            }
            ParamPolicy::Search => {
                let text = input.query.unwrap_or_default();
                if text.is_empty() {
                    return Err(ClientInputError::MissingQuery);
                }
                query = query
                    .param("query", text)
                    .param("page", page_or_default(input.page));
            }
            ParamPolicy::Genre => {
                if let Some(genres) = input.with_genres {
                    query = query.param("with_genres", genres);
                }
                query = query.param("page", page_or_default(input.page));
            }
            ParamPolicy::Detail => {
                query = query.param("append_to_response", APPEND_TO_RESPONSE);
            }
        }

        Ok(query)
    }
}

fn page_or_default(page: Option<String>) -> String {
    page.unwrap_or_else(|| DEFAULT_PAGE.to_string())
}

pub const TRENDING: RouteDescriptor = RouteDescriptor {
    path: "/trending/{type}/{window}",
    upstream: "/trending/{type}/{window}",
    policy: ParamPolicy::PathOnly,
    failure_message: "Failed to fetch trending content",
};

pub const MOVIES_POPULAR: RouteDescriptor = RouteDescriptor {
    path: "/movies/popular",
    upstream: "/movie/popular",
    policy: ParamPolicy::Paged,
    failure_message: "Failed to fetch popular movies",
};

pub const MOVIES_TOP_RATED: RouteDescriptor = RouteDescriptor {
    path: "/movies/top-rated",
    upstream: "/movie/top_rated",
    policy: ParamPolicy::Paged,
    failure_message: "Failed to fetch top rated movies",
};

pub const MOVIES_UPCOMING: RouteDescriptor = RouteDescriptor {
    path: "/movies/upcoming",
    upstream: "/movie/upcoming",
    policy: ParamPolicy::Paged,
    failure_message: "Failed to fetch upcoming movies",
};

pub const MOVIES_NOW_PLAYING: RouteDescriptor = RouteDescriptor {
    path: "/movies/now-playing",
    upstream: "/movie/now_playing",
    policy: ParamPolicy::Paged,
    failure_message: "Failed to fetch now playing movies",
};

pub const MOVIE_DETAILS: RouteDescriptor = RouteDescriptor {
    path: "/movie/{id}",
    upstream: "/movie/{id}",
    policy: ParamPolicy::Detail,
    failure_message: "Failed to fetch movie details",
};

pub const TV_DETAILS: RouteDescriptor = RouteDescriptor {
    path: "/tv/{id}",
    upstream: "/tv/{id}",
    policy: ParamPolicy::Detail,
    failure_message: "Failed to fetch TV show details",
};

pub const TV_POPULAR: RouteDescriptor = RouteDescriptor {
    path: "/tv/popular",
    upstream: "/tv/popular",
    policy: ParamPolicy::Paged,
    failure_message: "Failed to fetch popular TV shows",
};

pub const TV_TOP_RATED: RouteDescriptor = RouteDescriptor {
    path: "/tv/top-rated",
    upstream: "/tv/top_rated",
    policy: ParamPolicy::Paged,
    failure_message: "Failed to fetch top rated TV shows",
};

pub const SEARCH: RouteDescriptor = RouteDescriptor {
    path: "/search",
    upstream: "/search/multi",
    policy: ParamPolicy::Search,
    failure_message: "Failed to search content",
};

pub const GENRES_MOVIE: RouteDescriptor = RouteDescriptor {
    path: "/genres/movie",
    upstream: "/genre/movie/list",
    policy: ParamPolicy::Fixed,
    failure_message: "Failed to fetch movie genres",
};

pub const GENRES_TV: RouteDescriptor = RouteDescriptor {
    path: "/genres/tv",
    upstream: "/genre/tv/list",
    policy: ParamPolicy::Fixed,
    failure_message: "Failed to fetch TV genres",
};

pub const DISCOVER_MOVIE: RouteDescriptor = RouteDescriptor {
    path: "/discover/movie",
    upstream: "/discover/movie",
    policy: ParamPolicy::Genre,
    failure_message: "Failed to discover movies",
};

/// Every upstream-backed route served by the gateway. `/health` is local
/// and has no descriptor.
pub const CATALOG_ROUTES: &[RouteDescriptor] = &[
    TRENDING,
    MOVIES_POPULAR,
    MOVIES_TOP_RATED,
    MOVIES_UPCOMING,
    MOVIES_NOW_PLAYING,
    MOVIE_DETAILS,
    TV_DETAILS,
    TV_POPULAR,
    TV_TOP_RATED,
    SEARCH,
    GENRES_MOVIE,
    GENRES_TV,
    DISCOVER_MOVIE,
];

/// Look up a descriptor by its internal path pattern.
pub fn find(path: &str) -> Option<&'static RouteDescriptor> {
    CATALOG_ROUTES.iter().find(|d| d.path == path)
}
