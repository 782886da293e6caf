/// A single upstream catalog request: endpoint path plus the query
/// parameters forwarded on behalf of the caller.
///
/// Built per request and discarded once the call returns. The upstream
/// client injects `api_key` and `language` at send time; values carried
/// here never override those two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    endpoint: String,
    params: Vec<(String, String)>,
}

impl CatalogQuery {
    pub fn new(endpoint: impl Into<String>) -> Self {
        CatalogQuery {
            endpoint: endpoint.into(),
            params: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up a parameter value by key (first occurrence).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_builder_preserves_order() {
        let query = CatalogQuery::new("/search/multi")
            .param("query", "batman")
            .param("page", "2");

        assert_eq!(query.endpoint(), "/search/multi");
        assert_eq!(
            query.params(),
            &[
                ("query".to_string(), "batman".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_get_returns_first_occurrence() {
        let query = CatalogQuery::new("/movie/popular")
            .param("page", "1")
            .param("page", "9");

        assert_eq!(query.get("page"), Some("1"));
        assert_eq!(query.get("missing"), None);
    }
}
