//! Search query as carried by the router's query segment.

use std::fmt::Display;

use common::search_query::SearchQuery;


/// Route wrapper around [`SearchQuery`].
///
/// The router percent-decodes the whole query string once before handing it
/// to `From<&str>`, and its `Display` leaves `%` untouched. Every `%` of the
/// form encoding is therefore escaped once more on the way out, so the text
/// reaching the codec is exactly what `SearchQuery::serialize` produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UrlQuery(pub SearchQuery);

impl From<SearchQuery> for UrlQuery {
    fn from(value: SearchQuery) -> Self {
        UrlQuery(value)
    }
}

impl Display for UrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.serialize().replace('%', "%25"))
    }
}

// Receives the query after the router's own percent-decoding pass.
impl From<&str> for UrlQuery {
    fn from(query_string: &str) -> Self {
        UrlQuery(SearchQuery::deserialize(query_string))
    }
}
