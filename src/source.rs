//! Program Source
//!
//! Where filtered program lists come from. The browser build issues a GET
//! against the admin filter endpoint; tests plug in fakes.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::FilterResult;
use crate::models::ProgramRecord;

/// Lookup of the programs offered by one university.
///
/// `?Send`: futures run on the browser's single-threaded event loop.
#[async_trait(?Send)]
pub trait ProgramSource {
    async fn programs_for(&self, university_id: &str) -> FilterResult<Vec<ProgramRecord>>;
}

/// Everything except RFC 3986 unreserved characters
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build `endpoint?param=value`, appending with `&` if the endpoint
/// already carries a query string
pub fn query_url(endpoint: &str, param: &str, value: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}",
        endpoint,
        separator,
        utf8_percent_encode(param, QUERY_VALUE),
        utf8_percent_encode(value, QUERY_VALUE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_plain() {
        assert_eq!(
            query_url("/admin/programs/academicintake/filter-programs/", "university_id", "5"),
            "/admin/programs/academicintake/filter-programs/?university_id=5"
        );
    }

    #[test]
    fn test_query_url_keeps_uuid_readable() {
        let url = query_url("/filter/", "university_id", "3f1c2a9e-8b1d-4c55");
        assert_eq!(url, "/filter/?university_id=3f1c2a9e-8b1d-4c55");
    }

    #[test]
    fn test_query_url_encodes_reserved_characters() {
        let url = query_url("/filter/", "university_id", "a&b=c d");
        assert_eq!(url, "/filter/?university_id=a%26b%3Dc%20d");
    }

    #[test]
    fn test_query_url_appends_to_existing_query() {
        let url = query_url("/filter/?active=1", "university_id", "7");
        assert_eq!(url, "/filter/?active=1&university_id=7");
    }
}
