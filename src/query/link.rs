//! Share links carrying the encoded query in the `q` parameter

use crate::query::codec::{self, SearchQuery};
use url::Url;

/// Query-string key holding the encoded search
pub const QUERY_KEY: &str = "q";

/// Build `<base>?q=<token>`, replacing any previous `q` on `base`
pub fn share_link(base: &Url, query: &SearchQuery) -> Url {
    let mut link = base.clone();
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(k, _)| k != QUERY_KEY)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    link.set_fragment(None);
    {
        let mut pairs = link.query_pairs_mut();
        pairs.clear();
        for (k, v) in &kept {
            pairs.append_pair(k, v);
        }
        pairs.append_pair(QUERY_KEY, &codec::encode(query));
    }
    link
}

/// Extract the raw token from a share link or accept `input` as a bare token.
///
/// Returns `None` for blank input and for links without a `q` parameter.
pub fn token_from_link(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match Url::parse(input) {
        Ok(url) if !url.cannot_be_a_base() => url
            .query_pairs()
            .find(|(k, _)| k == QUERY_KEY)
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty()),
        _ => Some(input.to_string()),
    }
}
