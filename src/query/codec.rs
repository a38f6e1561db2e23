//! Search query <-> shareable token

use crate::query::rison::{self, RisonValue};
use crate::utils::error::AppError;

/// Key of the keyword inside the encoded object
const KEYWORD_FIELD: &str = "kw";

/// The search state that survives in a share link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// Only a non-empty keyword may start a metadata fetch
    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty()
    }
}

/// Encode a query as a Rison object, e.g. `(kw:dQw4w9WgXcQ)`
pub fn encode(query: &SearchQuery) -> String {
    rison::to_string(&RisonValue::Object(vec![(
        KEYWORD_FIELD.to_string(),
        RisonValue::String(query.keyword.clone()),
    )]))
}

/// Decode a token produced by [`encode`] or edited by hand.
///
/// A missing or null keyword decodes to an empty query, a numeric one to its
/// text. Anything that is not an object with a scalar keyword is a
/// [`AppError::MalformedToken`].
pub fn decode(token: &str) -> Result<SearchQuery, AppError> {
    let value = rison::from_str(token)?;
    if !matches!(value, RisonValue::Object(_)) {
        return Err(AppError::MalformedToken(format!(
            "expected an object, got {:?}",
            token
        )));
    }

    let keyword = match value.get(KEYWORD_FIELD) {
        None | Some(RisonValue::Null) => String::new(),
        Some(RisonValue::String(kw)) => kw.clone(),
        Some(RisonValue::Number(n)) => n.clone(),
        Some(other) => {
            return Err(AppError::MalformedToken(format!(
                "unsupported keyword value {:?}",
                other
            )))
        }
    };

    Ok(SearchQuery { keyword })
}
