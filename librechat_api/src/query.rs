//! Query-string encoding for route construction.
//!
//! A [`QueryParams`] is an ordered mapping from parameter names to
//! [`QueryValue`]s. [`build_query`] turns it into the `?key=value&...`
//! suffix used by most routes; [`build_search_params`] produces the
//! form-encoded variant used by the assistants, agents and prompt-filter
//! routes.

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` gets escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URI component (path segment or query value).
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// A single query value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    pub fn is_empty_str(&self) -> bool {
        matches!(self, Scalar::Str(s) if s.is_empty())
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(n) => fmt_float(f, *n),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

fn fmt_float(f: &mut Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0.0 prints as "0"
        f.write_str("0")
    } else if n.fract() == 0.0 {
        write!(f, "{n:.0}")
    } else {
        write!(f, "{n}")
    }
}

/// A value in a [`QueryParams`] mapping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Absent or explicitly null.
    #[default]
    Null,
    List(Vec<Scalar>),
    Scalar(Scalar),
}

impl QueryValue {
    /// Whether this value survives [`build_query`] filtering.
    ///
    /// Lists need at least one element; scalars must not be the empty
    /// string. `0` and `false` are kept.
    pub fn is_present(&self) -> bool {
        match self {
            QueryValue::Null => false,
            QueryValue::List(items) => !items.is_empty(),
            QueryValue::Scalar(s) => !s.is_empty_str(),
        }
    }
}

impl From<Scalar> for QueryValue {
    fn from(value: Scalar) -> Self {
        QueryValue::Scalar(value)
    }
}

impl From<Vec<Scalar>> for QueryValue {
    fn from(items: Vec<Scalar>) -> Self {
        QueryValue::List(items)
    }
}

macro_rules! scalar_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Scalar::$variant(value.into())
                }
            }
        )*
    };
}

scalar_from!(
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Int,
    u16 => Int,
    u32 => Int,
    f64 => Float,
    String => Str,
    &str => Str,
    &String => Str,
);

macro_rules! scalar_from_wide_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    i64::try_from(value).map_or(Scalar::Float(value as f64), Scalar::Int)
                }
            }
        )*
    };
}

scalar_from_wide_int!(u64, usize, i128, u128, isize);

impl From<f32> for Scalar {
    /// Goes through the `f32`'s own shortest decimal so `0.1_f32` stays `0.1`.
    fn from(value: f32) -> Self {
        Scalar::Float(value.to_string().parse().unwrap_or(f64::from(value)))
    }
}

macro_rules! impl_query_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    QueryValue::Scalar(value.into())
                }
            }

            impl From<Option<$t>> for QueryValue {
                fn from(value: Option<$t>) -> Self {
                    value.map_or(QueryValue::Null, |v| QueryValue::Scalar(v.into()))
                }
            }

            impl From<Vec<$t>> for QueryValue {
                fn from(items: Vec<$t>) -> Self {
                    QueryValue::List(items.into_iter().map(Scalar::from).collect())
                }
            }
        )*
    };
}

impl_query_value!(
    bool, i8, i16, i32, i64, isize, i128, u8, u16, u32, u64, usize, u128, f32, f64, String, &str,
    &String,
);

/// Ordered parameter mapping.
///
/// Inserting an existing key replaces its value in place, so the key keeps
/// its original position in the encoded output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(IndexMap<String, QueryValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Builder-style [`QueryParams::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn to_query_string(&self) -> String {
        build_query(self)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Encode `params` as a query string.
///
/// Returns `""` when nothing survives filtering, otherwise `?` followed by
/// `key=value` pairs joined with `&`. List values expand to one pair per
/// element. Keys are emitted verbatim; values are URI-component encoded.
pub fn build_query(params: &QueryParams) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter(|(_, value)| value.is_present())
        .flat_map(|(key, value)| match value {
            QueryValue::List(items) => items.iter().map(|item| pair(key, item)).collect::<Vec<_>>(),
            QueryValue::Scalar(item) => vec![pair(key, item)],
            QueryValue::Null => Vec::new(),
        })
        .collect();

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

fn pair(key: &str, value: &Scalar) -> String {
    format!("{key}={}", encode_component(&value.to_string()))
}

/// Encode `params` the way `URLSearchParams` does: form encoding, lists
/// comma-joined. No leading `?`.
///
/// `Null` values are skipped instead of being written as `null` or
/// `undefined`. Empty strings and empty lists are kept as `key=`.
pub fn build_search_params(params: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        match value {
            QueryValue::Null => {}
            QueryValue::Scalar(item) => {
                serializer.append_pair(key, &item.to_string());
            }
            QueryValue::List(items) => {
                let joined = items
                    .iter()
                    .map(Scalar::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                serializer.append_pair(key, &joined);
            }
        }
    }
    serializer.finish()
}
