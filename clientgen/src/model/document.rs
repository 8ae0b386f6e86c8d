use indexmap::IndexMap;
use serde::Serialize;

/// Format-neutral value produced by every [crate::parser::Parser].
///
/// `Map` keeps insertion order for iteration, but equality only compares keys and values. `List`
/// equality is order-sensitive.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    #[default]
    Null,
    Text(String),
    List(Vec<Document>),
    Map(IndexMap<String, Document>),
}

impl Document {
    /// Builds a `Map` from `(key, value)` pairs. Later pairs overwrite earlier ones with the same
    /// key.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Document>,
        I: IntoIterator<Item = (K, V)>,
    {
        Document::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn list<V, I>(items: I) -> Self
    where
        V: Into<Document>,
        I: IntoIterator<Item = V>,
    {
        Document::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Document::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Document]> {
        match self {
            Document::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Document>> {
        match self {
            Document::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Value of `key` if this is a `Map` containing it.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_map().and_then(|map| map.get(key))
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::Text(value.to_string())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::Text(value)
    }
}

impl From<Vec<Document>> for Document {
    fn from(value: Vec<Document>) -> Self {
        Document::List(value)
    }
}

impl From<IndexMap<String, Document>> for Document {
    fn from(value: IndexMap<String, Document>) -> Self {
        Document::Map(value)
    }
}
