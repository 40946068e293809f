use std::collections::BTreeMap;

use url::form_urlencoded;

pub type ParamMap = BTreeMap<String, ParamValue>;

/// Nested query parameters. Lists are maps keyed by decimal indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Leaf(String),
    Map(ParamMap),
}

impl ParamValue {
    pub fn leaf(text: impl Into<String>) -> Self {
        ParamValue::Leaf(text.into())
    }

    pub fn list(items: impl IntoIterator<Item = ParamValue>) -> Self {
        ParamValue::Map(
            items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| (idx.to_string(), item))
                .collect(),
        )
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            ParamValue::Leaf(text) => Some(text),
            ParamValue::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&ParamMap> {
        match self {
            ParamValue::Leaf(_) => None,
            ParamValue::Map(map) => Some(map),
        }
    }

    /// Elements of an index-keyed map, in index order.
    pub fn as_list(&self) -> Option<Vec<&ParamValue>> {
        let map = self.as_map()?;
        list_entries(map).map(|entries| entries.into_iter().map(|(_, item)| item).collect())
    }
}

fn list_entries(map: &ParamMap) -> Option<Vec<(usize, &ParamValue)>> {
    let mut entries = map
        .iter()
        .map(|(key, value)| key.parse::<usize>().ok().map(|idx| (idx, value)))
        .collect::<Option<Vec<_>>>()?;
    entries.sort_by_key(|(idx, _)| *idx);
    Some(entries)
}

/// Splits `a[b][0]`, `a.b.0` or `a[b].0` into `["a", "b", "0"]`.
/// Keys that do not follow either convention are kept whole.
fn split_key(key: &str) -> Vec<String> {
    let is_delimiter = |c: char| c == '[' || c == '.';
    let root_end = key.find(is_delimiter).unwrap_or(key.len());
    if root_end == 0 {
        return vec![key.to_string()];
    }

    let mut segments = vec![key[..root_end].to_string()];
    let mut rest = &key[root_end..];
    while !rest.is_empty() {
        let segment;
        if let Some(after) = rest.strip_prefix('[') {
            let Some(close) = after.find(']') else {
                return vec![key.to_string()];
            };
            segment = &after[..close];
            rest = &after[close + 1..];
        } else if let Some(after) = rest.strip_prefix('.') {
            let end = after.find(is_delimiter).unwrap_or(after.len());
            segment = &after[..end];
            rest = &after[end..];
        } else {
            return vec![key.to_string()];
        }

        if segment.is_empty() {
            return vec![key.to_string()];
        }
        segments.push(segment.to_string());
    }

    segments
}

fn insert_path(map: &mut ParamMap, path: &[String], value: String) {
    let Some((head, tail)) = path.split_first() else {
        return;
    };
    if tail.is_empty() {
        map.insert(head.clone(), ParamValue::Leaf(value));
        return;
    }

    let entry = map
        .entry(head.clone())
        .or_insert_with(|| ParamValue::Map(ParamMap::new()));
    if let ParamValue::Leaf(_) = entry {
        *entry = ParamValue::Map(ParamMap::new());
    }
    if let ParamValue::Map(child) = entry {
        insert_path(child, tail, value);
    }
}

/// Best-effort decode; never fails.
pub fn parse_params(raw: &str) -> ParamMap {
    let raw = raw.trim();
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut params = ParamMap::new();

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if key.is_empty() {
            continue;
        }
        let path = split_key(&key);
        insert_path(&mut params, &path, value.into_owned());
    }

    params
}

fn encode(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

fn collect_pairs(prefix: String, value: &ParamValue, out: &mut Vec<String>) {
    match value {
        ParamValue::Leaf(text) => out.push(format!("{prefix}={}", encode(text))),
        ParamValue::Map(children) => match list_entries(children) {
            Some(items) => {
                for (idx, child) in items {
                    collect_pairs(format!("{prefix}[{idx}]"), child, out);
                }
            }
            None => {
                for (key, child) in children {
                    collect_pairs(format!("{prefix}.{}", encode(key)), child, out);
                }
            }
        },
    }
}

/// Deterministic encoding: map keys in sorted order, list items by index,
/// nested keys joined with dots and list indices in brackets.
pub fn stringify_params(params: &ParamMap) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        collect_pairs(encode(key), value, &mut pairs);
    }
    pairs.join("&")
}
