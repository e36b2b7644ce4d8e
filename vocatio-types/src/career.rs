use serde::{Deserialize, Serialize};

/// A reference record describing one career, as shipped in the static
/// career list consumed by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Career {
    #[serde(default)]
    pub id: String,

    /// English role name, e.g. `Backend Developer`.
    #[serde(default)]
    pub name_en: String,

    /// Thai role name.
    #[serde(default)]
    pub name_th: String,

    /// Alternative spellings the scorer may use for this role.
    #[serde(default)]
    pub alias: Vec<String>,

    #[serde(default)]
    pub overview: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Career {
    /// Minimal synthetic record for a role that has no reference entry.
    /// Still renders as a card, just without descriptive detail.
    pub fn placeholder(role: impl Into<String>) -> Self {
        let role = role.into();
        Self {
            id: role.clone(),
            name_en: role.clone(),
            name_th: role,
            ..Self::default()
        }
    }
}

/// Lowercase and strip whitespace, `-`, `_` and `/`, so role names match
/// across spelling variants.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '_' | '/'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find the reference record for a role name.
///
/// Priority: exact English name, exact Thai name, exact alias, then one
/// substring pass over all three. First match in list order wins; there is
/// no uniqueness guarantee when several records could substring-match.
pub fn find_career<'a>(role: &str, careers: &'a [Career]) -> Option<&'a Career> {
    if role.is_empty() {
        return None;
    }
    let query = normalize(role);
    careers
        .iter()
        .find(|c| normalize(&c.name_en) == query)
        .or_else(|| careers.iter().find(|c| normalize(&c.name_th) == query))
        .or_else(|| {
            careers
                .iter()
                .find(|c| c.alias.iter().any(|a| normalize(a) == query))
        })
        .or_else(|| {
            careers.iter().find(|c| {
                normalize(&c.name_en).contains(&query)
                    || normalize(&c.name_th).contains(&query)
                    || c.alias.iter().any(|a| normalize(a).contains(&query))
            })
        })
}

/// Resolve a role to its reference record, synthesizing a placeholder when
/// the list has no match.
pub fn resolve_career(role: &str, careers: &[Career]) -> Career {
    find_career(role, careers)
        .cloned()
        .unwrap_or_else(|| Career::placeholder(role))
}
