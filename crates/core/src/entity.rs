use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One entity as published by the home-automation host.
///
/// Mirrors the `/api/states` shape: the state is always a string, numeric
/// or not, and attributes are free-form JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl EntityState {
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: Map::new(),
            last_changed: None,
            last_updated: None,
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Read access to live entity values, keyed by entity id.
///
/// `None` always means "unavailable": the entity is unknown to the source or
/// has no such attribute.
pub trait StateLookup {
    fn state(&self, entity_id: &str) -> Option<&str>;

    fn attribute(&self, entity_id: &str, key: &str) -> Option<&Value>;

    fn contains(&self, entity_id: &str) -> bool {
        self.state(entity_id).is_some()
    }

    /// The entity state coerced to a number, if it parses as one.
    fn numeric_state(&self, entity_id: &str) -> Option<f64> {
        self.state(entity_id).and_then(parse_number)
    }

    /// A numeric attribute; JSON numbers and numeric strings both count.
    fn numeric_attribute(&self, entity_id: &str, key: &str) -> Option<f64> {
        match self.attribute(entity_id, key)? {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            Value::String(s) => parse_number(s),
            _ => None,
        }
    }
}

/// All entity states from one fetch of the data source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateTable {
    entities: HashMap<String, EntityState>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) an entity, keyed by its `entity_id`.
    pub fn insert(&mut self, entity: EntityState) {
        self.entities.insert(entity.entity_id.clone(), entity);
    }

    pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
        self.entities.get(entity_id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<EntityState> for StateTable {
    fn from_iter<I: IntoIterator<Item = EntityState>>(iter: I) -> Self {
        let mut table = Self::new();
        for entity in iter {
            table.insert(entity);
        }
        table
    }
}

impl StateLookup for StateTable {
    fn state(&self, entity_id: &str) -> Option<&str> {
        self.entities.get(entity_id).map(|e| e.state.as_str())
    }

    fn attribute(&self, entity_id: &str, key: &str) -> Option<&Value> {
        self.entities.get(entity_id)?.attributes.get(key)
    }
}

/// Lenient number parsing: leading whitespace is skipped and the longest
/// numeric prefix wins, so `"42.5 %"` reads as `42.5`.
///
/// Returns `None` for text without a numeric prefix (`"unavailable"`) and for
/// non-finite results.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it carries digits ("1e" reads as 1).
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
