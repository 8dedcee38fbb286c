use card_core::{CardError, EntityState, Result, StateTable};
use serde::Deserialize;
use std::collections::HashMap;

/// Accepted layouts of a states document.
#[derive(Deserialize)]
#[serde(untagged)]
enum StatesDocument {
    /// `[{"entity_id": ..., "state": ...}, ...]`, as served by `/api/states`.
    List(Vec<EntityState>),
    /// `{"sensor.x": {"state": ...}, ...}`, keyed by entity id.
    Map(HashMap<String, KeyedState>),
}

/// Entity body in the keyed layout; the id comes from the key.
#[derive(Deserialize)]
struct KeyedState {
    #[serde(default)]
    entity_id: Option<String>,
    #[serde(deserialize_with = "state_string")]
    state: String,
    #[serde(default)]
    attributes: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    last_changed: Option<String>,
    #[serde(default)]
    last_updated: Option<String>,
}

/// Hand-written exports sometimes carry bare numbers; keep them as text.
fn state_string<'de, D>(de: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde_json::Value;
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Null => "unavailable".to_string(),
        other => other.to_string(),
    })
}

/// Parse a states document (list or keyed map) into a [`StateTable`].
pub fn parse_states(raw: &str) -> Result<StateTable> {
    let doc: StatesDocument = serde_json::from_str(raw)
        .map_err(|e| CardError::Source(format!("parse states: {e}")))?;

    Ok(match doc {
        StatesDocument::List(states) => states.into_iter().collect(),
        StatesDocument::Map(states) => states
            .into_iter()
            .map(|(key, s)| EntityState {
                entity_id:    s.entity_id.unwrap_or(key),
                state:        s.state,
                attributes:   s.attributes,
                last_changed: s.last_changed,
                last_updated: s.last_updated,
            })
            .collect(),
    })
}
