use consulmap::{CommandQueue, ViewConfig, ViewSession};
use serde_json::{json, Value};

/// One state per consulate, in consulate table order.
pub const EIGHT_STATES: [(&str, &str); 8] = [
    ("Louisiana", "New Orleans"),
    ("California", "Los Angeles"),
    ("Georgia", "Miami"),
    ("Virginia", "Washington, DC"),
    ("New York", "New York City"),
    ("Florida", "Tampa"),
    ("Texas", "Houston"),
    ("Pennsylvania", "Philadelphia"),
];

pub fn feature(name: &str, consulate: &str) -> Value {
    json!({
        "type": "Feature",
        "properties": { "name": name, "consulate": consulate },
        "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]] },
    })
}

pub fn collection(states: &[(&str, &str)]) -> String {
    let features: Vec<_> = states.iter().map(|(n, c)| feature(n, c)).collect();
    json!({ "type": "FeatureCollection", "features": features }).to_string()
}

pub fn loaded_session(states: &[(&str, &str)], config: ViewConfig) -> ViewSession<CommandQueue> {
    let mut session = ViewSession::new(config, CommandQueue::new());
    session.load_regions(&collection(states)).unwrap();
    session
}
