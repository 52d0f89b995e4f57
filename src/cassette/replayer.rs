//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<PortMethodKey, Vec<Interaction>>,
    cursors: HashMap<PortMethodKey, usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push(interaction.clone());
        }
        for queue in queues.values_mut() {
            queue.sort_by_key(|i| i.seq);
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette has no (more) interactions for the
    /// given port/method combination.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<&Interaction, String> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        let Some(queue) = self.queues.get(&key) else {
            let available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            ));
        };

        let cursor = self.cursors.entry(key).or_insert(0);
        let Some(interaction) = queue.get(*cursor) else {
            return Err(format!(
                "Cassette exhausted: all {count} interactions for port={port:?} method={method:?} \
                 have been consumed.",
                count = queue.len(),
            ));
        };
        *cursor += 1;
        Ok(interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette { name: "test".into(), recorded_at: Utc::now(), commit: "abc".into(), interactions }
    }

    fn fetch(seq: u64, caption: &str) -> Interaction {
        Interaction {
            seq,
            port: "image_fetcher".into(),
            method: "fetch".into(),
            input: json!({"caption": caption}),
            output: json!({"Ok": {"status": 200, "data": ""}}),
        }
    }

    #[test]
    fn replay_in_order() {
        let cassette = make_cassette(vec![fetch(0, "Hello"), fetch(1, "You")]);
        let mut replayer = CassetteReplayer::new(&cassette);

        let i1 = replayer.next_interaction("image_fetcher", "fetch").unwrap();
        assert_eq!(i1.input["caption"], "Hello");

        let i2 = replayer.next_interaction("image_fetcher", "fetch").unwrap();
        assert_eq!(i2.input["caption"], "You");
    }

    #[test]
    fn out_of_order_seq_is_sorted() {
        let cassette = make_cassette(vec![fetch(1, "You"), fetch(0, "Hello")]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let first = replayer.next_interaction("image_fetcher", "fetch").unwrap();
        assert_eq!(first.seq, 0);
    }

    #[test]
    fn exhausted_replayer_errors() {
        let cassette = make_cassette(vec![fetch(0, "Hello")]);
        let mut replayer = CassetteReplayer::new(&cassette);
        assert!(replayer.next_interaction("image_fetcher", "fetch").is_ok());

        let err = replayer.next_interaction("image_fetcher", "fetch").unwrap_err();
        assert!(err.contains("Cassette exhausted"));
    }

    #[test]
    fn unknown_port_errors() {
        let cassette = make_cassette(vec![]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let err = replayer.next_interaction("unknown", "method").unwrap_err();
        assert!(err.contains("no interactions recorded"));
    }
}
