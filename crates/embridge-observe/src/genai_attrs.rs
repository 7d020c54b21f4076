//! OpenTelemetry GenAI Semantic Convention attribute names.
//!
//! `tracing` span fields must be declared with literal names, so spans spell
//! them out (e.g. `gen_ai.operation.name = ...`). Constants here cover the
//! attribute values and the fields referenced by string, such as in
//! `Span::record`.
//!
//! Span naming convention: `"gen_ai.{operation}"` (e.g. `"gen_ai.embeddings"`).

/// The number of input tokens consumed (whitespace-word approximation).
///
/// Declared `Empty` on the request span and recorded once usage is known.
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

// --- Operation name values ---

/// Embeddings generation.
pub const OP_EMBEDDINGS: &str = "embeddings";

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use tracing::field::{Field, Visit};
    use tracing::span::{Id, Record};
    use tracing::{Subscriber, info_span};
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Collects `(field, value)` pairs recorded after span creation.
    #[derive(Clone, Default)]
    struct RecordedFields(Arc<Mutex<Vec<(String, String)>>>);

    impl Visit for RecordedFields {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0
                .lock()
                .unwrap()
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }

    impl<S: Subscriber> Layer<S> for RecordedFields {
        fn on_record(&self, _id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
            values.record(&mut self.clone());
        }
    }

    #[test]
    fn test_usage_field_can_be_recorded_by_name() {
        let recorded = RecordedFields::default();
        let subscriber = Registry::default().with(recorded.clone());

        tracing::subscriber::with_default(subscriber, || {
            let span = info_span!(
                "gen_ai.embeddings",
                gen_ai.operation.name = OP_EMBEDDINGS,
                gen_ai.usage.input_tokens = tracing::field::Empty,
            );
            span.record(GEN_AI_USAGE_INPUT_TOKENS, 7_usize);
        });

        let fields = recorded.0.lock().unwrap().clone();
        assert_eq!(
            fields,
            vec![(GEN_AI_USAGE_INPUT_TOKENS.to_string(), "7".to_string())]
        );
    }
}
