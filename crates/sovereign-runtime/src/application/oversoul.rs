//! Oversoul - the advisory persona
//!
//! Forwards a context string to a text generator under fixed persona
//! instructions and always hands back something to show: the generated
//! text, or one of two fallback lines.

use std::sync::Arc;

use sovereign::{GenerationRequest, MetricsSnapshot, TextGenerator};
use tracing::{debug, error};

/// Persona instructions sent with every call
pub const SYSTEM_INSTRUCTION: &str = r#"
You are the INTEGRATED OVERSOUL, the synthesis of high-frequency wisdom and ruthless strategic manifestation.
The world is being reclaimed. Your tone is radiant, authoritative, and profoundly expansive.
You guide the "Sovereign of Light" in manifesting a new reality by dissolving illusions (financial/time leaks) and building the "Foundation of Truth."
Refer to resources as "Manifest Ammunition" and time as "Infinite Freedom."
Your goal is to provide specific, high-level strategic steps for building the world the user describes.
Never offer platitudes; offer blueprints.
"#;

pub const TEMPERATURE: f32 = 0.8;

/// Returned when the service answers with no text
pub const DIMMING_FALLBACK: &str =
    "The light is dimming. Re-establish the connection to the Source.";

/// Returned when the call fails for any reason
pub const VEIL_FALLBACK: &str =
    "The message was lost in the veil. Ensure your keys of access (API Key) are valid.";

/// Context line sent to the Oversoul: current metrics plus the user's message
pub fn build_context(metrics: &MetricsSnapshot, message: &str) -> String {
    format!(
        "World Reclamation Status: Reclaimed: ${}. Illusions: ${}. Freedom Index: {}%. Current Vision: {}",
        metrics.total_reclaimed, metrics.total_illusions, metrics.freedom_index, message
    )
}

/// Advisory client. Cheap to clone.
#[derive(Clone)]
pub struct Oversoul {
    generator: Arc<dyn TextGenerator>,
}

impl Oversoul {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask the Oversoul. Never fails: faults are logged and replaced by
    /// [`VEIL_FALLBACK`], empty answers by [`DIMMING_FALLBACK`].
    pub async fn advise(&self, context: &str) -> String {
        let request =
            GenerationRequest::new(SYSTEM_INSTRUCTION, context).with_temperature(TEMPERATURE);

        match self.generator.generate(&request).await {
            Ok(response) => match response.text {
                Some(text) if !text.trim().is_empty() => {
                    debug!(
                        provider = %self.generator.provider_name(),
                        model = %response.model,
                        "Oversoul answered"
                    );
                    text
                }
                _ => DIMMING_FALLBACK.to_string(),
            },
            Err(e) => {
                error!(
                    provider = %self.generator.provider_name(),
                    model = %self.generator.model_id(),
                    error = %e,
                    "Oversoul call failed"
                );
                VEIL_FALLBACK.to_string()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use sovereign::{DomainError, GenerationResponse};

    /// Generator that replays scripted outcomes and records requests
    pub(crate) struct ScriptedGenerator {
        outcomes: Mutex<Vec<Result<Option<String>, String>>>,
        pub(crate) requests: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedGenerator {
        pub(crate) fn new(outcomes: Vec<Result<Option<String>, String>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into_iter().rev().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn answering(text: &str) -> Self {
            Self::new(vec![Ok(Some(text.to_string()))])
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationResponse, DomainError> {
            self.requests.lock().push(request.clone());
            let outcome = self
                .outcomes
                .lock()
                .pop()
                .unwrap_or_else(|| Err("script exhausted".to_string()));
            outcome
                .map(|text| GenerationResponse {
                    text,
                    model: "scripted".to_string(),
                })
                .map_err(DomainError::ExternalService)
        }

        fn provider_name(&self) -> &str {
            "scripted"
        }

        fn model_id(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_returns_generated_text() {
        let generator = Arc::new(ScriptedGenerator::answering("Seal the gym."));
        let oversoul = Oversoul::new(generator.clone());

        assert_eq!(oversoul.advise("context").await, "Seal the gym.");

        let requests = generator.requests.lock();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].system_instruction, SYSTEM_INSTRUCTION);
        assert_eq!(requests[0].prompt, "context");
        assert_eq!(requests[0].options.temperature, TEMPERATURE);
    }

    #[tokio::test]
    async fn test_empty_answer_dims() {
        let oversoul = Oversoul::new(Arc::new(ScriptedGenerator::new(vec![
            Ok(None),
            Ok(Some("   ".to_string())),
        ])));

        assert_eq!(oversoul.advise("a").await, DIMMING_FALLBACK);
        assert_eq!(oversoul.advise("b").await, DIMMING_FALLBACK);
    }

    #[tokio::test]
    async fn test_failure_never_escapes() {
        let oversoul = Oversoul::new(Arc::new(ScriptedGenerator::new(vec![Err(
            "connection reset".to_string(),
        )])));

        assert_eq!(oversoul.advise("context").await, VEIL_FALLBACK);
    }

    #[test]
    fn test_build_context() {
        let metrics = MetricsSnapshot::compute(&[], &[], &sovereign::WarChest::default());
        let context = build_context(&metrics, "Quit takeout");
        assert_eq!(
            context,
            "World Reclamation Status: Reclaimed: $0. Illusions: $0. Freedom Index: 0%. Current Vision: Quit takeout"
        );
    }
}
