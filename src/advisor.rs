use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::catalog::{Catalog, PhoneRecord};
use crate::extractor::ModelExtractor;
use crate::provider::{GenerationRequest, ProviderError, TextGenerator};

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error("no Samsung phone model detected in the question")]
    NoModelDetected,
    #[error("'{0}' is not in the catalog")]
    ModelNotInCatalog(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

#[derive(Debug, Clone, Copy)]
pub struct AdvisorSettings {
    pub max_tokens: u32,
    pub temperature: f32,
    pub fallback_on_provider_error: bool,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            max_tokens: 150,
            temperature: 0.7,
            fallback_on_provider_error: true,
        }
    }
}

impl From<&crate::config::ProviderConfig> for AdvisorSettings {
    fn from(config: &crate::config::ProviderConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            fallback_on_provider_error: config.fallback_on_provider_error,
        }
    }
}

/// The user-facing subset of a [`PhoneRecord`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhoneSpecs {
    pub display: Option<String>,
    pub battery: Option<String>,
    pub camera: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub price: Option<String>,
}

impl From<&PhoneRecord> for PhoneSpecs {
    fn from(record: &PhoneRecord) -> Self {
        Self {
            display: record.display.clone(),
            battery: record.battery.clone(),
            camera: record.camera.clone(),
            ram: record.ram.clone(),
            storage: record.storage.clone(),
            price: record.price.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    Provider,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Advice {
    pub phone_model: String,
    pub specs: PhoneSpecs,
    pub review: String,
    pub source: ReviewSource,
}

pub struct Advisor {
    extractor: ModelExtractor,
    catalog: Arc<Catalog>,
    provider: Option<Arc<dyn TextGenerator>>,
    settings: AdvisorSettings,
}

impl Advisor {
    pub fn new(
        catalog: Arc<Catalog>,
        provider: Option<Arc<dyn TextGenerator>>,
        settings: AdvisorSettings,
    ) -> Self {
        Self {
            extractor: ModelExtractor::new(),
            catalog,
            provider,
            settings,
        }
    }

    /// Answers a free-text question about one phone: detect the model, load its
    /// specs, then ask the provider for a short review.
    pub async fn ask(&self, question: &str) -> Result<Advice, AdviceError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AdviceError::EmptyQuestion);
        }
        tracing::info!(question, "advice requested");

        let model = self
            .extractor
            .extract(question)
            .ok_or(AdviceError::NoModelDetected)?;

        let record = self
            .catalog
            .get_by_model(&model)
            .await
            .ok_or_else(|| AdviceError::ModelNotInCatalog(model.clone()))?;
        tracing::debug!(extracted = %model, matched = %record.model_name, "specs found");

        let (review, source) = self.review(&record, question).await?;

        Ok(Advice {
            phone_model: record.model_name.clone(),
            specs: PhoneSpecs::from(&record),
            review,
            source,
        })
    }

    async fn review(
        &self,
        record: &PhoneRecord,
        question: &str,
    ) -> Result<(String, ReviewSource), AdviceError> {
        let Some(provider) = &self.provider else {
            return Ok((fallback_review(record, question), ReviewSource::Fallback));
        };

        let request = GenerationRequest {
            prompt: build_prompt(record, question),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let result = provider.generate(&request).await.and_then(|text| {
            let text = text.trim().to_string();
            if text.is_empty() {
                Err(ProviderError::Unavailable {
                    provider: provider.name().to_string(),
                    detail: "empty completion".to_string(),
                })
            } else {
                Ok(text)
            }
        });

        match result {
            Ok(text) => {
                tracing::info!(provider = provider.name(), "review generated");
                Ok((text, ReviewSource::Provider))
            }
            Err(e) if self.settings.fallback_on_provider_error => {
                tracing::warn!(error = %e, "provider failed, using templated review");
                Ok((fallback_review(record, question), ReviewSource::Fallback))
            }
            Err(e) => {
                tracing::error!(error = %e, "provider failed");
                Err(AdviceError::Provider(e))
            }
        }
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("not listed")
}

pub fn build_prompt(record: &PhoneRecord, question: &str) -> String {
    let mut specs = format!(
        "Model: {}\nDisplay: {}\nBattery: {}\nCamera: {}\nRAM: {}\nStorage: {}\nPrice: {}\n",
        record.model_name,
        field(&record.display),
        field(&record.battery),
        field(&record.camera),
        field(&record.ram),
        field(&record.storage),
        field(&record.price),
    );
    if let Some(colors) = &record.colors {
        specs.push_str(&format!("Colors: {}\n", colors));
    }

    format!(
        "You are a helpful Samsung phone advisor. Here are the specifications for a phone:\n\n\
         {specs}\n\
         User's question: {question}\n\n\
         Answer the question using only the specifications above; if they do not cover it, say so. \
         Be friendly and informative, highlight the features relevant to the question, \
         and keep the response to 2-3 sentences."
    )
}

/// Deterministic review used when no provider answer is available. The template
/// is picked by the first keyword group found in the question.
pub fn fallback_review(record: &PhoneRecord, question: &str) -> String {
    let q = question.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| q.contains(w));

    let model = &record.model_name;
    let display = field(&record.display);
    let camera = field(&record.camera);
    let battery = field(&record.battery);
    let price = field(&record.price);

    if has(&["camera", "photo"]) {
        format!(
            "The {model} features an excellent {camera} camera setup, making it ideal for photography enthusiasts. \
             With its premium sensor and computational photography, it delivers stunning images in various lighting conditions."
        )
    } else if has(&["battery", "charge"]) {
        format!(
            "The {model} comes with {battery}, ensuring excellent daily battery life. \
             The fast charging capability means you can get back to using your phone quickly."
        )
    } else if has(&["display", "screen"]) {
        format!(
            "The {model} boasts a beautiful {display} display that provides vibrant colors and smooth scrolling. \
             This makes it perfect for watching content and gaming."
        )
    } else if has(&["price", "cost", "value"]) {
        format!(
            "At {price}, the {model} offers excellent value with premium specs including {display} and {camera}. \
             It's a solid investment for anyone looking for a high-end Samsung experience."
        )
    } else if has(&["review", "opinion"]) {
        format!(
            "The {model} is an excellent smartphone featuring {display}, {camera}, and {battery}. \
             At {price}, it represents Samsung's commitment to premium features and reliable performance."
        )
    } else {
        format!(
            "The {model} is a fantastic choice with impressive specifications including {display}, \
             {camera}, and {battery}. Priced at {price}, it offers great value and performance."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_data::sample_catalog;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubGenerator {
        reply: Result<String, ProviderError>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        fn new(reply: Result<String, ProviderError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        fn name(&self) -> &str {
            "stub"
        }

        async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            self.reply.clone()
        }
    }

    fn quota_error() -> ProviderError {
        ProviderError::QuotaExceeded {
            provider: "stub".to_string(),
            detail: "HTTP 429".to_string(),
        }
    }

    async fn seeded_catalog() -> (tempfile::TempDir, Arc<Catalog>) {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::open(&dir.path().join("catalog.db")).await.unwrap();
        catalog.seed(&sample_catalog()).await.unwrap();
        (dir, Arc::new(catalog))
    }

    fn settings(fallback: bool) -> AdvisorSettings {
        AdvisorSettings {
            fallback_on_provider_error: fallback,
            ..AdvisorSettings::default()
        }
    }

    #[tokio::test]
    async fn test_provider_reply_is_returned_trimmed() {
        let (_dir, catalog) = seeded_catalog().await;
        let stub = StubGenerator::new(Ok("  A superb flagship.\n".to_string()));
        let advisor = Advisor::new(catalog, Some(stub.clone()), settings(true));

        let advice = advisor.ask("Tell me about the Galaxy S24 Ultra").await.unwrap();

        assert_eq!(advice.phone_model, "Samsung Galaxy S24 Ultra");
        assert_eq!(advice.specs.price.as_deref(), Some("$1299"));
        assert_eq!(advice.review, "A superb flagship.");
        assert_eq!(advice.source, ReviewSource::Provider);

        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Samsung Galaxy S24 Ultra"));
        assert!(prompts[0].contains("Tell me about the Galaxy S24 Ultra"));
        assert!(prompts[0].contains("2-3 sentences"));
    }

    #[tokio::test]
    async fn test_empty_question_rejected() {
        let (_dir, catalog) = seeded_catalog().await;
        let advisor = Advisor::new(catalog, None, settings(true));

        assert!(matches!(advisor.ask("   ").await, Err(AdviceError::EmptyQuestion)));
    }

    #[tokio::test]
    async fn test_no_model_detected() {
        let (_dir, catalog) = seeded_catalog().await;
        let stub = StubGenerator::new(Ok("unused".to_string()));
        let advisor = Advisor::new(catalog, Some(stub.clone()), settings(true));

        let err = advisor.ask("What's a good phone?").await.unwrap_err();
        assert!(matches!(err, AdviceError::NoModelDetected));
        assert!(stub.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_model_not_in_catalog() {
        let (_dir, catalog) = seeded_catalog().await;
        let advisor = Advisor::new(catalog, None, settings(true));

        match advisor.ask("Tell me about the Galaxy S99").await {
            Err(AdviceError::ModelNotInCatalog(model)) => assert_eq!(model, "Galaxy S99"),
            other => panic!("expected ModelNotInCatalog, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_when_enabled() {
        let (_dir, catalog) = seeded_catalog().await;
        let stub = StubGenerator::new(Err(quota_error()));
        let advisor = Advisor::new(catalog, Some(stub), settings(true));

        let advice = advisor
            .ask("How is the camera on the Galaxy Z Fold 5?")
            .await
            .unwrap();

        assert_eq!(advice.phone_model, "Samsung Galaxy Z Fold 5");
        assert_eq!(advice.source, ReviewSource::Fallback);
        assert!(advice.review.contains("50MP main, 12MP ultra-wide, 10MP telephoto"));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_when_disabled() {
        let (_dir, catalog) = seeded_catalog().await;
        let stub = StubGenerator::new(Err(quota_error()));
        let advisor = Advisor::new(catalog, Some(stub), settings(false));

        let err = advisor.ask("Galaxy A54 battery?").await.unwrap_err();
        assert!(matches!(
            err,
            AdviceError::Provider(ProviderError::QuotaExceeded { .. })
        ));
    }

    #[tokio::test]
    async fn test_blank_completion_counts_as_failure() {
        let (_dir, catalog) = seeded_catalog().await;
        let stub = StubGenerator::new(Ok("   ".to_string()));
        let advisor = Advisor::new(catalog, Some(stub), settings(false));

        let err = advisor.ask("Galaxy S23 review").await.unwrap_err();
        assert!(matches!(
            err,
            AdviceError::Provider(ProviderError::Unavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_no_provider_uses_template() {
        let (_dir, catalog) = seeded_catalog().await;
        let advisor = Advisor::new(catalog, None, settings(false));

        let advice = advisor.ask("What does the S23 Ultra cost?").await.unwrap();
        assert_eq!(advice.phone_model, "Samsung Galaxy S23 Ultra");
        assert_eq!(advice.source, ReviewSource::Fallback);
        assert!(advice.review.starts_with("At $999, the Samsung Galaxy S23 Ultra"));
    }

    fn record() -> PhoneRecord {
        PhoneRecord {
            id: 1,
            model_name: "Samsung Galaxy S24".to_string(),
            display: Some("6.2 inches Dynamic AMOLED 2X, 120Hz".to_string()),
            battery: Some("4000 mAh, 25W fast charging".to_string()),
            camera: Some("50MP main".to_string()),
            ram: Some("8GB".to_string()),
            storage: Some("128GB".to_string()),
            price: Some("$799".to_string()),
            colors: Some("Onyx Black".to_string()),
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_fallback_templates_by_keyword() {
        let r = record();

        assert!(fallback_review(&r, "how are the PHOTOS?").contains("photography"));
        assert!(fallback_review(&r, "does it charge fast").contains("4000 mAh"));
        assert!(fallback_review(&r, "screen quality").contains("vibrant colors"));
        assert!(fallback_review(&r, "is it good value").starts_with("At $799"));
        assert!(fallback_review(&r, "your opinion").contains("commitment"));
        assert!(fallback_review(&r, "tell me about it").starts_with("The Samsung Galaxy S24 is a fantastic choice"));
    }

    #[test]
    fn test_fallback_keyword_precedence() {
        // Camera is checked before battery.
        let review = fallback_review(&record(), "camera and battery?");
        assert!(review.contains("photography"));
    }

    #[test]
    fn test_prompt_lists_specs_and_missing_fields() {
        let mut r = record();
        r.ram = None;

        let prompt = build_prompt(&r, "Is it fast?");
        assert!(prompt.contains("Display: 6.2 inches Dynamic AMOLED 2X, 120Hz"));
        assert!(prompt.contains("RAM: not listed"));
        assert!(prompt.contains("Colors: Onyx Black"));
        assert!(prompt.contains("User's question: Is it fast?"));
    }
}
