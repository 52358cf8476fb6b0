use regex::{Regex, RegexBuilder};

/// Model-name rules, tried in order. The first rule that matches anywhere in the
/// text wins, so more specific families must stay ahead of looser ones.
const MODEL_RULES: &[(&str, &str)] = &[
    ("galaxy_s", r"Galaxy\s+S\d+(?:\s+Ultra)?"),
    ("galaxy_z", r"Galaxy\s+Z\s+(?:Fold|Flip)\s+\d+"),
    ("galaxy_a", r"Galaxy\s+A\d+"),
    ("galaxy_tab", r"Galaxy\s+Tab\s+S\d+"),
    ("bare_ultra", r"S\d+\s+Ultra"),
    ("bare_z", r"Z\s+(?:Fold|Flip)"),
    ("galaxy_m_f", r"Galaxy\s+[MF]\d+"),
    ("galaxy_note", r"Galaxy\s+Note\s*\d+"),
];

struct ModelRule {
    name: &'static str,
    pattern: Regex,
}

pub struct ModelExtractor {
    rules: Vec<ModelRule>,
}

impl ModelExtractor {
    pub fn new() -> Self {
        let rules = MODEL_RULES
            .iter()
            .map(|&(name, pattern)| ModelRule {
                name,
                // Patterns are compile-time constants covered by tests.
                pattern: RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("model rule must be a valid regex"),
            })
            .collect();

        Self { rules }
    }

    /// Returns the phrase matched by the first matching rule, or `None` when the
    /// text names no recognisable model.
    pub fn extract(&self, text: &str) -> Option<String> {
        for rule in &self.rules {
            if let Some(m) = rule.pattern.find(text) {
                let model = m.as_str().trim().to_string();
                tracing::debug!(rule = rule.name, %model, "phone model detected");
                return Some(model);
            }
        }

        tracing::debug!("no phone model detected");
        None
    }
}

impl Default for ModelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_compiles() {
        assert_eq!(ModelExtractor::new().rules.len(), MODEL_RULES.len());
    }

    #[test]
    fn test_extracts_common_phrasings() {
        let extractor = ModelExtractor::new();

        assert_eq!(
            extractor.extract("Tell me about the Galaxy S24 Ultra").as_deref(),
            Some("Galaxy S24 Ultra")
        );
        assert_eq!(
            extractor.extract("is the galaxy z fold 5 durable?").as_deref(),
            Some("galaxy z fold 5")
        );
        assert_eq!(
            extractor.extract("Galaxy A54 camera").as_deref(),
            Some("Galaxy A54")
        );
        assert_eq!(
            extractor.extract("how big is the Galaxy Tab S9").as_deref(),
            Some("Galaxy Tab S9")
        );
        assert_eq!(
            extractor.extract("S23   Ultra battery life").as_deref(),
            Some("S23   Ultra")
        );
        assert_eq!(extractor.extract("z flip hinge").as_deref(), Some("z flip"));
        assert_eq!(
            extractor.extract("price of the Galaxy M54").as_deref(),
            Some("Galaxy M54")
        );
        assert_eq!(
            extractor.extract("Galaxy Note 20 Ultra review").as_deref(),
            Some("Galaxy Note 20")
        );
    }

    #[test]
    fn test_no_model_returns_none() {
        let extractor = ModelExtractor::new();

        assert!(extractor.extract("What's a good phone?").is_none());
        assert!(extractor.extract("").is_none());
        assert!(extractor.extract("   ").is_none());
        assert!(extractor.extract("Pixel 8 Pro vs iPhone 15").is_none());
    }

    #[test]
    fn test_rule_order_beats_text_position() {
        let extractor = ModelExtractor::new();

        // The Z Fold phrase comes first in the text, but the Galaxy S rule is
        // earlier in the list.
        assert_eq!(
            extractor
                .extract("Z Fold 5 or Galaxy S23, which one?")
                .as_deref(),
            Some("Galaxy S23")
        );

        // Galaxy A beats the bare Ultra rule.
        assert_eq!(
            extractor.extract("S22 Ultra vs Galaxy A73").as_deref(),
            Some("Galaxy A73")
        );

        // The full Z rule beats the bare Z rule.
        assert_eq!(
            extractor.extract("Z Flip or Galaxy Z Fold 4").as_deref(),
            Some("Galaxy Z Fold 4")
        );
    }

    #[test]
    fn test_galaxy_s_rule_shadows_bare_ultra() {
        let extractor = ModelExtractor::new();

        // Both the Galaxy S rule and the bare Ultra rule can match; the longer
        // Galaxy phrase is kept because its rule is tried first.
        assert_eq!(
            extractor.extract("thoughts on Galaxy S24 Ultra?").as_deref(),
            Some("Galaxy S24 Ultra")
        );
        assert_eq!(
            extractor.extract("S24 Ultra").as_deref(),
            Some("S24 Ultra")
        );
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = ModelExtractor::new();
        let question = "compare galaxy s23 and galaxy a54";
        let first = extractor.extract(question);

        for _ in 0..10 {
            assert_eq!(extractor.extract(question), first);
        }
        assert_eq!(first.as_deref(), Some("galaxy s23"));
    }
}
