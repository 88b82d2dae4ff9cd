//! Per-word "terms" output built from a recognition alternative.
//!
//! This is the non-merged form: NLP entities are not folded back into it.

use serde::{Deserialize, Serialize};

use crate::speech::WordInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestWord {
    pub word: String,
    /// Word confidence scaled to 0..1000
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub start: f64,
    pub duration: f64,
    pub speaker: i32,
    pub best: BestWord,
    pub alternatives: Vec<BestWord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermsOutput {
    pub terms: Vec<Term>,
}

impl From<&WordInfo> for Term {
    fn from(word: &WordInfo) -> Self {
        let start = word.start_secs();
        Self {
            start,
            duration: word.end_secs() - start,
            speaker: word.speaker_tag,
            best: BestWord {
                word: word.word.clone(),
                score: word.confidence * 1000.0,
            },
            alternatives: Vec::new(),
        }
    }
}

impl TermsOutput {
    /// The bare word sequence, in order.
    pub fn words(&self) -> Vec<&str> {
        self.terms.iter().map(|t| t.best.word.as_str()).collect()
    }
}

pub fn build_terms(words: &[WordInfo]) -> TermsOutput {
    TermsOutput {
        terms: words.iter().map(Term::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: &str, end: &str, confidence: f64, speaker: i32) -> WordInfo {
        WordInfo {
            word: text.to_string(),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            confidence,
            speaker_tag: speaker,
        }
    }

    #[test]
    fn test_build_terms() {
        let output = build_terms(&[
            word("早晨", "0s", "1.500s", 0.75, 1),
            word("香港", "1.500s", "2.250s", 0.5, 2),
        ]);

        assert_eq!(output.terms.len(), 2);
        assert_eq!(output.terms[0].start, 0.0);
        assert_eq!(output.terms[0].duration, 1.5);
        assert_eq!(output.terms[0].best.score, 750.0);
        assert_eq!(output.terms[1].start, 1.5);
        assert_eq!(output.terms[1].duration, 0.75);
        assert_eq!(output.terms[1].speaker, 2);
        assert_eq!(output.terms[1].best.word, "香港");
        assert!(output.terms.iter().all(|t| t.alternatives.is_empty()));
    }

    #[test]
    fn test_score_keeps_service_precision() {
        let parsed: WordInfo = serde_json::from_str(
            r#"{"word": "hi", "startTime": "0s", "endTime": "1s", "confidence": 0.9}"#,
        )
        .unwrap();
        let output = build_terms(&[parsed]);

        assert_eq!(output.terms[0].best.score, 900.0);
        assert_eq!(
            serde_json::to_value(&output).unwrap()["terms"][0]["best"]["score"],
            serde_json::json!(900.0)
        );
    }

    #[test]
    fn test_words_in_order() {
        let output = build_terms(&[
            word("早晨", "0s", "1s", 0.5, 1),
            word("香港", "1s", "2s", 0.5, 1),
        ]);
        assert_eq!(output.words(), vec!["早晨", "香港"]);
        assert!(build_terms(&[]).words().is_empty());
    }

    #[test]
    fn test_missing_offsets_default_to_zero() {
        let output = build_terms(&[WordInfo {
            word: "hi".to_string(),
            ..Default::default()
        }]);
        assert_eq!(output.terms[0].start, 0.0);
        assert_eq!(output.terms[0].duration, 0.0);
    }

    #[test]
    fn test_terms_json_shape() {
        let output = build_terms(&[word("hi", "1s", "2s", 0.5, 0)]);
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            serde_json::json!({
                "terms": [{
                    "start": 1.0,
                    "duration": 1.0,
                    "speaker": 0,
                    "best": {"word": "hi", "score": 500.0},
                    "alternatives": []
                }]
            })
        );
    }
}
