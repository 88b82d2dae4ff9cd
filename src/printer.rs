use std::io::{self, Write};

use tracing::warn;

use crate::speech::{SpeechRecognitionAlternative, SpeechRecognitionResult};

pub const TRANSCRIPT_LABEL: &str = "Transcript: ";

/// Print alternative 0 of every result as `Transcript: <text>`.
///
/// Returns the number of lines written. Later alternatives are never read.
pub fn print_transcripts<W: Write>(
    out: &mut W,
    results: &[SpeechRecognitionResult],
) -> io::Result<usize> {
    let mut lines = 0;
    for (index, result) in results.iter().enumerate() {
        match result.best() {
            Some(alternative) => {
                writeln!(out, "{}{}", TRANSCRIPT_LABEL, alternative.transcript)?;
                lines += 1;
            }
            None => warn!("Result {} has no alternatives", index),
        }
    }
    Ok(lines)
}

/// Word-level listing of one alternative: word, time span and confidence.
pub fn print_words<W: Write>(
    out: &mut W,
    alternative: &SpeechRecognitionAlternative,
) -> io::Result<()> {
    for word in &alternative.words {
        writeln!(out, "Word: {}", word.word)?;
        writeln!(out, "\t {} secs - {} secs", word.start_secs(), word.end_secs())?;
        writeln!(out, "Confidence: {}", word.confidence)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::WordInfo;

    fn alternative(transcript: &str) -> SpeechRecognitionAlternative {
        SpeechRecognitionAlternative {
            transcript: transcript.to_string(),
            ..Default::default()
        }
    }

    fn result(transcripts: &[&str]) -> SpeechRecognitionResult {
        SpeechRecognitionResult {
            alternatives: transcripts.iter().map(|t| alternative(t)).collect(),
            ..Default::default()
        }
    }

    fn render(results: &[SpeechRecognitionResult]) -> (String, usize) {
        let mut out = Vec::new();
        let lines = print_transcripts(&mut out, results).unwrap();
        (String::from_utf8(out).unwrap(), lines)
    }

    #[test]
    fn test_empty_results_print_nothing() {
        let (text, lines) = render(&[]);
        assert_eq!(text, "");
        assert_eq!(lines, 0);
    }

    #[test]
    fn test_only_first_alternative_printed() {
        let (text, lines) = render(&[result(&["hello", "hullo"])]);
        assert_eq!(text, "Transcript: hello\n");
        assert_eq!(lines, 1);
    }

    #[test]
    fn test_one_line_per_result() {
        let results = vec![result(&["一", "x"]), result(&["two"]), result(&["three", "tree"])];
        let (text, lines) = render(&results);

        assert_eq!(lines, 3);
        let printed: Vec<&str> = text.lines().collect();
        assert_eq!(printed, vec!["Transcript: 一", "Transcript: two", "Transcript: three"]);
        assert!(printed.iter().all(|l| l.starts_with(TRANSCRIPT_LABEL)));
    }

    #[test]
    fn test_result_without_alternatives_skipped() {
        let (text, lines) = render(&[result(&[]), result(&["kept"])]);
        assert_eq!(text, "Transcript: kept\n");
        assert_eq!(lines, 1);
    }

    #[test]
    fn test_print_words() {
        let alt = SpeechRecognitionAlternative {
            transcript: "hello world".to_string(),
            confidence: 0.9,
            words: vec![WordInfo {
                word: "hello".to_string(),
                start_time: Some("0.100s".to_string()),
                end_time: Some("0.500s".to_string()),
                confidence: 0.5,
                speaker_tag: 1,
            }],
        };
        let mut out = Vec::new();
        print_words(&mut out, &alt).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Word: hello\n\t 0.1 secs - 0.5 secs\nConfidence: 0.5\n"
        );
    }
}
