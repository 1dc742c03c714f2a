//! Wire types for the chat completions API, confined to this crate.

use serde::{Deserialize, Serialize};

use micdrop_core::domain::{DebateStats, JudgeVerdict};

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ResponseFormat {
    pub(crate) const JSON_OBJECT: Self = Self {
        kind: "json_object",
    };
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// The judge's structured ruling as returned by the model.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JudgePayload {
    #[serde(alias = "WinnerName")]
    winner_name: String,
    #[serde(alias = "Reasoning", default)]
    reasoning: String,
    #[serde(alias = "Stats", default)]
    stats: DebateStats,
}

/// Parse the judge's JSON ruling.
///
/// Unparseable output yields the parse-error sentinel verdict instead of an
/// error - judging failure must never abort the debate.
pub(crate) fn parse_judge_verdict(json: &str) -> JudgeVerdict {
    match serde_json::from_str::<JudgePayload>(json) {
        Ok(payload) => JudgeVerdict {
            winner_name: payload.winner_name,
            reasoning: payload.reasoning,
            stats: payload.stats,
        },
        Err(err) => {
            tracing::error!(%err, "failed to parse judge response");
            JudgeVerdict::parse_error(format!("JSON parsing error: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micdrop_core::domain::JUDGE_PARSE_ERROR_WINNER;

    #[test]
    fn parses_camel_case_ruling() {
        let verdict = parse_judge_verdict(
            r#"{
                "winnerName": "Alpha",
                "reasoning": "tighter flow",
                "stats": { "rapper1TotalScore": 34, "rapper2TotalScore": 28 }
            }"#,
        );
        assert_eq!(verdict.winner_name, "Alpha");
        assert_eq!(verdict.reasoning, "tighter flow");
        assert_eq!(verdict.stats.rapper1_total_score, 34);
        assert_eq!(verdict.stats.rapper2_total_score, 28);
    }

    #[test]
    fn parses_pascal_case_aliases() {
        let verdict =
            parse_judge_verdict(r#"{ "WinnerName": "Beta", "Reasoning": "better rebuttals" }"#);
        assert_eq!(verdict.winner_name, "Beta");
        assert_eq!(verdict.reasoning, "better rebuttals");
        assert_eq!(verdict.stats, DebateStats::default());
    }

    #[test]
    fn garbage_yields_parse_sentinel() {
        let verdict = parse_judge_verdict("and the winner is...");
        assert_eq!(verdict.winner_name, JUDGE_PARSE_ERROR_WINNER);
        assert!(verdict.reasoning.contains("JSON parsing error"));
    }

    #[test]
    fn missing_winner_yields_parse_sentinel() {
        let verdict = parse_judge_verdict(r#"{ "reasoning": "no winner field" }"#);
        assert_eq!(verdict.winner_name, JUDGE_PARSE_ERROR_WINNER);
    }

    #[test]
    fn request_serializes_expected_shape() {
        let request = ChatCompletionRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "be brief",
                },
                ChatMessage {
                    role: "user",
                    content: "hello",
                },
            ],
            max_tokens: Some(150),
            temperature: 0.7,
            response_format: Some(ResponseFormat::JSON_OBJECT),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 150);
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "system");
    }

    #[test]
    fn request_omits_unset_options() {
        let request = ChatCompletionRequest {
            messages: vec![],
            max_tokens: None,
            temperature: 0.5,
            response_format: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("response_format").is_none());
    }
}
