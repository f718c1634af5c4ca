//! Tolerant extraction of `{answer, followups}` from webhook JSON.
//!
//! The workflow service returns a handful of ad-hoc, inconsistently
//! cased response shapes depending on which node produced the reply.
//! Normalization is an ordered list of extractor rules evaluated in
//! fixed precedence, first match wins. Key lookups accept snake_case,
//! camelCase, and Capitalized spellings because the upstream casing is
//! not contractually stable -- that tolerance is a design property, not
//! an oversight.
//!
//! [`normalize`] is total: unknown or missing keys are never errors,
//! they simply fall through to the next rule, and an unrecognizable
//! payload yields a fixed apology string. The caller has no recovery
//! path beyond display, so there is nothing useful to signal.

use serde_json::{Map, Value};

use maitre_types::chat::NormalizedReply;

/// Answer used when no rule recognizes the payload.
pub const FALLBACK_ANSWER: &str = "I apologize, but I couldn't process that request.";

type Obj = Map<String, Value>;

/// Extractor rules over an object payload, in precedence order.
const RULES: &[fn(&Obj) -> Option<NormalizedReply>] = &[
    answer_rule,
    response_rule,
    message_rule,
    text_rule,
    data_rule,
    output_rule,
];

/// Map an arbitrary webhook reply to `{answer, followups}`.
pub fn normalize(raw: &Value) -> NormalizedReply {
    // The service sometimes wraps a single object in an array.
    let raw = match raw {
        Value::Array(items) => match items.first() {
            Some(first) => first,
            None => return NormalizedReply::answer_only(FALLBACK_ANSWER),
        },
        other => other,
    };

    // A bare string is the whole answer.
    if let Value::String(s) = raw {
        return NormalizedReply::answer_only(s.clone());
    }

    if let Value::Object(obj) = raw {
        for rule in RULES {
            if let Some(reply) = rule(obj) {
                return reply;
            }
        }
    }

    NormalizedReply::answer_only(FALLBACK_ANSWER)
}

/// First key holding a non-blank string value.
///
/// Callers pass every spelling the upstream service has been observed
/// to use, in priority order.
fn string_field(obj: &Obj, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        obj.get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    })
}

const FOLLOWUP_01_KEYS: &[&str] = &[
    "followup_question01",
    "followupQuestion01",
    "followup_question_01",
];

const FOLLOWUP_02_KEYS: &[&str] = &[
    "followup_question02",
    "followupQuestion02",
    "followup_question_02",
];

/// Collect the two follow-up slots: 01 before 02, blanks dropped,
/// first non-blank spelling wins within a slot.
fn followups(obj: &Obj) -> Vec<String> {
    [FOLLOWUP_01_KEYS, FOLLOWUP_02_KEYS]
        .iter()
        .filter_map(|keys| string_field(obj, keys))
        .collect()
}

fn answer_rule(obj: &Obj) -> Option<NormalizedReply> {
    let answer = string_field(obj, &["answer", "Answer"])?;
    Some(NormalizedReply {
        answer,
        followups: followups(obj),
    })
}

fn response_rule(obj: &Obj) -> Option<NormalizedReply> {
    let answer = string_field(obj, &["response", "Response"])?;
    Some(NormalizedReply {
        answer,
        followups: followups(obj),
    })
}

fn message_rule(obj: &Obj) -> Option<NormalizedReply> {
    string_field(obj, &["message", "Message"]).map(NormalizedReply::answer_only)
}

fn text_rule(obj: &Obj) -> Option<NormalizedReply> {
    string_field(obj, &["text", "Text"]).map(NormalizedReply::answer_only)
}

/// Nested `data` object, probed with the same sub-priority.
fn data_rule(obj: &Obj) -> Option<NormalizedReply> {
    let data = obj.get("data")?.as_object()?;
    let answer = string_field(
        data,
        &["answer", "Answer", "response", "Response", "message", "Message"],
    )?;
    Some(NormalizedReply {
        answer,
        followups: followups(data),
    })
}

/// `output` from an agent node: either a string that may carry JSON
/// inside markdown code fences, or an already-parsed object.
fn output_rule(obj: &Obj) -> Option<NormalizedReply> {
    match obj.get("output")? {
        Value::String(s) => {
            let stripped = strip_code_fence(s);
            match serde_json::from_str::<Value>(&stripped) {
                Ok(Value::Object(parsed)) => {
                    let answer = string_field(&parsed, &["answer", "Answer"]).unwrap_or_default();
                    Some(NormalizedReply {
                        answer,
                        followups: followups(&parsed),
                    })
                }
                // Parsed to a bare JSON string: that string is the answer.
                Ok(Value::String(inner)) => Some(NormalizedReply::answer_only(inner)),
                // Anything else: the stripped text is the answer verbatim.
                _ => Some(NormalizedReply::answer_only(stripped)),
            }
        }
        Value::Object(out) => {
            // A nested `response` string takes precedence and carries
            // no follow-up suggestions.
            if let Some(answer) = string_field(out, &["response"]) {
                return Some(NormalizedReply::answer_only(answer));
            }
            let answer = string_field(out, &["answer", "Answer", "Response"])?;
            Some(NormalizedReply {
                answer,
                followups: followups(out),
            })
        }
        _ => None,
    }
}

/// Remove markdown code-fence markers (``` with an optional json tag).
fn strip_code_fence(s: &str) -> String {
    s.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_with_both_followups() {
        let reply = normalize(&json!({
            "answer": "We open at 8am.",
            "followup_question01": "Do you offer delivery?",
            "followup_question02": "Where are you located?",
        }));
        assert_eq!(reply.answer, "We open at 8am.");
        assert_eq!(
            reply.followups,
            vec!["Do you offer delivery?", "Where are you located?"]
        );
    }

    #[test]
    fn test_casing_variants_for_followup_keys() {
        let reply = normalize(&json!({
            "Answer": "Yes, we cater.",
            "followupQuestion01": "What is the minimum order?",
            "followup_question_02": "How far in advance should I book?",
        }));
        assert_eq!(reply.answer, "Yes, we cater.");
        assert_eq!(reply.followups.len(), 2);
        assert_eq!(reply.followups[0], "What is the minimum order?");
    }

    #[test]
    fn test_blank_followups_dropped() {
        let reply = normalize(&json!({
            "answer": "Sure.",
            "followup_question01": "   ",
            "followup_question02": "Anything else?",
        }));
        assert_eq!(reply.followups, vec!["Anything else?"]);
    }

    #[test]
    fn test_array_unwrap_matches_bare_object() {
        let bare = normalize(&json!({"response": "hi"}));
        let wrapped = normalize(&json!([{"response": "hi"}]));
        assert_eq!(bare, wrapped);
        assert_eq!(bare.answer, "hi");
    }

    #[test]
    fn test_empty_array_falls_back() {
        let reply = normalize(&json!([]));
        assert_eq!(reply.answer, FALLBACK_ANSWER);
    }

    #[test]
    fn test_bare_string_is_whole_answer() {
        let reply = normalize(&json!("plain text reply"));
        assert_eq!(reply.answer, "plain text reply");
        assert!(reply.followups.is_empty());
    }

    #[test]
    fn test_precedence_answer_before_response() {
        let reply = normalize(&json!({
            "response": "second choice",
            "answer": "first choice",
        }));
        assert_eq!(reply.answer, "first choice");
    }

    #[test]
    fn test_blank_answer_falls_through_to_response() {
        let reply = normalize(&json!({
            "answer": "",
            "response": "the real one",
        }));
        assert_eq!(reply.answer, "the real one");
    }

    #[test]
    fn test_response_rule_collects_sibling_followups() {
        let reply = normalize(&json!({
            "Response": "We have sourdough today.",
            "followup_question01": "Is it gluten free?",
        }));
        assert_eq!(reply.answer, "We have sourdough today.");
        assert_eq!(reply.followups, vec!["Is it gluten free?"]);
    }

    #[test]
    fn test_message_and_text_rules() {
        assert_eq!(normalize(&json!({"Message": "m"})).answer, "m");
        assert_eq!(normalize(&json!({"text": "t"})).answer, "t");
        assert!(normalize(&json!({"text": "t"})).followups.is_empty());
    }

    #[test]
    fn test_nested_data_object() {
        let reply = normalize(&json!({
            "data": {
                "response": "nested reply",
                "followupQuestion01": "More?",
            }
        }));
        assert_eq!(reply.answer, "nested reply");
        assert_eq!(reply.followups, vec!["More?"]);
    }

    #[test]
    fn test_output_string_with_json_code_fence() {
        let reply = normalize(&json!({
            "output": "```json\n{\"answer\":\"hi\"}\n```"
        }));
        assert_eq!(reply.answer, "hi");
        assert!(reply.followups.is_empty());
    }

    #[test]
    fn test_output_string_fenced_json_with_followups() {
        let reply = normalize(&json!({
            "output": "```json\n{\"answer\":\"hi\",\"followup_question01\":\"Q1\",\"followup_question02\":\"Q2\"}\n```"
        }));
        assert_eq!(reply.answer, "hi");
        assert_eq!(reply.followups, vec!["Q1", "Q2"]);
    }

    #[test]
    fn test_output_string_not_json_is_verbatim_answer() {
        let reply = normalize(&json!({"output": "not json"}));
        assert_eq!(reply.answer, "not json");
        assert!(reply.followups.is_empty());
    }

    #[test]
    fn test_output_object_nested_response_wins() {
        let reply = normalize(&json!({
            "output": {
                "response": "from response",
                "answer": "from answer",
                "followup_question01": "ignored",
            }
        }));
        assert_eq!(reply.answer, "from response");
        assert!(reply.followups.is_empty());
    }

    #[test]
    fn test_output_object_answer_fields() {
        let reply = normalize(&json!({
            "output": {
                "answer": "direct",
                "followup_question02": "Only the second slot?",
            }
        }));
        assert_eq!(reply.answer, "direct");
        assert_eq!(reply.followups, vec!["Only the second slot?"]);
    }

    #[test]
    fn test_empty_object_falls_back() {
        let reply = normalize(&json!({}));
        assert_eq!(reply.answer, FALLBACK_ANSWER);
        assert!(reply.followups.is_empty());
    }

    #[test]
    fn test_unrecognized_keys_fall_back() {
        let reply = normalize(&json!({"status": "ok", "count": 3}));
        assert_eq!(reply.answer, FALLBACK_ANSWER);
    }

    #[test]
    fn test_null_and_number_fall_back() {
        assert_eq!(normalize(&Value::Null).answer, FALLBACK_ANSWER);
        assert_eq!(normalize(&json!(42)).answer, FALLBACK_ANSWER);
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("``` hello ```"), "hello");
        assert_eq!(strip_code_fence("no fences"), "no fences");
    }
}
