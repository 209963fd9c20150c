//! Collapsing of streamed assistant updates into one display message per turn.
//!
//! While a turn streams, the message source emits a new assistant message for
//! every tool-call step. [collapse] folds each such run into a single message
//! whose tool calls are the concatenation of the run and whose scalar fields
//! come from the latest update.

use crate::message::{AssistantMessage, ChatMessage};

/// Collapse consecutive assistant updates into one message per turn.
///
/// A run ends at the first assistant message without tool calls (the
/// finalized update) or at any user/error message. A run still open at the
/// end of input is flushed as well. Pure: the input is never modified.
pub fn collapse(messages: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut collapsed = Vec::with_capacity(messages.len());
    let mut run: Vec<AssistantMessage> = Vec::new();

    for message in messages {
        match message {
            ChatMessage::Assistant(assistant) => {
                run.push(assistant.clone());
                if !assistant.has_tool_calls() {
                    flush(&mut run, &mut collapsed);
                }
            }
            ChatMessage::User(_) | ChatMessage::Error(_) => {
                flush(&mut run, &mut collapsed);
                collapsed.push(message.clone());
            }
        }
    }
    flush(&mut run, &mut collapsed);

    tracing::debug!(
        input = messages.len(),
        output = collapsed.len(),
        "collapsed message sequence"
    );
    collapsed
}

fn flush(run: &mut Vec<AssistantMessage>, out: &mut Vec<ChatMessage>) {
    if let Some(merged) = merge_run(std::mem::take(run)) {
        out.push(ChatMessage::Assistant(merged));
    }
}

/// Merge a run of assistant messages: later scalar fields win, tool calls
/// are concatenated in order. Returns `None` for an empty run.
pub fn merge_run(run: Vec<AssistantMessage>) -> Option<AssistantMessage> {
    let mut iter = run.into_iter();
    let first = iter.next()?;
    Some(iter.fold(first, |mut acc, next| {
        let AssistantMessage {
            content,
            tool_calls,
            extra,
        } = next;
        acc.content = content;
        acc.tool_calls.extend(tool_calls);
        acc.extra.extend(extra);
        acc
    }))
}

/// Total number of tool calls across a message sequence.
pub fn tool_call_count(messages: &[ChatMessage]) -> usize {
    messages.iter().map(|m| m.tool_calls().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool_call::ToolCall;
    use serde_json::json;

    fn with_tools(content: &str, names: &[&str]) -> ChatMessage {
        ChatMessage::assistant(
            content,
            names.iter().map(|n| ToolCall::pending(*n)).collect(),
        )
    }

    #[test]
    fn empty_input() {
        assert!(collapse(&[]).is_empty());
    }

    #[test]
    fn single_user_message_unchanged() {
        let input = vec![ChatMessage::user("hi")];
        assert_eq!(collapse(&input), input);
    }

    #[test]
    fn only_non_assistant_messages_unchanged() {
        let input = vec![
            ChatMessage::user("a"),
            ChatMessage::error("b"),
            ChatMessage::user("c"),
        ];
        assert_eq!(collapse(&input), input);
    }

    #[test]
    fn pending_then_final_merges() {
        let input = vec![with_tools("", &["A"]), with_tools("done", &[])];
        let out = collapse(&input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].content(), "done");
        assert_eq!(out[0].tool_calls(), &[ToolCall::pending("A")]);
    }

    #[test]
    fn unterminated_run_is_flushed() {
        let input = vec![with_tools("first", &["A"]), with_tools("second", &["B"])];
        let out = collapse(&input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].content(), "second");
        let names: Vec<_> = out[0].tool_calls().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn interleaved_turns() {
        let input = vec![
            ChatMessage::user("q"),
            with_tools("", &["A"]),
            with_tools("ans", &[]),
            ChatMessage::user("q2"),
        ];
        let out = collapse(&input);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], ChatMessage::user("q"));
        assert_eq!(out[1].content(), "ans");
        assert_eq!(out[1].tool_calls().len(), 1);
        assert_eq!(out[2], ChatMessage::user("q2"));
    }

    #[test]
    fn adjacent_final_messages_stay_separate() {
        let input = vec![with_tools("one", &[]), with_tools("two", &[])];
        let out = collapse(&input);
        assert_eq!(out, input);
    }

    #[test]
    fn user_message_flushes_open_run() {
        let input = vec![
            with_tools("", &["A"]),
            ChatMessage::user("interrupt"),
            with_tools("", &["B"]),
        ];
        let out = collapse(&input);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].tool_calls()[0].name, "A");
        assert_eq!(out[1], ChatMessage::user("interrupt"));
        assert_eq!(out[2].tool_calls()[0].name, "B");
    }

    #[test]
    fn error_message_flushes_open_run() {
        let input = vec![with_tools("", &["A", "B"]), ChatMessage::error("timeout")];
        let out = collapse(&input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].tool_calls().len(), 2);
        assert!(out[1].is_error());
    }

    #[test]
    fn merge_later_extra_fields_win() {
        let first = AssistantMessage::new("a")
            .with_tool_call(ToolCall::pending("A"))
            .with_field("model", json!("m1"))
            .with_field("turn", json!(1));
        let second = AssistantMessage::new("b").with_field("model", json!("m2"));

        let merged = merge_run(vec![first, second]).unwrap();
        assert_eq!(merged.content, "b");
        assert_eq!(merged.extra["model"], "m2");
        assert_eq!(merged.extra["turn"], 1);
        assert_eq!(merged.tool_calls.len(), 1);
    }

    #[test]
    fn merge_single_is_identity() {
        let only = AssistantMessage::new("x").with_tool_call(ToolCall::done("A"));
        assert_eq!(merge_run(vec![only.clone()]), Some(only));
    }

    #[test]
    fn merge_empty_run() {
        assert_eq!(merge_run(Vec::new()), None);
    }

    #[test]
    fn input_is_not_modified() {
        let input = vec![with_tools("", &["A"]), with_tools("", &["B"])];
        let snapshot = input.clone();
        let _ = collapse(&input);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn tool_call_count_sums_assistant_messages() {
        let input = vec![
            ChatMessage::user("q"),
            with_tools("", &["A", "B"]),
            with_tools("", &["C"]),
        ];
        assert_eq!(tool_call_count(&input), 3);
        assert_eq!(tool_call_count(&collapse(&input)), 3);
    }
}
