//! Properties of `collapse` over generated conversations and recorded transcripts.

use chatfold_core::{collapse, decode_messages, tool_call_count, ChatMessage, Role, ToolCall};

/// Small deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn generate(seed: u64, len: usize) -> Vec<ChatMessage> {
    let mut rng = Lcg(seed);
    (0..len)
        .map(|i| match rng.below(4) {
            0 => ChatMessage::user(format!("q{i}")),
            1 => ChatMessage::error(format!("e{i}")),
            _ => {
                let calls = (0..rng.below(3))
                    .map(|j| ToolCall::pending(format!("tool{i}_{j}")))
                    .collect();
                ChatMessage::assistant(format!("a{i}"), calls)
            }
        })
        .collect()
}

fn non_assistant(messages: &[ChatMessage]) -> Vec<&ChatMessage> {
    messages.iter().filter(|m| m.role() != Role::Assistant).collect()
}

#[test]
fn generated_conversations_keep_invariants() {
    for seed in 0..200 {
        let input = generate(seed, (seed % 17) as usize);
        let output = collapse(&input);

        assert!(output.len() <= input.len(), "seed {seed}: output grew");
        assert_eq!(
            tool_call_count(&output),
            tool_call_count(&input),
            "seed {seed}: tool calls lost or duplicated"
        );
        assert_eq!(
            non_assistant(&output),
            non_assistant(&input),
            "seed {seed}: non-assistant order changed"
        );
        assert_eq!(collapse(&input), output, "seed {seed}: not deterministic");
    }
}

#[test]
fn tool_call_order_is_preserved() {
    for seed in 0..100 {
        let input = generate(seed, 24);
        let names = |ms: &[ChatMessage]| -> Vec<String> {
            ms.iter()
                .flat_map(|m| m.tool_calls().iter().map(|t| t.name.clone()))
                .collect()
        };
        assert_eq!(names(&collapse(&input)), names(&input), "seed {seed}");
    }
}

#[test]
fn recorded_transcript_collapses_per_turn() {
    let json = r#"[
        {"role": "user", "content": "Find red mugs and add them to my presentation"},
        {"role": "assistant", "content": "", "toolCalls": [
            {"name": "searchProducts", "status": "done", "args": {"term": "red mug"}}
        ]},
        {"role": "assistant", "content": "", "toolCalls": [
            {"name": "getPresentationList", "status": "pending"}
        ]},
        {"role": "assistant", "content": "Which presentation should I use?", "toolCalls": []},
        {"role": "user", "content": "My mugs"},
        {"role": "error", "content": "The model did not respond"}
    ]"#;

    let messages = decode_messages(json).unwrap();
    let collapsed = collapse(&messages);

    assert_eq!(collapsed.len(), 4);
    assert_eq!(collapsed[1].role(), Role::Assistant);
    assert_eq!(collapsed[1].content(), "Which presentation should I use?");
    let names: Vec<_> = collapsed[1].tool_calls().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["searchProducts", "getPresentationList"]);
    assert_eq!(collapsed[1].tool_calls()[0].extra["args"]["term"], "red mug");
    assert!(collapsed.last().unwrap().is_error());
}

#[test]
fn collapsed_output_serializes_back_to_source_shape() {
    let input = vec![
        ChatMessage::assistant("", vec![ToolCall::pending("search")]),
        ChatMessage::assistant("found it", vec![]),
    ];
    let json = serde_json::to_value(collapse(&input)).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "role": "assistant",
            "content": "found it",
            "toolCalls": [{"name": "search", "status": "pending"}]
        }])
    );
}
