use recap::ai::prompt_builder::{SYSTEM_PROMPT, build_summary_prompt};

#[test]
fn test_prompt_contains_context_label_and_every_line() {
    let lines = vec![
        "user1: Hello everyone".to_string(),
        "user2: Hi! Let's discuss the project".to_string(),
    ];

    let prompt = build_summary_prompt(&lines, "channel conversation");

    assert!(prompt.contains("channel conversation"));
    assert!(prompt.contains("user1: Hello everyone"));
    assert!(prompt.contains("user2: Hi! Let's discuss the project"));
}

#[test]
fn test_prompt_contains_the_three_point_footer() {
    let lines = vec![
        "user1: This is the original post".to_string(),
        "user2: I have a question about this".to_string(),
        "user1: Here's the answer".to_string(),
    ];

    let prompt = build_summary_prompt(&lines, "thread conversation");

    assert!(prompt.contains("thread conversation"));
    assert!(prompt.contains("Main topics discussed"));
    assert!(prompt.contains("Key decisions made"));
    assert!(prompt.contains("Action items or next steps"));
}

#[test]
fn test_prompt_preserves_line_order() {
    let lines = vec!["u1: first".to_string(), "u2: second".to_string()];

    let prompt = build_summary_prompt(&lines, "channel conversation");

    let first = prompt.find("u1: first").expect("first line present");
    let second = prompt.find("u2: second").expect("second line present");
    assert!(first < second, "lines must keep their input order");
}

#[test]
fn test_prompt_is_deterministic() {
    let lines = vec!["u1: hello".to_string()];

    assert_eq!(
        build_summary_prompt(&lines, "channel conversation"),
        build_summary_prompt(&lines, "channel conversation")
    );
}

#[test]
fn test_system_prompt_requests_decisions_and_action_items() {
    assert!(SYSTEM_PROMPT.contains("summarizes conversations"));
    assert!(SYSTEM_PROMPT.contains("decisions"));
    assert!(SYSTEM_PROMPT.contains("action items"));
}
