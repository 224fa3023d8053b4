/// Fixed rotation of gratitude journal prompts.
pub const GRATITUDE_PROMPTS: [&str; 10] = [
    "What is one thing you're grateful for today?",
    "What made you smile today?",
    "Who said something kind to you recently?",
    "What small moment brought you joy today?",
    "What's something beautiful you noticed today?",
    "Who made a positive difference in your day?",
    "What's a simple pleasure you enjoyed today?",
    "What comfort or luxury are you thankful for?",
    "What achievement, big or small, are you proud of?",
    "What relationship in your life are you grateful for?",
];

/// Picks a prompt for an arbitrary index. The caller injects the index (the
/// server derives one from the clock), which keeps the selection testable.
pub fn prompt_at(index: usize) -> &'static str {
    GRATITUDE_PROMPTS[index % GRATITUDE_PROMPTS.len()]
}
