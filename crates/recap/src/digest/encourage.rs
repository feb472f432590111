//! Encouragement lines for day summaries.
//!
//! Every rendered day ends with a `"<message> <emoji>"` line. The picker is
//! injected as a plain function so the rest of the rendering pipeline stays
//! deterministic; tests pass a fixed picker instead of the random one.

/// Messages to close a day summary with.
pub const MESSAGES: [&str; 17] = [
    "All right!",
    "Excellent!",
    "Go for it!",
    "Good job!",
    "Happy hacking!",
    "Keep going!",
    "Keep it up!",
    "Nice work!",
    "Super-duper!",
    "That's it!",
    "That's the way!",
    "Way to go!",
    "You are awesome!",
    "You are doing great!",
    "You are unstoppable!",
    "You can do it!",
    "You've got this!",
];

/// Celebratory emojis paired with the messages.
#[rustfmt::skip]
pub const EMOJIS: [&str; 27] = [
    "👏", "👊", "👍", "👌", "🤙", "🎉", "🎊", "🔥", "🚀",
    "🤩", "🥳", "🤗", "🤟", "🏆", "🎖️", "✨", "🌟", "🌠",
    "🌈", "💖", "💘", "💝", "💞", "💟", "💌", "💓", "💕",
];

/// Picks one item from a fixed list.
pub type PickFn = fn(&[&'static str]) -> &'static str;

/// Uniformly random picker backed by the thread-local rng.
#[must_use]
pub fn pick_random(items: &[&'static str]) -> &'static str {
    use rand::Rng;

    if items.is_empty() {
        return "";
    }
    items[rand::thread_rng().gen_range(0..items.len())]
}
