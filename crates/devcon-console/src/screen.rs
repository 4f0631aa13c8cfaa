//! Transient on-screen messages that expire after a duration.

use devcon_types::style::TextStyle;

/// A message drawn over the application until its time runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenMessage {
    pub text: String,
    /// Seconds left before the message disappears.
    pub remaining: f32,
    pub style: TextStyle,
}

/// Unordered set of live screen messages.
#[derive(Debug, Clone, Default)]
pub struct ScreenMessages {
    messages: Vec<ScreenMessage>,
}

impl ScreenMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: &str, duration: f32, style: TextStyle) {
        self.messages.push(ScreenMessage {
            text: text.to_string(),
            remaining: duration,
            style,
        });
    }

    /// Age every message by `dt` seconds and drop those whose remaining
    /// time went below zero or is no longer a number.
    pub fn tick(&mut self, dt: f32) {
        // Reverse order so removal never shifts an unvisited index.
        for i in (0..self.messages.len()).rev() {
            let remaining = self.messages[i].remaining - dt;
            if remaining.is_nan() || remaining < 0.0 {
                self.messages.remove(i);
            } else {
                self.messages[i].remaining = remaining;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScreenMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_survives_until_duration_elapses() {
        let mut msgs = ScreenMessages::new();
        msgs.push("saved", 1.0, TextStyle::PLAIN);
        msgs.tick(0.5);
        msgs.tick(0.25);
        assert_eq!(msgs.len(), 1);
        msgs.tick(0.5);
        assert!(msgs.is_empty());
    }

    #[test]
    fn exact_duration_is_still_visible() {
        let mut msgs = ScreenMessages::new();
        msgs.push("edge", 0.5, TextStyle::PLAIN);
        msgs.tick(0.5);
        assert_eq!(msgs.len(), 1);
        msgs.tick(0.001);
        assert!(msgs.is_empty());
    }

    #[test]
    fn nan_duration_or_delta_expires() {
        let mut msgs = ScreenMessages::new();
        msgs.push("nan", f32::NAN, TextStyle::PLAIN);
        msgs.push("ok", 1.0, TextStyle::PLAIN);
        msgs.tick(0.1);
        assert_eq!(msgs.len(), 1);
        msgs.tick(f32::NAN);
        assert!(msgs.is_empty());
    }

    #[test]
    fn tick_decrements_remaining() {
        let mut msgs = ScreenMessages::new();
        msgs.push("a", 2.0, TextStyle::PLAIN);
        msgs.tick(0.5);
        let m = msgs.iter().next().unwrap();
        assert!((m.remaining - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn only_expired_messages_are_removed() {
        let mut msgs = ScreenMessages::new();
        msgs.push("short", 0.1, TextStyle::PLAIN);
        msgs.push("long", 5.0, TextStyle::PLAIN);
        msgs.push("shorter", 0.05, TextStyle::PLAIN);
        msgs.tick(0.2);
        let texts: Vec<&str> = msgs.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["long"]);
    }

    #[test]
    fn negative_duration_expires_on_first_tick() {
        let mut msgs = ScreenMessages::new();
        msgs.push("gone", -1.0, TextStyle::PLAIN);
        assert_eq!(msgs.len(), 1);
        msgs.tick(0.0);
        assert!(msgs.is_empty());
    }
}
