//! Maps stdin lines onto console key actions.
//!
//! A line starting with `:` stands in for a key the console would bind in a
//! graphical host (toggle, history arrows, preset buttons). Anything else is
//! typed into the input line and submitted.

use devcon_console::{Console, PresetAction};

/// Result of handling a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Host-level action decoded from a `:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    Quit,
    ToggleConsole,
    TogglePreview,
    ToggleScreen,
    Previous,
    Next,
    /// Submit whatever the input line holds.
    Submit,
    Preset(usize),
    Group(String),
    Complete(String),
    Flash(String),
    Unknown(String),
}

/// Decode a `:` line. `None` for ordinary command text.
pub fn parse_action(line: &str) -> Option<HostAction> {
    let rest = line.trim().strip_prefix(':')?;
    let (key, arg) = match rest.split_once(char::is_whitespace) {
        Some((key, arg)) => (key, arg.trim()),
        None => (rest, ""),
    };
    let action = match key {
        "q" | "quit" => HostAction::Quit,
        "toggle" => HostAction::ToggleConsole,
        "preview" => HostAction::TogglePreview,
        "screen" => HostAction::ToggleScreen,
        "up" => HostAction::Previous,
        "down" => HostAction::Next,
        "" | "go" => HostAction::Submit,
        "preset" => match arg.parse() {
            Ok(index) => HostAction::Preset(index),
            Err(_) => HostAction::Unknown(rest.to_string()),
        },
        "group" => HostAction::Group(arg.to_string()),
        "complete" => HostAction::Complete(arg.to_string()),
        "flash" => HostAction::Flash(arg.to_string()),
        _ => HostAction::Unknown(rest.to_string()),
    };
    Some(action)
}

/// Seconds a `:flash` message stays on screen.
const FLASH_SECONDS: f32 = 3.0;

/// Apply one stdin line to the console.
pub fn handle_line(line: &str, console: &mut Console) -> InputResult {
    let Some(action) = parse_action(line) else {
        console.set_input(line);
        console.submit();
        return InputResult::Continue;
    };

    match action {
        HostAction::Quit => return InputResult::Quit,
        HostAction::ToggleConsole => console.toggle_console(),
        HostAction::TogglePreview => console.toggle_preview(),
        HostAction::ToggleScreen => console.toggle_screen_messages(),
        HostAction::Previous => console.recall_previous(),
        HostAction::Next => console.recall_next(),
        HostAction::Submit => {
            console.submit();
        },
        HostAction::Preset(index) => match console.activate_preset(index) {
            Some(PresetAction::Executed(found)) => {
                log::debug!("preset {index} executed (handler found: {found})");
            },
            Some(PresetAction::Filled) => {},
            None => log::warn!("no preset at index {index}"),
        },
        HostAction::Group(name) => console.toggle_group(&name),
        HostAction::Complete(partial) => {
            let matches = console.completions(&partial).join("  ");
            if matches.is_empty() {
                console.log(&format!("No completions for '{partial}'."));
            } else {
                console.log(&matches);
            }
        },
        HostAction::Flash(text) => console.log_screen(&text, FLASH_SECONDS),
        HostAction::Unknown(key) => log::warn!("unknown host key ':{key}'"),
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_not_an_action() {
        assert_eq!(parse_action("/echo hi"), None);
        assert_eq!(parse_action("  "), None);
    }

    #[test]
    fn parse_keys() {
        assert_eq!(parse_action(":q"), Some(HostAction::Quit));
        assert_eq!(parse_action(" :up "), Some(HostAction::Previous));
        assert_eq!(parse_action(":"), Some(HostAction::Submit));
        assert_eq!(parse_action(":preset 2"), Some(HostAction::Preset(2)));
        assert_eq!(
            parse_action(":group  Spawn"),
            Some(HostAction::Group("Spawn".into()))
        );
        assert_eq!(
            parse_action(":preset x"),
            Some(HostAction::Unknown("preset x".into()))
        );
    }

    #[test]
    fn plain_line_is_submitted() {
        let mut console = Console::default();
        console.register_fn("/ping", |_| Ok(())).unwrap();
        assert_eq!(handle_line("/ping", &mut console), InputResult::Continue);
        assert_eq!(console.history().entries(), ["/ping"]);
        assert_eq!(console.input(), "");
    }

    #[test]
    fn recall_then_submit() {
        let mut console = Console::default();
        handle_line("/first", &mut console);
        handle_line(":up", &mut console);
        assert_eq!(console.input(), "/first");
        handle_line(":", &mut console);
        assert_eq!(console.history().len(), 2);
    }

    #[test]
    fn quit_and_toggles() {
        let mut console = Console::default();
        assert_eq!(handle_line(":quit", &mut console), InputResult::Quit);
        handle_line(":toggle", &mut console);
        handle_line(":screen", &mut console);
        assert!(console.view().console);
        assert!(!console.view().screen_messages);
    }

    #[test]
    fn flash_adds_screen_message() {
        let mut console = Console::default();
        handle_line(":flash saved game", &mut console);
        let texts: Vec<&str> = console.screen_messages().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["saved game"]);
    }
}
