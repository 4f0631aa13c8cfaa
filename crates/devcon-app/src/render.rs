//! Draws console snapshots as text frames.
//!
//! Each frame is a full redraw of the visible panels, the same way a
//! graphical host would redraw its console window every frame.

use std::io::{self, Write};

use devcon_console::{Console, MenuRow, UNGROUPED_LABEL};
use devcon_types::severity::Severity;
use devcon_types::style::TextStyle;

/// Frame writer. `ansi` enables colors and screen clearing.
pub struct Renderer {
    ansi: bool,
}

impl Renderer {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    /// Wrap `text` in escape codes for `style`.
    pub fn styled(&self, text: &str, style: TextStyle) -> String {
        if !self.ansi || style.is_plain() {
            return text.to_string();
        }
        let mut codes = Vec::new();
        if style.bold {
            codes.push("1".to_string());
        }
        if style.italic {
            codes.push("3".to_string());
        }
        if let Some(c) = style.color {
            codes.push(format!("38;2;{};{};{}", c.r, c.g, c.b));
        }
        format!("\x1b[{}m{text}\x1b[0m", codes.join(";"))
    }

    pub fn draw(&self, console: &Console, out: &mut impl Write) -> io::Result<()> {
        if self.ansi {
            write!(out, "\x1b[2J\x1b[H")?;
        }
        let view = console.view();

        if view.screen_messages {
            for message in console.screen_messages() {
                writeln!(
                    out,
                    "  [{:>4.1}s] {}",
                    message.remaining.max(0.0),
                    self.styled(&message.text, message.style)
                )?;
            }
        }

        if view.preview {
            let counts = console.log_counts();
            let summary: Vec<String> = Severity::ALL
                .iter()
                .map(|&s| {
                    let text = format!("{}: {}", s.label(), counts.get(s));
                    self.styled(&text, TextStyle::for_severity(s))
                })
                .collect();
            writeln!(out, "{}", summary.join(" | "))?;
        }

        if !view.console {
            return out.flush();
        }

        writeln!(out, "---- console ----")?;
        for line in console.log_lines() {
            writeln!(out, "{}", self.styled(&line.text, line.style))?;
        }

        let menu = console.preset_menu();
        if !menu.is_empty() {
            writeln!(out, "---- presets ----")?;
            for row in menu {
                match row {
                    MenuRow::Group { name, expanded } => {
                        let marker = if expanded { '-' } else { '+' };
                        writeln!(out, "[{marker}] {name}")?;
                    },
                    MenuRow::Ungrouped => writeln!(out, "    {UNGROUPED_LABEL}")?,
                    MenuRow::Preset { index, entry } => {
                        writeln!(out, "    {index:>2}: {}", entry.name)?;
                    },
                }
            }
        }
        if !console.help_text().is_empty() {
            writeln!(out, "{}", self.styled(console.help_text(), TextStyle::PLAIN.italic()))?;
        }
        write!(out, "> {}", console.input())?;
        out.flush()
    }
}
