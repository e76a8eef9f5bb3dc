use crate::ui::input::{key_label, KeyCommand, KEY_BINDINGS, QUIT_CHORD};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints on the left, crate version on the bottom border.
pub struct Footer {
    hints: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self { hints: hints() }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        Paragraph::new(Line::from(self.hints.clone())).style(text_style).block(
            Block::bordered()
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_bottom(Line::from(format!(" v{} ", VERSION)).right_aligned()),
        )
    }
}

/// `" +/=/k/↑ Increment │ ... │ q/Q/Esc/Ctrl+C Quit"`, from the key map.
pub fn hints() -> String {
    let entries: Vec<String> = KEY_BINDINGS
        .iter()
        .map(|binding| {
            let mut keys: Vec<String> = binding.codes.iter().map(|code| key_label(*code)).collect();
            if binding.command == KeyCommand::Quit {
                keys.push(format!("Ctrl+{}", QUIT_CHORD.to_ascii_uppercase()));
            }
            format!("{} {}", keys.join("/"), binding.label)
        })
        .collect();
    format!(" {}", entries.join(" │ "))
}
