//! View side of the counter feature.

use crate::ui::theme::{COUNT_NEGATIVE, COUNT_POSITIVE, COUNT_ZERO, GLOBAL_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Latest counter value as delivered by the store subscription.
///
/// `updates` counts deliveries; unchanged values are filtered out by the
/// memoized selector before they get here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterBinding {
    value: i64,
    updates: u64,
}

impl CounterBinding {
    pub fn update(&mut self, value: i64) {
        self.value = value;
        self.updates += 1;
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }
}

pub struct CounterView;

impl Default for CounterView {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterView {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, value: i64) -> Paragraph<'static> {
        let style = Style::default()
            .fg(count_color(value))
            .add_modifier(Modifier::BOLD);

        Paragraph::new(Line::from(value.to_string()))
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }

    /// Width needed to show `value` inside the bordered box.
    pub fn width_for(value: i64) -> u16 {
        (value.to_string().len() as u16).saturating_add(6)
    }
}

pub fn count_color(value: i64) -> Color {
    match value.signum() {
        1 => COUNT_POSITIVE,
        -1 => COUNT_NEGATIVE,
        _ => COUNT_ZERO,
    }
}
