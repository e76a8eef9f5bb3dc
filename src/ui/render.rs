use crate::counter::COUNTER_FEATURE_KEY;
use crate::ui::app::App;
use crate::ui::counter_view::CounterView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(COUNTER_FEATURE_KEY, app.dispatch_count()),
        header,
    );

    frame.render_widget(Clear, body);
    let count = app.count();
    let counter_area = centered_rect_by_size(body, CounterView::width_for(count).max(16), 3);
    frame.render_widget(CounterView::new().widget(count), counter_area);

    frame.render_widget(Footer::new().widget(), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterAction;
    use crate::root::build_store;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered_text(app: &App) -> String {
        rendered_text_at(app, 60)
    }

    fn rendered_text_at(app: &App, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 12)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_current_count() {
        let mut app = App::new(build_store(41)).unwrap();
        app.dispatch(CounterAction::Increment);
        let text = rendered_text(&app);
        assert!(text.contains("42"), "{}", text);
        assert!(text.contains("feature: counter"));
        assert!(text.contains("dispatches: 3"));
    }

    #[test]
    fn draws_negative_count() {
        let mut app = App::new(build_store(0)).unwrap();
        app.dispatch(CounterAction::Decrement);
        assert!(rendered_text(&app).contains("-1"));
    }

    #[test]
    fn footer_shows_key_map_and_version() {
        let app = App::new(build_store(0)).unwrap();
        let text = rendered_text_at(&app, 100);
        assert!(text.contains("Increment"), "{}", text);
        assert!(text.contains("q/Q/Esc/Ctrl+C Quit"), "{}", text);
        assert!(text.contains(&format!("v{}", env!("CARGO_PKG_VERSION"))));
    }
}
