use crate::timer::Scheduler;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    control_cells, indicator_cells, layout_regions, price_cell, quantity_cell, status_cell,
};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, INDICATOR_IDLE,
    STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw<S: Scheduler>(frame: &mut Frame<'_>, app: &App<S>) {
    let area = frame.area();
    let regions = layout_regions(area);
    let stage = app.stage();
    let carousel = app.carousel();
    let active = stage.active_slides().first().copied().unwrap_or(0);

    let header = Header::new(
        stage.title(),
        active,
        stage.slide_count(),
        stage.shows_pause_icon(),
    );
    frame.render_widget(header.widget(), regions.header);

    frame.render_widget(Clear, regions.slide);
    if let Some(slide) = carousel.slides().get(active) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                slide.name.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                slide.image.clone(),
                Style::default().fg(HEADER_SEPARATOR),
            )),
        ];
        let card = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(card, regions.slide);
    }

    draw_indicators(frame, app, regions.indicators);
    draw_info(frame, app, regions.info);

    let footer = Footer::new(stage.shows_pause_icon());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}

fn draw_indicators<S: Scheduler>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let stage = app.stage();
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
        area,
    );
    let current = app.carousel().current_index();
    for (index, cell) in indicator_cells(area, stage.slide_count(), current) {
        let label = format!("{:^5}", format!("({})", index + 1));
        let style = if stage.is_indicator_active(index) {
            Style::default()
                .fg(ACCENT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(INDICATOR_IDLE)
        };
        frame.render_widget(Paragraph::new(Span::styled(label, style)), cell);
    }
}

fn draw_info<S: Scheduler>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let stage = app.stage();
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
        area,
    );

    let text_style = Style::default().fg(HEADER_TEXT);
    if let Some(cell) = price_cell(area) {
        let price = Span::styled(
            stage.price().to_string(),
            text_style.add_modifier(Modifier::BOLD),
        );
        frame.render_widget(Paragraph::new(price), cell);
    }
    if let Some(cell) = quantity_cell(area) {
        let quantity = format!("{:^8}", stage.quantity());
        frame.render_widget(Paragraph::new(Span::styled(quantity, text_style)), cell);
    }
    for (control, cell) in control_cells(area) {
        let label = control.label(stage.shows_pause_icon());
        frame.render_widget(Paragraph::new(Span::styled(label, text_style)), cell);
    }
    if let (Some(cell), Some(status)) = (status_cell(area), app.status()) {
        let status = Span::styled(status.to_string(), Style::default().fg(STATUS_OK));
        frame.render_widget(Paragraph::new(status), cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::timer::ManualScheduler;
    use crate::ui::carousel::{CarouselSettings, InputEvent};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text<S: Scheduler>(app: &App<S>) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn make_app() -> App<ManualScheduler> {
        App::new(
            default_catalog(),
            CarouselSettings::default(),
            ManualScheduler::new(),
        )
        .expect("valid app")
    }

    #[test]
    fn draws_current_slide_and_price() {
        let app = make_app();
        let text = screen_text(&app);
        assert!(text.contains("Acai Dessert"));
        assert!(text.contains("€10 / piece"));
        assert!(text.contains("1/5"));
        assert!(text.contains("Playing"));
    }

    #[test]
    fn draws_total_and_paused_state() {
        let mut app = make_app();
        app.dispatch(InputEvent::NextRequested);
        app.dispatch(InputEvent::QuantityChanged(3));
        app.dispatch(InputEvent::ToggleRequested);
        let text = screen_text(&app);
        assert!(text.contains("Brownie"));
        assert!(text.contains("3 × €8 = €24"));
        assert!(text.contains("Paused"));
    }

    #[test]
    fn narrow_screen_still_shows_active_indicator() {
        let slides: Vec<_> = (1..=12)
            .map(|n| crate::catalog::Slide::new(format!("Item {n}"), "item.png", n))
            .collect();
        let mut app = App::new(slides, CarouselSettings::default(), ManualScheduler::new())
            .expect("valid app");
        app.dispatch(InputEvent::IndicatorSelected(10));

        let backend = TestBackend::new(40, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("(11)"));
    }

    #[test]
    fn draws_purchase_status() {
        let mut app = make_app();
        app.dispatch(InputEvent::BuyRequested);
        let text = screen_text(&app);
        assert!(text.contains("Thanks for your purchase"));
    }
}
