use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::timer::Scheduler;
use crate::ui::app::App;
use crate::ui::carousel::{GestureKind, InputEvent, Key};
use crate::ui::layout::{contains, control_at, control_cells, indicator_at, indicator_cells, Control};

/// Terminal cells are coarse; scale columns so swipe thresholds read like
/// pixel distances.
pub const CELL_WIDTH_PX: i32 = 10;

pub fn handle_key<S: Scheduler>(app: &mut App<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    if let Some(event) = key_to_event(key, app.stage().slide_count()) {
        app.dispatch(event);
    }
}

/// Digits select slides `1..=slide_count`; larger digits are unbound.
fn key_to_event(key: KeyEvent, slide_count: usize) -> Option<InputEvent> {
    let event = match key.code {
        KeyCode::Left => InputEvent::KeyDown(Key::ArrowLeft),
        KeyCode::Right => InputEvent::KeyDown(Key::ArrowRight),
        KeyCode::Char(' ') => InputEvent::KeyDown(Key::Space),
        KeyCode::Char('n') => InputEvent::NextRequested,
        KeyCode::Char('p') => InputEvent::PrevRequested,
        KeyCode::Char('+') | KeyCode::Char('=') => InputEvent::QuantityIncreased,
        KeyCode::Char('-') => InputEvent::QuantityDecreased,
        KeyCode::Char('r') => InputEvent::QuantityReset,
        KeyCode::Char('b') | KeyCode::Enter => InputEvent::BuyRequested,
        KeyCode::Char(ch) => {
            let digit = ch.to_digit(10).map(|d| d as usize)?;
            if digit == 0 || digit > slide_count {
                return None;
            }
            InputEvent::IndicatorSelected(digit - 1)
        }
        _ => return None,
    };
    Some(event)
}

pub fn handle_mouse<S: Scheduler>(app: &mut App<S>, mouse: MouseEvent) {
    let Some(regions) = app.regions() else {
        return;
    };
    let x = i32::from(mouse.column) * CELL_WIDTH_PX;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let cells = indicator_cells(
                regions.indicators,
                app.stage().slide_count(),
                app.carousel().current_index(),
            );
            if let Some(index) = indicator_at(&cells, mouse.column, mouse.row) {
                app.dispatch(InputEvent::IndicatorSelected(index));
                return;
            }
            let controls = control_cells(regions.info);
            if let Some(control) = control_at(&controls, mouse.column, mouse.row) {
                app.dispatch(control_event(control));
                return;
            }
            if contains(regions.slide, mouse.column, mouse.row) {
                app.dispatch(InputEvent::GestureStart {
                    kind: GestureKind::Mouse,
                    x,
                });
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.carousel().is_swiping() && !contains(regions.slide, mouse.column, mouse.row) {
                app.dispatch(InputEvent::GestureLeave { x });
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.carousel().is_swiping() {
                app.dispatch(InputEvent::GestureEnd {
                    kind: GestureKind::Mouse,
                    x,
                });
            }
        }
        _ => {}
    }
}

fn control_event(control: Control) -> InputEvent {
    match control {
        Control::Previous => InputEvent::PrevRequested,
        Control::Toggle => InputEvent::ToggleRequested,
        Control::Next => InputEvent::NextRequested,
        Control::Decrease => InputEvent::QuantityDecreased,
        Control::Increase => InputEvent::QuantityIncreased,
        Control::Reset => InputEvent::QuantityReset,
        Control::Buy => InputEvent::BuyRequested,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::timer::ManualScheduler;
    use crate::ui::carousel::CarouselSettings;
    use crossterm::event::KeyEventState;

    fn make_app() -> App<ManualScheduler> {
        let mut app = App::new(
            default_catalog(),
            CarouselSettings::default(),
            ManualScheduler::new(),
        )
        .expect("valid app");
        app.on_resize(80, 24);
        app
    }

    fn press_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn arrows_navigate() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Right));
        assert_eq!(app.carousel().current_index(), 1);
        handle_key(&mut app, press_key(KeyCode::Left));
        handle_key(&mut app, press_key(KeyCode::Left));
        assert_eq!(app.carousel().current_index(), 4);
    }

    #[test]
    fn space_toggles_playback() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Char(' ')));
        assert!(!app.carousel().is_playing());
        assert!(!app.stage().shows_pause_icon());
    }

    #[test]
    fn digits_select_indicator() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Char('3')));
        assert_eq!(app.carousel().current_index(), 2);
        handle_key(&mut app, press_key(KeyCode::Char('0')));
        assert_eq!(app.carousel().current_index(), 2);
    }

    #[test]
    fn digits_past_last_slide_are_ignored() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Char('2')));
        handle_key(&mut app, press_key(KeyCode::Char('9')));
        handle_key(&mut app, press_key(KeyCode::Char('6')));
        assert_eq!(app.carousel().current_index(), 1);
        handle_key(&mut app, press_key(KeyCode::Char('5')));
        assert_eq!(app.carousel().current_index(), 4);
    }

    #[test]
    fn quantity_keys() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Char('+')));
        handle_key(&mut app, press_key(KeyCode::Char('+')));
        assert_eq!(app.carousel().quantity(), 3);
        handle_key(&mut app, press_key(KeyCode::Char('-')));
        assert_eq!(app.carousel().quantity(), 2);
        handle_key(&mut app, press_key(KeyCode::Char('r')));
        assert_eq!(app.carousel().quantity(), 1);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut key = press_key(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.carousel().current_index(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = make_app();
        let mut ctrl_c = press_key(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        handle_key(&mut app, ctrl_c);
        assert!(app.should_quit());
    }

    #[test]
    fn mouse_drag_left_goes_to_next_slide() {
        let mut app = make_app();
        // Slide region spans rows 3..12 on an 80x24 screen.
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 40, 6));
        assert!(app.carousel().is_swiping());
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 20, 6));
        assert_eq!(app.carousel().current_index(), 1);
        assert!(!app.carousel().is_swiping());
    }

    #[test]
    fn short_drag_is_a_tap() {
        let mut app = make_app();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 40, 6));
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 45, 6));
        assert_eq!(app.carousel().current_index(), 0);
    }

    #[test]
    fn dragging_out_of_slide_area_ends_gesture() {
        let mut app = make_app();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 10, 6));
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 30, 1));
        assert_eq!(app.carousel().current_index(), 4);
        assert!(!app.carousel().is_swiping());
        // The release afterwards has no gesture to finish.
        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 70, 1));
        assert_eq!(app.carousel().current_index(), 4);
    }

    #[test]
    fn clicking_indicator_selects_slide() {
        let mut app = make_app();
        let regions = app.regions().expect("sized");
        let cells = indicator_cells(regions.indicators, 5, 0);
        let (_, target) = cells[3];
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), target.x, target.y),
        );
        assert_eq!(app.carousel().current_index(), 3);
        assert!(!app.carousel().is_swiping());
    }

    #[test]
    fn clicking_controls_dispatches_commands() {
        let mut app = make_app();
        let regions = app.regions().expect("sized");
        let cells = control_cells(regions.info);
        let cell = |wanted: Control| {
            cells
                .iter()
                .find(|(control, _)| *control == wanted)
                .map(|(_, rect)| *rect)
                .expect("control on screen")
        };

        let next = cell(Control::Next);
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), next.x, next.y));
        assert_eq!(app.carousel().current_index(), 1);

        let toggle = cell(Control::Toggle);
        handle_mouse(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), toggle.x, toggle.y),
        );
        assert!(!app.carousel().is_playing());
    }
}
