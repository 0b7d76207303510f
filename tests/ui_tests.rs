// Rendering and event-dispatch tests for the TUI, driven through TestBackend

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};
use stepcalc::session::{Button, Operator, Session};
use stepcalc::ui::App;

fn draw(app: &mut App) -> String {
    let backend = TestBackend::new(60, 24);
    let mut terminal = Terminal::new(backend).expect("terminal creation failed");
    terminal.draw(|f| app.render(f)).expect("draw failed");

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut screen = String::new();
    for (i, cell) in buffer.content().iter().enumerate() {
        screen.push_str(cell.symbol());
        if (i + 1) % width == 0 {
            screen.push('\n');
        }
    }
    screen
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

#[test]
fn test_initial_screen() {
    let mut app = App::new(Session::new());
    let screen = draw(&mut app);

    assert!(screen.contains("Display"));
    assert!(screen.contains("Keypad"));
    assert!(screen.contains("READY"));
    assert!(screen.contains("AC"));
    assert!(screen.contains("log"));
}

#[test]
fn test_keys_update_display_and_hint() {
    let mut app = App::new(Session::new());
    for c in "12+".chars() {
        app.handle_key_event(key(c));
    }
    app.handle_key_event(key('3'));
    let screen = draw(&mut app);

    assert_eq!(app.session.display_text(), "3");
    assert!(screen.contains("12 +"));
    assert!(screen.contains("ENTRY"));

    app.handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    assert_eq!(app.session.display_text(), "15");
}

#[test]
fn test_quit_key() {
    let mut app = App::new(Session::new());
    app.handle_key_event(key('q'));
    assert!(app.should_quit);
}

#[test]
fn test_ignored_press_reported_in_status() {
    let mut app = App::new(Session::new());
    app.press(Button::Digit(4));
    app.press(Button::Operator(Operator::Add));
    app.press(Button::Operator(Operator::Add));

    assert!(app.status_message.starts_with("Ignored"));
    assert!(!app.status_is_error);
}

#[test]
fn test_mouse_click_presses_button() {
    let mut app = App::new(Session::new());
    draw(&mut app);

    let seven = app
        .keypad_hits
        .iter()
        .find(|hit| hit.button == Button::Digit(7))
        .copied()
        .expect("7 is on the keypad");

    app.handle_mouse_event(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: seven.area.x + seven.area.width / 2,
        row: seven.area.y + seven.area.height / 2,
        modifiers: KeyModifiers::NONE,
    });

    assert_eq!(app.session.display_text(), "7");
    assert_eq!(app.last_pressed, Some(Button::Digit(7)));
}

#[test]
fn test_right_click_ignored() {
    let mut app = App::new(Session::new());
    draw(&mut app);
    let hit = app.keypad_hits[0];

    app.handle_mouse_event(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: hit.area.x + 1,
        row: hit.area.y + 1,
        modifiers: KeyModifiers::NONE,
    });

    assert_eq!(app.last_pressed, None);
}
