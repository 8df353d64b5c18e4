use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
pub enum TuiEvent {
    Quit,
    ForceQuit,
    Refresh,
    Up,
    Down,
    Open,
    Back,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('r')) => Some(TuiEvent::Refresh),
                (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::Up),
                (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::Down),
                (_, KeyCode::Enter) | (_, KeyCode::Right) => Some(TuiEvent::Open),
                (_, KeyCode::Esc) | (_, KeyCode::Backspace) | (_, KeyCode::Left) => {
                    Some(TuiEvent::Back)
                }
                _ => None,
            },
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
