use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::core::state::{App, CardSlot, Screen};
use crate::fetch::aggregator::{ImageSlot, Illustrated};

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(frame.area());

    // Title bar
    let loading = if app.is_loading { " | loading..." } else { "" };
    let title_text = format!("Roam | {}{}", app.status_message, loading);
    frame.render_widget(Span::raw(title_text), title_area);

    // Main area - show error OR the current list
    if let Some(error_msg) = &app.error {
        draw_error_view(frame, main_area, error_msg);
    } else {
        match app.screen {
            Screen::Countries => draw_countries(frame, main_area, app),
            Screen::Attractions { country } => draw_attractions(frame, main_area, app, country),
        }
    }

    // Key hints
    let hints = match app.screen {
        Screen::Countries => "↑/↓ select | enter attractions | r refresh | q quit",
        Screen::Attractions { .. } => "↑/↓ select | esc back | q quit",
    };
    frame.render_widget(
        Span::styled(hints, Style::default().add_modifier(Modifier::DIM)),
        hint_area,
    );
}

fn draw_error_view(frame: &mut Frame, area: ratatui::layout::Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center);
    frame.render_widget(error_paragraph, area);
}

fn draw_countries(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let items: Vec<ListItem> = app
        .countries
        .iter()
        .map(|slot| {
            let country = slot.record();
            ListItem::new(Line::from(vec![
                Span::styled(
                    country.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  pop {}", country.population)),
                Span::raw("  "),
                image_status(slot),
            ]))
        })
        .collect();

    render_list(frame, area, app, items, "Countries");
}

fn draw_attractions(frame: &mut Frame, area: ratatui::layout::Rect, app: &App, country: usize) {
    let title = app
        .countries
        .get(country)
        .map(|slot| format!("Attractions: {}", slot.record().name))
        .unwrap_or_else(|| String::from("Attractions"));

    let items: Vec<ListItem> = app
        .attractions
        .iter()
        .map(|slot| {
            let attraction = slot.record();
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        attraction.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    image_status(slot),
                ]),
                Line::from(Span::styled(
                    attraction.description.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
        })
        .collect();

    render_list(frame, area, app, items, &title);
}

fn render_list(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    app: &App,
    items: Vec<ListItem>,
    title: &str,
) {
    let list = List::new(items)
        .block(Block::bordered().title(title.to_string()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// One-glance image state for a slot: still loading, resolved with
/// dimensions, or a placeholder with the reason it fell back.
fn image_status<R: Illustrated>(slot: &CardSlot<R>) -> Span<'static> {
    match slot {
        CardSlot::Pending(_) => {
            Span::styled("[image: loading]", Style::default().fg(Color::Yellow))
        }
        CardSlot::Ready(vm) => match &vm.image {
            ImageSlot::Resolved(resource) => {
                let (w, h) = resource.dimensions();
                Span::styled(
                    format!("[image: {w}x{h}]"),
                    Style::default().fg(Color::Green),
                )
            }
            ImageSlot::Fallback(e) => Span::styled(
                format!("[placeholder: {e}]"),
                Style::default().fg(Color::Red),
            ),
        },
    }
}
