use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ScreenView, StackPanel, TitleBar};

/// Splits the frame into title bar, screen (buttons) and stack panel.
///
/// The screen and the stack panel share the body evenly, with a divider
/// line on top of the panel.
fn layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Fill, Length};
    let [title_area, body_area] = Layout::vertical([Length(1), Fill(1)]).areas(area);
    let [screen_area, panel_area] = Layout::vertical([Fill(1), Fill(1)]).areas(body_area);
    [title_area, screen_area, panel_area]
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, screen_area, panel_area] = layout(frame.area());
    let route = app.current_route();

    TitleBar::new(route.clone(), app.status_message.clone()).render(frame, title_area);

    ScreenView::new(route.as_deref(), &tui.screen).render(frame, screen_area);

    let divider = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let panel_inner = divider.inner(panel_area);
    frame.render_widget(divider, panel_area);

    let routes = app.routes();
    StackPanel::new(&routes, app.stack_order, app.show_count, &mut tui.stack_panel)
        .render(frame, panel_inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        tui.sync(app);
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_start_screen() {
        let app = App::default();
        let mut tui = TuiState::new();

        let text = draw(&app, &mut tui);

        assert!(text.contains("Backstack (screen: A)"));
        assert!(text.contains("Go to A (launchSingleTop)"));
        assert!(text.contains("Backstack count: 1"));
        assert!(text.contains("┃ A ┃"));
    }

    #[test]
    fn test_draw_ui_empty_stack() {
        let mut app = App::default();
        let mut tui = TuiState::new();
        for action in [Action::GoToB, Action::GoToC, Action::BackToAInclusive] {
            update(&mut app, action);
        }

        let text = draw(&app, &mut tui);

        assert!(text.contains("Back stack is empty"));
        assert!(text.contains("Relaunch start destination"));
        assert!(text.contains("Backstack count: 0"));
        assert!(text.contains("┗━┛"));
        assert!(!text.contains("┃ A ┃"));
    }

    #[test]
    fn test_layout_splits_body_evenly() {
        let [title, screen, panel] = layout(Rect::new(0, 0, 80, 21));
        assert_eq!(title.height, 1);
        assert_eq!(screen.height, 10);
        assert_eq!(panel.height, 10);
    }
}
