use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use news_core::{AppViewModel, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Dispatch(Msg),
    MoveCursor(isize),
    Quit,
}

pub fn map_key(key: KeyEvent, view: &AppViewModel) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyCommand::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyCommand::Quit),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => select_relative(view, -1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => select_relative(view, 1),
        KeyCode::Char(c @ '0'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize)?;
            select_option(view, index)
        }
        KeyCode::Char('r') => Some(KeyCommand::Dispatch(Msg::RefreshRequested)),
        KeyCode::Up | KeyCode::Char('k') => Some(KeyCommand::MoveCursor(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyCommand::MoveCursor(1)),
        KeyCode::PageUp => Some(KeyCommand::MoveCursor(-10)),
        KeyCode::PageDown => Some(KeyCommand::MoveCursor(10)),
        _ => None,
    }
}

fn select_relative(view: &AppViewModel, step: isize) -> Option<KeyCommand> {
    let count = view.category_options.len() as isize;
    if count == 0 {
        return None;
    }
    let next = (view.selected_option_index() as isize + step).rem_euclid(count) as usize;
    select_option(view, next)
}

fn select_option(view: &AppViewModel, index: usize) -> Option<KeyCommand> {
    view.category_options
        .get(index)
        .map(|option| KeyCommand::Dispatch(Msg::CategorySelected(option.query_value().to_string())))
}

#[cfg(test)]
mod tests {
    use news_core::{update, AppState};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view_with(category: &str) -> AppViewModel {
        update(
            AppState::default(),
            Msg::CategorySelected(category.to_string()),
        )
        .0
        .view()
    }

    fn selected(command: Option<KeyCommand>) -> String {
        match command {
            Some(KeyCommand::Dispatch(Msg::CategorySelected(value))) => value,
            other => panic!("expected a category selection, got {other:?}"),
        }
    }

    #[test]
    fn arrows_cycle_through_categories_and_wrap() {
        let all = AppState::default().view();
        assert_eq!(selected(map_key(press(KeyCode::Right), &all)), "business");
        assert_eq!(selected(map_key(press(KeyCode::Left), &all)), "sports");

        let sports = view_with("sports");
        assert_eq!(selected(map_key(press(KeyCode::Right), &sports)), "");
        assert_eq!(
            selected(map_key(press(KeyCode::Left), &sports)),
            "entertainment"
        );
    }

    #[test]
    fn digits_jump_to_an_option() {
        let view = AppState::default().view();
        assert_eq!(selected(map_key(press(KeyCode::Char('0')), &view)), "");
        assert_eq!(selected(map_key(press(KeyCode::Char('2')), &view)), "technology");
        assert_eq!(selected(map_key(press(KeyCode::Char('6')), &view)), "sports");
        assert_eq!(map_key(press(KeyCode::Char('7')), &view), None);
    }

    #[test]
    fn same_digit_twice_selects_again() {
        let view = view_with("health");
        assert_eq!(selected(map_key(press(KeyCode::Char('4')), &view)), "health");
    }

    #[test]
    fn other_keys() {
        let view = AppState::default().view();
        assert_eq!(
            map_key(press(KeyCode::Char('r')), &view),
            Some(KeyCommand::Dispatch(Msg::RefreshRequested))
        );
        assert_eq!(
            map_key(press(KeyCode::Down), &view),
            Some(KeyCommand::MoveCursor(1))
        );
        assert_eq!(map_key(press(KeyCode::Char('q')), &view), Some(KeyCommand::Quit));
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &view
            ),
            Some(KeyCommand::Quit)
        );
        assert_eq!(map_key(press(KeyCode::Char('x')), &view), None);
    }
}
