//! Input handling for the TUI application.
//!
//! Maps terminal key events onto application messages. Pressing a digit is
//! the terminal equivalent of clicking the k-th star control on a page:
//! digit `k` selects `k` stars.

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
/// The digit keys can only produce in-range selections, so rejection paths
/// in the widget are unreachable from keyboard input.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char(digit @ '1'..='5') => digit
            .to_digit(10)
            .and_then(|stars| u8::try_from(stars).ok())
            .map(AppMsg::StarSelected),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Esc => Some(AppMsg::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case('1', 1)]
    #[case('3', 3)]
    #[case('5', 5)]
    fn digit_keys_select_matching_star(#[case] digit: char, #[case] stars: u8) {
        assert_eq!(
            map_key_to_message(&key(KeyCode::Char(digit))),
            Some(AppMsg::StarSelected(stars))
        );
    }

    #[rstest]
    #[case(KeyCode::Char('q'))]
    #[case(KeyCode::Esc)]
    fn quit_keys_map_to_quit(#[case] code: KeyCode) {
        assert_eq!(map_key_to_message(&key(code)), Some(AppMsg::Quit));
    }

    #[test]
    fn help_key_toggles_help() {
        assert_eq!(
            map_key_to_message(&key(KeyCode::Char('?'))),
            Some(AppMsg::ToggleHelp)
        );
    }

    #[rstest]
    #[case(KeyCode::Char('0'))]
    #[case(KeyCode::Char('6'))]
    #[case(KeyCode::Char('x'))]
    #[case(KeyCode::Enter)]
    fn unmapped_keys_are_ignored(#[case] code: KeyCode) {
        assert_eq!(map_key_to_message(&key(code)), None);
    }
}
