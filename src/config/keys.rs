// Key names used in the configuration file

use crossterm::event::KeyCode;

use crate::game::input::normalize_key;

/// Parse a key name such as "W", "Up", "Space" or "Esc"
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let trimmed = name.trim();
    let code = match trimmed.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        _ => {
            let mut chars = trimmed.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(normalize_key(code))
}

/// Short label for on-screen hints
pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key("Up"), Some(KeyCode::Up));
        assert_eq!(parse_key("down"), Some(KeyCode::Down));
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key(" ESC "), Some(KeyCode::Esc));
    }

    #[test]
    fn test_parse_single_characters_lowercase() {
        assert_eq!(parse_key("W"), Some(KeyCode::Char('w')));
        assert_eq!(parse_key("s"), Some(KeyCode::Char('s')));
        assert_eq!(parse_key("1"), Some(KeyCode::Char('1')));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("PageWhatever"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(key_label(KeyCode::Char('w')), "W");
        assert_eq!(key_label(KeyCode::Char(' ')), "Space");
        assert_eq!(key_label(KeyCode::Up), "↑");
    }
}
