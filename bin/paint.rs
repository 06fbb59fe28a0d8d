use colored::{Color, Colorize};
use std::{env, fmt::Display};

/// Colorizes banners printed to the console.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Paint {
    enabled: bool,
}

impl Paint {
    pub fn new(enabled: bool) -> Self {
        Paint { enabled }
    }

    /// Colors are disabled on CI servers.
    pub fn from_env() -> Self {
        Paint::new(env::var_os("TEAMCITY_VERSION").is_none())
    }

    pub fn green<T: Display>(&self, text: T) -> String {
        self.paint(text, Color::Green)
    }

    pub fn red<T: Display>(&self, text: T) -> String {
        self.paint(text, Color::Red)
    }

    fn paint<T: Display>(&self, text: T, color: Color) -> String {
        if self.enabled {
            text.to_string().as_str().color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn disabled_paint_leaves_text_untouched(s: String) {
        let paint = Paint::new(false);
        assert_eq!(paint.green(&s), s);
        assert_eq!(paint.red(&s), s);
    }

    #[proptest]
    fn enabled_paint_colorizes_text(s: String) {
        let paint = Paint::new(true);
        assert_eq!(paint.green(&s), s.as_str().green().to_string());
        assert_eq!(paint.red(&s), s.as_str().red().to_string());
    }
}
