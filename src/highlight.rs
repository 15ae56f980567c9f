use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl SyntaxHighlighter {
    /// Detect what the terminal supports; `enabled = false` forces plain text.
    pub fn new(enabled: bool) -> Self {
        let support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn highlight_command(&self, input: &str) -> String {
        if self.is_plain() {
            return input.to_string();
        }

        // Only the command word is colored; the rest keeps its original spacing.
        let trimmed = input.trim_start();
        let lead = &input[..input.len() - trimmed.len()];
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        if end == 0 {
            return input.to_string();
        }
        let (command, rest) = trimmed.split_at(end);

        let command_style = Style::builder().foreground(Color::Cyan).bold().build();
        format!("{lead}{}{rest}", command.style(command_style))
    }

    pub fn highlight_dir(&self, name: &str) -> String {
        if self.is_plain() {
            return name.to_string();
        }

        let dir_style = Style::builder().foreground(Color::Blue).bold().build();
        name.style(dir_style).to_string()
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if self.is_plain() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_success(&self, message: &str) -> String {
        if self.is_plain() {
            return message.to_string();
        }

        let success_style = Style::builder().foreground(Color::Green).build();
        message.style(success_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if self.is_plain() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        hint.style(hint_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_passthrough() {
        let hl = SyntaxHighlighter::disabled();
        assert_eq!(hl.highlight_command("  copy a  b"), "  copy a  b");
        assert_eq!(hl.highlight_dir("docs"), "docs");
        assert_eq!(hl.highlight_error("boom"), "boom");
        assert_eq!(hl.highlight_success("ok"), "ok");
        assert_eq!(hl.highlight_hint("hint"), "hint");
    }
}
