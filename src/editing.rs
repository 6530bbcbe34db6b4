//! The keypad session: the only owner of the expression, caret, answer and mode.

use crate::evaluating::evaluate_strict;
use crate::expression::Expression;
use crate::formatting::{format_number, round, ERROR_MARKER, SYNTAX_ERROR_MARKER};
use crate::guarding::{admit, Admission};
use crate::keys::Key;
use crate::previewing::{preview, Preview};
use tracing::{debug, info, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    editing,
    /// The last commit succeeded and its value is on display.
    result_shown,
    /// The last commit failed and an error marker is on display.
    error_shown,
}

#[derive(Clone, Debug)]
pub struct Session {
    expression: Expression,
    answer: f64,
    mode: Mode,
    /// Replaces the expression on display after a commit.
    banner: Option<String>,
    preview: Preview,
}

impl Session {
    pub fn new() -> Self {
        Self {
            expression: Expression::new(),
            answer: 0.0,
            mode: Mode::editing,
            banner: None,
            preview: Preview::placeholder,
        }
    }

    /// Inserts a keypad token at the caret; unknown tokens are ignored.
    pub fn insert(&mut self, token: &str) {
        match token.parse::<Key>() {
            Ok(key) => self.insert_key(key),
            Err(error) => debug!(%error, "token ignored"),
        }
    }

    pub fn insert_key(&mut self, key: Key) {
        match admit(self.mode, &self.expression, key) {
            Admission::rejected => return,
            Admission::insert => self.expression.insert(key),
            Admission::restart(keys) => self.expression = Expression::from_keys(keys),
        }
        self.mode = Mode::editing;
        self.banner = None;
        self.refresh_preview();
    }

    pub fn delete(&mut self) {
        if self.mode != Mode::editing {
            self.clear();
            return;
        }
        if self.expression.remove_before_caret().is_some() {
            self.refresh_preview();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.mode == Mode::editing {
            self.expression.move_left();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.mode == Mode::editing {
            self.expression.move_right();
        }
    }

    /// Evaluates the expression for good.
    ///
    /// Does nothing until there is at least one operand. Afterwards the
    /// expression is consumed and the display shows the result or an error
    /// marker until the next edit.
    pub fn commit(&mut self) {
        if !self.expression.keys().any(Key::is_operand) {
            return;
        }

        let text = self.expression.to_string();
        match evaluate_strict(&text, self.answer) {
            Ok(value) => {
                self.answer = round(value);
                self.banner = Some(format_number(self.answer));
                self.mode = Mode::result_shown;
                info!(expression = %text, answer = self.answer, "committed");
            },
            Err(error) => {
                let marker = if error.is_syntax() { SYNTAX_ERROR_MARKER } else { ERROR_MARKER };
                self.banner = Some(marker.into());
                self.mode = Mode::error_shown;
                debug!(expression = %text, %error, "commit failed");
            },
        }
        self.expression.clear();
        self.preview = Preview::suppressed;
    }

    pub fn clear(&mut self) {
        self.expression.clear();
        self.mode = Mode::editing;
        self.banner = None;
        self.preview = Preview::placeholder;
    }

    fn refresh_preview(&mut self) {
        self.preview = preview(&self.expression.to_string(), self.answer);
        trace!(preview = %self.preview, "preview refreshed");
    }

    pub fn display_text(&self) -> String {
        match &self.banner {
            Some(banner) => banner.clone(),
            None => self.expression.to_string(),
        }
    }

    pub fn preview_text(&self) -> String {
        self.preview.to_string()
    }

    pub fn preview(&self) -> Preview {
        self.preview
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn answer(&self) -> f64 {
        self.answer
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Caret position within [`display_text`](Self::display_text), in characters.
    pub fn caret(&self) -> usize {
        match &self.banner {
            Some(banner) => banner.chars().count(),
            None => self.expression.caret(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(tokens: &[&str]) -> Session {
        let mut session = Session::new();
        for token in tokens {
            session.insert(token);
        }
        session
    }

    #[test]
    fn starts_empty_with_zero_preview() {
        let session = Session::new();
        assert_eq!(session.display_text(), "");
        assert_eq!(session.preview_text(), "= 0");
        assert_eq!(session.mode(), Mode::editing);
        assert_eq!(session.answer(), 0.0);
    }

    #[test]
    fn commit_stores_answer() {
        let mut session = typed(&["2", "+", "3"]);
        assert_eq!(session.preview_text(), "= 5");
        session.commit();
        assert_eq!(session.display_text(), "5");
        assert_eq!(session.preview_text(), "");
        assert_eq!(session.mode(), Mode::result_shown);
        assert_eq!(session.answer(), 5.0);
    }

    #[test]
    fn stored_answer_is_rounded() {
        let mut session = typed(&["1", "÷", "3"]);
        session.commit();
        assert_eq!(session.display_text(), "0.33333");
        assert_eq!(session.answer(), 0.33333);
    }

    #[test]
    fn operator_after_result_continues_from_answer() {
        let mut session = typed(&["2", "+", "3"]);
        session.commit();
        session.insert("+");
        assert_eq!(session.display_text(), "ANS+");
        assert_eq!(session.preview_text(), "= 5");
        assert_eq!(session.mode(), Mode::editing);
    }

    #[test]
    fn digit_after_result_starts_over() {
        let mut session = typed(&["2", "+", "3"]);
        session.commit();
        session.insert("7");
        assert_eq!(session.display_text(), "7");
        assert_eq!(session.answer(), 5.0);
    }

    #[test]
    fn close_paren_after_result_is_ignored() {
        let mut session = typed(&["4"]);
        session.commit();
        session.insert(")");
        assert_eq!(session.display_text(), "4");
        assert_eq!(session.mode(), Mode::result_shown);
    }

    #[test]
    fn negative_answer_multiplies_next_to_parens() {
        let mut session = typed(&["-", "3"]);
        session.commit();
        assert_eq!(session.answer(), -3.0);

        for token in ["(", "2", ")", "ANS"] {
            session.insert(token);
        }
        assert_eq!(session.display_text(), "(2)ANS");
        assert_eq!(session.preview_text(), "= -6");
        session.commit();
        assert_eq!(session.display_text(), "-6");

        session.clear();
        for token in ["ANS", "(", "2", ")"] {
            session.insert(token);
        }
        assert_eq!(session.preview_text(), "= -12");
        session.commit();
        assert_eq!(session.display_text(), "-12");
    }

    #[test]
    fn point_after_result_clears_display() {
        let mut session = typed(&["4"]);
        session.commit();
        session.insert(".");
        assert_eq!(session.display_text(), "");
        assert_eq!(session.mode(), Mode::editing);
        assert_eq!(session.preview_text(), "= 0");
        assert_eq!(session.answer(), 4.0);
    }

    #[test]
    fn delete_removes_answer_atomically() {
        let mut session = typed(&["2", "+", "ANS"]);
        assert_eq!(session.display_text(), "2+ANS");
        session.delete();
        assert_eq!(session.display_text(), "2+");
        assert_eq!(session.preview_text(), "= 2");
    }

    #[test]
    fn delete_at_caret() {
        let mut session = typed(&["1", "2", "3"]);
        session.move_cursor_left();
        session.delete();
        assert_eq!(session.display_text(), "13");
        assert_eq!(session.caret(), 1);
        assert_eq!(session.preview_text(), "= 13");
    }

    #[test]
    fn delete_after_commit_clears() {
        let mut session = typed(&["5", "÷", "0"]);
        session.commit();
        assert_eq!(session.mode(), Mode::error_shown);
        session.delete();
        assert_eq!(session.display_text(), "");
        assert_eq!(session.mode(), Mode::editing);
        assert_eq!(session.preview_text(), "= 0");
    }

    #[test]
    fn insert_between_keys() {
        let mut session = typed(&["2", "3"]);
        session.move_cursor_left();
        session.insert("+");
        assert_eq!(session.display_text(), "2+3");
        assert_eq!(session.preview_text(), "= 5");
        session.move_cursor_right();
        assert_eq!(session.caret(), 3);
    }

    #[test]
    fn cursor_movement_leaves_preview_alone() {
        let mut session = typed(&["(", "1"]);
        let before = session.preview();
        session.move_cursor_left();
        session.move_cursor_left();
        session.move_cursor_left();
        assert_eq!(session.preview(), before);
        assert_eq!(session.caret(), 0);
    }

    #[test]
    fn syntax_and_math_errors_differ() {
        let mut session = typed(&["(", "2"]);
        session.commit();
        assert_eq!(session.display_text(), SYNTAX_ERROR_MARKER);
        assert_eq!(session.mode(), Mode::error_shown);

        let mut session = typed(&["5", "÷", "0"]);
        session.commit();
        assert_eq!(session.display_text(), ERROR_MARKER);
    }

    #[test]
    fn commit_without_operands_does_nothing() {
        let mut session = typed(&["(", "-"]);
        session.commit();
        assert_eq!(session.display_text(), "(-");
        assert_eq!(session.mode(), Mode::editing);

        let mut session = Session::new();
        session.commit();
        assert_eq!(session.mode(), Mode::editing);
    }

    #[test]
    fn input_after_error_restarts() {
        let mut session = typed(&["5", "÷", "0"]);
        session.commit();
        session.insert("8");
        assert_eq!(session.display_text(), "8");
        assert_eq!(session.mode(), Mode::editing);

        let mut session = typed(&["5", "÷", "0"]);
        session.commit();
        session.insert("+");
        assert_eq!(session.display_text(), "");
        assert_eq!(session.mode(), Mode::editing);
    }

    #[test]
    fn clear_keeps_answer() {
        let mut session = typed(&["6", "×", "7"]);
        session.commit();
        session.insert("1");
        session.clear();
        assert_eq!(session.display_text(), "");
        assert_eq!(session.preview_text(), "= 0");
        assert_eq!(session.answer(), 42.0);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let mut session = typed(&["4", "sin", "^"]);
        assert_eq!(session.display_text(), "4");
        session.insert("");
        assert_eq!(session.preview_text(), "= 4");
    }
}
