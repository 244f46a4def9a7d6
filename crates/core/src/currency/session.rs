//! Converter session state.
//!
//! Drives the converter screen: the text field, the two currency selectors,
//! the swap gesture and the result line. Every transition is synchronous and
//! leaves the session in a consistent state: at most one of `result` and
//! `error` is set.

use super::conversion::{Conversion, swap};
use super::error::ConversionError;
use super::input::sanitize_amount_text;
use super::record::CurrencyRecord;
use super::service::CurrencyService;

/// State of one converter screen.
#[derive(Debug, Clone)]
pub struct ConverterSession {
    service: CurrencyService,
    input: String,
    from: String,
    to: String,
    result: Option<Conversion>,
    error: Option<ConversionError>,
}

impl ConverterSession {
    /// Starts a session with an empty amount and the given pair selected.
    #[must_use]
    pub fn new(service: CurrencyService, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            service,
            input: String::new(),
            from: from.into(),
            to: to.into(),
            result: None,
            error: None,
        }
    }

    /// Current (sanitized) amount text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Selected source code.
    #[must_use]
    pub fn from_code(&self) -> &str {
        &self.from
    }

    /// Selected target code.
    #[must_use]
    pub fn to_code(&self) -> &str {
        &self.to
    }

    /// Last successful conversion.
    #[must_use]
    pub const fn result(&self) -> Option<&Conversion> {
        self.result.as_ref()
    }

    /// Last error.
    #[must_use]
    pub const fn error(&self) -> Option<&ConversionError> {
        self.error.as_ref()
    }

    /// Whether the convert action is enabled.
    #[must_use]
    pub fn can_convert(&self) -> bool {
        !self.input.is_empty() && self.error.is_none()
    }

    /// Applies a text edit: sanitizes, clears the error and re-converts.
    pub fn on_text_change(&mut self, text: &str) {
        self.input = sanitize_amount_text(text);
        self.error = None;
        self.refresh();
    }

    /// Re-converts when there is an amount and no pending error.
    pub fn refresh(&mut self) {
        if self.can_convert() {
            self.submit();
        }
    }

    /// Converts the current input with the current pair.
    pub fn submit(&mut self) {
        match self.service.convert_text(&self.input, &self.from, &self.to) {
            Ok(conversion) => {
                self.result = Some(conversion);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err);
            }
        }
    }

    /// Selects a new source currency.
    pub fn select_from(&mut self, code: impl Into<String>) {
        self.from = code.into();
        self.refresh();
    }

    /// Selects a new target currency.
    pub fn select_to(&mut self, code: impl Into<String>) {
        self.to = code.into();
        self.refresh();
    }

    /// Swaps source and target. Re-converts with the swapped pair when an
    /// amount and a previous result are both present.
    pub fn swap(&mut self) {
        let (from, to) = swap(
            std::mem::take(&mut self.from),
            std::mem::take(&mut self.to),
        );
        self.from = from;
        self.to = to;
        if !self.input.is_empty() && self.result.is_some() {
            self.submit();
        }
    }

    /// Clears the amount text only.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Clears amount, result and error.
    pub fn clear_all(&mut self) {
        self.input.clear();
        self.result = None;
        self.error = None;
    }

    /// Currencies offered by the source selector.
    pub fn from_options(&self) -> impl Iterator<Item = &CurrencyRecord> {
        self.service.table().others(&self.from)
    }

    /// Currencies offered by the target selector.
    pub fn to_options(&self) -> impl Iterator<Item = &CurrencyRecord> {
        self.service.table().others(&self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ConverterSession {
        ConverterSession::new(CurrencyService::builtin(), "KRW", "USD")
    }

    fn display(session: &ConverterSession) -> Option<&str> {
        session.result().map(|c| c.display.as_str())
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = session();
        assert_eq!(session.input(), "");
        assert_eq!(session.from_code(), "KRW");
        assert_eq!(session.to_code(), "USD");
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert!(!session.can_convert());
    }

    #[test]
    fn test_typing_sanitizes_and_converts() {
        let mut session = session();
        session.on_text_change("1,000");
        assert_eq!(session.input(), "1000");
        assert_eq!(display(&session), Some("$ 0.75"));
        assert!(session.can_convert());
    }

    #[test]
    fn test_typing_bare_dot_reports_error() {
        let mut session = session();
        session.on_text_change(".");
        assert_eq!(session.input(), "0.");
        assert_eq!(session.error(), Some(&ConversionError::NonPositive));
        assert!(session.result().is_none());
        assert!(!session.can_convert());
    }

    #[test]
    fn test_typing_again_clears_error() {
        let mut session = session();
        session.on_text_change("0");
        assert_eq!(session.error(), Some(&ConversionError::NonPositive));

        session.on_text_change("05");
        assert_eq!(session.input(), "5");
        assert!(session.error().is_none());
        assert!(session.result().is_some());
    }

    #[test]
    fn test_submit_empty_input() {
        let mut session = session();
        session.submit();
        assert_eq!(session.error(), Some(&ConversionError::EmptyInput));
        assert_eq!(
            session.error().map(ConversionError::user_message),
            Some("Please enter an amount")
        );
    }

    #[test]
    fn test_select_reconverts() {
        let mut session = session();
        session.on_text_change("100");
        session.select_from("USD");
        session.select_to("KRW");
        assert_eq!(display(&session), Some("₩ 134000.00"));
    }

    #[test]
    fn test_select_unknown_currency_is_recoverable() {
        let mut session = session();
        session.on_text_change("100");
        session.select_to("XYZ");
        assert_eq!(
            session.error(),
            Some(&ConversionError::CurrencyNotFound("XYZ".into()))
        );
        assert!(session.result().is_none());

        // Error blocks auto-refresh until the text changes.
        session.select_to("USD");
        assert!(session.result().is_none());
        session.on_text_change("100");
        assert!(session.result().is_some());
    }

    #[test]
    fn test_swap_reconverts_with_new_pair() {
        let mut session = session();
        session.on_text_change("1000");
        assert_eq!(display(&session), Some("$ 0.75"));

        session.swap();
        assert_eq!(session.from_code(), "USD");
        assert_eq!(session.to_code(), "KRW");
        assert_eq!(display(&session), Some("₩ 1340000.00"));
    }

    #[test]
    fn test_swap_without_result_only_swaps() {
        let mut session = session();
        session.swap();
        assert_eq!(session.from_code(), "USD");
        assert_eq!(session.to_code(), "KRW");
        assert!(session.result().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_clear_input_keeps_result() {
        let mut session = session();
        session.on_text_change("10");
        session.clear_input();
        assert_eq!(session.input(), "");
        assert!(session.result().is_some());
    }

    #[test]
    fn test_clear_all() {
        let mut session = session();
        session.on_text_change("10");
        session.clear_all();
        assert_eq!(session.input(), "");
        assert!(session.result().is_none());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_selector_options_exclude_selection() {
        let session = session();
        assert!(session.from_options().all(|r| r.code != "KRW"));
        assert!(session.to_options().all(|r| r.code != "USD"));
        assert_eq!(session.from_options().count(), 5);
    }
}
