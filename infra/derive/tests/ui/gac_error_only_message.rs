use std::borrow::Cow;

#[gac_derive::gac_error]
#[derive(Debug)]
pub enum NoSourceError {
    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Plain failure: {message}")]
    Plain { message: Cow<'static, str> },
}

fn main() {
    let rejected: Result<(), NoSourceError> =
        Err(NoSourceError::Rejected { message: "nope".into(), context: None });
    let err = rejected.context("while testing").unwrap_err();
    assert_eq!(err.to_string(), "Rejected (while testing): nope");

    let plain = NoSourceError::Plain { message: "x".into() };
    assert_eq!(plain.context_str(), None);
}
