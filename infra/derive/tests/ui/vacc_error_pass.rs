use std::borrow::Cow;
use vacc_derive::vacc_error;

#[vacc_error]
pub enum UpstreamError {
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, UpstreamError> {
    raw.parse::<u32>().context("parsing status code")
}

fn main() {
    let err = parse("not-a-number").unwrap_err();
    assert_eq!(err.kind(), "Decode");
    assert!(err.to_string().contains("(parsing status code)"));

    let internal = UpstreamError::from("boom");
    assert_eq!(internal.kind(), "Internal");
}
