use pethub_derive::pethub_error;
use std::borrow::Cow;

#[pethub_error]
pub enum LookupError {
    #[error("Lookup not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), LookupError> {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk"));
    io.context("reading pets")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading pets): disk");

    let internal: LookupError = "boom".into();
    assert!(matches!(internal, LookupError::Internal { .. }));

    let missing: Result<(), LookupError> =
        Err(LookupError::NotFound { message: "42".into(), context: None });
    let err = missing.context("by id").unwrap_err();
    assert_eq!(err.to_string(), "Lookup not found (by id): 42");
}
