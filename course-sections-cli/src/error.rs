use miette::Diagnostic;

/// Resolver error rendered as a miette diagnostic, with the error's advice as help.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(course_sections::error))]
pub(crate) struct CliError {
    message: String,

    #[help]
    advice: Option<String>,
}

impl From<course_sections::Error> for CliError {
    fn from(e: course_sections::Error) -> Self {
        Self {
            message: e.to_string(),
            advice: e.advice().map(str::to_string),
        }
    }
}

pub(crate) fn report(e: course_sections::Error) -> miette::Report {
    tracing::debug!(error = ?e, "resolver error");
    miette::Report::new(CliError::from(e))
}
