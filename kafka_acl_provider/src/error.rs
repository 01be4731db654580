use kafka_acl::error::AclError;
use serde::Serialize;
use tracing::error;

#[derive(Debug)]
pub enum ApplicationError {
    InvalidArgument(anyhow::Error),
    Lifecycle(AclError),
    Internal(anyhow::Error),
}

impl From<AclError> for ApplicationError {
    fn from(value: AclError) -> Self {
        ApplicationError::Lifecycle(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// Error report handed back to the host in place of a resource state.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl From<ApplicationError> for Diagnostic {
    fn from(value: ApplicationError) -> Self {
        let (summary, detail) = match value {
            ApplicationError::InvalidArgument(e) => {
                error!("{e:?}");
                ("Invalid resource state".to_owned(), format!("{e:#}"))
            }
            ApplicationError::Internal(e) => {
                error!("{e:?}");
                ("Provider error".to_owned(), format!("{e:#}"))
            }
            ApplicationError::Lifecycle(e) => {
                error!("{e:?}");
                let summary = e.to_string();
                (summary, format!("{:#}", anyhow::Error::new(e)))
            }
        };

        Diagnostic {
            severity: Severity::Error,
            summary,
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn transport_error_detail_includes_cause() {
        let error = AclError::Transport {
            context: "Error creating kafka ACL",
            source: anyhow!("Status code: 400, message: invalid principal"),
        };

        let diagnostic = Diagnostic::from(ApplicationError::from(error));

        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.summary, "Error creating kafka ACL");
        assert_eq!(
            diagnostic.detail,
            "Error creating kafka ACL: Status code: 400, message: invalid principal"
        );
    }

    #[test]
    fn invalid_argument_is_reported_as_invalid_state() {
        let diagnostic =
            Diagnostic::from(ApplicationError::InvalidArgument(anyhow!("Required attribute \"host\"")));

        assert_eq!(diagnostic.summary, "Invalid resource state");
        assert!(diagnostic.detail.contains("host"));
    }
}
