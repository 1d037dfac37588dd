use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed budget: {reason}")]
    MalformedBudget { reason: String },
    #[error("market data not available for country: {0}")]
    UnknownMarket(String),
    #[error(
        "Not enough car segments available for budget {min_budget}-{max_budget} {currency} in {market}"
    )]
    InsufficientSegments {
        min_budget: u64,
        max_budget: u64,
        currency: String,
        market: String,
        eligible: usize,
    },
    #[error("No suitable cars found in your budget range")]
    NoViableCandidates { dispatched: usize },
}

impl DomainError {
    pub fn condition(&self) -> &'static str {
        match self {
            Self::MalformedBudget { .. } => "malformed_budget",
            Self::UnknownMarket(_) => "unknown_market",
            Self::InsufficientSegments { .. } => "insufficient_segments",
            Self::NoViableCandidates { .. } => "no_viable_candidates",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("integration failure: {0}")]
    Integration(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, condition: &'static str, correlation_id: String },
    #[error("service unavailable: {message}")]
    ServiceUnavailable { message: String, condition: &'static str, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, condition: &'static str, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The request could not be processed. Check inputs and try again."
            }
            Self::ServiceUnavailable { .. } => {
                "The service is temporarily unavailable. Please retry shortly."
            }
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }

    /// The message shown to API callers. Domain rejections echo their
    /// diagnostics, everything else carries the underlying failure text.
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::ServiceUnavailable { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    pub fn condition(&self) -> &'static str {
        match self {
            Self::BadRequest { condition, .. }
            | Self::ServiceUnavailable { condition, .. }
            | Self::Internal { condition, .. } => condition,
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. }
            | Self::ServiceUnavailable { correlation_id, .. }
            | Self::Internal { correlation_id, .. } => correlation_id,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest { .. } => 400,
            Self::ServiceUnavailable { .. } => 503,
            Self::Internal { .. } => 500,
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::ServiceUnavailable { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::Domain(error) => Self::BadRequest {
                message: error.to_string(),
                condition: error.condition(),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::Integration(message) => Self::ServiceUnavailable {
                message,
                condition: "integration_failure",
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::Configuration(message) => Self::Internal {
                message,
                condition: "configuration_failure",
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::Internal(message) => Self::Internal {
                message,
                condition: "internal_failure",
                correlation_id: "unassigned".to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ApplicationError, DomainError, InterfaceError};

    #[test]
    fn insufficient_segments_maps_to_bad_request_with_diagnostics() {
        let interface = ApplicationError::from(DomainError::InsufficientSegments {
            min_budget: 1_000,
            max_budget: 2_000,
            currency: "USD".to_owned(),
            market: "USA".to_owned(),
            eligible: 2,
        })
        .into_interface("req-1");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest {
                ref correlation_id,
                condition: "insufficient_segments",
                ..
            } if correlation_id == "req-1"
        ));
        assert_eq!(
            interface.message(),
            "Not enough car segments available for budget 1000-2000 USD in USA"
        );
        assert_eq!(interface.status_code(), 400);
    }

    #[test]
    fn bad_request_has_user_safe_message() {
        let interface = ApplicationError::from(DomainError::MalformedBudget {
            reason: "minimum budget `abc` is not a whole number".to_owned(),
        })
        .into_interface("req-2");

        assert_eq!(interface.condition(), "malformed_budget");
        assert_eq!(
            interface.user_message(),
            "The request could not be processed. Check inputs and try again."
        );
    }

    #[test]
    fn integration_error_maps_to_service_unavailable() {
        let interface = ApplicationError::Integration("reasoning service unreachable".to_owned())
            .into_interface("req-3");

        assert!(matches!(interface, InterfaceError::ServiceUnavailable { .. }));
        assert_eq!(interface.status_code(), 503);
        assert_eq!(interface.correlation_id(), "req-3");
    }

    #[test]
    fn internal_error_keeps_underlying_message() {
        let interface =
            ApplicationError::Internal("task panicked".to_owned()).into_interface("req-4");

        assert!(matches!(interface, InterfaceError::Internal { .. }));
        assert_eq!(interface.message(), "task panicked");
        assert_eq!(interface.status_code(), 500);
        assert_eq!(interface.user_message(), "An unexpected internal error occurred.");
    }

    #[test]
    fn every_domain_condition_has_a_distinct_name() {
        let conditions = [
            DomainError::MalformedBudget { reason: String::new() }.condition(),
            DomainError::UnknownMarket(String::new()).condition(),
            DomainError::InsufficientSegments {
                min_budget: 0,
                max_budget: 0,
                currency: String::new(),
                market: String::new(),
                eligible: 0,
            }
            .condition(),
            DomainError::NoViableCandidates { dispatched: 0 }.condition(),
        ];

        let mut unique = conditions.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), conditions.len());
    }
}
