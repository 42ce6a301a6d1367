// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Backend(BackendError),
    Auth(AuthError),
}

/// Specific error types for catalog backend requests.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The requested document does not exist.
    NotFound,

    /// The server rejected the request (non-success HTTP status).
    Status(u16),

    /// The response body could not be decoded into the expected shape.
    Decode(String),

    /// The request never completed (DNS, TLS, connect, timeout).
    Network(String),
}

impl BackendError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            BackendError::NotFound => "error-load-product-not-found",
            BackendError::Status(_) => "error-load-product-status",
            BackendError::Decode(_) => "error-load-product-decode",
            BackendError::Network(_) => "error-load-product-network",
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::NotFound => write!(f, "Document not found"),
            BackendError::Status(code) => write!(f, "Request failed with HTTP status {}", code),
            BackendError::Decode(msg) => write!(f, "Response decoding failed: {}", msg),
            BackendError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

/// Specific error types for the administrator sign-in flow.
///
/// The identity provider reports failures as upper-case code strings in the
/// response body; `from_code` folds the known ones into typed variants so the
/// UI can localize them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email, wrong password, or malformed email.
    InvalidCredentials,

    /// The account exists but has been disabled by an administrator.
    UserDisabled,

    /// The provider is throttling sign-in attempts for this account.
    TooManyAttempts,

    /// Sign-up rejected because the email is already registered.
    EmailExists,

    /// Sign-up rejected because the password is too weak.
    WeakPassword,

    /// The account authenticated but carries no administrator role.
    NotAdmin,

    /// No backend project/API key is configured.
    NotConfigured,

    /// Any other provider-reported code, kept verbatim.
    Provider(String),

    /// The request never reached the provider.
    Network(String),
}

impl AuthError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "error-auth-invalid-credentials",
            AuthError::UserDisabled => "error-auth-user-disabled",
            AuthError::TooManyAttempts => "error-auth-too-many-attempts",
            AuthError::EmailExists => "error-auth-email-exists",
            AuthError::WeakPassword => "error-auth-weak-password",
            AuthError::NotAdmin => "error-auth-not-admin",
            AuthError::NotConfigured => "error-auth-not-configured",
            AuthError::Provider(_) => "error-auth-provider",
            AuthError::Network(_) => "error-auth-network",
        }
    }

    /// Folds an identity-provider error code into a typed variant.
    ///
    /// Codes occasionally carry a suffix (e.g.
    /// `TOO_MANY_ATTEMPTS_TRY_LATER : ...`), so matching is by prefix.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();

        if code.starts_with("EMAIL_NOT_FOUND")
            || code.starts_with("INVALID_PASSWORD")
            || code.starts_with("INVALID_LOGIN_CREDENTIALS")
            || code.starts_with("INVALID_EMAIL")
        {
            return AuthError::InvalidCredentials;
        }

        if code.starts_with("USER_DISABLED") {
            return AuthError::UserDisabled;
        }

        if code.starts_with("TOO_MANY_ATTEMPTS_TRY_LATER") {
            return AuthError::TooManyAttempts;
        }

        if code.starts_with("EMAIL_EXISTS") {
            return AuthError::EmailExists;
        }

        if code.starts_with("WEAK_PASSWORD") {
            return AuthError::WeakPassword;
        }

        AuthError::Provider(code.to_string())
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::UserDisabled => write!(f, "Account is disabled"),
            AuthError::TooManyAttempts => write!(f, "Too many attempts, try again later"),
            AuthError::EmailExists => write!(f, "Email is already registered"),
            AuthError::WeakPassword => write!(f, "Password is too weak"),
            AuthError::NotAdmin => write!(f, "Account has no administrator role"),
            AuthError::NotConfigured => write!(f, "Backend is not configured"),
            AuthError::Provider(code) => write!(f, "Provider error: {}", code),
            AuthError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Backend(e) => write!(f, "Backend Error: {}", e),
            Error::Auth(e) => write!(f, "Auth Error: {}", e),
        }
    }
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        Error::Backend(err)
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Auth(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn auth_error_from_code_email_not_found() {
        let err = AuthError::from_code("EMAIL_NOT_FOUND");
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn auth_error_from_code_invalid_password() {
        let err = AuthError::from_code("INVALID_PASSWORD");
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn auth_error_from_code_throttled_with_suffix() {
        let err = AuthError::from_code(
            "TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been temporarily disabled.",
        );
        assert_eq!(err, AuthError::TooManyAttempts);
    }

    #[test]
    fn auth_error_from_code_unknown_is_kept_verbatim() {
        let err = AuthError::from_code("OPERATION_NOT_ALLOWED");
        assert!(matches!(err, AuthError::Provider(code) if code == "OPERATION_NOT_ALLOWED"));
    }

    #[test]
    fn auth_error_i18n_keys() {
        assert_eq!(
            AuthError::InvalidCredentials.i18n_key(),
            "error-auth-invalid-credentials"
        );
        assert_eq!(AuthError::NotAdmin.i18n_key(), "error-auth-not-admin");
        assert_eq!(
            AuthError::TooManyAttempts.i18n_key(),
            "error-auth-too-many-attempts"
        );
    }

    #[test]
    fn backend_error_i18n_keys() {
        assert_eq!(
            BackendError::NotFound.i18n_key(),
            "error-load-product-not-found"
        );
        assert_eq!(
            BackendError::Network(String::new()).i18n_key(),
            "error-load-product-network"
        );
    }

    #[test]
    fn backend_error_display_includes_status() {
        let err = BackendError::Status(503);
        assert!(format!("{}", err).contains("503"));
    }
}
