//! Caller identity as asserted by the external identity provider.
//!
//! The service never verifies credentials itself. Either every request acts
//! as one configured user (`single_user`), or a trusted proxy forwards the
//! provider's subject and profile fields in request headers (`proxy`).

use salvo::http::HeaderMap;

use gigboard_core::config::{AuthMethod, ProxyAuthConfig, Settings, SingleUserAuthConfig};
use gigboard_core::util::slug::generate_username;

/// Identity asserted for the current caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider subject; stored as `user.token_identifier`.
    pub subject: String,
    pub username: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn from_single_user(config: &SingleUserAuthConfig) -> Self {
        Self {
            subject: config.subject.clone(),
            username: Some(config.username.clone()),
            name: Some(config.name.clone()),
            email: config.email.clone(),
        }
    }

    /// Reads the identity from proxy headers.
    ///
    /// Returns `None` when the subject header is missing or blank, which
    /// marks the request as public.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap, config: &ProxyAuthConfig) -> Option<Self> {
        let subject = header_value(headers, &config.subject_header)?;

        let optional = |name: &Option<String>| {
            name.as_deref()
                .and_then(|header| header_value(headers, header))
        };

        Some(Self {
            subject,
            username: optional(&config.username_header),
            name: optional(&config.name_header),
            email: optional(&config.email_header),
        })
    }

    /// Username to claim when provisioning the user row.
    ///
    /// Falls back from the asserted username to a handle derived from the
    /// display name, then the email, then the subject.
    #[must_use]
    pub fn preferred_username(&self) -> String {
        let source = self
            .username
            .as_deref()
            .or(self.name.as_deref())
            .or(self.email.as_deref())
            .unwrap_or(&self.subject);
        generate_username(source)
    }

    /// Display name to store; defaults to the preferred username.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.preferred_username())
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

/// ## Summary
/// Determines the caller identity for a request according to the configured
/// authentication method.
///
/// ## Errors
/// Returns `InvalidConfiguration` if single-user mode is selected without a
/// `single_user` section.
pub fn extract_identity(
    headers: &HeaderMap,
    settings: &Settings,
) -> crate::error::ServiceResult<Option<Identity>> {
    match settings.auth.method {
        AuthMethod::SingleUser => {
            let config = settings.auth.single_user.as_ref().ok_or_else(|| {
                crate::error::ServiceError::InvalidConfiguration(
                    "Single user config is missing".to_string(),
                )
            })?;
            Ok(Some(Identity::from_single_user(config)))
        }
        AuthMethod::Proxy => {
            let identity = match settings.auth.proxy.as_ref() {
                Some(config) => Identity::from_headers(headers, config),
                None => Identity::from_headers(headers, &ProxyAuthConfig::default()),
            };
            Ok(identity)
        }
    }
}
