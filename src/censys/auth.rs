use crate::utils::errors::{CertIndexError, Result};
use std::env;
use std::fmt;

pub const APP_ID_VAR: &str = "CENSYS_APP_ID";
pub const SECRET_VAR: &str = "CENSYS_SECRET";

/// Censys API credential pair, sent as HTTP basic auth
#[derive(Clone)]
pub struct Credentials {
    app_id: String,
    secret: String,
}

impl Credentials {
    /// Both values must be non-empty; whitespace-only counts as empty.
    /// Values are kept exactly as given.
    pub fn new(app_id: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let app_id = app_id.into();
        let secret = secret.into();

        if app_id.trim().is_empty() || secret.trim().is_empty() {
            return Err(CertIndexError::Config(format!(
                "Please specify both `{APP_ID_VAR}` and `{SECRET_VAR}` in your environment or `.env` file"
            )));
        }

        Ok(Self { app_id, secret })
    }

    /// Read credentials from `CENSYS_APP_ID` and `CENSYS_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build credentials from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id = lookup(APP_ID_VAR).unwrap_or_default();
        let secret = lookup(SECRET_VAR).unwrap_or_default();
        tracing::trace!(
            "Credential lookup: {APP_ID_VAR} set={}, {SECRET_VAR} set={}",
            !app_id.is_empty(),
            !secret.is_empty()
        );
        Self::new(app_id, secret)
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("secret", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_valid_credentials() {
        let creds =
            Credentials::from_lookup(lookup_from(&[(APP_ID_VAR, "app"), (SECRET_VAR, "s3cret")]))
                .unwrap();
        assert_eq!(creds.app_id(), "app");
        assert_eq!(creds.secret(), "s3cret");
    }

    #[test]
    fn test_missing_credentials() {
        // Neither set
        assert!(matches!(
            Credentials::from_lookup(lookup_from(&[])),
            Err(CertIndexError::Config(_))
        ));

        // Only app id
        assert!(matches!(
            Credentials::from_lookup(lookup_from(&[(APP_ID_VAR, "app")])),
            Err(CertIndexError::Config(_))
        ));

        // Only secret
        assert!(matches!(
            Credentials::from_lookup(lookup_from(&[(SECRET_VAR, "s3cret")])),
            Err(CertIndexError::Config(_))
        ));
    }

    #[test]
    fn test_empty_credentials() {
        assert!(matches!(
            Credentials::new("", "s3cret"),
            Err(CertIndexError::Config(_))
        ));
        assert!(matches!(
            Credentials::new("app", "   "),
            Err(CertIndexError::Config(_))
        ));
    }

    #[test]
    fn test_values_kept_verbatim() {
        let creds = Credentials::new(" app", "s3cret \t").unwrap();
        assert_eq!(creds.app_id(), " app");
        assert_eq!(creds.secret(), "s3cret \t");
    }

    #[test]
    fn test_debug_hides_secret() {
        let creds = Credentials::new("app", "s3cret").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("app"));
        assert!(!debug.contains("s3cret"));
    }
}
