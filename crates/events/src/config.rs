use thiserror::Error;

/// Configuration for an [`Event`](crate::Event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    name: &'static str,
    max_subscribers: Option<usize>,
}

/// Errors that can occur when validating an event config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("max_subscribers must be at least 1")]
    ZeroLimit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "event",
            max_subscribers: None,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `name` labels the event in log records. `max_subscribers` caps the
    /// number of live subscriptions, counting duplicates; `None` means no cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or `max_subscribers` is zero.
    pub fn new(name: &'static str, max_subscribers: Option<usize>) -> Result<Self, ConfigError> {
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if max_subscribers == Some(0) {
            return Err(ConfigError::ZeroLimit);
        }

        Ok(Self {
            name,
            max_subscribers,
        })
    }

    /// Returns the name used in log records.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the subscription cap, if any.
    #[must_use]
    pub fn max_subscribers(&self) -> Option<usize> {
        self.max_subscribers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        let config = Config::default();

        assert_eq!(config.name(), "event");
        assert_eq!(config.max_subscribers(), None);
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(Config::new("", None), Err(ConfigError::EmptyName));
        assert_eq!(Config::new("clicked", Some(0)), Err(ConfigError::ZeroLimit));
    }

    #[test]
    fn accepts_valid_values() {
        let config = Config::new("clicked", Some(2)).unwrap();

        assert_eq!(config.name(), "clicked");
        assert_eq!(config.max_subscribers(), Some(2));
    }
}
