//! Fallback demo credentials.
//!
//! When demo mode is on, login first compares the submitted password against this table
//! and, on the first match, signs in as that account whatever email was submitted. Each
//! account is backed by a stored user looked up by its email, so the token names that
//! user's own id. The table is off unless `DEMO_MODE` is set.

use std::env;

use edusphere_core::UserRole;

use crate::parse_flag;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoAccount {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub password: String,
}

impl DemoAccount {
    pub fn new(name: &str, email: &str, role: UserRole, password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            role,
            password: password.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DemoConfig {
    pub enabled: bool,
    pub accounts: Vec<DemoAccount>,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = get("DEMO_MODE").map(|v| parse_flag(&v)).unwrap_or(false);

        Self {
            enabled,
            accounts: if enabled {
                Self::default_accounts()
            } else {
                Vec::new()
            },
        }
    }

    /// Demo mode off; the fallback table is never consulted.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: Vec<DemoAccount>) -> Self {
        Self {
            enabled: true,
            accounts,
        }
    }

    /// One account per role, in a fixed order.
    pub fn default_accounts() -> Vec<DemoAccount> {
        vec![
            DemoAccount::new("Demo Admin", "admin@edusphere.demo", UserRole::Admin, "admin123"),
            DemoAccount::new(
                "Demo Teacher",
                "teacher@edusphere.demo",
                UserRole::Teacher,
                "teacher123",
            ),
            DemoAccount::new(
                "Demo Student",
                "student@edusphere.demo",
                UserRole::Student,
                "student123",
            ),
            DemoAccount::new("Demo Parent", "parent@edusphere.demo", UserRole::Parent, "parent123"),
            DemoAccount::new("Demo HR Manager", "hr@edusphere.demo", UserRole::HrManager, "hr123"),
            DemoAccount::new(
                "Demo Branch Manager",
                "branch@edusphere.demo",
                UserRole::BranchManager,
                "branch123",
            ),
        ]
    }

    /// First account whose password equals `password`. Always `None` when disabled.
    pub fn find_by_password(&self, password: &str) -> Option<&DemoAccount> {
        if !self.enabled {
            return None;
        }
        self.accounts.iter().find(|account| account.password == password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        let config = DemoConfig::from_lookup(|_| None);
        assert!(!config.enabled);
        assert!(config.find_by_password("admin123").is_none());
    }

    #[test]
    fn test_enabled_by_flag() {
        let config =
            DemoConfig::from_lookup(|key| (key == "DEMO_MODE").then(|| "true".to_string()));
        assert!(config.enabled);
        assert_eq!(config.accounts.len(), 6);
        assert_eq!(
            config.find_by_password("teacher123").map(|a| a.role),
            Some(UserRole::Teacher)
        );
    }

    #[test]
    fn test_first_match_wins() {
        let config = DemoConfig::with_accounts(vec![
            DemoAccount::new("First", "first@demo", UserRole::Parent, "shared"),
            DemoAccount::new("Second", "second@demo", UserRole::Admin, "shared"),
        ]);
        assert_eq!(
            config.find_by_password("shared").map(|a| a.email.as_str()),
            Some("first@demo")
        );
    }

    #[test]
    fn test_accounts_ignored_when_disabled() {
        let mut config = DemoConfig::with_accounts(DemoConfig::default_accounts());
        config.enabled = false;
        assert!(config.find_by_password("admin123").is_none());
    }

    #[test]
    fn test_parse_flag_variants() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
