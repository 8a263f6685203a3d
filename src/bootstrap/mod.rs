//! Canned setup profiles and the destructive database reset.
//!
//! A profile is a named, fixed set of records (metadata types, document types,
//! index template trees) applied to initialize the application for a
//! particular use case. Profiles are deliberately not idempotent: running one
//! twice creates duplicate records, and a failure partway through leaves the
//! records created so far in place.

pub mod nuke;
pub mod permits;
pub mod simple;

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use sea_orm::DatabaseConnection;
use thiserror::Error;

pub use nuke::nuke_database;
pub use permits::BootstrapPermits;
pub use simple::BootstrapSimple;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Unknown bootstrap profile: {0}")]
    UnknownProfile(String),
}

#[async_trait]
pub trait BootstrapProfile: Send + Sync {
    /// Registry key, unique across profiles.
    fn name(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Create this profile's fixed set of records.
    async fn execute(&self, db: &DatabaseConnection) -> Result<()>;
}

/// All available profiles, keyed by name. Built once on first access.
pub static BOOTSTRAP_OPTIONS: Lazy<HashMap<&'static str, Box<dyn BootstrapProfile>>> =
    Lazy::new(|| {
        let profiles: Vec<Box<dyn BootstrapProfile>> =
            vec![Box::new(BootstrapSimple), Box::new(BootstrapPermits)];
        profiles
            .into_iter()
            .map(|profile| (profile.name(), profile))
            .collect()
    });

pub fn get_profile(name: &str) -> Result<&'static dyn BootstrapProfile, BootstrapError> {
    BOOTSTRAP_OPTIONS
        .get(name)
        .map(|profile| profile.as_ref())
        .ok_or_else(|| BootstrapError::UnknownProfile(name.to_string()))
}
