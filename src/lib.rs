//! Password risk assessment library
//!
//! Combines deterministic local strength analysis with a privacy-preserving
//! k-anonymity breach lookup and folds both into a single risk verdict.
//! Only the first 5 hex characters of the secret's SHA-1 digest ever leave
//! the process; the remote provider's response is cached by prefix, and a
//! hard timeout guarantees an unreachable provider can never block the
//! calling flow.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_risk::{AssessmentConfig, BreachCache, RangeBreachClient, SecurityCheckOrchestrator};
//! use secrecy::SecretString;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let config = AssessmentConfig::default();
//! let client = RangeBreachClient::new(
//!     config.breach.api_base_url.clone(),
//!     config.breach.timeout,
//! )?;
//! let cache = Arc::new(BreachCache::new(config.breach.cache_capacity));
//! let orchestrator = SecurityCheckOrchestrator::new(config, Arc::new(client), cache);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let assessment = orchestrator.assess(&password, None).await;
//! println!("tier: {:?}", assessment.risk_tier);
//! for hint in &assessment.recommendations {
//!     println!("  - {hint}");
//! }
//! # Ok(())
//! # }
//! ```

// Internal modules
mod analyzer;
mod cache;
mod client;
mod config;
mod error;
mod orchestrator;
mod report;
mod risk;
mod sections;

// Public API
pub use analyzer::StrengthAnalyzer;
pub use cache::{BreachCache, CacheStats};
pub use client::{
    BreachProvider, PREFIX_LEN, RangeBreachClient, SuffixTable, hash_secret, parse_range_body,
};
pub use config::{AssessmentConfig, BreachConfig, StrengthConfig};
pub use error::ErrorKind;
pub use orchestrator::SecurityCheckOrchestrator;
pub use report::{
    BreachResult, ClassCounts, Requirements, RiskTier, SecurityAssessment, StrengthReport,
};
pub use risk::RiskEvaluator;
