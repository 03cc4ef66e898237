//! Security check orchestrator - the single entry point for callers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use secrecy::SecretString;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::analyzer::StrengthAnalyzer;
use crate::cache::BreachCache;
use crate::client::{BreachProvider, SuffixTable, hash_secret};
use crate::config::AssessmentConfig;
use crate::error::ErrorKind;
use crate::report::{BreachResult, SecurityAssessment};
use crate::risk::RiskEvaluator;

/// Runs the full assessment pipeline: local strength analysis, cached
/// k-anonymity breach lookup under a hard timeout, then risk evaluation.
///
/// All collaborators are passed in explicitly; there is no ambient global
/// state. The orchestrator is safe to share across concurrent callers.
pub struct SecurityCheckOrchestrator {
    config: AssessmentConfig,
    analyzer: StrengthAnalyzer,
    evaluator: RiskEvaluator,
    cache: Arc<BreachCache>,
    provider: Arc<dyn BreachProvider>,
    /// Per-prefix locks collapsing concurrent cache misses into one fetch.
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SecurityCheckOrchestrator {
    pub fn new(
        config: AssessmentConfig,
        provider: Arc<dyn BreachProvider>,
        cache: Arc<BreachCache>,
    ) -> Self {
        let analyzer = StrengthAnalyzer::new(config.strength.clone());
        let evaluator = RiskEvaluator::new(config.strength.clone());
        Self {
            config,
            analyzer,
            evaluator,
            cache,
            provider,
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Assesses a candidate secret.
    ///
    /// Always terminates: the breach path is bounded by the configured
    /// timeout and any failure there is folded into the result instead of
    /// propagating. An optional cancellation token aborts the in-flight
    /// lookup; the partial strength work is simply discarded.
    pub async fn assess(
        &self,
        secret: &SecretString,
        token: Option<CancellationToken>,
    ) -> SecurityAssessment {
        let strength = self.analyzer.analyze(secret);
        let breach = self.check_breach(secret, token).await;
        let (risk_tier, recommendations) = self.evaluator.evaluate(&strength, &breach);
        debug!(
            score = strength.score,
            tier = ?risk_tier,
            cached = breach.served_from_cache,
            "assessment complete"
        );
        SecurityAssessment {
            strength,
            breach,
            risk_tier,
            recommendations,
        }
    }

    async fn check_breach(
        &self,
        secret: &SecretString,
        token: Option<CancellationToken>,
    ) -> BreachResult {
        let started = Instant::now();
        let (prefix, suffix) = hash_secret(secret);

        if let Some(table) = self.cache.get(&prefix) {
            let count = table.get(&suffix).copied().unwrap_or(0);
            return BreachResult::found(count, elapsed_ms(started), true);
        }

        let key_lock = {
            let mut inflight = self.inflight.lock().await;
            inflight
                .entry(prefix.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        let _guard = key_lock.lock().await;

        // Another waiter may have filled the cache while we queued.
        if let Some(table) = self.cache.get(&prefix) {
            let count = table.get(&suffix).copied().unwrap_or(0);
            return BreachResult::found(count, elapsed_ms(started), true);
        }

        let outcome = self.fetch_with_deadline(&prefix, token).await;

        // Fill the cache before releasing the per-prefix lock so queued
        // waiters find the entry on their re-check.
        let result = match outcome {
            Ok(table) => {
                let count = table.get(&suffix).copied().unwrap_or(0);
                self.cache
                    .put(&prefix, table, self.config.breach.cache_ttl);
                BreachResult::found(count, elapsed_ms(started), false)
            }
            Err(kind) => {
                warn!(error = %kind, "breach lookup failed, reporting unknown status");
                BreachResult::failed(kind, elapsed_ms(started))
            }
        };

        {
            let mut inflight = self.inflight.lock().await;
            inflight.remove(&prefix);
        }

        result
    }

    async fn fetch_with_deadline(
        &self,
        prefix: &str,
        token: Option<CancellationToken>,
    ) -> Result<SuffixTable, ErrorKind> {
        let timeout = self.config.breach.timeout;
        let fetch = tokio::time::timeout(timeout, self.provider.fetch_range(prefix));
        match token {
            Some(token) => tokio::select! {
                _ = token.cancelled() => Err(ErrorKind::Cancelled),
                outcome = fetch => outcome.map_err(|_| ErrorKind::Timeout(timeout))?,
            },
            None => fetch.await.map_err(|_| ErrorKind::Timeout(timeout))?,
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
