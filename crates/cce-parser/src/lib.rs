//! CCE Parser - Tiered candidate extraction from provider text
//!
//! Turns an opaque provider response (natural language, fenced JSON,
//! numbered lists, anything) into zero or more untrusted
//! [`CandidateItem`]s:
//! - Tier 1: greedy JSON array extraction
//! - Tier 2: independent scan of brace-delimited objects
//! - Tier 3: heuristic structured-text extraction
//!
//! The first tier yielding at least one candidate wins. No tier errors
//! or panics for any input; failure is always the empty vector, and the
//! pipeline reports it as an explicit [`ParseOutcome::Empty`] rather
//! than an `Err` — "nothing extracted" is an expected outcome the
//! orchestrator answers with fallback content, not a fault.

#![warn(unreachable_pub)]

pub mod screen;
pub mod strategy;

pub use strategy::{JsonArrayStrategy, JsonObjectScanStrategy, StructuredTextStrategy};

use cce_domain::CandidateItem;

/// One extraction tier
///
/// Implementations must be total: any input yields a (possibly empty)
/// candidate list, never an error.
pub trait ExtractionStrategy: Send + Sync {
    /// Stable strategy name, reported in outcomes and logs
    fn name(&self) -> &'static str;

    /// Extract candidates from raw provider text
    fn extract(&self, text: &str) -> Vec<CandidateItem>;
}

/// Why a parse produced no candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// An off-topic marker phrase was found; all tiers were bypassed
    OffTopic(&'static str),
    /// Every tier ran and yielded zero candidates
    Unparseable,
}

/// Result of running the full parser pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// A tier produced at least one candidate
    Extracted {
        /// Name of the winning strategy
        strategy: &'static str,
        /// Candidates in response order, never empty
        items: Vec<CandidateItem>,
    },
    /// No tier produced anything usable
    Empty(EmptyReason),
}

impl ParseOutcome {
    /// Whether this outcome carries candidates
    #[inline]
    #[must_use]
    pub fn is_extracted(&self) -> bool {
        matches!(self, Self::Extracted { .. })
    }

    /// Consume the outcome, yielding its candidates (empty when none)
    #[must_use]
    pub fn into_items(self) -> Vec<CandidateItem> {
        match self {
            Self::Extracted { items, .. } => items,
            Self::Empty(_) => Vec::new(),
        }
    }
}

/// Tier-ordered parser pipeline
///
/// Strategies run in registration order; the first non-empty extraction
/// wins and later tiers do not run. Before any tier runs, the raw text
/// is screened for off-topic marker phrases (see [`screen`]).
pub struct ResponseParser {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl ResponseParser {
    /// Create an empty pipeline (no strategies registered)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Register a strategy as the next tier
    pub fn register<S: ExtractionStrategy + 'static>(&mut self, strategy: S) {
        self.strategies.push(Box::new(strategy));
    }

    /// Run the pipeline over raw provider text
    pub fn parse(&self, text: &str) -> ParseOutcome {
        if let Some(marker) = screen::off_topic_marker(text) {
            tracing::debug!("off-topic marker {:?} found, skipping extraction", marker);
            return ParseOutcome::Empty(EmptyReason::OffTopic(marker));
        }

        for strategy in &self.strategies {
            let items = strategy.extract(text);
            if !items.is_empty() {
                tracing::debug!(
                    "strategy {} extracted {} candidate(s)",
                    strategy.name(),
                    items.len()
                );
                return ParseOutcome::Extracted {
                    strategy: strategy.name(),
                    items,
                };
            }
        }

        ParseOutcome::Empty(EmptyReason::Unparseable)
    }

    /// Names of the registered strategies, in tier order
    #[must_use]
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        let mut parser = Self::new();
        parser.register(JsonArrayStrategy);
        parser.register(JsonObjectScanStrategy);
        parser.register(StructuredTextStrategy);
        parser
    }
}

impl std::fmt::Debug for ResponseParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseParser")
            .field("strategies", &self.strategy_names())
            .finish()
    }
}
