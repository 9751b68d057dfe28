use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::debug;

use super::platforms::{Spotify, YouTube};
use super::validator::UrlValidator;
use crate::extract::extract_urls;
use crate::media::{Classification, Induction};
use crate::record::{ClassifiedRecord, UrlRecord, UrlSource};
use crate::resolver::RedirectResolver;

/// An ordered set of validators.
///
/// Validators are consulted in registration order; the first full
/// classification wins.
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: Vec<Arc<dyn UrlValidator>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in platforms, video platform first.
    pub fn with_defaults(resolver: Arc<dyn RedirectResolver>) -> Self {
        let mut registry = Self::new();
        registry
            .register(Arc::new(YouTube::new(resolver)))
            .register(Arc::new(Spotify::new()));
        registry
    }

    pub fn register(&mut self, validator: Arc<dyn UrlValidator>) -> &mut Self {
        self.validators.push(validator);
        self
    }

    pub fn validators(&self) -> &[Arc<dyn UrlValidator>] {
        &self.validators
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Runs every validator in order over `source`.
    ///
    /// Returns the first `Classified` outcome. Failing that, the first
    /// `Unresolved` one, so callers can tell "recognized but undetermined"
    /// from "unrecognized". Unresolved outcomes never stop later validators
    /// from being tried.
    pub async fn dispatch<S>(&self, source: &S) -> Induction
    where
        S: UrlSource + Sync + ?Sized,
    {
        let Some(url) = source.url_str() else {
            return Induction::Unrecognized;
        };

        let mut fallback = Induction::Unrecognized;
        for validator in &self.validators {
            match validator.induce_type(url).await {
                Induction::Classified(classification) => {
                    debug!(url = %url, validator = validator.name(), %classification, "Classified");
                    return Induction::Classified(classification);
                }
                unresolved @ Induction::Unresolved { .. } => {
                    debug!(url = %url, validator = validator.name(), "Recognized, track type undetermined");
                    if !fallback.is_recognized() {
                        fallback = unresolved;
                    }
                }
                Induction::Unrecognized => {}
            }
        }
        fallback
    }

    /// The classification of `source`, or `None` when no validator fully
    /// classifies it. Recognized-but-undetermined URLs are `None` as well.
    pub async fn classify<S>(&self, source: &S) -> Option<Classification>
    where
        S: UrlSource + Sync + ?Sized,
    {
        self.dispatch(source).await.classification()
    }

    /// Dispatches a batch with up to `concurrency` URLs in flight.
    ///
    /// Every record comes back, in input order, paired with its outcome.
    pub async fn dispatch_records<I>(
        &self,
        records: I,
        concurrency: usize,
    ) -> Vec<(Induction, UrlRecord)>
    where
        I: IntoIterator<Item = UrlRecord>,
    {
        stream::iter(records)
            .map(|record| async move {
                let induction = self.dispatch(&record).await;
                (induction, record)
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    /// Classifies a batch with up to `concurrency` URLs in flight.
    ///
    /// Output keeps input order; records that do not classify are dropped.
    pub async fn classify_records<I>(&self, records: I, concurrency: usize) -> Vec<ClassifiedRecord>
    where
        I: IntoIterator<Item = UrlRecord>,
    {
        self.dispatch_records(records, concurrency)
            .await
            .into_iter()
            .filter_map(|(induction, record)| {
                induction
                    .classification()
                    .map(|classification| ClassifiedRecord {
                        classification,
                        record,
                    })
            })
            .collect()
    }

    /// Extracts URLs from `text` and dispatches each of them, keeping every
    /// outcome in order of appearance.
    pub async fn dispatch_text(&self, text: &str, concurrency: usize) -> Vec<(Induction, String)> {
        stream::iter(extract_urls(text))
            .map(|url| async move { (self.dispatch(url).await, url.to_owned()) })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    /// Extracts URLs from `text` and classifies them, dropping the ones that
    /// do not classify.
    pub async fn classify_text(
        &self,
        text: &str,
        concurrency: usize,
    ) -> Vec<(Classification, String)> {
        self.dispatch_text(text, concurrency)
            .await
            .into_iter()
            .filter_map(|(induction, url)| induction.classification().map(|c| (c, url)))
            .collect()
    }
}
