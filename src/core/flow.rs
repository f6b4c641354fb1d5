//! Generic submit/lookup state machine shared by the CEP and CNPJ flows.
//!
//! A `FlowController<K>` owns the presentation state for one lookup kind and
//! publishes it through a `tokio::sync::watch` channel. `submit` is the single
//! inbound action: normalize, validate, fetch, classify, publish. At most one
//! submission per controller is in flight; extra calls return
//! `SubmitOutcome::Ignored` without touching state.

use crate::core::{ConfigProvider, JsonFetcher, LookupKind, Mapped, Notifier, PresentationState};
use crate::domain::model::FlowPhase;
use crate::utils::error::ConsultaError;
use crate::utils::validation::{has_expected_digits, normalize_digits, ID_PLACEHOLDER};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Title of every alert raised by a flow.
pub const ALERT_TITLE: &str = "Erro";

#[derive(Debug)]
pub enum SubmitOutcome<E> {
    /// A submission was already in flight.
    Ignored,
    /// Input failed validation; no request was made.
    Rejected(ConsultaError),
    Found(E),
    /// Transport or domain error.
    Failed(ConsultaError),
}

impl<E> SubmitOutcome<E> {
    pub fn found(&self) -> Option<&E> {
        match self {
            SubmitOutcome::Found(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ConsultaError> {
        match self {
            SubmitOutcome::Rejected(e) | SubmitOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

pub struct FlowController<K: LookupKind, F: JsonFetcher> {
    fetcher: F,
    notifier: Arc<dyn Notifier>,
    endpoint: String,
    state: watch::Sender<PresentationState<K::Entity>>,
    in_flight: AtomicBool,
    _kind: PhantomData<fn() -> K>,
}

/// Holds the re-entrancy flag for one submission. `finish` publishes the
/// terminal state and clears the flag before watchers are notified. Dropping
/// an unfinished guard (rejected input, abandoned future) clears both.
struct InFlightGuard<'a, E> {
    flag: &'a AtomicBool,
    state: &'a watch::Sender<PresentationState<E>>,
    armed: bool,
}

impl<'a, E> InFlightGuard<'a, E> {
    fn new(flag: &'a AtomicBool, state: &'a watch::Sender<PresentationState<E>>) -> Self {
        Self {
            flag,
            state,
            armed: true,
        }
    }

    fn finish(mut self, phase: FlowPhase, result: Option<E>) {
        let flag = self.flag;
        self.state.send_modify(|s| {
            s.phase = phase;
            s.loading = false;
            s.result = result;
            flag.store(false, Ordering::Release);
        });
        self.armed = false;
    }
}

impl<E> Drop for InFlightGuard<'_, E> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let flag = self.flag;
        self.state.send_if_modified(|s| {
            flag.store(false, Ordering::Release);
            if s.loading {
                s.loading = false;
                s.phase = FlowPhase::Idle;
                true
            } else {
                false
            }
        });
    }
}

impl<K: LookupKind, F: JsonFetcher> FlowController<K, F> {
    /// Controller using the kind's built-in endpoint.
    pub fn new(fetcher: F, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_endpoint(fetcher, notifier, K::DEFAULT_ENDPOINT)
    }

    /// `endpoint` is a URL template containing `{id}`.
    pub fn with_endpoint(fetcher: F, notifier: Arc<dyn Notifier>, endpoint: &str) -> Self {
        let (state, _) = watch::channel(PresentationState::default());
        Self {
            fetcher,
            notifier,
            endpoint: endpoint.to_string(),
            state,
            in_flight: AtomicBool::new(false),
            _kind: PhantomData,
        }
    }

    /// Controller using the endpoint configured for this kind.
    pub fn from_config(fetcher: F, notifier: Arc<dyn Notifier>, config: &dyn ConfigProvider) -> Self {
        Self::with_endpoint(fetcher, notifier, K::endpoint(config))
    }

    pub fn endpoint_for(&self, id: &str) -> String {
        self.endpoint.replace(ID_PLACEHOLDER, id)
    }

    /// Snapshot of the current presentation state.
    pub fn state(&self) -> PresentationState<K::Entity> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PresentationState<K::Entity>> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub async fn submit(&self, raw: &str) -> SubmitOutcome<K::Entity> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("{} lookup already in flight, ignoring submit", K::NAME);
            return SubmitOutcome::Ignored;
        }
        let guard = InFlightGuard::new(&self.in_flight, &self.state);

        let id = normalize_digits(raw);
        if !has_expected_digits(&id, K::DIGITS) {
            tracing::debug!("rejected {} input {:?}", K::NAME, raw);
            self.notifier.alert(ALERT_TITLE, K::INVALID_INPUT_MESSAGE);
            return SubmitOutcome::Rejected(ConsultaError::Validation {
                kind: K::NAME,
                expected: K::DIGITS,
                actual: id,
            });
        }

        tracing::debug!("{} flow -> Submitting ({})", K::NAME, id);
        self.state.send_modify(|s| {
            s.phase = FlowPhase::Submitting;
            s.loading = true;
        });

        let url = self.endpoint_for(&id);
        let error = match self.fetcher.get_json(&url).await {
            Ok(body) => match K::classify(&body) {
                Mapped::Found(entity) => {
                    tracing::info!("{} {} found", K::NAME, id);
                    tracing::debug!("{} flow -> Succeeded", K::NAME);
                    guard.finish(FlowPhase::Succeeded, Some(entity.clone()));
                    return SubmitOutcome::Found(entity);
                }
                Mapped::DomainError(message) => {
                    tracing::info!("{} {} not available: {}", K::NAME, id, message);
                    self.notifier.alert(ALERT_TITLE, &message);
                    ConsultaError::Domain { message }
                }
            },
            Err(e) => {
                tracing::warn!("{} lookup for {} failed: {}", K::NAME, id, e);
                self.notifier.alert(ALERT_TITLE, K::TRANSPORT_ERROR_MESSAGE);
                e
            }
        };

        tracing::debug!("{} flow -> Failed", K::NAME);
        guard.finish(FlowPhase::Failed, None);
        SubmitOutcome::Failed(error)
    }
}
