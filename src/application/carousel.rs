// src/application/carousel.rs
use std::{
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tokio::{
    runtime::Handle,
    sync::watch,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

use crate::{
    application::{
        dto::{CarouselSnapshot, HeroDto, SlideDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::carousel::{CarouselState, SlideDeck, TransitionOutcome},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub autoplay_interval: Duration,
    pub transition: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            autoplay_interval: Duration::from_millis(5000),
            transition: Duration::from_millis(600),
        }
    }
}

struct Shared {
    deck: SlideDeck,
    timing: CarouselTiming,
    runtime: Handle,
    // `current_index` and `transitioning` change together under this lock; the teardown
    // flag and the completion handle are only touched while it is held.
    state: Mutex<CarouselState>,
    completion: Mutex<Option<JoinHandle<()>>>,
    torn_down: AtomicBool,
    snapshots: watch::Sender<CarouselSnapshot>,
}

impl Shared {
    fn lock_state(&self) -> MutexGuard<'_, CarouselState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_completion(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.completion.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &CarouselState) {
        self.snapshots.send_replace(CarouselSnapshot::from(state));
    }

    /// Resolve the target and start the transition under one lock, so the target is
    /// always computed from the state the transition starts from.
    fn navigate(
        self: &Arc<Self>,
        target: impl FnOnce(&CarouselState) -> usize,
    ) -> TransitionOutcome {
        let mut state = self.lock_state();
        if self.torn_down.load(Ordering::Acquire) {
            return TransitionOutcome::Halted;
        }

        let index = target(&state);
        let outcome = state.begin(index);
        if let TransitionOutcome::Started { from, to } = outcome {
            self.publish(&state);
            tracing::debug!(from, to, "hero slide transition started");

            let shared = Arc::clone(self);
            let delay = self.timing.transition;
            let handle = self.runtime.spawn(async move {
                tokio::time::sleep(delay).await;
                shared.complete_transition();
            });
            *self.lock_completion() = Some(handle);
        }
        outcome
    }

    fn go_to(self: &Arc<Self>, index: usize) -> TransitionOutcome {
        self.navigate(|_| index)
    }

    fn next(self: &Arc<Self>) -> TransitionOutcome {
        self.navigate(CarouselState::next_index)
    }

    fn prev(self: &Arc<Self>) -> TransitionOutcome {
        self.navigate(CarouselState::prev_index)
    }

    fn complete_transition(&self) {
        let mut state = self.lock_state();
        if self.torn_down.load(Ordering::Acquire) {
            return;
        }
        state.complete();
        self.publish(&state);
    }
}

/// Drives the storefront hero carousel.
///
/// Autoplay calls [`next`](Self::next) on a fixed interval. Manual and automatic moves
/// share one guard: while a transition is in flight every further move is dropped, not
/// queued, and autoplay keeps its own cadence regardless of manual navigation.
/// Tearing the controller down cancels both the autoplay ticker and any pending
/// transition completion.
pub struct SlideRotationController {
    shared: Arc<Shared>,
    autoplay: Mutex<Option<JoinHandle<()>>>,
}

impl SlideRotationController {
    /// Build the controller and start autoplay on the current tokio runtime.
    pub fn start(deck: SlideDeck, timing: CarouselTiming) -> ApplicationResult<Self> {
        let runtime = Handle::try_current().map_err(|err| {
            ApplicationError::infrastructure(format!("carousel needs a tokio runtime: {err}"))
        })?;
        let state = CarouselState::new(deck.len())?;
        if timing.autoplay_interval.is_zero() || timing.transition.is_zero() {
            return Err(ApplicationError::validation(
                "carousel timings must be non-zero",
            ));
        }

        let (snapshots, _) = watch::channel(CarouselSnapshot::from(&state));
        let shared = Arc::new(Shared {
            deck,
            timing,
            runtime,
            state: Mutex::new(state),
            completion: Mutex::new(None),
            torn_down: AtomicBool::new(false),
            snapshots,
        });

        let ticker_shared = Arc::clone(&shared);
        let period = timing.autoplay_interval;
        let autoplay = shared.runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                ticker_shared.next();
            }
        });

        tracing::info!(
            slides = shared.deck.len(),
            autoplay_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
            "hero carousel started"
        );

        Ok(Self {
            shared,
            autoplay: Mutex::new(Some(autoplay)),
        })
    }

    pub fn go_to(&self, index: usize) -> TransitionOutcome {
        self.shared.go_to(index)
    }

    pub fn next(&self) -> TransitionOutcome {
        self.shared.next()
    }

    pub fn prev(&self) -> TransitionOutcome {
        self.shared.prev()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot::from(&*self.shared.lock_state())
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.shared.snapshots.subscribe()
    }

    pub fn hero(&self) -> HeroDto {
        let snapshot = self.snapshot();
        let slides: Vec<SlideDto> = self.shared.deck.slides().iter().map(SlideDto::from).collect();
        let current = slides[snapshot.current_index].clone();
        HeroDto {
            slides,
            current_index: snapshot.current_index,
            transitioning: snapshot.transitioning,
            current,
        }
    }

    /// Cancel autoplay and any pending completion. Idempotent.
    pub fn shutdown(&self) {
        {
            let _state = self.shared.lock_state();
            if self.shared.torn_down.swap(true, Ordering::AcqRel) {
                return;
            }
            if let Some(handle) = self.shared.lock_completion().take() {
                handle.abort();
            }
        }

        let autoplay = self
            .autoplay
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = autoplay {
            handle.abort();
        }
        tracing::info!("hero carousel stopped");
    }
}

impl Drop for SlideRotationController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
