//! Debug tracing for grammars under development
//!
//! Wrap interesting parsers with [`trace`] and hand them a shared [`Tracer`].
//! The tracer only holds an on/off switch and the current nesting depth, so
//! separate parses can use separate tracers without interfering.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use log::{debug, trace as log_trace};

use super::combinators::{BoxedParser, Parser, Value};
use super::state::Token;

#[derive(Debug, Clone, Default)]
pub struct Tracer {
    enabled: Arc<AtomicBool>,
    depth: Arc<AtomicUsize>,
}

impl Tracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled() -> Self {
        let tracer = Self::new();
        tracer.enable();
        tracer
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Relaxed)
    }

    /// Runs `f` with tracing switched on, then switches it off and resets the
    /// depth.
    pub fn with<F: FnOnce() -> O, O>(&self, f: F) -> O {
        self.enable();
        self.depth.store(0, Ordering::Relaxed);
        let result = f();
        self.disable();
        self.depth.store(0, Ordering::Relaxed);
        result
    }
}

/// Logs entry into and exit from `p` under `name` while `tracer` is enabled.
pub fn trace<T: Token, R: Value>(
    name: impl Into<String>,
    p: BoxedParser<T, R>,
    tracer: &Tracer,
) -> BoxedParser<T, R> {
    let name = name.into();
    let tracer = tracer.clone();
    BoxedParser::new(move |input| {
        let depth = tracer.depth.fetch_add(1, Ordering::Relaxed);
        if tracer.is_enabled() {
            log_trace!("[{depth:<3}] {name} at {}", input.position());
        }
        let out = p.parse(input);
        tracer.depth.fetch_sub(1, Ordering::Relaxed);
        if tracer.is_enabled() {
            if out.success {
                let stops: Vec<usize> = out.candidates.iter().map(|c| c.rest.offset()).collect();
                debug!(
                    "[{depth:<3}] {name} matched {} candidate(s), stopping at {stops:?}",
                    out.candidates.len()
                );
            } else if let Some(error) = &out.error {
                debug!("[{depth:<3}] {name} failed at {}: {error}", error.position);
            }
        }
        out
    })
}
