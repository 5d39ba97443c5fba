//! Transient success/error notifications.
//!
//! One toast is visible at a time; each carries a fixed display duration
//! and is dismissed automatically (web side) or by clicking it.

use dioxus::prelude::*;

/// Display durations, in milliseconds.
pub const SUCCESS_MS: u32 = 5_000;
pub const ERROR_MS: u32 = 5_000;
pub const VALIDATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
    pub duration_ms: u32,
}

/// Toast state shared through context.
#[derive(Clone, Copy)]
pub struct ToastState {
    current: Signal<Option<ToastMessage>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.show(ToastKind::Success, text, SUCCESS_MS);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.show(ToastKind::Error, text, ERROR_MS);
    }

    /// Local validation rejections are shorter-lived than server errors.
    pub fn validation_error(&mut self, text: impl Into<String>) {
        self.show(ToastKind::Error, text, VALIDATION_MS);
    }

    pub fn show(&mut self, kind: ToastKind, text: impl Into<String>, duration_ms: u32) {
        let id = self.next_id.peek().wrapping_add(1);
        self.next_id.set(id);
        self.current.set(Some(ToastMessage {
            id,
            kind,
            text: text.into(),
            duration_ms,
        }));
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }

    /// Dismiss only if the given toast is still the one on screen, so a
    /// stale timer never hides a newer message.
    pub fn dismiss_if(&mut self, id: u64) {
        if self.current.peek().as_ref().map(|t| t.id) == Some(id) {
            self.current.set(None);
        }
    }
}

/// Hook to access the toast state.
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}

/// Renders the current toast in the top-right corner.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let current = toasts.current;

    // Schedule auto-dismissal whenever a new toast appears.
    use_effect(move || {
        let Some(toast) = current() else { return };

        #[cfg(feature = "web")]
        {
            let mut state = toasts;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(toast.duration_ms).await;
                state.dismiss_if(toast.id);
            });
        }

        #[cfg(not(feature = "web"))]
        let _ = toast;
    });

    rsx! {
        if let Some(toast) = current() {
            div {
                class: if toast.kind == ToastKind::Success {
                    "fixed top-4 right-4 z-50 max-w-sm w-full p-4 rounded-lg shadow-lg border cursor-pointer bg-green-50 border-green-200 text-green-800"
                } else {
                    "fixed top-4 right-4 z-50 max-w-sm w-full p-4 rounded-lg shadow-lg border cursor-pointer bg-red-50 border-red-200 text-red-700"
                },
                onclick: move |_| toasts.dismiss(),
                "{toast.text}"
            }
        }
    }
}
