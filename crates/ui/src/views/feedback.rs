use std::time::Duration;

use dioxus::prelude::*;

/// How long a flash message stays on screen.
pub const FLASH_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "message success",
            Self::Error => "message error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    id: u64,
    pub kind: FlashKind,
    pub text: String,
}

/// Page-wide flash message and loading overlay.
#[derive(Clone, Copy)]
pub struct Feedback {
    flash: Signal<Option<Flash>>,
    next_id: Signal<u64>,
    loading: Signal<bool>,
}

impl Feedback {
    pub fn success(&self, text: impl Into<String>) {
        self.show(FlashKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(FlashKind::Error, text.into());
    }

    /// Replace the current message; it clears itself after `FLASH_DURATION`
    /// unless a newer one has taken its place.
    fn show(&self, kind: FlashKind, text: String) {
        let mut flash = self.flash;
        let mut next_id = self.next_id;
        let id = *next_id.peek() + 1;
        next_id.set(id);
        flash.set(Some(Flash { id, kind, text }));
        // Must outlive the page that raised it.
        let _ = spawn_forever(async move {
            tokio::time::sleep(FLASH_DURATION).await;
            if flash.peek().as_ref().is_some_and(|current| current.id == id) {
                flash.set(None);
            }
        });
    }

    #[must_use]
    pub fn current(&self) -> Option<Flash> {
        self.flash.read().clone()
    }

    pub fn set_loading(&self, loading: bool) {
        let mut signal = self.loading;
        signal.set(loading);
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        (self.loading)()
    }
}

/// Provide a `Feedback` to this component and its children.
pub fn use_feedback_provider() -> Feedback {
    let flash = use_signal(|| None::<Flash>);
    let next_id = use_signal(|| 0_u64);
    let loading = use_signal(|| false);
    use_context_provider(|| Feedback {
        flash,
        next_id,
        loading,
    })
}

#[component]
pub fn FlashMessage() -> Element {
    let feedback = use_context::<Feedback>();
    let Some(flash) = feedback.current() else {
        return rsx! {};
    };
    rsx! {
        div { class: flash.kind.class(), role: "status", "{flash.text}" }
    }
}

#[component]
pub fn LoadingOverlay() -> Element {
    let feedback = use_context::<Feedback>();
    if !feedback.is_loading() {
        return rsx! {};
    }
    rsx! {
        div { id: "loader", class: "loader",
            div { class: "spinner" }
            p { "Processing..." }
        }
    }
}
