//! Transient notifications
//!
//! One message at a time; a new message replaces the current one and
//! restarts the timer.

use crate::config::AppConfig;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnackbarKind {
    Success,
    Error,
    Info,
}

impl SnackbarKind {
    const fn classes(self) -> &'static str {
        match self {
            Self::Success => "bg-green-600 text-white",
            Self::Error => "bg-red-600 text-white",
            Self::Info => "bg-gray-800 text-white dark:bg-gray-700",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Message {
    text: String,
    kind: SnackbarKind,
}

/// Handle for showing notifications
#[derive(Clone, PartialEq)]
pub struct Snackbar {
    show: Callback<(String, SnackbarKind)>,
}

impl Snackbar {
    pub fn success(&self, text: impl Into<String>) {
        self.show.emit((text.into(), SnackbarKind::Success));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show.emit((text.into(), SnackbarKind::Error));
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show.emit((text.into(), SnackbarKind::Info));
    }
}

#[derive(Properties, PartialEq)]
pub struct SnackbarProviderProps {
    pub children: Children,
}

#[function_component(SnackbarProvider)]
pub fn snackbar_provider(props: &SnackbarProviderProps) -> Html {
    let current = use_state(|| None::<Message>);
    let timer = use_mut_ref(|| None::<Timeout>);

    let show = {
        let current = current.clone();
        let timer = timer.clone();
        Callback::from(move |(text, kind): (String, SnackbarKind)| {
            current.set(Some(Message { text, kind }));
            let current = current.clone();
            // Replacing the handle cancels the previous timeout
            *timer.borrow_mut() = Some(Timeout::new(AppConfig::SNACKBAR_DURATION_MS, move || {
                current.set(None);
            }));
        })
    };

    let on_close = {
        let current = current.clone();
        let timer = timer.clone();
        Callback::from(move |_: MouseEvent| {
            timer.borrow_mut().take();
            current.set(None);
        })
    };

    let handle = use_memo((), move |_| Snackbar { show });

    html! {
        <ContextProvider<Snackbar> context={(*handle).clone()}>
            {props.children.clone()}
            if let Some(message) = &*current {
                <div class="fixed bottom-4 right-4 z-50 max-w-sm" role="status" aria-live="polite">
                    <div class={classes!(
                        "flex", "items-start", "gap-3", "px-4", "py-3", "rounded-lg", "shadow-lg", "text-sm",
                        message.kind.classes()
                    )}>
                        <span class="flex-1">{&message.text}</span>
                        <button type="button" onclick={on_close} class="opacity-80 hover:opacity-100" aria-label="Dismiss">
                            {"×"}
                        </button>
                    </div>
                </div>
            }
        </ContextProvider<Snackbar>>
    }
}

#[hook]
pub fn use_snackbar() -> Snackbar {
    use_context::<Snackbar>()
        .expect("Snackbar not found. Make sure to wrap your component with SnackbarProvider")
}
