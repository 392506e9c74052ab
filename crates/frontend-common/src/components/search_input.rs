//! Debounced search box

use crate::config::AppConfig;
use gloo::timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchInputProps {
    /// Committed search text; the box resyncs when this changes
    pub value: AttrValue,
    pub on_search: Callback<String>,
    #[prop_or(AttrValue::Static("Search..."))]
    pub placeholder: AttrValue,
    #[prop_or(AppConfig::SEARCH_DEBOUNCE_MS)]
    pub debounce_ms: u32,
}

/// Whether a new committed value came from outside (navigation, reset)
/// rather than echoing what is already in the box. Committed values are
/// trimmed, so the echo of "john " is "john".
fn needs_resync(current: &str, committed: &str) -> bool {
    current.trim() != committed.trim()
}

/// Emits `on_search` after typing pauses, on Enter, or when cleared
#[function_component(SearchInput)]
pub fn search_input(props: &SearchInputProps) -> Html {
    let text = use_state(|| props.value.to_string());
    let timer = use_mut_ref(|| None::<Timeout>);

    {
        let text = text.clone();
        let timer = timer.clone();
        use_effect_with(props.value.clone(), move |value| {
            if needs_resync(&text, value) {
                timer.borrow_mut().take();
                text.set(value.to_string());
            }
        });
    }

    let on_input = {
        let text = text.clone();
        let timer = timer.clone();
        let on_search = props.on_search.clone();
        let delay = props.debounce_ms;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            text.set(value.clone());
            let on_search = on_search.clone();
            *timer.borrow_mut() = Some(Timeout::new(delay, move || on_search.emit(value)));
        })
    };

    let on_keydown = {
        let text = text.clone();
        let timer = timer.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                timer.borrow_mut().take();
                on_search.emit((*text).clone());
            }
        })
    };

    let on_clear = {
        let text = text.clone();
        let timer = timer.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| {
            timer.borrow_mut().take();
            text.set(String::new());
            on_search.emit(String::new());
        })
    };

    html! {
        <div class="relative">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <svg class="h-5 w-5 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                        d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" />
                </svg>
            </div>
            <input
                type="search"
                class="block w-full pl-10 pr-8 py-2 border border-gray-300 dark:border-gray-600
                       rounded-md leading-5 bg-white dark:bg-gray-800 text-gray-900 dark:text-gray-100
                       placeholder-gray-500 focus:outline-none focus:placeholder-gray-400
                       focus:ring-1 focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                placeholder={props.placeholder.clone()}
                value={(*text).clone()}
                oninput={on_input}
                onkeydown={on_keydown}
            />
            if !text.is_empty() {
                <button
                    type="button"
                    onclick={on_clear}
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600"
                    aria-label="Clear search"
                >
                    {"×"}
                </button>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_echo_keeps_typed_text() {
        assert!(!needs_resync("john ", "john"));
        assert!(!needs_resync("  goa", "goa"));
        assert!(needs_resync("john", ""));
        assert!(needs_resync("", "kerala"));
        assert!(needs_resync("john d", "john"));
    }
}
