use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::models::ThemeColor;

const BASE_STYLES: &str = "inline-flex items-center justify-center px-6 py-3 border border-transparent \
     text-base font-medium rounded-md shadow-sm transition-all duration-300 \
     focus:outline-none focus:ring-2 focus:ring-offset-2 \
     disabled:opacity-60 disabled:cursor-not-allowed";

/// Styled button with a busy spinner.
///
/// Disabled while `loading` or when `disabled` is set.
#[component]
pub fn Button(
    #[prop(into)] on_click: Callback<MouseEvent>,
    #[prop(optional)] color: ThemeColor,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] extra_class: String,
    children: Children,
) -> impl IntoView {
    let is_loading = move || loading.get().unwrap_or(false);
    let is_disabled = move || is_loading() || disabled.get().unwrap_or(false);
    let class = button_class(color, &extra_class);

    view! {
        <button
            type="button"
            class=class
            prop:disabled=is_disabled
            on:click=move |ev| on_click.run(ev)
        >
            {move || is_loading().then(Spinner)}
            {children()}
        </button>
    }
}

fn button_class(color: ThemeColor, extra_class: &str) -> String {
    format!("{BASE_STYLES} {} {extra_class}", color.classes())
        .trim_end()
        .to_string()
}

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <svg
            class="animate-spin -ml-1 mr-3 h-5 w-5 text-white"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}
