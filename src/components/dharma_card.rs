use leptos::prelude::*;
use leptos::tachys::dom::window;

use crate::components::ShareButtons;
use crate::models::DharmaWord;

/// Address of the current page, used as the shared URL
fn current_page_url() -> String {
    window().location().href().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Failed to read page URL: {e:?}").into());
        String::new()
    })
}

/// Renders a fetched Dharma word with its share actions.
#[component]
pub fn DharmaCard(word: DharmaWord) -> impl IntoView {
    let share_text = word.share_text();
    let share_url = current_page_url();
    let quoted = format!("\"{}\"", word.explanation);

    view! {
        <div class="bg-white p-8 rounded-lg shadow-xl text-center max-w-lg w-full animate-fade-in">
            <h2 class="text-xl md:text-2xl font-semibold text-purple-700 mb-4 tracking-wide">
                "Palavra do Dharma do Dia"
            </h2>
            <div class="border-t-2 border-b-2 border-purple-200 py-4 mb-6">
                <p class="text-4xl md:text-5xl font-bold text-indigo-800 leading-tight">
                    {word.title}
                </p>
            </div>
            <p class="text-base md:text-lg text-gray-700 mb-8 italic leading-relaxed">{quoted}</p>

            <ShareButtons text=share_text url=share_url />
        </div>
    }
}
