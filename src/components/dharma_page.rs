use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Button, DharmaCard, NotificationBar};
use crate::ipc;
use crate::models::{DharmaState, FetchState, PageLayout, Panel, ThemeColor};

/// Main content area: owns the fetch lifecycle and picks what to render.
#[component]
pub fn DharmaPage() -> impl IntoView {
    let state = use_context::<DharmaState>().expect("DharmaState context missing");

    // Fetch the first word on mount - run only once per component instance
    let fetch_setup = std::cell::Cell::new(false);
    Effect::new(move |_| {
        if !fetch_setup.get() {
            fetch_setup.set(true);
            trigger_fetch(state);
        }
    });

    let fetch_state = Memo::new(move |_| state.fetch_state());
    let busy = Signal::derive(move || Some(fetch_state.with(FetchState::is_loading)));
    let on_fetch = Callback::new(move |_: MouseEvent| trigger_fetch(state));

    let layout = Memo::new(move |_| fetch_state.with(PageLayout::for_state));

    view! {
        <main class="flex flex-col items-center justify-center w-full">
            <NotificationBar color=ThemeColor::Rose />
            {move || match layout.get().panel {
                Panel::Loading => view! {
                    <div class="flex flex-col items-center justify-center text-center mb-8 animate-fade-in">
                        <p class="text-xl text-purple-200 font-medium animate-pulse">
                            "Meditando para encontrar sua palavra..."
                        </p>
                    </div>
                }
                .into_any(),
                Panel::Error(message) => view! {
                    <div
                        class="bg-rose-100 border border-rose-400 text-rose-700 px-6 py-4 rounded-md mb-8 max-w-lg text-center animate-fade-in"
                        role="alert"
                    >
                        <p class="font-semibold text-lg mb-2">"Erro:"</p>
                        <p>{message}</p>
                        <Button on_click=on_fetch color=ThemeColor::Rose extra_class="mt-4">
                            "Tentar Novamente"
                        </Button>
                    </div>
                }
                .into_any(),
                Panel::Word(word) => view! { <DharmaCard word=word /> }.into_any(),
                Panel::CallToAction => view! {
                    <div class="flex flex-col items-center justify-center p-8 bg-white rounded-lg shadow-md max-w-md text-center animate-fade-in">
                        <p class="text-lg text-gray-600 mb-6">
                            "Clique para pegar sua Palavra do Dharma do dia."
                        </p>
                        <Button
                            on_click=on_fetch
                            loading=busy
                            color=ThemeColor::Purple
                        >
                            "Pegar Palavra do Dharma"
                        </Button>
                    </div>
                }
                .into_any(),
            }}
            <Show when=move || layout.with(|l| l.fetch_another)>
                <div class="mt-12 w-full max-w-lg animate-fade-in">
                    <Button
                        on_click=on_fetch
                        loading=busy
                        color=ThemeColor::Indigo
                        extra_class="w-full"
                    >
                        "Pegar Outra Palavra"
                    </Button>
                </div>
            </Show>
        </main>
    }
}

/// Start a fetch: clear the current word or error, enter loading, and
/// settle the state when the backend answers.
fn trigger_fetch(state: DharmaState) {
    let ticket = state.begin_fetch();

    spawn_local(async move {
        let outcome = ipc::fetch_dharma_word().await;
        if let Err(error_msg) = &outcome {
            // Detail stays in the console; the user sees the generic message
            web_sys::console::error_1(&format!("Failed to fetch Dharma word: {error_msg}").into());
        }

        if !state.finish_fetch(ticket, outcome) {
            web_sys::console::warn_1(&"Discarded response from a superseded fetch".into());
        }
    });
}
