use leptos::prelude::*;

use crate::components::DharmaPage;
use crate::models::DharmaState;

/// Root application component that provides global context and mounts the page.
#[component]
pub fn App() -> impl IntoView {
    let state = DharmaState::new();

    // Provide context to all child components
    provide_context(state);

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-4 sm:p-6 lg:p-8 w-full">
            <header class="mb-12 text-center animate-fade-in">
                <h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold text-white font-philosopher leading-tight">
                    "Palavras do Dharma"
                </h1>
                <p class="mt-3 text-lg sm:text-xl text-gray-200 max-w-2xl mx-auto">
                    "Inspiração diária, diretamente do universo do Dharma."
                </p>
            </header>

            <DharmaPage />

            <footer class="mt-16 text-center text-gray-300 text-sm animate-fade-in">
                <p>{format!("© {year} Palavras do Dharma. Inspirado pelo Templo Zu Lai.")}</p>
            </footer>
        </div>
    }
}
