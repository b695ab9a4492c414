use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::tachys::dom::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, Window};

use crate::components::Button;
use crate::ipc;
use crate::models::{DharmaState, ShareTarget, ThemeColor};

const COPY_SUCCESS_MESSAGE: &str = "Palavra do Dharma copiada para a área de transferência!";
const COPY_FAILURE_MESSAGE: &str = "Falha ao copiar. Por favor, tente novamente.";
const BUTTON_WIDTH: &str = "min-w-[120px] md:min-w-[150px]";

/// Text written to the clipboard: the share text, then the page URL
fn clipboard_payload(text: &str, url: &str) -> String {
    format!("{text}\n{url}")
}

/// Share actions: three external destinations plus copy-to-clipboard.
#[component]
pub fn ShareButtons(text: String, url: String) -> impl IntoView {
    let state = use_context::<DharmaState>().expect("DharmaState context missing");
    let payload = StoredValue::new((text, url));

    let share = move |target: ShareTarget| {
        let (text, url) = payload.get_value();
        open_share_link(state, target, text, url);
    };

    let copy = Callback::new(move |_: MouseEvent| {
        let (text, url) = payload.get_value();
        copy_to_clipboard(clipboard_payload(&text, &url));
    });

    view! {
        <div class="flex flex-wrap justify-center gap-4 mt-6">
            <Button
                on_click=Callback::new(move |_: MouseEvent| share(ShareTarget::WhatsApp))
                color=ThemeColor::Emerald
                extra_class=BUTTON_WIDTH
            >
                {ShareTarget::WhatsApp.label()}
            </Button>
            <Button
                on_click=Callback::new(move |_: MouseEvent| share(ShareTarget::Facebook))
                color=ThemeColor::Blue
                extra_class=BUTTON_WIDTH
            >
                {ShareTarget::Facebook.label()}
            </Button>
            <Button
                on_click=Callback::new(move |_: MouseEvent| share(ShareTarget::Twitter))
                color=ThemeColor::Indigo
                extra_class=BUTTON_WIDTH
            >
                {ShareTarget::Twitter.label()}
            </Button>
            <Button on_click=copy color=ThemeColor::Purple extra_class=BUTTON_WIDTH>
                "Copiar Link"
            </Button>
        </div>
    }
}

/// Open a share link through the backend; failures become a notification
fn open_share_link(state: DharmaState, target: ShareTarget, text: String, url: String) {
    spawn_local(async move {
        if let Err(error_msg) = ipc::open_share_link(target, &text, &url).await {
            web_sys::console::error_1(
                &format!("open_share_link IPC failed for {}: {error_msg}", target.label()).into(),
            );
            state.show_notification(format!(
                "Não foi possível abrir o {}.",
                target.label()
            ));
        }
    });
}

/// Resolve `navigator.clipboard`, which is undefined outside secure contexts
fn clipboard(win: &Window) -> Result<Clipboard, JsValue> {
    let value = js_sys::Reflect::get(&win.navigator(), &JsValue::from_str("clipboard"))?;
    if value.is_undefined() || value.is_null() {
        return Err(JsValue::from_str("Clipboard API unavailable"));
    }
    Ok(value.unchecked_into())
}

async fn write_clipboard(win: &Window, payload: &str) -> Result<(), JsValue> {
    let promise = clipboard(win)?.write_text(payload);
    JsFuture::from(promise).await.map(|_| ())
}

/// Alert text for a finished copy attempt
fn copy_notice<E>(outcome: &Result<(), E>) -> &'static str {
    if outcome.is_ok() {
        COPY_SUCCESS_MESSAGE
    } else {
        COPY_FAILURE_MESSAGE
    }
}

/// Write `payload` to the clipboard and report the outcome with an alert
fn copy_to_clipboard(payload: String) {
    spawn_local(async move {
        let win = window();
        let outcome = write_clipboard(&win, &payload).await;
        if let Err(e) = &outcome {
            web_sys::console::error_1(&format!("Failed to copy text: {e:?}").into());
        }

        if let Err(e) = win.alert_with_message(copy_notice(&outcome)) {
            web_sys::console::warn_1(&format!("Failed to show alert: {e:?}").into());
        }
    });
}
