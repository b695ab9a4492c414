use std::time::Duration;

use leptos::prelude::*;

use crate::models::{DharmaState, ThemeColor};

const DEFAULT_DISMISS_AFTER_MS: u64 = 3000;

fn notice_class(color: ThemeColor) -> String {
    format!(
        "fixed top-4 left-1/2 -translate-x-1/2 px-4 py-2 rounded-md shadow-lg animate-fade-in {}",
        color.classes()
    )
}

/// Transient, non-modal notice (e.g. a share link that failed to open).
/// Each new message restarts the dismiss countdown.
#[component]
pub fn NotificationBar(
    #[prop(optional)] color: ThemeColor,
    #[prop(optional)] dismiss_after_ms: Option<u64>,
) -> impl IntoView {
    let state = use_context::<DharmaState>().expect("DharmaState context missing");
    let delay = Duration::from_millis(dismiss_after_ms.unwrap_or(DEFAULT_DISMISS_AFTER_MS));
    let pending = StoredValue::new(None::<TimeoutHandle>);

    let cancel_pending = move || {
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        cancel_pending();
        if state.notification.with(Option::is_none) {
            return;
        }

        match set_timeout_with_handle(move || state.clear_notification(), delay) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(e) => {
                web_sys::console::warn_1(&format!("Failed to schedule notice dismissal: {e:?}").into());
            }
        }
    });

    on_cleanup(cancel_pending);

    let class = notice_class(color);

    view! {
        <Show when=move || state.notification.with(Option::is_some)>
            <div class=class.clone() role="status">
                {move || state.notification.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_class_uses_theme_color() {
        let class = notice_class(ThemeColor::Rose);
        assert!(class.starts_with("fixed top-4"));
        assert!(class.contains("bg-rose-600"));
        assert!(!class.contains("indigo"));
    }
}
