use std::panic;
use leptos::logging::log;

/// Forwards panics to the browser console and adds context when the panic
/// comes from touching a disposed reactive owner.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let console_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        console_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if is_owner_disposal(&message) {
            log!("[PANIC] Reactive owner disposal detected. Usually one of:");
            log!("[PANIC] 1. The reviews page unmounted before its fetch completed");
            log!("[PANIC] 2. A signal was written from a completion that skipped the owner guard");
        }
    }));
}

fn is_owner_disposal(message: &str) -> bool {
    message.contains("OwnerDisposed")
}

/// Call once from the WASM entry point, before mounting.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
