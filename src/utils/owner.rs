use leptos::logging::log;
use leptos::Owner;

/// Runs `f` under `owner` if the component that captured it is still mounted.
/// Async completions that land after unmount are logged and dropped.
pub fn with_live_owner<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        log!("[OWNER] No reactive owner captured for {}", log_context);
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(result) => Some(result),
        Err(err) => {
            log!("[OWNER] {} completed after unmount: {:?}", log_context, err);
            None
        }
    }
}
