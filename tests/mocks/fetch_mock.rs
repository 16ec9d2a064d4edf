//! Replaces `window.fetch` so the reviews page can be mounted without a
//! listing server. Every call is recorded on `window.__fetchCalls`.

use wasm_bindgen::prelude::*;

/// Answers every request with `status` and `body`.
pub fn install_fetch_mock(status: u16, body: &str) -> bool {
    #[wasm_bindgen(inline_js = r#"
    export function install_fetch_mock(status, body) {
        if (!window.__realFetch) {
            window.__realFetch = window.fetch;
        }
        window.__fetchCalls = [];
        window.fetch = function(input) {
            const url = typeof input === "string" ? input : input.url;
            window.__fetchCalls.push(url);
            console.log("[MOCK FETCH] GET", url, "->", status);
            return Promise.resolve(new Response(body, {
                status: status,
                headers: { "Content-Type": "application/json" }
            }));
        };
        return true;
    }
    "#)]
    extern "C" {
        fn install_fetch_mock(status: u16, body: &str) -> bool;
    }

    install_fetch_mock(status, body)
}

/// Same as [`install_fetch_mock`], but the response arrives after `delay_ms`.
pub fn install_delayed_fetch_mock(delay_ms: u32, status: u16, body: &str) -> bool {
    #[wasm_bindgen(inline_js = r#"
    export function install_delayed_fetch_mock(delay_ms, status, body) {
        if (!window.__realFetch) {
            window.__realFetch = window.fetch;
        }
        window.__fetchCalls = [];
        window.fetch = function(input) {
            const url = typeof input === "string" ? input : input.url;
            window.__fetchCalls.push(url);
            console.log("[MOCK FETCH] GET", url, "-> delayed", delay_ms, "ms");
            return new Promise(resolve => setTimeout(() => resolve(new Response(body, { status: status })), delay_ms));
        };
        return true;
    }
    "#)]
    extern "C" {
        fn install_delayed_fetch_mock(delay_ms: u32, status: u16, body: &str) -> bool;
    }

    install_delayed_fetch_mock(delay_ms, status, body)
}

/// Rejects every request the way a refused connection does.
pub fn install_failing_fetch_mock() -> bool {
    #[wasm_bindgen(inline_js = r#"
    export function install_failing_fetch_mock() {
        if (!window.__realFetch) {
            window.__realFetch = window.fetch;
        }
        window.__fetchCalls = [];
        window.fetch = function(input) {
            const url = typeof input === "string" ? input : input.url;
            window.__fetchCalls.push(url);
            console.log("[MOCK FETCH] GET", url, "-> connection refused");
            return Promise.reject(new TypeError("Failed to fetch"));
        };
        return true;
    }
    "#)]
    extern "C" {
        fn install_failing_fetch_mock() -> bool;
    }

    install_failing_fetch_mock()
}

/// Leaves every request pending forever.
pub fn install_pending_fetch_mock() -> bool {
    #[wasm_bindgen(inline_js = r#"
    export function install_pending_fetch_mock() {
        if (!window.__realFetch) {
            window.__realFetch = window.fetch;
        }
        window.__fetchCalls = [];
        window.fetch = function(input) {
            const url = typeof input === "string" ? input : input.url;
            window.__fetchCalls.push(url);
            return new Promise(() => {});
        };
        return true;
    }
    "#)]
    extern "C" {
        fn install_pending_fetch_mock() -> bool;
    }

    install_pending_fetch_mock()
}

/// URLs requested since the last mock was installed, oldest first.
pub fn fetch_calls() -> Vec<String> {
    #[wasm_bindgen(inline_js = r#"
    export function fetch_calls() {
        return (window.__fetchCalls || []).join("\n");
    }
    "#)]
    extern "C" {
        fn fetch_calls() -> String;
    }

    fetch_calls()
        .lines()
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

/// Puts the browser's own `fetch` back.
pub fn restore_fetch() {
    #[wasm_bindgen(inline_js = r#"
    export function restore_fetch() {
        if (window.__realFetch) {
            window.fetch = window.__realFetch;
            delete window.__realFetch;
        }
        window.__fetchCalls = [];
    }
    "#)]
    extern "C" {
        fn restore_fetch();
    }

    restore_fetch()
}
