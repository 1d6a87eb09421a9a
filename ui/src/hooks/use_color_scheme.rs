//=============================================================================
// File: src/hooks/use_color_scheme.rs
//=============================================================================

// Each platform gets its own way of watching `prefers-color-scheme`. All of
// them return a signal that starts at the system preference and follows it
// until the calling component unmounts, plus a flag telling whether that
// preference has been read yet.

use dioxus::prelude::*;
use site::ColorScheme;

#[derive(Clone, Copy)]
pub struct ColorSchemeState {
    pub scheme: Signal<ColorScheme>,
    /// False until the platform has reported once, or failed to. Markup
    /// rendered before then would show the fallback scheme for a frame.
    pub resolved: Signal<bool>,
}

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use self::webview::*;

/// # WebAssembly (WASM) Implementation
/// Talks to `window.matchMedia` through `web_sys`. The change listener is a
/// `Closure` owned by the [`Subscription`], so dropping the hook storage
/// removes it from the `MediaQueryList`.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use std::rc::Rc;

    use dioxus_logger::tracing::info;
    use dioxus_logger::tracing::warn;
    use dioxus::prelude::*;
    use site::theme;
    use site::theme::ColorSchemeSource;
    use site::theme::Subscription;
    use site::theme::DARK_SCHEME_QUERY;
    use site::ColorScheme;
    use site::ThemeError;
    use super::ColorSchemeState;
    use wasm_bindgen::prelude::*;
    use web_sys::MediaQueryList;
    use web_sys::MediaQueryListEvent;

    const CHANGE_EVENT: &str = "change";

    /// The browser's dark-scheme media query.
    pub struct MediaQuerySource {
        query: MediaQueryList,
    }

    impl MediaQuerySource {
        pub fn new() -> Result<Self, ThemeError> {
            let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
            let query = window
                .match_media(DARK_SCHEME_QUERY)
                .map_err(|e| ThemeError::Query {
                    query: DARK_SCHEME_QUERY,
                    reason: js_error(&e),
                })?
                .ok_or(ThemeError::Unsupported)?;
            Ok(Self { query })
        }
    }

    impl ColorSchemeSource for MediaQuerySource {
        fn current(&self) -> Result<ColorScheme, ThemeError> {
            Ok(ColorScheme::from_dark(self.query.matches()))
        }

        fn subscribe(
            &self,
            mut on_change: Box<dyn FnMut(ColorScheme)>,
        ) -> Result<Subscription, ThemeError> {
            let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
                move |event: MediaQueryListEvent| {
                    on_change(ColorScheme::from_dark(event.matches()));
                },
            );
            self.query
                .add_event_listener_with_callback(CHANGE_EVENT, listener.as_ref().unchecked_ref())
                .map_err(|e| ThemeError::Listen(js_error(&e)))?;

            let query = self.query.clone();
            Ok(Subscription::new(move || {
                if let Err(e) = query
                    .remove_event_listener_with_callback(CHANGE_EVENT, listener.as_ref().unchecked_ref())
                {
                    warn!("failed to remove color scheme listener: {}", js_error(&e));
                }
                drop(listener);
            }))
        }
    }

    fn js_error(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }

    /// Resolved before the first render, so `resolved` is always true here.
    pub fn use_color_scheme() -> ColorSchemeState {
        let source = use_hook(|| Rc::new(MediaQuerySource::new()));

        let mut color_scheme = use_signal(|| match &*source {
            Ok(source) => theme::resolve_initial(source),
            Err(e) => {
                warn!("color scheme unavailable, using light: {e}");
                ColorScheme::Light
            }
        });

        // Held in hook storage so it lives exactly as long as the component.
        use_hook(move || {
            let subscription = (*source).as_ref().ok().and_then(|source| {
                theme::watch(source, move |next| {
                    info!("system color scheme changed to {next}");
                    color_scheme.set(next);
                })
            });
            Rc::new(subscription)
        });

        ColorSchemeState {
            scheme: color_scheme,
            resolved: use_signal(|| true),
        }
    }
}

/// # Webview Implementation (desktop, mobile)
/// The page runs inside a webview, so the same media query is watched by a
/// small script. It reports the preference over the eval channel and removes
/// its listener when the hook sends the teardown message on drop.
#[cfg(not(target_arch = "wasm32"))]
mod webview {
    use dioxus_logger::tracing::debug;
    use dioxus_logger::tracing::info;
    use dioxus_logger::tracing::warn;
    use dioxus::prelude::*;
    use serde_json::Value;
    use site::theme::DARK_SCHEME_QUERY;
    use site::ColorScheme;
    use site::ThemeError;
    use super::ColorSchemeState;

    fn watch_script() -> String {
        format!(
            r#"
            const query = window.matchMedia("{DARK_SCHEME_QUERY}");
            const onChange = (event) => dioxus.send(event.matches);
            dioxus.send(query.matches);
            query.addEventListener("change", onChange);
            await dioxus.recv();
            query.removeEventListener("change", onChange);
            "#
        )
    }

    /// The preference only arrives with the script's first message, so
    /// `resolved` stays false until then. If the bridge fails the scheme
    /// stays at `Light` and `resolved` is set anyway.
    pub fn use_color_scheme() -> ColorSchemeState {
        let mut color_scheme = use_signal(ColorScheme::default);
        let mut resolved = use_signal(|| false);
        let bridge = use_hook(|| document::eval(&watch_script()));
        let mut receiver = bridge;

        use_hook(move || {
            spawn(async move {
                loop {
                    match receiver.recv::<Value>().await {
                        Ok(Value::Bool(prefers_dark)) => {
                            let next = ColorScheme::from_dark(prefers_dark);
                            if *color_scheme.peek() != next {
                                info!("system color scheme changed to {next}");
                                color_scheme.set(next);
                            }
                        }
                        Ok(other) => warn!("unexpected color scheme message: {other}"),
                        Err(e) => {
                            warn!("{}, using light", ThemeError::Bridge(format!("{e:?}")));
                            resolved.set(true);
                            break;
                        }
                    }
                    if !*resolved.peek() {
                        resolved.set(true);
                    }
                }
            });
        });

        use_drop(move || {
            // The script may already be gone along with the webview.
            if let Err(e) = bridge.send(Value::Null) {
                debug!("color scheme listener teardown not delivered: {e:?}");
            }
        });

        ColorSchemeState {
            scheme: color_scheme,
            resolved,
        }
    }
}
