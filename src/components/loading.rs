use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const LOADING_DURATION_MS: u32 = 2_000;

// The returned handle is the cancel token: dropping it before the delay
// elapses cancels the callback, so the caller must keep it alive for as
// long as the completion should be able to fire.
pub fn start_loading_timer(on_complete: impl FnOnce() + 'static) -> Timeout {
    Timeout::new(LOADING_DURATION_MS, on_complete)
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="loading-screen">
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #000;
                        z-index: 100;
                    }
                    .loading-brand {
                        font-size: 2.5rem;
                        font-weight: 700;
                        letter-spacing: 0.3em;
                        background: linear-gradient(45deg, #06b6d4, #a855f7);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        animation: brandPulse 1s ease-in-out infinite alternate;
                    }
                    @keyframes brandPulse {
                        from { transform: scale(0.92); opacity: 0.6; }
                        to { transform: scale(1); opacity: 1; }
                    }
                "#}
            </style>
            <div class="loading-brand">{"NOVA"}</div>
        </div>
    }
}
