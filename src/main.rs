use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;

mod content;
mod state;
mod pages {
    pub mod home;
}
mod components {
    pub mod loading;
    pub mod reservation;
}

use components::loading::{start_loading_timer, LoadingScreen};
use pages::home::Home;
use state::{Section, ViewState};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active_section: Section,
    pub menu_open: bool,
    pub on_select: Callback<Section>,
    pub on_toggle: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let toggle_menu = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let menu_class = if props.menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <span class="nav-logo">{"NOVA"}</span>
                <button class={classes!("burger-menu", props.menu_open.then(|| "open"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { Section::ALL.iter().map(|&section| {
                        let on_select = props.on_select.clone();
                        let class = if props.active_section == section {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        html! {
                            <button
                                class={class}
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(section))}
                            >
                                {section.label()}
                            </button>
                        }
                    }).collect::<Html>() }
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid rgba(6, 182, 212, 0.1);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 64px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: 0.15em;
                        background: linear-gradient(45deg, #06b6d4, #a855f7);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #d1d5db;
                        font-size: 0.9rem;
                        font-weight: 500;
                        padding: 0.5rem 0.9rem;
                        border-radius: 8px;
                        transition: all 0.3s ease;
                    }
                    .nav-link:hover {
                        background: rgba(55, 65, 81, 0.6);
                        color: #fff;
                    }
                    .nav-link.active {
                        background: rgba(17, 24, 39, 0.9);
                        color: #fff;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        justify-content: center;
                        gap: 5px;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        background: #d1d5db;
                        transition: all 0.3s ease;
                    }
                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                            order: 2;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            align-items: stretch;
                            position: absolute;
                            top: 64px;
                            left: 0;
                            right: 0;
                            padding: 0.75rem 1rem 1rem;
                            background: rgba(0, 0, 0, 0.95);
                            border-bottom: 1px solid rgba(6, 182, 212, 0.1);
                        }
                        .nav-right.mobile-menu-open .nav-link {
                            text-align: left;
                            padding: 0.75rem 1rem;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let view = use_state(ViewState::default);

    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                let timer = start_loading_timer(move || {
                    info!("Loading gate released");
                    let mut next = (*view).clone();
                    next.finish_loading();
                    view.set(next);
                });
                // Dropping the handle cancels the callback if the view is
                // torn down before the delay elapses.
                move || drop(timer)
            },
            (),
        );
    }

    let on_select = {
        let view = view.clone();
        Callback::from(move |section: Section| {
            let mut next = (*view).clone();
            next.select_section(section);
            view.set(next);
        })
    };

    let on_toggle_menu = {
        let view = view.clone();
        Callback::from(move |_| {
            let mut next = (*view).clone();
            next.toggle_mobile_menu();
            view.set(next);
        })
    };

    let on_hover = {
        let view = view.clone();
        Callback::from(move |dish: Option<usize>| {
            let mut next = (*view).clone();
            next.set_hovered(dish);
            view.set(next);
        })
    };

    if view.is_loading {
        return html! { <LoadingScreen /> };
    }

    html! {
        <div class="app">
            <Nav
                active_section={view.active_section}
                menu_open={view.mobile_menu_open}
                on_select={on_select.clone()}
                on_toggle={on_toggle_menu}
            />
            <Home
                hovered_dish={view.hovered_dish}
                on_hover={on_hover}
                on_select={on_select}
            />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
