use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reservation::ReservationForm;
use crate::content::{FEATURES, MENU_ITEMS};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub hovered_dish: Option<usize>,
    pub on_hover: Callback<Option<usize>>,
    pub on_select: Callback<Section>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let reserve_cta = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(Section::Reservations))
    };

    let scroll_to_top = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <div class="home">
            <header class="hero">
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1 class="hero-title">
                        {"Welcome to"}
                        <span class="hero-brand">{"NOVA"}</span>
                    </h1>
                    <p class="hero-subtitle">{"Experience dining in the next dimension"}</p>
                    <button class="hero-cta" onclick={reserve_cta}>
                        {"Reserve Your Experience"}
                    </button>
                </div>
            </header>

            <section class="menu-section">
                <div class="section-inner">
                    <h2 class="section-title">{"Curated Menu"}</h2>
                    <div class="menu-grid">
                        { MENU_ITEMS.iter().enumerate().map(|(index, item)| {
                            let onmouseenter = {
                                let on_hover = props.on_hover.clone();
                                Callback::from(move |_: MouseEvent| on_hover.emit(Some(index)))
                            };
                            let onmouseleave = {
                                let on_hover = props.on_hover.clone();
                                Callback::from(move |_: MouseEvent| on_hover.emit(None))
                            };
                            let card_class = if props.hovered_dish == Some(index) {
                                "menu-card highlighted"
                            } else {
                                "menu-card"
                            };
                            html! {
                                <div class={card_class} onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
                                    <span class="menu-card-category">{item.category}</span>
                                    <h3 class="menu-card-name">{item.name}</h3>
                                    <p class="menu-card-description">{item.description}</p>
                                    <div class="menu-card-meta">
                                        <span class="menu-card-price">{item.price}</span>
                                        <span class="menu-card-rating">{"★ "}{format!("{:.1}", item.rating)}</span>
                                    </div>
                                    <div class="menu-card-details">
                                        <span class="menu-card-prep">{"⏱ "}{item.prep_time}</span>
                                        <div class="dietary-tags">
                                            { item.dietary.iter().map(|tag| html! {
                                                <span class="dietary-tag">{*tag}</span>
                                            }).collect::<Html>() }
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <section class="experience-section">
                <div class="section-inner">
                    <h2 class="section-title">{"The NOVA Experience"}</h2>
                    <div class="features-grid">
                        { FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <div class="feature-icon">{feature.icon}</div>
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-description">{feature.description}</p>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <section class="reservation-section">
                <div class="section-inner narrow">
                    <h2 class="section-title">{"Reserve Your Experience"}</h2>
                    <ReservationForm />
                </div>
            </section>

            <footer class="footer">
                <div class="section-inner">
                    <div class="footer-grid">
                        <div class="footer-brand-block">
                            <h3 class="footer-brand">{"NOVA"}</h3>
                            <p>{"Pioneering the future of culinary experiences"}</p>
                        </div>
                        <div class="footer-hours">
                            <h4>{"Hours"}</h4>
                            <p>{"Mon-Thu: 17:00 - 23:00"}</p>
                            <p>{"Fri-Sun: 17:00 - 00:00"}</p>
                        </div>
                        <div class="footer-contact">
                            <h4>{"Contact"}</h4>
                            <p>{"info@novarestaurant.com"}</p>
                            <p>{"+1 (555) 123-4567"}</p>
                        </div>
                    </div>
                    <div class="footer-bottom">
                        <p class="footer-copyright">{"NOVA Restaurant © 2024 | The Future of Dining"}</p>
                        <div class="footer-socials">
                            { ["Instagram", "Twitter", "Facebook"].iter().map(|social| html! {
                                <a href="#" class="social-link">{*social}</a>
                            }).collect::<Html>() }
                        </div>
                    </div>
                </div>
            </footer>

            <button class="scroll-to-top" onclick={scroll_to_top}>{"↑"}</button>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(88, 28, 135, 0.2), rgba(0, 0, 0, 0.8));
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1rem;
                        animation: riseIn 0.8s ease-out;
                    }
                    .hero-title {
                        font-size: 3.5rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .hero-brand {
                        display: block;
                        background: linear-gradient(90deg, #06b6d4, #a855f7, #06b6d4);
                        background-size: 200% 100%;
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        animation: gradientDrift 8s ease-in-out infinite alternate;
                    }
                    .hero-subtitle {
                        font-size: 1.4rem;
                        color: #d1d5db;
                        margin-bottom: 2rem;
                    }
                    .hero-cta {
                        background: linear-gradient(45deg, #06b6d4, #a855f7);
                        border: none;
                        color: #fff;
                        font-size: 1rem;
                        font-weight: 600;
                        padding: 0.8rem 2rem;
                        border-radius: 999px;
                        transition: transform 0.3s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    @keyframes riseIn {
                        from { transform: translateY(50px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes gradientDrift {
                        from { background-position: 0% 50%; }
                        to { background-position: 100% 50%; }
                    }

                    .section-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .section-inner.narrow {
                        max-width: 760px;
                    }
                    .section-title {
                        font-size: 2.5rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 3rem;
                        background: linear-gradient(45deg, #06b6d4, #a855f7);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    .menu-section {
                        padding: 5rem 0;
                        background: linear-gradient(to bottom, #0a0a0a, #111827);
                    }
                    .menu-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .menu-card {
                        position: relative;
                        background: rgba(31, 41, 55, 0.5);
                        backdrop-filter: blur(6px);
                        border: 1px solid rgba(6, 182, 212, 0.08);
                        border-radius: 12px;
                        padding: 1.5rem;
                        transition: all 0.2s ease;
                    }
                    .menu-card.highlighted {
                        transform: scale(1.03);
                        border-color: rgba(6, 182, 212, 0.35);
                        box-shadow: 0 8px 32px rgba(6, 182, 212, 0.15);
                    }
                    .menu-card-category {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #a855f7;
                    }
                    .menu-card-name {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin: 0.5rem 0;
                    }
                    .menu-card-description {
                        color: #9ca3af;
                        margin-bottom: 1rem;
                        line-height: 1.5;
                    }
                    .menu-card-meta {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .menu-card-price {
                        color: #06b6d4;
                        font-weight: 700;
                    }
                    .menu-card-rating {
                        color: #eab308;
                        font-size: 0.95rem;
                    }
                    .menu-card-details {
                        margin-top: 1rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        font-size: 0.85rem;
                        color: #d1d5db;
                    }
                    .dietary-tags {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .dietary-tag {
                        background: #374151;
                        border-radius: 999px;
                        padding: 0.2rem 0.6rem;
                        font-size: 0.7rem;
                    }

                    .experience-section {
                        padding: 5rem 0;
                        background: #0a0a0a;
                    }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .feature-card {
                        text-align: center;
                        padding: 1.5rem;
                        background: linear-gradient(to bottom, rgba(31, 41, 55, 0.5), transparent);
                        border-radius: 12px;
                        transition: transform 0.2s ease;
                    }
                    .feature-card:hover {
                        transform: scale(1.05);
                    }
                    .feature-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                        animation: floatIcon 2s ease-in-out infinite alternate;
                    }
                    .feature-title {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .feature-description {
                        color: #9ca3af;
                        line-height: 1.5;
                    }
                    @keyframes floatIcon {
                        from { transform: translateY(0); }
                        to { transform: translateY(-10px); }
                    }

                    .reservation-section {
                        padding: 5rem 0;
                        background: linear-gradient(to top, #0a0a0a, #111827);
                    }

                    .footer {
                        background: #000;
                        padding: 3rem 0;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-bottom: 2rem;
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                        background: linear-gradient(45deg, #06b6d4, #a855f7);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .footer-hours, .footer-contact {
                        text-align: center;
                    }
                    .footer-hours h4, .footer-contact h4 {
                        font-size: 1.1rem;
                        margin-bottom: 1rem;
                    }
                    .footer p {
                        color: #9ca3af;
                        line-height: 1.6;
                    }
                    .footer-bottom {
                        border-top: 1px solid #1f2937;
                        padding-top: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .footer-copyright {
                        font-size: 0.85rem;
                    }
                    .footer-socials {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .social-link {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .social-link:hover {
                        color: #fff;
                    }

                    .scroll-to-top {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 50;
                        width: 48px;
                        height: 48px;
                        border: none;
                        border-radius: 50%;
                        background: linear-gradient(45deg, #06b6d4, #a855f7);
                        color: #fff;
                        font-size: 1.2rem;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
                        transition: transform 0.3s ease;
                    }
                    .scroll-to-top:hover {
                        transform: scale(1.1);
                    }

                    @media (max-width: 950px) {
                        .menu-grid, .features-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .hero-title {
                            font-size: 2.5rem;
                        }
                        .hero-subtitle {
                            font-size: 1.1rem;
                        }
                        .menu-grid, .features-grid, .footer-grid {
                            grid-template-columns: 1fr;
                        }
                        .footer-hours, .footer-contact {
                            text-align: left;
                        }
                        .footer-bottom {
                            flex-direction: column;
                            gap: 1rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
