use log::{info, warn};
use yew::prelude::*;

use crate::behaviors::{self, traffic::TrafficRecord, PageBehaviors};
use crate::config::TimingConfig;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Attach the page behaviours once the markup is in the DOM, detach on unmount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }

            let attached = match PageBehaviors::install(&TimingConfig::default()) {
                Ok(attached) => Some(attached),
                Err(e) => {
                    warn!("landing page behaviours unavailable: {}", e);
                    None
                }
            };
            behaviors::console_banner(TrafficRecord::default().total_deliveries);
            info!("Landing page ready");

            move || drop(attached)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <nav class="top-nav">
                <div class="nav-content">
                    <a href="#hero" class="nav-logo">{"🌙 Cravin"}</a>
                    <div class="nav-right">
                        <a href="#problem" class="nav-link">{"Why"}</a>
                        <a href="#traffic" class="nav-link">{"Live"}</a>
                        <a href="#how-it-works" class="nav-link">{"How it works"}</a>
                        <a href="#order" class="nav-link nav-order">{"Order"}</a>
                    </div>
                </div>
            </nav>

            <header id="hero" class="hero">
                <div class="moon"></div>
                <div class="glow-orb orb-one"></div>
                <div class="glow-orb orb-two"></div>
                <div class="glow-orb orb-three"></div>
                <div class="hero-content">
                    <div class="status-indicator">
                        <span class="status-dot"></span>
                        <span class="status-text">{"Checking hours..."}</span>
                    </div>
                    <h1>{"Midnight cravings, delivered to your hostel."}</h1>
                    <p class="hero-subtitle">
                        {"Maggi, chips, cold drinks and more, brought to your block while the canteen sleeps."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#order" class="btn-primary">{"Order now"}</a>
                        <a href="#how-it-works" class="btn-secondary">{"How it works"}</a>
                    </div>
                </div>
            </header>

            <section id="problem" class="problem fade-in-scroll">
                <h2>{"The 1 AM problem"}</h2>
                <div class="problem-grid">
                    <div class="problem-card">
                        <span class="problem-icon">{"🔒"}</span>
                        <h3>{"Canteen's shut"}</h3>
                        <p>{"Everything nearby closes right when the studying starts."}</p>
                    </div>
                    <div class="problem-card">
                        <span class="problem-icon">{"🚶"}</span>
                        <h3>{"Gates are locked"}</h3>
                        <p>{"Walking out for snacks after curfew isn't an option."}</p>
                    </div>
                    <div class="problem-card">
                        <span class="problem-icon">{"📦"}</span>
                        <h3>{"Apps won't come"}</h3>
                        <p>{"Big delivery apps skip hostels or charge more than the snack."}</p>
                    </div>
                </div>
            </section>

            <section id="traffic" class="traffic fade-in-scroll">
                <h2>{"Live tonight"}</h2>
                <div class="traffic-grid">
                    <div class="traffic-card">
                        <div class="traffic-value" id="activeUsers">{"0"}</div>
                        <div class="traffic-label">{"browsing now"}</div>
                    </div>
                    <div class="traffic-card">
                        <div class="traffic-value" id="todayOrders">{"0"}</div>
                        <div class="traffic-label">{"orders today"}</div>
                    </div>
                    <div class="traffic-card">
                        <div class="traffic-value" id="totalDeliveries">{"0"}</div>
                        <div class="traffic-label">{"deliveries so far"}</div>
                    </div>
                    <div class="traffic-card">
                        <div class="traffic-value"><span id="avgTime">{"0"}</span>{" min"}</div>
                        <div class="traffic-label">{"average delivery"}</div>
                    </div>
                </div>
                <div class="activity">
                    <h3>{"Recent orders"}</h3>
                    <div class="activity-feed" id="activityFeed"></div>
                </div>
            </section>

            <section id="how-it-works" class="how-it-works fade-in-scroll">
                <h2>{"How it works"}</h2>
                <ol class="steps">
                    <li class="step fade-in-scroll">
                        <h3>{"Pick your snacks"}</h3>
                        <p>{"Send us your list between 11:30 PM and 2:00 AM."}</p>
                    </li>
                    <li class="step fade-in-scroll">
                        <h3>{"Tell us your block"}</h3>
                        <p>{"Hostel block and room, that's all we need."}</p>
                    </li>
                    <li class="step fade-in-scroll">
                        <h3>{"Meet us at the gate"}</h3>
                        <p>{"Pay on delivery, usually within twenty minutes."}</p>
                    </li>
                </ol>
            </section>

            <section id="order" class="order fade-in-scroll">
                <h2>{"Hungry?"}</h2>
                <p>{"Orders open every night from 11:30 PM to 2:00 AM."}</p>
                <a href="#" class="btn-primary btn-large">{"Start an order"}</a>
            </section>

            <footer class="footer">
                <p>{"🌙 Cravin, late-night snacks for hostel students."}</p>
                <a href="#hero" class="footer-top">{"Back to top"}</a>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        background: #0a0a0a;
                        color: #f5f5f5;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        overflow-x: hidden;
                    }
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 10;
                        background: rgba(10, 10, 10, 0.8);
                        backdrop-filter: blur(10px);
                    }
                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 16px 24px;
                    }
                    .nav-logo, .nav-link {
                        color: inherit;
                        text-decoration: none;
                        margin-left: 20px;
                    }
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                    }
                    .moon {
                        position: absolute;
                        top: 10%;
                        right: 12%;
                        width: 120px;
                        height: 120px;
                        border-radius: 50%;
                        background: radial-gradient(circle at 35% 35%, #fff7e0, #f5d67b);
                        box-shadow: 0 0 80px rgba(245, 214, 123, 0.4);
                    }
                    .glow-orb {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(60px);
                        opacity: 0.5;
                    }
                    .orb-one { width: 300px; height: 300px; left: -80px; top: 20%; background: #ff6b35; }
                    .orb-two { width: 220px; height: 220px; right: 10%; bottom: 5%; background: #8b5cf6; }
                    .orb-three { width: 180px; height: 180px; left: 40%; bottom: -60px; background: #ff8c42; }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 720px;
                        padding: 0 24px;
                    }
                    .status-indicator {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        padding: 6px 14px;
                        border: 1px solid transparent;
                        border-radius: 999px;
                    }
                    .status-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                    }
                    .btn-primary {
                        position: relative;
                        display: inline-block;
                        padding: 14px 28px;
                        border-radius: 12px;
                        color: white;
                        text-decoration: none;
                        font-weight: bold;
                        background:
                            radial-gradient(circle at var(--mouse-x, 50%) var(--mouse-y, 50%), rgba(255, 255, 255, 0.35), transparent 60%),
                            linear-gradient(135deg, #ff6b35 0%, #ff8c42 100%);
                    }
                    .btn-secondary {
                        color: #f5f5f5;
                        margin-left: 16px;
                    }
                    .problem-grid, .traffic-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 20px;
                    }
                    .problem-card, .traffic-card {
                        padding: 24px;
                        border-radius: 16px;
                        background: #161616;
                        border: 1px solid #262626;
                        transition: transform 0.1s ease-out;
                        transform-style: preserve-3d;
                    }
                    .traffic-value {
                        font-size: 2.5rem;
                        font-weight: bold;
                        color: #ff6b35;
                    }
                    .activity-item {
                        display: flex;
                        gap: 12px;
                        padding: 12px 0;
                        border-bottom: 1px solid #262626;
                        animation: slideIn 0.4s ease-out;
                    }
                    .activity-time {
                        font-size: 0.8rem;
                        color: #a3a3a3;
                    }
                    @keyframes slideIn {
                        from { transform: translateY(-10px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 80px 24px;
                    }
                    .fade-in-scroll {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .fade-in-scroll.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .footer {
                        text-align: center;
                        padding: 40px 24px;
                        color: #a3a3a3;
                    }
                "#}
            </style>
        </div>
    }
}
