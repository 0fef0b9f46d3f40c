use chrono::Datelike;
use log::info;
use yew::prelude::*;

use crate::components::cycling_word::CyclingWord;
use crate::components::nav::Nav;
use crate::components::ticker::Ticker;
use crate::content::{self, Project, Service, Testimonial};
use crate::hooks::{use_active_theme, use_section_reveal};
use crate::motion::sections::{RevealMap, SectionId};

fn reveal_classes(revealed: &RevealMap, section: SectionId) -> Classes {
    classes!("reveal", revealed.is_revealed(section).then(|| "revealed"))
}

fn service_card(service: &Service) -> Html {
    html! {
        <div key={service.title.clone()} class={classes!("service-card", format!("accent-{}", service.accent))}>
            <div class="service-icon">{service.icon.clone()}</div>
            <h3>{service.title.clone()}</h3>
            <p>{service.description.clone()}</p>
        </div>
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <div key={project.title.clone()} class="project-card">
            <div class={classes!("project-cover", format!("accent-{}", project.accent))}></div>
            <div class="project-body">
                <div class="project-category">{project.category.clone()}</div>
                <h3>{project.title.clone()}</h3>
                <p>{project.description.clone()}</p>
            </div>
        </div>
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div key={testimonial.author.clone()} class={classes!("testimonial-card", format!("accent-{}", testimonial.accent))}>
            <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
            <div>
                <div class="testimonial-author">{testimonial.author.clone()}</div>
                <div class="testimonial-role">{testimonial.role.clone()}</div>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let site = use_memo(|_| content::site(), ());
    let revealed = use_section_reveal();
    let theme = use_active_theme();

    {
        use_effect_with_deps(
            move |_| {
                info!("Rendering landing page");
                || ()
            },
            (),
        );
    }

    let year = chrono::Local::now().year();

    html! {
        <div class={classes!("landing-page", theme.0.theme_class())}>
            <div class="violet-glows" aria-hidden="true">
                <span class="blob blob-1"></span>
                <span class="blob blob-2"></span>
                <span class="blob blob-3"></span>
            </div>

            <div class="page-layer">
                <Nav brand={site.brand.clone()} links={site.nav_links.clone()} />

                // Hero Section
                <section id="top" class="hero">
                    <h1>
                        <span class="hero-line">
                            <span>{"Helping"}</span>
                            <CyclingWord words={site.hero_words.clone()} />
                        </span>
                        <span class="hero-line-muted">{"stand out"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Bespoke portfolios, startup platforms, and custom web applications."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#work" class="hero-cta">{"View Work"}</a>
                        <a href="#cta" class="hero-cta-secondary">{"Let's Talk"}</a>
                    </div>
                </section>

                // Services
                <section id="services" class={reveal_classes(&revealed, SectionId::Services)}>
                    <h2>
                        {"Three core specialties."}
                        <span class="muted">{"Infinite possibilities."}</span>
                    </h2>
                    <p class="section-lead">
                        {"We focus on what we do best, delivering exceptional results in every project."}
                    </p>
                    <div class="services-grid">
                        { for site.services.iter().map(service_card) }
                    </div>
                </section>

                // Featured Work
                <section id="work" class={reveal_classes(&revealed, SectionId::Work)}>
                    <h2>
                        {"Work that speaks"}
                        <span class="muted">{"for itself."}</span>
                    </h2>
                    <div class="work-grid">
                        { for site.projects.iter().map(project_card) }
                    </div>
                </section>

                // Testimonials
                <section id="testimonials" class={reveal_classes(&revealed, SectionId::Testimonials)}>
                    <h2 class="centered">
                        {"Trusted by ambitious"}
                        <span class="muted">{"teams worldwide."}</span>
                    </h2>
                    <div class="testimonials-grid">
                        { for site.testimonials.iter().map(testimonial_card) }
                    </div>
                </section>

                <Ticker content={site.ticker.clone()} />
            </div>

            // CTA
            <section id="cta" class={reveal_classes(&revealed, SectionId::Cta)}>
                <div class="cta-panel">
                    <h2>{"Ready to build something exceptional?"}</h2>
                    <p>{"Let's discuss your project and create a digital experience that sets you apart."}</p>
                    <button class="cta-button">{"Start Your Project"}</button>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-copy">
                    {format!("© {} YourStudio. Crafting digital excellence.", year)}
                </div>
                <div class="footer-links">
                    { for site.socials.iter().map(|link| html! {
                        <a key={link.label.clone()} href={link.href.clone()}>{link.label.clone()}</a>
                    }) }
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    position: relative;
                    min-height: 100vh;
                    background: #ffffff;
                    color: #171717;
                    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    overflow-x: hidden;
                    transition: background-color 0.8s ease;
                }
                .landing-page.theme-services { background: #faf7ff; }
                .landing-page.theme-work { background: #f8fafc; }
                .landing-page.theme-testimonials { background: #f5fbfa; }
                .landing-page.theme-cta { background: #f6f4ff; }

                .page-layer { position: relative; z-index: 10; }

                .violet-glows {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                    z-index: 0;
                }
                .blob {
                    position: absolute;
                    width: 420px;
                    height: 420px;
                    border-radius: 50%;
                    filter: blur(90px);
                    opacity: 0.25;
                    background: radial-gradient(circle, #7c3aed 0%, transparent 70%);
                    animation: drift 18s ease-in-out infinite alternate;
                }
                .blob-1 { top: -120px; left: -80px; }
                .blob-2 { top: 40%; right: -140px; animation-delay: -6s; background: radial-gradient(circle, #c026d3 0%, transparent 70%); }
                .blob-3 { bottom: -160px; left: 30%; animation-delay: -12s; }
                @keyframes drift {
                    from { transform: translate(0, 0) scale(1); }
                    to { transform: translate(60px, 40px) scale(1.15); }
                }

                /* Navigation */
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(8px);
                    transition: background-color 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.85);
                    border-bottom: 1px solid #e5e5e5;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-decoration: none;
                    user-select: none;
                }
                .nav-logo-primary { color: #171717; }
                .nav-logo-secondary { color: #525252; }
                .nav-desktop { display: none; align-items: center; gap: 1.5rem; }
                .nav-link {
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    color: #404040;
                    text-decoration: none;
                    transition: background-color 0.2s;
                }
                .nav-link:hover { background: #f5f5f5; }
                .nav-cta {
                    display: inline-flex;
                    padding: 0.5rem 1rem;
                    background: #7c3aed;
                    color: #ffffff;
                    border-radius: 0.5rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                .nav-cta:hover { background: #404040; }
                .nav-mobile-actions { display: flex; align-items: center; gap: 0.75rem; }
                .burger-menu {
                    padding: 0.5rem;
                    border: 1px solid #e5e5e5;
                    border-radius: 0.5rem;
                    background: transparent;
                    cursor: pointer;
                }
                .burger-icon {
                    width: 20px;
                    height: 20px;
                    stroke: #404040;
                    stroke-width: 2;
                    stroke-linecap: round;
                    fill: none;
                }
                .mobile-panel {
                    display: grid;
                    gap: 0.5rem;
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: max-height 0.4s ease-in-out, opacity 0.4s ease-in-out;
                }
                .mobile-panel.open {
                    max-height: 24rem;
                    opacity: 1;
                    padding: 1rem 1.5rem;
                    border-top: 1px solid #e5e5e5;
                    background: rgba(255, 255, 255, 0.85);
                }
                @media (min-width: 1000px) {
                    .nav-desktop { display: flex; }
                    .nav-mobile-actions, .mobile-panel { display: none; }
                }

                /* Hero */
                section {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                }
                .hero { padding-top: 5rem; padding-bottom: 8rem; }
                .hero h1 {
                    font-size: clamp(3.5rem, 8vw, 6rem);
                    font-weight: 600;
                    letter-spacing: -0.02em;
                    line-height: 1;
                    margin-bottom: 2rem;
                }
                .hero-line { display: inline-flex; align-items: baseline; gap: 0.3em; }
                .hero-line-muted { display: block; color: #262626; }
                .cycling-word { position: relative; display: inline-block; min-width: 9ch; }
                .cycling-word-glow {
                    position: absolute;
                    left: 50%;
                    top: 50%;
                    width: 115%;
                    height: 70%;
                    transform: translate(-50%, -50%);
                    border-radius: 9999px;
                    filter: blur(40px);
                    opacity: 0.8;
                    background: linear-gradient(90deg, rgba(124, 58, 237, 0.6), rgba(217, 70, 239, 0.4), rgba(167, 139, 250, 0.6));
                    animation: pulse-soft 4s ease-in-out infinite;
                    pointer-events: none;
                }
                .cycling-word-text {
                    position: relative;
                    color: #5b21b6;
                    opacity: 1;
                    transition: opacity 0.5s ease;
                }
                .cycling-word-text.faded { opacity: 0; }
                @keyframes pulse-soft {
                    0%, 100% { opacity: 0.65; }
                    50% { opacity: 0.9; }
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #525252;
                    max-width: 42rem;
                    line-height: 1.6;
                    margin-bottom: 3rem;
                }
                .hero-cta-group { display: flex; flex-wrap: wrap; gap: 1rem; }
                .hero-cta, .hero-cta-secondary {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem 2rem;
                    border-radius: 0.75rem;
                    font-weight: 600;
                    font-size: 1.125rem;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .hero-cta { background: #7c3aed; color: #ffffff; }
                .hero-cta:hover { background: #6d28d9; transform: translateY(-2px); }
                .hero-cta-secondary { border: 2px solid #d4d4d4; color: #171717; }
                .hero-cta-secondary:hover { border-color: #3b82f6; background: #eff6ff; }

                /* Reveal on scroll */
                .reveal {
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: opacity 1s ease, transform 1s ease;
                }
                .reveal.revealed { opacity: 1; transform: translateY(0); }
                @media (prefers-reduced-motion: reduce) {
                    .reveal { transition: none; }
                }

                h2 {
                    font-size: clamp(2.5rem, 5vw, 3.75rem);
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    max-width: 48rem;
                }
                h2.centered { text-align: center; margin-left: auto; margin-right: auto; }
                h2 .muted { display: block; color: #737373; }
                .section-lead { font-size: 1.25rem; color: #525252; margin-bottom: 4rem; max-width: 42rem; }

                .services-grid, .testimonials-grid { display: grid; gap: 2rem; }
                .work-grid { display: grid; gap: 2rem; margin-top: 4rem; }
                @media (min-width: 768px) {
                    .services-grid, .testimonials-grid { grid-template-columns: repeat(3, 1fr); }
                    .work-grid { grid-template-columns: repeat(2, 1fr); }
                }

                .service-card {
                    border: 2px solid #e5e5e5;
                    border-radius: 1rem;
                    padding: 2rem;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .service-card:hover { transform: scale(1.05); }
                .service-icon { font-size: 3rem; margin-bottom: 1.5rem; }
                .service-card h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
                .service-card p { color: #404040; line-height: 1.6; }
                .service-card.accent-brand { background: linear-gradient(135deg, #f5f3ff, #ede9fe); }
                .service-card.accent-brand:hover { border-color: #8b5cf6; }
                .service-card.accent-secondary { background: linear-gradient(135deg, #fdf4ff, #fae8ff); }
                .service-card.accent-secondary:hover { border-color: #d946ef; }
                .service-card.accent-teal { background: linear-gradient(135deg, #f0fdfa, #ccfbf1); }
                .service-card.accent-teal:hover { border-color: #14b8a6; }

                .project-card {
                    background: #ffffff;
                    border: 2px solid #e5e5e5;
                    border-radius: 1rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }
                .project-card:hover { border-color: #a3a3a3; }
                .project-cover { height: 16rem; transition: transform 0.5s ease; }
                .project-card:hover .project-cover { transform: scale(1.05); }
                .project-cover.accent-brand { background: linear-gradient(135deg, #a78bfa, #7c3aed); }
                .project-cover.accent-secondary { background: linear-gradient(135deg, #e879f9, #c026d3); }
                .project-cover.accent-teal { background: linear-gradient(135deg, #2dd4bf, #0d9488); }
                .project-cover.accent-orange { background: linear-gradient(135deg, #fb923c, #ea580c); }
                .project-body { padding: 2rem; }
                .project-category { font-size: 0.875rem; color: #7c3aed; font-weight: 600; margin-bottom: 0.5rem; }
                .project-body h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.75rem; }
                .project-body p { color: #525252; }

                .testimonial-card {
                    border: 2px solid;
                    border-radius: 1rem;
                    padding: 2rem;
                    transition: box-shadow 0.3s ease;
                }
                .testimonial-card:hover { box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }
                .testimonial-card.accent-brand { border-color: #ddd6fe; background: #f5f3ff; }
                .testimonial-card.accent-secondary { border-color: #f5d0fe; background: #fdf4ff; }
                .testimonial-card.accent-teal { border-color: #99f6e4; background: #f0fdfa; }
                .testimonial-quote { font-size: 1.125rem; color: #404040; margin-bottom: 1.5rem; line-height: 1.6; }
                .testimonial-author { font-weight: 600; }
                .testimonial-role { font-size: 0.875rem; color: #525252; }

                /* Ticker */
                .ticker {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    max-width: none;
                    padding: 4rem 0;
                    overflow: hidden;
                }
                .ticker-row { overflow: hidden; width: 100%; }
                .ticker-track { display: flex; width: max-content; will-change: transform; }
                .ticker-group { display: flex; gap: 3rem; padding-right: 3rem; }
                .ticker-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    white-space: nowrap;
                    color: #404040;
                    font-weight: 600;
                    font-size: 1.125rem;
                    cursor: default;
                }
                .ticker-item img { width: 48px; height: 48px; flex-shrink: 0; }

                /* CTA */
                .cta-panel {
                    background: linear-gradient(135deg, #8b5cf6, #d946ef, #14b8a6);
                    border-radius: 1.5rem;
                    padding: 4rem 3rem;
                    text-align: center;
                    color: #ffffff;
                }
                .cta-panel h2 { margin-left: auto; margin-right: auto; }
                .cta-panel p { font-size: 1.25rem; opacity: 0.9; margin: 0 auto 2rem; max-width: 42rem; }
                .cta-button {
                    padding: 1rem 2rem;
                    background: #ffffff;
                    color: #2563eb;
                    border: none;
                    border-radius: 0.75rem;
                    font-weight: 600;
                    font-size: 1.125rem;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .cta-button:hover { transform: translateY(-2px); }

                /* Footer */
                .site-footer {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    border-top: 1px solid #e5e5e5;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    color: #525252;
                }
                .footer-links { display: flex; gap: 1.5rem; }
                .footer-links a { color: inherit; text-decoration: none; }
                .footer-links a:hover { color: #7c3aed; }
                "#}
            </style>
        </div>
    }
}
