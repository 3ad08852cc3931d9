use std::time::Duration;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::{use_service_catalog, CatalogState};
use crate::components::code_rain::CodeRain;
use crate::components::contact_form::ContactForm;
use crate::components::image::Image;
use crate::components::service_card::ServiceCard;
use crate::config::{CONTACT_EMAIL, REVEAL_STAGGER_MS};
use crate::icons::{Icon, IconSvg};
use crate::navigation::{use_fragment_scroll, use_scroll_to_top};
use crate::reveal::{stagger, Reveal};
use crate::Route;

const TEAM_IMAGE: &str = "https://static.wixstatic.com/media/5283f4_85b89e1e1837427fa45066b85d892665~mv2.png?originWidth=896&originHeight=448";

const MARQUEE_TEXT: &str = "Innovation // Design // Development // Strategy // 3D Modeling // Game Logic // User Experience // ";

const PROCESS_STEPS: [(Icon, &str, &str); 4] = [
    (Icon::Layers, "Discovery", "We analyze your requirements and deconstruct the challenge."),
    (Icon::Palette, "Design", "We forge the visual identity and user experience architecture."),
    (Icon::Terminal, "Development", "We write clean, robust code to bring the vision to life."),
    (Icon::Globe, "Deployment", "We launch your solution and ensure optimal performance."),
];

const STATS: [(&str, &str); 4] = [
    ("100+", "Projects Forged"),
    ("50+", "Happy Clients"),
    ("15+", "Expert Units"),
    ("5+", "Years Active"),
];

fn step() -> Duration {
    Duration::from_millis(REVEAL_STAGGER_MS)
}

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_service_catalog();
    use_scroll_to_top();
    use_fragment_scroll(catalog.view.all.len());

    html! {
        <div class="home-page">
            { hero(&catalog) }
            { marquee() }
            { about() }
            { arsenal(&catalog) }
            { process() }
            { stats() }
            { contact() }
            <style>{ HOME_STYLES }</style>
        </div>
    }
}

fn hero(catalog: &CatalogState) -> Html {
    html! {
        <section class="hero">
            <div class="hero-background">
                <div class="grid-bg hero-grid"></div>
                <CodeRain />
                <div class="hero-vignette"></div>
            </div>
            <div class="hero-content">
                <Reveal>
                    <span class="eyebrow">{"System Online v2.0"}</span>
                </Reveal>
                <Reveal delay={stagger(1, step())}>
                    <h1 class="hero-title">
                        {"FORGING"}<br />
                        <span class="accent">{"THE FUTURE"}</span>
                    </h1>
                </Reveal>
                <Reveal delay={stagger(2, step())}>
                    <p class="hero-lead">
                        {"Luminaryforge Tech combines brutalist efficiency with cyberpunk aesthetics to engineer digital realities. We don't just build software; we architect experiences."}
                    </p>
                </Reveal>
                <Reveal delay={stagger(3, step())}>
                    <div class="hero-actions">
                        <a href="#services" class="btn-primary">
                            {"EXPLORE SERVICES"}<IconSvg icon={Icon::ArrowRight} size={20} />
                        </a>
                        <a href="#contact" class="btn-outline">{"INITIATE CONTACT"}</a>
                    </div>
                </Reveal>
                {
                    if catalog.view.featured.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <Reveal delay={stagger(4, step())} class="hero-featured">
                                <span class="hero-featured-label">{"// Flagship"}</span>
                                { for catalog.view.featured.iter().map(|service| html! {
                                    <a href={service.anchor_href()} class="hero-featured-chip">
                                        <IconSvg icon={service.icon()} size={16} />
                                        { service.name.clone() }
                                    </a>
                                }) }
                            </Reveal>
                        }
                    }
                }
            </div>
            <a href="#about" class="scroll-indicator" aria-label="Scroll down">
                <IconSvg icon={Icon::ChevronDown} size={32} class="animate-float" />
            </a>
        </section>
    }
}

fn marquee() -> Html {
    html! {
        <section class="marquee" aria-hidden="true">
            <div class="marquee-inner">
                { MARQUEE_TEXT.repeat(4) }
            </div>
        </section>
    }
}

fn about() -> Html {
    html! {
        <section id="about" class="section about">
            <div class="about-sidebar">
                <Reveal>
                    <h2 class="section-title">{"WHO"}<br />{"WE ARE"}</h2>
                    <p class="eyebrow">{"// System Identity"}</p>
                </Reveal>
            </div>
            <div class="about-content">
                <Reveal>
                    <p class="section-lead">
                        {"We are a collective of engineers, designers, and strategists who treat every project as a forge: raw ideas go in, precision-built digital products come out. From the first wireframe to the final deployment, we own the craft."}
                    </p>
                </Reveal>
                <Reveal delay={stagger(2, step())}>
                    <div class="about-cards">
                        <div class="about-card glass-panel hover-lift">
                            <div class="icon-badge"><IconSvg icon={Icon::Cpu} size={28} /></div>
                            <h3>{"Engineered to Last"}</h3>
                            <p>{"Our code is clean, efficient, and scalable. We build systems that endure the rapid evolution of the digital landscape."}</p>
                        </div>
                        <div class="about-card glass-panel hover-lift">
                            <div class="icon-badge"><IconSvg icon={Icon::Zap} size={28} /></div>
                            <h3>{"Built for Speed"}</h3>
                            <p>{"Speed is a feature. We utilize agile methodologies to deliver high-impact solutions without compromising integrity."}</p>
                        </div>
                    </div>
                </Reveal>
                <Reveal>
                    <div class="about-image glass-panel">
                        <Image src={TEAM_IMAGE} alt="Luminaryforge Team collaborating on a digital project" />
                        <div class="about-image-caption">{"// Team Uplink Established"}</div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn arsenal(catalog: &CatalogState) -> Html {
    let cards = if catalog.loading {
        html! {
            <div class="arsenal-track">
                { for (0..3).map(|_| html! { <div class="arsenal-item loading-pulse"></div> }) }
            </div>
        }
    } else if catalog.view.is_empty() {
        html! { <p class="empty-state">{"// No services online. Check back soon."}</p> }
    } else {
        html! {
            <div class="arsenal-track">
                { for catalog.view.all.iter().enumerate().map(|(index, service)| html! {
                    <Reveal key={service.id.clone()} class="arsenal-item" delay={stagger(index, step())}>
                        <ServiceCard service={service.clone()} index={index} />
                    </Reveal>
                }) }
            </div>
        }
    };

    html! {
        <section id="services" class="section arsenal">
            <div class="arsenal-header">
                <Reveal>
                    <h2 class="section-title">{"THE "}<span class="accent">{"ARSENAL"}</span></h2>
                    <p class="section-lead">{"Comprehensive technology solutions tailored to forge your digital dominance."}</p>
                </Reveal>
                <Reveal delay={stagger(2, step())}>
                    <Link<Route> to={Route::Services} classes="btn-outline">
                        {"VIEW ALL SERVICES"}<IconSvg icon={Icon::ArrowRight} size={18} />
                    </Link<Route>>
                </Reveal>
            </div>
            { cards }
        </section>
    }
}

fn process() -> Html {
    html! {
        <section class="section process">
            <Reveal>
                <h2 class="section-title">{"THE "}<span class="accent">{"BLUEPRINT"}</span></h2>
                <p class="section-lead">{"Our systematic approach to forging digital excellence."}</p>
            </Reveal>
            <div class="process-grid">
                <div class="process-line"></div>
                { for PROCESS_STEPS.iter().enumerate().map(|(index, (icon, title, description))| html! {
                    <Reveal delay={stagger(index, step())}>
                        <div class="process-step glass-panel hover-lift">
                            <div class="process-number">{ (index + 1).to_string() }</div>
                            <div class="icon-badge"><IconSvg icon={*icon} size={28} /></div>
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn stats() -> Html {
    html! {
        <section class="stats">
            <div class="stats-grid">
                { for STATS.iter().enumerate().map(|(index, (value, label))| html! {
                    <Reveal delay={stagger(index, step())}>
                        <div class="stat">
                            <div class="stat-value">{ *value }</div>
                            <div class="stat-label">{ *label }</div>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

fn contact() -> Html {
    let mailto = format!("mailto:{}", CONTACT_EMAIL);
    html! {
        <section id="contact" class="section contact">
            <Reveal>
                <h2 class="section-title">{"SIGNAL "}<span class="accent">{"UPLINK"}</span></h2>
                <p class="section-lead">
                    {"Ready to upgrade your digital presence? Establish a connection with our team. We are standing by."}
                </p>
                <div class="contact-channels">
                    <a href={mailto} class="contact-channel">
                        <div class="icon-badge"><IconSvg icon={Icon::Mail} size={24} /></div>
                        <span>{ CONTACT_EMAIL }</span>
                    </a>
                    <div class="contact-channel">
                        <div class="icon-badge"><IconSvg icon={Icon::Shield} size={24} /></div>
                        <span>{"Encrypted Communication"}</span>
                    </div>
                </div>
            </Reveal>
            <Reveal delay={stagger(3, step())}>
                <ContactForm />
            </Reveal>
        </section>
    }
}

const HOME_STYLES: &str = r#"
.hero {
    position: relative;
    height: 100vh;
    min-height: 40rem;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

.hero-background {
    position: absolute;
    inset: 0;
    background: var(--dark-charcoal);
}

.hero-grid {
    position: absolute;
    inset: 0;
    opacity: 0.3;
}

.hero-vignette {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at center, transparent 0%, var(--dark-charcoal) 75%);
}

.hero-content {
    position: relative;
    z-index: 1;
    text-align: center;
    padding: 0 2rem;
    max-width: 70rem;
}

.hero-title {
    font-family: var(--font-heading);
    font-size: clamp(3.5rem, 11vw, 9rem);
    line-height: 0.9;
    margin: 0 0 2rem;
    letter-spacing: -0.03em;
}

.hero-title .accent {
    text-shadow: 0 0 40px rgba(57, 255, 20, 0.5);
}

.hero-lead {
    font-size: 1.25rem;
    color: var(--foreground-muted);
    max-width: 44rem;
    margin: 0 auto 2.5rem;
    line-height: 1.7;
}

.hero-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}

.hero-featured {
    margin-top: 2.5rem;
    display: flex;
    gap: 0.75rem;
    justify-content: center;
    flex-wrap: wrap;
    align-items: center;
}

.hero-featured-label {
    font-family: 'JetBrains Mono', monospace;
    font-size: 0.8rem;
    color: var(--foreground-muted);
}

.hero-featured-chip {
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
    padding: 0.35rem 0.9rem;
    border-radius: 999px;
    border: 1px solid rgba(57, 255, 20, 0.3);
    color: var(--neon-green);
    text-decoration: none;
    font-size: 0.85rem;
}

.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    color: var(--neon-green);
    z-index: 1;
}

.marquee {
    overflow: hidden;
    white-space: nowrap;
    border-top: 1px solid rgba(57, 255, 20, 0.2);
    border-bottom: 1px solid rgba(57, 255, 20, 0.2);
    background: rgba(57, 255, 20, 0.05);
    padding: 1.5rem 0;
}

.marquee-inner {
    display: inline-block;
    font-family: var(--font-heading);
    font-size: 2rem;
    font-weight: 700;
    text-transform: uppercase;
    color: var(--neon-green);
    animation: scroll-left 20s linear infinite;
}

@keyframes scroll-left {
    0% { transform: translateX(0); }
    100% { transform: translateX(-50%); }
}

.about {
    display: grid;
    grid-template-columns: 1fr 2fr;
    gap: 4rem;
}

.about-sidebar > div {
    position: sticky;
    top: 8rem;
}

.about-content {
    display: flex;
    flex-direction: column;
    gap: 3rem;
}

.about-cards {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}

.about-card {
    padding: 2rem;
}

.about-card h3 {
    font-family: var(--font-heading);
    margin: 1.5rem 0 0.75rem;
}

.about-card p {
    color: var(--foreground-muted);
    line-height: 1.6;
}

.about-image {
    position: relative;
    overflow: hidden;
}

.about-image img {
    width: 100%;
    height: 28rem;
    object-fit: cover;
    display: block;
    transition: transform 0.5s ease;
}

.about-image:hover img {
    transform: scale(1.1);
}

.about-image-caption {
    position: absolute;
    left: 1.5rem;
    bottom: 1.5rem;
    font-family: 'JetBrains Mono', monospace;
    color: var(--neon-green);
}

.arsenal-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-end;
    gap: 2rem;
    flex-wrap: wrap;
    margin-bottom: 4rem;
}

.arsenal-track {
    display: flex;
    gap: 2rem;
    overflow-x: auto;
    padding-bottom: 2rem;
    scroll-snap-type: x mandatory;
}

.arsenal-item {
    flex: 0 0 24rem;
    scroll-snap-align: start;
}

.service-card {
    display: flex;
    flex-direction: column;
    height: 100%;
    color: inherit;
    text-decoration: none;
    overflow: hidden;
}

.service-card-media {
    position: relative;
    height: 14rem;
    background: rgba(57, 255, 20, 0.05);
    display: flex;
    align-items: center;
    justify-content: center;
}

.service-card-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.service-card-placeholder {
    color: rgba(57, 255, 20, 0.3);
}

.service-card-icon {
    position: absolute;
    left: 1.5rem;
    bottom: -2rem;
    background: var(--dark-charcoal);
}

.service-card-badge {
    position: absolute;
    top: 1rem;
    right: 1rem;
    font-family: 'JetBrains Mono', monospace;
    font-size: 0.7rem;
    letter-spacing: 0.2em;
    background: var(--neon-green);
    color: var(--dark-charcoal);
    padding: 0.25rem 0.6rem;
    border-radius: 0.25rem;
}

.service-card-body {
    padding: 3rem 1.5rem 1rem;
    flex: 1;
}

.service-card-body h3 {
    font-family: var(--font-heading);
    font-size: 1.5rem;
    margin: 0 0 0.75rem;
}

.service-card-body p {
    color: var(--foreground-muted);
    line-height: 1.6;
}

.service-card-footer {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 1.5rem;
    border-top: 1px solid rgba(57, 255, 20, 0.1);
    font-family: 'JetBrains Mono', monospace;
    font-size: 0.8rem;
    color: var(--foreground-muted);
}

.service-card-arrow {
    color: var(--neon-green);
    transition: transform 0.3s ease;
}

.service-card:hover .service-card-arrow {
    transform: rotate(-45deg);
}

.process-grid {
    position: relative;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
    margin-top: 4rem;
}

.process-line {
    position: absolute;
    top: 50%;
    left: 0;
    right: 0;
    height: 1px;
    background: linear-gradient(to right, transparent, var(--neon-green), transparent);
    opacity: 0.3;
}

.process-step {
    position: relative;
    padding: 2rem;
    height: 100%;
}

.process-number {
    position: absolute;
    top: 1rem;
    right: 1.5rem;
    font-family: var(--font-heading);
    font-size: 3rem;
    font-weight: 700;
    color: rgba(57, 255, 20, 0.15);
}

.process-step h3 {
    font-family: var(--font-heading);
    margin: 1.5rem 0 0.75rem;
}

.process-step p {
    color: var(--foreground-muted);
    line-height: 1.6;
}

.stats {
    border-top: 1px solid rgba(57, 255, 20, 0.2);
    border-bottom: 1px solid rgba(57, 255, 20, 0.2);
    background: rgba(57, 255, 20, 0.03);
}

.stats-grid {
    max-width: 120rem;
    margin: 0 auto;
    padding: 5rem 2rem;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
    text-align: center;
}

.stat-value {
    font-family: var(--font-heading);
    font-size: clamp(3rem, 6vw, 5rem);
    font-weight: 700;
    color: var(--neon-green);
    text-shadow: 0 0 30px rgba(57, 255, 20, 0.4);
}

.stat-label {
    font-family: 'JetBrains Mono', monospace;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: var(--foreground-muted);
}

.contact {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: start;
}

.contact-channels {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    margin-top: 2.5rem;
}

.contact-channel {
    display: flex;
    align-items: center;
    gap: 1rem;
    color: inherit;
    text-decoration: none;
    transition: transform 0.3s ease;
}

.contact-channel:hover {
    transform: translateX(10px);
}

.contact-form {
    padding: 2.5rem;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.contact-form-row {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.contact-form-row label {
    font-family: 'JetBrains Mono', monospace;
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--neon-green);
}

.contact-form input, .contact-form textarea {
    background: rgba(0, 0, 0, 0.4);
    border: 1px solid rgba(57, 255, 20, 0.2);
    border-radius: 0.5rem;
    padding: 1rem;
    color: var(--foreground);
    font-family: 'JetBrains Mono', monospace;
}

.contact-form input:focus, .contact-form textarea:focus {
    outline: none;
    border-color: var(--neon-green);
}

.contact-form-error {
    color: #ff5f56;
    margin: 0;
}

.contact-form-sent {
    color: var(--neon-green);
    margin: 0;
}

.contact-submit {
    justify-content: center;
}

@media (max-width: 1000px) {
    .about, .contact {
        grid-template-columns: 1fr;
    }
    .about-cards {
        grid-template-columns: 1fr;
    }
    .process-grid, .stats-grid {
        grid-template-columns: repeat(2, 1fr);
    }
    .process-line {
        display: none;
    }
}
"#;
