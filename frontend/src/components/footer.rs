use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, CONTACT_PHONE_HREF, REVEAL_STAGGER_MS};
use crate::icons::{Icon, IconSvg};
use crate::reveal::{stagger, Reveal};
use crate::Route;
use std::time::Duration;

const SOCIAL_LINKS: [(Icon, &str, &str); 3] = [
    (Icon::Github, "#", "GitHub"),
    (Icon::Linkedin, "#", "LinkedIn"),
    (Icon::Twitter, "#", "Twitter"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    let mailto = format!("mailto:{}", CONTACT_EMAIL);
    let step = Duration::from_millis(REVEAL_STAGGER_MS);

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <Reveal class="footer-column">
                    <div class="footer-brand">
                        <span class="logo-mark">{"LF"}</span>
                        <span class="logo-text">{"Luminaryforge"}<small>{"TECH"}</small></span>
                    </div>
                    <p class="footer-blurb">
                        {"Forging the future of technology with cutting-edge solutions in web development, app creation, UI/UX design, 3D modeling, game development, and digital marketing."}
                    </p>
                </Reveal>

                <Reveal class="footer-column" delay={stagger(1, step)}>
                    <h3>{"Contact"}</h3>
                    <a href={mailto} class="footer-contact">
                        <IconSvg icon={Icon::Mail} size={18} />{ CONTACT_EMAIL }
                    </a>
                    <a href={CONTACT_PHONE_HREF} class="footer-contact">
                        <IconSvg icon={Icon::Phone} size={18} />{ CONTACT_PHONE }
                    </a>
                    <span class="footer-contact">
                        <IconSvg icon={Icon::MapPin} size={18} />{ CONTACT_LOCATION }
                    </span>
                </Reveal>

                <Reveal class="footer-column" delay={stagger(2, step)}>
                    <h3>{"Explore"}</h3>
                    <Link<Route> to={Route::Home} classes="footer-link">{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Services} classes="footer-link">{"Services"}</Link<Route>>
                    <Link<Route> to={Route::WhyChooseUs} classes="footer-link">{"Why Choose Us"}</Link<Route>>
                    <div class="footer-social">
                        { for SOCIAL_LINKS.iter().map(|(icon, href, label)| html! {
                            <a href={*href} aria-label={*label} class="social-link">
                                <IconSvg icon={*icon} size={20} />
                            </a>
                        }) }
                    </div>
                </Reveal>
            </div>
            <div class="footer-bottom">
                { format!("© {} Luminaryforge Tech. All rights reserved.", year) }
            </div>
            <style>
                {r#"
.site-footer {
    border-top: 1px solid rgba(57, 255, 20, 0.2);
    background: #0d0d0d;
    padding: 4rem 2rem 2rem;
}

.footer-grid {
    max-width: 120rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 2fr 1fr 1fr;
    gap: 3rem;
}

.footer-brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin-bottom: 1.5rem;
}

.footer-blurb {
    color: var(--foreground-muted);
    line-height: 1.7;
    max-width: 32rem;
}

.footer-column h3 {
    font-family: var(--font-heading);
    color: var(--neon-green);
    margin-bottom: 1.25rem;
}

.footer-contact, .footer-link {
    display: flex;
    align-items: center;
    gap: 0.6rem;
    color: var(--foreground-muted);
    text-decoration: none;
    margin-bottom: 0.9rem;
    transition: color 0.3s ease;
}

.footer-contact:hover, .footer-link:hover, .social-link:hover {
    color: var(--neon-green);
}

.footer-social {
    display: flex;
    gap: 1rem;
    margin-top: 1.5rem;
}

.social-link {
    color: var(--foreground-muted);
    transition: color 0.3s ease, transform 0.3s ease;
}

.social-link:hover {
    transform: translateY(-3px);
}

.footer-bottom {
    max-width: 120rem;
    margin: 3rem auto 0;
    padding-top: 1.5rem;
    border-top: 1px solid rgba(57, 255, 20, 0.1);
    text-align: center;
    color: var(--foreground-muted);
    font-size: 0.85rem;
}

@media (max-width: 900px) {
    .footer-grid {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </footer>
    }
}
