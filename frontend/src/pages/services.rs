use std::time::Duration;

use yew::prelude::*;

use crate::catalog::{use_service_catalog, ServiceRecord};
use crate::components::image::Image;
use crate::config::REVEAL_STAGGER_MS;
use crate::icons::{Icon, IconSvg};
use crate::navigation::{use_fragment_scroll, use_scroll_to_top};
use crate::reveal::{stagger, Reveal};

/// Services alternate sides: even indexes put the copy on the left.
pub fn copy_on_left(index: usize) -> bool {
    index % 2 == 0
}

#[function_component(Services)]
pub fn services() -> Html {
    let catalog = use_service_catalog();
    use_scroll_to_top();
    use_fragment_scroll(catalog.view.all.len());

    let body = if catalog.loading {
        html! { <div class="loading-pulse"></div> }
    } else if catalog.view.is_empty() {
        html! { <p class="empty-state">{"// No services are published right now."}</p> }
    } else {
        html! {
            <div class="service-sections">
                { for catalog.view.all.iter().enumerate().map(|(index, service)| service_section(service, index)) }
            </div>
        }
    };

    html! {
        <div class="services-page">
            <section class="services-hero">
                <Reveal>
                    <h1 class="services-title">{"Our Services"}</h1>
                    <p class="section-lead">{"Comprehensive technology solutions designed to elevate your business"}</p>
                </Reveal>
            </section>

            <section class="section services-list">
                { body }
            </section>

            <section class="section">
                <Reveal class="services-cta">
                    <h2 class="section-title accent">{"Ready to Start Your Project?"}</h2>
                    <p class="section-lead">
                        {"Let's collaborate to bring your vision to life with our expert team and cutting-edge solutions."}
                    </p>
                    <a href="/#contact" class="btn-primary">{"Contact Us Today"}</a>
                </Reveal>
            </section>
            <style>{ SERVICES_STYLES }</style>
        </div>
    }
}

fn service_section(service: &ServiceRecord, index: usize) -> Html {
    let icon = service.icon();
    let capabilities = service.capability_list();
    let step = Duration::from_millis(REVEAL_STAGGER_MS);
    let side = if copy_on_left(index) { "copy-left" } else { "copy-right" };
    let title = if service.name.is_empty() { "Service" } else { service.name.as_str() };

    html! {
        <Reveal key={service.id.clone()} id={service.id.clone()} class={classes!("service-section", side)}>
            <div class="service-copy">
                <div class="service-heading">
                    <div class="icon-badge"><IconSvg icon={icon} size={32} /></div>
                    <h2>{ title }</h2>
                </div>
                {
                    for service.short_description.iter().map(|text| html! {
                        <p class="service-short">{ text.clone() }</p>
                    })
                }
                {
                    for service.detailed_description.iter().map(|text| html! {
                        <p class="service-detail">{ text.clone() }</p>
                    })
                }
                {
                    if capabilities.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="capabilities">
                                <h3>{"Key Capabilities"}</h3>
                                <ul>
                                    { for capabilities.into_iter().enumerate().map(|(i, capability)| html! {
                                        <li>
                                            <Reveal delay={stagger(i, step)} class="capability">
                                                <IconSvg icon={Icon::CheckCircle} size={20} />
                                                <span>{ capability }</span>
                                            </Reveal>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        }
                    }
                }
                <a href="/#contact" class="btn-primary service-start">{"Get Started"}</a>
            </div>
            <div class="service-visual">
                {
                    match &service.image_ref {
                        Some(image) => html! {
                            <div class="service-image-frame">
                                <Image src={image.clone()} alt={title.to_string()} width={800} class="service-image" />
                                <span class="corner corner-top"></span>
                                <span class="corner corner-bottom"></span>
                            </div>
                        },
                        None => html! {
                            <div class="service-image-placeholder">
                                <IconSvg icon={icon} size={120} />
                            </div>
                        },
                    }
                }
            </div>
        </Reveal>
    }
}

const SERVICES_STYLES: &str = r#"
.services-hero {
    padding: 10rem 2rem 4rem;
    text-align: center;
}

.services-hero .section-lead {
    margin: 0 auto;
}

.services-title {
    font-family: var(--font-heading);
    font-size: clamp(3.5rem, 9vw, 7rem);
    color: var(--neon-green);
    margin: 0 0 1.5rem;
    animation: title-glow 2s ease-in-out infinite;
}

@keyframes title-glow {
    0%, 100% { text-shadow: 0 0 20px rgba(57, 255, 20, 0.5); }
    50% { text-shadow: 0 0 40px rgba(57, 255, 20, 0.8); }
}

.service-sections {
    display: flex;
    flex-direction: column;
    gap: 8rem;
}

.service-section {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
    scroll-margin-top: 8rem;
}

.service-section.copy-right .service-copy {
    order: 2;
}

.service-heading {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.service-heading h2 {
    font-family: var(--font-heading);
    font-size: clamp(2rem, 4vw, 3rem);
    color: var(--neon-green);
    margin: 0;
}

.service-short {
    font-size: 1.15rem;
    color: var(--foreground-muted);
    line-height: 1.7;
}

.service-detail {
    color: rgba(242, 242, 242, 0.6);
    line-height: 1.7;
    margin-bottom: 2rem;
}

.capabilities {
    background: rgba(57, 255, 20, 0.05);
    border: 1px solid rgba(57, 255, 20, 0.2);
    border-radius: 1rem;
    padding: 1.5rem;
}

.capabilities h3 {
    font-family: var(--font-heading);
    color: var(--neon-green);
    margin: 0 0 1rem;
}

.capabilities ul {
    list-style: none;
    padding: 0;
    margin: 0;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.capability {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    color: var(--foreground-muted);
}

.capability svg {
    color: var(--neon-green);
    flex-shrink: 0;
}

.service-start {
    margin-top: 2rem;
}

.service-image-frame {
    position: relative;
}

.service-image {
    width: 100%;
    height: 500px;
    object-fit: cover;
    border-radius: 1rem;
    border: 2px solid rgba(57, 255, 20, 0.3);
    display: block;
}

.corner {
    position: absolute;
    width: 6rem;
    height: 6rem;
    border-color: rgba(57, 255, 20, 0.5);
    border-style: solid;
}

.corner-top {
    top: -1rem;
    right: -1rem;
    border-width: 2px 2px 0 0;
    border-top-right-radius: 1rem;
}

.corner-bottom {
    bottom: -1rem;
    left: -1rem;
    border-width: 0 0 2px 2px;
    border-bottom-left-radius: 1rem;
}

.service-image-placeholder {
    height: 500px;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 1rem;
    border: 2px solid rgba(57, 255, 20, 0.3);
    background: rgba(57, 255, 20, 0.05);
    color: rgba(57, 255, 20, 0.3);
}

.services-cta {
    position: relative;
    text-align: center;
    padding: 4rem;
    border-radius: 1rem;
    border: 1px solid rgba(57, 255, 20, 0.2);
    background: rgba(57, 255, 20, 0.05);
}

.services-cta .section-lead {
    margin: 0 auto 2rem;
}

@media (max-width: 1000px) {
    .service-section {
        grid-template-columns: 1fr;
    }
    .service-section.copy-right .service-copy {
        order: 0;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_alternate_sides() {
        assert!(copy_on_left(0));
        assert!(!copy_on_left(1));
        assert!(copy_on_left(2));
        assert!(!copy_on_left(5));
    }
}
