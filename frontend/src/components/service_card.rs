use yew::prelude::*;

use crate::catalog::{service_number, ServiceRecord};
use crate::components::image::Image;
use crate::icons::{Icon, IconSvg};

const FALLBACK_DESCRIPTION: &str = "Advanced digital solution for modern enterprises.";

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: ServiceRecord,
    pub index: usize,
}

/// Card linking to the service's section on the services page.
#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    let icon = service.icon();
    let title = if service.name.is_empty() { "Service" } else { service.name.as_str() };

    html! {
        <a href={service.anchor_href()} class="service-card glass-panel hover-lift">
            <div class="service-card-media">
                {
                    match &service.image_ref {
                        Some(image) => html! {
                            <Image src={image.clone()} alt={title.to_string()} width={450} class="service-card-image" />
                        },
                        None => html! {
                            <div class="service-card-placeholder animate-rotate-slow">
                                <IconSvg icon={icon} size={72} />
                            </div>
                        },
                    }
                }
                <div class="service-card-icon icon-badge">
                    <IconSvg icon={icon} size={28} />
                </div>
                {
                    if service.is_featured {
                        html! { <span class="service-card-badge">{"FEATURED"}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="service-card-body">
                <h3>{ title }</h3>
                <p>{ service.short_description.as_deref().unwrap_or(FALLBACK_DESCRIPTION) }</p>
            </div>
            <div class="service-card-footer">
                <span>{ format!("// Service ID: {}", service_number(props.index)) }</span>
                <span class="service-card-arrow"><IconSvg icon={Icon::ArrowRight} size={20} /></span>
            </div>
        </a>
    }
}
