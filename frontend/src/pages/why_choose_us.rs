use std::time::Duration;

use yew::prelude::*;

use crate::components::image::Image;
use crate::config::REVEAL_STAGGER_MS;
use crate::icons::{Icon, IconSvg};
use crate::navigation::use_scroll_to_top;
use crate::reveal::{stagger, Reveal};

const TEAM_IMAGE: &str = "https://static.wixstatic.com/media/5283f4_85b89e1e1837427fa45066b85d892665~mv2.png?originWidth=896&originHeight=448";

pub struct Reason {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub const REASONS: [Reason; 8] = [
    Reason {
        icon: Icon::Zap,
        title: "Lightning-Fast Delivery",
        description: "We prioritize speed without sacrificing quality. Our agile methodology ensures rapid deployment of your digital solutions.",
        gradient: "linear-gradient(135deg, #39ff14, #10b981)",
    },
    Reason {
        icon: Icon::Shield,
        title: "Enterprise-Grade Security",
        description: "Your data is protected with military-grade encryption and compliance with international security standards.",
        gradient: "linear-gradient(135deg, #60a5fa, #06b6d4)",
    },
    Reason {
        icon: Icon::Users,
        title: "Expert Team",
        description: "Our team consists of seasoned developers, designers, and strategists with decades of combined experience.",
        gradient: "linear-gradient(135deg, #c084fc, #ec4899)",
    },
    Reason {
        icon: Icon::TrendingUp,
        title: "Scalable Solutions",
        description: "Built to grow with your business. Our architecture supports seamless scaling as your needs evolve.",
        gradient: "linear-gradient(135deg, #fb923c, #ef4444)",
    },
    Reason {
        icon: Icon::Award,
        title: "Award-Winning Work",
        description: "Recognized for excellence in design, development, and innovation across multiple industry awards.",
        gradient: "linear-gradient(135deg, #facc15, #f97316)",
    },
    Reason {
        icon: Icon::Lightbulb,
        title: "Innovation-Driven",
        description: "We stay ahead of the curve, constantly exploring new technologies and methodologies to benefit your project.",
        gradient: "linear-gradient(135deg, #818cf8, #3b82f6)",
    },
    Reason {
        icon: Icon::Rocket,
        title: "Proven Track Record",
        description: "Over 100+ successful projects delivered across diverse industries and markets worldwide.",
        gradient: "linear-gradient(135deg, #4ade80, #10b981)",
    },
    Reason {
        icon: Icon::Target,
        title: "Strategic Focus",
        description: "We align our efforts with your business goals, ensuring every solution drives measurable results.",
        gradient: "linear-gradient(135deg, #f472b6, #f43f5e)",
    },
];

pub const BENEFITS: [(Icon, &str); 4] = [
    (Icon::Clock, "24/7 Support & Maintenance"),
    (Icon::Code, "Clean, Maintainable Code"),
    (Icon::Layers, "Modern Tech Stack"),
    (Icon::CheckCircle, "100% Satisfaction Guarantee"),
];

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    use_scroll_to_top();
    let step = Duration::from_millis(REVEAL_STAGGER_MS);

    html! {
        <div class="why-page">
            <section class="section why-hero">
                <div class="grid-bg why-grid"></div>
                <Reveal>
                    <span class="eyebrow">{"Why Choose Us"}</span>
                    <h1 class="why-title">
                        {"THE REASONS"}<br />
                        <span class="accent">{"TO PARTNER WITH US"}</span>
                    </h1>
                    <p class="section-lead">
                        {"We're not just another development agency. We're your strategic partner in digital transformation, committed to delivering excellence at every step of your journey."}
                    </p>
                </Reveal>
                <Reveal delay={stagger(2, step)}>
                    <div class="why-image">
                        <Image src={TEAM_IMAGE} alt="Luminaryforge Team working together" />
                    </div>
                </Reveal>
            </section>

            <section class="section why-reasons">
                <Reveal class="why-heading">
                    <h2 class="section-title">{"OUR "}<span class="accent">{"COMPETITIVE ADVANTAGES"}</span></h2>
                    <p class="section-lead">
                        {"Eight core reasons why leading companies choose Luminaryforge Tech for their digital initiatives."}
                    </p>
                </Reveal>
                <div class="reason-grid">
                    { for REASONS.iter().enumerate().map(|(index, reason)| html! {
                        <Reveal delay={stagger(index, step)}>
                            <div class="reason-card glass-panel hover-lift">
                                <div class="reason-icon" style={format!("background: {};", reason.gradient)}>
                                    <IconSvg icon={reason.icon} size={28} />
                                </div>
                                <h3>{ reason.title }</h3>
                                <p>{ reason.description }</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="section why-benefits">
                <Reveal>
                    <h2 class="section-title">
                        {"WHAT YOU GET"}<br />
                        <span class="accent">{"WITH LUMINARYFORGE"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Beyond exceptional code and stunning design, we provide a complete partnership experience designed to ensure your success."}
                    </p>
                    <div class="benefit-list">
                        { for BENEFITS.iter().enumerate().map(|(index, (icon, text))| html! {
                            <Reveal delay={stagger(index, step)}>
                                <div class="benefit">
                                    <span class="benefit-icon"><IconSvg icon={*icon} size={24} /></span>
                                    <span class="benefit-text">{ *text }</span>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </Reveal>
                <Reveal delay={stagger(2, step)}>
                    <div class="why-image tall">
                        <Image src={TEAM_IMAGE} alt="Luminaryforge Team collaborating" />
                    </div>
                </Reveal>
            </section>

            <section class="section why-cta">
                <Reveal>
                    <h2 class="section-title">
                        {"READY TO TRANSFORM"}<br />
                        <span class="accent">{"YOUR DIGITAL FUTURE?"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Let's discuss how Luminaryforge Tech can help you achieve your business goals through innovative digital solutions."}
                    </p>
                    <a href="/#contact" class="btn-primary">{"GET IN TOUCH TODAY"}</a>
                </Reveal>
            </section>
            <style>
                {r#"
.why-hero {
    padding-top: 10rem;
}

.why-grid {
    position: absolute;
    inset: 0;
    opacity: 0.2;
    pointer-events: none;
}

.why-title {
    font-family: var(--font-heading);
    font-size: clamp(3.5rem, 9vw, 7rem);
    line-height: 0.9;
    margin: 0 0 2rem;
}

.why-hero .section-lead {
    margin-bottom: 3rem;
}

.why-image {
    position: relative;
    height: 400px;
    border-radius: 1rem;
    overflow: hidden;
    border: 1px solid rgba(255, 255, 255, 0.1);
    transition: border-color 0.5s ease;
}

.why-image.tall {
    height: 500px;
}

.why-image:hover {
    border-color: rgba(57, 255, 20, 0.5);
}

.why-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.5s ease;
}

.why-image:hover img {
    transform: scale(1.05);
}

.why-reasons, .why-benefits, .why-cta {
    border-top: 1px solid rgba(255, 255, 255, 0.05);
}

.why-heading {
    text-align: center;
    margin-bottom: 6rem;
}

.why-heading .section-lead {
    margin: 0 auto;
}

.reason-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}

.reason-card {
    padding: 2rem;
    height: 100%;
    display: flex;
    flex-direction: column;
}

.reason-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 0.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    color: white;
    margin-bottom: 1.5rem;
    animation: wobble 4s ease-in-out infinite;
}

@keyframes wobble {
    0%, 100% { transform: rotate(0deg); }
    33% { transform: rotate(5deg); }
    66% { transform: rotate(-5deg); }
}

.reason-card h3 {
    font-family: var(--font-heading);
    margin: 0 0 1rem;
    transition: color 0.3s ease;
}

.reason-card:hover h3 {
    color: var(--neon-green);
}

.reason-card p {
    color: var(--foreground-muted);
    line-height: 1.6;
    flex-grow: 1;
}

.why-benefits {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}

.benefit-list {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    margin-top: 3rem;
}

.benefit {
    display: flex;
    align-items: center;
    gap: 1rem;
    transition: transform 0.3s ease;
}

.benefit:hover {
    transform: translateX(10px);
}

.benefit-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    border: 1px solid rgba(57, 255, 20, 0.3);
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--neon-green);
    flex-shrink: 0;
}

.benefit:hover .benefit-icon {
    background: var(--neon-green);
    color: black;
}

.benefit-text {
    font-family: var(--font-heading);
    font-weight: 700;
    font-size: 1.15rem;
}

.why-cta {
    text-align: center;
}

.why-cta .section-lead {
    margin: 0 auto 3rem;
}

@media (max-width: 1100px) {
    .reason-grid {
        grid-template-columns: repeat(2, 1fr);
    }
    .why-benefits {
        grid-template-columns: 1fr;
    }
}

@media (max-width: 640px) {
    .reason-grid {
        grid-template-columns: 1fr;
    }
}
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_titles_are_distinct() {
        let mut titles: Vec<_> = REASONS.iter().map(|reason| reason.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), REASONS.len());
    }

    #[test]
    fn last_reason_card_waits_longest() {
        let step = Duration::from_millis(REVEAL_STAGGER_MS);
        assert_eq!(stagger(REASONS.len() - 1, step), Duration::from_millis(700));
    }
}
