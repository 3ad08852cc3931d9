/// Site-wide palette, typography and the shared effect classes used by every page.
pub const SITE_STYLES: &str = r#"
:root {
    --dark-charcoal: #121212;
    --neon-green: #39ff14;
    --foreground: #f2f2f2;
    --foreground-muted: rgba(242, 242, 242, 0.7);
    --font-heading: 'Space Grotesk', 'Inter', sans-serif;
    --font-paragraph: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--dark-charcoal);
    color: var(--foreground);
    font-family: var(--font-paragraph);
    overflow-x: clip;
}

::selection {
    background: var(--neon-green);
    color: var(--dark-charcoal);
}

.reveal-base {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s cubic-bezier(0.16, 1, 0.3, 1), transform 0.8s cubic-bezier(0.16, 1, 0.3, 1);
}

.reveal-base.is-visible {
    opacity: 1;
    transform: translateY(0);
}

@media (prefers-reduced-motion: reduce) {
    .reveal-base {
        opacity: 1;
        transform: none;
        transition: none;
    }
}

.glass-panel {
    background: rgba(18, 18, 18, 0.6);
    backdrop-filter: blur(12px);
    border: 1px solid rgba(57, 255, 20, 0.15);
    box-shadow: 0 4px 30px rgba(0, 0, 0, 0.1);
    border-radius: 1rem;
}

.grid-bg {
    background-size: 50px 50px;
    background-image: linear-gradient(to right, rgba(57, 255, 20, 0.05) 1px, transparent 1px),
                      linear-gradient(to bottom, rgba(57, 255, 20, 0.05) 1px, transparent 1px);
}

.section {
    max-width: 120rem;
    margin: 0 auto;
    padding: 8rem 2rem;
    position: relative;
}

.section-title {
    font-family: var(--font-heading);
    font-size: clamp(2.5rem, 6vw, 5rem);
    font-weight: 700;
    line-height: 1;
    margin: 0 0 1.5rem;
}

.section-title .accent, .accent {
    color: var(--neon-green);
}

.section-lead {
    font-size: 1.25rem;
    color: var(--foreground-muted);
    max-width: 48rem;
    line-height: 1.7;
}

.eyebrow {
    display: inline-block;
    font-family: 'JetBrains Mono', monospace;
    font-size: 0.8rem;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    color: var(--neon-green);
    border: 1px solid rgba(57, 255, 20, 0.3);
    border-radius: 999px;
    padding: 0.4rem 1rem;
    margin-bottom: 1.5rem;
}

.btn-primary, .btn-outline {
    display: inline-flex;
    align-items: center;
    gap: 0.6rem;
    font-weight: 600;
    padding: 1rem 2rem;
    border-radius: 0.5rem;
    text-decoration: none;
    cursor: pointer;
    transition: transform 0.2s ease, box-shadow 0.3s ease, background 0.3s ease;
    font-family: var(--font-paragraph);
    font-size: 1rem;
}

.btn-primary {
    background: var(--neon-green);
    color: var(--dark-charcoal);
    border: none;
}

.btn-primary:hover {
    transform: scale(1.05);
    box-shadow: 0 0 40px rgba(57, 255, 20, 0.6);
}

.btn-primary:active, .btn-outline:active {
    transform: scale(0.95);
}

.btn-outline {
    background: transparent;
    color: var(--neon-green);
    border: 1px solid var(--neon-green);
}

.btn-outline:hover {
    background: rgba(57, 255, 20, 0.1);
    transform: scale(1.05);
}

.hover-lift {
    transition: transform 0.3s ease, border-color 0.3s ease;
}

.hover-lift:hover {
    transform: translateY(-10px);
    border-color: rgba(57, 255, 20, 0.4);
}

.icon-badge {
    width: 4rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 0.75rem;
    background: rgba(57, 255, 20, 0.1);
    border: 2px solid rgba(57, 255, 20, 0.3);
    color: var(--neon-green);
    flex-shrink: 0;
}

.loading-pulse {
    height: 18rem;
    border-radius: 1rem;
    background: linear-gradient(90deg, transparent, rgba(57, 255, 20, 0.12), transparent);
    background-size: 1000px 100%;
    animation: shimmer 3s infinite;
}

.empty-state {
    color: var(--foreground-muted);
    font-family: 'JetBrains Mono', monospace;
}

@keyframes shimmer {
    0% { background-position: -1000px 0; }
    100% { background-position: 1000px 0; }
}

@keyframes glow-pulse {
    0%, 100% { box-shadow: 0 0 20px rgba(57, 255, 20, 0.3); }
    50% { box-shadow: 0 0 40px rgba(57, 255, 20, 0.5); }
}

@keyframes float {
    0%, 100% { transform: translateY(0px); }
    50% { transform: translateY(-20px); }
}

@keyframes rotate-slow {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
}

.animate-float {
    animation: float 3s ease-in-out infinite;
}

.animate-rotate-slow {
    animation: rotate-slow 20s linear infinite;
}
"#;
