use std::fmt::Debug;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::icons::{Icon, IconSvg};
use crate::Route;

const SCROLLED_OFFSET: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { name: "Home", path: "/" },
    NavLink { name: "Services", path: "/services" },
    NavLink { name: "Why Choose Us", path: "/why-choose-us" },
    NavLink { name: "Contact", path: "/#contact" },
];

/// Home is only active on `/`; other links match by path prefix.
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    if link_path == "/" {
        return current_path == "/";
    }
    current_path.starts_with(link_path)
}

fn nav_item(link: &NavLink, current_path: &str, class: &'static str, on_click: Callback<MouseEvent>) -> Html {
    let classes = classes!(class, is_active(link.path, current_path).then(|| "active"));
    let route = if link.path.contains('#') {
        None
    } else {
        Route::recognize(link.path)
    };

    match route {
        Some(route) => html! {
            <span onclick={on_click}>
                <Link<Route> to={route} classes={classes}>
                    { link.name }
                    <span class="nav-underline"></span>
                </Link<Route>>
            </span>
        },
        None => html! {
            <a href={link.path} class={classes} onclick={on_click}>
                { link.name }
                <span class="nav-underline"></span>
            </a>
        },
    }
}

/// Logs a failed listener (de)registration. Returns whether it succeeded.
fn listener_ok<E: Debug>(action: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!("Failed to {} scroll listener: {:?}", action, err);
            false
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let watched = window.clone();
                    let callback = Closure::<dyn FnMut()>::new(move || {
                        let offset = watched.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(offset > SCROLLED_OFFSET);
                    });
                    listener_ok("add", window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()));
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        listener_ok(
                            "remove",
                            window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <span class="logo-mark">{"LF"}</span>
                    <span class="logo-text">{"Luminaryforge"}<small>{"TECH"}</small></span>
                </Link<Route>>

                <nav class="header-nav">
                    { for NAV_LINKS.iter().map(|link| nav_item(link, &current_path, "nav-link", Callback::noop())) }
                </nav>

                <button class="menu-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                    <IconSvg icon={if *menu_open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <nav class="mobile-nav">
                            { for NAV_LINKS.iter().map(|link| nav_item(link, &current_path, "mobile-nav-link", close_menu.clone())) }
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    transition: background 0.3s ease, border-color 0.3s ease;
    border-bottom: 1px solid transparent;
    animation: header-drop 0.6s ease-out;
}

.site-header.scrolled {
    background: rgba(18, 18, 18, 0.85);
    backdrop-filter: blur(12px);
    border-bottom-color: rgba(57, 255, 20, 0.15);
}

@keyframes header-drop {
    from { transform: translateY(-100px); }
    to { transform: translateY(0); }
}

.header-content {
    max-width: 120rem;
    margin: 0 auto;
    padding: 1.25rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.header-logo {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    text-decoration: none;
}

.logo-mark {
    width: 2.75rem;
    height: 2.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 0.5rem;
    background: var(--neon-green);
    color: var(--dark-charcoal);
    font-family: var(--font-heading);
    font-weight: 700;
    animation: glow-pulse 2s ease-in-out infinite;
}

.logo-text {
    font-family: var(--font-heading);
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--neon-green);
    display: flex;
    flex-direction: column;
    line-height: 1;
}

.logo-text small {
    font-size: 0.65rem;
    letter-spacing: 0.4em;
    color: var(--foreground-muted);
}

.header-nav {
    display: flex;
    gap: 2.5rem;
}

.nav-link, .mobile-nav-link {
    position: relative;
    color: var(--foreground);
    text-decoration: none;
    font-weight: 500;
    transition: color 0.3s ease;
}

.nav-link.active, .nav-link:hover, .mobile-nav-link.active {
    color: var(--neon-green);
}

.nav-underline {
    position: absolute;
    left: 0;
    bottom: -0.3rem;
    height: 2px;
    width: 0;
    background: var(--neon-green);
    transition: width 0.3s ease;
}

.nav-link:hover .nav-underline, .nav-link.active .nav-underline {
    width: 100%;
}

.menu-toggle {
    display: none;
    background: none;
    border: none;
    color: var(--neon-green);
    cursor: pointer;
}

.mobile-nav {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1rem 2rem 2rem;
    background: rgba(18, 18, 18, 0.95);
    border-bottom: 1px solid rgba(57, 255, 20, 0.2);
}

.mobile-nav-link .nav-underline {
    display: none;
}

@media (max-width: 900px) {
    .header-nav {
        display: none;
    }
    .menu-toggle {
        display: block;
    }
}
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_only_active_on_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/services"));
    }

    #[test]
    fn other_links_match_by_prefix() {
        assert!(is_active("/services", "/services"));
        assert!(is_active("/services", "/services/web"));
        assert!(!is_active("/services", "/why-choose-us"));
        assert!(is_active("/why-choose-us", "/why-choose-us"));
    }

    #[test]
    fn fragment_links_are_never_active() {
        assert!(!is_active("/#contact", "/"));
        assert!(!is_active("/#contact", "/services"));
    }

    #[test]
    fn nav_links_resolve_to_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/services"), Some(Route::Services));
        assert_eq!(Route::recognize("/why-choose-us"), Some(Route::WhyChooseUs));
    }

    #[test]
    fn listener_failures_are_reported_not_dropped() {
        assert!(listener_ok::<String>("add", Ok(())));
        assert!(!listener_ok("remove", Err("listener already detached".to_string())));
    }
}
