use log::{info, warn};
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::icons::{Icon, IconSvg};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactFormError {
    MissingName,
    InvalidEmail,
    MissingMessage,
}

impl ContactFormError {
    pub fn message(&self) -> &'static str {
        match self {
            ContactFormError::MissingName => "Please enter your name.",
            ContactFormError::InvalidEmail => "Please enter a valid email address.",
            ContactFormError::MissingMessage => "Please tell us about your project.",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(name: &str, email: &str, message: &str) -> Result<Self, ContactFormError> {
        let (name, email, message) = (name.trim(), email.trim(), message.trim());
        if name.is_empty() {
            return Err(ContactFormError::MissingName);
        }
        if !looks_like_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactFormError::MissingMessage);
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// `mailto:` link that opens the visitor's mail client with the form filled in.
    pub fn mailto_href(&self, to: &str) -> String {
        let subject = format!("Project inquiry from {}", self.name);
        let body = format!("{}\n\n-- \n{} <{}>", self.message, self.name, self.email);
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<ContactFormError>);
    let sent = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_submit = {
        let (name, email, message) = (name.clone(), email.clone(), message.clone());
        let (error, sent) = (error.clone(), sent.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match ContactMessage::validate(&name, &email, &message) {
                Ok(contact) => {
                    error.set(None);
                    let href = contact.mailto_href(CONTACT_EMAIL);
                    match window().map(|w| w.location().set_href(&href)) {
                        Some(Ok(())) => {
                            info!("Opened mail client for contact form");
                            sent.set(true);
                        }
                        _ => warn!("Could not open mail client for contact form"),
                    }
                }
                Err(err) => {
                    sent.set(false);
                    error.set(Some(err));
                }
            }
        })
    };

    html! {
        <form class="contact-form glass-panel" onsubmit={on_submit}>
            <div class="contact-form-row">
                <label for="name">{"Name"}</label>
                <input type="text" id="name" placeholder="ENTER NAME" value={(*name).clone()} oninput={on_name} />
            </div>
            <div class="contact-form-row">
                <label for="email">{"Email"}</label>
                <input type="email" id="email" placeholder="ENTER EMAIL" value={(*email).clone()} oninput={on_email} />
            </div>
            <div class="contact-form-row">
                <label for="message">{"Message"}</label>
                <textarea id="message" rows="4" placeholder="ENTER MESSAGE DATA..." value={(*message).clone()} oninput={on_message} />
            </div>
            {
                if let Some(err) = &*error {
                    html! { <p class="contact-form-error">{ err.message() }</p> }
                } else if *sent {
                    html! { <p class="contact-form-sent">{"Transmission ready in your mail client."}</p> }
                } else {
                    html! {}
                }
            }
            <button type="submit" class="btn-primary contact-submit">
                {"TRANSMIT"}
                <IconSvg icon={Icon::Send} size={18} />
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_fields_in_order() {
        assert_eq!(ContactMessage::validate("", "a@b.co", "hi"), Err(ContactFormError::MissingName));
        assert_eq!(ContactMessage::validate("Ada", "nope", "hi"), Err(ContactFormError::InvalidEmail));
        assert_eq!(ContactMessage::validate("Ada", "a@b.co", "   "), Err(ContactFormError::MissingMessage));
    }

    #[test]
    fn trims_accepted_input() {
        let contact = ContactMessage::validate("  Ada ", " ada@example.com ", " Build us a game \n").unwrap();
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.email, "ada@example.com");
        assert_eq!(contact.message, "Build us a game");
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("ada@example.com"));
        assert!(looks_like_email("a.b+c@sub.example.org"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@example"));
        assert!(!looks_like_email("ada@.com"));
        assert!(!looks_like_email("ada@@example.com"));
        assert!(!looks_like_email("ada lovelace@example.com"));
    }

    #[test]
    fn mailto_is_percent_encoded() {
        let contact = ContactMessage::validate("Ada & Co", "ada@example.com", "Hello there").unwrap();
        let href = contact.mailto_href("contact@luminaryforge.tech");

        assert!(href.starts_with("mailto:contact@luminaryforge.tech?subject=Project%20inquiry%20from%20Ada%20%26%20Co&body="));
        assert!(href.contains("Hello%20there%0A%0A"));
        assert!(!href.contains(' '));
    }
}
