use yew::prelude::*;

const WIX_IMAGE_SCHEME: &str = "wix:image://v1/";
const WIX_MEDIA_BASE: &str = "https://static.wixstatic.com/media/";

/// Browser URL for an image reference coming from the CMS. CMS media
/// references (`wix:image://v1/<media>/<name>#...`) point at the public media
/// host; anything else is already a URL and is used as is.
pub fn resolve_image_src(reference: &str) -> String {
    match reference.strip_prefix(WIX_IMAGE_SCHEME) {
        Some(rest) => {
            let media = rest.split(['/', '#']).next().unwrap_or_default();
            format!("{}{}", WIX_MEDIA_BASE, media)
        }
        None => reference.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Image)]
pub fn image(props: &ImageProps) -> Html {
    html! {
        <img
            src={resolve_image_src(&props.src)}
            alt={props.alt.clone()}
            width={props.width.map(|w| w.to_string())}
            loading="lazy"
            class={props.class.clone()}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cms_references_point_at_media_host() {
        assert_eq!(
            resolve_image_src("wix:image://v1/5283f4_85b8~mv2.png/team.png#originWidth=896&originHeight=448"),
            "https://static.wixstatic.com/media/5283f4_85b8~mv2.png"
        );
        assert_eq!(
            resolve_image_src("wix:image://v1/abc.jpg#originWidth=10"),
            "https://static.wixstatic.com/media/abc.jpg"
        );
    }

    #[test]
    fn plain_urls_pass_through() {
        let url = "https://static.wixstatic.com/media/5283f4.png?originWidth=896";
        assert_eq!(resolve_image_src(url), url);
        assert_eq!(resolve_image_src("/assets/team.png"), "/assets/team.png");
    }
}
