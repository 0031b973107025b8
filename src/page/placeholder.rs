use maud::{html, Markup};

/// Lead-in sentence of the placeholder paragraph
pub const PLACEHOLDER_MESSAGE: &str =
    "This page is under construction! For now, check out what else I'm building at ";

/// Destination of the placeholder link
pub const PLACEHOLDER_LINK: &str = "https://tarpey.dev";

/// Style class applied to the placeholder link
pub const LINK_CLASS: &str = "inline";

/// Render the "under construction" view.
///
/// The result is a single paragraph holding the message followed by a link
/// whose label is the destination's host name. Rendering has no inputs and
/// no side effects, so every call returns identical markup.
pub fn render_placeholder() -> Markup {
    html! {
        p {
            (PLACEHOLDER_MESSAGE)
            a class=(LINK_CLASS) href=(PLACEHOLDER_LINK) { (link_label(PLACEHOLDER_LINK)) }
            "."
        }
    }
}

/// Host part of a URL, used as the visible link label
pub fn link_label(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(without_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_link_label() {
        assert_eq!(link_label("https://tarpey.dev"), "tarpey.dev");
        assert_eq!(link_label("https://tarpey.dev/autobracket?x=1"), "tarpey.dev");
        assert_eq!(link_label("tarpey.dev"), "tarpey.dev");
    }

    #[test]
    fn test_placeholder_markup() {
        assert_eq!(
            render_placeholder().into_string(),
            "<p>This page is under construction! For now, check out what else I'm building at \
             <a class=\"inline\" href=\"https://tarpey.dev\">tarpey.dev</a>.</p>"
        );
    }
}
