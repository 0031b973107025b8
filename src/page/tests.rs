use super::*;
use pretty_assertions::assert_eq;

/// Value of `attr="..."` in the first tag of `html` that carries it
fn attr_value<'a>(html: &'a str, attr: &str) -> Option<&'a str> {
    let marker = format!("{}=\"", attr);
    let start = html.find(&marker)? + marker.len();
    let len = html[start..].find('"')?;
    Some(&html[start..start + len])
}

#[test]
fn test_placeholder_has_sentence_and_one_link() {
    let html = render_placeholder().into_string();
    assert_eq!(html.matches("<p>").count(), 1);
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.starts_with(&format!("<p>{}", PLACEHOLDER_MESSAGE)));

    let href = attr_value(&html, "href").unwrap();
    assert_eq!(href, PLACEHOLDER_LINK);
    assert_eq!(attr_value(&html, "class"), Some(LINK_CLASS));

    // Visible label is the link's own destination host
    let label = format!(">{}</a>", link_label(href));
    assert!(html.contains(&label));
    assert_eq!(format!("https://{}", link_label(href)), href);
}

#[test]
fn test_render_is_idempotent() {
    let first = render_placeholder().into_string();
    let second = render_placeholder().into_string();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_mount_into_host_page() {
    let mut page = Document::host_page("tarpey.dev");
    let outcome = page.mount("#root", render_placeholder());
    assert_eq!(outcome, MountOutcome::Mounted);

    let root = page.container(APP_ROOT_ID).unwrap();
    assert!(root.content().unwrap().contains("under construction"));

    let html = page.to_html();
    assert!(html.contains(r#"<a class="inline" href="https://tarpey.dev">tarpey.dev</a>"#));
}

#[test]
fn test_mount_missing_container_is_not_mounted() {
    let mut page = Document::new("no root here");
    let outcome = page.mount("#root", render_placeholder());
    assert_eq!(
        outcome,
        MountOutcome::NotMounted {
            selector: "#root".to_string()
        }
    );
    assert!(!page.to_html().contains("under construction"));
}
