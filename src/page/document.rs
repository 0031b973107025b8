use log::{debug, warn};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::error::PageError;
use crate::types::MountOutcome;

/// Id of the container the placeholder view mounts into
pub const APP_ROOT_ID: &str = "root";

/// A mount point in the host page, rendered as `<div id="...">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    /// Rendered markup currently mounted here, if any
    content: Option<String>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

/// An in-memory host page: a title plus the containers views mount into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    containers: Vec<Container>,
}

impl Document {
    /// An empty page with no containers
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            containers: Vec::new(),
        }
    }

    /// The site's page shell: a body holding a single empty app root container
    pub fn host_page(title: impl Into<String>) -> Self {
        let mut page = Self::new(title);
        page.add_container(APP_ROOT_ID);
        page
    }

    /// Append an empty container. An existing container with the same id is kept.
    pub fn add_container(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.container(&id).is_none() {
            self.containers.push(Container::new(id));
        }
        self
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Replace the content of the container matched by `selector` with `view`.
    ///
    /// Accepts `#id` or a bare id. Returns [`PageError::TargetNotFound`] when
    /// no container matches; the page is left untouched in that case.
    pub fn try_mount(&mut self, selector: &str, view: Markup) -> Result<(), PageError> {
        let id = parse_selector(selector)?;
        let container = self
            .containers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| PageError::TargetNotFound(selector.to_string()))?;
        container.content = Some(view.into_string());
        debug!("Mounted view into #{}", id);
        Ok(())
    }

    /// Mount `view` into the container matched by `selector`.
    ///
    /// A missing container is not an error for the page: it is logged and
    /// reported as [`MountOutcome::NotMounted`].
    pub fn mount(&mut self, selector: &str, view: Markup) -> MountOutcome {
        match self.try_mount(selector, view) {
            Ok(()) => MountOutcome::Mounted,
            Err(e) => {
                warn!("View not mounted: {}", e);
                MountOutcome::NotMounted {
                    selector: selector.to_string(),
                }
            }
        }
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                }
                body {
                    @for container in &self.containers {
                        div id=(container.id) {
                            @if let Some(content) = &container.content {
                                (PreEscaped(content))
                            }
                        }
                    }
                }
            }
        }
    }

    /// Serialize the whole page to HTML
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }
}

fn parse_selector(selector: &str) -> Result<&str, PageError> {
    let id = selector.strip_prefix('#').unwrap_or(selector);
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(id)
    } else {
        Err(PageError::UnsupportedSelector(selector.to_string()))
    }
}
