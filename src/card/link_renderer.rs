use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

const ANCHOR_TEMPLATE: &str = r#"<a href="{{href}}"{{#class}} class="{{value}}"{{/class}}>{{{inner_html}}}</a>"#;

/// Produces an activatable link region around already rendered HTML.
pub trait LinkRenderer {
    fn render(&self, href: &str, class: &str, inner_html: &str) -> String;
}

#[derive(ramhorns::Content)]
pub(crate) struct ClassAttr<'a> {
    pub(crate) value: &'a str,
}

impl<'a> ClassAttr<'a> {
    pub(crate) fn non_empty(class: &'a str) -> Option<ClassAttr<'a>> {
        if class.is_empty() {
            None
        } else {
            Some(ClassAttr { value: class })
        }
    }
}

#[derive(ramhorns::Content)]
struct AnchorView<'a> {
    href: &'a str,
    class: Option<ClassAttr<'a>>,
    inner_html: &'a str,
}

/// Plain `<a>` element. Navigation is left to the browser.
#[derive(Debug)]
pub struct AnchorLink {
    template: Template<'static>,
}

impl AnchorLink {
    pub fn new() -> io::Result<AnchorLink> {
        match Template::new(ANCHOR_TEMPLATE) {
            Ok(template) => Ok(AnchorLink { template }),
            Err(e) => Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing link template: {}", e))),
        }
    }
}

impl LinkRenderer for AnchorLink {
    fn render(&self, href: &str, class: &str, inner_html: &str) -> String {
        self.template.render(&AnchorView {
            href,
            class: ClassAttr::non_empty(class),
            inner_html,
        })
    }
}
