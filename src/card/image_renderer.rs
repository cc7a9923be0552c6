use std::io;
use std::io::ErrorKind;
use std::num::NonZeroU32;

use ramhorns::Template;

use crate::card::link_renderer::ClassAttr;
use crate::card::sizes::SizesHint;

const LAZY_IMAGE_TEMPLATE: &str = r#"<img src="{{src}}" alt="{{alt}}" width="{{width}}" height="{{height}}" sizes="{{sizes}}" loading="lazy" decoding="async"{{#class}} class="{{value}}"{{/class}}{{#blur}} style="color:transparent;background-size:cover;background-position:50% 50%;background-repeat:no-repeat;background-image:url(&quot;{{data_url}}&quot;)"{{/blur}}>"#;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placeholder<'a> {
    /// Blurred low resolution preview, given as a data url
    Blur(&'a str),
    Empty,
}

impl<'a> Placeholder<'a> {
    pub fn from_data_url(data_url: &'a str) -> Self {
        if data_url.trim().is_empty() {
            Placeholder::Empty
        } else {
            Placeholder::Blur(data_url)
        }
    }
}

pub struct ImageProps<'a> {
    pub src: &'a str,
    pub placeholder: Placeholder<'a>,
    pub width: NonZeroU32,
    pub height: NonZeroU32,
    pub alt: &'a str,
    pub sizes: &'a SizesHint,
    pub class: &'a str,
}

pub trait ImageRenderer {
    fn render(&self, props: &ImageProps) -> String;
}

#[derive(ramhorns::Content)]
struct BlurStyle<'a> {
    data_url: &'a str,
}

#[derive(ramhorns::Content)]
struct ImageView<'a> {
    src: &'a str,
    alt: &'a str,
    width: u32,
    height: u32,
    sizes: String,
    class: Option<ClassAttr<'a>>,
    blur: Option<BlurStyle<'a>>,
}

/// Lazily loaded `<img>` that shows the blur payload as its background
/// until the real image arrives.
#[derive(Debug)]
pub struct LazyImage {
    template: Template<'static>,
}

impl LazyImage {
    pub fn new() -> io::Result<LazyImage> {
        match Template::new(LAZY_IMAGE_TEMPLATE) {
            Ok(template) => Ok(LazyImage { template }),
            Err(e) => Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing image template: {}", e))),
        }
    }
}

impl ImageRenderer for LazyImage {
    fn render(&self, props: &ImageProps) -> String {
        let blur = match props.placeholder {
            Placeholder::Blur(data_url) => Some(BlurStyle { data_url }),
            Placeholder::Empty => None,
        };

        self.template.render(&ImageView {
            src: props.src,
            alt: props.alt,
            width: props.width.get(),
            height: props.height.get(),
            sizes: props.sizes.to_string(),
            class: ClassAttr::non_empty(props.class),
            blur,
        })
    }
}
