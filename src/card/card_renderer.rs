use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::card::image_renderer::{ImageProps, ImageRenderer, LazyImage, Placeholder};
use crate::card::link_renderer::{AnchorLink, LinkRenderer};
use crate::card::{strip_public_prefix, CardOptions};
use crate::content::BlogPost;

pub const DEFAULT_CARD_TEMPLATE: &str = include_str!("../../res/template/card.tpl");

const THUMBNAIL_LINK_CLASS: &str = "col-span-12 lg:col-span-4 rounded-xl h-full overflow-hidden";
const THUMBNAIL_IMAGE_CLASS: &str = "group-hover:scale-105 w-full h-full transition-all duration-300 aspect-square ease object-center object-cover";
const TITLE_LINK_CLASS: &str = "inline-block my-1";
const TITLE_TEMPLATE: &str = r#"<h2 class="font-semibold text-base sm:text-lg capitalize"><span class="group-hover:bg-[length:100%_6px] bg-[length:0px_6px] bg-gradient-to-r from-accent/50 dark:from-accentDark/50 to-accent/50 dark:to-accentDark/50 bg-no-repeat bg-left-bottom transition-[background-size] duration-500">{{title}}</span></h2>"#;

#[derive(ramhorns::Content)]
struct TitleView<'a> {
    title: &'a str,
}

#[derive(ramhorns::Content)]
struct ViewTag<'a> {
    label: &'a str,
}

#[derive(ramhorns::Content)]
struct CardView<'a> {
    url: &'a str,
    title: &'a str,
    thumbnail: String,
    title_link: String,
    tag: Option<ViewTag<'a>>,
    date: String,
}

/// Renders one post as a preview card: thumbnail link, first tag, title
/// link and publish date.
pub struct CardRenderer<L = AnchorLink, I = LazyImage> {
    template: Template<'static>,
    title_template: Template<'static>,
    link: L,
    image: I,
    options: CardOptions,
}

impl CardRenderer {
    pub fn new(card_tpl_src: &str, options: CardOptions) -> io::Result<CardRenderer> {
        Self::with_renderers(card_tpl_src, options, AnchorLink::new()?, LazyImage::new()?)
    }
}

impl<L: LinkRenderer, I: ImageRenderer> CardRenderer<L, I> {
    pub fn with_renderers(card_tpl_src: &str, options: CardOptions, link: L, image: I) -> io::Result<CardRenderer<L, I>> {
        let template = match Template::new(card_tpl_src.to_string()) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing card template: {}", e)));
            }
        };

        let title_template = match Template::new(TITLE_TEMPLATE) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing title template: {}", e)));
            }
        };

        Ok(CardRenderer {
            template,
            title_template,
            link,
            image,
            options,
        })
    }

    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    pub fn render(&self, post: &BlogPost) -> String {
        let src = strip_public_prefix(&post.image.file_path, &self.options.public_prefix);
        let image_html = self.image.render(&ImageProps {
            src: &src,
            placeholder: Placeholder::from_data_url(&post.image.blurhash_data_url),
            width: post.image.width,
            height: post.image.height,
            alt: &post.title,
            sizes: &self.options.sizes,
            class: THUMBNAIL_IMAGE_CLASS,
        });
        let thumbnail = self.link.render(&post.url, THUMBNAIL_LINK_CLASS, &image_html);

        let heading = self.title_template.render(&TitleView { title: &post.title });
        let title_link = self.link.render(&post.url, TITLE_LINK_CLASS, &heading);

        self.template.render(&CardView {
            url: &post.url,
            title: &post.title,
            thumbnail,
            title_link,
            tag: post.first_tag().map(|label| ViewTag { label }),
            date: self.options.date_pattern.format(&post.published_at.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::card::DatePattern;
    use crate::test_data::sample_post;

    use super::*;

    fn default_renderer() -> CardRenderer {
        CardRenderer::new(DEFAULT_CARD_TEMPLATE, CardOptions::default()).unwrap()
    }

    #[test]
    fn render_default_card() {
        let html = default_renderer().render(&sample_post());

        assert!(html.contains(r#"src="/img/post1.jpg""#));
        assert!(html.contains(r#"alt="First post""#));
        assert!(html.contains(r#"width="1200" height="800""#));
        assert!(html.contains(r#"sizes="(max-width: 640px) 100vw, (max-width: 1024px) 50vw, 33vw""#));
        assert!(html.contains("background-image:url(&quot;data:image/png;base64,AAAA&quot;)"));
        assert!(html.contains(r#"uppercase">rust</span>"#));
        assert!(!html.contains(">web<"));
        assert!(html.contains(r#"capitalize">January 05, 2024</span>"#));
        assert!(html.contains(r#"duration-500">First post</span></h2></a>"#));
    }

    #[test]
    fn render_image_and_title_link_to_post() {
        let html = default_renderer().render(&sample_post());
        assert_eq!(html.matches(r#"<a href="/blogs/post-1""#).count(), 2);
        assert!(html.contains(&format!(r#"<a href="/blogs/post-1" class="{}"><img "#, THUMBNAIL_LINK_CLASS)));
        assert!(html.contains(&format!(r#"<a href="/blogs/post-1" class="{}"><h2 "#, TITLE_LINK_CLASS)));
    }

    #[test]
    fn render_without_tags() {
        let mut post = sample_post();
        post.tags.clear();
        let html = default_renderer().render(&post);
        assert!(!html.contains("text-accent text-xs"));
        assert!(html.contains("January 05, 2024"));
    }

    #[test]
    fn render_keeps_tag_text() {
        let mut post = sample_post();
        post.tags = vec!["Rust-Lang".to_string()];
        let html = default_renderer().render(&post);
        assert!(html.contains(">Rust-Lang</span>"));
        assert_eq!(post.tags[0], "Rust-Lang");
    }

    #[test]
    fn render_escapes_text() {
        let mut post = sample_post();
        post.title = "Vec<T> & friends".to_string();
        post.tags = vec!["<b>".to_string()];
        let html = default_renderer().render(&post);
        assert!(html.contains("Vec&lt;T&gt; &amp; friends</span></h2>"));
        assert!(html.contains(r#"alt="Vec&lt;T&gt; &amp; friends""#));
        assert!(html.contains(">&lt;b&gt;</span>"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn render_escapes_url_in_both_links() {
        let mut post = sample_post();
        post.url = r#"/blogs/a"b&c"#.to_string();
        let html = default_renderer().render(&post);
        assert_eq!(html.matches(r#"<a href="/blogs/a&quot;b&amp;c""#).count(), 2);
        assert!(!html.contains(r#"a"b"#));
    }

    struct RouteLink;

    impl LinkRenderer for RouteLink {
        fn render(&self, href: &str, _class: &str, inner_html: &str) -> String {
            format!("[link {}]{}[/link]", href, inner_html)
        }
    }

    struct AltOnly;

    impl ImageRenderer for AltOnly {
        fn render(&self, props: &ImageProps) -> String {
            let blur = match props.placeholder {
                Placeholder::Blur(_) => "blur",
                Placeholder::Empty => "empty",
            };
            format!("[img {} {} {}x{}]", props.src, blur, props.width, props.height)
        }
    }

    #[test]
    fn render_with_custom_collaborators() {
        let template = "{{{thumbnail}}}|{{#tag}}{{label}}{{/tag}}|{{date}}|{{url}}";
        let options = CardOptions {
            public_prefix: "../static".to_string(),
            date_pattern: DatePattern::new("%Y-%m-%d").unwrap(),
            ..CardOptions::default()
        };
        let renderer = CardRenderer::with_renderers(template, options, RouteLink, AltOnly).unwrap();

        let mut post = sample_post();
        post.image.file_path = "../static/covers/a.png".to_string();
        post.image.blurhash_data_url = "".to_string();

        let html = renderer.render(&post);
        assert_eq!(html, "[link /blogs/post-1][img /covers/a.png empty 1200x800][/link]|rust|2024-01-05|/blogs/post-1");
    }

    #[test]
    fn invalid_template() {
        let res = CardRenderer::new("{{#tag}}unclosed", CardOptions::default());
        assert_eq!(res.err().map(|e| e.kind()), Some(ErrorKind::InvalidInput));
    }
}
