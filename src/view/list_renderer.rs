use std::collections::HashMap;
use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::card::card_renderer::CardRenderer;
use crate::card::image_renderer::ImageRenderer;
use crate::card::link_renderer::LinkRenderer;
use crate::content::BlogPost;
use crate::paginator::Paginator;
use crate::query_string::CardQuery;

pub const DEFAULT_LIST_TEMPLATE: &str = include_str!("../../res/template/cardlist.tpl");

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    cards: Vec<CardItem>,
    tags: Vec<ViewTag<'a>>,
    page_list: Vec<ViewPagination>,
    show_pagination: bool,
}

#[derive(ramhorns::Content)]
struct CardItem {
    html: String,
}

#[derive(ramhorns::Content)]
struct ViewTag<'a> {
    tag: &'a str,
    link: String,
    selected: bool,
}

#[derive(ramhorns::Content)]
struct ViewPagination {
    current: bool,
    number: u32,
    link: String,
}

/// Renders a page of cards, the tag filter bar and the page links.
pub struct ListRenderer {
    pub template: Template<'static>,
    pub page_size: u32,
}

impl ListRenderer {
    pub fn new(list_tpl_src: &str, page_size: u32) -> io::Result<ListRenderer> {
        let template = match Template::new(list_tpl_src.to_string()) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e)));
            }
        };

        Ok(ListRenderer {
            template,
            page_size,
        })
    }

    /// `posts` must already be sorted in display order.
    pub fn render<L, I>(&self, posts: &[BlogPost], card_renderer: &CardRenderer<L, I>, query: &CardQuery) -> String
        where
            L: LinkRenderer,
            I: ImageRenderer,
    {
        let tags = tags_by_frequency(posts);

        let selected: Vec<&BlogPost> = match query.tag {
            None => posts.iter().collect(),
            Some(ref tag) => posts.iter().filter(|p| p.tags.contains(tag)).collect(),
        };

        let paginator = Paginator::from(&selected, self.page_size);
        let cur_page = paginator.clamp_page(query.page);
        let page = paginator.get_page(cur_page).unwrap_or_default();

        let cards = page.iter()
            .map(|post| CardItem { html: card_renderer.render(post) })
            .collect();

        let page_list = (1..=paginator.page_count())
            .map(|number| ViewPagination {
                current: number == cur_page,
                number,
                link: query.page_link(number),
            })
            .collect();

        let tags = tags.iter()
            .map(|t| ViewTag {
                tag: t.as_str(),
                link: CardQuery::tag_link(t),
                selected: query.tag.as_deref() == Some(t.as_str()),
            })
            .collect();

        self.template.render(&ListPage {
            cards,
            tags,
            page_list,
            show_pagination: paginator.page_count() > 1,
        })
    }
}

/// Every tag in use, most frequent first. Ties keep alphabetical order.
pub fn tags_by_frequency(posts: &[BlogPost]) -> Vec<String> {
    let mut tag_map: HashMap<&str, u32> = HashMap::new();
    for post in posts {
        for tag in post.tags.iter() {
            *tag_map.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tag_list: Vec<(&str, u32)> = tag_map.into_iter().collect();
    tag_list.sort_by(|(ka, va), (kb, vb)| vb.cmp(va).then(ka.cmp(kb)));
    tag_list.into_iter().map(|(k, _)| k.to_string()).collect()
}
