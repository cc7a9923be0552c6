use std::collections::HashMap;

/// Query parameters of the card list: `page` and an optional `tag` filter.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct CardQuery {
    pub page: u32,
    pub tag: Option<String>,
}

impl CardQuery {
    pub fn from(buf: &str) -> Self {
        let vs: Vec<(String, String)> = serde_urlencoded::from_str(buf).unwrap_or_else(|_| vec![]);
        let items: HashMap<String, String> = vs.into_iter().collect();

        let page = items.get("page")
            .and_then(|val| val.parse::<u32>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1);

        let tag = items.get("tag")
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string());

        CardQuery { page, tag }
    }

    pub fn first_page(tag: Option<String>) -> Self {
        CardQuery { page: 1, tag }
    }

    /// Link to `page` keeping the current tag filter.
    pub fn page_link(&self, page: u32) -> String {
        let page = page.to_string();
        let mut params = vec![("page", page.as_str())];
        if let Some(ref tag) = self.tag {
            params.push(("tag", tag.as_str()));
        }
        format!("/?{}", serde_urlencoded::to_string(&params).unwrap_or_default())
    }

    pub fn tag_link(tag: &str) -> String {
        format!("/?{}", serde_urlencoded::to_string(&[("tag", tag)][..]).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_and_tag() {
        assert_eq!(CardQuery::from("page=3&tag=rust"), CardQuery { page: 3, tag: Some("rust".to_string()) });
        assert_eq!(CardQuery::from("tag=c%2B%2B"), CardQuery { page: 1, tag: Some("c++".to_string()) });
    }

    #[test]
    fn test_parse_invalid_page() {
        assert_eq!(CardQuery::from("page=0").page, 1);
        assert_eq!(CardQuery::from("page=-2").page, 1);
        assert_eq!(CardQuery::from("page=abc").page, 1);
        assert_eq!(CardQuery::from(""), CardQuery::first_page(None));
    }

    #[test]
    fn test_parse_empty_tag() {
        assert_eq!(CardQuery::from("tag=&page=2"), CardQuery { page: 2, tag: None });
        assert_eq!(CardQuery::from("key-only").tag, None);
    }

    #[test]
    fn test_links() {
        let query = CardQuery { page: 1, tag: Some("web dev".to_string()) };
        assert_eq!(query.page_link(2), "/?page=2&tag=web+dev");
        assert_eq!(CardQuery::first_page(None).page_link(4), "/?page=4");
        assert_eq!(CardQuery::tag_link("c++"), "/?tag=c%2B%2B");
    }
}
