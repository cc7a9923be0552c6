use std::io;
use std::sync::Arc;

use ntex::web;
use ntex::web::HttpRequest;
use ntex_files::Files;
use spdlog::{error, info};

use crate::card::card_renderer::{CardRenderer, DEFAULT_CARD_TEMPLATE};
use crate::config::Config;
use crate::content::BlogPost;
use crate::query_string::CardQuery;
use crate::view::list_renderer::{ListRenderer, DEFAULT_LIST_TEMPLATE};

/// Posts and renderers shared read-only by every worker.
pub struct AppState {
    pub posts: Vec<BlogPost>,
    pub cards: CardRenderer,
    pub list: ListRenderer,
}

impl AppState {
    pub fn load(config: &Config) -> io::Result<AppState> {
        let cards = card_renderer(config)?;
        let list_src = config.read_template("cardlist.tpl", DEFAULT_LIST_TEMPLATE)?;
        let list = ListRenderer::new(&list_src, config.defaults.page_size)?;
        let posts = config.post_loader().load()?;

        Ok(AppState {
            posts,
            cards,
            list,
        })
    }

    pub fn render_page(&self, query: &CardQuery) -> String {
        self.list.render(&self.posts, &self.cards, query)
    }

    pub fn render_card(&self, link: &str) -> Option<String> {
        self.posts.iter()
            .find(|post| post.link() == link)
            .map(|post| self.cards.render(post))
    }
}

pub fn card_renderer(config: &Config) -> io::Result<CardRenderer> {
    let card_src = config.read_template("card.tpl", DEFAULT_CARD_TEMPLATE)?;
    CardRenderer::new(&card_src, config.card_options()?)
}

fn get_query(req: &HttpRequest) -> CardQuery {
    match req.uri().query() {
        Some(query_str) => CardQuery::from(query_str),
        None => CardQuery::first_page(None),
    }
}

#[web::get("/")]
async fn index(req: HttpRequest, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let query = get_query(&req);
    let rendered = state.render_page(&query);

    web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(rendered)
}

#[web::get("/card/{post}")]
async fn card(post: web::types::Path<String>, state: web::types::State<Arc<AppState>>) -> web::HttpResponse {
    let post = post.into_inner();

    match state.render_card(&post) {
        Some(rendered) => web::HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        None => web::HttpResponse::NotFound()
            .body(format!("Post {} not found", post)),
    }
}

pub async fn server_run(config: Config) -> io::Result<()> {
    let app_state = match AppState::load(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("Error loading posts: {}", e);
            return Err(e);
        }
    };
    for post in app_state.posts.iter() {
        info!("Post: {} -> {}", post.link(), post.url);
    }

    let public_dir = config.paths.public_dir.clone();
    let bind_addr = config.server.address.clone();
    let bind_port = config.server.port;
    info!("Serving {} posts on {}:{}", app_state.posts.len(), bind_addr, bind_port);

    web::HttpServer::new(move || {
        web::App::new()
            .state(app_state.clone())
            .service(index)
            .service(card)
            // Image paths are served relative to the public root
            .service(Files::new("/", public_dir.clone()))
    })
        .bind((bind_addr, bind_port))?
        .run()
        .await
}
