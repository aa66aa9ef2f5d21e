//! The application's route table and the page renderers it dispatches to.

use crate::navigation::Dispatcher;
use crate::router::{Router, RouterOptions, RouterResult};
use crate::types::PathComponent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Main,
    Stats,
    Organizations,
    Organization,
    Achievements,
    Achievement,
    Logout,
    Login,
    LoginCreateAccount,
}

/// Route table in priority order, with `wildcard` in the key positions that
/// accept any id. The root pattern comes last.
pub fn app_routes(wildcard: &str) -> Vec<(String, Page)> {
    vec![
        ("stats".to_string(), Page::Stats),
        ("logout".to_string(), Page::Logout),
        ("login".to_string(), Page::Login),
        ("login-create-account".to_string(), Page::LoginCreateAccount),
        ("organizations".to_string(), Page::Organizations),
        (format!("organizations/{wildcard}"), Page::Organization),
        ("achievements".to_string(), Page::Achievements),
        (format!("achievements/{wildcard}"), Page::Achievement),
        (String::new(), Page::Main),
    ]
}

/// Page collaborators. Each one receives the parsed route and owns all
/// DOM work.
pub trait PageRenderer {
    fn render_main(&self, params: &[PathComponent]);
    fn render_stats(&self, params: &[PathComponent]);
    fn render_organizations(&self, params: &[PathComponent]);
    fn render_organization(&self, params: &[PathComponent]);
    fn render_achievements(&self, params: &[PathComponent]);
    fn render_achievement(&self, params: &[PathComponent]);
    fn render_logout(&self, params: &[PathComponent]);
    fn render_login(&self, params: &[PathComponent]);
    fn render_login_create_account(&self, params: &[PathComponent]);
    fn render_error(&self, message: &str);
}

impl Page {
    pub fn render<R: PageRenderer + ?Sized>(self, renderer: &R, params: &[PathComponent]) {
        match self {
            Page::Main => renderer.render_main(params),
            Page::Stats => renderer.render_stats(params),
            Page::Organizations => renderer.render_organizations(params),
            Page::Organization => renderer.render_organization(params),
            Page::Achievements => renderer.render_achievements(params),
            Page::Achievement => renderer.render_achievement(params),
            Page::Logout => renderer.render_logout(params),
            Page::Login => renderer.render_login(params),
            Page::LoginCreateAccount => renderer.render_login_create_account(params),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageDispatcher<R> {
    renderer: R,
}

impl<R: PageRenderer> PageDispatcher<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: PageRenderer> Dispatcher<Page> for PageDispatcher<R> {
    fn dispatch(&self, handler: &Page, params: &[PathComponent]) {
        handler.render(&self.renderer, params);
    }

    fn not_found(&self, message: &str) {
        self.renderer.render_error(message);
    }
}

/// Builds and seals the application's router.
pub fn app_router(options: Option<RouterOptions>) -> RouterResult<Router<Page>> {
    let options = options.unwrap_or_default();
    let routes = app_routes(&options.wildcard);
    let router = Router::try_new(options)?;
    router.add_bulk(routes)?;
    router.seal();
    Ok(router)
}
