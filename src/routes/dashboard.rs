use actix_web::{Responder, get, web};
use tera::{Context, Tera};

use crate::dashboard::state::DashboardState;
use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::dashboard::{DashboardQuery, dashboard_page, load_dashboard_page};

#[get("/")]
pub async fn show_dashboard(
    query: web::Query<DashboardQuery>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = query.into_inner();

    // A failed fetch renders an empty dashboard, as the browser would.
    let page = match load_dashboard_page(repo.get_ref(), query) {
        Ok(page) => page,
        Err(_) => dashboard_page(DashboardState::default(), DashboardQuery::default()),
    };

    let mut context = Context::new();
    context.insert("dashboard", &page);

    render_template(&tera, "dashboard/index.html", &context)
}
