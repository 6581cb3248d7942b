// Route definitions and handlers

use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

use crate::chat::ChatService;
use crate::handlers;
use crate::models::{ClearQuery, HistoryQuery};

pub fn configure_routes(
    service: Arc<ChatService>,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    // POST /chat
    let post_chat = warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_service(service.clone()))
        .and_then(handlers::chat_handler);

    // GET /chat/history?sessionId=
    let get_history = warp::path("chat")
        .and(warp::path("history"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<HistoryQuery>())
        .and(with_service(service.clone()))
        .and_then(handlers::history_handler);

    // DELETE /chat/clear?sessionId=
    let clear_session = warp::path("chat")
        .and(warp::path("clear"))
        .and(warp::path::end())
        .and(warp::delete())
        .and(warp::query::<ClearQuery>())
        .and(with_service(service.clone()))
        .and_then(handlers::clear_handler);

    // GET /chat/sessions
    let get_sessions = warp::path("chat")
        .and(warp::path("sessions"))
        .and(warp::path::end())
        .and(warp::get())
        .and(with_service(service.clone()))
        .and_then(handlers::sessions_handler);

    // GET /models
    let get_models = warp::path("models")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_service(service))
        .and_then(handlers::models_handler);

    // GET /health
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_handler);

    // Combine routes
    post_chat
        .or(get_history)
        .or(clear_session)
        .or(get_sessions)
        .or(get_models)
        .or(health)
        .recover(handlers::handle_rejection)
}

fn with_service(
    service: Arc<ChatService>,
) -> impl Filter<Extract = (Arc<ChatService>,), Error = Infallible> + Clone {
    warp::any().map(move || service.clone())
}
