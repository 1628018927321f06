// src/handlers/users.rs
// DOCUMENTATION: HTTP handlers for users
// PURPOSE: Register users and look them up by id or email

use crate::errors::LightBnbError;
use crate::models::NewUser;
use crate::services::RentalService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// POST /users
pub async fn register_user(
    pool: web::Data<PgPool>,
    req: web::Json<NewUser>,
) -> Result<impl Responder, LightBnbError> {
    let users = RentalService::register_user(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(users))
}

/// GET /users/email/{email}
pub async fn get_user_with_email(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<impl Responder, LightBnbError> {
    let user = RentalService::user_with_email(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// GET /users/{id}
/// Always a list, matched with LIKE on the id
pub async fn get_user_with_id(
    pool: web::Data<PgPool>,
    path: web::Path<String>,
) -> Result<impl Responder, LightBnbError> {
    let users = RentalService::users_with_id(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(users))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(register_user))
            .route("/email/{email}", web::get().to(get_user_with_email))
            .route("/{id}", web::get().to(get_user_with_id)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::unreachable_pool;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_rt::test]
    async fn test_invalid_email_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(unreachable_pool()))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Eva", "email": "nope", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_rt::test]
    async fn test_email_lookup_failure_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(unreachable_pool()))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/users/email/missing@x.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
