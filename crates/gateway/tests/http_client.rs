// Exercises ApiClient against a throwaway axum backend on an ephemeral port.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header},
    routing::get,
};
use gateway::{ApiClient, ApiConfig, GatewayError, MemberGateway};
use models::{BodyStyle, DraftMember};
use serde_json::{Value, json};

async fn spawn_backend(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> ApiClient {
    ApiClient::new(&ApiConfig::new(format!("http://{}", addr))).unwrap()
}

async fn members() -> Json<Value> {
    Json(json!([
        {
            "cpf": "111",
            "nome": "Ana",
            "peso": 70,
            "altura": 170,
            "idade": 30,
            "estilo": 1,
            "academiaId": "g1",
            "academia": "Iron Temple"
        }
    ]))
}

async fn gyms() -> Json<Value> {
    Json(json!([
        { "id": "g1", "nome": "Iron Temple" },
        { "id": 2, "nome": "Fit Club" }
    ]))
}

async fn create_member(headers: HeaderMap, Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !content_type.starts_with("application/json") {
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(json!({ "message": "json only" })),
        );
    }

    body["academia"] = json!("Iron Temple");
    (StatusCode::CREATED, Json(body))
}

fn sample_draft() -> DraftMember {
    let mut draft = DraftMember::new();
    draft.set_tax_id("222");
    draft.set_name("Bruno");
    draft.set_weight("82.5");
    draft.set_height("180");
    draft.set_age("27");
    draft.set_body_style(BodyStyle::Frango);
    draft.set_gym_id("g1");
    draft
}

#[tokio::test]
async fn test_list_members_and_gyms() {
    let app = Router::new()
        .route("/clientes", get(members))
        .route("/academias", get(gyms));
    let client = client_for(spawn_backend(app).await);

    let members = client.list_members().await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name, "Ana");
    assert_eq!(members[0].gym.as_deref(), Some("Iron Temple"));

    let gyms = client.list_gyms().await.unwrap();
    assert_eq!(gyms.len(), 2);
    assert_eq!(gyms[1].id, "2");
    assert_eq!(gyms[1].name, "Fit Club");
}

#[tokio::test]
async fn test_create_member_posts_json_and_returns_stored_record() {
    let app = Router::new().route("/clientes", get(members).post(create_member));
    let client = client_for(spawn_backend(app).await);

    let created = client.create_member(&sample_draft()).await.unwrap();

    assert_eq!(created.tax_id, "222");
    assert_eq!(created.name, "Bruno");
    assert_eq!(created.age.as_deref(), Some("27"));
    assert_eq!(created.body_style(), Some(BodyStyle::Frango));
    assert_eq!(created.gym.as_deref(), Some("Iron Temple"));
}

#[tokio::test]
async fn test_create_accepts_free_text_echo() {
    let app = Router::new().route("/clientes", get(members).post(create_member));
    let client = client_for(spawn_backend(app).await);

    let mut draft = sample_draft();
    draft.set_weight("82 kg");
    draft.set_height("1,80");
    assert!(draft.check_presence().is_ok());

    let created = client.create_member(&draft).await.unwrap();

    assert_eq!(created.weight.as_deref(), Some("82 kg"));
    assert_eq!(created.height.as_deref(), Some("1,80"));
}

#[tokio::test]
async fn test_list_keeps_free_text_rows_and_skips_nameless_ones() {
    let app = Router::new().route(
        "/clientes",
        get(|| async {
            Json(json!([
                { "cpf": "111", "nome": "Ana", "peso": 70, "altura": 170,
                  "idade": 30, "estilo": 1, "academiaId": "g1" },
                { "cpf": "222", "nome": "Bruno", "peso": "82", "altura": "1,80",
                  "idade": "27", "estilo": "2", "academiaId": "g1" },
                { "cpf": "333", "peso": 90, "academiaId": "g2" },
                { "cpf": "444", "nome": "Caio", "academiaId": "g2" }
            ]))
        }),
    );
    let client = client_for(spawn_backend(app).await);

    let members = client.list_members().await.unwrap();
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();

    assert_eq!(names, vec!["Ana", "Bruno", "Caio"]);
    assert_eq!(members[1].height.as_deref(), Some("1,80"));
    assert_eq!(members[2].weight, None);
}

#[tokio::test]
async fn test_server_error_uses_json_message() {
    let app = Router::new().route(
        "/clientes",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "database offline" })),
            )
        }),
    );
    let client = client_for(spawn_backend(app).await);

    let err = client.list_members().await.unwrap_err();
    assert_eq!(
        err,
        GatewayError::Server {
            status: 500,
            message: "database offline".to_string()
        }
    );
}

#[tokio::test]
async fn test_server_error_falls_back_to_body_text() {
    let app = Router::new().route(
        "/academias",
        get(|| async { (StatusCode::BAD_REQUEST, "bad gym filter") }),
    );
    let client = client_for(spawn_backend(app).await);

    let err = client.list_gyms().await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(
        err,
        GatewayError::Server {
            status: 400,
            message: "bad gym filter".to_string()
        }
    );
}

#[tokio::test]
async fn test_missing_route_reports_reason_phrase() {
    let client = client_for(spawn_backend(Router::new()).await);

    let err = client.list_members().await.unwrap_err();
    assert_eq!(
        err,
        GatewayError::Server {
            status: 404,
            message: "Not Found".to_string()
        }
    );
}

#[tokio::test]
async fn test_slow_backend_is_network_error() {
    let app = Router::new().route(
        "/clientes",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!([]))
        }),
    );
    let addr = spawn_backend(app).await;
    let config =
        ApiConfig::new(format!("http://{}", addr)).with_timeout(Duration::from_millis(100));
    let client = ApiClient::new(&config).unwrap();

    let err = client.list_members().await.unwrap_err();
    assert!(err.is_network(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).list_gyms().await.unwrap_err();
    assert!(err.is_network(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_non_json_success_body_is_invalid_response() {
    let app = Router::new().route("/clientes", get(|| async { "<html>oops</html>" }));
    let client = client_for(spawn_backend(app).await);

    let err = client.list_members().await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidResponse { .. }));
}
