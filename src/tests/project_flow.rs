use actix_web::test::TestRequest;
use serde_json::json;

use crate::tests::support::auth_helper::bearer;

#[actix_web::test]
async fn test_project_lifecycle_for_owner() {
    let app = e2e_app!();
    let token = register!(app, "owner@example.com");

    let (status, body) = send!(
        app,
        TestRequest::post()
            .uri("/api/projects")
            .insert_header(bearer(&token))
            .set_json(json!({
                "title": "Green corridor",
                "description": "Street trees linking two parks",
                "category": "urban-greening",
                "budget": {"total": 150000},
                "tags": ["trees"]
            }))
    );
    assert_eq!(status, 201);
    let project = &body["project"];
    assert_eq!(project["status"], "draft");
    assert_eq!(project["location"], json!({}));
    let id = project["id"].as_u64().unwrap();
    let owner = project["createdBy"].clone();

    let (status, body) = send!(
        app,
        TestRequest::put()
            .uri(&format!("/api/projects/{}", id))
            .insert_header(bearer(&token))
            .set_json(json!({"status": "active", "id": 999, "createdBy": "intruder"}))
    );
    assert_eq!(status, 200);
    assert_eq!(body["project"]["status"], "active");
    assert_eq!(body["project"]["id"], id);
    assert_eq!(body["project"]["createdBy"], owner);
    assert_eq!(body["project"]["budget"], json!({"total": 150000}));

    let (status, body) = send!(app, TestRequest::get().uri("/api/projects/stats").insert_header(bearer(&token)));
    assert_eq!(status, 200);
    assert_eq!(body["stats"]["total"], 1);
    assert_eq!(body["stats"]["active"], 1);

    let (status, body) = send!(
        app,
        TestRequest::get().uri("/api/projects/category/urban-greening").insert_header(bearer(&token))
    );
    assert_eq!(status, 200);
    assert_eq!(body["count"], 1);

    let (status, body) = send!(
        app,
        TestRequest::delete().uri(&format!("/api/projects/{}", id)).insert_header(bearer(&token))
    );
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Project deleted successfully!");

    let (status, _) = send!(
        app,
        TestRequest::get().uri(&format!("/api/projects/{}", id)).insert_header(bearer(&token))
    );
    assert_eq!(status, 404);
}

#[actix_web::test]
async fn test_other_users_project_is_forbidden_and_hidden() {
    let app = e2e_app!();
    let owner = register!(app, "owner@example.com");
    let intruder = register!(app, "intruder@example.com");

    let (status, body) = send!(
        app,
        TestRequest::post().uri("/api/projects").insert_header(bearer(&owner)).set_json(json!({
            "title": "Rain gardens",
            "description": "Bioswales on the main avenue",
            "category": "drainage"
        }))
    );
    assert_eq!(status, 201);
    let uri = format!("/api/projects/{}", body["project"]["id"]);

    let (status, body) = send!(app, TestRequest::get().uri(&uri).insert_header(bearer(&intruder)));
    assert_eq!(status, 403);
    assert_eq!(body["message"], "Access denied to this project");

    let (status, _) = send!(
        app,
        TestRequest::put().uri(&uri).insert_header(bearer(&intruder)).set_json(json!({"title": "Mine"}))
    );
    assert_eq!(status, 403);

    // Ownership is settled before the body is validated
    let (status, _) = send!(
        app,
        TestRequest::put().uri(&uri).insert_header(bearer(&intruder)).set_json(json!({"title": ""}))
    );
    assert_eq!(status, 403);

    let (status, _) = send!(app, TestRequest::delete().uri(&uri).insert_header(bearer(&intruder)));
    assert_eq!(status, 403);

    let (status, body) = send!(
        app,
        TestRequest::get().uri("/api/projects/category/drainage").insert_header(bearer(&intruder))
    );
    assert_eq!(status, 200);
    assert_eq!(body["count"], 0);

    let (status, body) = send!(app, TestRequest::get().uri("/api/projects").insert_header(bearer(&intruder)));
    assert_eq!(status, 200);
    assert_eq!(body["count"], 0);
}

#[actix_web::test]
async fn test_project_validation() {
    let app = e2e_app!();
    let token = register!(app, "owner@example.com");

    let (status, body) = send!(
        app,
        TestRequest::post()
            .uri("/api/projects")
            .insert_header(bearer(&token))
            .set_json(json!({"title": "No category", "description": "Missing one field"}))
    );
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Title, description and category are required");

    let (status, _) = send!(app, TestRequest::get().uri("/api/projects/424242").insert_header(bearer(&token)));
    assert_eq!(status, 404);

    let (status, _) = send!(
        app,
        TestRequest::put()
            .uri("/api/projects/424242")
            .insert_header(bearer(&token))
            .set_json(json!({"title": "  "}))
    );
    assert_eq!(status, 404);

    let (status, body) = send!(
        app,
        TestRequest::post()
            .uri("/api/projects")
            .insert_header(bearer(&token))
            .set_json(json!({
                "title": "Shade trees",
                "description": "Street trees",
                "category": "urban-greening",
                "location": "",
                "budget": 0,
                "timeline": false
            }))
    );
    assert_eq!(status, 201);
    assert_eq!(body["project"]["location"], json!({}));
    assert_eq!(body["project"]["budget"], json!({}));
    assert_eq!(body["project"]["timeline"], json!({}));

    let uri = format!("/api/projects/{}", body["project"]["id"]);
    let (status, body) = send!(
        app,
        TestRequest::put().uri(&uri).insert_header(bearer(&token)).set_json(json!({"title": ""}))
    );
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Title cannot be empty");
}
