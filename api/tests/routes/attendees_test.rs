#[cfg(test)]
mod tests {
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use sea_orm::EntityTrait;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use db::models::attendee::{Entity as AttendeeEntity, Model as AttendeeModel};

    use crate::helpers::app::make_test_app;

    fn json_req(method: &str, uri: &str, body: Value) -> Request<AxumBody> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<AxumBody> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(AxumBody::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_attendee_assigns_id_and_unscanned_state() {
        let (app, _db) = make_test_app().await;

        let resp = app
            .oneshot(json_req(
                "POST",
                "/api/attendees",
                json!({ "name": "Alice", "title": "Chair", "district": "North", "region": "A" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["name"], "Alice");
        assert_eq!(json["data"]["scanned"], false);
        assert_eq!(json["data"]["scannedTimes"], 0);
        assert_eq!(json["data"]["scanTime"], Value::Null);
        assert!(json["data"]["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn create_attendee_rejects_empty_name() {
        let (app, _db) = make_test_app().await;

        let resp = app
            .oneshot(json_req("POST", "/api/attendees", json!({ "name": "" })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn bulk_create_returns_rows_in_import_order() {
        let (app, db) = make_test_app().await;

        let resp = app
            .oneshot(json_req(
                "POST",
                "/api/attendees/bulk",
                json!({
                    "attendees": [
                        { "name": "Alice", "district": "North" },
                        { "name": "Bob" },
                        { "name": "Carol", "region": "B" }
                    ]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = body_json(resp).await;
        let rows = json["data"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["name"], "Alice");
        assert_eq!(rows[1]["name"], "Bob");
        assert_eq!(rows[2]["name"], "Carol");

        let count = AttendeeEntity::find().all(&db).await.unwrap().len();
        assert_eq!(count, 3);
    }

    #[tokio::test]
    async fn bulk_create_rejects_empty_batch() {
        let (app, _db) = make_test_app().await;

        let resp = app
            .oneshot(json_req(
                "POST",
                "/api/attendees/bulk",
                json!({ "attendees": [] }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_supports_pagination_and_name_search() {
        let (app, db) = make_test_app().await;
        for i in 0..5 {
            AttendeeModel::create(&db, &format!("Attendee {i}"), None, None, None)
                .await
                .unwrap();
        }
        AttendeeModel::create(&db, "Zanele", None, None, None)
            .await
            .unwrap();

        let resp = app
            .clone()
            .oneshot(get_req("/api/attendees?page=1&per_page=4"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["data"]["total"], 6);
        assert_eq!(json["data"]["attendees"].as_array().unwrap().len(), 4);

        let resp = app
            .oneshot(get_req("/api/attendees?query=Zanele"))
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["attendees"][0]["name"], "Zanele");
    }

    #[tokio::test]
    async fn export_returns_everyone_in_creation_order() {
        let (app, db) = make_test_app().await;
        AttendeeModel::create(&db, "First", None, None, None)
            .await
            .unwrap();
        AttendeeModel::create(&db, "Second", None, None, None)
            .await
            .unwrap();

        let resp = app.oneshot(get_req("/api/attendees/export")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        let rows = json["data"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "First");
        assert_eq!(rows[1]["name"], "Second");
    }

    #[tokio::test]
    async fn get_attendee_by_id() {
        let (app, db) = make_test_app().await;
        let alice = AttendeeModel::create(&db, "Alice", None, None, None)
            .await
            .unwrap();

        let resp = app
            .clone()
            .oneshot(get_req(&format!("/api/attendees/{}", alice.id)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["data"]["id"], alice.id.as_str());

        let resp = app
            .oneshot(get_req("/api/attendees/missing-id"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_touches_descriptive_fields_only() {
        let (app, db) = make_test_app().await;
        let alice = AttendeeModel::create(&db, "Alice", Some("Chair"), None, None)
            .await
            .unwrap();

        // put the record into scanned state first
        db::checkin::attempt_check_in(&db, &alice.id, None)
            .await
            .unwrap();

        let resp = app
            .oneshot(json_req(
                "PUT",
                &format!("/api/attendees/{}", alice.id),
                json!({ "name": "Alice B.", "district": "South" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["data"]["name"], "Alice B.");
        assert_eq!(json["data"]["district"], "South");
        // untouched descriptive field survives
        assert_eq!(json["data"]["title"], "Chair");
        // check-in state is not reset by edits
        assert_eq!(json["data"]["scanned"], true);
        assert_eq!(json["data"]["scannedTimes"], 1);
    }

    #[tokio::test]
    async fn update_unknown_attendee_is_not_found() {
        let (app, _db) = make_test_app().await;

        let resp = app
            .oneshot(json_req(
                "PUT",
                "/api/attendees/missing-id",
                json!({ "name": "Nobody" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_attendee_then_checkin_fails() {
        let (app, db) = make_test_app().await;
        let alice = AttendeeModel::create(&db, "Alice", None, None, None)
            .await
            .unwrap();

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/attendees/{}", alice.id))
                    .body(AxumBody::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        // the badge no longer resolves
        let resp = app
            .oneshot(json_req("POST", "/api/checkin", json!({ "id": alice.id })))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_unknown_attendee_is_not_found() {
        let (app, _db) = make_test_app().await;

        let resp = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/attendees/missing-id")
                    .body(AxumBody::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
