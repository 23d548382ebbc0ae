// Integration tests for people-picker
// HTTP tests run against a local wiremock server

use std::time::Duration;

use people_picker::app::update::{FetchResult, Flow, handle_key, poll_fetch, spawn_fetch};
use people_picker::app::{AppState, Keymap, LoadState, PickerConfig, Theme};
use people_picker::people::{FetchError, HttpPeopleSource, PeopleSource};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn placeholder_users() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona", "catchPhrase": "x", "bs": "y" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "address": {
                "street": "Victor Plains",
                "suite": "Suite 879",
                "city": "Wisokyburgh",
                "zipcode": "90566-7771",
                "geo": { "lat": "-43.9509", "lng": "-34.4618" }
            }
        },
        {
            "id": 3,
            "name": "Clementine Bauch",
            "address": {
                "street": "Douglas Extension",
                "suite": "Suite 847",
                "city": "McKenziehaven",
                "zipcode": "59590-4157",
                "geo": { "lat": "-68.6102", "lng": "-47.0653" }
            }
        },
        {
            "id": 4,
            "name": "Patricia Lebsack",
            "address": { "street": "Hoeger Mall", "suite": "Apt. 692", "city": "South Elvis", "zipcode": "53919-4257" }
        },
        {
            "id": 5,
            "name": "Chelsey Dietrich",
            "address": { "street": "Skiles Walks", "suite": "Suite 351", "city": "Roscoeview", "zipcode": "33263" }
        },
        {
            "id": 6,
            "name": "Mrs. Dennis Schulist",
            "address": { "street": "Norberto Crossing", "suite": "Apt. 950", "city": "South Christy", "zipcode": "23505-1337" }
        }
    ])
}

async fn serve(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

fn app() -> AppState {
    AppState::with_parts(&PickerConfig::default(), Theme::mocha(), Keymap::default())
}

#[tokio::test]
async fn http_source_decodes_people() {
    let server = serve(ResponseTemplate::new(200).set_body_json(placeholder_users())).await;
    let source = HttpPeopleSource::new(format!("{}/users", server.uri()));

    let people = source.fetch().await.expect("fetch");
    assert_eq!(people.len(), 6);
    assert_eq!(people[0].username, "Bret");
    assert_eq!(people[1].address.geo.lng, "-34.4618");
    // fields missing on the wire default
    assert_eq!(people[3].address.geo.lat, "");
}

#[tokio::test]
async fn http_source_maps_error_status() {
    let server = serve(ResponseTemplate::new(500)).await;
    let source = HttpPeopleSource::new(format!("{}/users", server.uri()));

    match source.fetch().await {
        Err(FetchError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/users"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn http_source_rejects_non_array_body() {
    let server = serve(ResponseTemplate::new(200).set_body_json(json!({ "users": [] }))).await;
    let source = HttpPeopleSource::new(format!("{}/users", server.uri()));

    assert!(matches!(source.fetch().await, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn http_source_reports_unreachable_host() {
    // Port 9 (discard) on localhost is almost never listening.
    let source = HttpPeopleSource::new("http://127.0.0.1:9/users");
    assert!(matches!(source.fetch().await, Err(FetchError::Transport(_))));
}

async fn wait_loaded(app: &mut AppState, rx: &mut tokio::sync::oneshot::Receiver<FetchResult>) {
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while !poll_fetch(app, rx) {
        assert!(std::time::Instant::now() < deadline, "fetch never completed");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_decorate_sort_select_show_address() {
    let server = serve(ResponseTemplate::new(200).set_body_json(placeholder_users())).await;
    let source = HttpPeopleSource::new(format!("{}/users", server.uri()));

    let mut app = app();
    assert!(app.is_loading());
    let mut rx = spawn_fetch(&tokio::runtime::Handle::current(), source);
    wait_loaded(&mut app, &mut rx).await;

    assert_eq!(app.load, LoadState::Ready);
    let labels: Vec<String> = app.people.iter().map(|p| p.label()).collect();
    assert_eq!(
        labels,
        [
            "Bauch Jr., Clementine",
            "Dietrich Jr., Chelsey",
            "Graham Jr., Leanne (Mr.)",
            "Howell, Ervin",
            "Lebsack, Patricia (Mr.)",
            "Schulist, Dennis (Mrs.)",
        ]
    );

    // search "leb", pick, then clear the search: selection and address stick
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    let press = |c| KeyEvent::new(c, KeyModifiers::NONE);
    handle_key(&mut app, press(KeyCode::Char('/')));
    for c in "leb".chars() {
        handle_key(&mut app, press(KeyCode::Char(c)));
    }
    assert_eq!(app.people.len(), 1);
    handle_key(&mut app, press(KeyCode::Enter));
    handle_key(&mut app, press(KeyCode::Esc));
    assert_eq!(app.people.len(), 6);

    let selected = app.selected_person().expect("selection");
    assert_eq!(selected.id, 4);
    assert_eq!(selected.address.street_line(), "Hoeger Mall, Apt. 692");
    assert_eq!(selected.address.city_line(), "South Elvis, 53919-4257");
    assert_eq!(app.highlighted, 4);

    assert_eq!(handle_key(&mut app, press(KeyCode::Char('q'))), Flow::Quit);
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_fetch_stops_loading_and_keeps_message() {
    let server = serve(ResponseTemplate::new(404)).await;
    let source = HttpPeopleSource::new(format!("{}/users", server.uri()));

    let mut app = app();
    let mut rx = spawn_fetch(&tokio::runtime::Handle::current(), source);
    wait_loaded(&mut app, &mut rx).await;

    assert!(!app.is_loading());
    match &app.load {
        LoadState::Failed(msg) => assert!(msg.contains("404"), "{msg}"),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(app.people.is_empty());
    assert!(app.selected_person().is_none());
}

#[test]
fn theme_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme.conf");
    let path = path.to_str().unwrap();
    let t = Theme::mocha();
    t.write_file(path).expect("write theme");
    assert_eq!(Theme::from_file(path), Some(t));
}
