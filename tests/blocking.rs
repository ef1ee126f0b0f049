use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use sensibo::blocking::Client;
use sensibo::{AcState, Config, Error, Mode};
use serde_json::json;

fn client(server: &ServerGuard) -> Client {
    Client::with_config(Config::new("k3y").with_base_url(server.url())).unwrap()
}

#[test]
fn list_pods() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/users/me/pods")
        .match_query(Matcher::Regex("^fields=id,room&apiKey=k3y$".to_string()))
        .with_status(200)
        .with_body(r#"{"result":[{"id":"abc","room":{"name":"Lounge"}}]}"#)
        .create();

    let pods = client(&server).list_pods().unwrap();

    assert_eq!(pods.result.len(), 1);
    assert_eq!(pods.result[0].id, "abc");
    mock.assert();
}

#[test]
fn not_found() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/pods/gone/acStates")
        .match_query(Matcher::Any)
        .with_status(404)
        .create();

    let err = client(&server).pod_status("gone").unwrap_err();

    assert!(matches!(err, Error::Status { status: 404 }), "{:?}", err);
}

#[test]
fn set_pod_status() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/pods/abc/acStates")
        .match_query(Matcher::Regex("^apiKey=k3y$".to_string()))
        .match_header("content-type", "application/json; charset=utf-8")
        .match_body(Matcher::PartialJson(json!({"acState": {"on": false}})))
        .with_status(200)
        .with_body(r#"{"status":"success","result":{"status":"Success"}}"#)
        .create();

    let target = AcState {
        on: false,
        mode: Some(Mode::Fan),
        ..AcState::default()
    };
    let result = client(&server).set_pod_status("abc", &target).unwrap();

    assert!(result.is_success());
    mock.assert();
}

#[test]
fn malformed_measurements() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/pods/abc/measurements")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"result":"#)
        .create();

    let err = client(&server).pod_measurements("abc").unwrap_err();

    assert!(matches!(err, Error::Decode(_)), "{:?}", err);
}

#[test]
fn shared_between_threads() {
    let mut server = Server::new();
    let mut mocks = Vec::new();
    for (id, temp) in [("left", 19), ("right", 25)] {
        mocks.push(
            server
                .mock("GET", format!("/pods/{}/acStates", id).as_str())
                .match_query(Matcher::Any)
                .with_status(200)
                .with_body(
                    json!({"result": [{"acState": {"on": true, "targetTemperature": temp}}]})
                        .to_string(),
                )
                .create(),
        );
    }

    let client = client(&server);
    let (left, right) = thread::scope(|s| {
        let left = s.spawn(|| client.pod_status("left"));
        let right = s.spawn(|| client.pod_status("right"));
        (left.join().unwrap(), right.join().unwrap())
    });

    let temp = |status: sensibo::Result<sensibo::AcStatus>| {
        status.unwrap().latest().unwrap().ac_state.target_temperature
    };
    assert_eq!(temp(left), Some(19));
    assert_eq!(temp(right), Some(25));
    for mock in mocks {
        mock.assert();
    }
}

/// Answers every request with `body` over a keep-alive connection, then hangs
/// up once the connection has been idle for 50ms.
fn serve_closing_idle(listener: TcpListener, body: &'static str) {
    for stream in listener.incoming() {
        let stream = match stream {
            Ok(stream) => stream,
            Err(_) => return,
        };
        thread::spawn(move || serve_connection(stream, body));
    }
}

fn serve_connection(mut stream: TcpStream, body: &str) -> std::io::Result<()> {
    stream.set_read_timeout(Some(Duration::from_millis(50)))?;
    let mut reader = BufReader::new(stream.try_clone()?);
    loop {
        let mut line = String::new();
        loop {
            line.clear();
            // eof or idle timeout: drop the socket
            if reader.read_line(&mut line)? == 0 {
                return Ok(());
            }
            if line == "\r\n" {
                break;
            }
        }
        write!(
            stream,
            "HTTP/1.1 200 OK\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: keep-alive\r\n\r\n{}",
            body.len(),
            body
        )?;
        stream.flush()?;
    }
}

#[test]
fn survives_server_closing_idle_connections() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    thread::spawn(move || {
        serve_closing_idle(listener, r#"{"result":[{"id":"abc","room":{"name":"Lounge"}}]}"#)
    });

    let client = Client::with_config(Config::new("k3y").with_base_url(url)).unwrap();
    for call in 0..6 {
        let pods = client
            .list_pods()
            .unwrap_or_else(|e| panic!("call {} failed: {:?}", call, e));
        assert_eq!(pods.result[0].id, "abc");
        thread::sleep(Duration::from_millis(200));
    }
}
