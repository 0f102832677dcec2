//! Minimal in-process HTTP server for exercising the client without a
//! real Nexus instance. Serves canned responses keyed by method + path
//! and captures every request for inspection.

use std::collections::{HashMap, VecDeque};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: u16,
    content_type: String,
    body: Vec<u8>,
}

type RouteKey = (String, String);

pub struct MockServer {
    pub url: String,
    routes: Arc<Mutex<HashMap<RouteKey, VecDeque<CannedResponse>>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    _handle: JoinHandle<()>,
}

impl MockServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let routes: Arc<Mutex<HashMap<RouteKey, VecDeque<CannedResponse>>>> =
            Arc::new(Mutex::new(HashMap::new()));
        let requests: Arc<Mutex<Vec<CapturedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let routes_clone = Arc::clone(&routes);
        let requests_clone = Arc::clone(&requests);
        let handle = std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };
                let routes = Arc::clone(&routes_clone);
                let requests = Arc::clone(&requests_clone);
                std::thread::spawn(move || handle_connection(stream, &routes, &requests));
            }
        });

        MockServer {
            url,
            routes,
            requests,
            _handle: handle,
        }
    }

    /// Registers a JSON response. Registering the same method + path
    /// again queues a follow-up response; the final registration repeats
    /// for any further requests.
    pub fn route(&self, method: &str, path: &str, status: u16, body: &str) {
        self.route_bytes(method, path, status, "application/json", body.as_bytes());
    }

    pub fn route_bytes(
        &self,
        method: &str,
        path: &str,
        status: u16,
        content_type: &str,
        body: &[u8],
    ) {
        self.routes
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back(CannedResponse {
                status,
                content_type: content_type.to_string(),
                body: body.to_vec(),
            });
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Polls until at least `n` requests have been captured.
    pub fn wait_for(&self, n: usize) -> Vec<CapturedRequest> {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            let captured = self.requests();
            if captured.len() >= n || Instant::now() > deadline {
                return captured;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }
}

fn handle_connection(
    stream: std::net::TcpStream,
    routes: &Mutex<HashMap<RouteKey, VecDeque<CannedResponse>>>,
    requests: &Mutex<Vec<CapturedRequest>>,
) {
    let mut stream = stream;
    let mut reader = BufReader::new(stream.try_clone().unwrap());

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let parts: Vec<&str> = request_line.trim().splitn(3, ' ').collect();
    if parts.len() < 2 {
        return;
    }
    let method = parts[0].to_string();
    let target = parts[1].to_string();
    let (path, query) = match target.split_once('?') {
        Some((p, q)) => (p.to_string(), Some(q.to_string())),
        None => (target.clone(), None),
    };

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).is_err() || line.trim().is_empty() {
            break;
        }
        if let Some((k, v)) = line.trim().split_once(": ") {
            headers.insert(k.to_lowercase(), v.to_string());
        }
    }

    let body = read_body(&mut reader, &headers);

    requests.lock().unwrap().push(CapturedRequest {
        method: method.clone(),
        path: path.clone(),
        query,
        headers,
        body,
    });

    let response = {
        let mut routes = routes.lock().unwrap();
        match routes.get_mut(&(method, path)) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if queue.len() == 1 => queue.front().unwrap().clone(),
            _ => CannedResponse {
                status: 404,
                content_type: "application/json".to_string(),
                body: Vec::new(),
            },
        }
    };

    let head = format!(
        "HTTP/1.1 {} X\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.content_type,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
    let _ = stream.flush();
}

fn read_body(reader: &mut impl BufRead, headers: &HashMap<String, String>) -> Vec<u8> {
    if headers
        .get("transfer-encoding")
        .is_some_and(|v| v.eq_ignore_ascii_case("chunked"))
    {
        let mut body = Vec::new();
        loop {
            let mut size_line = String::new();
            if reader.read_line(&mut size_line).is_err() {
                break;
            }
            let Ok(size) = usize::from_str_radix(size_line.trim(), 16) else {
                break;
            };
            if size == 0 {
                let mut trailer = String::new();
                let _ = reader.read_line(&mut trailer);
                break;
            }
            let mut chunk = vec![0u8; size];
            if reader.read_exact(&mut chunk).is_err() {
                break;
            }
            body.extend_from_slice(&chunk);
            let mut crlf = String::new();
            let _ = reader.read_line(&mut crlf);
        }
        return body;
    }

    let content_length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        let _ = reader.read_exact(&mut body);
    }
    body
}
