//! Browser tests for the site runtime: reveals, page transitions and the
//! simulated contact form.
//!
//! Run with: `cargo test --test browser_site -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::io::{Read as _, Write as _};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Duration;

// ===========================================================================
// Minimal HTTP server (pages link /style.*.css and /site.*.js absolutely)
// ===========================================================================

struct TestServer {
    port: u16,
    _stop: std::sync::mpsc::Sender<()>,
}

impl TestServer {
    fn start(root: PathBuf) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = std::sync::mpsc::channel::<()>();

        thread::spawn(move || {
            listener.set_nonblocking(true).unwrap();
            loop {
                if rx.try_recv().is_ok() {
                    break;
                }
                match listener.accept() {
                    Ok((stream, _)) => {
                        let root = root.clone();
                        thread::spawn(move || serve_request(stream, &root));
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Self { port, _stop: tx }
    }

    fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }
}

fn serve_request(mut stream: std::net::TcpStream, root: &Path) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(n) if n > 0 => n,
        _ => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request.split_whitespace().nth(1).unwrap_or("/");
    let mut file_path = root.join(path.trim_start_matches('/'));
    if file_path.is_dir() {
        file_path = file_path.join("index.html");
    }

    let (status, body, ct) = if file_path.is_file() {
        let body = std::fs::read(&file_path).unwrap_or_default();
        let ct = match file_path.extension().and_then(|e| e.to_str()).unwrap_or("") {
            "html" => "text/html; charset=utf-8",
            "js" => "application/javascript",
            "css" => "text/css",
            "json" => "application/json",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        };
        ("200 OK", body, ct)
    } else {
        ("404 Not Found", b"Not Found".to_vec(), "text/plain")
    };

    let header = format!(
        "HTTP/1.1 {status}\r\n\
         Content-Type: {ct}\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n",
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&body);
}

// ===========================================================================
// Setup helpers
// ===========================================================================

const LATENCY_MS: u64 = 300;
const SUCCESS_MS: u64 = 600;

fn work_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("browser-site")
}

fn generated_dir() -> PathBuf {
    work_dir().join("dist")
}

/// Build once per test binary, with a short contact-form timing.
fn ensure_site_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let source = work_dir().join("site");
        if work_dir().exists() {
            std::fs::remove_dir_all(work_dir()).expect("failed to clean work dir");
        }
        std::fs::create_dir_all(&source).unwrap();
        std::fs::write(
            source.join("config.toml"),
            format!("[contact]\nlatency_ms = {LATENCY_MS}\nsuccess_display_ms = {SUCCESS_MS}\n"),
        )
        .unwrap();

        let status = Command::new(env!("CARGO_BIN_EXE_sackhe-site"))
            .args([
                "build",
                "--source",
                source.to_str().unwrap(),
                "--output",
                generated_dir().to_str().unwrap(),
            ])
            .status()
            .expect("failed to run sackhe-site");
        assert!(status.success(), "site generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn server() -> &'static TestServer {
    static S: OnceLock<TestServer> = OnceLock::new();
    S.get_or_init(|| {
        ensure_site_built();
        TestServer::start(generated_dir())
    })
}

fn open(path: &str) -> Arc<Tab> {
    let tab = browser().new_tab().unwrap();
    tab.navigate_to(&server().url(path))
        .unwrap()
        .wait_until_navigated()
        .unwrap();
    tab
}

fn eval(tab: &Tab, js: &str) -> serde_json::Value {
    tab.evaluate(js, false)
        .unwrap()
        .value
        .unwrap_or(serde_json::Value::Null)
}

fn eval_bool(tab: &Tab, js: &str) -> bool {
    eval(tab, js).as_bool().unwrap_or(false)
}

fn eval_string(tab: &Tab, js: &str) -> String {
    eval(tab, js).as_str().unwrap_or_default().to_string()
}

fn sleep_ms(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}

// ===========================================================================
// Reveal
// ===========================================================================

#[test]
#[ignore]
fn hero_reveals_on_mount() {
    let tab = open("/");
    sleep_ms(300);
    assert!(eval_bool(
        &tab,
        r#"document.querySelector('[data-reveal="mount"]').classList.contains('is-revealed')"#
    ));
}

#[test]
#[ignore]
fn offscreen_section_reveals_when_scrolled_into_view() {
    let tab = open("/");
    sleep_ms(300);
    let last = r#"Array.from(document.querySelectorAll('[data-reveal="view"]')).pop()"#;
    assert!(!eval_bool(&tab, &format!("{last}.classList.contains('is-revealed')")));

    eval(&tab, &format!("{last}.scrollIntoView()"));
    sleep_ms(500);
    assert!(eval_bool(&tab, &format!("{last}.classList.contains('is-revealed')")));
}

#[test]
#[ignore]
fn revealed_section_stays_revealed_after_scrolling_away() {
    let tab = open("/about/");
    let last = r#"Array.from(document.querySelectorAll('[data-reveal="view"]')).pop()"#;
    eval(&tab, &format!("{last}.scrollIntoView()"));
    sleep_ms(500);
    eval(&tab, "window.scrollTo(0, 0)");
    sleep_ms(500);
    assert!(eval_bool(&tab, &format!("{last}.classList.contains('is-revealed')")));
}

#[test]
#[ignore]
fn stagger_children_reveal_with_their_parent() {
    let tab = open("/about/");
    let grid = r#"document.querySelector('[data-stagger]')"#;
    eval(&tab, &format!("{grid}.scrollIntoView()"));
    sleep_ms(500);
    let all_revealed = format!(
        "Array.from({grid}.querySelectorAll('[data-reveal-child]')).every(c => c.classList.contains('is-revealed'))"
    );
    assert!(eval_bool(&tab, &all_revealed));
}

// ===========================================================================
// Page transitions
// ===========================================================================

#[test]
#[ignore]
fn page_settles_after_enter() {
    let tab = open("/products/");
    sleep_ms(1000);
    assert!(eval_bool(
        &tab,
        "document.getElementById('page').classList.contains('is-settled')"
    ));
}

#[test]
#[ignore]
fn nav_link_navigates_to_route() {
    let tab = open("/");
    tab.wait_for_element(r#".site-nav a[href="/about/"]"#)
        .unwrap()
        .click()
        .unwrap();
    tab.wait_until_navigated().unwrap();
    sleep_ms(300);
    assert_eq!(eval_string(&tab, "location.pathname"), "/about/");
    assert_eq!(eval_string(&tab, "document.body.dataset.route"), "about");
}

#[test]
#[ignore]
fn sync_mode_paints_exit_before_leaving() {
    let tab = open("/");
    sleep_ms(1000);
    eval(
        &tab,
        r#"sessionStorage.removeItem('exitPainted');
           document.addEventListener('site:leave', () => {
               const page = document.getElementById('page');
               requestAnimationFrame(() => sessionStorage.setItem(
                   'exitPainted', String(page.classList.contains('is-exiting'))));
           })"#,
    );
    tab.wait_for_element(r#".site-nav a[href="/products/"]"#)
        .unwrap()
        .click()
        .unwrap();
    tab.wait_until_navigated().unwrap();
    sleep_ms(300);
    assert_eq!(eval_string(&tab, "location.pathname"), "/products/");
    assert_eq!(eval_string(&tab, "sessionStorage.getItem('exitPainted')"), "true");
}

#[test]
#[ignore]
fn link_to_current_page_is_ignored() {
    let tab = open("/services/");
    sleep_ms(1000);
    eval(&tab, r#"document.querySelector('.site-nav a[href="/services/"]').click()"#);
    sleep_ms(200);
    assert!(!eval_bool(
        &tab,
        "document.getElementById('page').classList.contains('is-exiting')"
    ));
}

// ===========================================================================
// Contact form
// ===========================================================================

fn fill(tab: &Tab, key: &str, value: &str) {
    eval(
        tab,
        &format!("document.getElementById('{key}').value = {}", serde_json::json!(value)),
    );
}

fn submit(tab: &Tab) {
    eval(tab, "document.getElementById('contact-form').requestSubmit()");
}

fn status(tab: &Tab) -> String {
    eval_string(tab, "document.getElementById('contact-form').dataset.status")
}

#[test]
#[ignore]
fn empty_submit_shows_errors_and_stays_idle() {
    let tab = open("/contact/");
    submit(&tab);
    assert_eq!(status(&tab), "idle");
    assert!(eval_bool(
        &tab,
        r#"document.querySelector('[data-field="name"]').classList.contains('has-error')"#
    ));
    assert!(!eval_bool(
        &tab,
        r#"document.querySelector('[data-field="phone"]').classList.contains('has-error')"#
    ));
}

#[test]
#[ignore]
fn submission_runs_pending_success_idle() {
    let tab = open("/contact/");
    fill(&tab, "name", "Asha Rao");
    fill(&tab, "email", "asha@example.org");
    fill(&tab, "message", "We need an incinerator for our campus.");
    submit(&tab);

    assert_eq!(status(&tab), "pending");
    assert_eq!(eval_string(&tab, "document.querySelector('.submit-label').textContent"), "Sending...");
    assert!(eval_bool(&tab, "document.querySelector('.submit').disabled"));

    sleep_ms(LATENCY_MS + 150);
    assert_eq!(status(&tab), "success");
    assert!(eval_bool(&tab, "!document.querySelector('.form-success').hidden"));
    assert_eq!(eval_string(&tab, "document.getElementById('name').value"), "");

    sleep_ms(SUCCESS_MS);
    assert_eq!(status(&tab), "idle");
    assert_eq!(
        eval_string(&tab, "document.querySelector('.submit-label').textContent"),
        "Send Message"
    );
}

#[test]
#[ignore]
fn invalid_email_is_rejected() {
    let tab = open("/contact/");
    fill(&tab, "name", "Asha Rao");
    fill(&tab, "email", "not-an-email");
    fill(&tab, "message", "Hello");
    submit(&tab);
    assert_eq!(status(&tab), "idle");
    assert!(eval_string(&tab, r#"document.querySelector('[data-field="email"] .field-error').textContent"#)
        .contains("valid email"));
}
