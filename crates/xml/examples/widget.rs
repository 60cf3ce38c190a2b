use bytes::Bytes;
use http::Request;
use http_body_util::Full;
use micro_xml::extract::Xml;
use micro_xml::BodyLimit;
use serde::Deserialize;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Deserialize, Debug)]
pub struct Widget {
    #[serde(rename = "@id")]
    id: u32,
    name: String,
}

fn request(content_type: &str, body: &'static str) -> Request<Full<Bytes>> {
    Request::builder()
        .method("POST")
        .uri("/widgets")
        .header(http::header::CONTENT_TYPE, content_type)
        .body(Full::new(Bytes::from_static(body.as_bytes())))
        .unwrap()
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let requests = [
        request("application/xml", r#"<widget id="1"><name>gear</name></widget>"#),
        request("application/vnd.custom+xml", ""),
        request("text/plain", "gear"),
        request("text/xml", "<widget><name>gear</widget>"),
    ];

    for request in requests {
        let content_type = request.headers()[http::header::CONTENT_TYPE].clone();
        match Xml::<Widget>::extract(request, BodyLimit::default()).await {
            Ok(Some(Xml(widget))) => info!(?content_type, id = widget.id, name = %widget.name, "read widget"),
            Ok(None) => info!(?content_type, "empty body"),
            Err(e) => warn!(?content_type, status = %e.status_code(), cause = %e, "rejected"),
        }
    }
}
