//! gallery - product gallery web app
//!
//! Fetches the catalog once, then filters, searches and reveals items
//! client-side.

fn main() {
    dioxus::launch(gallery_web::App);
}
