use crate::backend::BackendClient;
use crate::router::handle;
use crate::store::PropertyStore;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod backend;
mod domain;
mod errors;
mod geo;
mod responses;
mod router;
mod store;
mod templates;
mod transfer;

#[cfg(test)]
mod tests;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:4000/api";

fn main() {
    let addr_text = std::env::var("LANDLIST_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let backend_url =
        std::env::var("LANDLIST_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

    // 1️⃣ Create the backend client
    let backend = match BackendClient::new(&backend_url) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ Bad backend configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the initial property list. A failed fetch is not fatal: the
    // server starts with an empty list and /api/reload retries later.
    let store = Arc::new(PropertyStore::new());
    if let Err(e) = store.reload(&backend) {
        eprintln!("⚠️ Initial property load failed: {e}");
    }

    // 3️⃣ Start the server
    let addr: SocketAddr = match addr_text.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Bad listen address '{addr_text}': {e}");
            std::process::exit(1);
        }
    };
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing the store and backend into the closure
    let result = server.serve(move |req, _info| match handle(req, &store, &backend) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
