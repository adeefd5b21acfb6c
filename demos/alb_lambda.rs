//! A Lambda-style handler demonstrating how to use the alb-router library.
//!
//! Reads one ALB event as JSON from stdin and prints the response envelope:
//!
//! ```text
//! echo '{"httpMethod":"GET","path":"/hello/bob","body":""}' | cargo run --example alb_lambda
//! ```

use std::io::Read;
use log::info;
use serde::Deserialize;
use serde_json::json;
use alb_router::{abort, response, Router};

#[derive(Deserialize)]
struct Update {
    first_name: String,
}

fn build_router() -> Result<Router, alb_router::Error> {
    let mut router = Router::new();

    router.route("/", &[], |_params, _request| Ok(response("Hello!")))?;

    router.route("/hello/<user>", &["GET"], |params, _request| {
        Ok(response(format!("Hello {}!", params["user"])))
    })?;

    router.route("/update/<user>", &["POST"], |params, request| {
        let update: Update = match request.json() {
            Ok(update) => update,
            Err(e) => return abort(400, format!("Invalid update: {e}")),
        };
        Ok(response(json!({
            "message": format!("Updated {}!", params["user"]),
            "first_name": update.first_name,
        })))
    })?;

    Ok(router)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let router = build_router()?;
    info!("Registered {} routes", router.len());

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let event: serde_json::Value = serde_json::from_str(&input)?;

    let result = router.process_alb_event(event);
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
