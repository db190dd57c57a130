// Copyright © 2025 Akira Miyakoda
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::collections::HashMap;

use anyhow::anyhow;
use axum::{
    Json, Router,
    extract::Path,
    http::{Method, StatusCode, Uri},
    routing::get,
};
use log::{error, info};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::{
    almanac::{self, Almanac},
    query::ParsedQuery,
};

#[derive(Debug, Clone, Copy, Serialize)]
enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "KO")]
    Ko,
}

// Failure responses carry an empty object, not null.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
enum Results {
    Almanac(Almanac),
    Empty {},
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Envelope {
    status: Status,
    message: String,
    results: Results,
}

impl Envelope {
    fn ok(almanac: Almanac) -> Self {
        Self {
            status: Status::Ok,
            message: String::new(),
            results: Results::Almanac(almanac),
        }
    }

    fn ko(message: String) -> Self {
        Self {
            status: Status::Ko,
            message,
            results: Results::Empty {},
        }
    }
}

pub(crate) async fn serve(port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {port}");

    let app = Router::new().route("/json/{lat}/{lng}/{date}", get(get_almanac));
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow!("Axum error: {e:?}"))
}

async fn get_almanac(
    method: Method,
    uri: Uri,
    Path(params): Path<HashMap<String, String>>,
) -> (StatusCode, Json<Envelope>) {
    info!("{method} {uri}");

    let query = ParsedQuery::parse(
        params.get("lat").map(String::as_str),
        params.get("lng").map(String::as_str),
        params.get("date").map(String::as_str),
    );

    match query {
        Ok(query) => {
            let almanac = almanac::compute(query.date, query.latitude, query.longitude);
            info!("200 OK");
            (StatusCode::OK, Json(Envelope::ok(almanac)))
        }
        Err(e) => {
            error!("400 KO: {e}");
            (StatusCode::BAD_REQUEST, Json(Envelope::ko(e.to_string())))
        }
    }
}
