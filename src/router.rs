use crate::backend::BackendClient;
use crate::domain::{filter_properties, Category, CoordinateSearch, FilterCriteria};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::store::PropertyStore;
use crate::templates;
use crate::transfer::{execute_transfer, TransferRequest};
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, store: &PropertyStore, backend: &BackendClient) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page(store.len())),

        ("GET", "/api/properties") => {
            let params = parse_query(&req);
            let criteria = criteria_from_params(&params)?;
            let results = filter_properties(&store.snapshot(), &criteria);
            json_response(&results)
        }

        // Re-fetch the full list from the backend. On failure the handler
        // errors out and the previously loaded list stays in place.
        ("POST", "/api/reload") => {
            let summary = store.reload(backend)?;
            json_response(&serde_json::json!({
                "loaded": summary.loaded,
                "rejected": summary.rejected,
            }))
        }

        ("POST", "/api/transfers") => {
            let request: TransferRequest = serde_json::from_reader(req.into_body().reader())
                .map_err(|e| ServerError::BadRequest(format!("Invalid transfer body: {e}")))?;
            let receipt = execute_transfer(store, backend, &request)?;
            json_response(&receipt)
        }

        ("GET", _) if path.starts_with("/api/properties/") => {
            let id = path.trim_start_matches("/api/properties/");
            let record = store.get(id).ok_or(ServerError::NotFound)?;
            json_response(&record)
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Builds the filter criteria from query parameters. `category` and `q` are
/// optional and default to "show everything"; the proximity parameters come
/// as a unit and are validated here so the filter engine can assume
/// well-formed numbers.
fn criteria_from_params(params: &HashMap<String, String>) -> Result<FilterCriteria, ServerError> {
    let category = params
        .get("category")
        .map(|id| Category::from_id(id))
        .unwrap_or(Category::Recent);

    let query = params.get("q").cloned().unwrap_or_default();

    let lat = params.get("lat");
    let lng = params.get("lng");
    let radius = params.get("radius");

    let coordinate_search = match (lat, lng, radius) {
        (None, None, None) => None,
        (Some(lat), Some(lng), Some(radius)) => {
            let lat = parse_float_param("lat", lat)?;
            let lng = parse_float_param("lng", lng)?;
            let radius = parse_float_param("radius", radius)?;
            if radius < 0.0 {
                return Err(ServerError::BadRequest(
                    "radius must be non-negative".to_string(),
                ));
            }
            Some(CoordinateSearch {
                lat,
                lng,
                radius_miles: radius,
            })
        }
        _ => {
            return Err(ServerError::BadRequest(
                "lat, lng and radius must be given together".to_string(),
            ))
        }
    };

    Ok(FilterCriteria {
        category,
        query,
        coordinate_search,
    })
}

fn parse_float_param(name: &str, value: &str) -> Result<f64, ServerError> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("{name} is not a number: '{value}'")))?;
    if !parsed.is_finite() {
        return Err(ServerError::BadRequest(format!(
            "{name} must be finite: '{value}'"
        )));
    }
    Ok(parsed)
}

/// Free-text searches arrive with '+' and %XX escapes; form_urlencoded
/// handles both.
fn parse_query(req: &astra::Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in url::form_urlencoded::parse(q.as_bytes()) {
            map.insert(k.into_owned(), v.into_owned());
        }
    }

    map
}
