use crate::catalog::Category;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde_json::json;

const USERS: &[&str] = &["alice", "bob", "carol", "dave", "erin"];
const ENDPOINTS: &[&str] = &["/api/users", "/api/orders", "/api/items", "/api/health"];
const METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE"];
const API_STATUSES: &[u16] = &[200, 201, 400, 404];
const DATABASES: &[&str] = &["users_db", "orders_db", "auth_db", "analytics_db"];
const TABLES: &[&str] = &["accounts", "orders", "sessions", "audit"];
const PROCESSES: &[&str] = &["api-server", "worker", "scheduler", "indexer"];
const RULES: &[&str] = &[
    "repeated-auth-failures",
    "port-scan-detected",
    "geo-anomaly",
    "privilege-escalation",
];

/// Synthesizes the message body for one category.
///
/// Pure in its inputs: the same sequence of RNG draws and the same
/// `now` always produce a byte-identical message. Bodies are built with
/// `serde_json::json!`, so they are always valid nested JSON.
pub fn render(category: Category, rng: &mut impl Rng, now: DateTime<Utc>) -> String {
    match category {
        Category::LoginSuccess => {
            let body = json!({
                "user": pick(rng, USERS),
                "status": "success",
                "timestamp": iso(now),
            });
            format!("User login succeeded: {body}")
        }
        Category::LoginFailure => {
            let body = json!({
                "user": pick(rng, USERS),
                "error": "invalid credentials",
                "timestamp": iso(now),
            });
            format!("User login failed: {body}")
        }
        Category::ApiRequest => {
            let body = json!({
                "endpoint": pick(rng, ENDPOINTS),
                "method": pick(rng, METHODS),
                "status": pick(rng, API_STATUSES),
                "response_time": rng.gen_range(50..=500),
            });
            format!("API request processed: {body}")
        }
        Category::ApiThrottled => {
            let body = json!({
                "endpoint": pick(rng, ENDPOINTS),
                "client_id": format!("client-{:04}", rng.gen_range(1..=50)),
                "status": 429,
                "retry_after": rng.gen_range(1..=30),
            });
            format!("API request throttled: {body}")
        }
        Category::DbConnectionError => {
            let body = json!({
                "error": "connection timeout",
                "retry_count": rng.gen_range(1..=5),
                "database": pick(rng, DATABASES),
            });
            format!("Database connection error: {body}")
        }
        Category::DbSlowQuery => {
            let body = json!({
                "database": pick(rng, DATABASES),
                "table": pick(rng, TABLES),
                "duration_ms": rng.gen_range(200..=2000),
                "rows": rng.gen_range(1..=500),
            });
            format!("Slow database query: {body}")
        }
        Category::ResourcePressure => {
            let body = json!({
                "process": pick(rng, PROCESSES),
                "cpu_percent": rng.gen_range(70..=99),
                "memory_percent": rng.gen_range(70..=99),
            });
            format!("High resource usage: {body}")
        }
        Category::SecurityAlert => {
            let body = json!({
                "rule": pick(rng, RULES),
                "source_ip": random_ip(rng),
                "action": "blocked",
            });
            format!("Security alert raised: {body}")
        }
    }
}

fn iso(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, values: &'a [T]) -> &'a T {
    &values[rng.gen_range(0..values.len())]
}

fn random_ip(rng: &mut impl Rng) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..=223),
        rng.gen_range(0..=255),
        rng.gen_range(0..=255),
        rng.gen_range(1..=254)
    )
}
