//! Service Preparation Pattern
//!
//! Loads a configuration, builds a service context from it, then runs a user
//! lookup against that context and maps the outcome to an HTTP-like response.
//!
//! Run with: cargo run --example service

use chain_rail::prelude::*;

/// Stands in for the process environment.
fn environment() -> Record<&'static str> {
    record! { "DATABASE_URL" => "postgres://localhost:5432" }
}

#[derive(Debug)]
struct HttpResponse {
    status: u16,
    body: Option<String>,
}

impl HttpResponse {
    fn new(status: u16, body: Option<String>) -> Self {
        Self { status, body }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ServiceError {
    ConfigurationMissing(&'static str),
    MissingData { entity: &'static str, id: String },
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::ConfigurationMissing(field) => write!(f, "configuration missing: {field}"),
            ServiceError::MissingData { entity, id } => write!(f, "missing data: {entity} with id {id}"),
        }
    }
}

impl std::error::Error for ServiceError {}

#[derive(Debug, Clone)]
struct Configuration {
    database_url: String,
}

#[derive(Debug, Clone)]
struct User {
    id: &'static str,
    name: &'static str,
}

#[derive(Debug, Clone)]
struct DatabaseClient {
    url: String,
}

impl DatabaseClient {
    fn new(url: String) -> Self {
        Self { url }
    }

    fn get_user(&self, id: &str) -> Settled<User, ServiceError> {
        match id {
            "alice" => succeed(User { id: "alice", name: "Alice" }),
            _ => fail(ServiceError::MissingData { entity: "User", id: id.to_owned() }),
        }
    }
}

#[derive(Debug, Clone)]
struct ServiceContext {
    database: DatabaseClient,
}

async fn load_configuration(env: Record<&'static str>) -> Outcome<Configuration, ServiceError> {
    prepare::<(), Record<&'static str>, ServiceError>()
        .add_data(|(), env| match env.get("DATABASE_URL") {
            Some(url) => succeed(Configuration { database_url: url.to_string() }),
            None => fail(ServiceError::ConfigurationMissing("DATABASE_URL")),
        })
        .run_async((), env)
        .await
}

async fn create_context(configuration: Configuration) -> Outcome<ServiceContext, ServiceError> {
    prepare::<(), Configuration, ServiceError>()
        .add_data(|(), configuration| {
            succeed(ServiceContext { database: DatabaseClient::new(configuration.database_url) })
        })
        .run_async((), configuration)
        .await
}

async fn api_like(env: Record<&'static str>, user_id: &'static str) -> HttpResponse {
    let configuration = match load_configuration(env).await {
        Ok(configuration) => configuration,
        Err(error) => {
            eprintln!("{error}");
            return HttpResponse::new(500, None);
        },
    };

    let context = match create_context(configuration).await {
        Ok(context) => context,
        Err(error) => {
            eprintln!("unexpected error while preparing context: {error}");
            return HttpResponse::new(500, None);
        },
    };
    println!("connected to {}", context.database.url);

    let user = start_in(user_id, context)
        .on_success(|id, context| context.database.get_user(id))
        .await;

    match user {
        Ok(user) => HttpResponse::new(200, Some(format!(r#"{{"id":"{}","name":"{}"}}"#, user.id, user.name))),
        Err(_) => HttpResponse::new(404, Some("User not found".to_owned())),
    }
}

#[tokio::main]
async fn main() {
    for (env, user_id) in [(environment(), "alice"), (environment(), "bob"), (Record::new(), "alice")] {
        let response = api_like(env, user_id).await;
        println!("{user_id}: {} {}", response.status, response.body.as_deref().unwrap_or(""));
    }
}
