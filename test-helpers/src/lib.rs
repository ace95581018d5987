pub mod mock;

use std::path::PathBuf;
use std::sync::Once;

use api::store::CheckStore;
use api::{Config, build};
use jiff::{Span, Timestamp};
use payloads::responses::Check;
use payloads::{APIClient, CheckId, CodeState, PaymentState};
use uuid::Uuid;

static TRACING: Once = Once::new();

pub struct TestApp {
    pub port: u16,
    pub client: APIClient,
    pub store: CheckStore,
}

/// Start the api on an os-assigned port with an empty store.
pub async fn spawn_app() -> TestApp {
    spawn_app_inner(None).await
}

/// Like [`spawn_app`], with a directory of static assets mounted at the
/// root (for exercising the asset header policy).
pub async fn spawn_app_with_assets(assets_dir: PathBuf) -> TestApp {
    spawn_app_inner(Some(assets_dir)).await
}

async fn spawn_app_inner(assets_dir: Option<PathBuf>) -> TestApp {
    // Set TEST_LOG to see server output while debugging a test
    TRACING.call_once(|| {
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = api::telemetry::get_subscriber("debug".into());
            api::telemetry::init_subscriber(subscriber);
        }
    });

    let mut config = Config {
        ip: "127.0.0.1".to_string(),
        port: 0,
        allowed_origins: vec!["*".to_string()],
        assets_dir,
    };
    let store = CheckStore::default();
    let server =
        build(&mut config, store.clone()).expect("failed to bind test server");
    tokio::spawn(server);

    TestApp {
        port: config.port,
        client: APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            inner_client: reqwest::Client::new(),
        },
        store,
    }
}

/// A check report aged `days_ago`, unviewed, confirmed, and paid.
/// Adjust fields on the result for other states.
pub fn sample_check(plate: &str, model: &str, days_ago: i64) -> Check {
    Check {
        id: CheckId(Uuid::new_v4()),
        plate_number: plate.to_string(),
        vehicle_model: model.to_string(),
        viewed: false,
        code_state: CodeState::Confirmed,
        payment_state: PaymentState::Paid,
        created_at: Timestamp::now()
            .checked_sub(Span::new().hours(24 * days_ago))
            .expect("timestamp in range"),
    }
}
