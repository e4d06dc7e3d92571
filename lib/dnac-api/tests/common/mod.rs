use rstest::fixture;
use tracing::info;

mod mock_controller;
pub use self::mock_controller::*;

pub fn init_tracing() {
    // another test may already have installed the subscriber
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

#[fixture]
pub async fn controller() -> MockController {
    init_tracing();
    match MockController::start().await {
        Ok(controller) => controller,
        Err(error) => {
            panic!("fail to start mock controller: {error:?}");
        }
    }
}
