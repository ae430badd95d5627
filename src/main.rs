#![allow(non_snake_case)]

mod client;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use painttracker::server::{
            config::Config,
            model::app::{build_http_client, AppState},
            router, startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let session = startup::connect_to_session(&config).await?;
        let db = startup::connect_to_database(&config).await?;
        let http_client = build_http_client()?;

        tracing::info!("Starting server");

        let state = AppState {
            db,
            oauth: config.oauth,
            http_client,
        };

        let mut router = dioxus::server::router(client::App);
        let server_routes = router::routes().with_state(state).layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
