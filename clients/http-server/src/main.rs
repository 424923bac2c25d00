use actix_cors::Cors;
use actix_web::{
    middleware::{self, Condition},
    web, App, HttpServer,
};
use clap::Parser;
use database::{
    controller::rookies::RookiesController,
    store::{
        options::StoreOptions,
        store::{InMemoryPersonStore, PersonStore},
    },
};
use num_format::{Locale, ToFormattedString};
use std::{io, sync::Arc};

mod routes;

/// 📀 Rookies HTTP Server, manages person records held in memory
#[derive(Parser, Debug)]
struct Cli {
    /// Port the http server will run on
    #[clap(short, long, default_value = "9000")]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Logs every http request
    #[clap(long)]
    log_http: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,

    /// Starts with an empty store instead of the seed record
    #[clap(long)]
    no_seed: bool,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let store_options = StoreOptions::default().set_seed(!args.no_seed);

    let store: Arc<dyn PersonStore> = Arc::new(InMemoryPersonStore::new(store_options));

    log::info!(
        "📀 Data [Rows: {}]",
        store
            .list(None, None)
            .count_total
            .to_formatted_string(&Locale::en)
    );

    // Shared by every worker, the store is the only synchronisation point
    let controller = web::Data::new(RookiesController::new(store));

    log::info!("starting HTTP server on port {}.", args.port);

    log::info!(
        "Rookies listing: http://{}:{}/nashtech/rookies",
        args.address,
        args.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(controller.clone())
            .configure(routes::configure)
            .wrap(Cors::permissive())
            .wrap(Condition::new(args.log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
