use selection::config::Config;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // args[0] is the name of program.
    let args: Vec<String> = env::args().skip(1).collect();
    let config = Config::from_args(args).map_err(|e| e.to_string())?;

    let sorted = config
        .sorter()
        .sort(&config.values)
        .map_err(|e| e.to_string())?;
    sorted.log_report();

    let report = sorted.report();
    println!("Unsorted array = {:?}", config.values);
    println!("Sorted array = {:?}\n", sorted.elements);
    println!("{}\n", report);
    report
        .to_json()
        .map(|json| println!("{}", json))
        .map_err(|e| e.to_string())
}
