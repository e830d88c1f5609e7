use log::info;
use stepchain_rust::config::{init_dotenv, DemoConfig};
use stepchain_rust::demo::{render_report, run_scenario};

fn main() {
    // Cargar .env si existe
    init_dotenv();

    // CLI mínima: `stepchain-demo [TEXTO_FIJO]`
    let cfg = match DemoConfig::from_env() {
        Ok(c) => c.with_args(std::env::args().skip(1)),
        Err(e) => {
            eprintln!("[stepchain-demo] {e}");
            std::process::exit(e.exit_code());
        }
    };
    info!("stepchain-demo: {cfg:?}");

    match run_scenario(&cfg).and_then(|r| render_report(&r)) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("[stepchain-demo] {e}");
            std::process::exit(e.exit_code());
        }
    }
}
