use std::env;

mod config;

fn main() {
    let args: Vec<String> = env::args().collect();
    let cfg = config::load(&args);
    if cfg.verbose {
        println!("verbose mode");
    }
    println!("{}", cfg.name);
}
