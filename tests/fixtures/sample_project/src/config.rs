pub struct Config {
    pub name: String,
    pub verbose: bool,
}

pub fn load(args: &[String]) -> Config {
    let verbose = args.iter().any(|a| a == "-v");
    Config { name: "sample".to_string(), verbose }
}
